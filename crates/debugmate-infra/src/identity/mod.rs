//! Identity provider integration.

pub mod http;

pub use http::HttpIdentityVerifier;

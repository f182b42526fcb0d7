//! System prompt composition.
//!
//! The system prompt is rebuilt deterministically from live project fields
//! on every provider call and always placed first in the message list. Two
//! variants exist: one for the initial exchange at project creation, one for
//! every later turn. Both must stay byte-stable for identical inputs.
//!
//! Credential fields contribute a presence line only; the values themselves
//! are never echoed into the prompt.

use debugmate_types::project::Project;

/// An unset or empty optional field counts as absent.
fn present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

fn app_url_or_na(app_url: Option<&str>) -> &str {
    match app_url {
        Some(url) if !url.is_empty() => url,
        _ => "N/A",
    }
}

/// System prompt for the initial exchange at project creation.
pub fn creation_prompt(project: &Project) -> String {
    let mut prompt = String::from("You are an AI assistant helping to debug a web application.\n");
    prompt.push_str(&format!("Repository URL: {}\n", project.repo_url));
    prompt.push_str(&format!(
        "App URL: {}\n",
        app_url_or_na(project.app_url.as_deref())
    ));
    if present(project.supabase_key.as_deref()) {
        prompt.push_str("A Supabase key was provided.\n");
    }
    if present(project.vercel_key.as_deref()) {
        prompt.push_str("A Vercel key was provided.\n");
    }
    if present(project.other_api_keys.as_deref()) {
        prompt.push_str("Other API keys were provided.\n");
    }
    prompt.push_str("Analyze the bug description and suggest fixes.");
    prompt
}

/// System prompt for every turn after the first, rebuilt from the project's
/// current fields rather than cached from creation time.
pub fn continuation_prompt(project: &Project) -> String {
    let mut prompt = String::from("You are an AI assistant helping debug a web app.\n");
    prompt.push_str(&format!("Repo URL: {}\n", project.repo_url));
    prompt.push_str(&format!(
        "App URL: {}\n",
        app_url_or_na(project.app_url.as_deref())
    ));
    if present(project.supabase_key.as_deref()) {
        prompt.push_str("Supabase key provided.\n");
    }
    if present(project.vercel_key.as_deref()) {
        prompt.push_str("Vercel key provided.\n");
    }
    if present(project.other_api_keys.as_deref()) {
        prompt.push_str("Other API keys provided.\n");
    }
    prompt.push_str("Continue the debugging conversation.");
    prompt
}

//! Provider utility functions

use crate::constants::ui::ERROR_PREVIEW_LENGTH;

/// Mask API key to prevent log leaks
///
/// # rule
/// - length > 8: display first 4 characters + `...` + last 4 characters
/// - length <= 8: display `****`
///
/// # Example
/// ```
/// use aicommit::llm::utils::mask_api_key;
///
/// assert_eq!(mask_api_key("sk-proj-abcdefgh"), "sk-p...efgh");
/// assert_eq!(mask_api_key("short"), "****");
/// assert_eq!(mask_api_key(""), "****");
/// ```
pub fn mask_api_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() > 8 {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    } else {
        "****".to_string()
    }
}

/// Shortens a raw response body for error messages.
pub fn preview(text: &str) -> String {
    if text.chars().count() <= ERROR_PREVIEW_LENGTH {
        return text.to_string();
    }
    let truncated: String = text.chars().take(ERROR_PREVIEW_LENGTH).collect();
    format!("{}...", truncated)
}

use dioxus::document::eval;

/// JS snippet writing `text` to the clipboard.
pub(super) fn clipboard_script(text: &str) -> String {
    let literal = serde_json::to_string(text).unwrap_or_else(|_| "\"\"".to_string());
    format!("navigator.clipboard.writeText({literal});")
}

pub(super) fn copy_to_clipboard(text: &str) {
    tracing::debug!(text, "copy to clipboard");
    let _ = eval(&clipboard_script(text));
}

//! Display text for the file-name label and the result panel.

#[cfg(test)]
#[path = "text_test.rs"]
mod text_test;

/// Label shown when the file input is empty.
pub const NO_FILE_SELECTED: &str = "NO FILE SELECTED";

/// Blocking alert shown when the form is submitted without a file.
pub const SELECT_FILE_FIRST: &str = "PLEASE SELECT A FILE FIRST";

/// Result text shown when the request could not complete.
pub const CONNECTION_FAILED: &str = "SYSTEM ERROR: CONNECTION FAILED";

/// Fallback when an error response carries no message.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Case-normalize a value for display.
#[must_use]
pub fn display_case(value: &str) -> String {
    value.to_uppercase()
}

/// File-name label for the current selection.
#[must_use]
pub fn file_label(name: Option<&str>) -> String {
    match name {
        Some(name) => format!("SELECTED: {}", display_case(name)),
        None => NO_FILE_SELECTED.to_owned(),
    }
}

/// Result text for an application-level failure.
#[must_use]
pub fn error_text(message: &str) -> String {
    format!("ERROR: {message}")
}

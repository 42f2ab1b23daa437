//! Visible page state.
//!
//! DESIGN
//! ======
//! `ViewState` is the single source of truth for what the host page shows.
//! The core mutates it; the browser bridge renders all of it after every
//! transition, so rendering is idempotent and never diffs.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use crate::util::text::NO_FILE_SELECTED;

/// Everything the controller drives on the host page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewState {
    /// Text of the file-name label.
    pub file_label: String,
    /// Source of the preview image, if one has been decoded.
    pub preview_src: Option<String>,
    pub preview_visible: bool,
    pub loading_visible: bool,
    pub result_visible: bool,
    /// Text inside the result panel.
    pub prediction_text: String,
    /// Whether the form's submit control accepts clicks.
    pub submit_enabled: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            file_label: NO_FILE_SELECTED.to_owned(),
            preview_src: None,
            preview_visible: false,
            loading_visible: false,
            result_visible: false,
            prediction_text: String::new(),
            submit_enabled: true,
        }
    }
}

impl ViewState {
    /// Hide the preview region and drop its image source.
    pub fn clear_preview(&mut self) {
        self.preview_src = None;
        self.preview_visible = false;
    }

    /// Show `text` in the result panel.
    pub fn show_result(&mut self, text: String) {
        self.prediction_text = text;
        self.result_visible = true;
    }
}

//! Upload-and-predict state machine.
//!
//! `ControllerCore` owns the [`ViewState`] and applies the two user-driven
//! operations to it: choosing a file and submitting the form. It never touches
//! the DOM or the network. Work that suspends (reading the file, posting the
//! form) is started by the caller with a ticket handed out here, and its
//! completion is fed back with that ticket.
//!
//! Tickets make completions order-independent. Nothing is cancelled, but a
//! decode that finishes after a newer selection is dropped instead of
//! overwriting the newer preview.
//!
//! Requests are not tied to a selection either: choosing another file while a
//! request is in flight updates the label and preview at once, and the earlier
//! file's result still lands in the result panel when it arrives.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use thiserror::Error;

use crate::net::types::PredictOutcome;
use crate::preview::{PreviewError, PreviewImage};
use crate::util::text::{SELECT_FILE_FIRST, file_label};
use crate::view::ViewState;

/// Metadata of the file currently chosen in the file input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
    /// Browser-reported MIME type; empty when unknown.
    pub mime: String,
}

/// Identifies one preview decode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodeTicket(u64);

/// Identifies one prediction request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// Why a submission did not start.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejected {
    #[error("no file selected")]
    NoFileSelected,
    #[error("a prediction request is already in flight")]
    InFlight,
}

impl SubmitRejected {
    /// Blocking notification to show the user, if any.
    #[must_use]
    pub fn alert_message(self) -> Option<&'static str> {
        match self {
            Self::NoFileSelected => Some(SELECT_FILE_FIRST),
            Self::InFlight => None,
        }
    }
}

#[derive(Debug, Default)]
pub struct ControllerCore {
    view: ViewState,
    selected: Option<SelectedFile>,
    selection_seq: u64,
    request_seq: u64,
    in_flight: Option<u64>,
}

impl ControllerCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Apply a file-selection change.
    ///
    /// With a file, returns the ticket for the preview decode the caller must
    /// start; the stale result panel is hidden right away. Without a file, the
    /// label falls back to the sentinel and the preview is hidden.
    pub fn select(&mut self, file: Option<SelectedFile>) -> Option<DecodeTicket> {
        self.selection_seq += 1;
        self.view.file_label = file_label(file.as_ref().map(|f| f.name.as_str()));

        match file {
            Some(file) => {
                log::debug!("selected {} ({} bytes, {:?})", file.name, file.size, file.mime);
                self.view.result_visible = false;
                self.selected = Some(file);
                Some(DecodeTicket(self.selection_seq))
            }
            None => {
                log::debug!("selection cleared");
                self.view.clear_preview();
                self.selected = None;
                None
            }
        }
    }

    /// Apply a finished preview decode. Returns `false` if the ticket is stale
    /// and nothing changed.
    ///
    /// A failed decode is not an error state: the preview reverts to hidden.
    pub fn finish_decode(
        &mut self,
        ticket: DecodeTicket,
        decoded: Result<PreviewImage, PreviewError>,
    ) -> bool {
        if ticket.0 != self.selection_seq || self.selected.is_none() {
            log::debug!("dropping stale preview decode {}", ticket.0);
            return false;
        }
        match decoded {
            Ok(image) => {
                self.view.preview_src = Some(image.url().to_owned());
                self.view.preview_visible = true;
            }
            Err(e) => {
                log::warn!("preview unavailable: {e}");
                self.view.clear_preview();
            }
        }
        true
    }

    /// Start a submission.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitRejected::NoFileSelected`] when no file is chosen and
    /// [`SubmitRejected::InFlight`] while an earlier request is outstanding.
    /// The view is untouched in both cases.
    pub fn begin_submit(&mut self) -> Result<RequestTicket, SubmitRejected> {
        if self.in_flight.is_some() {
            return Err(SubmitRejected::InFlight);
        }
        let Some(file) = &self.selected else {
            return Err(SubmitRejected::NoFileSelected);
        };
        log::info!("submitting {} for prediction", file.name);

        self.request_seq += 1;
        self.in_flight = Some(self.request_seq);
        self.view.loading_visible = true;
        self.view.result_visible = false;
        self.view.submit_enabled = false;
        Ok(RequestTicket(self.request_seq))
    }

    /// Apply the outcome of a request. Returns `false` for an unknown ticket.
    pub fn finish_submit(&mut self, ticket: RequestTicket, outcome: &PredictOutcome) -> bool {
        if self.in_flight != Some(ticket.0) {
            log::debug!("ignoring completion for request {}", ticket.0);
            return false;
        }
        match outcome {
            PredictOutcome::Label(label) => log::info!("prediction: {label}"),
            PredictOutcome::Rejected { status, message } => {
                log::warn!("prediction rejected ({status}): {message}");
            }
            PredictOutcome::TransportFailed { reason } => log::error!("prediction failed: {reason}"),
        }

        self.in_flight = None;
        self.view.show_result(outcome.display_text());
        self.view.loading_visible = false;
        self.view.submit_enabled = true;
        true
    }
}

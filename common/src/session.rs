//! The personalizer view-state machine
//!
//! `Session` is the single source of truth for which screen is active and
//! which images are held. The UI owns exactly one `Session`, renders from
//! read-only access, and mutates it only through the operations here.
//!
//! Asynchronous generation is split in two: `begin_generation` transitions
//! into `Processing` synchronously and issues a [`GenerationTicket`];
//! `finish_generation` applies the completion later. Every mutation that
//! can orphan an in-flight call (`submit_image`, `begin_generation`,
//! `reset`) advances the session epoch, so a completion arriving after a
//! reset or a replacement upload is discarded instead of clobbering newer
//! state. Applying a completion advances the epoch as well, so any given
//! ticket applies at most once.

use crate::error::GenerateError;
use crate::generate::{PersonalizeRequest, PersonalizeResponse, GENERATION_FAILED_MESSAGE};
use crate::payload::ImagePayload;

/// The single active screen/mode of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    #[default]
    Upload,
    Processing,
    Output,
    Error,
}

/// Identity token for one generation request.
///
/// Carries the epoch observed when the request was issued and the image to
/// send; `finish_generation` only applies completions whose epoch still
/// matches the session's.
#[derive(Debug, Clone)]
pub struct GenerationTicket {
    epoch: u64,
    image: ImagePayload,
}

impl GenerationTicket {
    /// The request body for this generation call.
    pub fn request(&self) -> PersonalizeRequest {
        PersonalizeRequest::from_payload(&self.image)
    }
}

/// The view-state machine.
#[derive(Debug, Clone, Default)]
pub struct Session {
    state: AppState,
    uploaded: Option<ImagePayload>,
    generated: Option<ImagePayload>,
    error_message: String,
    epoch: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> AppState {
        self.state
    }

    pub fn uploaded_image(&self) -> Option<&ImagePayload> {
        self.uploaded.as_ref()
    }

    pub fn generated_image(&self) -> Option<&ImagePayload> {
        self.generated.as_ref()
    }

    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    /// Whether the generate action is available.
    pub fn can_generate(&self) -> bool {
        self.uploaded.is_some()
    }

    /// Store a validated image and return to the upload screen.
    ///
    /// Valid in any state; used both for the initial upload and for
    /// "Change Photo". Replaces any previous upload and discards a
    /// generated result or error left over from an earlier attempt.
    pub fn submit_image(&mut self, payload: ImagePayload) {
        self.epoch += 1;
        self.uploaded = Some(payload);
        self.generated = None;
        self.error_message.clear();
        self.state = AppState::Upload;
    }

    /// Move to `Processing` and issue the ticket for the asynchronous
    /// generation call.
    ///
    /// Returns `None` without changing anything when no image has been
    /// uploaded. Calling again while a call is in flight is allowed: the
    /// new ticket supersedes the old one, whose completion becomes stale.
    pub fn begin_generation(&mut self) -> Option<GenerationTicket> {
        let image = self.uploaded.clone()?;
        self.epoch += 1;
        self.state = AppState::Processing;
        Some(GenerationTicket {
            epoch: self.epoch,
            image,
        })
    }

    /// Apply a generation completion.
    ///
    /// Returns `false` when the ticket is stale (the session moved on since
    /// the request was issued); the completion is then discarded with no
    /// state change. Applying advances the epoch, so each ticket applies at
    /// most once. A successful response whose image does not parse as a
    /// payload counts as a failure.
    pub fn finish_generation(
        &mut self,
        ticket: GenerationTicket,
        outcome: Result<PersonalizeResponse, GenerateError>,
    ) -> bool {
        if ticket.epoch != self.epoch {
            return false;
        }
        // A live ticket implies no operation ran since begin_generation.
        debug_assert_eq!(self.state, AppState::Processing);
        // A duplicate of this ticket must not apply again.
        self.epoch += 1;

        let parsed = outcome.and_then(|response| {
            ImagePayload::from_data_url(response.illustrated_image)
                .map_err(|e| GenerateError::InvalidResponse(e.to_string()))
        });
        match parsed {
            Ok(image) => {
                self.generated = Some(image);
                self.state = AppState::Output;
            }
            Err(_) => {
                self.error_message = GENERATION_FAILED_MESSAGE.to_string();
                self.state = AppState::Error;
            }
        }
        true
    }

    /// Clear everything and return to the upload screen. Valid in any
    /// state.
    pub fn reset(&mut self) {
        self.epoch += 1;
        self.uploaded = None;
        self.generated = None;
        self.error_message.clear();
        self.state = AppState::Upload;
    }
}

//! The view-session state machine.
//!
//! The page's transient state -- selected image, loading flag, last
//! error, last response -- lives in one immutable value object advanced
//! by [`Session::apply`]. The UI layer owns a single signal holding the
//! current [`Session`] and renders purely from it; every transition
//! rule is encoded (and unit-tested) here rather than scattered across
//! event handlers.
//!
//! The machine is `idle -> loading -> {success, failure} -> idle`.
//! `loading` is only entered from idle with an image selected, which is
//! what keeps at most one prediction request in flight.

use crate::image::SelectedImage;
use crate::response::PredictionResponse;

/// Immutable snapshot of the page's transient state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    image: Option<SelectedImage>,
    loading: bool,
    error: Option<String>,
    response: Option<PredictionResponse>,
}

/// Events that advance a [`Session`].
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// A valid image was chosen. Replaces any previous selection and
    /// clears stale results.
    ImageSelected(SelectedImage),
    /// The user submitted the selected image for prediction.
    RequestStarted,
    /// The prediction request resolved with a decoded response.
    RequestSucceeded(PredictionResponse),
    /// The prediction request failed; the payload is the user-facing
    /// message.
    RequestFailed(String),
    /// The user cleared the page.
    Reset,
}

impl Session {
    /// The currently selected image, if any.
    #[must_use]
    pub const fn image(&self) -> Option<&SelectedImage> {
        self.image.as_ref()
    }

    /// Whether a prediction request is in flight.
    #[must_use]
    pub const fn loading(&self) -> bool {
        self.loading
    }

    /// The last failure message, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The last prediction response, if any.
    #[must_use]
    pub const fn response(&self) -> Option<&PredictionResponse> {
        self.response.as_ref()
    }

    /// Whether a submit would actually start a request: an image is
    /// selected and none is already in flight.
    #[must_use]
    pub const fn can_submit(&self) -> bool {
        self.image.is_some() && !self.loading
    }

    /// Advance the session by one event, returning the next state.
    ///
    /// [`SessionEvent::RequestStarted`] is a no-op unless
    /// [`can_submit`](Self::can_submit) holds, so submitting with no
    /// image (or while loading) changes nothing.
    #[must_use]
    pub fn apply(mut self, event: SessionEvent) -> Self {
        match event {
            SessionEvent::ImageSelected(image) => {
                self.image = Some(image);
                self.response = None;
                self.error = None;
                self
            }
            SessionEvent::RequestStarted => {
                if !self.can_submit() {
                    return self;
                }
                self.loading = true;
                self.error = None;
                self
            }
            SessionEvent::RequestSucceeded(response) => {
                self.loading = false;
                self.error = None;
                self.response = Some(response);
                self
            }
            SessionEvent::RequestFailed(message) => {
                self.loading = false;
                self.response = None;
                self.error = Some(message);
                self
            }
            SessionEvent::Reset => Self::default(),
        }
    }
}

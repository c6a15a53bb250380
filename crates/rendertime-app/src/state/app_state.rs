use rendertime_core::{RenderEstimate, ValidationError};

use crate::state::InputField;

pub(crate) type EstimateOutcome = Result<RenderEstimate, ValidationError>;

// AppState holds the form contents and the latest outcome. The inputs are persisted for resume.
#[derive(Debug, Default)]
pub(crate) struct AppState {
    pub(crate) frames_input: String,
    pub(crate) seconds_input: String,
    pub(crate) outcome: Option<EstimateOutcome>,
    dirty: bool,
}

impl AppState {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub(crate) fn from_inputs(frames_input: String, seconds_input: String) -> Self {
        Self {
            frames_input,
            seconds_input,
            outcome: None,
            dirty: false,
        }
    }

    #[must_use]
    pub(crate) fn input(&self, field: InputField) -> &str {
        match field {
            InputField::Frames => &self.frames_input,
            InputField::Seconds => &self.seconds_input,
        }
    }

    pub(crate) fn set_input(&mut self, field: InputField, text: String) {
        let slot = match field {
            InputField::Frames => &mut self.frames_input,
            InputField::Seconds => &mut self.seconds_input,
        };
        if *slot != text {
            *slot = text;
            self.dirty = true;
        }
    }

    pub(crate) fn clear_inputs(&mut self) {
        if !self.frames_input.is_empty() || !self.seconds_input.is_empty() {
            self.dirty = true;
        }
        self.frames_input.clear();
        self.seconds_input.clear();
        self.outcome = None;
    }

    #[must_use]
    pub(crate) fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub(crate) fn clear_dirty(&mut self) {
        self.dirty = false;
    }
}

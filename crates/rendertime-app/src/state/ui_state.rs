use crate::state::InputField;

// UiState holds ephemeral UI-only state (focus, exit request). It is not persisted.
#[derive(Debug)]
pub(crate) struct UiState {
    pub(crate) focus_request: Option<InputField>,
    pub(crate) exit_requested: bool,
}

impl UiState {
    /// Start-up state: keyboard focus goes to the frames field.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            focus_request: Some(InputField::Frames),
            exit_requested: false,
        }
    }
}

use std::mem;

use crate::state::InputField;

pub(crate) mod handler;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Action {
    SetInput { field: InputField, text: String },
    Calculate,
    ClearInputs,
    FocusHandled,
    Exit,
}

#[derive(Debug, Default)]
pub(crate) struct ActionRequestQueue {
    actions: Vec<Action>,
}

impl ActionRequestQueue {
    pub(crate) fn request(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub(crate) fn take_all(&mut self) -> Vec<Action> {
        mem::take(&mut self.actions)
    }
}

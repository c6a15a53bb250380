pub(crate) use self::{app_state::*, ui_state::*};

mod app_state;
mod ui_state;

/// One of the two text inputs of the calculator form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub(crate) enum InputField {
    #[display("Number of Frames")]
    Frames,
    #[display("Seconds per Frame")]
    Seconds,
}

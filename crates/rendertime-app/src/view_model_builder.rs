use crate::{
    state::{AppState, EstimateOutcome, UiState},
    ui::{
        calculator_screen::CalculatorScreenViewModel, input_form::InputFormViewModel,
        results::ResultsViewModel,
    },
};

#[must_use]
pub(crate) fn build_input_form_vm(app_state: &AppState, ui_state: &UiState) -> InputFormViewModel {
    InputFormViewModel::new(
        app_state.frames_input.clone(),
        app_state.seconds_input.clone(),
        ui_state.focus_request,
    )
}

#[must_use]
pub(crate) fn build_results_vm(outcome: Option<&EstimateOutcome>) -> ResultsViewModel {
    match outcome {
        None => ResultsViewModel::Empty,
        Some(Ok(estimate)) => ResultsViewModel::Estimate {
            report: estimate.to_string(),
        },
        Some(Err(err)) => ResultsViewModel::Error {
            message: err.message(),
            detail: err.detail().map(|detail| detail.to_string()),
        },
    }
}

#[must_use]
pub(crate) fn build_calculator_screen_vm(
    app_state: &AppState,
    ui_state: &UiState,
) -> CalculatorScreenViewModel {
    CalculatorScreenViewModel::new(
        build_input_form_vm(app_state, ui_state),
        build_results_vm(app_state.outcome.as_ref()),
    )
}

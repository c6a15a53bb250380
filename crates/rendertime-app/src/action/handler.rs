use rendertime_core::{Clock, RenderTimeCalculator};

use crate::{
    action::{Action, ActionRequestQueue},
    state::{AppState, InputField, UiState},
};

pub(crate) fn handle_all<C>(
    app_state: &mut AppState,
    ui_state: &mut UiState,
    action_queue: &mut ActionRequestQueue,
    calculator: &RenderTimeCalculator<C>,
) where
    C: Clock,
{
    for action in action_queue.take_all() {
        handle(app_state, ui_state, action, calculator);
    }
}

pub(crate) fn handle<C>(
    app_state: &mut AppState,
    ui_state: &mut UiState,
    action: Action,
    calculator: &RenderTimeCalculator<C>,
) where
    C: Clock,
{
    match action {
        Action::SetInput { field, text } => {
            log::trace!("{field} input changed: {text:?}");
            app_state.set_input(field, text);
        }
        Action::Calculate => {
            let outcome = calculator.estimate(
                app_state.input(InputField::Frames),
                app_state.input(InputField::Seconds),
            );
            match &outcome {
                Ok(estimate) => log::debug!(
                    "estimated {} frames x {}s = {}s, finish at {}",
                    estimate.frame_count(),
                    estimate.seconds_per_frame(),
                    estimate.total_seconds(),
                    estimate.finish()
                ),
                Err(err) => log::debug!("estimate rejected: {err:?}"),
            }
            app_state.outcome = Some(outcome);
        }
        Action::ClearInputs => {
            app_state.clear_inputs();
            ui_state.focus_request = Some(InputField::Frames);
        }
        Action::FocusHandled => ui_state.focus_request = None,
        Action::Exit => {
            log::info!("exit requested");
            ui_state.exit_requested = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use rendertime_core::{FixedClock, ValidationError};

    use super::*;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    fn calculator() -> RenderTimeCalculator<FixedClock> {
        RenderTimeCalculator::new(FixedClock::new(now()))
    }

    fn set_input(field: InputField, text: &str) -> Action {
        Action::SetInput {
            field,
            text: text.to_owned(),
        }
    }

    #[test]
    fn calculate_uses_latest_inputs() {
        let mut app_state = AppState::new();
        let mut ui_state = UiState::new();
        let mut queue = ActionRequestQueue::default();
        queue.request(set_input(InputField::Frames, "24"));
        queue.request(set_input(InputField::Seconds, "1.5"));
        queue.request(Action::Calculate);

        handle_all(&mut app_state, &mut ui_state, &mut queue, &calculator());

        assert!(app_state.is_dirty());
        let estimate = app_state.outcome.unwrap().unwrap();
        assert_eq!(estimate.frame_count(), 24);
        assert_eq!(estimate.finish().to_string(), "2024-01-01 10:00:36");
    }

    #[test]
    fn calculate_stores_validation_errors() {
        let mut app_state = AppState::from_inputs("24".to_owned(), String::new());
        let mut ui_state = UiState::new();

        handle(&mut app_state, &mut ui_state, Action::Calculate, &calculator());
        assert_eq!(app_state.outcome, Some(Err(ValidationError::MissingInput)));

        handle(
            &mut app_state,
            &mut ui_state,
            set_input(InputField::Seconds, "0"),
            &calculator(),
        );
        // Editing does not discard the previous outcome.
        assert_eq!(app_state.outcome, Some(Err(ValidationError::MissingInput)));

        handle(&mut app_state, &mut ui_state, Action::Calculate, &calculator());
        assert_eq!(
            app_state.outcome,
            Some(Err(ValidationError::InvalidSecondsPerFrame))
        );
    }

    #[test]
    fn clear_inputs_requests_focus_on_frames() {
        let mut app_state = AppState::from_inputs("24".to_owned(), "2".to_owned());
        let mut ui_state = UiState::new();
        handle(&mut app_state, &mut ui_state, Action::FocusHandled, &calculator());
        assert_eq!(ui_state.focus_request, None);

        handle(&mut app_state, &mut ui_state, Action::ClearInputs, &calculator());
        assert_eq!(app_state.input(InputField::Frames), "");
        assert_eq!(app_state.input(InputField::Seconds), "");
        assert_eq!(ui_state.focus_request, Some(InputField::Frames));
    }

    #[test]
    fn exit_sets_flag() {
        let mut app_state = AppState::new();
        let mut ui_state = UiState::new();
        assert!(!ui_state.exit_requested);

        handle(&mut app_state, &mut ui_state, Action::Exit, &calculator());
        assert!(ui_state.exit_requested);
    }
}

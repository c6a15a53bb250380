//! Render time calculator desktop application UI.
//!
//! # Design Notes
//! - A single form: frame count and seconds per frame on the left, results on the right.
//! - Widgets only enqueue [`Action`]s; all state changes happen in the action handler.
//! - The calculation itself lives in `rendertime_core` and never touches UI state.
//!
//! [`Action`]: crate::action::Action

use std::time::Duration;

use eframe::{
    App, CreationContext, Frame, Storage,
    egui::{CentralPanel, Context, ViewportCommand},
};
use rendertime_core::{Clock, LocalClock, RenderTimeCalculator};

use crate::{
    action::{self, ActionRequestQueue},
    persistence::storage,
    state::{AppState, UiState},
    ui, view_model_builder,
};

#[derive(Debug)]
pub struct RenderTimeApp {
    app_state: AppState,
    ui_state: UiState,
    calculator: RenderTimeCalculator<LocalClock>,
}

impl RenderTimeApp {
    pub fn new(cc: &CreationContext<'_>) -> Self {
        let restored = cc.storage.and_then(storage::load_state);
        ui::theme::install(&cc.egui_ctx, restored.is_none());
        Self {
            app_state: restored.unwrap_or_else(AppState::new),
            ui_state: UiState::new(),
            calculator: RenderTimeCalculator::new(LocalClock),
        }
    }

    fn apply_persistence(&mut self, frame: &mut Frame) {
        if self.app_state.is_dirty()
            && let Some(storage) = frame.storage_mut()
        {
            self.save(storage);
            self.app_state.clear_dirty();
        }
    }
}

impl App for RenderTimeApp {
    fn save(&mut self, storage: &mut dyn Storage) {
        storage::save_state(storage, &self.app_state);
    }

    fn auto_save_interval(&self) -> Duration {
        Duration::from_secs(30)
    }

    fn update(&mut self, ctx: &Context, frame: &mut Frame) {
        run_frame(ctx, &mut self.app_state, &mut self.ui_state, &self.calculator);

        if self.ui_state.exit_requested {
            ctx.send_viewport_cmd(ViewportCommand::Close);
        }

        self.apply_persistence(frame);
    }
}

fn run_frame<C>(
    ctx: &Context,
    app_state: &mut AppState,
    ui_state: &mut UiState,
    calculator: &RenderTimeCalculator<C>,
) where
    C: Clock,
{
    let mut action_queue = ActionRequestQueue::default();

    // Shortcut keys must be consumed before the text fields are drawn.
    ctx.input_mut(|i| {
        ui::input::handle_input(i, &mut action_queue);
        action::handler::handle_all(app_state, ui_state, &mut action_queue, calculator);
    });

    let screen_vm = view_model_builder::build_calculator_screen_vm(app_state, ui_state);

    CentralPanel::default().show(ctx, |ui| {
        ui::calculator_screen::show(ui, &screen_vm, &mut action_queue);
    });

    action::handler::handle_all(app_state, ui_state, &mut action_queue, calculator);
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use eframe::egui::{Event, Key, Modifiers, RawInput};
    use rendertime_core::FixedClock;

    use super::*;
    use crate::state::InputField;

    struct Harness {
        ctx: Context,
        app_state: AppState,
        ui_state: UiState,
        calculator: RenderTimeCalculator<FixedClock>,
    }

    impl Harness {
        fn new(frames: &str, seconds: &str) -> Self {
            let now = NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap();
            Self {
                ctx: Context::default(),
                app_state: AppState::from_inputs(frames.to_owned(), seconds.to_owned()),
                ui_state: UiState::new(),
                calculator: RenderTimeCalculator::new(FixedClock::new(now)),
            }
        }

        fn frame(&mut self, events: Vec<Event>) {
            let raw_input = RawInput {
                events,
                ..RawInput::default()
            };
            let _ = self.ctx.run(raw_input, |ctx| {
                run_frame(
                    ctx,
                    &mut self.app_state,
                    &mut self.ui_state,
                    &self.calculator,
                );
            });
        }
    }

    fn key(key: Key, modifiers: Modifiers) -> Event {
        Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers,
        }
    }

    #[test]
    fn clear_shortcut_empties_focused_field() {
        let mut harness = Harness::new("24*60", "1.5");
        for _ in 0..3 {
            harness.frame(Vec::new());
        }
        assert_eq!(harness.ui_state.focus_request, None);

        harness.frame(vec![key(Key::Backspace, Modifiers::COMMAND)]);
        harness.frame(Vec::new());

        assert_eq!(harness.app_state.input(InputField::Frames), "");
        assert_eq!(harness.app_state.input(InputField::Seconds), "");
    }

    #[test]
    fn exit_shortcut_sets_flag() {
        let mut harness = Harness::new("24", "1");
        harness.frame(Vec::new());
        harness.frame(vec![key(Key::Q, Modifiers::COMMAND)]);

        assert!(harness.ui_state.exit_requested);
        assert_eq!(harness.app_state.input(InputField::Frames), "24");
    }
}

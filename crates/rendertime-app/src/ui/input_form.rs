use eframe::egui::{Button, Key, TextEdit, Ui};

use crate::{
    action::{Action, ActionRequestQueue},
    state::InputField,
};

const FIELD_WIDTH: f32 = 220.0;

#[derive(Debug, Clone)]
pub struct InputFormViewModel {
    frames_input: String,
    seconds_input: String,
    focus_request: Option<InputField>,
}

impl InputFormViewModel {
    #[must_use]
    pub(crate) fn new(
        frames_input: String,
        seconds_input: String,
        focus_request: Option<InputField>,
    ) -> Self {
        Self {
            frames_input,
            seconds_input,
            focus_request,
        }
    }

    #[must_use]
    pub(crate) fn input(&self, field: InputField) -> &str {
        match field {
            InputField::Frames => &self.frames_input,
            InputField::Seconds => &self.seconds_input,
        }
    }

    #[must_use]
    pub(crate) fn focus_request(&self) -> Option<InputField> {
        self.focus_request
    }
}

fn hint(field: InputField) -> &'static str {
    match field {
        InputField::Frames => "e.g. 240 or 24*60",
        InputField::Seconds => "e.g. 1.5",
    }
}

pub fn show(ui: &mut Ui, vm: &InputFormViewModel, action_queue: &mut ActionRequestQueue) {
    ui.vertical(|ui| {
        for field in [InputField::Frames, InputField::Seconds] {
            ui.label(format!("{field}:"));
            let mut text = vm.input(field).to_owned();
            let response = ui.add(
                TextEdit::singleline(&mut text)
                    .desired_width(FIELD_WIDTH)
                    .hint_text(hint(field)),
            );
            if response.changed() {
                action_queue.request(Action::SetInput { field, text });
            }
            if response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                action_queue.request(Action::Calculate);
            }
            if vm.focus_request() == Some(field) {
                response.request_focus();
                action_queue.request(Action::FocusHandled);
            }
            ui.add_space(10.0);
        }

        ui.horizontal(|ui| {
            if ui.add(Button::new("Calculate")).clicked() {
                action_queue.request(Action::Calculate);
            }
            if ui
                .add(Button::new("Clear"))
                .on_hover_text("Clear both inputs")
                .clicked()
            {
                action_queue.request(Action::ClearInputs);
            }
            if ui.add(Button::new("Exit")).clicked() {
                action_queue.request(Action::Exit);
            }
        });
    });
}

use eframe::egui::Ui;
use egui_extras::{Size, StripBuilder};

use super::{input_form, results};
use crate::{
    action::ActionRequestQueue,
    ui::{input_form::InputFormViewModel, results::ResultsViewModel},
};

#[derive(Debug, Clone)]
pub struct CalculatorScreenViewModel {
    pub input_form_vm: InputFormViewModel,
    pub results_vm: ResultsViewModel,
}

impl CalculatorScreenViewModel {
    pub fn new(input_form_vm: InputFormViewModel, results_vm: ResultsViewModel) -> Self {
        Self {
            input_form_vm,
            results_vm,
        }
    }
}

pub fn show(ui: &mut Ui, vm: &CalculatorScreenViewModel, action_queue: &mut ActionRequestQueue) {
    let spacing = ui.spacing().item_spacing;

    StripBuilder::new(ui)
        .size(Size::exact(240.0))
        .size(Size::exact(spacing.x * 2.0))
        .size(Size::remainder().at_least(200.0))
        .horizontal(|mut strip| {
            strip.cell(|ui| {
                input_form::show(ui, &vm.input_form_vm, action_queue);
            });
            strip.empty();
            strip.cell(|ui| {
                results::show(ui, &vm.results_vm);
            });
        });
}

use eframe::egui::{RichText, Ui};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsViewModel {
    Empty,
    Estimate {
        report: String,
    },
    Error {
        message: &'static str,
        detail: Option<String>,
    },
}

pub fn show(ui: &mut Ui, vm: &ResultsViewModel) {
    ui.group(|ui| {
        ui.set_min_width(ui.available_width());
        ui.label(RichText::new("Results").strong());
        ui.separator();
        match vm {
            ResultsViewModel::Empty => {
                ui.label(RichText::new("Enter both values and press Calculate.").weak());
            }
            ResultsViewModel::Estimate { report } => {
                ui.label(report);
            }
            ResultsViewModel::Error { message, detail } => {
                let color = ui.visuals().error_fg_color;
                ui.label(RichText::new(*message).color(color));
                if let Some(detail) = detail {
                    ui.label(RichText::new(detail).small().weak());
                }
            }
        }
    });
}

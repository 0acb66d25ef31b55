use eframe::egui;

use super::theme::Theme;

/// Confirmation dialog before throwing away the current session's records.
pub struct ResetSessionModal {
    open: bool,
    record_count: usize,
}

impl ResetSessionModal {
    pub fn new() -> Self {
        Self { open: false, record_count: 0 }
    }

    pub fn open_confirm(&mut self, record_count: usize) {
        self.record_count = record_count;
        self.open = true;
    }

    /// Some(true) when the user confirmed, Some(false) on cancel, None while
    /// the dialog is still open or was never opened.
    pub fn show(&mut self, ctx: &egui::Context, theme: &Theme) -> Option<bool> {
        if !self.open {
            return None;
        }

        let mut result: Option<bool> = None;

        let modal = egui::Modal::new(egui::Id::new("reset_session_modal")).show(ctx, |ui| {
            ui.set_width(400.0);

            ui.add_space(10.0);

            let entries = match self.record_count {
                1 => "the care entry".to_string(),
                n => format!("all {} care entries", n),
            };

            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("⚠").size(24.0).color(theme.yellow(ctx)));
                ui.label(
                    egui::RichText::new(format!(
                        "Start a new session? This discards {} recorded so far.",
                        entries
                    ))
                    .size(14.0),
                );
            });

            ui.add_space(15.0);

            ui.horizontal(|ui| {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Start New Session").clicked() {
                        result = Some(true);
                        ui.close();
                    }

                    if ui.button("Cancel").clicked() {
                        result = Some(false);
                        ui.close();
                    }
                });
            });
        });

        if modal.should_close() {
            self.open = false;
        }

        result
    }
}

impl Default for ResetSessionModal {
    fn default() -> Self {
        Self::new()
    }
}

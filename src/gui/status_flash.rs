use std::time::{
    Duration,
    Instant,
};

use eframe::egui;

use super::theme::Theme;

const FLASH_DURATION: Duration = Duration::from_secs(4);

/// Short-lived success message shown under the add-plant form. Clears itself
/// after a few seconds without blocking anything.
pub struct StatusFlash {
    message: Option<(String, Instant)>,
}

impl StatusFlash {
    pub fn new() -> Self {
        Self { message: None }
    }

    pub fn flash(&mut self, message: impl Into<String>) {
        self.message = Some((message.into(), Instant::now()));
    }

    pub fn clear(&mut self) {
        self.message = None;
    }

    pub fn show(&mut self, ui: &mut egui::Ui, theme: &Theme) {
        let Some((message, shown_at)) = self.message.clone() else {
            return;
        };

        let elapsed = shown_at.elapsed();
        if elapsed >= FLASH_DURATION {
            self.message = None;
            return;
        }

        ui.label(egui::RichText::new(message).color(theme.green(ui.ctx())));
        ui.ctx().request_repaint_after(FLASH_DURATION - elapsed);
    }
}

impl Default for StatusFlash {
    fn default() -> Self {
        Self::new()
    }
}

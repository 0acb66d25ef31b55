use eframe::egui::{
    self,
    containers,
};

pub enum TopBarAction {
    NewSession,
}

pub struct TopBar;

impl TopBar {
    pub fn show(ctx: &egui::Context, plant_count: usize, due_count: usize) -> Option<TopBarAction> {
        let mut action = None;

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            containers::menu::Bar::new().ui(ui, |ui| {
                egui::widgets::global_theme_preference_switch(ui);
                ui.menu_button("File", |ui| {
                    let new_session =
                        ui.add_enabled(plant_count > 0, egui::Button::new("New Session…"));
                    if new_session.clicked() {
                        action = Some(TopBarAction::NewSession);
                    }
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    Self::show_status_indicators(ui, plant_count, due_count);
                });
            });
        });

        action
    }

    fn show_status_indicators(ui: &mut egui::Ui, plant_count: usize, due_count: usize) {
        let due_color = if due_count > 0 {
            egui::Color32::from_rgb(200, 80, 80)
        } else {
            egui::Color32::from_rgb(0, 200, 0)
        };

        let due_tooltip = match due_count {
            0 => "Nothing needs watering today".to_string(),
            1 => "1 plant needs watering today".to_string(),
            n => format!("{} plants need watering today", n),
        };

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0;
            ui.small(format!("{} due", due_count)).on_hover_text(&due_tooltip);
            ui.small(egui::RichText::new("●").color(due_color)).on_hover_text(&due_tooltip);
        });

        ui.add_space(3.0);

        let tracked = match plant_count {
            1 => "1 plant tracked".to_string(),
            n => format!("{} plants tracked", n),
        };
        ui.small(tracked);
    }
}

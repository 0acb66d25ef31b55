use eframe::egui;
use egui_plot::{
    Bar,
    BarChart,
    Corner,
    GridMark,
    Legend,
    Plot,
};

use super::PlantBuddyApp;

// Paired bars share an x slot per record: actual shifted left, typical right.
const BAR_OFFSET: f64 = 0.2;
const BAR_WIDTH: f64 = 0.35;

pub fn ui_consumption_chart(ui: &mut egui::Ui, app: &PlantBuddyApp) {
    ui.heading(app.theme.heading(ui.ctx(), "Water Consumption Comparison"));
    ui.label(
        egui::RichText::new("Actual vs Typical Water Consumption")
            .color(app.theme.comment(ui.ctx())),
    );
    ui.add_space(4.0);

    let usage = app.care_log.water_usage();
    if usage.is_empty() {
        return;
    }

    let mut actual_bars = Vec::with_capacity(usage.len());
    let mut typical_bars = Vec::with_capacity(usage.len());

    for (index, sample) in usage.iter().enumerate() {
        let x = index as f64;
        actual_bars.push(
            Bar::new(x - BAR_OFFSET, f64::from(sample.amount_given))
                .width(BAR_WIDTH)
                .name(&sample.common_name),
        );
        typical_bars.push(
            Bar::new(x + BAR_OFFSET, f64::from(sample.typical_water))
                .width(BAR_WIDTH)
                .name(&sample.common_name),
        );
    }

    let actual = BarChart::new("Amount Given", actual_bars).color(app.theme.blue(ui.ctx()));
    let typical = BarChart::new("Typical Amount", typical_bars).color(app.theme.orange(ui.ctx()));

    let names: Vec<String> = usage.iter().map(|sample| sample.common_name.clone()).collect();
    let sample_count = names.len();

    Plot::new("water_consumption_chart")
        .legend(Legend::default().position(Corner::LeftTop))
        .height(280.0)
        .include_y(0.0)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .y_axis_label("Water Amount (ml)")
        .x_grid_spacer(move |input| {
            // One mark per record, nothing in between
            let (min, max) = input.bounds;
            let mut marks = Vec::new();
            let mut x = min.ceil().max(0.0);
            while x <= max && (x as usize) < sample_count {
                marks.push(GridMark { value: x, step_size: 1.0 });
                x += 1.0;
            }
            marks
        })
        .x_axis_formatter(move |mark, _range| {
            let index = mark.value.round() as isize;
            if index < 0 {
                return String::new();
            }
            names.get(index as usize).cloned().unwrap_or_default()
        })
        .label_formatter(|name, value| {
            if name.is_empty() {
                String::new()
            } else {
                format!("{}: {:.0} ml", name, value.y)
            }
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(actual);
            plot_ui.bar_chart(typical);
        });
}

use eframe::egui::{
    self,
    RichText,
};
use egui::{
    epaint::Shadow,
    style::{
        Selection,
        WidgetVisuals,
        Widgets,
    },
    Color32,
    Stroke,
    Visuals,
};

#[derive(Clone)]
pub struct Theme {
    dark: ThemeDetails,
    light: ThemeDetails,
}

impl Default for Theme {
    fn default() -> Self {
        Self::everforest()
    }
}

impl Theme {
    pub fn everforest() -> Self {
        Theme { dark: ThemeDetails::everforest_dark(), light: ThemeDetails::everforest_light() }
    }

    fn details(&self, ctx: &egui::Context) -> &ThemeDetails {
        match ctx.theme() {
            egui::Theme::Dark => &self.dark,
            egui::Theme::Light => &self.light,
        }
    }

    pub fn bold(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).color(self.details(ctx).orange)
    }

    pub fn heading(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).color(self.details(ctx).purple)
    }

    pub fn red(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).red
    }

    pub fn orange(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).orange
    }

    pub fn yellow(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).yellow
    }

    pub fn green(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).green
    }

    pub fn purple(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).purple
    }

    pub fn blue(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).blue
    }

    pub fn cyan(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).cyan
    }

    pub fn comment(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).comment
    }
}

#[derive(Clone)]
pub struct ThemeDetails {
    background: Color32,
    foreground: Color32,
    selection: Color32,
    comment: Color32,
    red: Color32,
    orange: Color32,
    yellow: Color32,
    green: Color32,
    purple: Color32,
    blue: Color32,
    cyan: Color32,
    background_darker: Color32,
    background_dark: Color32,
    background_light: Color32,
    background_lighter: Color32,
}

impl ThemeDetails {
    //Colors from:
    //https://github.com/sainnhe/everforest
    fn everforest_dark() -> Self {
        Self {
            background: Color32::from_rgb(0x2d, 0x35, 0x3b),
            foreground: Color32::from_rgb(0xd3, 0xc6, 0xaa),
            selection: Color32::from_rgb(0x47, 0x52, 0x58),
            comment: Color32::from_rgb(0x85, 0x92, 0x89),
            red: Color32::from_rgb(0xe6, 0x7e, 0x80),
            orange: Color32::from_rgb(0xe6, 0x98, 0x75),
            yellow: Color32::from_rgb(0xdb, 0xbc, 0x7f),
            green: Color32::from_rgb(0xa7, 0xc0, 0x80),
            purple: Color32::from_rgb(0xd6, 0x99, 0xb6),
            blue: Color32::from_rgb(0x7f, 0xbb, 0xb3),
            cyan: Color32::from_rgb(0x83, 0xc0, 0x92),
            background_darker: Color32::from_rgb(0x23, 0x2a, 0x2e),
            background_dark: Color32::from_rgb(0x27, 0x2e, 0x33),
            background_light: Color32::from_rgb(0x3d, 0x48, 0x4d),
            background_lighter: Color32::from_rgb(0x4f, 0x58, 0x5e),
        }
    }

    fn everforest_light() -> Self {
        Self {
            background: Color32::from_rgb(0xfd, 0xf6, 0xe3),
            foreground: Color32::from_rgb(0x5c, 0x6a, 0x72),
            selection: Color32::from_rgb(0xe6, 0xe2, 0xcc),
            comment: Color32::from_rgb(0x93, 0x9f, 0x91),
            red: Color32::from_rgb(0xf8, 0x55, 0x52),
            orange: Color32::from_rgb(0xf5, 0x7d, 0x26),
            yellow: Color32::from_rgb(0xdf, 0xa0, 0x00),
            green: Color32::from_rgb(0x8d, 0xa1, 0x01),
            purple: Color32::from_rgb(0xdf, 0x69, 0xba),
            blue: Color32::from_rgb(0x3a, 0x94, 0xc5),
            cyan: Color32::from_rgb(0x35, 0xa7, 0x7c),
            background_darker: Color32::from_rgb(0xe0, 0xdc, 0xc7),
            background_dark: Color32::from_rgb(0xef, 0xeb, 0xd4),
            background_light: Color32::from_rgb(0xf4, 0xf0, 0xd9),
            background_lighter: Color32::from_rgb(0xfd, 0xfa, 0xee),
        }
    }
}

pub fn set_theme(ctx: &egui::Context, theme: Theme) {
    set_theme_variant(ctx, &theme.dark, true);
    set_theme_variant(ctx, &theme.light, false);
}

pub fn blend_colors(color_a: Color32, color_b: Color32, t: f32) -> Color32 {
    let blend_channel = |a: u8, b: u8| ((1.0 - t) * (a as f32) + t * (b as f32)).round() as u8;
    Color32::from_rgba_unmultiplied(
        blend_channel(color_a.r(), color_b.r()),
        blend_channel(color_a.g(), color_b.g()),
        blend_channel(color_a.b(), color_b.b()),
        blend_channel(color_a.a(), color_b.a()),
    )
}

fn set_theme_variant(ctx: &egui::Context, theme: &ThemeDetails, is_dark: bool) {
    let (default, variant) = match is_dark {
        true => (Visuals::dark(), egui::Theme::Dark),
        false => (Visuals::light(), egui::Theme::Light),
    };

    ctx.set_visuals_of(
        variant,
        Visuals {
            dark_mode: is_dark,
            widgets: Widgets {
                noninteractive: WidgetVisuals {
                    bg_fill: theme.background,
                    weak_bg_fill: theme.background_lighter,
                    bg_stroke: Stroke {
                        color: theme.background_dark,
                        ..default.widgets.noninteractive.bg_stroke
                    },
                    fg_stroke: Stroke {
                        color: theme.foreground,
                        ..default.widgets.noninteractive.fg_stroke
                    },
                    ..default.widgets.noninteractive
                },
                inactive: WidgetVisuals {
                    bg_fill: theme.background_light,
                    weak_bg_fill: theme.background_lighter,
                    bg_stroke: Stroke {
                        color: theme.background_dark,
                        ..default.widgets.inactive.bg_stroke
                    },
                    fg_stroke: Stroke {
                        color: theme.foreground,
                        ..default.widgets.inactive.fg_stroke
                    },
                    ..default.widgets.inactive
                },
                hovered: WidgetVisuals {
                    bg_fill: theme.selection,
                    weak_bg_fill: theme.background_lighter,
                    bg_stroke: Stroke { color: theme.cyan, ..default.widgets.hovered.bg_stroke },
                    fg_stroke: Stroke {
                        color: theme.foreground,
                        ..default.widgets.hovered.fg_stroke
                    },
                    ..default.widgets.hovered
                },
                active: WidgetVisuals {
                    bg_fill: theme.selection,
                    weak_bg_fill: theme.background_light,
                    bg_stroke: Stroke { color: theme.cyan, ..default.widgets.active.bg_stroke },
                    fg_stroke: Stroke {
                        color: theme.foreground,
                        ..default.widgets.active.fg_stroke
                    },
                    ..default.widgets.active
                },
                open: WidgetVisuals {
                    bg_fill: theme.background_dark,
                    weak_bg_fill: theme.background_lighter,
                    bg_stroke: Stroke { color: theme.purple, ..default.widgets.open.bg_stroke },
                    fg_stroke: Stroke { color: theme.foreground, ..default.widgets.open.fg_stroke },
                    ..default.widgets.open
                },
            },
            selection: Selection {
                bg_fill: theme.selection,
                stroke: Stroke { color: theme.foreground, ..default.selection.stroke },
            },
            hyperlink_color: theme.cyan,
            faint_bg_color: match is_dark {
                true => theme.background_darker,
                false => theme.background_light,
            },
            extreme_bg_color: theme.background_darker,
            code_bg_color: theme.background_dark,
            error_fg_color: theme.red,
            warn_fg_color: theme.orange,
            window_shadow: Shadow { color: theme.background_darker, ..default.window_shadow },
            window_fill: theme.background,
            window_stroke: Stroke { color: theme.background_light, ..default.window_stroke },
            panel_fill: theme.background_dark,
            popup_shadow: Shadow { color: theme.background_dark, ..default.popup_shadow },
            collapsing_header_frame: true,
            ..default
        },
    );

    ctx.all_styles_mut(|style| {
        style.interaction.tooltip_delay = 0.0;
        style.interaction.show_tooltips_only_when_still = false;
    });
}

use eframe::egui;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark_mode(dark: bool) -> Self {
        if dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn apply(self, ctx: &egui::Context) {
        let visuals = match self {
            Self::Light => egui::Visuals::light(),
            Self::Dark => egui::Visuals::dark(),
        };
        ctx.set_visuals(visuals);
    }
}

// --- Sizing ---
pub const ROW_SPACING: f32 = 2.0;
pub const SECTION_INDENT: f32 = 16.0;

// --- Panel constraints ---
pub const SIDEBAR_MIN: f32 = 180.0;
pub const SIDEBAR_MAX: f32 = 500.0;

// --- Glyphs ---
pub const TOGGLE_EXPANDED: &str = "\u{23f7}";
pub const TOGGLE_COLLAPSED: &str = "\u{23f5}";

pub fn accent() -> egui::Color32 {
    egui::Color32::from_rgb(120, 180, 255)
}

/// Caption shown for an entry: section number followed by the label.
pub fn caption(number: Option<&str>, label: &str) -> String {
    match number {
        Some(number) => format!("{number} {label}"),
        None => label.to_string(),
    }
}

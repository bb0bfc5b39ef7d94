use crate::upload::StatusClass;
use eframe::egui::Color32;

const ERROR_COLOR: Color32 = Color32::from_rgb(220, 50, 50);
const SUCCESS_COLOR: Color32 = Color32::from_rgb(0, 180, 0);

/// Colour of the status line for each state; `None` keeps the theme's text colour.
pub fn status_color(class: StatusClass) -> Option<Color32> {
    match class {
        StatusClass::Neutral => None,
        StatusClass::Error => Some(ERROR_COLOR),
        StatusClass::Success => Some(SUCCESS_COLOR),
    }
}

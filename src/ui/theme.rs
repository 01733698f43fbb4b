// ServerLogs - ui/theme.rs
//
// Colour scheme, level colour mapping, and layout constants.
// No dependencies on app state or business logic.

use crate::core::model::LevelColour;
use egui::Color32;

/// Concrete colour for a level colour.
pub fn level_colour(colour: LevelColour) -> Color32 {
    match colour {
        LevelColour::Red => Color32::from_rgb(239, 68, 68),     // Red 500
        LevelColour::Yellow => Color32::from_rgb(234, 179, 8),  // Yellow 500
        LevelColour::Green => Color32::from_rgb(34, 197, 94),   // Green 500
        LevelColour::Gray => Color32::from_rgb(107, 114, 128),  // Gray 500
    }
}

/// Timestamp column colour.
pub const TIMESTAMP_TEXT: Color32 = Color32::from_rgb(107, 114, 128); // Gray 500

/// Message text colour: light on dark visuals, dark on light visuals.
pub fn row_text_colour(dark_mode: bool) -> Color32 {
    if dark_mode {
        Color32::from_rgb(209, 213, 219) // Gray 300
    } else {
        Color32::from_rgb(55, 65, 81) // Gray 700
    }
}

/// LIVE badge colour.
pub const LIVE_BADGE: Color32 = Color32::from_rgb(34, 197, 94); // Green 500

/// Layout constants.
pub const ROW_HEIGHT: f32 = 18.0;
pub const TIMESTAMP_COLUMN_CHARS: usize = 19;
pub const LEVEL_COLUMN_CHARS: usize = 8;
pub const LOG_FONT_SIZE: f32 = 12.0;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::display_colour_for;

    #[test]
    fn test_unknown_label_renders_gray() {
        assert_eq!(
            level_colour(display_colour_for("TRACE")),
            Color32::from_rgb(107, 114, 128)
        );
        assert_ne!(
            level_colour(display_colour_for("ERROR")),
            level_colour(display_colour_for("INFO"))
        );
    }
}

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::RowClassification;

// ---------------------------------------------------------------------------
// Classification fill colors
// ---------------------------------------------------------------------------

/// Dark enough that the default light text stays readable on top.
const FILL_SATURATION: f32 = 0.6;
const FILL_LIGHTNESS: f32 = 0.28;

fn fill_from_hue(hue: f32) -> Color32 {
    let hsl = Hsl::new(hue, FILL_SATURATION, FILL_LIGHTNESS);
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

/// Row background color for a classification: green for agreement, red for
/// full disagreement, orange for everything in between.
pub fn classification_fill(classification: RowClassification) -> Color32 {
    match classification {
        RowClassification::AllAgree => fill_from_hue(120.0),
        RowClassification::AllDisagree => fill_from_hue(0.0),
        RowClassification::Partial => fill_from_hue(30.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_classification_gets_a_distinct_fill() {
        let agree = classification_fill(RowClassification::AllAgree);
        let disagree = classification_fill(RowClassification::AllDisagree);
        let partial = classification_fill(RowClassification::Partial);

        assert_ne!(agree, disagree);
        assert_ne!(agree, partial);
        assert_ne!(disagree, partial);
    }
}

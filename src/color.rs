use std::collections::HashMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Fixed colours for risk styling
// ---------------------------------------------------------------------------

/// Background tint for rows with any risk reason.
pub const RISK_ROW_FILL: Color32 = Color32::from_rgba_premultiplied(90, 40, 20, 60);
/// Text colour for watch-listed identifiers.
pub const WATCH_LIST_TEXT: Color32 = Color32::from_rgb(220, 50, 47);
/// Fallback for categories outside the palette.
const OTHER_CATEGORY: Color32 = Color32::GRAY;

// ---------------------------------------------------------------------------
// Category palette for the summary chart
// ---------------------------------------------------------------------------

/// Evenly spaced hues, starting from a warm orange so the largest bucket
/// stands out.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    (0..n)
        .map(|i| {
            let hue = 30.0 + (i as f32 / n as f32) * 360.0;
            let rgb: Srgb = Hsl::new(hue, 0.65, 0.5).into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

/// Maps summary categories to distinct colours, in display order.
#[derive(Debug, Clone)]
pub struct CategoryPalette {
    mapping: HashMap<String, Color32>,
}

impl CategoryPalette {
    pub fn new<'a>(categories: impl IntoIterator<Item = &'a str>) -> Self {
        let labels: Vec<&str> = categories.into_iter().collect();
        let mapping = labels
            .iter()
            .zip(generate_palette(labels.len()))
            .map(|(label, color)| (label.to_string(), color))
            .collect();
        CategoryPalette { mapping }
    }

    pub fn color_for(&self, category: &str) -> Color32 {
        self.mapping.get(category).copied().unwrap_or(OTHER_CATEGORY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_get_distinct_colours() {
        let palette = CategoryPalette::new(["A", "B", "(empty)"]);
        let a = palette.color_for("A");
        let b = palette.color_for("B");
        assert_ne!(a, b);
        assert_eq!(palette.color_for("unknown"), Color32::GRAY);
        assert!(generate_palette(0).is_empty());
    }
}

//! Display colors for highlight categories

use crate::category::Category;
use ratatui::style::{Color, Modifier, Style};

/// Neutral gray for names outside the category set
pub const NEUTRAL_COLOR: &str = "#6B7280";

/// Hex color for a category
pub fn category_color(category: Category) -> &'static str {
    match category {
        Category::Subject => "#3B82F6",  // Blue
        Category::Style => "#8B5CF6",    // Purple
        Category::Lighting => "#F59E0B", // Orange
        Category::Camera => "#10B981",   // Green
        Category::Quality => "#06B6D4",  // Cyan
        Category::Color => "#EC4899",    // Pink
        Category::Emotion => "#EAB308",  // Yellow
        Category::Setting => "#14B8A6",  // Teal
        Category::Comment => "#6A9955",  // Comment green
    }
}

/// Hex color for a category name, falling back to [`NEUTRAL_COLOR`]
pub fn color_for_name(name: &str) -> &'static str {
    name.parse::<Category>()
        .map(category_color)
        .unwrap_or(NEUTRAL_COLOR)
}

/// Parse `#RRGGBB` into a terminal color
pub fn hex_to_color(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
}

/// Terminal color scheme for highlighted prompts
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub subject: Color,
    pub style: Color,
    pub lighting: Color,
    pub camera: Color,
    pub quality: Color,
    pub color: Color,
    pub emotion: Color,
    pub setting: Color,
    pub comment: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            subject: Color::Rgb(59, 130, 246),   // #3B82F6
            style: Color::Rgb(139, 92, 246),     // #8B5CF6
            lighting: Color::Rgb(245, 158, 11),  // #F59E0B
            camera: Color::Rgb(16, 185, 129),    // #10B981
            quality: Color::Rgb(6, 182, 212),    // #06B6D4
            color: Color::Rgb(236, 72, 153),     // #EC4899
            emotion: Color::Rgb(234, 179, 8),    // #EAB308
            setting: Color::Rgb(20, 184, 166),   // #14B8A6
            comment: Color::Rgb(106, 153, 85),   // #6A9955
        }
    }
}

impl ColorScheme {
    /// Get color for a category
    pub fn color(&self, category: Category) -> Color {
        match category {
            Category::Subject => self.subject,
            Category::Style => self.style,
            Category::Lighting => self.lighting,
            Category::Camera => self.camera,
            Category::Quality => self.quality,
            Category::Color => self.color,
            Category::Emotion => self.emotion,
            Category::Setting => self.setting,
            Category::Comment => self.comment,
        }
    }

    /// Style for a category: bold keywords, dim italic comments
    pub fn style(&self, category: Category) -> Style {
        let style = Style::default().fg(self.color(category));
        if category.is_comment() {
            style.add_modifier(Modifier::ITALIC | Modifier::DIM)
        } else {
            style.add_modifier(Modifier::BOLD)
        }
    }
}

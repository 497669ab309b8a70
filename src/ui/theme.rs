use ratatui::style::Color;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub accent: Color,
    pub success: Color,
    pub error: Color,
    pub dimmed: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::slate()
    }
}

impl Theme {
    pub fn slate() -> Self {
        Self {
            background: Color::Rgb(17, 24, 39), // #111827 Gray 900
            text: Color::Rgb(243, 244, 246),    // #F3F4F6 Gray 100
            accent: Color::Rgb(59, 130, 246),   // #3B82F6 Blue 500
            success: Color::Rgb(34, 197, 94),   // #22C55E Green 500
            error: Color::Rgb(248, 113, 113),   // #F87171 Red 400
            dimmed: Color::Rgb(107, 114, 128),  // #6B7280 Gray 500
        }
    }

    pub fn current() -> Self {
        Self::slate()
    }
}

/// Convenience access to current theme colors
pub mod colors {
    use super::Theme;
    use ratatui::style::Color;

    pub fn background() -> Color {
        Theme::current().background
    }
    pub fn text() -> Color {
        Theme::current().text
    }
    pub fn accent() -> Color {
        Theme::current().accent
    }
    pub fn success() -> Color {
        Theme::current().success
    }
    pub fn error() -> Color {
        Theme::current().error
    }
    pub fn dimmed() -> Color {
        Theme::current().dimmed
    }
}

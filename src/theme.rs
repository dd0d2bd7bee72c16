use ratatui::style::Color;

/// Palette handed to every renderer. Built once from the dark-mode flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub dark: bool,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub highlight_fg: Color,
    pub highlight_bg: Color,
    pub value: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub deposit: Color,
    pub withdrawal: Color,
}

impl Theme {
    pub fn from_dark_mode(dark: bool) -> Self {
        if dark {
            Self::dark()
        } else {
            Self::light()
        }
    }

    pub fn dark() -> Self {
        Self {
            dark: true,
            text: Color::White,
            muted: Color::DarkGray,
            accent: Color::Cyan,
            highlight_fg: Color::Black,
            highlight_bg: Color::Cyan,
            value: Color::Yellow,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            deposit: Color::Green,
            withdrawal: Color::Magenta,
        }
    }

    pub fn light() -> Self {
        Self {
            dark: false,
            text: Color::Black,
            muted: Color::Gray,
            accent: Color::Blue,
            highlight_fg: Color::White,
            highlight_bg: Color::Blue,
            value: Color::Rgb(160, 100, 0),
            success: Color::Rgb(0, 128, 0),
            warning: Color::Rgb(180, 120, 0),
            error: Color::Red,
            deposit: Color::Rgb(0, 128, 0),
            withdrawal: Color::Magenta,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

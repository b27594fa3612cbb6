use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub primary: ColorSpec,
    pub accent: ColorSpec,

    // Text colors
    pub text: ColorSpec,
    pub text_muted: ColorSpec,

    // Status colors
    pub success: ColorSpec,
    pub warning: ColorSpec,
    pub error: ColorSpec,

    // UI element colors
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
    pub highlight_bg: ColorSpec,
    pub highlight_fg: ColorSpec,

    // Footer mode colors
    pub footer_normal: ColorSpec,
    pub footer_edit: ColorSpec,
    pub footer_delete: ColorSpec,
}

/// Color specification that can be serialized/deserialized.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

const fn rgb(r: u8, g: u8, b: u8) -> ColorSpec {
    ColorSpec { r, g, b }
}

impl ColorSpec {
    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme based on the Tokyo Night palette.
    ///
    pub fn dark() -> Self {
        Theme {
            name: "dark".to_string(),
            primary: rgb(125, 207, 255),      // Blue
            accent: rgb(255, 159, 196),       // Magenta
            text: rgb(169, 177, 214),         // Foreground
            text_muted: rgb(117, 121, 148),   // Comment
            success: rgb(158, 206, 106),      // Green
            warning: rgb(255, 202, 40),       // Yellow
            error: rgb(247, 118, 142),        // Red
            border_active: rgb(125, 207, 255),
            border_normal: rgb(117, 121, 148),
            highlight_bg: rgb(125, 207, 255),
            highlight_fg: rgb(26, 27, 38),    // Background
            footer_normal: rgb(125, 207, 255),
            footer_edit: rgb(255, 202, 40),
            footer_delete: rgb(247, 118, 142),
        }
    }

    /// Light theme based on the Rose Pine Dawn palette.
    ///
    pub fn light() -> Self {
        Theme {
            name: "light".to_string(),
            primary: rgb(40, 105, 131),       // Pine
            accent: rgb(144, 122, 169),       // Iris
            text: rgb(87, 82, 121),           // Text
            text_muted: rgb(152, 147, 165),   // Muted
            success: rgb(86, 148, 159),       // Foam
            warning: rgb(234, 157, 52),       // Gold
            error: rgb(180, 99, 122),         // Love
            border_active: rgb(40, 105, 131),
            border_normal: rgb(152, 147, 165),
            highlight_bg: rgb(40, 105, 131),
            highlight_fg: rgb(250, 244, 237), // Base
            footer_normal: rgb(40, 105, 131),
            footer_edit: rgb(234, 157, 52),
            footer_delete: rgb(180, 99, 122),
        }
    }

    /// Dracula theme.
    ///
    pub fn dracula() -> Self {
        Theme {
            name: "dracula".to_string(),
            primary: rgb(189, 147, 249),      // Purple
            accent: rgb(255, 121, 198),       // Pink
            text: rgb(248, 248, 242),         // Foreground
            text_muted: rgb(98, 114, 164),    // Comment
            success: rgb(80, 250, 123),       // Green
            warning: rgb(241, 250, 140),      // Yellow
            error: rgb(255, 85, 85),          // Red
            border_active: rgb(189, 147, 249),
            border_normal: rgb(98, 114, 164),
            highlight_bg: rgb(189, 147, 249),
            highlight_fg: rgb(40, 42, 54),    // Background
            footer_normal: rgb(189, 147, 249),
            footer_edit: rgb(241, 250, 140),
            footer_delete: rgb(255, 85, 85),
        }
    }

    /// Get theme by name.
    ///
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "dark" => Some(Self::dark()),
            "light" => Some(Self::light()),
            "dracula" => Some(Self::dracula()),
            _ => None,
        }
    }

    /// Get list of all available theme names.
    ///
    pub fn available_themes() -> Vec<String> {
        vec!["dark".to_string(), "light".to_string(), "dracula".to_string()]
    }
}

//! Styles for the downloader window
//!
//! One light look: a pale backdrop, a white panel per section and a green
//! accent reserved for the two actions that start work (Search, Download).

use iced::widget::{button, container, text_input};
use iced::{Background, Border, Color, Gradient, Shadow, Theme, Vector};

// Backdrop, top to bottom
pub const BACKDROP_TOP: Color = Color::from_rgb(0.945, 0.961, 0.976);
pub const BACKDROP_BOTTOM: Color = Color::from_rgb(0.886, 0.910, 0.941);

// Accent for Search and Download
pub const ACCENT: Color = Color::from_rgb(0.063, 0.725, 0.506);
pub const ACCENT_DARK: Color = Color::from_rgb(0.020, 0.588, 0.412);
pub const FOCUS_RING: Color = Color::from_rgb(0.231, 0.510, 0.965);

// Text
pub const INK: Color = Color::from_rgb(0.118, 0.161, 0.231);
pub const INK_MUTED: Color = Color::from_rgb(0.278, 0.333, 0.412);
/// Folder path and other values the user picked
pub const INK_VALUE: Color = Color::from_rgb(0.200, 0.255, 0.333);
/// Status line, empty thumbnail caption
pub const INK_HINT: Color = Color::from_rgb(0.392, 0.455, 0.545);
pub const PLACEHOLDER: Color = Color::from_rgb(0.580, 0.639, 0.722);

// Surfaces and lines
pub const SURFACE: Color = Color::WHITE;
pub const SURFACE_SUNKEN: Color = Color::from_rgb(0.945, 0.961, 0.976);
pub const HAIRLINE: Color = Color::from_rgb(0.886, 0.910, 0.941);
pub const DISABLED_FILL: Color = Color::from_rgb(0.796, 0.835, 0.882);

pub struct WindowBackground;

impl container::StyleSheet for WindowBackground {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            text_color: Some(INK),
            background: Some(Background::Gradient(Gradient::Linear(
                // Straight down
                iced::gradient::Linear::new(iced::Radians(std::f32::consts::PI))
                    .add_stop(0.0, BACKDROP_TOP)
                    .add_stop(1.0, BACKDROP_BOTTOM),
            ))),
            ..Default::default()
        }
    }
}

/// White card holding the URL row or the video details
pub struct Panel;

impl container::StyleSheet for Panel {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            text_color: Some(INK),
            background: Some(Background::Color(SURFACE)),
            border: Border {
                color: HAIRLINE,
                width: 1.0,
                radius: 16.0.into(),
            },
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.06),
                offset: Vector::new(0.0, 4.0),
                blur_radius: 16.0,
            },
        }
    }
}

/// Frame around the thumbnail preview
pub struct ThumbnailFrame;

impl container::StyleSheet for ThumbnailFrame {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            background: Some(Background::Color(SURFACE_SUNKEN)),
            border: Border {
                color: HAIRLINE,
                width: 1.0,
                radius: 12.0.into(),
            },
            ..Default::default()
        }
    }
}

/// Search and Download; greyed out while the work is running
pub struct ActionButton;

impl button::StyleSheet for ActionButton {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(ACCENT)),
            text_color: SURFACE,
            border: Border {
                radius: 10.0.into(),
                ..Default::default()
            },
            shadow: Shadow {
                color: Color { a: 0.25, ..ACCENT },
                offset: Vector::new(0.0, 2.0),
                blur_radius: 8.0,
            },
            shadow_offset: Vector::ZERO,
        }
    }

    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(ACCENT_DARK)),
            ..self.active(style)
        }
    }

    fn disabled(&self, style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(DISABLED_FILL)),
            text_color: INK_HINT,
            shadow: Shadow::default(),
            ..self.active(style)
        }
    }
}

/// Choose Folder
pub struct ToolButton;

impl button::StyleSheet for ToolButton {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(SURFACE)),
            text_color: INK_VALUE,
            border: Border {
                radius: 10.0.into(),
                color: HAIRLINE,
                width: 1.0,
            },
            ..Default::default()
        }
    }

    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(SURFACE_SUNKEN)),
            ..self.active(style)
        }
    }

    fn disabled(&self, style: &Self::Style) -> button::Appearance {
        button::Appearance {
            text_color: PLACEHOLDER,
            ..self.active(style)
        }
    }
}

/// Borderless Paste / Clear / Open
pub struct FlatButton;

impl button::StyleSheet for FlatButton {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: None,
            text_color: INK_MUTED,
            border: Border {
                radius: 8.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        button::Appearance {
            text_color: INK,
            background: Some(Background::Color(HAIRLINE)),
            ..self.active(style)
        }
    }
}

/// The URL field; locked while a fetch runs
pub struct UrlField;

impl text_input::StyleSheet for UrlField {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> text_input::Appearance {
        text_input::Appearance {
            background: Background::Color(SURFACE),
            border: Border {
                radius: 10.0.into(),
                width: 1.5,
                color: HAIRLINE,
            },
            icon_color: INK_HINT,
        }
    }

    fn focused(&self, style: &Self::Style) -> text_input::Appearance {
        let active = self.active(style);
        text_input::Appearance {
            border: Border {
                color: FOCUS_RING,
                ..active.border
            },
            ..active
        }
    }

    fn placeholder_color(&self, _style: &Self::Style) -> Color {
        PLACEHOLDER
    }

    fn value_color(&self, _style: &Self::Style) -> Color {
        INK
    }

    fn selection_color(&self, _style: &Self::Style) -> Color {
        Color { a: 0.3, ..FOCUS_RING }
    }

    fn disabled(&self, style: &Self::Style) -> text_input::Appearance {
        text_input::Appearance {
            background: Background::Color(SURFACE_SUNKEN),
            ..self.active(style)
        }
    }

    fn disabled_color(&self, _style: &Self::Style) -> Color {
        INK_HINT
    }
}

//! Design system theme constants.
//!
//! Centralized theme definitions for consistent UI across the application.
//! All colors, spacing, and sizing are defined here.
//!
//! # Color Philosophy
//! - Dark theme with deep grays (not pure black)
//! - Indigo primary accent for actions
//! - Semantic colors for status (success/warning/error)

use iced::Color;
use iced::widget::button;

// =============================================================================
// COLORS
// =============================================================================

pub mod color {
    use super::*;

    /// Main app background - deepest gray
    /// Hex: #121215
    pub const BASE: Color = Color::from_rgb(
        0x12 as f32 / 255.0,
        0x12 as f32 / 255.0,
        0x15 as f32 / 255.0,
    );

    /// Cards, panels, raised surfaces
    /// Hex: #1a1a1f
    pub const SURFACE: Color = Color::from_rgb(
        0x1a as f32 / 255.0,
        0x1a as f32 / 255.0,
        0x1f as f32 / 255.0,
    );

    /// Elevated surfaces, banners, toasts
    /// Hex: #232328
    pub const SURFACE_ELEVATED: Color = Color::from_rgb(
        0x23 as f32 / 255.0,
        0x23 as f32 / 255.0,
        0x28 as f32 / 255.0,
    );

    /// Standard borders
    /// Hex: #3a3a42
    pub const BORDER: Color = Color::from_rgb(
        0x3a as f32 / 255.0,
        0x3a as f32 / 255.0,
        0x42 as f32 / 255.0,
    );

    /// Primary text
    /// Hex: #e8e8ea
    pub const TEXT_PRIMARY: Color = Color::from_rgb(
        0xe8 as f32 / 255.0,
        0xe8 as f32 / 255.0,
        0xea as f32 / 255.0,
    );

    /// Secondary text, hints, timestamps
    /// Hex: #8a8a92
    pub const TEXT_MUTED: Color = Color::from_rgb(
        0x8a as f32 / 255.0,
        0x8a as f32 / 255.0,
        0x92 as f32 / 255.0,
    );

    /// Indigo accent for primary actions
    /// Hex: #6366f1
    pub const PRIMARY: Color = Color::from_rgb(
        0x63 as f32 / 255.0,
        0x66 as f32 / 255.0,
        0xf1 as f32 / 255.0,
    );

    /// Success green
    /// Hex: #34d399
    pub const SUCCESS: Color = Color::from_rgb(
        0x34 as f32 / 255.0,
        0xd3 as f32 / 255.0,
        0x99 as f32 / 255.0,
    );

    /// Warning amber
    /// Hex: #fbbf24
    pub const WARNING: Color = Color::from_rgb(
        0xfb as f32 / 255.0,
        0xbf as f32 / 255.0,
        0x24 as f32 / 255.0,
    );

    /// Error red
    /// Hex: #f87171
    pub const ERROR: Color = Color::from_rgb(
        0xf8 as f32 / 255.0,
        0x71 as f32 / 255.0,
        0x71 as f32 / 255.0,
    );
}

// =============================================================================
// SPACING
// =============================================================================

pub mod spacing {
    pub const XS: u16 = 4;
    pub const SM: u16 = 8;
    pub const MD: u16 = 16;
    pub const LG: u16 = 24;
    pub const XL: u16 = 32;
}

// =============================================================================
// TYPOGRAPHY
// =============================================================================

pub mod typography {
    pub const SIZE_SMALL: u16 = 12;
    pub const SIZE_BODY: u16 = 14;
    pub const SIZE_SUBTITLE: u16 = 16;
    pub const SIZE_TITLE: u16 = 24;
}

// =============================================================================
// WIDGET STYLES
// =============================================================================

/// Filled indigo button for the primary action.
pub fn button_primary(_theme: &iced::Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Disabled => color::SURFACE_ELEVATED,
        button::Status::Hovered | button::Status::Pressed => Color {
            a: 0.85,
            ..color::PRIMARY
        },
        _ => color::PRIMARY,
    };

    button::Style {
        background: Some(iced::Background::Color(background)),
        text_color: if matches!(status, button::Status::Disabled) {
            color::TEXT_MUTED
        } else {
            color::TEXT_PRIMARY
        },
        border: iced::Border {
            radius: 6.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Borderless button for secondary actions (dismiss, history rows).
pub fn button_ghost(_theme: &iced::Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Some(iced::Background::Color(color::SURFACE_ELEVATED))
        }
        _ => None,
    };

    button::Style {
        background,
        text_color: color::TEXT_PRIMARY,
        border: iced::Border {
            radius: 6.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

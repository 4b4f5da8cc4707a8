//! Theme configuration for the Broadcast Configuration Tool.

use iced::Color;

/// Application colors.
pub mod colors {
    use super::Color;

    /// Text secondary
    pub const TEXT_SECONDARY: Color = Color::from_rgb(0.53, 0.53, 0.53);

    /// Connected device
    pub const SUCCESS: Color = Color::from_rgb(0.30, 0.60, 0.30);

    /// No device
    pub const WARNING: Color = Color::from_rgb(0.75, 0.60, 0.20);
}

/// Spacing constants.
pub mod spacing {
    /// Extra small spacing (4px)
    pub const XS: f32 = 4.0;
    /// Small spacing (8px)
    pub const SM: f32 = 8.0;
    /// Medium spacing (12px)
    pub const MD: f32 = 12.0;
    /// Large spacing (16px)
    pub const LG: f32 = 16.0;
}

/// Font sizes.
pub mod font {
    /// Small font size
    pub const SM: f32 = 11.0;
    /// Normal font size
    pub const NORMAL: f32 = 13.0;
    /// Header font size
    pub const HEADER: f32 = 18.0;
}

/// Widths for label/value grids.
pub mod width {
    pub const LABEL: f32 = 200.0;
    pub const VALUE: f32 = 160.0;
    pub const SUB_GROUP: f32 = 180.0;
}

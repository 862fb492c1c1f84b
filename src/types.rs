//! Core types and constants for the attribute resolution engine

use serde::{Deserialize, Serialize};
use std::fmt;

/// Textual form the data-binding layer produces when a binding resolves
/// to nothing. Scalar parsers treat it as an explicit null, not as input.
pub const NULL_LITERAL: &str = "null";

/// Identifier sentinel meaning "no view id".
pub const NO_ID: i32 = -1;

/// Anchor-rule encoding of `true`: align to the anchor itself.
pub const ANCHOR_TRUE: i32 = -1;

// Gravity flags
pub const GRAVITY_NONE: i32 = 0;
pub const GRAVITY_LEFT: i32 = 1 << 0;
pub const GRAVITY_RIGHT: i32 = 1 << 1;
pub const GRAVITY_TOP: i32 = 1 << 2;
pub const GRAVITY_BOTTOM: i32 = 1 << 3;
pub const GRAVITY_CENTER_HORIZONTAL: i32 = 1 << 4;
pub const GRAVITY_CENTER_VERTICAL: i32 = 1 << 5;
pub const GRAVITY_START: i32 = 1 << 6;
pub const GRAVITY_END: i32 = 1 << 7;
pub const GRAVITY_CENTER: i32 = GRAVITY_CENTER_HORIZONTAL | GRAVITY_CENTER_VERTICAL;

// Divider show modes
pub const SHOW_DIVIDER_NONE: i32 = 0;
pub const SHOW_DIVIDER_BEGINNING: i32 = 1 << 0;
pub const SHOW_DIVIDER_MIDDLE: i32 = 1 << 1;
pub const SHOW_DIVIDER_END: i32 = 1 << 2;

// Drawable state attribute ids. Negated to express "state must be absent"
// in a state-list selector, so all of them are nonzero positive.
pub const STATE_PRESSED: i32 = 0x01;
pub const STATE_ENABLED: i32 = 0x02;
pub const STATE_FOCUSED: i32 = 0x03;
pub const STATE_HOVERED: i32 = 0x04;
pub const STATE_SELECTED: i32 = 0x05;
pub const STATE_CHECKABLE: i32 = 0x06;
pub const STATE_CHECKED: i32 = 0x07;
pub const STATE_ACTIVATED: i32 = 0x08;
pub const STATE_WINDOW_FOCUSED: i32 = 0x09;

// Rendering surface feature levels. Text alignment arrived in two steps:
// `inherit` first, the full token set one level later.
pub const LEVEL_ALIGNMENT_INHERIT: u32 = 16;
pub const LEVEL_ALIGNMENT_FULL: u32 = 17;

/// Feature level of the surface this build targets.
pub const SURFACE_LEVEL: u32 = 21;

/// Tri-state widget visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Visibility {
    Visible = 0,
    Invisible = 1,
    Gone = 2,
}

impl Visibility {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "visible" => Some(Self::Visible),
            "invisible" => Some(Self::Invisible),
            "gone" => Some(Self::Gone),
            _ => None,
        }
    }
}

/// Where text is truncated when it does not fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Truncate {
    Start = 0,
    Middle = 1,
    End = 2,
    Marquee = 3,
}

impl Truncate {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "start" => Some(Self::Start),
            "middle" => Some(Self::Middle),
            "end" => Some(Self::End),
            "marquee" => Some(Self::Marquee),
            _ => None,
        }
    }
}

/// Native text alignment of the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum TextAlignment {
    Inherit = 0,
    Gravity = 1,
    TextStart = 2,
    TextEnd = 3,
    Center = 4,
    ViewStart = 5,
    ViewEnd = 6,
}

impl TextAlignment {
    /// Token lookup, gated on the feature level of the target surface.
    /// Tokens the surface does not support yet resolve to nothing.
    pub fn from_token(token: &str, level: u32) -> Option<Self> {
        if level < LEVEL_ALIGNMENT_INHERIT {
            return None;
        }
        match token {
            "inherit" => Some(Self::Inherit),
            _ if level < LEVEL_ALIGNMENT_FULL => None,
            "gravity" => Some(Self::Gravity),
            "start" => Some(Self::TextStart),
            "end" => Some(Self::TextEnd),
            "center" => Some(Self::Center),
            "viewStart" => Some(Self::ViewStart),
            "viewEnd" => Some(Self::ViewEnd),
            _ => None,
        }
    }
}

/// How an image is scaled into its widget bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ScaleType {
    Center = 0,
    CenterCrop = 1,
    CenterInside = 2,
    FitCenter = 3,
    FitXy = 4,
    Matrix = 5,
}

impl ScaleType {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "center" => Some(Self::Center),
            "center_crop" => Some(Self::CenterCrop),
            "center_inside" => Some(Self::CenterInside),
            "fitCenter" => Some(Self::FitCenter),
            "fit_xy" => Some(Self::FitXy),
            "matrix" => Some(Self::Matrix),
            _ => None,
        }
    }
}

/// Typeface style flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum TextStyle {
    Normal = 0,
    Bold = 1,
    Italic = 2,
    BoldItalic = 3,
}

impl TextStyle {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "bold" => Some(Self::Bold),
            "italic" => Some(Self::Italic),
            "bold|italic" => Some(Self::BoldItalic),
            _ => None,
        }
    }
}

/// A resolved RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Opaque black, the fallback for malformed color attributes.
    pub const BLACK: Color = Color {
        r: 0,
        g: 0,
        b: 0,
        a: 255,
    };

    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Packed ARGB word, the encoding the rendering surface consumes.
    pub fn to_argb(&self) -> i32 {
        (((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32))
            as i32
    }

    pub fn to_bytes(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
    }
}

/// Display geometry of the rendering surface, supplied by the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayMetrics {
    /// Physical pixels per density-independent unit.
    pub density: f32,
    /// Density applied to font dimensions, includes the user font scale.
    pub scaled_density: f32,
}

impl Default for DisplayMetrics {
    fn default() -> Self {
        Self {
            density: 1.0,
            scaled_density: 1.0,
        }
    }
}

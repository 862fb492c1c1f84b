//! Attribute-value resolution for data-driven UI rendering
//!
//! `attris` is the chokepoint between a declarative layout document and a
//! native rendering surface: every untyped, string-encoded attribute value
//! passes through one of the resolvers here on its way to becoming the
//! typed value a widget is configured with.
//!
//! # Features
//!
//! - Permissive scalar parsers that default instead of failing, plus a
//!   strict fast path for digit-only integers
//! - Token tables for gravity, visibility, dividers, truncation, text
//!   alignment, image scaling, and typeface style
//! - Style-attribute and resource reference resolution with memoized
//!   identifier and table-handle caches
//! - State-list and layer-list entry extraction from document objects
//! - Color and boolean coercion with documented fallbacks
//!
//! # Basic Usage
//!
//! ```rust
//! use attris::{parse_color, parse_gravity, GRAVITY_BOTTOM, GRAVITY_CENTER};
//!
//! let gravity = parse_gravity("center|bottom");
//! assert_eq!(gravity, GRAVITY_CENTER | GRAVITY_BOTTOM);
//!
//! let color = parse_color("#FF0000");
//! assert_eq!((color.r, color.g, color.b, color.a), (255, 0, 0, 255));
//! ```
//!
//! # Resolution policy
//!
//! No resolver ever raises an unrecoverable fault: malformed scalars
//! default to zero, unresolvable references to the zero identifier,
//! unknown enumeration tokens to a per-attribute default. Diagnostics for
//! these fallbacks are emitted through the [`log`] facade only while the
//! process-wide flag is on, and never change resolution outcomes.

pub mod color;
pub mod drawable;
pub mod enums;
pub mod error;
pub mod resource;
pub mod scalar;
pub mod types;
pub mod value;

use std::sync::atomic::{AtomicBool, Ordering};

// Re-export commonly used types and functions
pub use color::{is_color_value, parse_color, parse_hex_color};
pub use drawable::{parse_layer, parse_state};
pub use enums::{
    gravity_value, parse_divider_mode, parse_ellipsize, parse_gravity, parse_invisibility,
    parse_scale_type, parse_text_alignment, parse_text_style, parse_visibility,
};
pub use error::{ParseError, Result};
pub use resource::{
    is_local_color_resource, is_local_drawable_resource, is_local_string_resource,
    is_style_attribute, is_tween_animation_resource, view_id_from_reference, AttributeResolver,
    ConstantTable, ResourceNamespace, TableRegistry,
};
pub use scalar::{
    dp_to_px, parse_anchor_rule, parse_dimension, parse_double, parse_float, parse_id, parse_int,
    parse_int_unsafe, px_to_dp, DimensionConverter,
};
pub use types::*;
pub use value::{is_primitive, parse_boolean, primitive_string};

/// Engine version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

static DIAGNOSTICS: AtomicBool = AtomicBool::new(false);

/// Enable or disable diagnostic logging engine-wide. Off by default.
pub fn set_diagnostics_enabled(enabled: bool) {
    DIAGNOSTICS.store(enabled, Ordering::Relaxed);
}

/// Whether resolvers should report malformed input through the log facade.
pub fn diagnostics_enabled() -> bool {
    DIAGNOSTICS.load(Ordering::Relaxed)
}

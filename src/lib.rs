//! Laser Icon - a fixed laser glyph rendered as SVG
//!
//! This library renders one decorative vector glyph (a stylized laser beam)
//! with three customizable parameters: size, stroke color, and stroke width.
//! Rendering is a pure function from an [`IconConfig`] to an SVG string.
//!
//! # Example
//!
//! ```rust
//! use laser_icon::{render, IconConfig};
//!
//! let svg = render(&IconConfig::default());
//! assert!(svg.contains(r#"viewBox="0 0 36 36""#));
//! assert!(svg.contains(r#"stroke="white""#));
//! ```
//!
//! Every field is optional; unset fields resolve to their defaults
//! (size 36, color "white", stroke width 1.5):
//!
//! ```rust
//! use laser_icon::{render, IconConfig};
//!
//! let svg = render(&IconConfig::new().with_size(50.0));
//! assert!(svg.contains(r#"width="50""#));
//! assert!(svg.contains(r#"stroke-width="1.5""#));
//! ```

pub mod config;
pub mod svg;

pub use config::{ConfigError, IconConfig};
pub use svg::{render, render_document};

//! # bionic
//!
//! A small library for rendering text in a "bionic reading" style: the first
//! part of every word is emphasized to guide the reader's eye.
//!
//! ## Features
//!
//! - Pure, total transform from text to paragraphs of `(bold, normal)` segments
//! - Statically declared style parameters (font, size, spacing, ratio)
//! - Markdown, HTML, ANSI terminal and JSON renderers
//!
//! ## Quick Start
//!
//! ```
//! use bionic::transform;
//!
//! let out = transform("hello world", 0.5);
//! let segments = out.paragraphs()[0].segments();
//!
//! assert_eq!(segments[0].bold, "hel");
//! assert_eq!(segments[0].normal, "lo");
//! assert_eq!(segments[1].bold, "wor");
//! ```
//!
//! ## Working with a StyleConfig
//!
//! Front ends keep a [`StyleConfig`], let the user edit it through the
//! declared [`StyleConfig::FIELDS`], and pass a snapshot to each transform:
//!
//! ```
//! use bionic::{BionicTransform, StyleConfig};
//! use bionic::render::{HtmlRenderer, Renderer};
//!
//! let mut config = StyleConfig::default();
//! config.set_field("bionic_ratio", "0.25")?;
//!
//! let out = BionicTransform::from_config(&config).apply("Reading faster");
//! let html = HtmlRenderer::new(&config).fragment(true).render_to_string(&out)?;
//!
//! assert!(html.contains("<b>Re</b>ading"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod render;
pub mod style;
pub mod transform;
pub mod util;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{Error, Result};
pub use render::{OutputFormat, Renderer};
pub use style::{FieldKind, FieldSpec, FieldValue, StyleConfig};
pub use transform::{
    BionicTransform, Paragraph, Segment, StyledOutput, split_point, split_word, transform,
};

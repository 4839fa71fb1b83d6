//! Rendering parameters and their editable-field schema.
//!
//! This module contains:
//! - [`StyleConfig`], the per-call snapshot of font, size, spacing and ratio
//! - [`FieldSpec`] and friends, a statically declared schema that front ends
//!   iterate to build parameter forms and to apply `field=value` edits

mod config;
mod schema;

pub use config::StyleConfig;
pub use schema::{FieldKind, FieldSpec, FieldValue};

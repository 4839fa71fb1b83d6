//! The [`StyleConfig`] record.

#[cfg(feature = "serde")]
use std::path::Path;

use crate::error::{Error, Result};

use super::schema::{FieldKind, FieldSpec, FieldValue};

/// Rendering parameters for one transform invocation.
///
/// Only `bionic_ratio` influences the transform. The font fields are carried
/// through to renderers untouched.
///
/// # Examples
///
/// ```
/// use bionic::StyleConfig;
///
/// let mut config = StyleConfig::default();
/// config.set_field("font_size", "14.7").unwrap();
///
/// assert_eq!(config.font_size, 14);
/// assert_eq!(config.bionic_ratio, 0.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StyleConfig {
    /// Font family name, opaque to the transform.
    pub font_name: String,
    /// Point size.
    pub font_size: u32,
    /// Line spacing multiplier.
    pub line_spacing: u32,
    /// Fraction of each word's characters rendered bold.
    pub bionic_ratio: f64,
}

impl StyleConfig {
    pub const DEFAULT_FONT: &'static str = "Aptos Display";
    pub const DEFAULT_FONT_SIZE: u32 = 12;
    pub const DEFAULT_LINE_SPACING: u32 = 1;
    pub const DEFAULT_RATIO: f64 = 0.5;

    /// Fonts offered by front ends. Any other name is accepted as well.
    pub const FONT_CHOICES: &'static [&'static str] = &["Aptos Display", "OpenDyslexic"];

    /// Editable fields in declaration order.
    pub const FIELDS: &'static [FieldSpec] = &[
        FieldSpec {
            name: "font_name",
            kind: FieldKind::Text,
            default: FieldValue::Text(Self::DEFAULT_FONT),
            editable: false,
        },
        FieldSpec {
            name: "font_size",
            kind: FieldKind::Integer,
            default: FieldValue::Integer(Self::DEFAULT_FONT_SIZE),
            editable: true,
        },
        FieldSpec {
            name: "line_spacing",
            kind: FieldKind::Integer,
            default: FieldValue::Integer(Self::DEFAULT_LINE_SPACING),
            editable: true,
        },
        FieldSpec {
            name: "bionic_ratio",
            kind: FieldKind::Float,
            default: FieldValue::Float(Self::DEFAULT_RATIO),
            editable: true,
        },
    ];

    /// Create a config with default fonts and the given ratio.
    pub fn with_ratio(ratio: f64) -> Self {
        Self {
            bionic_ratio: ratio,
            ..Self::default()
        }
    }

    /// Look up a field's schema entry by name.
    pub fn field_spec(name: &str) -> Option<&'static FieldSpec> {
        Self::FIELDS.iter().find(|spec| spec.name == name)
    }

    /// Current value of a field, or `None` for unknown names.
    pub fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        let value = match name {
            "font_name" => FieldValue::Text(&self.font_name),
            "font_size" => FieldValue::Integer(self.font_size),
            "line_spacing" => FieldValue::Integer(self.line_spacing),
            "bionic_ratio" => FieldValue::Float(self.bionic_ratio),
            _ => return None,
        };
        Some(value)
    }

    /// Parse `raw` according to the field's kind and store it.
    ///
    /// Integers are parsed as floats and truncated toward zero, so `"14.7"`
    /// sets 14. Returns the stored value.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownField`] for names not in [`Self::FIELDS`], and
    /// [`Error::InvalidFieldValue`] when `raw` does not parse.
    pub fn set_field(&mut self, name: &str, raw: &str) -> Result<FieldValue<'_>> {
        let spec = Self::field_spec(name).ok_or_else(|| Error::UnknownField(name.to_string()))?;
        let invalid = |reason: &str| Error::InvalidFieldValue {
            field: name.to_string(),
            value: raw.to_string(),
            reason: reason.to_string(),
        };

        match spec.kind {
            FieldKind::Text => {
                let text = raw.trim();
                if text.is_empty() {
                    return Err(invalid("must not be empty"));
                }
                self.font_name = text.to_string();
            }
            FieldKind::Integer => {
                let value = parse_positive_int(raw).map_err(invalid)?;
                match name {
                    "font_size" => self.font_size = value,
                    "line_spacing" => self.line_spacing = value,
                    _ => return Err(Error::UnknownField(name.to_string())),
                }
            }
            FieldKind::Float => {
                self.bionic_ratio = raw
                    .trim()
                    .parse::<f64>()
                    .map_err(|_| invalid("not a number"))?;
            }
        }

        tracing::debug!(field = name, value = raw, "style field updated");
        self.field(name).ok_or_else(|| Error::UnknownField(name.to_string()))
    }

    /// Apply a `field=value` override.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidOverride`] when there is no `=`, otherwise whatever
    /// [`Self::set_field`] reports.
    pub fn apply_override(&mut self, assignment: &str) -> Result<()> {
        let (name, raw) = assignment
            .split_once('=')
            .ok_or_else(|| Error::InvalidOverride(assignment.to_string()))?;
        self.set_field(name.trim(), raw)?;
        Ok(())
    }

    /// Whether the ratio lies in the intended `[0, 1]` range.
    ///
    /// Out-of-range ratios are still valid input to the transform.
    pub fn ratio_in_range(&self) -> bool {
        (0.0..=1.0).contains(&self.bionic_ratio)
    }

    /// Parse a config from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// [`Error::Json`] if the document is malformed, and
    /// [`Error::InvalidFieldValue`] for values [`Self::set_field`] would
    /// reject: a blank font name or a zero size.
    #[cfg(feature = "serde")]
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()
    }

    #[cfg(feature = "serde")]
    fn validate(self) -> Result<Self> {
        let invalid = |field: &str, value: String, reason: &str| Error::InvalidFieldValue {
            field: field.to_string(),
            value,
            reason: reason.to_string(),
        };

        if self.font_name.trim().is_empty() {
            return Err(invalid("font_name", self.font_name, "must not be empty"));
        }
        let sizes = [
            ("font_size", self.font_size),
            ("line_spacing", self.line_spacing),
        ];
        for (field, value) in sizes {
            if value == 0 {
                return Err(invalid(field, value.to_string(), "must be at least 1"));
            }
        }
        Ok(self)
    }

    /// Load a config from a JSON file.
    ///
    /// # Errors
    ///
    /// [`Error::Io`] if the file cannot be read, otherwise whatever
    /// [`Self::from_json_str`] reports.
    #[cfg(feature = "serde")]
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let config = Self::from_json_str(&crate::util::decode_text(&bytes))?;
        tracing::debug!(path = %path.display(), "loaded style config");
        Ok(config)
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            font_name: Self::DEFAULT_FONT.to_string(),
            font_size: Self::DEFAULT_FONT_SIZE,
            line_spacing: Self::DEFAULT_LINE_SPACING,
            bionic_ratio: Self::DEFAULT_RATIO,
        }
    }
}

fn parse_positive_int(raw: &str) -> std::result::Result<u32, &'static str> {
    let value: f64 = raw.trim().parse().map_err(|_| "not a number")?;
    if !value.is_finite() {
        return Err("must be finite");
    }
    let value = value.trunc();
    if value < 1.0 {
        return Err("must be at least 1");
    }
    if value > f64::from(u32::MAX) {
        return Err("too large");
    }
    Ok(value as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_schema() {
        let config = StyleConfig::default();
        for spec in StyleConfig::FIELDS {
            assert_eq!(config.field(spec.name), Some(spec.default), "{}", spec.name);
        }
    }

    #[test]
    fn test_set_integer_truncates() {
        let mut config = StyleConfig::default();
        assert_eq!(
            config.set_field("font_size", "14.7").unwrap(),
            FieldValue::Integer(14)
        );
        config.set_field("line_spacing", " 2 ").unwrap();
        assert_eq!(config.line_spacing, 2);
    }

    #[test]
    fn test_set_integer_rejects_bad_values() {
        let mut config = StyleConfig::default();
        for raw in ["abc", "", "0", "-3", "0.9", "inf", "NaN", "1e12"] {
            let err = config.set_field("font_size", raw).unwrap_err();
            assert!(
                matches!(err, Error::InvalidFieldValue { ref field, .. } if field == "font_size"),
                "{raw}: {err}"
            );
        }
        assert_eq!(config.font_size, StyleConfig::DEFAULT_FONT_SIZE);
    }

    #[test]
    fn test_integer_fields_write_their_own_value() {
        let integers = StyleConfig::FIELDS
            .iter()
            .filter(|spec| spec.kind == FieldKind::Integer);
        for spec in integers {
            let mut config = StyleConfig::default();
            config.set_field(spec.name, "7").unwrap();
            for other in StyleConfig::FIELDS {
                let expected = if other.name == spec.name {
                    FieldValue::Integer(7)
                } else {
                    other.default
                };
                assert_eq!(config.field(other.name), Some(expected), "{}", spec.name);
            }
        }
    }

    #[test]
    fn test_set_float_accepts_out_of_range() {
        let mut config = StyleConfig::default();
        config.set_field("bionic_ratio", "1.5").unwrap();
        assert_eq!(config.bionic_ratio, 1.5);
        assert!(!config.ratio_in_range());

        config.set_field("bionic_ratio", "nan").unwrap();
        assert!(config.bionic_ratio.is_nan());
    }

    #[test]
    fn test_set_font_name() {
        let mut config = StyleConfig::default();
        config.set_field("font_name", "  OpenDyslexic ").unwrap();
        assert_eq!(config.font_name, "OpenDyslexic");
        assert!(config.set_field("font_name", "   ").is_err());
    }

    #[test]
    fn test_unknown_field() {
        let mut config = StyleConfig::default();
        assert!(matches!(
            config.set_field("list_fonts", "x"),
            Err(Error::UnknownField(name)) if name == "list_fonts"
        ));
        assert_eq!(config.field("list_fonts"), None);
    }

    #[test]
    fn test_apply_override() {
        let mut config = StyleConfig::default();
        config.apply_override("bionic_ratio=0.25").unwrap();
        assert_eq!(config.bionic_ratio, 0.25);
        assert!(matches!(
            config.apply_override("bionic_ratio"),
            Err(Error::InvalidOverride(_))
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_partial_json_uses_defaults() {
        let config = StyleConfig::from_json_str(r#"{"bionic_ratio": 0.3}"#).unwrap();
        assert_eq!(config.bionic_ratio, 0.3);
        assert_eq!(config.font_name, StyleConfig::DEFAULT_FONT);
        assert_eq!(config.font_size, StyleConfig::DEFAULT_FONT_SIZE);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_rejects_what_set_field_rejects() {
        for (json, field) in [
            (r#"{"font_size": 0}"#, "font_size"),
            (r#"{"line_spacing": 0}"#, "line_spacing"),
            (r#"{"font_name": " "}"#, "font_name"),
        ] {
            let err = StyleConfig::from_json_str(json).unwrap_err();
            assert!(
                matches!(err, Error::InvalidFieldValue { field: ref f, .. } if f == field),
                "{json}: {err}"
            );
        }
    }
}

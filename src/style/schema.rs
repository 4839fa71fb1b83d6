//! Declared schema for [`StyleConfig`](super::StyleConfig) fields.

use std::fmt;

/// Type of value a field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
    Float,
}

impl FieldKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Integer => "integer",
            FieldKind::Float => "float",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A field value, borrowed from the config it was read from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Integer(u32),
    Float(f64),
}

impl FieldValue<'_> {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Text(_) => FieldKind::Text,
            FieldValue::Integer(_) => FieldKind::Integer,
            FieldValue::Float(_) => FieldKind::Float,
        }
    }
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Integer(n) => write!(f, "{n}"),
            FieldValue::Float(x) => write!(f, "{x}"),
        }
    }
}

/// One entry of the parameter form: name, kind and default.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub default: FieldValue<'static>,
    /// Whether parameter forms show an entry box for this field. Fonts are
    /// chosen from [`StyleConfig::FONT_CHOICES`](super::StyleConfig::FONT_CHOICES)
    /// instead.
    pub editable: bool,
}

impl FieldSpec {
    /// Form label for this field showing `value`, e.g. `"font_size: 12"`.
    pub fn label(&self, value: FieldValue<'_>) -> String {
        format!("{}: {}", self.name, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StyleConfig;

    #[test]
    fn test_schema_order() {
        let names: Vec<_> = StyleConfig::FIELDS.iter().map(|f| f.name).collect();
        assert_eq!(
            names,
            ["font_name", "font_size", "line_spacing", "bionic_ratio"]
        );
    }

    #[test]
    fn test_default_kinds_agree() {
        for spec in StyleConfig::FIELDS {
            assert_eq!(spec.default.kind(), spec.kind, "{}", spec.name);
        }
    }

    #[test]
    fn test_label() {
        let spec = StyleConfig::field_spec("bionic_ratio").unwrap();
        assert_eq!(spec.label(FieldValue::Float(0.5)), "bionic_ratio: 0.5");
        let spec = StyleConfig::field_spec("font_size").unwrap();
        assert_eq!(spec.label(FieldValue::Integer(12)), "font_size: 12");
    }

    #[test]
    fn test_editable_fields() {
        let editable: Vec<_> = StyleConfig::FIELDS
            .iter()
            .filter(|f| f.editable)
            .map(|f| f.name)
            .collect();
        assert_eq!(editable, ["font_size", "line_spacing", "bionic_ratio"]);
    }
}

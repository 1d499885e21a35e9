//! Parsed annotation tokens

use std::fmt;

use smallvec::SmallVec;

use super::order::OrderTable;

/// Field that, set to `"true"`, pins a token to its encountered field order
pub const PRESERVE_ORDER: &str = "preserve_order";

/// One annotation occurrence: `type_name { field: "value" ... }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    type_name: String,
    // annotations rarely carry more than four fields
    fields: SmallVec<[(String, String); 4]>,
}

impl Token {
    /// Create a token with no fields
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            fields: SmallVec::new(),
        }
    }

    /// Semantic class of the token (`date`, `money`, ...)
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Append a field.
    ///
    /// A repeated key overwrites the stored value but keeps the position of
    /// its first occurrence.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((key, value)),
        }
    }

    /// Value of `key`, if present
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Fields in encountered order
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the token has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Whether the token opted out of canonical ordering
    pub fn preserve_order(&self) -> bool {
        self.get(PRESERVE_ORDER) == Some("true")
    }

    /// Field names in the order they will be emitted under `table`
    pub fn emission_order<'t>(&'t self, table: OrderTable) -> Vec<&'t str> {
        match table.order_for(&self.type_name) {
            Some(order) if !self.preserve_order() => order
                .iter()
                .copied()
                .filter(|key| self.get(key).is_some())
                .collect(),
            _ => self.fields.iter().map(|(k, _)| k.as_str()).collect(),
        }
    }

    /// Append the serialized token (without trailing separator) to `out`
    pub fn write_ordered(&self, table: OrderTable, out: &mut String) {
        out.push_str(&self.type_name);
        out.push_str(" {");
        for key in self.emission_order(table) {
            if let Some(value) = self.get(key) {
                out.push(' ');
                out.push_str(key);
                out.push_str(": \"");
                out.push_str(value);
                out.push('"');
            }
        }
        out.push_str(" }");
    }
}

/// Serializes in encountered order
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{", self.type_name)?;
        for (key, value) in self.fields() {
            write!(f, " {key}: \"{value}\"")?;
        }
        write!(f, " }}")
    }
}

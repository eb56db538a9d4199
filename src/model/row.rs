//! Sparse, read-only view over one decoded record.

use chrono::{NaiveDateTime, NaiveTime};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

use super::duration::Duration;
use super::resource::ResourceClass;
use super::value::Value;

/// One table record.
///
/// Columns without a value are not stored at all. Accessors return `None`
/// both for a missing column and for a column holding a different kind of
/// value; no conversion happens here.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Row {
    values: BTreeMap<String, Value>,
}

impl Row {
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Names of the columns present in this row, in name order
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Text value; also returns the raw token kept for an unparsable duration
    pub fn get_text(&self, name: &str) -> Option<&str> {
        match self.values.get(name)? {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn get_number(&self, name: &str) -> Option<f64> {
        match self.values.get(name)? {
            Value::Numeric(n) => Some(*n),
            _ => None,
        }
    }

    pub fn get_integer(&self, name: &str) -> Option<i32> {
        match self.values.get(name)? {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn get_boolean(&self, name: &str) -> Option<bool> {
        match self.values.get(name)? {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn get_date(&self, name: &str) -> Option<NaiveDateTime> {
        match self.values.get(name)? {
            Value::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }

    pub fn get_time(&self, name: &str) -> Option<NaiveTime> {
        match self.values.get(name)? {
            Value::Time(t) => Some(*t),
            _ => None,
        }
    }

    pub fn get_duration(&self, name: &str) -> Option<Duration> {
        match self.values.get(name)? {
            Value::Duration(d) => Some(*d),
            _ => None,
        }
    }

    pub fn get_identifier(&self, name: &str) -> Option<Uuid> {
        match self.values.get(name)? {
            Value::Identifier(id) => Some(*id),
            _ => None,
        }
    }

    pub fn get_resource_class(&self, name: &str) -> Option<ResourceClass> {
        match self.values.get(name)? {
            Value::ResourceClass(rc) => Some(*rc),
            _ => None,
        }
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (index, (name, value)) in self.values.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", name, value)?;
        }
        f.write_str("}")
    }
}

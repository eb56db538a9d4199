//! Typed cell values.

use chrono::{NaiveDateTime, NaiveTime};
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

use super::duration::Duration;
use super::resource::ResourceClass;

/// A converted cell.
///
/// There is no "absent" variant: a column without a value is simply not
/// present in its [`Row`](super::Row), so absence is always `Option::None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum Value {
    Text(String),
    Numeric(f64),
    Integer(i32),
    DateTime(NaiveDateTime),
    Time(NaiveTime),
    Boolean(bool),
    Duration(Duration),
    Identifier(Uuid),
    ResourceClass(ResourceClass),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Numeric(n) => write!(f, "{}", n),
            Self::Integer(i) => write!(f, "{}", i),
            Self::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S")),
            Self::Time(t) => write!(f, "{}", t.format("%H:%M")),
            Self::Boolean(b) => write!(f, "{}", b),
            Self::Duration(d) => write!(f, "{}", d),
            Self::Identifier(id) => write!(f, "{}", id),
            Self::ResourceClass(rc) => f.write_str(rc.as_str()),
        }
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Numeric(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<Duration> for Value {
    fn from(value: Duration) -> Self {
        Self::Duration(value)
    }
}

impl From<Uuid> for Value {
    fn from(value: Uuid) -> Self {
        Self::Identifier(value)
    }
}

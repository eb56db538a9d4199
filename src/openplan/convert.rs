//! Conversion of raw cell tokens into typed values.
//!
//! Every function here depends only on the token and the declared type.

use chrono::{NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;

use super::error::{Result, TableError};
use super::guid;
use super::schema::DataType;
use crate::model::{Duration, ResourceClass, TimeUnit, Value};

/// Date patterns tried in order; the first that matches wins
const DATE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y%m%d%H%M%SZ", "%Y%m%d%H%M"];

/// Optional sign, digits, one unit letter
static DURATION_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(-?\d+)([mwdht])$").unwrap());

/// Outcome of reading a duration token
#[derive(Debug, Clone, PartialEq)]
pub enum DurationToken {
    /// The literal `0`, which files use for "not recorded"
    NotRecorded,
    Parsed(Duration),
    /// Does not match the grammar; the caller keeps the raw text
    Unrecognised,
}

/// Convert one present token into the value stored for `column`.
///
/// `Ok(None)` means the token carries no value and the column is left out of
/// the row.
pub fn convert(column: &str, data_type: DataType, token: &str) -> Result<Option<Value>> {
    let value = match data_type {
        DataType::Text => Value::Text(token.to_string()),

        DataType::Numeric => {
            let n = parse_numeric(token)
                .map_err(|e| TableError::conversion(column, token, data_type, e))?;
            Value::Numeric(n)
        }

        DataType::Integer => {
            let i = parse_integer(token)
                .map_err(|e| TableError::conversion(column, token, data_type, e))?;
            Value::Integer(i)
        }

        DataType::DateTime => match parse_date_time(token) {
            Some(dt) => Value::DateTime(dt),
            None => {
                return Err(TableError::conversion(
                    column,
                    token,
                    data_type,
                    "no date pattern matched",
                ))
            }
        },

        DataType::Time => match parse_time(token) {
            Some(t) => Value::Time(t),
            None => {
                return Err(TableError::conversion(
                    column,
                    token,
                    data_type,
                    "expected HH:mm",
                ))
            }
        },

        DataType::Boolean => match parse_boolean(token) {
            Some(b) => Value::Boolean(b),
            None => return Ok(None),
        },

        DataType::Duration => match parse_duration(token) {
            DurationToken::NotRecorded => return Ok(None),
            DurationToken::Parsed(d) => Value::Duration(d),
            DurationToken::Unrecognised => {
                log::warn!(
                    "Keeping unparsable duration {}={:?} as text",
                    column,
                    token
                );
                Value::Text(token.to_string())
            }
        },

        DataType::Identifier => {
            let id = guid::parse(token)
                .map_err(|e| TableError::conversion(column, token, data_type, e))?;
            Value::Identifier(id)
        }

        DataType::ResourceClass => match ResourceClass::from_code(token) {
            Some(rc) => Value::ResourceClass(rc),
            None => return Ok(None),
        },
    };

    Ok(Some(value))
}

pub fn parse_numeric(token: &str) -> std::result::Result<f64, std::num::ParseFloatError> {
    token.trim().parse::<f64>()
}

pub fn parse_integer(token: &str) -> std::result::Result<i32, std::num::ParseIntError> {
    token.parse::<i32>()
}

/// Parse a timestamp in any of the supported layouts
pub fn parse_date_time(token: &str) -> Option<NaiveDateTime> {
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(token, format).ok())
}

/// Parse `HH:mm`, also accepting single-digit fields and `24:00`
pub fn parse_time(token: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(token, "%H:%M").ok().or_else(|| {
        let (hours, minutes) = token.trim().split_once(':')?;
        let hours: u32 = hours.trim().parse().ok()?;
        let minutes: u32 = minutes.trim().parse().ok()?;
        match (hours, minutes) {
            (24, 0) => NaiveTime::from_hms_opt(0, 0, 0),
            _ => NaiveTime::from_hms_opt(hours, minutes, 0),
        }
    })
}

/// `true` only when the token starts with `T`; an empty token has no value
pub fn parse_boolean(token: &str) -> Option<bool> {
    token.chars().next().map(|c| c == 'T')
}

pub fn parse_duration(token: &str) -> DurationToken {
    // TODO: confirm against a sample file whether "0" should become a zero-hour duration
    if token == "0" {
        return DurationToken::NotRecorded;
    }

    let Some(caps) = DURATION_REGEX.captures(token) else {
        return DurationToken::Unrecognised;
    };

    let amount = caps[1].parse::<f64>().ok();
    let units = caps[2].chars().next().and_then(TimeUnit::from_code);
    match (amount, units) {
        (Some(amount), Some(units)) => DurationToken::Parsed(Duration::new(amount, units)),
        _ => DurationToken::Unrecognised,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDate, Timelike};

    #[test]
    fn test_duration_grammar() {
        assert_eq!(
            parse_duration("5d"),
            DurationToken::Parsed(Duration::new(5.0, TimeUnit::Days))
        );
        assert_eq!(
            parse_duration("-3h"),
            DurationToken::Parsed(Duration::new(-3.0, TimeUnit::Hours))
        );
        assert_eq!(
            parse_duration("12t"),
            DurationToken::Parsed(Duration::new(12.0, TimeUnit::Minutes))
        );
        assert_eq!(
            parse_duration("2m"),
            DurationToken::Parsed(Duration::new(2.0, TimeUnit::Months))
        );
        assert_eq!(parse_duration("0"), DurationToken::NotRecorded);
        assert_eq!(parse_duration("0d"), DurationToken::Parsed(Duration::new(0.0, TimeUnit::Days)));
        assert_eq!(parse_duration("abc"), DurationToken::Unrecognised);
        assert_eq!(parse_duration("5"), DurationToken::Unrecognised);
        assert_eq!(parse_duration("5dh"), DurationToken::Unrecognised);
        assert_eq!(parse_duration("1.5d"), DurationToken::Unrecognised);
    }

    #[test]
    fn test_convert_duration_fallbacks() {
        assert_eq!(convert("REL_LAG", DataType::Duration, "0").unwrap(), None);
        assert_eq!(
            convert("REL_LAG", DataType::Duration, "abc").unwrap(),
            Some(Value::Text("abc".to_string()))
        );
        assert_eq!(
            convert("REL_LAG", DataType::Duration, "4w").unwrap(),
            Some(Value::Duration(Duration::new(4.0, TimeUnit::Weeks)))
        );
    }

    #[test]
    fn test_boolean() {
        assert_eq!(convert("OPKEY", DataType::Boolean, "T").unwrap(), Some(Value::Boolean(true)));
        assert_eq!(convert("OPKEY", DataType::Boolean, "True").unwrap(), Some(Value::Boolean(true)));
        assert_eq!(convert("OPKEY", DataType::Boolean, "False").unwrap(), Some(Value::Boolean(false)));
        assert_eq!(convert("OPKEY", DataType::Boolean, "t").unwrap(), Some(Value::Boolean(false)));
        assert_eq!(convert("OPKEY", DataType::Boolean, "").unwrap(), None);
    }

    #[test]
    fn test_numeric_and_integer() {
        assert_eq!(convert("PPC", DataType::Numeric, "12.5").unwrap(), Some(Value::Numeric(12.5)));
        assert_eq!(convert("PPC", DataType::Numeric, "-1E3").unwrap(), Some(Value::Numeric(-1000.0)));
        assert_eq!(convert("SEQUENCE", DataType::Integer, "-42").unwrap(), Some(Value::Integer(-42)));

        assert!(matches!(
            convert("PPC", DataType::Numeric, "twelve"),
            Err(TableError::Conversion { data_type: DataType::Numeric, .. })
        ));
        assert!(matches!(
            convert("SEQUENCE", DataType::Integer, "4.0"),
            Err(TableError::Conversion { data_type: DataType::Integer, .. })
        ));
        assert!(convert("SEQUENCE", DataType::Integer, "").is_err());
    }

    #[test]
    fn test_date_patterns() {
        let expected = NaiveDate::from_ymd_opt(2024, 2, 27)
            .unwrap()
            .and_hms_opt(8, 30, 0)
            .unwrap();
        assert_eq!(parse_date_time("2024-02-27T08:30:00"), Some(expected));
        assert_eq!(parse_date_time("20240227083000Z"), Some(expected));
        assert_eq!(parse_date_time("202402270830"), Some(expected));

        let with_seconds = parse_date_time("20240227083015Z").unwrap();
        assert_eq!(with_seconds.second(), 15);
        assert_eq!(with_seconds.year(), 2024);

        assert_eq!(parse_date_time("27/02/2024"), None);
        assert!(matches!(
            convert("ESDATE", DataType::DateTime, "yesterday"),
            Err(TableError::Conversion { .. })
        ));
    }

    #[test]
    fn test_out_of_range_day_is_rejected() {
        // no clamping to the last day of the month
        assert_eq!(parse_date_time("2024-02-30T00:00:00"), None);
        assert_eq!(parse_date_time("202302290000"), None);
        assert!(matches!(
            convert("ESDATE", DataType::DateTime, "2024-02-30T00:00:00"),
            Err(TableError::Conversion { .. })
        ));
    }

    #[test]
    fn test_time_is_lenient() {
        let t = parse_time("08:30").unwrap();
        assert_eq!((t.hour(), t.minute()), (8, 30));
        let t = parse_time("8:5").unwrap();
        assert_eq!((t.hour(), t.minute()), (8, 5));
        assert_eq!(parse_time("24:00"), NaiveTime::from_hms_opt(0, 0, 0));
        assert_eq!(parse_time("25:00"), None);
        assert_eq!(parse_time("0830"), None);
        assert!(convert("OPSTART", DataType::Time, "noon").is_err());
    }

    #[test]
    fn test_resource_class() {
        assert_eq!(
            convert("RES_CLASS", DataType::ResourceClass, "N").unwrap(),
            Some(Value::ResourceClass(ResourceClass::Material))
        );
        assert_eq!(
            convert("RES_CLASS", DataType::ResourceClass, "L").unwrap(),
            Some(Value::ResourceClass(ResourceClass::Work))
        );
        assert_eq!(convert("RES_CLASS", DataType::ResourceClass, "").unwrap(), None);
    }

    #[test]
    fn test_identifier() {
        let id = uuid::Uuid::from_u128(0x1234_5678_9ABC_DEF0_0FED_CBA9_8765_4321);
        let text = guid::format(&id);
        assert_eq!(
            convert("ACT_UID", DataType::Identifier, &text).unwrap(),
            Some(Value::Identifier(id))
        );
        assert!(convert("ACT_UID", DataType::Identifier, "XYZ").is_err());
    }

    #[test]
    fn test_text_keeps_token() {
        assert_eq!(
            convert("DESCRIPTION", DataType::Text, "").unwrap(),
            Some(Value::Text(String::new()))
        );
        assert_eq!(
            convert("DESCRIPTION", DataType::Text, " Design ").unwrap(),
            Some(Value::Text(" Design ".to_string()))
        );
    }
}

// SPDX-FileCopyrightText: 2026 MoneyMate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Field codecs shared by the wire DTOs.
//!
//! The backend is inconsistent about numbers: `Decimal` columns arrive as
//! strings, computed totals as floats. Every amount is coerced to
//! [`Decimal`] here and nowhere else. Outbound amounts are written as decimal
//! strings so no precision is lost on the way back.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use rust_decimal::Decimal;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serializer};

struct DecimalVisitor;

impl Visitor<'_> for DecimalVisitor {
    type Value = Decimal;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a decimal number or numeric string")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Decimal, E> {
        let trimmed = v.trim();
        Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Decimal, E> {
        Ok(Decimal::from(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Decimal, E> {
        Ok(Decimal::from(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Decimal, E> {
        // Shortest round-trip text of the float, so 0.1 stays 0.1.
        self.visit_str(&v.to_string())
    }
}

/// `Decimal` from a string, integer or float; serialized as a string.
pub mod amount {
    use super::*;

    pub fn serialize<S: Serializer>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Decimal, D::Error> {
        deserializer.deserialize_any(DecimalVisitor)
    }
}

/// Optional variant of [`amount`]. `null` and a missing field both map to `None`.
pub mod opt_amount {
    use super::*;

    #[derive(Deserialize)]
    struct Wrapped(#[serde(with = "super::amount")] Decimal);

    pub fn serialize<S: Serializer>(
        value: &Option<Decimal>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(v) => serializer.collect_str(v),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Decimal>, D::Error> {
        Ok(Option::<Wrapped>::deserialize(deserializer)?.map(|w| w.0))
    }
}

/// Parse a backend timestamp. Naive values are taken as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// RFC 3339 timestamps, accepting the naive form FastAPI emits for
/// timezone-less columns.
pub mod timestamp {
    use super::*;

    pub fn serialize<S: Serializer>(
        value: &DateTime<Utc>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_timestamp(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid timestamp '{raw}'")))
    }
}

/// Identifier that may arrive as a JSON string or number.
pub mod flexible_id {
    use super::*;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<String>, D::Error> {
        Ok(
            Option::<RawId>::deserialize(deserializer)?.and_then(|raw| match raw {
                RawId::Text(text) if text.is_empty() => None,
                RawId::Text(text) => Some(text),
                RawId::Number(n) => Some(n.to_string()),
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Money {
        #[serde(with = "amount")]
        value: Decimal,
        #[serde(default, with = "opt_amount")]
        optional: Option<Decimal>,
    }

    #[test]
    fn amount_accepts_string_int_and_float() {
        let from_str: Money = serde_json::from_str(r#"{"value":"12.50"}"#).unwrap();
        let from_int: Money = serde_json::from_str(r#"{"value":12}"#).unwrap();
        let from_float: Money = serde_json::from_str(r#"{"value":0.1}"#).unwrap();
        assert_eq!(from_str.value, Decimal::new(1250, 2));
        assert_eq!(from_int.value, Decimal::from(12));
        assert_eq!(from_float.value, Decimal::new(1, 1));
        assert_eq!(from_str.optional, None);
    }

    #[test]
    fn amount_serializes_as_string() {
        let money = Money {
            value: Decimal::new(-500, 2),
            optional: Some(Decimal::from(3)),
        };
        let json = serde_json::to_value(&money).unwrap();
        assert_eq!(json["value"], "-5.00");
        assert_eq!(json["optional"], "3");
    }

    #[test]
    fn non_numeric_amount_is_rejected() {
        let err = serde_json::from_str::<Money>(r#"{"value":"lots"}"#).unwrap_err();
        assert!(err.to_string().contains("decimal"));
    }

    #[test]
    fn naive_timestamps_are_utc() {
        let naive = parse_timestamp("2025-03-01T10:15:30.123456").unwrap();
        let zoned = parse_timestamp("2025-03-01T10:15:30.123456Z").unwrap();
        assert_eq!(naive, zoned);
        assert!(parse_timestamp("yesterday").is_none());
    }
}

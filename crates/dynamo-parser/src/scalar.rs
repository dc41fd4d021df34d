//! Scalar codec registry — the typed reader/writer pair for each scalar kind.
//!
//! Five kinds are supported: string (`String`), int (`i64`), float (`f64`),
//! bool (`bool`), and date (`DateTime<Utc>`, wire-encoded as epoch
//! milliseconds in decimal text). Reads are permissive: a wrong tag or a
//! malformed payload decodes to `None`, never to an error.

use chrono::{DateTime, Utc};

use crate::attr_value::AttrValue;
use crate::error::RequiredValueError;

/// Reader half of a scalar codec.
pub type FromAttr<V> = fn(&AttrValue) -> Option<V>;

/// Writer half of a scalar codec.
pub type ToAttr<V> = fn(&V) -> AttrValue;

/// Read/write function pair for one scalar kind.
///
/// The pair is round-trip preserving: `read(&write(v)) == Some(v)` for every
/// in-range `v` of the kind.
pub struct ScalarCodec<V> {
    pub read: FromAttr<V>,
    pub write: ToAttr<V>,
}

impl<V> Clone for ScalarCodec<V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for ScalarCodec<V> {}

impl<V> ScalarCodec<V> {
    /// Permissive read: absent wire value, wrong tag, or malformed payload
    /// all decode to `None`.
    pub fn read_optional(&self, value: Option<&AttrValue>) -> Option<V> {
        value.and_then(|v| (self.read)(v))
    }

    /// Strict read: wraps [`read_optional`](Self::read_optional) and raises
    /// [`RequiredValueError`] when the result is absent.
    pub fn read_required(
        &self,
        value: Option<&AttrValue>,
        type_name: &str,
        attr_name: &str,
    ) -> Result<V, RequiredValueError> {
        self.read_optional(value)
            .ok_or_else(|| RequiredValueError::new(type_name, attr_name))
    }
}

/// Codec for the string kind: verbatim `S` payload.
pub fn string() -> ScalarCodec<String> {
    ScalarCodec {
        read: read_string,
        write: write_string,
    }
}

/// Codec for the int kind: decimal text under `N`, truncating any
/// fractional part toward zero.
pub fn int() -> ScalarCodec<i64> {
    ScalarCodec {
        read: read_int,
        write: write_int,
    }
}

/// Codec for the float kind: decimal text under `N`.
pub fn float() -> ScalarCodec<f64> {
    ScalarCodec {
        read: read_float,
        write: write_float,
    }
}

/// Codec for the bool kind: direct `BOOL` payload.
pub fn bool() -> ScalarCodec<bool> {
    ScalarCodec {
        read: read_bool,
        write: write_bool,
    }
}

/// Codec for the date kind: epoch milliseconds as decimal text under `N`.
pub fn date() -> ScalarCodec<DateTime<Utc>> {
    ScalarCodec {
        read: read_date,
        write: write_date,
    }
}

fn read_string(value: &AttrValue) -> Option<String> {
    value.as_s().map(str::to_owned)
}

fn read_int(value: &AttrValue) -> Option<i64> {
    value.as_n().and_then(parse_int)
}

fn read_float(value: &AttrValue) -> Option<f64> {
    value.as_n().and_then(|text| text.parse().ok())
}

fn read_bool(value: &AttrValue) -> Option<bool> {
    value.as_bool()
}

fn read_date(value: &AttrValue) -> Option<DateTime<Utc>> {
    value
        .as_n()
        .and_then(parse_int)
        .and_then(DateTime::from_timestamp_millis)
}

fn write_string(value: &String) -> AttrValue {
    AttrValue::S(value.clone())
}

fn write_int(value: &i64) -> AttrValue {
    AttrValue::N(value.to_string())
}

fn write_float(value: &f64) -> AttrValue {
    AttrValue::N(value.to_string())
}

fn write_bool(value: &bool) -> AttrValue {
    AttrValue::Bool(*value)
}

fn write_date(value: &DateTime<Utc>) -> AttrValue {
    AttrValue::N(value.timestamp_millis().to_string())
}

/// Decimal text to integer, truncating a fractional part toward zero.
/// Non-numeric text yields `None`.
fn parse_int(text: &str) -> Option<i64> {
    match text.parse::<i64>() {
        Ok(n) => Some(n),
        Err(_) => text
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .map(|f| f.trunc() as i64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_read_write() {
        let codec = string();
        assert_eq!((codec.write)(&"charlie".to_owned()), AttrValue::s("charlie"));
        assert_eq!((codec.read)(&AttrValue::s("charlie")), Some("charlie".to_owned()));
        assert_eq!((codec.read)(&AttrValue::bool(true)), None);
        assert_eq!((codec.read)(&AttrValue::n(1)), None);
    }

    #[test]
    fn test_int_read_write() {
        let codec = int();
        assert_eq!((codec.write)(&3579), AttrValue::n(3579));
        assert_eq!((codec.read)(&AttrValue::n(3579)), Some(3579));
        assert_eq!((codec.read)(&AttrValue::N("-12".to_owned())), Some(-12));
        assert_eq!((codec.read)(&AttrValue::s("3579")), None);
    }

    #[test]
    fn test_int_truncates_fractional_text() {
        let codec = int();
        assert_eq!((codec.read)(&AttrValue::N("3.9".to_owned())), Some(3));
        assert_eq!((codec.read)(&AttrValue::N("-3.9".to_owned())), Some(-3));
    }

    #[test]
    fn test_int_malformed_is_absent() {
        let codec = int();
        assert_eq!((codec.read)(&AttrValue::N("abc".to_owned())), None);
        assert_eq!((codec.read)(&AttrValue::N("".to_owned())), None);
    }

    #[test]
    fn test_float_read_write() {
        let codec = float();
        assert_eq!((codec.write)(&2.5), AttrValue::N("2.5".to_owned()));
        assert_eq!((codec.read)(&AttrValue::N("2.5".to_owned())), Some(2.5));
        assert_eq!((codec.read)(&AttrValue::N("1e3".to_owned())), Some(1000.0));
        assert_eq!((codec.read)(&AttrValue::N("nope".to_owned())), None);
        assert_eq!((codec.read)(&AttrValue::bool(false)), None);
    }

    #[test]
    fn test_bool_read_write() {
        let codec = bool();
        assert_eq!((codec.write)(&true), AttrValue::bool(true));
        assert_eq!((codec.read)(&AttrValue::bool(false)), Some(false));
        assert_eq!((codec.read)(&AttrValue::s("true")), None);
    }

    #[test]
    fn test_date_read_write() {
        let codec = date();
        let when = DateTime::from_timestamp_millis(23_456_789).unwrap();
        assert_eq!((codec.write)(&when), AttrValue::n(23_456_789));
        assert_eq!((codec.read)(&AttrValue::n(23_456_789)), Some(when));
        assert_eq!((codec.read)(&AttrValue::s("23456789")), None);
    }

    #[test]
    fn test_date_out_of_range_is_absent() {
        let codec = date();
        assert_eq!((codec.read)(&AttrValue::N(i64::MAX.to_string())), None);
    }

    #[test]
    fn test_read_optional_absent_value() {
        assert_eq!(string().read_optional(None), None);
        assert_eq!(string().read_optional(Some(&AttrValue::s("x"))), Some("x".to_owned()));
    }

    #[test]
    fn test_read_required_raises_on_absent() {
        let err = int()
            .read_required(None, "RequiredInt", "req")
            .unwrap_err();
        assert_eq!(err, RequiredValueError::new("RequiredInt", "req"));
        assert_eq!(err.to_string(), "RequiredInt.req");
    }

    #[test]
    fn test_read_required_raises_on_wrong_tag() {
        let err = int()
            .read_required(Some(&AttrValue::s("oops")), "RequiredInt", "req")
            .unwrap_err();
        assert_eq!(err.to_string(), "RequiredInt.req");
    }

    #[test]
    fn test_read_required_passes_through_value() {
        let value = AttrValue::n(7);
        assert_eq!(int().read_required(Some(&value), "T", "f"), Ok(7));
    }
}

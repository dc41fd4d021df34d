//! Round-trip laws for the scalar codecs.

use chrono::DateTime;
use dynamo_parser::scalar;
use proptest::prelude::*;

proptest! {
    #[test]
    fn string_round_trip(s in ".*") {
        let codec = scalar::string();
        prop_assert_eq!((codec.read)(&(codec.write)(&s)), Some(s));
    }

    #[test]
    fn int_round_trip(n in any::<i64>()) {
        let codec = scalar::int();
        prop_assert_eq!((codec.read)(&(codec.write)(&n)), Some(n));
    }

    #[test]
    fn float_round_trip(f in -1.0e300f64..1.0e300f64) {
        // Rust's f64 to_string/parse pair is exact for finite values.
        let codec = scalar::float();
        prop_assert_eq!((codec.read)(&(codec.write)(&f)), Some(f));
    }

    #[test]
    fn bool_round_trip(b in any::<bool>()) {
        let codec = scalar::bool();
        prop_assert_eq!((codec.read)(&(codec.write)(&b)), Some(b));
    }

    // Epoch-millis range from year 0 to year 9999; the wire resolution is
    // milliseconds, so round-tripping is exact inside it.
    #[test]
    fn date_round_trip(ms in -62_167_219_200_000i64..=253_402_300_799_999i64) {
        let codec = scalar::date();
        let when = DateTime::from_timestamp_millis(ms).unwrap();
        prop_assert_eq!((codec.read)(&(codec.write)(&when)), Some(when));
    }
}

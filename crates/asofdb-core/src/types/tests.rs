use crate::types::{
    ColumnType, DateTime64, Decimal, Decimal32, Decimal128, Timestamp, pow10, rescale_exact,
};
use asofdb_primitives::ScalarKind;

#[test]
fn pow10_stops_at_i128_width() {
    assert_eq!(pow10(0), Some(1));
    assert_eq!(pow10(18), Some(1_000_000_000_000_000_000));
    assert!(pow10(38).is_some());
    assert_eq!(pow10(39), None);
}

#[test]
fn rescale_exact_rejects_lost_digits() {
    assert_eq!(rescale_exact(1234, 2, 4), Some(123_400));
    assert_eq!(rescale_exact(123_400, 4, 2), Some(1234));
    assert_eq!(rescale_exact(123_401, 4, 2), None);
    assert_eq!(rescale_exact(-500, 2, 0), Some(-5));
    assert_eq!(rescale_exact(i128::MAX, 0, 1), None);
}

#[test]
fn zero_rescales_from_any_scale() {
    assert_eq!(rescale_exact(0, 50, 2), Some(0));
    assert_eq!(rescale_exact(0, 0, 60), Some(0));
    assert_eq!(Decimal::new(0, 50).rescale(4), Some(0));
    assert_eq!(Decimal::new(0, 50).to_integer(), Some(0));
}

#[test]
fn decimal_equality_is_numeric() {
    assert_eq!(Decimal::new(150, 2), Decimal::new(15, 1));
    assert_eq!(Decimal::new(0, 5), Decimal::ZERO);
    assert_ne!(Decimal::new(151, 2), Decimal::new(15, 1));
}

#[test]
fn decimal_display_places_the_point() {
    assert_eq!(Decimal::new(-1234, 2).to_string(), "-12.34");
    assert_eq!(Decimal::new(5, 3).to_string(), "0.005");
    assert_eq!(Decimal::new(42, 0).to_string(), "42");
}

#[test]
fn decimal_integer_view() {
    assert_eq!(Decimal::new(2500, 2).to_integer(), Some(25));
    assert!(!Decimal::new(2501, 2).is_integer());
}

#[test]
fn native_decimal_attaches_column_scale() {
    let value = Decimal32::from_mantissa(1999).to_decimal(2);
    assert_eq!(value.to_string(), "19.99");
    assert!(Decimal128::from(-1) < Decimal128::from(0));
}

#[test]
fn timestamp_rescale_and_equality() {
    let ms = Timestamp::from_millis(1_500);
    assert_eq!(ms.rescale(6), Some(1_500_000));
    assert_eq!(ms.rescale(0), None);
    assert_eq!(Timestamp::from_millis(2_000).rescale(0), Some(2));
    assert_eq!(Timestamp::from_seconds(2), Timestamp::from_millis(2_000));
    assert_eq!(Timestamp::from_millis(1_500).to_string(), "1.500s");
}

#[test]
fn datetime64_round_trips_through_timestamp() {
    let native = DateTime64::from_ticks(42);
    assert_eq!(native.to_timestamp(3), Timestamp::from_millis(42));
}

#[test]
fn column_type_exposes_scalar_kind_and_scale() {
    let decimal = ColumnType::Decimal64 { scale: 4 };
    assert_eq!(decimal.scalar_kind(), ScalarKind::Decimal64);
    assert_eq!(decimal.scale(), 4);
    assert_eq!(decimal.to_string(), "Decimal64(4)");
    assert_eq!(ColumnType::UInt32.to_string(), "UInt32");
    assert_eq!(ColumnType::UInt32.scale(), 0);
}

#[test]
fn column_type_scale_limits_follow_width() {
    assert!(ColumnType::Decimal32 { scale: 9 }.has_valid_scale());
    assert!(!ColumnType::Decimal32 { scale: 10 }.has_valid_scale());
    assert!(ColumnType::Decimal128 { scale: 38 }.has_valid_scale());
    assert!(!ColumnType::DateTime64 { precision: 12 }.has_valid_scale());
    assert!(ColumnType::Text.has_valid_scale());
}

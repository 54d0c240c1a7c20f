//! Scanning rows into container fields and writing them back.

use chrono::{DateTime, TimeZone, Utc};

use super::common::Celsius;
use optres::sql::{Scan, SqlValue, ToSqlValue};
use optres::{AsText, Error, Optional, Outcome};

/// A row as a driver would hand it over, one column per field.
struct Reading {
    station: Optional<String>,
    taken_at: Outcome<DateTime<Utc>>,
    temperature: Optional<Celsius>,
    samples: Outcome<u16>,
}

impl Reading {
    fn scan_row(row: &[SqlValue]) -> Result<Self, Error> {
        let mut reading = Reading {
            station: Optional::none(),
            taken_at: Outcome::default(),
            temperature: Optional::none(),
            samples: Outcome::default(),
        };
        reading.station.scan(&row[0])?;
        reading.taken_at.scan(&row[1])?;
        reading.temperature.scan(&row[2])?;
        reading.samples.scan(&row[3])?;
        Ok(reading)
    }
}

#[test]
fn test_full_row() {
    let row = [
        SqlValue::Blob(b"north".to_vec()),
        SqlValue::Text("2024-03-01T12:00:00+02:00".to_string()),
        SqlValue::Text("21.5°C".to_string()),
        SqlValue::Integer(12),
    ];
    let reading = Reading::scan_row(&row).unwrap();

    assert_eq!(reading.station.unwrap(), "north");
    assert_eq!(
        reading.taken_at.unwrap(),
        Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap()
    );
    assert_eq!(reading.temperature.unwrap(), Celsius(21.5));
    assert_eq!(reading.samples.unwrap(), 12);
}

#[test]
fn test_null_row() {
    let row = [SqlValue::Null, SqlValue::Null, SqlValue::Null, SqlValue::Null];
    let reading = Reading::scan_row(&row).unwrap();

    assert!(reading.station.is_none());
    assert!(reading.taken_at.is_err());
    assert!(reading.temperature.is_none());
    assert!(reading.samples.is_err());
}

#[test]
fn test_out_of_range_integer_fails_the_row() {
    let row = [
        SqlValue::Null,
        SqlValue::Null,
        SqlValue::Null,
        SqlValue::Integer(70_000),
    ];
    let err = Reading::scan_row(&row).err().unwrap();
    assert!(matches!(err, Error::OutOfRange { target: "u16", .. }));
}

#[test]
fn test_bad_timestamp_text_fails() {
    let mut taken_at = Outcome::<DateTime<Utc>>::default();
    let err = taken_at
        .scan(&SqlValue::Text("yesterday".to_string()))
        .unwrap_err();
    assert!(matches!(err, Error::Timestamp(_)));
    assert!(taken_at.is_err());
}

#[test]
fn test_bytes_into_integer_is_a_mismatch() {
    let mut count = Optional::<i64>::some(1);
    let err = count.scan(&SqlValue::Blob(vec![0x31])).unwrap_err();
    assert!(matches!(
        err,
        Error::TypeMismatch {
            found: "blob",
            expected: "i64"
        }
    ));
    assert!(count.is_none());
}

#[test]
fn test_values_written_back() {
    assert_eq!(Optional::<i64>::none().to_sql_value().unwrap(), SqlValue::Null);
    assert_eq!(
        Outcome::<String>::failure("gone").to_sql_value().unwrap(),
        SqlValue::Null
    );
    assert_eq!(
        Optional::some(Celsius(3.0)).to_sql_value().unwrap(),
        SqlValue::Real(3.0)
    );
    assert_eq!(
        Optional::some(AsText(std::net::Ipv4Addr::LOCALHOST))
            .to_sql_value()
            .unwrap(),
        SqlValue::Text("127.0.0.1".to_string())
    );
    assert!(matches!(
        Outcome::success(u64::MAX).to_sql_value(),
        Err(Error::Unsupported(_))
    ));
}

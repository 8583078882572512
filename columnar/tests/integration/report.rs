use arrow::array::{Date32Array, Float64Array, Int32Array, NullArray, StringArray};
use arrow::datatypes::DataType;
use columnar_record::{
    columnar, DecodeError, DecodeOptions, FailReason, FieldOutcome, RecordBuilder, SkipReason,
};

use crate::{batch, col};

#[columnar]
#[derive(Debug, Default, PartialEq)]
struct Row {
    #[columnar(column = "day")]
    day: i32,
    #[columnar(column = "name")]
    name: String,
    #[columnar(column = "missing")]
    missing: i64,
    #[columnar(column = "empty")]
    empty: i32,
    #[columnar(column = "ratio")]
    ratio: i32,
    #[columnar(column = "count")]
    count: String,
}

fn sample() -> columnar_record::RecordBatch {
    batch(vec![
        ("day", col(Date32Array::from(vec![Some(1), None]))),
        ("name", col(StringArray::from(vec![Some("a"), None]))),
        ("empty", col(NullArray::new(2))),
        ("ratio", col(Float64Array::from(vec![0.5, 1.5]))),
        ("count", col(Int32Array::from(vec![1, 2]))),
    ])
}

#[test]
fn every_field_gets_an_outcome() {
    let rows = RecordBuilder::<Row>::new()
        .build_with_report(&sample())
        .unwrap();
    assert_eq!(rows.len(), 2);

    let first = &rows[0];
    assert_eq!(first.report.row, 0);
    assert_eq!(first.record.day, 1);
    assert_eq!(first.record.name, "a");
    assert_eq!(first.report.outcome("day"), Some(&FieldOutcome::Decoded));
    assert_eq!(
        first.report.outcome("missing"),
        Some(&FieldOutcome::Skipped(SkipReason::MissingColumn))
    );
    assert_eq!(
        first.report.outcome("empty"),
        Some(&FieldOutcome::Skipped(SkipReason::NoData))
    );
    assert_eq!(
        first.report.outcome("ratio"),
        Some(&FieldOutcome::Failed(FailReason::Decode(
            DecodeError::UnsupportedType(DataType::Float64)
        )))
    );
    assert!(matches!(
        first.report.outcome("count"),
        Some(FieldOutcome::Failed(FailReason::TypeMismatch { found: DataType::Int32, .. }))
    ));
    assert_eq!(first.report.skipped().count(), 2);
    assert_eq!(first.report.failures().count(), 2);
    assert!(!first.report.is_clean());

    let second = &rows[1];
    assert_eq!(second.report.row, 1);
    assert_eq!(
        second.report.outcome("day"),
        Some(&FieldOutcome::Failed(FailReason::Decode(DecodeError::NullValue(
            DataType::Date32
        ))))
    );
    assert_eq!(second.report.outcome("name"), Some(&FieldOutcome::Decoded));
    assert_eq!(second.record, Row::default());
}

#[test]
fn report_order_matches_bindings() {
    let rows = RecordBuilder::<Row>::new()
        .build_with_report(&sample())
        .unwrap();
    let fields: Vec<_> = rows[0].report.fields.iter().map(|f| f.field).collect();
    assert_eq!(fields, ["day", "name", "missing", "empty", "ratio", "count"]);
}

#[test]
fn clean_row() {
    #[columnar]
    #[derive(Default)]
    struct Small {
        #[columnar(column = "name")]
        name: String,
    }

    let rows = RecordBuilder::<Small>::new()
        .build_with_report(&sample())
        .unwrap();
    assert!(rows.iter().all(|r| r.report.is_clean()));
}

#[test]
fn report_serializes() {
    let rows = RecordBuilder::<Row>::new()
        .build_with_report(&sample())
        .unwrap();
    let json = serde_json::to_value(&rows[1].report).unwrap();
    assert_eq!(json["row"], 1);
    assert_eq!(json["fields"][0]["field"], "day");
    assert_eq!(
        json["fields"][0]["outcome"]["Failed"]["Decode"],
        "null value in non-nullable `Date32` cell"
    );
    assert_eq!(json["fields"][2]["outcome"]["Skipped"], "MissingColumn");
    assert_eq!(
        json["fields"][5]["outcome"]["Failed"]["TypeMismatch"]["found"],
        "Int32"
    );
}

#[test]
fn require_columns_reports_missing_as_failure() {
    let builder = RecordBuilder::<Row>::with_options(DecodeOptions::best_effort().require_columns(true));
    let rows = builder.build_with_report(&sample()).unwrap();
    assert_eq!(
        rows[0].report.outcome("missing"),
        Some(&FieldOutcome::Failed(FailReason::MissingColumn))
    );
}

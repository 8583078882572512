use arrow::array::{Date32Array, Float64Array, Int32Array};
use arrow::datatypes::DataType;
use columnar_record::{
    columnar, from_record_batch, ColumnarError, DecodeError, DecodeOptions, DecodePolicy,
    RecordBuilder,
};

use crate::{batch, col};

#[columnar]
#[derive(Debug, Default)]
struct Row {
    #[columnar(column = "id")]
    id: i32,
    #[columnar(column = "day")]
    day: i32,
}

#[test]
fn options_from_config() {
    let options: DecodeOptions = serde_json::from_str(r#"{"policy": "fail_fast"}"#).unwrap();
    assert_eq!(options.policy, DecodePolicy::FailFast);
    assert!(!options.require_columns);

    let options: DecodeOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(options, DecodeOptions::best_effort());

    let json = serde_json::to_string(&DecodeOptions::fail_fast().require_columns(true)).unwrap();
    assert_eq!(json, r#"{"policy":"fail_fast","require_columns":true}"#);
}

#[test]
fn fail_fast_stops_at_first_bad_cell() {
    let rec = batch(vec![
        ("id", col(Int32Array::from(vec![1, 2, 3]))),
        ("day", col(Date32Array::from(vec![Some(1), None, None]))),
    ]);

    let best_effort: Vec<Row> = from_record_batch(&rec);
    assert_eq!(best_effort.len(), 3);
    assert_eq!(best_effort[2].id, 3);

    let err = RecordBuilder::<Row>::with_options(DecodeOptions::fail_fast())
        .build(&rec)
        .unwrap_err();
    match err {
        ColumnarError::Decode {
            row,
            field,
            column,
            source,
        } => {
            assert_eq!(row, 1);
            assert_eq!(field, "day");
            assert_eq!(column, "day");
            assert_eq!(source, DecodeError::NullValue(DataType::Date32));
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn fail_fast_rejects_mismatched_column_before_decoding() {
    let rec = batch(vec![
        ("id", col(Float64Array::from(Vec::<f64>::new()))),
        ("day", col(arrow::array::StringArray::from(Vec::<&str>::new()))),
    ]);
    let err = RecordBuilder::<Row>::with_options(DecodeOptions::fail_fast())
        .build(&rec)
        .unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"cannot read column `id` for `id`");

    let rec = batch(vec![(
        "day",
        col(arrow::array::StringArray::from(Vec::<&str>::new())),
    )]);
    let err = RecordBuilder::<Row>::with_options(DecodeOptions::fail_fast())
        .build(&rec)
        .unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"field `day` of type `i32` cannot hold column `day` of type `Utf8`"
    );
}

#[test]
fn missing_column_only_fails_when_required() {
    let rec = batch(vec![("id", col(Int32Array::from(vec![1])))]);
    let rows = RecordBuilder::<Row>::with_options(DecodeOptions::fail_fast())
        .build(&rec)
        .unwrap();
    assert_eq!(rows[0].id, 1);
    assert_eq!(rows[0].day, 0);

    let err = RecordBuilder::<Row>::with_options(DecodeOptions::fail_fast().require_columns(true))
        .build(&rec)
        .unwrap_err();
    assert!(matches!(
        err,
        ColumnarError::MissingColumn { field: "day", .. }
    ));
}

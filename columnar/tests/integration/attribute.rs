use arrow::array::{Int32Array, Int64Array, StringArray};
use columnar_record::{columnar, from_record_batch, FromRecordBatch, Value};

use crate::{batch, col};

#[test]
fn shape_follows_declaration_order() {
    #[columnar]
    #[derive(Default)]
    struct A {
        #[columnar(column = "b")]
        b: String,
        not_bound: u8,
        #[columnar(column = "a")]
        a: i64,
    }

    let shape = A::shape();
    let bound: Vec<_> = shape
        .bindings()
        .iter()
        .map(|b| (b.field(), b.column()))
        .collect();
    assert_eq!(bound, [("b", "b"), ("a", "a")]);
}

#[test]
fn bind_all_uses_field_names() {
    #[columnar(bind_all)]
    #[derive(Debug, Default, PartialEq)]
    struct Row {
        id: i64,
        #[columnar(column = "label")]
        name: String,
        #[columnar(skip)]
        cached: Option<Value>,
        r#type: i32,
    }

    let shape = Row::shape();
    let columns: Vec<_> = shape.bindings().iter().map(|b| b.column()).collect();
    assert_eq!(columns, ["id", "label", "type"]);

    let rec = batch(vec![
        ("id", col(Int64Array::from(vec![10, 20]))),
        ("label", col(StringArray::from(vec!["x", "y"]))),
        ("type", col(Int32Array::from(vec![1, 2]))),
        ("cached", col(Int32Array::from(vec![3, 4]))),
    ]);
    let rows: Vec<Row> = from_record_batch(&rec);
    assert_eq!(
        rows,
        vec![
            Row {
                id: 10,
                name: "x".into(),
                cached: None,
                r#type: 1,
            },
            Row {
                id: 20,
                name: "y".into(),
                cached: None,
                r#type: 2,
            },
        ]
    );
}

#[test]
fn same_column_feeds_two_fields() {
    #[columnar]
    #[derive(Default)]
    struct Twice {
        #[columnar(column = "v")]
        narrow: i32,
        #[columnar(column = "v")]
        wide: i64,
        #[columnar(column = "v")]
        raw: Option<Value>,
    }

    let rec = batch(vec![("v", col(Int32Array::from(vec![-3])))]);
    let rows: Vec<Twice> = from_record_batch(&rec);
    assert_eq!(rows[0].narrow, -3);
    assert_eq!(rows[0].wide, -3);
    assert_eq!(rows[0].raw, Some(Value::Int32(-3)));
}

#[test]
fn generic_struct() {
    #[columnar]
    #[derive(Default)]
    struct Wrapper<T>
    where
        T: columnar_record::FromValue + Default + 'static,
    {
        #[columnar(column = "v")]
        v: T,
    }

    let rec = batch(vec![("v", col(StringArray::from(vec!["s"])))]);
    let rows: Vec<Wrapper<String>> = from_record_batch(&rec);
    assert_eq!(rows[0].v, "s");
}

#[test]
fn later_duplicate_column_wins() {
    #[columnar]
    #[derive(Default)]
    struct Row {
        #[columnar(column = "v")]
        v: i32,
    }

    let rec = batch(vec![
        ("v", col(Int32Array::from(vec![1]))),
        ("v", col(Int32Array::from(vec![2]))),
    ]);
    let rows: Vec<Row> = from_record_batch(&rec);
    assert_eq!(rows[0].v, 2);
}

use std::sync::Arc;

use arrow::array::{ArrayRef, Decimal128Array, Int64Array, StringArray, TimestampMillisecondArray};
use chrono::DateTime;
use chrono_tz::Tz;
use columnar_record::{columnar, Decimal, RecordBatch, RecordBuilder};

#[columnar]
#[derive(Debug, Default)]
struct Trade {
    #[columnar(column = "trade_id")]
    id: i64,
    #[columnar(column = "symbol")]
    symbol: String,
    #[columnar(column = "price")]
    price: Decimal,
    #[columnar(column = "executed_at")]
    executed_at: Option<DateTime<Tz>>,
    // not bound, stays empty
    note: String,
}

fn main() {
    let prices = Decimal128Array::from(vec![Some(12345), None])
        .with_precision_and_scale(18, 2)
        .unwrap();
    let batch = RecordBatch::try_from_iter(vec![
        ("trade_id", Arc::new(Int64Array::from(vec![1, 2])) as ArrayRef),
        ("symbol", Arc::new(StringArray::from(vec!["AAPL", "MSFT"])) as ArrayRef),
        ("price", Arc::new(prices) as ArrayRef),
        (
            "executed_at",
            Arc::new(
                TimestampMillisecondArray::from(vec![1_623_312_219_000, 1_623_312_220_000])
                    .with_timezone("America/New_York"),
            ) as ArrayRef,
        ),
    ])
    .unwrap();

    let builder = RecordBuilder::<Trade>::new();
    for decoded in builder.build_with_report(&batch).unwrap() {
        println!("{:?}", decoded.record);
        for (field, reason) in decoded.report.failures() {
            println!("  {} from `{}`: {:?}", field.field, field.column, reason);
        }
    }
}

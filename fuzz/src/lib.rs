use std::sync::Arc;

use arbitrary::Arbitrary;
use arrow::array::{
    ArrayRef, Date32Array, Decimal128Array, Int32Array, StringArray, TimestampMillisecondArray,
};
use chrono::DateTime;
use chrono_tz::Tz;
use columnar_record::{columnar, Decimal, RecordBatch};

#[columnar]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    #[columnar(column = "id")]
    pub id: i32,
    #[columnar(column = "name")]
    pub name: String,
    #[columnar(column = "ts")]
    pub ts: Option<DateTime<Tz>>,
    #[columnar(column = "price")]
    pub price: Decimal,
    #[columnar(column = "day")]
    pub day: i32,
    #[columnar(column = "missing")]
    pub missing: i64,
    // mismatched on purpose: `id` is an int32 column
    #[columnar(column = "id")]
    pub id_as_string: String,
}

/// Column contents driving one batch. Every column is cut or padded with
/// nulls to the length of `ids`.
#[derive(Debug, Clone, Arbitrary)]
pub struct FuzzBatch {
    pub ids: Vec<Option<i32>>,
    pub names: Vec<Option<String>>,
    pub timestamps: Vec<Option<i64>>,
    pub zone: Option<String>,
    pub mantissas: Vec<Option<i128>>,
    pub scale: u8,
    pub days: Vec<Option<i32>>,
}

fn fit<T: Clone>(values: &[Option<T>], rows: usize) -> Vec<Option<T>> {
    (0..rows)
        .map(|i| values.get(i).cloned().flatten())
        .collect()
}

impl FuzzBatch {
    pub fn rows(&self) -> usize {
        self.ids.len()
    }

    pub fn to_record_batch(&self) -> RecordBatch {
        let rows = self.rows();
        let mut timestamps = TimestampMillisecondArray::from(fit(&self.timestamps, rows));
        if let Some(zone) = &self.zone {
            timestamps = timestamps.with_timezone(zone.as_str());
        }
        let scale = (self.scale % 39) as i8;
        let prices = Decimal128Array::from(fit(&self.mantissas, rows))
            .with_precision_and_scale(38, scale)
            .expect("scale is at most 38");
        RecordBatch::try_from_iter(vec![
            ("id", Arc::new(Int32Array::from(fit(&self.ids, rows))) as ArrayRef),
            ("name", Arc::new(StringArray::from(fit(&self.names, rows))) as ArrayRef),
            ("ts", Arc::new(timestamps) as ArrayRef),
            ("price", Arc::new(prices) as ArrayRef),
            ("day", Arc::new(Date32Array::from(fit(&self.days, rows))) as ArrayRef),
        ])
        .expect("columns have equal length")
    }
}

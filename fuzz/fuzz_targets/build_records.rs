#![no_main]
use columnar_record_fuzz::{FuzzBatch, Row};
use columnar_record::{from_record_batch, RecordBuilder};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: FuzzBatch| {
    let batch = input.to_record_batch();
    let rows: Vec<Row> = from_record_batch(&batch);
    assert_eq!(rows.len(), input.rows());

    let reported = RecordBuilder::<Row>::new().build_with_report(&batch).unwrap();
    assert_eq!(reported.len(), input.rows());
    for (i, (decoded, row)) in reported.iter().zip(&rows).enumerate() {
        assert_eq!(decoded.report.row, i);
        assert_eq!(&decoded.record, row);
    }
});

#![no_main]
use columnar_record::ColumnReader;
use columnar_record_fuzz::FuzzBatch;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (FuzzBatch, usize)| {
    let (input, row) = input;
    let batch = input.to_record_batch();
    for column in batch.columns() {
        let reader = ColumnReader::try_new(column.as_ref()).unwrap();
        // out of bounds rows must be reported, not panic
        let _ = reader.value(row);
    }
});

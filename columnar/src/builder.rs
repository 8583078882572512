//! Row-to-record assembly.
//!
//! A batch is planned once: every binding is resolved to a column (or to a
//! reason it can't be used) before any row is decoded. Rows are then built
//! in order, each from `T::default()`.

use std::collections::HashMap;

use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;
use itertools::Itertools;
use tracing::{debug, trace};

use crate::decode::ColumnReader;
use crate::report::{Decoded, FailReason, FieldOutcome, FieldReport, RowReport, SkipReason};
use crate::shape::{FieldBinding, FromRecordBatch, Shape};
use crate::{ColumnarError, DecodeOptions, ValueKind};

/// Builds `T`s from record batches.
///
/// The shape of `T` is computed once when the builder is created and reused
/// for every batch.
pub struct RecordBuilder<T> {
    shape: Shape<T>,
    options: DecodeOptions,
}

impl<T: FromRecordBatch> Default for RecordBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FromRecordBatch> RecordBuilder<T> {
    pub fn new() -> Self {
        Self::with_options(DecodeOptions::default())
    }

    pub fn with_options(options: DecodeOptions) -> Self {
        Self {
            shape: T::shape(),
            options,
        }
    }
}

impl<T: Default> RecordBuilder<T> {
    /// Use a hand-built shape instead of `T::shape()`.
    pub fn from_shape(shape: Shape<T>, options: DecodeOptions) -> Self {
        Self { shape, options }
    }

    pub fn shape(&self) -> &Shape<T> {
        &self.shape
    }

    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// One record per row of `batch`, in row order.
    ///
    /// Only returns `Err` under [`DecodePolicy::FailFast`](crate::DecodePolicy::FailFast).
    pub fn build(&self, batch: &RecordBatch) -> Result<Vec<T>, ColumnarError> {
        let plan = self.plan(batch)?;
        let mut records = Vec::with_capacity(batch.num_rows());
        for row in 0..batch.num_rows() {
            let mut record = T::default();
            for (binding, column) in self.shape.bindings().iter().zip(&plan) {
                self.fill(&mut record, binding, column, row)?;
            }
            records.push(record);
        }
        Ok(records)
    }

    /// Like [`build`](Self::build), with a report of every field's outcome
    /// alongside each record.
    pub fn build_with_report(&self, batch: &RecordBatch) -> Result<Vec<Decoded<T>>, ColumnarError> {
        let plan = self.plan(batch)?;
        let mut records = Vec::with_capacity(batch.num_rows());
        for row in 0..batch.num_rows() {
            let mut record = T::default();
            let mut report = RowReport::new(row, plan.len());
            for (binding, column) in self.shape.bindings().iter().zip(&plan) {
                let outcome = self.fill(&mut record, binding, column, row)?;
                report.fields.push(FieldReport {
                    field: binding.field(),
                    column: binding.column().to_string(),
                    outcome,
                });
            }
            records.push(Decoded { record, report });
        }
        Ok(records)
    }

    fn plan<'b>(&self, batch: &'b RecordBatch) -> Result<Vec<Planned<'b>>, ColumnarError> {
        let schema = batch.schema_ref();
        let index: HashMap<&str, usize> = schema
            .fields()
            .iter()
            .enumerate()
            .map(|(i, field)| (field.name().as_str(), i))
            .collect();
        debug!(
            rows = batch.num_rows(),
            columns = batch.num_columns(),
            bound = %self.shape.bindings().iter().map(|b| b.column()).join(","),
            "building records from batch"
        );

        let fail_fast = self.options.is_fail_fast();
        let mut plan = Vec::with_capacity(self.shape.len());
        for binding in self.shape.bindings() {
            let Some(&i) = index.get(binding.column()) else {
                if self.options.require_columns {
                    if fail_fast {
                        return Err(ColumnarError::MissingColumn {
                            field: binding.field(),
                            column: binding.column().to_string(),
                        });
                    }
                    plan.push(Planned::Fail(FailReason::MissingColumn));
                } else {
                    debug!(field = binding.field(), column = binding.column(), "column not in batch");
                    plan.push(Planned::Skip(SkipReason::MissingColumn));
                }
                continue;
            };

            let array = batch.column(i).as_ref();
            let data_type = array.data_type();
            if data_type == &DataType::Null {
                debug!(field = binding.field(), column = binding.column(), "column has no data");
                plan.push(Planned::Skip(SkipReason::NoData));
                continue;
            }
            if let Some(kind) = ValueKind::of(data_type) {
                if !binding.accepts(kind) {
                    if fail_fast {
                        return Err(ColumnarError::TypeMismatch {
                            field: binding.field(),
                            column: binding.column().to_string(),
                            found: data_type.clone(),
                            expected: binding.field_type(),
                        });
                    }
                    plan.push(Planned::Fail(FailReason::TypeMismatch {
                        found: data_type.clone(),
                        expected: binding.field_type(),
                    }));
                    continue;
                }
            }
            match ColumnReader::try_new(array) {
                Ok(reader) => plan.push(Planned::Read(reader)),
                Err(source) if fail_fast => {
                    return Err(ColumnarError::Column {
                        field: binding.field(),
                        column: binding.column().to_string(),
                        source,
                    })
                }
                Err(err) => plan.push(Planned::Fail(FailReason::Decode(err))),
            }
        }
        Ok(plan)
    }

    fn fill(
        &self,
        record: &mut T,
        binding: &FieldBinding<T>,
        column: &Planned<'_>,
        row: usize,
    ) -> Result<FieldOutcome, ColumnarError> {
        let reader = match column {
            Planned::Read(reader) => reader,
            Planned::Skip(reason) => return Ok(FieldOutcome::Skipped(*reason)),
            Planned::Fail(reason) => return Ok(FieldOutcome::Failed(reason.clone())),
        };
        let fail_fast = self.options.is_fail_fast();
        let value = match reader.value(row) {
            Ok(value) => value,
            Err(source) if fail_fast => {
                return Err(ColumnarError::Decode {
                    row,
                    field: binding.field(),
                    column: binding.column().to_string(),
                    source,
                })
            }
            Err(err) => {
                trace!(row, field = binding.field(), %err, "cell left at default");
                return Ok(FieldOutcome::Failed(FailReason::Decode(err)));
            }
        };
        match binding.assign(record, value) {
            Ok(()) => Ok(FieldOutcome::Decoded),
            Err(source) if fail_fast => Err(ColumnarError::Convert {
                row,
                field: binding.field(),
                column: binding.column().to_string(),
                source,
            }),
            Err(err) => {
                trace!(row, field = binding.field(), %err, "field left at default");
                Ok(FieldOutcome::Failed(FailReason::Convert(err)))
            }
        }
    }
}

enum Planned<'b> {
    Read(ColumnReader<'b>),
    Skip(SkipReason),
    Fail(FailReason),
}

/// Decode `batch` into one `T` per row, leaving any field that cannot be
/// filled at its default.
pub fn from_record_batch<T: FromRecordBatch>(batch: &RecordBatch) -> Vec<T> {
    match RecordBuilder::<T>::new().build(batch) {
        Ok(records) => records,
        Err(err) => unreachable!("best effort build failed: {err}"),
    }
}

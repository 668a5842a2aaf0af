//! Observers for decoded stream messages.

use arrow::datatypes::SchemaRef;
use arrow::record_batch::RecordBatch;

use crate::DecodeError;

/// Receives messages from an [`IpcStreamDecoder`](crate::IpcStreamDecoder)
/// in stream order.
///
/// Returning an error from either method makes the decoder's current
/// `consume` call fail, which in turn aborts the transfer feeding it.
pub trait Listener {
    /// Called once, when the stream's schema message has been decoded.
    ///
    /// # Errors
    ///
    /// Returns an error if the listener rejects the schema.
    fn on_schema(&mut self, _schema: &SchemaRef) -> Result<(), DecodeError> {
        Ok(())
    }

    /// Called for every decoded record batch.
    ///
    /// # Errors
    ///
    /// Returns an error if the listener cannot accept the batch.
    fn on_record_batch(&mut self, batch: RecordBatch) -> Result<(), DecodeError>;
}

impl<L: Listener + ?Sized> Listener for &mut L {
    fn on_schema(&mut self, schema: &SchemaRef) -> Result<(), DecodeError> {
        (**self).on_schema(schema)
    }

    fn on_record_batch(&mut self, batch: RecordBatch) -> Result<(), DecodeError> {
        (**self).on_record_batch(batch)
    }
}

/// Listener that keeps every decoded record batch.
#[derive(Debug, Clone, Default)]
pub struct CollectListener {
    schema: Option<SchemaRef>,
    batches: Vec<RecordBatch>,
    rows: usize,
}

impl CollectListener {
    /// Creates an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stream schema, once it has been decoded.
    #[must_use]
    pub const fn schema(&self) -> Option<&SchemaRef> {
        self.schema.as_ref()
    }

    /// Returns the number of record batches collected so far.
    #[must_use]
    pub fn num_record_batches(&self) -> usize {
        self.batches.len()
    }

    /// Returns the total number of rows collected so far.
    #[must_use]
    pub const fn num_rows(&self) -> usize {
        self.rows
    }

    /// Returns the collected batches in stream order.
    #[must_use]
    pub fn record_batches(&self) -> &[RecordBatch] {
        &self.batches
    }

    /// Consumes the collector, returning the schema and batches.
    #[must_use]
    pub fn into_parts(self) -> (Option<SchemaRef>, Vec<RecordBatch>) {
        (self.schema, self.batches)
    }
}

impl Listener for CollectListener {
    fn on_schema(&mut self, schema: &SchemaRef) -> Result<(), DecodeError> {
        self.schema = Some(SchemaRef::clone(schema));
        Ok(())
    }

    fn on_record_batch(&mut self, batch: RecordBatch) -> Result<(), DecodeError> {
        self.rows += batch.num_rows();
        self.batches.push(batch);
        Ok(())
    }
}

/// Listener that only counts batches and rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountListener {
    batches: usize,
    rows: usize,
}

impl CountListener {
    /// Creates a zeroed counter.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            batches: 0,
            rows: 0,
        }
    }

    /// Returns the number of record batches seen.
    #[must_use]
    pub const fn num_record_batches(&self) -> usize {
        self.batches
    }

    /// Returns the total number of rows seen.
    #[must_use]
    pub const fn num_rows(&self) -> usize {
        self.rows
    }
}

impl Listener for CountListener {
    fn on_record_batch(&mut self, batch: RecordBatch) -> Result<(), DecodeError> {
        self.batches += 1;
        self.rows += batch.num_rows();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow::array::Int32Array;
    use arrow::datatypes::{DataType, Field, Schema};
    use std::sync::Arc;

    fn batch(values: Vec<i32>) -> RecordBatch {
        let schema = Arc::new(Schema::new(vec![Field::new("id", DataType::Int32, false)]));
        RecordBatch::try_new(schema, vec![Arc::new(Int32Array::from(values))]).unwrap()
    }

    #[test]
    fn test_collect_listener_counts() {
        let mut listener = CollectListener::new();
        listener.on_schema(&batch(vec![]).schema()).unwrap();
        listener.on_record_batch(batch(vec![1, 2, 3])).unwrap();
        listener.on_record_batch(batch(vec![4])).unwrap();

        assert!(listener.schema().is_some());
        assert_eq!(listener.num_record_batches(), 2);
        assert_eq!(listener.num_rows(), 4);
        assert_eq!(listener.record_batches()[1].num_rows(), 1);
    }

    #[test]
    fn test_count_listener() {
        let mut listener = CountListener::new();
        listener.on_record_batch(batch(vec![1, 2])).unwrap();
        listener.on_record_batch(batch(vec![])).unwrap();

        assert_eq!(listener.num_record_batches(), 2);
        assert_eq!(listener.num_rows(), 2);
    }

    fn feed<L: Listener>(mut listener: L) {
        listener.on_record_batch(batch(vec![7])).unwrap();
    }

    #[test]
    fn test_listener_through_mut_ref() {
        let mut inner = CountListener::new();
        feed(&mut inner);
        assert_eq!(inner.num_record_batches(), 1);
    }
}

//! Benchmark utilities for arrowget.

use arrow::array::{Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::ipc::writer::StreamWriter;
use arrow::record_batch::RecordBatch;
use bytes::Bytes;
use std::sync::Arc;

/// Shape of a synthetic IPC stream.
#[derive(Debug, Clone, Copy)]
pub struct StreamShape {
    /// Number of record batches.
    pub batches: usize,
    /// Rows per record batch.
    pub rows_per_batch: usize,
}

impl Default for StreamShape {
    fn default() -> Self {
        Self {
            batches: 64,
            rows_per_batch: 4096,
        }
    }
}

impl StreamShape {
    /// Total rows across the stream.
    pub const fn total_rows(&self) -> usize {
        self.batches * self.rows_per_batch
    }
}

/// Encodes a synthetic Arrow IPC stream with an int, float and string column.
pub fn encode_stream(shape: StreamShape) -> Vec<u8> {
    let schema = Arc::new(Schema::new(vec![
        Field::new("seq", DataType::Int64, false),
        Field::new("value", DataType::Float64, false),
        Field::new("tag", DataType::Utf8, true),
    ]));

    let mut writer = StreamWriter::try_new(Vec::new(), &schema).expect("valid schema");
    for b in 0..shape.batches {
        let start = (b * shape.rows_per_batch) as i64;
        let seq: Vec<i64> = (start..start + shape.rows_per_batch as i64).collect();
        let value: Vec<f64> = seq.iter().map(|s| *s as f64 * 0.25).collect();
        let tag: Vec<Option<String>> = seq
            .iter()
            .map(|s| (s % 7 != 0).then(|| format!("t{}", s % 100)))
            .collect();

        let batch = RecordBatch::try_new(
            Arc::clone(&schema),
            vec![
                Arc::new(Int64Array::from(seq)),
                Arc::new(Float64Array::from(value)),
                Arc::new(StringArray::from(tag)),
            ],
        )
        .expect("columns match schema");
        writer.write(&batch).expect("write batch");
    }
    writer.finish().expect("finish stream");
    writer.into_inner().expect("flush stream")
}

/// Splits `data` into chunks the way a network body would arrive.
pub fn split_chunks(data: &[u8], chunk_size: usize) -> Vec<Bytes> {
    data.chunks(chunk_size.max(1))
        .map(Bytes::copy_from_slice)
        .collect()
}

//! Shared batch fixtures for formatter tests.

use arrow::array::{Float64Array, Int32Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema, SchemaRef};
use arrow::record_batch::RecordBatch;
use std::sync::Arc;

pub(crate) fn schema() -> SchemaRef {
    Arc::new(Schema::new(vec![
        Field::new("id", DataType::Int32, false),
        Field::new("symbol", DataType::Utf8, true),
        Field::new("price", DataType::Float64, false),
    ]))
}

pub(crate) fn batch(ids: &[i32]) -> RecordBatch {
    let symbols: Vec<Option<String>> = ids.iter().map(|i| Some(format!("S{i}"))).collect();
    let prices: Vec<f64> = ids.iter().map(|i| f64::from(*i) * 1.5).collect();
    RecordBatch::try_new(
        schema(),
        vec![
            Arc::new(Int32Array::from(ids.to_vec())),
            Arc::new(StringArray::from(symbols)),
            Arc::new(Float64Array::from(prices)),
        ],
    )
    .unwrap()
}

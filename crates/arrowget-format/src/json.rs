//! JSON output format.

use arrow::datatypes::SchemaRef;
use arrow::json::{ArrayWriter, LineDelimitedWriter};
use arrow::record_batch::RecordBatch;
use std::io::Write;

use crate::{FormatError, Formatter};

/// JSON output style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    /// JSON array of row objects.
    #[default]
    Array,
    /// Newline-delimited JSON (NDJSON/JSONL), one row object per line.
    Ndjson,
}

/// JSON formatter.
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    /// Output style.
    style: JsonStyle,
}

impl JsonFormatter {
    /// Creates a new JSON formatter with default settings (array style).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            style: JsonStyle::Array,
        }
    }

    /// Creates a new NDJSON formatter.
    #[must_use]
    pub const fn ndjson() -> Self {
        Self {
            style: JsonStyle::Ndjson,
        }
    }

    /// Sets the output style.
    #[must_use]
    pub const fn with_style(mut self, style: JsonStyle) -> Self {
        self.style = style;
        self
    }
}

impl Formatter for JsonFormatter {
    fn write_batches<W: Write + Send>(
        &self,
        _schema: &SchemaRef,
        batches: &[RecordBatch],
        writer: W,
    ) -> Result<(), FormatError> {
        let refs: Vec<&RecordBatch> = batches.iter().collect();

        match self.style {
            JsonStyle::Array => {
                let mut json = ArrayWriter::new(writer);
                json.write_batches(&refs)?;
                json.finish()?;
            }
            JsonStyle::Ndjson => {
                let mut json = LineDelimitedWriter::new(writer);
                json.write_batches(&refs)?;
                json.finish()?;
            }
        }

        Ok(())
    }

    fn extension(&self) -> &str {
        match self.style {
            JsonStyle::Array => "json",
            JsonStyle::Ndjson => "ndjson",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{batch, schema};
    use std::io::Cursor;

    #[test]
    fn test_json_array() {
        let formatter = JsonFormatter::new();
        let mut output = Cursor::new(Vec::new());

        formatter
            .write_batches(&schema(), &[batch(&[1]), batch(&[2])], &mut output)
            .unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(result.starts_with('['));
        assert!(result.contains("\"symbol\":\"S2\""));
    }

    #[test]
    fn test_ndjson() {
        let formatter = JsonFormatter::ndjson();
        let mut output = Cursor::new(Vec::new());

        formatter
            .write_batches(&schema(), &[batch(&[1, 2]), batch(&[3])], &mut output)
            .unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        let lines: Vec<_> = result.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with('{'));
        assert_eq!(formatter.extension(), "ndjson");
    }
}

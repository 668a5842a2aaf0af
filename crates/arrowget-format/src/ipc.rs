//! Arrow IPC output format.

use arrow::datatypes::SchemaRef;
use arrow::ipc::writer::{FileWriter, StreamWriter};
use arrow::record_batch::RecordBatch;
use std::io::Write;

use crate::{FormatError, Formatter};

/// Arrow IPC layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IpcLayout {
    /// Random-access file layout with a footer.
    #[default]
    File,
    /// Streaming layout, the same framing the feed is served in.
    Stream,
}

/// Arrow IPC formatter.
#[derive(Debug, Clone, Default)]
pub struct IpcFormatter {
    layout: IpcLayout,
}

impl IpcFormatter {
    /// Creates a formatter producing the IPC file layout.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            layout: IpcLayout::File,
        }
    }

    /// Creates a formatter producing the IPC stream layout.
    #[must_use]
    pub const fn stream() -> Self {
        Self {
            layout: IpcLayout::Stream,
        }
    }
}

impl Formatter for IpcFormatter {
    fn write_batches<W: Write + Send>(
        &self,
        schema: &SchemaRef,
        batches: &[RecordBatch],
        writer: W,
    ) -> Result<(), FormatError> {
        match self.layout {
            IpcLayout::File => {
                let mut ipc = FileWriter::try_new(writer, schema)?;
                for batch in batches {
                    ipc.write(batch)?;
                }
                ipc.finish()?;
            }
            IpcLayout::Stream => {
                let mut ipc = StreamWriter::try_new(writer, schema)?;
                for batch in batches {
                    ipc.write(batch)?;
                }
                ipc.finish()?;
            }
        }

        Ok(())
    }

    fn extension(&self) -> &str {
        match self.layout {
            IpcLayout::File => "arrow",
            IpcLayout::Stream => "arrows",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{batch, schema};
    use arrow::ipc::reader::{FileReader, StreamReader};
    use std::io::Cursor;

    #[test]
    fn test_ipc_file() {
        let formatter = IpcFormatter::new();
        let mut output = Cursor::new(Vec::new());

        formatter
            .write_batches(&schema(), &[batch(&[1, 2]), batch(&[3])], &mut output)
            .unwrap();

        let data = output.into_inner();
        // Arrow files start with the "ARROW1" magic bytes
        assert_eq!(&data[0..6], b"ARROW1");

        let reader = FileReader::try_new(Cursor::new(data), None).unwrap();
        assert_eq!(reader.num_batches(), 2);
    }

    #[test]
    fn test_ipc_stream() {
        let formatter = IpcFormatter::stream();
        let mut output = Cursor::new(Vec::new());

        formatter
            .write_batches(&schema(), &[batch(&[1]), batch(&[2]), batch(&[3])], &mut output)
            .unwrap();

        let reader = StreamReader::try_new(Cursor::new(output.into_inner()), None).unwrap();
        let rows: usize = reader.map(|b| b.unwrap().num_rows()).sum();
        assert_eq!(rows, 3);
        assert_eq!(formatter.extension(), "arrows");
    }
}

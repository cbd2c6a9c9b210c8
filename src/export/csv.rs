//! Delimited text output

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use arrow::csv::{Writer, WriterBuilder};
use arrow::record_batch::RecordBatch;

use super::{BatchSink, ExportOptions};
use crate::error::Result;

/// UTF-8 byte order mark
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// CSV file receiving record batches; the header is written with the first batch
pub struct CsvSink {
    writer: Writer<BufWriter<File>>,
}

impl CsvSink {
    /// Create the file, writing the byte order mark first when requested
    pub fn create(path: &Path, options: &ExportOptions) -> Result<Self> {
        let mut file = BufWriter::new(File::create(path)?);
        if options.include_bom {
            file.write_all(UTF8_BOM)?;
        }
        let writer = WriterBuilder::new()
            .with_header(true)
            .with_delimiter(options.delimiter)
            .build(file);
        Ok(Self { writer })
    }
}

impl BatchSink for CsvSink {
    fn write_batch(&mut self, batch: &RecordBatch) -> Result<()> {
        self.writer.write(batch)?;
        Ok(())
    }

    fn finish(self: Box<Self>) -> Result<()> {
        let mut file = self.writer.into_inner();
        file.flush()?;
        Ok(())
    }
}

//! Parquet output

use std::fs::File;
use std::path::Path;

use arrow_schema::SchemaRef;
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;

use super::BatchSink;
use crate::error::Result;

/// Parquet file receiving record batches
pub struct ParquetSink {
    writer: ArrowWriter<File>,
}

impl ParquetSink {
    /// Create the file with Snappy-compressed column chunks
    pub fn create(path: &Path, schema: SchemaRef) -> Result<Self> {
        let file = File::create(path)?;
        let properties = WriterProperties::builder()
            .set_compression(Compression::SNAPPY)
            .build();
        let writer = ArrowWriter::try_new(file, schema, Some(properties))?;
        Ok(Self { writer })
    }
}

impl BatchSink for ParquetSink {
    fn write_batch(&mut self, batch: &RecordBatch) -> Result<()> {
        self.writer.write(batch)?;
        Ok(())
    }

    fn finish(self: Box<Self>) -> Result<()> {
        self.writer.close()?;
        Ok(())
    }
}

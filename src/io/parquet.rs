use crate::api::geo_code::GeoCode;
use crate::io::arrow::GeoCodesToArrow;
use crate::util::error::GeoCodeError;
use arrow_array::RecordBatch;
use geoparquet::writer::{
    GeoParquetRecordBatchEncoder, GeoParquetWriterEncoding, GeoParquetWriterOptionsBuilder,
};
use log::debug;
use parquet::arrow::ArrowWriter;
use std::fs::File;
use std::path::Path;

/// Writes a RecordBatch with a geoarrow geometry column to a GeoParquet file (WKB encoded).
pub fn write_geoparquet(batch: &RecordBatch, path: impl AsRef<Path>) -> Result<(), GeoCodeError> {
    let schema = batch.schema();

    let options = GeoParquetWriterOptionsBuilder::default()
        .set_encoding(GeoParquetWriterEncoding::WKB)
        .build();

    let mut encoder = GeoParquetRecordBatchEncoder::try_new(&schema, &options)
        .map_err(|e| GeoCodeError::IoError(e.to_string()))?;

    let file = File::create(path.as_ref()).map_err(|e| GeoCodeError::IoError(e.to_string()))?;
    let mut writer = ArrowWriter::try_new(file, encoder.target_schema(), None)
        .map_err(|e| GeoCodeError::IoError(e.to_string()))?;

    let encoded_batch = encoder
        .encode_record_batch(batch)
        .map_err(|e| GeoCodeError::IoError(e.to_string()))?;

    writer
        .write(&encoded_batch)
        .map_err(|e| GeoCodeError::IoError(e.to_string()))?;

    let kv_metadata = encoder
        .into_keyvalue()
        .map_err(|e| GeoCodeError::IoError(e.to_string()))?;

    writer.append_key_value_metadata(kv_metadata);
    writer
        .finish()
        .map_err(|e| GeoCodeError::IoError(e.to_string()))?;

    debug!(
        "wrote {} rows to {}",
        batch.num_rows(),
        path.as_ref().display()
    );
    Ok(())
}

pub trait GeoCodesToGeoParquet: GeoCodesToArrow {
    fn to_geoparquet(&self, path: impl AsRef<Path>) -> Result<(), GeoCodeError>;
}

impl GeoCodesToGeoParquet for [GeoCode] {
    fn to_geoparquet(&self, path: impl AsRef<Path>) -> Result<(), GeoCodeError> {
        let batch = self.to_record_batch()?;
        write_geoparquet(&batch, path)
    }
}

impl GeoCodesToGeoParquet for Vec<GeoCode> {
    fn to_geoparquet(&self, path: impl AsRef<Path>) -> Result<(), GeoCodeError> {
        self.as_slice().to_geoparquet(path)
    }
}

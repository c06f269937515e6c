// Primitives for writing the dataset.

use checklist_fields::{Record, Schema};

use crate::review::*;

/// The full dataset as delimited text: the schema as the header, then one row per record.
pub fn render_dataset(
    schema: &Schema,
    records: &[Record],
    settings: &DatasetSettings,
) -> RvResult<String> {
    let mut buffer: Vec<u8> = Vec::new();
    {
        let mut wtr = csv::WriterBuilder::new()
            .delimiter(settings.delimiter)
            .from_writer(&mut buffer);
        wtr.write_record(schema.fields())
            .context(WritingCsvSnafu {})?;
        for record in records {
            wtr.write_record(record.render(&settings.absent_value))
                .context(WritingCsvSnafu {})?;
        }
        wtr.flush().context(FlushingCsvSnafu {})?;
    }
    String::from_utf8(buffer).context(EncodingCsvSnafu {})
}

/// Writes the dataset in one go, so that a failed run never leaves a partial file.
pub fn write_dataset(path: &str, table: &str) -> RvResult<()> {
    info!("Writing dataset to {:?}", path);
    fs::write(path, table).context(WritingDatasetSnafu { path })
}

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use tracing::debug;

use crate::{ExtractedComponent, TokenError};

pub const DEFAULT_SAMPLE_SIZE: usize = 10;

/// Writes the first `limit` components as an indented JSON array, replacing
/// whatever is at `output`. Parent directories are not created.
pub fn persist_sample(
    components: &[ExtractedComponent],
    output: &Path,
    limit: usize,
) -> Result<usize, TokenError> {
    let sample = &components[..components.len().min(limit)];
    let mut writer = BufWriter::new(File::create(output)?);
    serde_json::to_writer_pretty(&mut writer, sample)?;
    writer.flush()?;
    debug!(path = %output.display(), written = sample.len(), "sample persisted");
    Ok(sample.len())
}

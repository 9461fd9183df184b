//! Writing document files and generating sample data.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::info;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::TallyConfig;
use crate::types::{Document, FreqError, FreqResult};

use super::document_path;

/// Write `document` as pretty-printed JSON (two-space indent).
pub fn write_document(path: &Path, document: &Document) -> FreqResult<()> {
    let io_err = |source| FreqError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, document)?;
    writer.write_all(b"\n").map_err(io_err)?;
    writer.flush().map_err(io_err)?;
    Ok(())
}

/// Write `count` sample documents into `dir`, each with a text picked at
/// random from `config.samples` and `config.default_stopwords`.
pub fn generate_documents<R: Rng + ?Sized>(
    dir: &Path,
    count: usize,
    config: &TallyConfig,
    rng: &mut R,
) -> FreqResult<Vec<PathBuf>> {
    if config.samples.is_empty() {
        return Err(FreqError::Config(
            "no sample texts configured for generation".to_string(),
        ));
    }

    let mut written = Vec::with_capacity(count);
    for index in 0..count {
        let text = config
            .samples
            .choose(rng)
            .ok_or_else(|| FreqError::Config("no sample texts".to_string()))?;
        let document = Document::new(text.clone(), config.default_stopwords.clone());

        let path = document_path(dir, &config.file_prefix, index);
        write_document(&path, &document)?;
        info!("created {}", path.display());
        written.push(path);
    }
    Ok(written)
}

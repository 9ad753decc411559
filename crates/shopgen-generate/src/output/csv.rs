use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use shopgen_core::Entity;

/// A CSV file produced by [`write_entities`].
#[derive(Debug, Clone)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub rows: u64,
    pub bytes: u64,
}

/// Write an entity collection under `base_dir` at the entity's relative path.
///
/// The header row comes from the record's field names in declaration order.
/// Missing parent directories are created. An empty collection is skipped
/// quietly: nothing is created and `Ok(None)` is returned.
pub fn write_entities<T: Entity>(
    base_dir: &Path,
    records: &[T],
) -> Result<Option<WrittenFile>, csv::Error> {
    if records.is_empty() {
        return Ok(None);
    }

    let path = base_dir.join(T::RELATIVE_PATH);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(csv::Error::from)?;
    }

    let writer = BufWriter::new(File::create(&path).map_err(csv::Error::from)?);
    let counting = CountingWriter::new(writer);
    let mut writer = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(counting);

    for record in records {
        writer.serialize(record)?;
    }

    writer.flush()?;
    let counting = writer.into_inner().map_err(|err| err.into_error())?;

    Ok(Some(WrittenFile {
        path,
        rows: records.len() as u64,
        bytes: counting.bytes_written(),
    }))
}

struct CountingWriter<W: Write> {
    inner: W,
    bytes: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }

    fn bytes_written(&self) -> u64 {
        self.bytes
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let size = self.inner.write(buf)?;
        self.bytes = self.bytes.saturating_add(size as u64);
        Ok(size)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}

//! Writers for the canonical manifest formats.
//!
//! Output is minimal-width: absent mate and singleton columns are omitted, and
//! a singleton is only written after a mate. What is written can be read back
//! with [`crate::parsing::manifest`] without loss. Paths must be valid UTF-8;
//! anything else is rejected rather than written lossily.

use std::io::{self, BufWriter, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::core::types::{ReferenceManifest, SampleMap};
use crate::utils::validation::present_path;

fn utf8_path(path: &Path) -> io::Result<&str> {
    path.to_str().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Path is not valid UTF-8: {}", path.display()),
        )
    })
}

/// Write a sample map as a reads manifest
///
/// # Errors
///
/// Returns any error from the underlying writer, or `InvalidData` for a path
/// that is not valid UTF-8.
pub fn write_sample_manifest<W: Write>(samples: &SampleMap, out: &mut W) -> io::Result<()> {
    for (name, entry) in samples.iter() {
        write!(out, "{name}\t{}", utf8_path(&entry.r1)?)?;
        if let Some(r2) = present_path(entry.r2.as_deref()) {
            write!(out, "\t{}", utf8_path(r2)?)?;
            if let Some(s) = present_path(entry.singleton.as_deref()) {
                write!(out, "\t{}", utf8_path(s)?)?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Write a reference manifest
///
/// # Errors
///
/// Returns any error from the underlying writer, or `InvalidData` for a path
/// that is not valid UTF-8.
pub fn write_reference_manifest<W: Write>(
    references: &ReferenceManifest,
    out: &mut W,
) -> io::Result<()> {
    for (name, path) in references.iter() {
        writeln!(out, "{name}\t{}", utf8_path(path)?)?;
    }
    Ok(())
}

/// Write a reads manifest to `path`, replacing it atomically
///
/// # Errors
///
/// Returns an error if the temporary file cannot be created, written, or renamed.
pub fn write_sample_manifest_file(samples: &SampleMap, path: &Path) -> io::Result<()> {
    write_atomically(path, |out| write_sample_manifest(samples, out))
}

/// Write a reference manifest to `path`, replacing it atomically
///
/// # Errors
///
/// Returns an error if the temporary file cannot be created, written, or renamed.
pub fn write_reference_manifest_file(references: &ReferenceManifest, path: &Path) -> io::Result<()> {
    write_atomically(path, |out| write_reference_manifest(references, out))
}

/// Write through a temporary file in the destination directory, then rename it into place.
/// Concurrent writers to the same path never interleave; the last rename wins.
pub(crate) fn write_atomically<F>(path: &Path, write: F) -> io::Result<()>
where
    F: FnOnce(&mut BufWriter<&mut NamedTempFile>) -> io::Result<()>,
{
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir)?;
    {
        let mut out = BufWriter::new(&mut temp);
        write(&mut out)?;
        out.flush()?;
    }
    temp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

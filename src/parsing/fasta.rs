//! Concatenation of reference FASTA files.
//!
//! Each header line has the reference name inserted after the `>`, so
//! `>chr1` from reference `hg38` becomes `>hg38:chr1`. Sequence lines pass
//! through unchanged. Gzip-compressed inputs are decompressed on the fly.

use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use tracing::debug;

use crate::core::types::ReferenceManifest;
use crate::parsing::extension::is_gzipped;
use crate::parsing::writer::write_atomically;

/// Prefix a FASTA header line with a reference name; other lines are returned as-is
pub fn prefix_header<'a>(line: &'a str, reference: &str) -> Cow<'a, str> {
    match line.strip_prefix('>') {
        Some(rest) => Cow::Owned(format!(">{reference}:{rest}")),
        None => Cow::Borrowed(line),
    }
}

fn open_fasta(path: &Path) -> io::Result<Box<dyn BufRead>> {
    let file = File::open(path)?;
    if is_gzipped(path) {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Concatenate every FASTA in the manifest, in manifest order, into `out`
///
/// # Errors
///
/// Returns an error if an input cannot be opened or read, or the output cannot be written.
pub fn combine_fastas<W: Write>(references: &ReferenceManifest, out: &mut W) -> io::Result<()> {
    for (name, path) in references.iter() {
        debug!("Appending {} as {name}", path.display());
        let reader = open_fasta(path).map_err(|e| {
            io::Error::new(e.kind(), format!("Failed to open {}: {e}", path.display()))
        })?;

        for line in reader.lines() {
            let line = line?;
            writeln!(out, "{}", prefix_header(&line, name))?;
        }
    }
    Ok(())
}

/// Concatenate every FASTA in the manifest into a file at `path`
///
/// # Errors
///
/// See [`combine_fastas`].
pub fn combine_fastas_to_file(references: &ReferenceManifest, path: &Path) -> io::Result<()> {
    write_atomically(path, |out| combine_fastas(references, out))
}

use std::path::Path;

use tracing::debug;

use crate::core::diagnostics::Resolved;
use crate::core::types::{PairingResult, SampleMap};
use crate::matching::pairing::pair_files;
use crate::matching::tags::PairingConfig;
use crate::parsing::manifest::parse_sample_manifest;
use crate::resolver::{list_directory, ResolveError};

/// Resolve a reads directory or manifest into paired and unpaired samples.
///
/// A directory is scanned and paired by file name; a file is parsed as a
/// reads manifest. An input yielding no samples at all is an error.
///
/// # Errors
///
/// Returns `ResolveError::InvalidInput` if `input` is neither a file nor a
/// directory, `ResolveError::InvalidManifest` if a manifest references a
/// missing file or is malformed, `ResolveError::Io` if a directory cannot be
/// listed, or `ResolveError::EmptyResult` if no samples are found.
pub fn resolve_samples(
    input: &Path,
    config: &PairingConfig,
) -> Result<Resolved<PairingResult>, ResolveError> {
    let resolved = if input.is_dir() {
        let files = list_directory(input)?;
        debug!("Scanning {} files in {}", files.len(), input.display());
        pair_files(&files, config)
    } else if input.is_file() {
        debug!("Parsing reads manifest {}", input.display());
        parse_sample_manifest(input).map_err(|source| ResolveError::InvalidManifest {
            path: input.to_path_buf(),
            source,
        })?
    } else {
        return Err(ResolveError::InvalidInput(input.to_path_buf()));
    };

    if resolved.value.is_empty() {
        return Err(ResolveError::EmptyResult(input.to_path_buf()));
    }

    debug!(
        "Found {} paired and {} unpaired samples",
        resolved.value.paired.len(),
        resolved.value.unpaired.len()
    );
    Ok(resolved)
}

/// Resolve an input straight to the unified sample map
///
/// # Errors
///
/// See [`resolve_samples`].
pub fn resolve_sample_map(
    input: &Path,
    config: &PairingConfig,
) -> Result<Resolved<SampleMap>, ResolveError> {
    Ok(resolve_samples(input, config)?.map(PairingResult::into_sample_map))
}

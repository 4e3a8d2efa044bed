//! Mate-pair inference from file names.
//!
//! - [`tags`]: mate-tag families and the [`PairingConfig`](tags::PairingConfig)
//! - [`pairing`]: the directory pairer, [`pair_files`](pairing::pair_files)
//!
//! ## Pairing Algorithm
//!
//! 1. Files without a recognized reads extension are ignored
//! 2. The first family (in priority order) whose R1 tag occurs in a file name governs that file
//! 3. The sample name is the file name up to the rightmost R1 tag
//! 4. The mate is the same path with the R2 tag substituted; the pair is confirmed
//!    only if the mate is among the inputs, and the singleton file is attached if present
//! 5. Remaining files are unpaired, named by their stem, with a warning when the
//!    stem still contains a mate tag
//!
//! ## Example
//!
//! ```rust
//! use sample_finder::matching::pairing::pair_files;
//! use sample_finder::matching::tags::PairingConfig;
//!
//! let files = ["s1_R1.fastq", "s1_R2.fastq", "s2.fastq"];
//! let resolved = pair_files(&files, &PairingConfig::default());
//!
//! assert_eq!(resolved.value.paired[0].sample, "s1");
//! assert_eq!(resolved.value.unpaired[0].sample, "s2");
//! ```

pub mod pairing;
pub mod tags;

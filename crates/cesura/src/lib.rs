//! Liang-style hyphenation.
//!
//! A [`Dictionary`] compiles a stream of weighted patterns into a frozen
//! double-array index (see the `cesura-dat` crate) and answers
//! hyphenation queries by sweeping the index over every suffix of the
//! dotted word, merging pattern weights by maximum, and splitting at odd
//! positions. Explicit exceptions shadow the pattern computation.
//!
//! # Quick start
//!
//! ```
//! # fn main() -> Result<(), cesura::CesuraError> {
//! use cesura::tex;
//!
//! let src = "\\patterns{\ny1p\n}\n";
//! let dict = tex::load_dictionary("doc-example", src.as_bytes())?;
//! assert_eq!(dict.hyphenation_string("hyphen"), "hy-phen");
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - [`stream`] -- Pull-based pattern and exception source traits
//! - [`dictionary`] -- Build pipeline: ingest, freeze, payload binding
//! - [`exceptions`] -- Word-to-positions table consulted before matching
//! - [`tex`] -- Readers for TeX `\patterns{...}` / `\hyphenation{...}` files
//!
//! The hyphenation algorithm itself lives in a private module and is
//! exposed as [`Dictionary::hyphenate`] and
//! [`Dictionary::hyphenation_string`].

pub mod dictionary;
pub mod exceptions;
mod hyphenator;
pub mod stream;
pub mod tex;

pub use dictionary::{Dictionary, DictionaryStats};
pub use exceptions::ExceptionTable;
pub use stream::{Exception, ExceptionSource, Pattern, PatternSource};

/// Error type for dictionary construction.
///
/// The query path is total and never fails; only the build phase reports
/// errors.
#[derive(Debug, thiserror::Error)]
pub enum CesuraError {
    /// Engine-level failure: weight packing or base placement.
    #[error(transparent)]
    Dat(#[from] cesura_dat::DatError),

    /// I/O failure reported by a pattern or exception source.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A pending pattern could not be walked to a state in the frozen
    /// index. This is an invariant violation: every allocated pattern
    /// must survive the freeze.
    #[error("pattern {0:?} has no state in the frozen index")]
    UnresolvedPattern(String),
}

// TeX-format pattern and exception input.

pub mod exceptions;
pub mod patterns;

pub use exceptions::TexExceptionSource;
pub use patterns::TexPatternSource;

use std::io::Read;

use crate::dictionary::Dictionary;
use crate::CesuraError;

/// Loads a pattern dictionary and its exception list from a single TeX
/// source.
///
/// Real pattern files (one per language) ship with every TeX
/// distribution; see
/// <https://github.com/hyphenation/tex-hyphen/tree/master/hyph-utf8/tex/generic/hyph-utf8/patterns/tex>
/// for the full collection.
///
/// ```no_run
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use std::fs::File;
///
/// let f = File::open("path/to/hyph-en-us.tex")?;
/// let dict = cesura::tex::load_dictionary("en-us", f)?;
/// println!("{}", dict.hyphenation_string("hyphenation"));
/// # Ok(())
/// # }
/// ```
///
/// The source is buffered in memory and scanned twice: once for the
/// `\patterns{...}` entries and once for the `\hyphenation{...}` blocks.
pub fn load_dictionary(name: &str, mut reader: impl Read) -> Result<Dictionary, CesuraError> {
    let mut data = String::new();
    reader.read_to_string(&mut data)?;

    let mut patterns = TexPatternSource::new(data.as_bytes());
    let mut dict = Dictionary::from_pattern_source(name, &mut patterns)?;
    if let Some(identifier) = patterns.identifier() {
        let identifier = identifier.to_string();
        dict.set_identifier(identifier);
    }

    let mut exceptions = TexExceptionSource::new(data.as_bytes());
    dict.load_exceptions(&mut exceptions)?;
    Ok(dict)
}

//! Fixture-driven end-to-end tests over reduced TeX pattern files.
//!
//! The fixtures under `testdata/` carry just enough patterns to cover the
//! test corpus, laid out exactly like the real hyph-utf8 files.

use std::fs::File;
use std::path::PathBuf;

use cesura::tex::{self, TexExceptionSource, TexPatternSource};
use cesura::{CesuraError, Dictionary, Exception, ExceptionSource};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("testdata")
        .join(name)
}

fn load_fixture(name: &str) -> Dictionary {
    let file = File::open(fixture_path(name))
        .unwrap_or_else(|e| panic!("cannot open fixture {name}: {e}"));
    tex::load_dictionary(name, file)
        .unwrap_or_else(|e| panic!("cannot load fixture {name}: {e}"))
}

/// Slice-backed exception source for tests that override fixture data.
struct SliceExceptionSource {
    entries: Vec<Exception>,
    index: usize,
}

impl ExceptionSource for SliceExceptionSource {
    fn next_exception(&mut self) -> Result<Option<Exception>, CesuraError> {
        let entry = self.entries.get(self.index).cloned();
        self.index += 1;
        Ok(entry)
    }
}

// ---------------------------------------------------------------------------
// English fixture
// ---------------------------------------------------------------------------

#[test]
fn english_fixture_hyphenates_the_corpus() {
    let dict = load_fixture("hyph-en-sample.tex");
    let cases = [
        ("hello", "hel-lo"),
        ("table", "ta-ble"),
        ("computer", "com-put-er"),
        ("algorithm", "al-go-rithm"),
        ("concatenation", "con-cate-na-tion"),
        ("quick", "quick"),
        ("king", "king"),
    ];
    for (word, want) in cases {
        assert_eq!(dict.hyphenation_string(word), want, "word {word:?}");
    }
}

#[test]
fn english_fixture_reports_its_message_identifier() {
    let dict = load_fixture("hyph-en-sample.tex");
    assert_eq!(dict.identifier(), "Sample US English hyphenation patterns");
}

#[test]
fn patterns_and_exceptions_load_separately() {
    let file = File::open(fixture_path("hyph-en-sample.tex")).unwrap();
    let mut patterns = TexPatternSource::new(file);
    let mut dict = Dictionary::from_pattern_source("split-api", &mut patterns).unwrap();

    // No pattern in the fixture breaks "table"; only the exception does.
    assert_eq!(dict.hyphenation_string("table"), "table");

    let file = File::open(fixture_path("hyph-en-sample.tex")).unwrap();
    let mut exceptions = TexExceptionSource::new(file);
    dict.load_exceptions(&mut exceptions).unwrap();
    assert_eq!(dict.hyphenation_string("table"), "ta-ble");
}

#[test]
fn unmatched_words_come_back_whole() {
    let dict = load_fixture("hyph-en-sample.tex");
    assert_eq!(dict.hyphenate("xyzzy"), vec!["xyzzy"]);
    assert_eq!(dict.hyphenate("a"), vec!["a"]);
    assert_eq!(dict.hyphenate(""), vec![""]);
}

#[test]
fn unknown_runes_only_kill_suffixes_through_them() {
    let dict = load_fixture("hyph-en-sample.tex");
    // é and the crab are not in the pattern alphabet, yet the "llo"
    // suffix after them still matches l1l.
    assert_eq!(dict.hyphenate("héllo"), vec!["hél", "lo"]);
    assert_eq!(dict.hyphenate("he🦀llo"), vec!["he🦀l", "lo"]);
}

#[test]
fn stats_expose_a_dense_index() {
    let dict = load_fixture("hyph-en-sample.tex");
    let stats = dict.stats();
    assert_eq!(stats.backend, "dat");
    assert!(stats.used_slots > 0);
    assert!(stats.fill_ratio > 0.0 && stats.fill_ratio <= 1.0);
    assert_eq!(stats.skipped_patterns, 0);
}

// ---------------------------------------------------------------------------
// German fixture (non-ASCII alphabets)
// ---------------------------------------------------------------------------

#[test]
fn german_fixture_hyphenates_umlaut_words() {
    let dict = load_fixture("hyph-de-sample.tex");
    let cases = [
        ("Mädchen", "Mäd-chen"),
        ("schönheit", "schön-heit"),
        ("frühling", "früh-ling"),
        ("häuser", "häu-ser"),
        ("öffentlichkeit", "öf-fent-lich-keit"),
        ("mäßig", "mä-ßig"),
        ("übergröße", "über-grö-ße"),
    ];
    for (word, want) in cases {
        let got = dict.hyphenation_string(word);
        assert_eq!(got, want, "word {word:?}");
        assert_eq!(
            got.replace('-', ""),
            word,
            "hyphenation corrupted {word:?}"
        );
    }
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

#[test]
fn output_always_preserves_the_input_word() {
    let dict = load_fixture("hyph-en-sample.tex");
    for word in [
        "hello",
        "table",
        "concatenation",
        "fürung",
        "he🦀llo",
        "",
        "x",
    ] {
        assert_eq!(dict.hyphenation_string(word).replace('-', ""), word);
    }
}

#[test]
fn exceptions_override_pattern_breaks() {
    let mut dict = load_fixture("hyph-en-sample.tex");
    assert_eq!(dict.hyphenation_string("computer"), "com-put-er");
    let mut source = SliceExceptionSource {
        entries: vec![Exception {
            word: "computer".to_string(),
            positions: vec![0, 0, 0, 0, 1, 0, 0, 0],
        }],
        index: 0,
    };
    dict.load_exceptions(&mut source).unwrap();
    assert_eq!(dict.hyphenation_string("computer"), "comp-uter");
}

#[test]
fn edge_minimums_mask_breaks_near_the_ends() {
    let mut dict = load_fixture("hyph-en-sample.tex");
    assert_eq!(dict.hyphenation_string("hello"), "hel-lo");

    // hel-lo breaks at rune 3; a left minimum of 4 forbids it.
    dict.set_edge_minimums(4, 2);
    assert_eq!(dict.hyphenation_string("hello"), "hello");

    // com-put-er breaks at runes 3 and 6; a right minimum of 3 keeps
    // only the first.
    dict.set_edge_minimums(2, 3);
    assert_eq!(dict.hyphenation_string("computer"), "com-puter");
}

//! Dictionary lookups consulted by the search.
//!
//! A [`Dictionary`] answers whole-word membership. Minimum word length is not
//! a dictionary concern: the search enforces it before asking.
//!
//! Three backings are provided:
//! - [`WordList::new`] for an explicit collection of words
//! - [`WordList::from_file`] for a newline-delimited word list
//! - [`SystemDictionary`] for an installed spelling dictionary picked by
//!   language code

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use fst::automaton::Str;
use fst::{Automaton, IntoStreamer, Set, Streamer};
use log::{info, warn};

use crate::error::BoggleError;

/// Directories searched for `<lang>.dic` files
pub const SYSTEM_DICTIONARY_DIRS: &[&str] = &[
    "/usr/share/hunspell",
    "/usr/share/myspell",
    "/usr/share/myspell/dicts",
];

/// Plain word list used as a last resort for English codes
pub const SYSTEM_WORD_LIST: &str = "/usr/share/dict/words";

/// Whole-word membership oracle.
pub trait Dictionary {
    /// Is `word` a complete dictionary entry?
    fn is_valid(&self, word: &str) -> bool;

    /// Could some entry start with `prefix`?
    ///
    /// Only consulted when prefix pruning is switched on. The default answers
    /// `true`, which never prunes.
    fn is_valid_prefix(&self, _prefix: &str) -> bool {
        true
    }

    /// Human-readable name of the backing store
    fn description(&self) -> String {
        "custom dictionary".to_string()
    }
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn is_valid(&self, word: &str) -> bool {
        (**self).is_valid(word)
    }

    fn is_valid_prefix(&self, prefix: &str) -> bool {
        (**self).is_valid_prefix(prefix)
    }

    fn description(&self) -> String {
        (**self).description()
    }
}

impl<D: Dictionary + ?Sized> Dictionary for Box<D> {
    fn is_valid(&self, word: &str) -> bool {
        (**self).is_valid(word)
    }

    fn is_valid_prefix(&self, prefix: &str) -> bool {
        (**self).is_valid_prefix(prefix)
    }

    fn description(&self) -> String {
        (**self).description()
    }
}

/// Lowercase, trimmed, non-empty form of a raw entry
fn normalize(word: &str) -> Option<String> {
    let word = word.trim();
    (!word.is_empty()).then(|| word.to_lowercase())
}

/// An in-memory word set backed by an `fst::Set`.
#[derive(Debug, Clone)]
pub struct WordList {
    words: Set<Vec<u8>>,
    source: String,
}

impl WordList {
    /// Build from an explicit collection of words.
    pub fn new<I, S>(words: I) -> Result<Self, BoggleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::build(words, "word list")
    }

    fn build<I, S>(words: I, source: &str) -> Result<Self, BoggleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        // fst needs sorted, deduplicated keys
        let sorted: BTreeSet<String> = words
            .into_iter()
            .filter_map(|w| normalize(w.as_ref()))
            .collect();
        let words = Set::from_iter(sorted.iter()).map_err(|e| BoggleError::dictionary(source, e))?;
        Ok(Self {
            words,
            source: source.to_string(),
        })
    }

    /// Load a newline-delimited word list.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, BoggleError> {
        let path = path.as_ref();
        let source = path.display().to_string();
        let file = File::open(path).map_err(|e| BoggleError::dictionary(&source, e))?;
        let list = Self::from_reader(BufReader::new(file), &source)?;
        info!("loaded {} words from {}", list.len(), source);
        Ok(list)
    }

    /// Read one word per line from `reader`.
    ///
    /// Lines that are not valid UTF-8 are decoded lossily.
    pub fn from_reader<R: BufRead>(reader: R, source: &str) -> Result<Self, BoggleError> {
        let lines = read_lines(reader).map_err(|e| BoggleError::dictionary(source, e))?;
        Self::build(lines, source)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}

impl Dictionary for WordList {
    fn is_valid(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    fn is_valid_prefix(&self, prefix: &str) -> bool {
        let matcher = Str::new(prefix).starts_with();
        self.words.search(matcher).into_stream().next().is_some()
    }

    fn description(&self) -> String {
        format!("Dictionary powered by '{}'", self.source)
    }
}

fn read_lines<R: BufRead>(reader: R) -> std::io::Result<Vec<String>> {
    reader
        .split(b'\n')
        .map(|line| line.map(|bytes| String::from_utf8_lossy(&bytes).into_owned()))
        .collect()
}

/// Entry text of a hunspell `.dic` line, dropping affix flags and morphology.
fn hunspell_entry(line: &str) -> Option<&str> {
    let entry = line.split(['/', '\t', ' ']).next()?.trim();
    (!entry.is_empty()).then_some(entry)
}

/// Validate and normalize a language code such as `en` or `en-us`.
fn normalize_language(lang: &str) -> Option<String> {
    let lang = lang.trim().replace('-', "_");
    let mut parts = lang.split('_');
    let base = parts.next()?;
    let region = parts.next();
    if parts.next().is_some() || !(2..=3).contains(&base.len()) {
        return None;
    }
    if !base.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    let base = base.to_ascii_lowercase();
    match region {
        None => Some(base),
        Some(r) if (2..=3).contains(&r.len()) && r.chars().all(|c| c.is_ascii_alphanumeric()) => {
            Some(format!("{base}_{}", r.to_ascii_uppercase()))
        }
        Some(_) => None,
    }
}

/// A spelling dictionary installed on the system, picked by language code.
#[derive(Debug, Clone)]
pub struct SystemDictionary {
    language: String,
    path: PathBuf,
    words: WordList,
}

impl SystemDictionary {
    /// Locate the dictionary for `lang` in the standard system directories.
    pub fn for_language(lang: &str) -> Result<Self, BoggleError> {
        let dirs: Vec<PathBuf> = SYSTEM_DICTIONARY_DIRS.iter().map(PathBuf::from).collect();
        Self::locate(lang, &dirs, Some(Path::new(SYSTEM_WORD_LIST)))
    }

    /// Locate the dictionary for `lang` under `dirs`.
    ///
    /// `<lang>.dic` is tried in every directory before the bare language
    /// (`en.dic` for `en_US`). `fallback` is used for English codes when no
    /// `.dic` file exists.
    pub fn locate(
        lang: &str,
        dirs: &[PathBuf],
        fallback: Option<&Path>,
    ) -> Result<Self, BoggleError> {
        let language = normalize_language(lang)
            .ok_or_else(|| BoggleError::dictionary(lang, "unsupported language code"))?;
        let base = language.split('_').next().unwrap_or(&language).to_string();

        let mut names = vec![format!("{language}.dic")];
        if base != language {
            names.push(format!("{base}.dic"));
        }
        let candidate = names
            .iter()
            .flat_map(|name| dirs.iter().map(move |dir| dir.join(name)))
            .find(|path| path.is_file());

        if let Some(path) = candidate {
            let words = Self::load_hunspell(&path)?;
            return Ok(Self {
                language,
                path,
                words,
            });
        }

        match fallback {
            Some(path) if base == "en" && path.is_file() => {
                let words = WordList::from_file(path)?;
                Ok(Self {
                    language,
                    path: path.to_path_buf(),
                    words,
                })
            }
            _ => Err(BoggleError::dictionary(
                lang,
                "no installed dictionary for this language",
            )),
        }
    }

    fn load_hunspell(path: &Path) -> Result<WordList, BoggleError> {
        let source = path.display().to_string();
        let file = File::open(path).map_err(|e| BoggleError::dictionary(&source, e))?;
        let lines = read_lines(BufReader::new(file)).map_err(|e| BoggleError::dictionary(&source, e))?;

        let mut lines = lines.iter().peekable();
        // leading entry count
        if lines
            .peek()
            .map_or(false, |l| l.trim().parse::<usize>().is_ok())
        {
            lines.next();
        }
        let mut skipped = 0usize;
        let entries: Vec<&str> = lines
            .filter_map(|line| {
                let entry = hunspell_entry(line);
                if entry.is_none() && !line.trim().is_empty() {
                    skipped += 1;
                }
                entry
            })
            .collect();
        if skipped > 0 {
            warn!("skipped {} malformed entries in {}", skipped, source);
        }

        let list = WordList::build(entries, &source)?;
        info!("loaded {} words from {}", list.len(), source);
        Ok(list)
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for SystemDictionary {
    fn is_valid(&self, word: &str) -> bool {
        self.words.is_valid(word)
    }

    fn is_valid_prefix(&self, prefix: &str) -> bool {
        self.words.is_valid_prefix(prefix)
    }

    fn description(&self) -> String {
        format!(
            "Dictionary powered by system '{}' ({})",
            self.language,
            self.path.display()
        )
    }
}

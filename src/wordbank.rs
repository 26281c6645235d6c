use crate::{debug_log, info_log};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/wordbank.txt");

const APP_DIR: &str = "wordle-game";
const USER_WORDBANK_FILE: &str = "words.txt";

fn is_valid_word(word: &str, word_length: usize) -> bool {
    word.chars().count() == word_length && word.chars().all(|c| c.is_ascii_alphabetic())
}

/// The set of words that may be picked as a secret or accepted as a guess.
///
/// Words are stored uppercase. The list keeps first-occurrence order so that a seeded
/// RNG always picks the same secret from the same source.
#[derive(Debug, Clone)]
pub struct WordCorpus {
    words: Vec<String>,
    index: HashSet<String>,
    word_length: usize,
}

impl WordCorpus {
    /// Build a corpus from words of any case; malformed and duplicate entries are dropped.
    pub fn from_words<I, S>(words: I, word_length: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut corpus = Self::empty(word_length);
        for word in words {
            corpus.insert(word.as_ref());
        }
        corpus
    }

    fn empty(word_length: usize) -> Self {
        Self {
            words: Vec::new(),
            index: HashSet::new(),
            word_length,
        }
    }

    fn insert(&mut self, raw: &str) {
        let word = raw.trim().to_ascii_uppercase();
        if !is_valid_word(&word, self.word_length) {
            return;
        }
        if self.index.insert(word.clone()) {
            self.words.push(word);
        }
    }

    #[must_use]
    pub fn load_from_str(data: &str, word_length: usize) -> Self {
        Self::from_words(data.lines(), word_length)
    }

    /// Load a newline-delimited word list.
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be opened or read.
    pub fn load_from_file<P: AsRef<Path>>(path: P, word_length: usize) -> io::Result<Self> {
        let file = File::open(path.as_ref())?;
        let reader = BufReader::new(file);
        let mut corpus = Self::empty(word_length);
        for line in reader.lines() {
            corpus.insert(&line?);
        }
        info_log!(
            "Loaded {} words of length {} from {}",
            corpus.len(),
            word_length,
            path.as_ref().display()
        );
        Ok(corpus)
    }

    #[must_use]
    pub fn embedded(word_length: usize) -> Self {
        Self::load_from_str(EMBEDDED_WORDBANK, word_length)
    }

    /// Case-insensitive membership test.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(&word.to_ascii_uppercase())
    }

    /// Uniform pick over the loaded words. `None` when the corpus is empty.
    pub fn pick_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        let word = self.words.choose(rng).map(String::as_str);
        debug_log!("WordCorpus::pick_random() - picked {:?}", word);
        word
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.word_length
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Location of an optional user-supplied word list, e.g. `~/.local/share/wordle-game/words.txt`.
#[must_use]
pub fn get_user_wordbank_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(APP_DIR).join(USER_WORDBANK_FILE))
}

/// Keep the trimmed lines of `source` that are exactly `length` characters long.
#[must_use]
pub fn filter_words(source: &str, length: usize) -> Vec<String> {
    source
        .lines()
        .map(str::trim)
        .filter(|word| word.chars().count() == length)
        .map(str::to_string)
        .collect()
}

/// Extract every `length`-character word from `source` into `output`, one per line.
/// Returns the number of words written.
///
/// # Errors
/// Returns an I/O error if the source cannot be read or the output cannot be written.
pub fn extract_word_list<P: AsRef<Path>, Q: AsRef<Path>>(
    source: P,
    output: Q,
    length: usize,
) -> io::Result<usize> {
    let data = fs::read_to_string(source)?;
    let words = filter_words(&data, length);
    let mut file = io::BufWriter::new(File::create(output)?);
    for word in &words {
        writeln!(file, "{word}")?;
    }
    file.flush()?;
    Ok(words.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_from_str_normalizes_and_filters() {
        let corpus = WordCorpus::load_from_str("crane\n  Slate \nabc\nCRAN3\ntoolong\n\nraise", 5);
        assert_eq!(corpus.words(), ["CRANE", "SLATE", "RAISE"]);
        assert_eq!(corpus.word_length(), 5);
    }

    #[test]
    fn test_duplicates_collapse_keeping_first_order() {
        let corpus = WordCorpus::load_from_str("slate\ncrane\nSLATE\nCrane\nraise", 5);
        assert_eq!(corpus.len(), 3);
        assert_eq!(corpus.words(), ["SLATE", "CRANE", "RAISE"]);
    }

    #[test]
    fn test_contains_is_case_insensitive() {
        let corpus = WordCorpus::load_from_str("CRANE\nslate", 5);
        assert!(corpus.contains("crane"));
        assert!(corpus.contains("SLATE"));
        assert!(corpus.contains("SlAtE"));
        assert!(!corpus.contains("RAISE"));
        assert!(!corpus.contains(""));
    }

    #[test]
    fn test_contains_does_not_trim() {
        let corpus = WordCorpus::load_from_str("  crane  ", 5);
        // Loading trims lines, lookups only fold case
        assert!(corpus.contains("crane"));
        assert!(!corpus.contains(" crane"));
        assert!(!corpus.contains("CRANE\n"));
    }

    #[test]
    fn test_other_word_lengths() {
        let corpus = WordCorpus::load_from_str("cat\ndog\ncrane\nox", 3);
        assert_eq!(corpus.words(), ["CAT", "DOG"]);
    }

    #[test]
    fn test_pick_random_is_reproducible() {
        let corpus = WordCorpus::load_from_str("crane\nslate\nraise\nstare\narise", 5);
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..10 {
            let picked = corpus.pick_random(&mut a);
            assert_eq!(picked, corpus.pick_random(&mut b));
            assert!(corpus.contains(picked.unwrap()));
        }
    }

    #[test]
    fn test_pick_random_empty_corpus() {
        let corpus = WordCorpus::load_from_str("", 5);
        assert!(corpus.is_empty());
        assert_eq!(corpus.pick_random(&mut StdRng::seed_from_u64(1)), None);
    }

    #[test]
    fn test_embedded_wordbank_is_usable() {
        let corpus = WordCorpus::embedded(5);
        assert!(corpus.len() > 100);
        assert!(corpus.contains("slate"));
        assert!(corpus.contains("crane"));
        assert!(corpus.words().iter().all(|w| w.len() == 5));
    }

    #[test]
    fn test_from_file() {
        let path = std::env::temp_dir().join("wordle_game_test_corpus.txt");
        fs::write(&path, "apple\ngrape\nLEMON\napple\nkiwi\n").unwrap();
        let corpus = WordCorpus::load_from_file(&path, 5).unwrap();
        assert_eq!(corpus.words(), ["APPLE", "GRAPE", "LEMON"]);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_from_file_missing() {
        let path = std::env::temp_dir().join("wordle_game_no_such_file.txt");
        assert!(WordCorpus::load_from_file(path, 5).is_err());
    }

    #[test]
    fn test_filter_words() {
        let words = filter_words("apple\n banana \nkiwi\nGrape\n\nmelon", 5);
        assert_eq!(words, ["apple", "Grape", "melon"]);
    }

    #[test]
    fn test_extract_word_list() {
        let dir = std::env::temp_dir();
        let source = dir.join("wordle_game_test_source.txt");
        let output = dir.join("wordle_game_test_filtered.txt");
        fs::write(&source, "a\nabout\nabove\nabsolutely\nactor\n").unwrap();

        let count = extract_word_list(&source, &output, 5).unwrap();
        assert_eq!(count, 3);
        assert_eq!(fs::read_to_string(&output).unwrap(), "about\nabove\nactor\n");

        fs::remove_file(&source).unwrap();
        fs::remove_file(&output).unwrap();
    }

    #[test]
    fn test_user_wordbank_path_name() {
        if let Some(path) = get_user_wordbank_path() {
            assert!(path.ends_with("wordle-game/words.txt"));
        }
    }
}

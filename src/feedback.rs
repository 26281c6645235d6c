//! Per-letter feedback for a guess.
//!
//! `LetterFeedback` is the value the engine hands to the presentation layer: one per
//! guessed position, saying whether the letter occurs in the secret and whether it sits
//! at the right index.

use std::fmt;

/// How a single guessed letter is shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterStatus {
    /// Right letter, right position (green)
    Correct,
    /// Letter is in the secret but somewhere else (yellow)
    Present,
    /// Letter is not in the secret (gray)
    Absent,
}

impl LetterStatus {
    #[must_use]
    pub fn to_char(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => 'X',
        }
    }
}

/// How repeated letters in a guess are credited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedbackMode {
    /// Every occurrence of a letter found anywhere in the secret counts as present,
    /// no matter how many times the secret contains it.
    #[default]
    Simple,
    /// Canonical accounting: greens are taken first, then each remaining occurrence is
    /// marked present only while unmatched copies are left in the secret.
    DuplicateAware,
}

/// Classification of one guessed letter relative to the secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LetterFeedback {
    character: char,
    present_in_secret: bool,
    correct_position: bool,
}

impl LetterFeedback {
    /// A letter in the correct position is always present in the secret.
    #[must_use]
    pub fn new(character: char, present_in_secret: bool, correct_position: bool) -> Self {
        Self {
            character: character.to_ascii_uppercase(),
            present_in_secret: present_in_secret || correct_position,
            correct_position,
        }
    }

    #[must_use]
    pub fn character(&self) -> char {
        self.character
    }

    #[must_use]
    pub fn present_in_secret(&self) -> bool {
        self.present_in_secret
    }

    #[must_use]
    pub fn correct_position(&self) -> bool {
        self.correct_position
    }

    #[must_use]
    pub fn status(&self) -> LetterStatus {
        if self.correct_position {
            LetterStatus::Correct
        } else if self.present_in_secret {
            LetterStatus::Present
        } else {
            LetterStatus::Absent
        }
    }
}

impl fmt::Display for LetterFeedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status() {
            LetterStatus::Correct => write!(f, "[{}]", self.character),
            LetterStatus::Present => write!(f, "({})", self.character),
            LetterStatus::Absent => write!(f, " {} ", self.character),
        }
    }
}

/// Compute feedback for `guess` against `secret`, both already uppercase.
///
/// At most `word_length` positions are evaluated; a shorter guess yields a shorter result.
#[must_use]
pub fn evaluate(
    guess: &str,
    secret: &str,
    word_length: usize,
    mode: FeedbackMode,
) -> Vec<LetterFeedback> {
    let guess_chars: Vec<char> = guess.chars().take(word_length).collect();
    let secret_chars: Vec<char> = secret.chars().collect();

    match mode {
        FeedbackMode::Simple => guess_chars
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                let correct = secret_chars.get(i) == Some(&c);
                LetterFeedback::new(c, secret_chars.contains(&c), correct)
            })
            .collect(),
        FeedbackMode::DuplicateAware => {
            let mut remaining: Vec<Option<char>> =
                secret_chars.iter().copied().map(Some).collect();
            let mut correct = vec![false; guess_chars.len()];
            // First pass: greens
            for (i, &c) in guess_chars.iter().enumerate() {
                if secret_chars.get(i) == Some(&c) {
                    correct[i] = true;
                    remaining[i] = None;
                }
            }
            // Second pass: yellows, consuming unmatched secret letters
            guess_chars
                .iter()
                .enumerate()
                .map(|(i, &c)| {
                    if correct[i] {
                        return LetterFeedback::new(c, true, true);
                    }
                    let present = match remaining.iter().position(|&r| r == Some(c)) {
                        Some(pos) => {
                            remaining[pos] = None;
                            true
                        }
                        None => false,
                    };
                    LetterFeedback::new(c, present, false)
                })
                .collect()
        }
    }
}

/// Render feedback as a `G`/`Y`/`X` pattern string.
#[must_use]
pub fn pattern_string(feedback: &[LetterFeedback]) -> String {
    feedback.iter().map(|f| f.status().to_char()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correct_position_implies_present() {
        let fb = LetterFeedback::new('a', false, true);
        assert!(fb.present_in_secret());
        assert!(fb.correct_position());
        assert_eq!(fb.character(), 'A');
        assert_eq!(fb.status(), LetterStatus::Correct);
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(LetterFeedback::new('A', true, false).status(), LetterStatus::Present);
        assert_eq!(LetterFeedback::new('A', false, false).status(), LetterStatus::Absent);
    }

    #[test]
    fn test_status_chars_match_pattern_string() {
        let row = [
            LetterFeedback::new('E', true, true),
            LetterFeedback::new('A', true, false),
            LetterFeedback::new('C', false, false),
        ];
        let chars: String = row.iter().map(|f| f.status().to_char()).collect();
        assert_eq!(chars, "GYX");
        assert_eq!(pattern_string(&row), chars);
    }

    #[test]
    fn test_display_markers() {
        assert_eq!(LetterFeedback::new('E', true, true).to_string(), "[E]");
        assert_eq!(LetterFeedback::new('A', true, false).to_string(), "(A)");
        assert_eq!(LetterFeedback::new('C', false, false).to_string(), " C ");
    }

    #[test]
    fn test_evaluate_crane_against_slate() {
        // A shares index 2 in both words
        let fb = evaluate("CRANE", "SLATE", 5, FeedbackMode::Simple);
        assert_eq!(pattern_string(&fb), "XXGXG");

        let fb = evaluate("TRACE", "SLATE", 5, FeedbackMode::Simple);
        assert_eq!(pattern_string(&fb), "YXGXG");
    }

    #[test]
    fn test_simple_mode_ignores_multiplicity() {
        // SLATE has a single E, but every E in the guess is reported as present
        let fb = evaluate("EERIE", "SLATE", 5, FeedbackMode::Simple);
        assert_eq!(pattern_string(&fb), "YYXXG");
    }

    #[test]
    fn test_duplicate_aware_mode_credits_available_copies_only() {
        // The E at index 4 is green and uses up the only E in SLATE
        let fb = evaluate("EERIE", "SLATE", 5, FeedbackMode::DuplicateAware);
        assert_eq!(pattern_string(&fb), "XXXXG");

        let fb = evaluate("SPEED", "CREEP", 5, FeedbackMode::DuplicateAware);
        assert_eq!(pattern_string(&fb), "XYGGX");
    }

    #[test]
    fn test_duplicate_aware_yellow_before_green() {
        let fb = evaluate("GEESE", "THEME", 5, FeedbackMode::DuplicateAware);
        assert_eq!(pattern_string(&fb), "XXGXG");

        // The leading E takes the spare copy at index 2, the next one gets nothing
        let fb = evaluate("EERIE", "THEME", 5, FeedbackMode::DuplicateAware);
        assert_eq!(pattern_string(&fb), "YXXXG");
    }

    #[test]
    fn test_evaluate_truncates_to_word_length() {
        assert_eq!(evaluate("SLATES", "SLATE", 5, FeedbackMode::Simple).len(), 5);
        assert_eq!(evaluate("SLA", "SLATE", 5, FeedbackMode::Simple).len(), 3);
    }
}

// Library interface for wordle-game
// This allows integration tests to access internal modules

pub mod cli;
pub mod engine;
pub mod feedback;
pub mod game_state;
pub mod logging;
pub mod tui;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use engine::{GameConfig, GameEngine, GameStatus, GuessError};
pub use feedback::{FeedbackMode, LetterFeedback, LetterStatus};
pub use game_state::{GameInterface, GameOutcome, Rejection, SessionEnd, UserAction, game_loop, play_session};
pub use wordbank::{WordCorpus, extract_word_list, filter_words};

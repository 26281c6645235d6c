use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::process::ExitCode;
use wordle_game::cli::{Cli, CliInterface, Command, parse_cli};
use wordle_game::logging::init_logging;
use wordle_game::tui::TuiInterface;
use wordle_game::wordbank::{WordCorpus, extract_word_list, get_user_wordbank_path};
use wordle_game::{game_loop, info_log};

fn load_corpus(cli: &Cli, word_length: usize) -> io::Result<WordCorpus> {
    if let Some(path) = &cli.wordbank_path {
        return WordCorpus::load_from_file(path, word_length);
    }
    if let Some(path) = get_user_wordbank_path()
        && path.is_file()
    {
        info_log!("Using word list at {}", path.display());
        return WordCorpus::load_from_file(path, word_length);
    }
    Ok(WordCorpus::embedded(word_length))
}

fn main() -> ExitCode {
    init_logging();
    let cli = parse_cli();

    if let Some(Command::Filter {
        source,
        output,
        length,
    }) = &cli.command
    {
        return match extract_word_list(source, output, *length) {
            Ok(count) => {
                println!("Filtered {count} words of length {length}.");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Failed to filter '{}': {e}", source.display());
                ExitCode::FAILURE
            }
        };
    }

    let config = cli.game_config();
    let corpus = match load_corpus(&cli, config.word_length) {
        Ok(corpus) => corpus,
        Err(e) => {
            eprintln!("Failed to load word list: {e}");
            return ExitCode::FAILURE;
        }
    };
    if corpus.is_empty() {
        eprintln!("No {}-letter words found in the word list.", config.word_length);
        return ExitCode::FAILURE;
    }

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    if cli.tui {
        let mut interface = match TuiInterface::new() {
            Ok(interface) => interface,
            Err(e) => {
                eprintln!("Failed to start the terminal interface: {e}");
                return ExitCode::FAILURE;
            }
        };
        game_loop(&corpus, config, &mut rng, &mut interface);
    } else {
        let stdin = io::stdin();
        let mut interface = CliInterface::new(stdin.lock());
        game_loop(&corpus, config, &mut rng, &mut interface);
    }
    ExitCode::SUCCESS
}

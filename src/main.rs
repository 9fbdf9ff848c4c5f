//! Wordle Game - CLI
//!
//! Play Wordle in a TUI, in a plain line-based mode, or replay a fixed script.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use wordle_game::{
    commands::{run_replay, run_simple},
    config::GameConfig,
    core::Word,
    logging::{self, LogTarget},
    output::{print_board, print_game_result},
    wordlists::{ANSWERS, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Wordle in the terminal: six guesses to find a five-letter word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'answers' (default, embedded list) or path to file
    #[arg(short = 'w', long, global = true, default_value = "answers")]
    wordlist: String,

    /// Use a fixed answer instead of a random one
    #[arg(short, long, global = true)]
    answer: Option<String>,

    /// Display the answer while playing (debugging aid)
    #[arg(long, global = true)]
    show_answer: bool,

    /// Default log level when RUST_LOG is unset
    #[arg(short, long, global = true, default_value = "warn")]
    log_level: String,

    /// Write logs to this file (the TUI logs nothing otherwise)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (type letters line by line, no TUI)
    Simple,

    /// Feed entries to a game and print the resulting board
    Replay {
        /// Entries typed in order; each character is one key, '<' is backspace
        entries: Vec<String>,

        /// Print an uncolored text board (implied when stdout is not a terminal)
        #[arg(long)]
        plain: bool,
    },
}

/// Load the answer pool based on the -w flag
fn load_answers(wordlist_mode: &str) -> Result<Vec<Word>> {
    use wordle_game::wordlists::loader::load_from_file;

    match wordlist_mode {
        "answers" => Ok(words_from_slice(ANSWERS)),
        path => load_from_file(path).with_context(|| format!("reading word list {path}")),
    }
}

fn build_config(cli: &Cli) -> Result<GameConfig> {
    let answers = load_answers(&cli.wordlist)?;
    let fixed_answer = cli
        .answer
        .as_deref()
        .map(Word::new)
        .transpose()
        .context("invalid --answer")?;

    let config = GameConfig::new(answers)
        .with_context(|| format!("word list '{}'", cli.wordlist))?
        .with_fixed_answer(fixed_answer)
        .with_show_answer(cli.show_answer);
    Ok(config)
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    let log_target = match (&cli.log_file, &command) {
        (Some(path), _) => LogTarget::File(path.as_path()),
        (None, Commands::Play) => LogTarget::Off,
        (None, _) => LogTarget::Stderr,
    };
    logging::init(log_target, &cli.log_level)?;

    let config = build_config(&cli)?;
    tracing::debug!(
        answers = config.answers().len(),
        fixed = config.fixed_answer.is_some(),
        "configuration loaded"
    );

    match command {
        Commands::Play => run_play_command(&config),
        Commands::Simple => run_simple(&config),
        Commands::Replay { entries, plain } => {
            run_replay_command(&config, &entries, plain || !io::stdout().is_terminal())
        }
    }
}

fn run_play_command(config: &GameConfig) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let app = App::new(config);
    run_tui(app)
}

fn run_replay_command(config: &GameConfig, entries: &[String], plain: bool) -> Result<()> {
    if entries.is_empty() {
        bail!("replay needs at least one entry");
    }

    let answer = config.choose_answer(&mut rand::rng());
    let result = run_replay(answer, entries);

    if plain {
        println!("{}", result.render_plain(config.show_answer));
    } else {
        print_board(&result.game, config.show_answer);
        print_game_result(&result.game);
    }
    if result.entries_unused > 0 {
        println!(
            "\n({} entries ignored after the game ended)",
            result.entries_unused
        );
    }
    Ok(())
}

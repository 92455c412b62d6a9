use clap::{Parser, Subcommand};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::prelude::*;
use std::io::{self, IsTerminal, Stdout};
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vtm_dice::evaluator::{evaluate_seeded, evaluate_with};
use vtm_dice::render::{render_report, Glyphs, RULES_HELP};
use vtm_dice::surface::quick_request;
use vtm_dice::tui::{app::AppState, controller};

#[derive(Parser)]
#[command(
    name = "vtm-dice",
    about = "Vampire: The Masquerade 5th edition dice roller",
    version
)]
struct Cli {
    /// Seed for reproducible rolls
    #[arg(long, global = true, env = "VTM_DICE_SEED")]
    seed: Option<u64>,

    /// Use ASCII markers instead of emoji
    #[arg(long, global = true)]
    ascii: bool,

    /// Idle seconds before an interactive session expires (1-86400)
    #[arg(
        long,
        global = true,
        default_value_t = 300,
        value_parser = clap::value_parser!(u64).range(1..=86_400)
    )]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Open the interactive configurator (default)
    Interactive,

    /// Roll immediately
    Roll {
        /// Number of dice (1-20)
        #[arg(allow_negative_numbers = true)]
        dice: i64,
        /// Successes needed (1-10)
        #[arg(allow_negative_numbers = true)]
        difficulty: i64,
        /// Hunger dice (0-5)
        #[arg(allow_negative_numbers = true, default_value_t = 0)]
        hunger: i64,
        /// Title for the roll; works without giving hunger
        #[arg(long, short)]
        title: Option<String>,
        /// Title words after hunger, used when --title is absent
        words: Vec<String>,
    },

    /// Show the rules and commands
    Rules,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), crossterm::terminal::LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn run_tui(cli: &Cli, glyphs: Glyphs) -> io::Result<()> {
    if !io::stdout().is_terminal() {
        println!(
            "vtm-dice interactive mode requires a real terminal (TTY).\nUse `vtm-dice roll <dice> <difficulty> [hunger]` instead. Version: {}",
            vtm_dice::VERSION
        );
        return Ok(());
    }
    let mut terminal = setup_terminal()?;
    let mut app = AppState::new(Duration::from_secs(cli.timeout_secs), cli.seed, glyphs);

    let res = controller::run(&mut terminal, &mut app, Duration::from_millis(250));

    // Always attempt to restore terminal
    restore_terminal(terminal)?;
    res
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let glyphs = if cli.ascii { Glyphs::Ascii } else { Glyphs::Emoji };

    match &cli.command {
        None | Some(Command::Interactive) => {
            if let Err(err) = run_tui(&cli, glyphs) {
                eprintln!("error: {err}");
                return ExitCode::FAILURE;
            }
        }
        Some(Command::Roll { dice, difficulty, hunger, title, words }) => {
            init_tracing();
            let request = quick_request(*dice, *difficulty, *hunger, title.as_deref(), words);
            let request = match request {
                Ok(req) => req,
                Err(err) => {
                    eprintln!("error: {err}");
                    return ExitCode::FAILURE;
                }
            };
            let outcome = match cli.seed {
                Some(seed) => evaluate_seeded(request, seed),
                None => evaluate_with(request, &mut rand::rng()),
            };
            match outcome {
                Ok(outcome) => println!("{}", render_report(&outcome, glyphs)),
                Err(err) => {
                    eprintln!("error: {err}");
                    return ExitCode::FAILURE;
                }
            }
        }
        Some(Command::Rules) => println!("{RULES_HELP}"),
    }
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn roll_title_flag_without_hunger() {
        let cli = Cli::try_parse_from(["vtm-dice", "roll", "5", "3", "--title", "Bite"]).unwrap();
        match cli.command {
            Some(Command::Roll { dice, difficulty, hunger, title, words }) => {
                assert_eq!((dice, difficulty, hunger), (5, 3, 0));
                assert_eq!(title.as_deref(), Some("Bite"));
                assert!(words.is_empty());
            }
            _ => panic!("expected roll command"),
        }
    }

    #[test]
    fn roll_keeps_trailing_title_words() {
        let cli = Cli::try_parse_from(["vtm-dice", "roll", "6", "2", "1", "Blood", "Surge"]).unwrap();
        match cli.command {
            Some(Command::Roll { hunger, title, words, .. }) => {
                assert_eq!(hunger, 1);
                assert_eq!(title, None);
                assert_eq!(words, ["Blood", "Surge"]);
            }
            _ => panic!("expected roll command"),
        }
    }

    #[test]
    fn timeout_is_bounded() {
        assert!(Cli::try_parse_from(["vtm-dice", "--timeout-secs", "0"]).is_err());
        assert!(Cli::try_parse_from(["vtm-dice", "--timeout-secs", "18446744073709551615"]).is_err());
        let cli = Cli::try_parse_from(["vtm-dice", "--timeout-secs", "600"]).unwrap();
        assert_eq!(cli.timeout_secs, 600);
    }
}

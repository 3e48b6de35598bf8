use blackjack_rs::game::{OpeningDeal, Rules};
use blackjack_rs::scoring::Scoring;
use blackjack_rs::tui::app::{AppConfig, AppState};
use blackjack_rs::tui::controller;
use clap::{Parser, ValueEnum};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::prelude::*;
use std::io::{self, IsTerminal, Stdout};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ScoringArg {
    /// Ace counts 1, Jack/Queen/King count 11/12/13
    Raw,
    /// Face cards count 10, an Ace counts 11 when it fits
    Standard,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OpeningArg {
    Single,
    Double,
}

#[derive(Parser)]
#[command(name = "blackjack", version, about = "Play 21 against the computer in the terminal")]
struct Args {
    /// Hand scoring rules
    #[arg(long, value_enum, default_value = "standard")]
    scoring: ScoringArg,

    /// Cards dealt to each side when a game starts
    #[arg(long, value_enum, default_value = "single")]
    opening: OpeningArg,

    /// Settle a two-card 21 as soon as both opening hands are complete
    #[arg(long)]
    natural: bool,

    /// Seed for the shuffle and the computer's decisions
    #[arg(long)]
    seed: Option<u64>,

    /// Pause between the computer announcing and making a move
    #[arg(long, default_value_t = 600)]
    delay_ms: u64,

    /// Where W saves and O loads the game
    #[arg(long, default_value = "blackjack.sav")]
    save_path: PathBuf,

    /// Write a debug log to this file
    #[arg(long)]
    log: Option<PathBuf>,
}

impl Args {
    fn rules(&self) -> Rules {
        let scoring = match self.scoring {
            ScoringArg::Raw => Scoring::RawRank,
            ScoringArg::Standard => Scoring::Standard,
        };
        let opening = match self.opening {
            OpeningArg::Single => OpeningDeal::Single,
            OpeningArg::Double => OpeningDeal::Double,
        };
        let rules = Rules::default()
            .with_scoring(scoring)
            .with_opening(opening)
            .with_natural_blackjack(self.natural);
        match self.seed {
            Some(seed) => rules.with_seed(seed),
            None => rules,
        }
    }
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), crossterm::terminal::LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log {
        if let Err(err) = blackjack_rs::logging::init_file_logger(path, log::LevelFilter::Debug) {
            eprintln!("logging disabled: {err}");
        }
    }
    if !io::stdout().is_terminal() {
        println!(
            "blackjack TUI requires a real terminal (TTY).\nRun in Terminal and press q to quit. Version: {}",
            blackjack_rs::VERSION
        );
        return Ok(());
    }
    let config = AppConfig::new(args.rules(), args.delay_ms, args.save_path.clone());
    let mut terminal = setup_terminal()?;
    let tick_rate = Duration::from_millis(100);
    let mut app = AppState::new(config);

    let res = controller::run(&mut terminal, &mut app, tick_rate);

    // Always attempt to restore terminal
    restore_terminal(terminal)?;
    res
}

//! Terminal front end: play a memory round on stdin/stdout.
//!
//! Type a card index to click it, `r` to deal a new round, `q` to quit.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use memory_match::{
    BoardState, CardPosition, CardView, MemoryConfig, RoundController, RoundObserver,
    DEFAULT_CARD_COUNT,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "memory", about = "Memory-matching card game")]
struct Cli {
    /// Number of cards (even, at least 2)
    #[arg(short, long, default_value_t = DEFAULT_CARD_COUNT)]
    cards: usize,

    /// Seed for dealing; random if omitted
    #[arg(short, long)]
    seed: Option<u64>,
}

/// Prints round events as they happen.
///
/// Observer callbacks can't fail, so the first write error is kept and
/// surfaced by [`Announcer::finish`].
struct Announcer<'a, W: Write> {
    out: &'a mut W,
    error: Option<io::Error>,
}

impl<'a, W: Write> Announcer<'a, W> {
    fn new(out: &'a mut W) -> Self {
        Self { out, error: None }
    }

    fn write(&mut self, args: std::fmt::Arguments<'_>) {
        if self.error.is_none() {
            if let Err(e) = self.out.write_fmt(args) {
                self.error = Some(e);
            }
        }
    }

    fn finish(self) -> io::Result<()> {
        self.error.map_or(Ok(()), Err)
    }
}

impl<W: Write> RoundObserver for Announcer<'_, W> {
    fn on_pair_found(&mut self, first: CardPosition, second: CardPosition) {
        self.write(format_args!("Pair: {} and {}\n", first.index(), second.index()));
    }

    fn on_round_over(&mut self, moves: u32) {
        self.write(format_args!(
            "All pairs found in {} moves. Press r to play again.\n",
            moves
        ));
    }
}

fn render(board: &BoardState, out: &mut impl Write) -> io::Result<()> {
    let columns = (board.card_count() as f64).sqrt().ceil() as usize;
    for (i, view) in board.views().enumerate() {
        let label = match view {
            CardView::Covered => "--".to_string(),
            CardView::Showing(v) => format!("{:>2}", v),
            CardView::Found(v) => format!("{:>2}*", v),
        };
        write!(out, "{:>3}:{:<4}", i, label)?;
        if (i + 1) % columns == 0 {
            writeln!(out)?;
        }
    }
    if board.card_count() % columns != 0 {
        writeln!(out)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = MemoryConfig::new(cli.cards)?;
    let seed = cli.seed.unwrap_or_else(rand::random);
    let mut round = RoundController::new(config, seed);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    render(round.board(), &mut stdout)?;

    for line in stdin.lock().lines() {
        let line = line?;
        match line.trim() {
            "" => continue,
            "q" => break,
            "r" => round.reset(),
            input => match input.parse::<usize>() {
                Ok(i) => {
                    let position = CardPosition::new(i);
                    if round.view(position).is_some_and(|v| !v.is_clickable()) {
                        writeln!(stdout, "Card {} is already face-up", i)?;
                        continue;
                    }

                    let mut announcer = Announcer::new(&mut stdout);
                    let clicked = round.click_with(position, &mut announcer);
                    announcer.finish()?;
                    if let Err(e) = clicked {
                        writeln!(stdout, "{}", e)?;
                        continue;
                    }
                }
                Err(_) => {
                    writeln!(stdout, "Expected a card index, r or q")?;
                    continue;
                }
            },
        }
        render(round.board(), &mut stdout)?;
        writeln!(stdout, "Moves: {}", round.moves())?;
    }

    Ok(())
}

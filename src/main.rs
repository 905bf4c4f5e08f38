//! Console Mastermind - CLI
//!
//! Generates a secret color code and runs the prompt/guess/feedback loop
//! until the code is broken, the guess budget runs out, or the player quits.

use anyhow::Result;
use clap::Parser;
use mastermind::core::Config;
use mastermind::game::{Controller, Game, TurnOutcome};
use mastermind::output::{BoardRenderer, RenderMode, Renderer};
use std::io::{self, BufRead, Write};

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Console Mastermind code-breaking game",
    version,
    author
)]
struct Cli {
    /// Number of pegs in the secret code
    #[arg(short, long, default_value_t = 5)]
    size: usize,

    /// Number of colors in play (2-8)
    #[arg(short, long, default_value_t = 8)]
    colors: usize,

    /// Maximum number of guesses
    #[arg(short, long, default_value_t = 12)]
    guesses: usize,

    /// Allow repeated colors in the secret
    #[arg(short, long)]
    duplicates: bool,

    /// Render mode: no-color, 8-color, extended-color
    #[arg(short, long, default_value = "8-color")]
    render_mode: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::new(cli.duplicates, cli.colors, cli.size, cli.guesses)?;
    let game = Game::new(config, &mut rand::rng());
    let renderer = BoardRenderer::new(RenderMode::from_name(&cli.render_mode));

    run_game(Controller::new(game), &renderer)
}

/// The blocking read-eval-render loop
///
/// Stops on a terminal game state or on cancellation (EOF or a quit command).
/// Cancellation and loss both reveal the secret; rejected input is reported
/// and re-prompted without consuming a guess.
fn run_game<R: Renderer>(mut controller: Controller, renderer: &R) -> Result<()> {
    println!("{}", renderer.legend(controller.game()));
    println!("Type your guess as letters, or 'quit' to give up.\n");

    loop {
        println!("{}", renderer.board(controller.game()));

        let Some(line) = prompt()? else {
            println!("{}", renderer.reveal(controller.game().secret()));
            return Ok(());
        };

        if is_quit(&line) {
            println!("{}", renderer.reveal(controller.game().secret()));
            return Ok(());
        }

        match controller.run_turn(&line) {
            TurnOutcome::Continue(_) => {}
            TurnOutcome::Rejected(rejection) => {
                println!("{}", renderer.rejection(rejection));
            }
            TurnOutcome::Won(_) => {
                println!("{}", renderer.board(controller.game()));
                println!("{}", renderer.win(controller.game().history().len()));
                return Ok(());
            }
            TurnOutcome::Lost(_) => {
                println!("{}", renderer.board(controller.game()));
                println!("{}", renderer.reveal(controller.game().secret()));
                return Ok(());
            }
        }
    }
}

/// Read one input line; `None` means EOF (user cancellation)
fn prompt() -> Result<Option<String>> {
    print!(" > ");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        println!();
        return Ok(None);
    }
    Ok(Some(line))
}

fn is_quit(line: &str) -> bool {
    matches!(line.trim().to_ascii_lowercase().as_str(), "quit" | "q" | "exit")
}

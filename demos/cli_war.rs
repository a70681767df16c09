//! CLI War example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use tracing_subscriber::EnvFilter;
use warrs::{FinalReport, Game, GameEvent, RoundReport};

const DEFAULT_DEALER: &str = "Chuck";
const DEFAULT_PLAYER1: &str = "Bob";
const DEFAULT_PLAYER2: &str = "Jane";

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let mut menu = Menu::default();
    while !menu.exit {
        menu.step();
    }
}

#[derive(Default)]
struct Menu {
    exit: bool,
    games_played: u64,
}

impl Menu {
    fn step(&mut self) {
        println!("\n(0) Play a Game of War\n(1) Exit");
        let Some(choice) = prompt_with_default("Choice", "0") else {
            self.exit = true;
            return;
        };

        match choice.as_str() {
            "0" => self.play(),
            "1" => self.exit = true,
            _ => println!("Unknown choice."),
        }
    }

    fn play(&mut self) {
        let Some(dealer) = prompt_with_default("Enter Name for Dealer", DEFAULT_DEALER) else {
            self.exit = true;
            return;
        };
        let Some(player1) = prompt_with_default("Enter Name for Player 1", DEFAULT_PLAYER1) else {
            self.exit = true;
            return;
        };
        let Some(player2) = prompt_with_default("Enter Name for Player 2", DEFAULT_PLAYER2) else {
            self.exit = true;
            return;
        };

        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos() as u64
            ^ self.games_played;
        self.games_played += 1;

        let game = Game::new(dealer, player1, player2, seed);
        for event in game.play() {
            match event {
                GameEvent::Round(report) => println!("\n{}", format_round(&report)),
                GameEvent::Finished(report) => println!("\n{}", format_final(&report)),
            }
        }
    }
}

/// Prompts for a line of input. Returns `None` on end of input.
fn prompt_with_default(prompt: &str, default: &str) -> Option<String> {
    print!("{prompt} [{default}]: ");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => {
            let input = input.trim();
            if input.is_empty() {
                Some(default.to_string())
            } else {
                Some(input.to_string())
            }
        }
    }
}

fn format_round(report: &RoundReport) -> String {
    let mut lines = vec![
        format!(
            "{} deals card with suit {} and face {} to {}.",
            report.dealer_name,
            report.player1_card.suit_name(),
            report.player1_card.face_name(),
            report.player1_name
        ),
        format!(
            "{} deals card with suit {} and face {} to {}.",
            report.dealer_name,
            report.player2_card.suit_name(),
            report.player2_card.face_name(),
            report.player2_name
        ),
    ];

    match &report.round_winner {
        Some(winner) => {
            lines.push(format!("{winner} wins the match."));
            lines.push(format!(
                "{} has {} points and {} has {}.",
                report.player1_name,
                report.player1_points,
                report.player2_name,
                report.player2_points
            ));
        }
        None => lines.push("Neither player wins the match.".to_string()),
    }

    lines.push(format!("{} cards left.", report.cards_remaining));
    lines.join("\n")
}

fn format_final(report: &FinalReport) -> String {
    let result = report.winner.as_ref().map_or_else(
        || "The game of war is a tie.".to_string(),
        |winner| format!("{winner} wins the game of war."),
    );

    format!(
        "Game of war finishes.\n{} has {} points and {} has {}.\n{result}",
        report.player1_name, report.player1_points, report.player2_name, report.player2_points
    )
}

//! CLI war example: an explicit driver loop over the engine's two
//! transitions and read-only accessors.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bataille::{Card, EngineState, Game, GameOptions, RoundOutcome, Suit};

fn main() {
    println!("War CLI example (type 'q' to quit, 'r' to restart)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = GameOptions::default();
    let game = Game::new(options, seed);

    loop {
        print_table(&game);

        let (one, two) = game.deck_counts();
        if one == 0 || two == 0 {
            let winner = if one == 0 { "two" } else { "one" };
            println!("Player {winner} holds every card. Game over.");
            break;
        }

        let action = match game.state() {
            EngineState::Idle => prompt_line("Press Enter to reveal: "),
            EngineState::Revealed => prompt_line("Press Enter to continue: "),
        };

        match action.as_str() {
            "q" | "quit" => {
                println!("Goodbye.");
                break;
            }
            "r" | "restart" => {
                match game.restart() {
                    Ok(()) => println!("New session dealt."),
                    Err(err) => println!("Restart error: {err}"),
                }
                continue;
            }
            _ => {}
        }

        let result: Result<(), Box<dyn std::error::Error>> = match game.state() {
            EngineState::Idle => game.reveal().map(|_| ()).map_err(Into::into),
            EngineState::Revealed => game.acknowledge().map_err(Into::into),
        };

        if let Err(err) = result {
            // Every engine error is fatal: the session cannot continue.
            println!("Game aborted: {err}");
            break;
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn print_table(game: &Game) {
    let (count_one, count_two) = game.deck_counts();
    let (badge_one, badge_two) = game.win_badges();

    println!("\nPlayer two: {count_two} cards {badge_two}");
    if let Some((card_one, card_two)) = game.revealed_cards() {
        println!("  {} vs {}", format_card(card_two), format_card(card_one));
        match game.outcome() {
            RoundOutcome::Draw => println!("  Draw: each card returns to its owner."),
            outcome => println!("  Round: {outcome}."),
        }
    }
    println!("Player one: {count_one} cards {badge_one}");
}

fn format_card(card: Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };

    format!("\u{1b}[{color_code}m{card}\u{1b}[0m")
}

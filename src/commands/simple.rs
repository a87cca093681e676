//! Simple interactive CLI mode
//!
//! Line-oriented game over stdin/stdout, driven through the same session
//! and interactions a graphical front-end would use. Letters and insert
//! spots are numbered from 1: `i 4 s` puts an 's' where it becomes the
//! fourth letter.

use super::game::{Game, GameState};
use super::show::describe_word;
use crate::core::{Word, WordGraph};
use crate::interaction::InteractionError;
use crate::output::display::{print_current_word, print_win, print_word_report};
use colored::Colorize;
use std::io::{self, Write};

/// A parsed line of input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimpleCommand {
    /// Delete the n-th letter
    Delete(usize),
    /// Replace the n-th letter
    Replace(usize, char),
    /// Insert a letter so it becomes the n-th
    Insert(usize, char),
    Show,
    Hint,
    Say,
    Undo,
    New,
    Help,
    Quit,
}

/// Parse one line of input, `None` if it is not a command
#[must_use]
pub fn parse_command(input: &str) -> Option<SimpleCommand> {
    let mut parts = input.split_whitespace();
    let head = parts.next()?.to_lowercase();
    let number = |s: Option<&str>| s.and_then(|s| s.parse::<usize>().ok()).filter(|&n| n > 0);
    let letter = |s: Option<&str>| {
        let s = s?;
        let mut chars = s.chars();
        let c = chars.next()?;
        chars.next().is_none().then_some(c)
    };

    let command = match head.as_str() {
        "d" | "delete" => SimpleCommand::Delete(number(parts.next())?),
        "r" | "replace" => SimpleCommand::Replace(number(parts.next())?, letter(parts.next())?),
        "i" | "insert" => SimpleCommand::Insert(number(parts.next())?, letter(parts.next())?),
        "show" | "o" | "options" => SimpleCommand::Show,
        "hint" | "?" => SimpleCommand::Hint,
        "say" | "s" => SimpleCommand::Say,
        "undo" | "u" => SimpleCommand::Undo,
        "new" | "n" => SimpleCommand::New,
        "help" | "h" => SimpleCommand::Help,
        "quit" | "q" | "exit" => SimpleCommand::Quit,
        _ => return None,
    };

    parts.next().is_none().then_some(command)
}

/// Apply an edit command, converting its 1-based numbers
///
/// Non-edit commands leave the game untouched and return the current word.
///
/// # Errors
///
/// Returns `InteractionError::InvalidChoice` if the edit does not lead to a
/// dictionary word or names a letter the word does not have.
pub fn apply_edit<'g>(
    state: &mut GameState<'g>,
    command: SimpleCommand,
) -> Result<&'g Word, InteractionError> {
    match command {
        SimpleCommand::Delete(n) => state.delete(n.wrapping_sub(1)),
        SimpleCommand::Replace(n, c) => state.replace(n.wrapping_sub(1), c),
        SimpleCommand::Insert(n, c) => state.insert(n.wrapping_sub(1), c),
        _ => Ok(state.current()),
    }
}

/// Run the simple interactive CLI mode
///
/// `new_game` is called for the first game and for every restart.
///
/// # Errors
///
/// Returns an error if reading input or writing the prompt fails.
pub fn run_simple<'g>(
    graph: &'g WordGraph,
    mut new_game: impl FnMut() -> Option<Game<'g>>,
) -> io::Result<()> {
    let Some(first) = new_game() else {
        println!("No playable word in the dictionary.");
        return Ok(());
    };

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Word Hop - Interactive Mode                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    print_help();

    let mut state = GameState::new(graph, first);
    announce(&state);

    loop {
        print_current_word(state.current(), state.game(), state.moves());
        let input = get_user_input("Edit")?;
        let Some(command) = parse_command(&input) else {
            println!("{}", "❌ Unknown command, type 'help' for the list".red());
            continue;
        };

        match command {
            SimpleCommand::Delete(_) | SimpleCommand::Replace(..) | SimpleCommand::Insert(..) => {
                match apply_edit(&mut state, command) {
                    Ok(word) => println!("✓ {}", word.value().bright_green().bold()),
                    Err(err) => println!("{} {err}", "❌".red()),
                }
            }
            SimpleCommand::Show => {
                if let Ok(report) = describe_word(graph, state.current().value()) {
                    print_word_report(&report);
                }
            }
            SimpleCommand::Hint => match state.hint() {
                Some(hint) => println!("💡 {hint}"),
                None => println!("No hint available"),
            },
            SimpleCommand::Say => state.say(),
            SimpleCommand::Undo => match state.undo() {
                Some(word) => println!("✓ Undone! Back to {}", word.value().bright_white().bold()),
                None => println!("Nothing to undo!"),
            },
            SimpleCommand::New => {
                if let Some(game) = new_game() {
                    state.restart(game);
                    println!("\n🔄 New game started!\n");
                    announce(&state);
                }
            }
            SimpleCommand::Help => print_help(),
            SimpleCommand::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }

        if state.is_won() {
            print_win(state.game(), state.moves());
            match get_user_input("Play again? (yes/no)")?.to_lowercase().as_str() {
                "yes" | "y" => {
                    if let Some(game) = new_game() {
                        state.restart(game);
                        println!("\n🔄 New game started!\n");
                        announce(&state);
                    }
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }
    }
}

fn announce(state: &GameState<'_>) {
    let game = state.game();
    match (game.target, game.par) {
        (Some(target), Some(par)) => println!(
            "Turn {} into {} ({par} edits at best)\n",
            game.start.value().bright_yellow().bold(),
            target.value().bright_yellow().bold()
        ),
        (Some(target), None) => println!(
            "Turn {} into {} (no known ladder)\n",
            game.start.value().bright_yellow().bold(),
            target.value().bright_yellow().bold()
        ),
        (None, _) => println!(
            "Free play from {}\n",
            game.start.value().bright_yellow().bold()
        ),
    }
}

fn print_help() {
    println!("Commands:");
    println!("  d <n>       delete letter n");
    println!("  r <n> <c>   replace letter n with c");
    println!("  i <n> <c>   insert c so it becomes letter n");
    println!("  show        list every edit of the current word");
    println!("  hint        suggest the next edit toward the target");
    println!("  say         pronounce the current word");
    println!("  undo, new, help, quit\n");
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> io::Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::WordGraphBuilder;
    use crate::commands::game::GameConfig;

    fn graph() -> WordGraph {
        WordGraphBuilder::new()
            .build(&["cat", "at", "hat", "hot", "hots", "zebra"])
            .unwrap()
    }

    fn game(graph: &WordGraph) -> Game<'_> {
        let config = GameConfig::new(Some("cat".into()), Some("hots".into()), false);
        Game::resolve(graph, &config).unwrap()
    }

    #[test]
    fn parses_commands() {
        assert_eq!(parse_command("d 1"), Some(SimpleCommand::Delete(1)));
        assert_eq!(parse_command("R 2 o"), Some(SimpleCommand::Replace(2, 'o')));
        assert_eq!(parse_command("insert 4 s"), Some(SimpleCommand::Insert(4, 's')));
        assert_eq!(parse_command("  undo "), Some(SimpleCommand::Undo));
        assert_eq!(parse_command("q"), Some(SimpleCommand::Quit));
    }

    #[test]
    fn rejects_malformed_commands() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("d"), None);
        assert_eq!(parse_command("d 0"), None);
        assert_eq!(parse_command("r 1 ab"), None);
        assert_eq!(parse_command("d 1 extra"), None);
        assert_eq!(parse_command("jump"), None);
    }

    #[test]
    fn edits_use_one_based_numbers() {
        let graph = graph();
        let mut state = GameState::new(&graph, game(&graph));

        let hat = apply_edit(&mut state, SimpleCommand::Replace(1, 'h')).unwrap();
        assert_eq!(hat.value(), "hat");
        apply_edit(&mut state, SimpleCommand::Replace(2, 'o')).unwrap();
        let hots = apply_edit(&mut state, SimpleCommand::Insert(4, 's')).unwrap();
        assert_eq!(hots.value(), "hots");
        assert!(state.is_won());
    }

    #[test]
    fn zero_and_out_of_range_numbers_are_invalid() {
        let graph = graph();
        let mut state = GameState::new(&graph, game(&graph));

        assert!(apply_edit(&mut state, SimpleCommand::Delete(0)).is_err());
        assert!(apply_edit(&mut state, SimpleCommand::Delete(4)).is_err());
        assert!(apply_edit(&mut state, SimpleCommand::Insert(6, 's')).is_err());
        assert_eq!(state.current().value(), "cat");
    }

    #[test]
    fn non_edit_commands_do_not_move() {
        let graph = graph();
        let mut state = GameState::new(&graph, game(&graph));
        let word = apply_edit(&mut state, SimpleCommand::Hint).unwrap();
        assert_eq!(word.value(), "cat");
        assert_eq!(state.moves(), 0);
    }
}

//! End-to-end tests for the console front end.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io::Cursor;
use strictly_tictactoe::{Console, Difficulty, GameMode, GameOutcome, MatchError, Player};

fn run_menu(input: &str) -> (usize, String) {
    let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
    let mut seeds = ChaCha8Rng::seed_from_u64(0);
    let games = console.run_menu(&mut seeds);
    let output = String::from_utf8(console.into_writer()).unwrap();
    (games, output)
}

#[test]
fn test_player_vs_player_game() {
    // X: (1,1) (1,2) (1,3); O: (2,2) (3,1)
    let input = "1 1\n2 2\n1 2\n3 1\n1 3\n";
    let input = input.replace(' ', "\n");
    let mut console = Console::new(Cursor::new(input.into_bytes()), Vec::new());

    let outcome = console.play(GameMode::PlayerVsPlayer, Difficulty::Easy, 0);
    assert_eq!(outcome, Ok(GameOutcome::Win(Player::X)));

    let output = String::from_utf8(console.into_writer()).unwrap();
    assert!(output.contains("Player X, enter row #(1-3): "));
    assert!(output.contains("Player O, enter column #(1-3): "));
    assert!(output.contains("1 X | X | X "));
    assert!(output.ends_with("Player 1 (X) WINS!\n"));
}

#[test]
fn test_row_and_column_on_one_line() {
    let input = "1 1\n2 2\n1 2\n3 1\n1  3\n";
    let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());

    let outcome = console.play(GameMode::PlayerVsPlayer, Difficulty::Easy, 0);
    assert_eq!(outcome, Ok(GameOutcome::Win(Player::X)));

    let output = String::from_utf8(console.into_writer()).unwrap();
    assert!(!output.contains("Invalid Move!"));
    assert_eq!(output.matches("enter column #(1-3): ").count(), 5);
}

#[test]
fn test_extra_numbers_do_not_leak_into_next_move() {
    // "2 2 9": the trailing 9 is dropped, so O's own line is read fresh.
    let input = "2 2 9\n1 1\n";
    let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());

    let outcome = console.play(GameMode::PlayerVsPlayer, Difficulty::Easy, 0);
    assert_eq!(outcome, Err(MatchError::InputClosed));

    let output = String::from_utf8(console.into_writer()).unwrap();
    assert!(!output.contains("Invalid Move!"));
    assert!(output.contains(" | X | "));
}

#[test]
fn test_invalid_moves_reprompt() {
    // Off-board, unreadable, then occupied before each valid move.
    let input = "4\n1\nfoo\n1\n1\n2\n2\n1\n1\n";
    let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());

    let outcome = console.play(GameMode::PlayerVsPlayer, Difficulty::Easy, 0);
    assert_eq!(outcome, Err(MatchError::InputClosed));

    let output = String::from_utf8(console.into_writer()).unwrap();
    assert_eq!(output.matches("Invalid Move! Please try again.").count(), 3);
}

#[test]
fn test_menu_exit() {
    let (games, output) = run_menu("2\n");
    assert_eq!(games, 0);
    assert!(output.contains("--- TIC-TAC-TOE MENU ---"));
    assert!(output.ends_with("Exiting... Thanks for playing!\n"));
}

#[test]
fn test_menu_invalid_entries() {
    let (games, output) = run_menu("7\n1\nz\n2\n");
    assert_eq!(games, 0);
    assert!(output.contains("Invalid choice!\n"));
    assert!(output.contains("Invalid option!\n"));
    assert_eq!(output.matches("--- TIC-TAC-TOE MENU ---").count(), 3);
}

#[test]
fn test_menu_end_of_input() {
    let (games, _) = run_menu("");
    assert_eq!(games, 0);
}

#[test]
fn test_menu_against_hard_computer() {
    // Human X plays the center, then corners Hard leaves open; Hard must not
    // lose. Input stops once the game ends (win or draw) and the menu exits.
    let mut input = String::from("1\nA\n3\n");
    for (row, col) in [(2, 2), (1, 3), (3, 1), (3, 2), (2, 1), (1, 2), (2, 3), (3, 3)] {
        input.push_str(&format!("{}\n{}\n", row, col));
    }
    let (_, output) = run_menu(&input);

    assert!(output.contains("Select Difficulty Level:"));
    assert!(output.contains("Computer (O) plays row 1, column 1."));
    assert!(!output.contains("Player 1 (X) WINS!"));
}

#[test]
fn test_invalid_difficulty_defaults_to_easy() {
    let (_, output) = run_menu("1\na\n9\n");
    assert!(output.contains("Invalid choice! Setting to Easy by default.\n"));
}

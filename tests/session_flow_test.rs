//! Integration test: full session flow.
//!
//! Drives the session loops end to end with scripted console input and a
//! seeded RNG, and checks the player-visible flow: prompts, re-prompting,
//! stats accumulation, and termination.

use hilo::input::GuessPolicy;
use hilo::round::{play_round_with_secret, won_score, PromptStyle};
use hilo::session::{run_classic_session, run_session, SessionStats};
use hilo::{GuessRange, RoundConfig};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io::Cursor;

fn create_test_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(12345)
}

/// Run the scored session against a scripted input stream.
fn run_session_scripted(script: &str) -> String {
    let mut rng = create_test_rng();
    let mut input = Cursor::new(script.as_bytes().to_vec());
    let mut output = Vec::new();
    run_session(&mut rng, &mut input, &mut output).expect("session should end via 'n'");
    String::from_utf8(output).unwrap()
}

fn run_classic_scripted(script: &str) -> String {
    let mut rng = create_test_rng();
    let mut input = Cursor::new(script.as_bytes().to_vec());
    let mut output = Vec::new();
    run_classic_session(&mut rng, &mut input, &mut output).expect("session should end via 'n'");
    String::from_utf8(output).unwrap()
}

// The secret is random, so scripts exhaust the attempt budget with guesses
// that double as throwaway play-again answers: if the round ends early, the
// leftover numbers are rejected by the yes/no prompt until the real answer
// arrives. Either way the session consumes the script deterministically.

/// Easy mode, all six attempts scripted, then decline.
const ONE_EASY_ROUND_THEN_QUIT: &str = "1\n1\n2\n3\n4\n5\n6\nn\n";

// =============================================================================
// Scored session (main binary) flow
// =============================================================================

#[test]
fn test_session_plays_one_round_and_exits_on_no() {
    let output = run_session_scripted(ONE_EASY_ROUND_THEN_QUIT);

    assert!(output.contains("Welcome to Guess the Number"));
    assert!(output.contains("Choose difficulty:"));
    assert!(output.contains("You are playing on Easy mode."));
    assert!(output.contains("I'm thinking of a number between 1 and 10..."));
    assert!(output.contains("Correct!") || output.contains("Out of attempts!"));
    assert!(output.contains("--- Stats ---"));
    assert!(output.contains("Games played: 1"));
    assert_eq!(output.matches("Thanks for playing! Goodbye.").count(), 1);
    assert!(output.trim_end().ends_with("Thanks for playing! Goodbye."));
}

#[test]
fn test_play_again_rejects_then_accepts() {
    // "maybe" is not an answer; "Y" continues into a second round.
    let script = "1\n1\n2\n3\n4\n5\n6\nmaybe\nY\n1\n1\n2\n3\n4\n5\n6\nn\n";
    let output = run_session_scripted(script);

    assert!(output.contains("Please enter 'y' or 'n'."));
    assert!(output.contains("Games played: 2"));
    assert_eq!(output.matches("Thanks for playing! Goodbye.").count(), 1);
}

#[test]
fn test_session_prompts_use_attempt_numbers() {
    let output = run_session_scripted(ONE_EASY_ROUND_THEN_QUIT);
    assert!(output.contains("Attempt 1: your guess? "));
}

#[test]
fn test_stats_block_repeats_after_every_round() {
    let script = "1\n1\n2\n3\n4\n5\n6\ny\n1\n1\n2\n3\n4\n5\n6\nn\n";
    let output = run_session_scripted(script);
    assert_eq!(output.matches("--- Stats ---").count(), 2);
    assert!(output.matches("Play again? (y/n): ").count() >= 2);
}

// =============================================================================
// Win/loss accounting with forced secrets
// =============================================================================

#[test]
fn test_won_then_lost_round_accounting() {
    let hard = RoundConfig {
        range: GuessRange::new(1, 100),
        max_attempts: 10,
        policy: GuessPolicy::AnyInteger,
        prompt: PromptStyle::AttemptNumber,
    };
    let mut stats = SessionStats::new();

    // Round 1: win Hard in 3 attempts -> 100 - 6 = 94 points.
    let mut input = Cursor::new(b"50\n75\n60\n" as &[u8]);
    let mut output = Vec::new();
    let won = play_round_with_secret(&mut input, &mut output, hard, 60).unwrap();
    assert_eq!(won.score(), 94);
    assert!(stats.record(&won, "Hard"));

    // Round 2: lose Hard without ever guessing 99.
    let mut input = Cursor::new(b"1\n2\n3\n4\n5\n6\n7\n8\n9\n10\n" as &[u8]);
    let mut output = Vec::new();
    let lost = play_round_with_secret(&mut input, &mut output, hard, 99).unwrap();
    assert_eq!(lost.score(), 0);
    assert!(!stats.record(&lost, "Hard"));
    let transcript = String::from_utf8(output).unwrap();
    assert!(transcript.contains("Out of attempts! The number was 99."));

    assert_eq!(stats.games_played, 2);
    assert_eq!(stats.total_score, 94);
    assert_eq!(stats.best_score, Some(94));
    assert_eq!(stats.best_difficulty, Some("Hard"));
}

#[test]
fn test_easy_win_on_last_attempt_scores_the_floor() {
    let easy = RoundConfig {
        range: GuessRange::new(1, 10),
        max_attempts: 6,
        policy: GuessPolicy::AnyInteger,
        prompt: PromptStyle::AttemptNumber,
    };
    let mut input = Cursor::new(b"1\n2\n3\n4\n5\n6\n" as &[u8]);
    let mut output = Vec::new();
    let outcome = play_round_with_secret(&mut input, &mut output, easy, 6).unwrap();
    assert_eq!(outcome.score(), 1);
    assert_eq!(won_score(GuessRange::new(1, 10), 6), 1);
}

// =============================================================================
// Classic session (fixed range, digits only)
// =============================================================================

#[test]
fn test_classic_session_uses_range_reminder_prompt() {
    let script = "1\n2\n3\n4\n5\n6\n7\nn\n";
    let output = run_classic_scripted(script);

    assert!(output.contains("Find the secret number between 1 and 100."));
    assert!(output.contains("Enter your guess (1-100): "));
    assert_eq!(output.matches("Thanks for playing! Goodbye.").count(), 1);
}

#[test]
fn test_classic_session_rejects_non_digit_guesses() {
    // "-5" and "abc" must be refused without consuming attempts.
    let script = "-5\nabc\n1\n2\n3\n4\n5\n6\n7\nn\n";
    let output = run_classic_scripted(script);

    assert!(output.matches("Numbers only, please.").count() >= 2);
    assert!(output.contains("Correct!") || output.contains("Out of attempts!"));
}

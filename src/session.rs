//! The outer play-again loop and per-session statistics.

use crate::constants::{CLASSIC_HIGH, CLASSIC_LOW, CLASSIC_MAX_ATTEMPTS};
use crate::difficulty::choose_difficulty;
use crate::input::{ask_yes_no, GuessPolicy};
use crate::round::{play_round, GuessRange, PromptStyle, RoundConfig, RoundOutcome};
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Running totals for the current process. Never persisted.
#[derive(Debug, Clone, Default)]
pub struct SessionStats {
    pub games_played: u32,
    pub total_score: i32,
    pub best_score: Option<i32>,
    pub best_difficulty: Option<&'static str>,
}

impl SessionStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one finished round into the totals.
    ///
    /// Returns true if the round set a new personal best. Losses add a
    /// game and zero points and never displace the best.
    pub fn record(&mut self, outcome: &RoundOutcome, difficulty_label: &'static str) -> bool {
        self.games_played += 1;
        let score = outcome.score();
        self.total_score += score;

        if outcome.is_won() && self.best_score.map_or(true, |best| score > best) {
            self.best_score = Some(score);
            self.best_difficulty = Some(difficulty_label);
            return true;
        }
        false
    }
}

fn print_stats(output: &mut impl Write, stats: &SessionStats) -> io::Result<()> {
    writeln!(output)?;
    writeln!(output, "--- Stats ---")?;
    writeln!(output, "Games played: {}", stats.games_played)?;
    writeln!(output, "Total score: {}", stats.total_score)?;
    if let (Some(best), Some(label)) = (stats.best_score, stats.best_difficulty) {
        writeln!(output, "Best round: {} point(s) on {} mode", best, label)?;
    }
    Ok(())
}

/// Run a full session of the scored game: difficulty menu, round, stats,
/// repeated until the player declines to continue.
pub fn run_session(
    rng: &mut impl Rng,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<()> {
    writeln!(output, "===================================")?;
    writeln!(output, "      Welcome to Guess the Number")?;
    writeln!(output, "===================================")?;
    writeln!(output)?;
    writeln!(
        output,
        "Try to guess the secret number in as few attempts as possible."
    )?;

    let mut stats = SessionStats::new();

    loop {
        let difficulty = choose_difficulty(input, output)?;
        writeln!(output, "You are playing on {} mode.", difficulty.label())?;

        let config = RoundConfig {
            range: difficulty.range(),
            max_attempts: difficulty.max_attempts(),
            policy: GuessPolicy::AnyInteger,
            prompt: PromptStyle::AttemptNumber,
        };
        let outcome = play_round(rng, input, output, config)?;

        let new_best = stats.record(&outcome, difficulty.label());
        if outcome.is_won() {
            writeln!(output, "You earned {} point(s) this round.", outcome.score())?;
            if new_best {
                writeln!(output, "New personal best score!")?;
            }
        } else {
            writeln!(output, "No points this round.")?;
        }
        print_stats(output, &stats)?;

        if !ask_yes_no(input, output, "Play again? (y/n): ")? {
            break;
        }
    }

    writeln!(output)?;
    writeln!(output, "Thanks for playing! Goodbye.")?;
    Ok(())
}

/// Run a full session of the classic game: one fixed range, digits-only
/// guesses, no scoring.
pub fn run_classic_session(
    rng: &mut impl Rng,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<()> {
    writeln!(output, "Guess the Number")?;
    writeln!(
        output,
        "Find the secret number between {} and {}.",
        CLASSIC_LOW, CLASSIC_HIGH
    )?;

    let config = RoundConfig {
        range: GuessRange::new(CLASSIC_LOW, CLASSIC_HIGH),
        max_attempts: CLASSIC_MAX_ATTEMPTS,
        policy: GuessPolicy::DigitsOnly,
        prompt: PromptStyle::RangeReminder,
    };

    loop {
        play_round(rng, input, output, config)?;
        if !ask_yes_no(input, output, "Play again? (y/n): ")? {
            break;
        }
    }

    writeln!(output)?;
    writeln!(output, "Thanks for playing! Goodbye.")?;
    Ok(())
}

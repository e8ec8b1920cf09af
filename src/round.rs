//! One round of the game: secret draw, guess loop, outcome and scoring.

use crate::constants::{MIN_WIN_SCORE, SCORE_ATTEMPT_PENALTY};
use crate::input::{ask_int, GuessPolicy};
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Inclusive bounds for the secret and for valid guesses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessRange {
    pub low: i32,
    pub high: i32,
}

impl GuessRange {
    /// `low` must not exceed `high`.
    pub fn new(low: i32, high: i32) -> Self {
        debug_assert!(low <= high);
        Self { low, high }
    }

    /// Number of integers in the range.
    pub fn span(&self) -> i32 {
        self.high - self.low + 1
    }

    pub fn contains(&self, value: i32) -> bool {
        value >= self.low && value <= self.high
    }
}

/// How the per-guess prompt is worded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptStyle {
    /// "Attempt N: your guess? "
    AttemptNumber,
    /// "Enter your guess (LOW-HIGH): "
    RangeReminder,
}

/// Everything a round needs besides I/O and randomness.
#[derive(Debug, Clone, Copy)]
pub struct RoundConfig {
    pub range: GuessRange,
    pub max_attempts: u32,
    pub policy: GuessPolicy,
    pub prompt: PromptStyle,
}

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    Won { attempts_used: u32, score: i32 },
    Lost { secret: i32 },
}

impl RoundOutcome {
    pub fn is_won(&self) -> bool {
        matches!(self, RoundOutcome::Won { .. })
    }

    /// Points earned this round. Losses are worth nothing.
    pub fn score(&self) -> i32 {
        match self {
            RoundOutcome::Won { score, .. } => *score,
            RoundOutcome::Lost { .. } => 0,
        }
    }
}

/// Fewer attempts and larger ranges give higher scores, floored at 1.
pub fn won_score(range: GuessRange, attempts_used: u32) -> i32 {
    let score = range.span() - attempts_used as i32 * SCORE_ATTEMPT_PENALTY;
    score.max(MIN_WIN_SCORE)
}

/// Draw the secret uniformly from the range.
pub fn draw_secret(rng: &mut impl Rng, range: GuessRange) -> i32 {
    rng.gen_range(range.low..=range.high)
}

/// Play one full round: draw a secret, then loop over validated guesses
/// until it is found or the attempt budget runs out.
pub fn play_round(
    rng: &mut impl Rng,
    input: &mut impl BufRead,
    output: &mut impl Write,
    config: RoundConfig,
) -> io::Result<RoundOutcome> {
    let secret = draw_secret(rng, config.range);
    play_round_with_secret(input, output, config, secret)
}

/// Round loop with the secret supplied by the caller.
///
/// `play_round` draws it randomly; tests pass a known value.
pub fn play_round_with_secret(
    input: &mut impl BufRead,
    output: &mut impl Write,
    config: RoundConfig,
    secret: i32,
) -> io::Result<RoundOutcome> {
    debug_assert!(config.range.contains(secret));

    let range = config.range;
    writeln!(output)?;
    writeln!(
        output,
        "I'm thinking of a number between {} and {}...",
        range.low, range.high
    )?;
    writeln!(output, "You have {} attempts. Good luck!", config.max_attempts)?;
    writeln!(output)?;

    let mut attempts_used = 0;
    while attempts_used < config.max_attempts {
        let prompt = match config.prompt {
            PromptStyle::AttemptNumber => {
                format!("Attempt {}: your guess? ", attempts_used + 1)
            }
            PromptStyle::RangeReminder => {
                format!("Enter your guess ({}-{}): ", range.low, range.high)
            }
        };

        // Only a validated in-range guess consumes an attempt.
        let guess = ask_int(
            input,
            output,
            &prompt,
            Some(range.low),
            Some(range.high),
            config.policy,
        )?;
        attempts_used += 1;

        if guess == secret {
            writeln!(output, "Correct! The number was {}.", secret)?;
            writeln!(output, "You guessed it in {} attempt(s).", attempts_used)?;
            writeln!(output)?;
            return Ok(RoundOutcome::Won {
                attempts_used,
                score: won_score(range, attempts_used),
            });
        }

        if guess < secret {
            writeln!(output, "Too low.")?;
        } else {
            writeln!(output, "Too high.")?;
        }

        let remaining = config.max_attempts - attempts_used;
        if remaining > 0 {
            writeln!(output, "{} attempt(s) remaining.", remaining)?;
            writeln!(output)?;
        }
    }

    writeln!(output)?;
    writeln!(output, "Out of attempts! The number was {}.", secret)?;
    Ok(RoundOutcome::Lost { secret })
}

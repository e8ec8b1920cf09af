//! Difficulty presets and the pre-round difficulty menu.

use crate::input::{ask_int, GuessPolicy};
use crate::round::GuessRange;
use std::io::{self, BufRead, Write};

/// Difficulty level, each mapping to a fixed range and attempt budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn all() -> [Difficulty; 3] {
        [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
    }

    /// Menu choice (1-3) to difficulty.
    pub fn from_choice(choice: i32) -> Difficulty {
        match choice {
            1 => Difficulty::Easy,
            2 => Difficulty::Medium,
            _ => Difficulty::Hard,
        }
    }

    pub fn range(&self) -> GuessRange {
        match self {
            Difficulty::Easy => GuessRange::new(1, 10),
            Difficulty::Medium => GuessRange::new(1, 50),
            Difficulty::Hard => GuessRange::new(1, 100),
        }
    }

    pub fn max_attempts(&self) -> u32 {
        match self {
            Difficulty::Easy => 6,
            Difficulty::Medium => 8,
            Difficulty::Hard => 10,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// Print the difficulty menu and return the player's choice.
pub fn choose_difficulty(
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<Difficulty> {
    writeln!(output)?;
    writeln!(output, "Choose difficulty:")?;
    for (index, difficulty) in Difficulty::all().iter().enumerate() {
        let range = difficulty.range();
        writeln!(
            output,
            "  {}. {:<6} ({}-{}, {} attempts)",
            index + 1,
            difficulty.label(),
            range.low,
            range.high,
            difficulty.max_attempts()
        )?;
    }

    let choice = ask_int(
        input,
        output,
        "Enter 1, 2 or 3: ",
        Some(1),
        Some(3),
        GuessPolicy::AnyInteger,
    )?;
    Ok(Difficulty::from_choice(choice))
}

//! Classic mode: one fixed range, digits-only guesses, no scoring.

use hilo::session::run_classic_session;
use std::io;

fn main() -> io::Result<()> {
    let mut rng = rand::thread_rng();
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_classic_session(&mut rng, &mut stdin.lock(), &mut stdout.lock())
}

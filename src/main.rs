//! Headless autoplay runner (default binary).
//!
//! Plays one level greedily: scans the board for the first adjacent swap
//! the engine accepts, prints a JSON swap report and observation per move,
//! and stops when the level is won, lost, or no acceptable move remains.
//! Usage: `garden-crush [seed] [level 1-5]`.

use anyhow::{Context, Result};

use garden_crush::adapter::{encode, Observation, SwapReport};
use garden_crush::engine::{GameSession, LevelOutcome, LevelSpec};
use garden_crush::types::{Pos, BOARD_COLS, BOARD_ROWS};

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let seed: u32 = match args.next() {
        Some(raw) => raw.parse().context("seed must be a u32")?,
        None => 1,
    };
    let level_no: usize = match args.next() {
        Some(raw) => raw.parse().context("level must be a number")?,
        None => 1,
    };

    let levels = LevelSpec::reference_levels();
    let level = *levels
        .get(level_no.wrapping_sub(1))
        .with_context(|| format!("level must be 1-{}", levels.len()))?;

    let mut session = GameSession::new(seed, level);
    println!("{}", encode(&Observation::capture(&session))?);

    while session.outcome() == LevelOutcome::InProgress {
        let Some(outcome) = first_accepted_swap(&mut session) else {
            // No move changes the board; a real game would reshuffle here
            break;
        };
        println!("{}", encode(&SwapReport::capture(&outcome))?);
        println!("{}", encode(&Observation::capture(&session))?);

        // Crude clock: one second per move on timed levels
        if session.level().is_timed() {
            session.tick_second();
        }
    }

    println!("{}", encode(&Observation::capture(&session))?);
    Ok(())
}

/// Scan row-major for the first swap the engine accepts. Rejected attempts
/// leave the board untouched, so probing by request is safe.
fn first_accepted_swap(
    session: &mut GameSession,
) -> Option<garden_crush::engine::SwapOutcome> {
    for row in 0..BOARD_ROWS as i8 {
        for col in 0..BOARD_COLS as i8 {
            let here = Pos::new(row, col);
            for other in [Pos::new(row, col + 1), Pos::new(row + 1, col)] {
                let outcome = session.request_swap(here, other);
                if outcome.accepted {
                    return Some(outcome);
                }
            }
        }
    }
    None
}

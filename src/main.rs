//! Headless autoplay runner (default binary).
//!
//! Drives a session with the stock random factory until game over: each
//! turn it picks the first tray piece that fits anywhere and drops it at
//! its first fitting anchor. Prints the final grid and run statistics.
//! Useful as a smoke test of the whole public surface and as a reference
//! for embedding the engine behind a real UI.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::style::{Color, Stylize};

use gridfill::core::{first_fit, PlaceOutcome, RandomFactory, Session};
use gridfill::types::{Cell, ColorTag, GRID_SIZE, TRAY_CAPACITY};

fn main() -> Result<()> {
    let seed: u32 = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => 1,
    };

    let mut session = Session::new(GRID_SIZE, TRAY_CAPACITY, Box::new(RandomFactory::new(seed)));

    let mut placements: u32 = 0;
    let mut lines_cleared: u32 = 0;

    while !session.is_game_over() {
        let Some(turn) = pick_first_fitting(&session) else {
            // The availability check latches game over whenever this would
            // happen, so an active session always has a fitting piece.
            break;
        };
        let (index, row, col) = turn;

        session.pick_up(index)?;
        match session.place_at(row, col) {
            PlaceOutcome::Placed { cleared, .. } => {
                placements += 1;
                lines_cleared += cleared.total() as u32;
            }
            PlaceOutcome::Returned => unreachable!("first_fit anchors always place"),
        }
    }

    let mut out = io::stdout().lock();
    render_grid(&mut out, session.grid().cells())?;
    writeln!(
        out,
        "seed {}: game over after {} placements, {} lines cleared, {} cells filled",
        seed,
        placements,
        lines_cleared,
        session.grid().filled_count()
    )?;

    Ok(())
}

/// First (tray index, anchor) combination that fits, scan order
fn pick_first_fitting(session: &Session) -> Option<(usize, i8, i8)> {
    session
        .tray()
        .iter()
        .enumerate()
        .find_map(|(index, piece)| {
            first_fit(session.grid(), piece.shape()).map(|(row, col)| (index, row, col))
        })
}

fn render_grid(out: &mut impl Write, cells: &[Cell]) -> Result<()> {
    for chunk in cells.chunks(GRID_SIZE as usize) {
        for cell in chunk {
            match cell {
                Some(tag) => write!(out, "{}", "██".with(term_color(*tag)))?,
                None => write!(out, "{}", "··".dark_grey())?,
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

fn term_color(tag: ColorTag) -> Color {
    match tag {
        ColorTag::Magenta => Color::Magenta,
        ColorTag::Cyan => Color::Cyan,
        ColorTag::Yellow => Color::Yellow,
        ColorTag::Red => Color::Red,
        ColorTag::Green => Color::Green,
        ColorTag::Blue => Color::Blue,
        ColorTag::Orange => Color::DarkYellow,
        ColorTag::Purple => Color::DarkMagenta,
    }
}

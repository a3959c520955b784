#![cfg(feature = "std")]

use std::fmt::Write;

use crate::{
    board::{Board, BoardView, CellView},
    config::BOARD_SIZE,
    notation::row_letters,
};

const CELL_WIDTH: usize = 3;
// " A" + cells + " "
const INNER_WIDTH: usize = 2 + BOARD_SIZE * CELL_WIDTH + 1;

fn border(left: char, right: char) -> String {
    format!("    {}{}{}\n", left, "═".repeat(INNER_WIDTH), right)
}

/// Render a board projection as a framed grid with a legend.
pub fn render_board(view: &BoardView, reveal: bool) -> String {
    let mut out = border('╔', '╗');
    out.push_str("    ║  ");
    for c in 1..=BOARD_SIZE {
        let _ = write!(out, "{:>width$}", c, width = CELL_WIDTH);
    }
    out.push_str(" ║\n");
    out.push_str(&border('╠', '╣'));
    for (letter, row) in row_letters().zip(view.rows().iter()) {
        let _ = write!(out, "    ║ {}", letter);
        for cell in row {
            let _ = write!(out, "{:>width$}", cell.symbol(), width = CELL_WIDTH);
        }
        out.push_str(" ║\n");
    }
    out.push_str(&border('╚', '╝'));
    if reveal {
        let _ = writeln!(
            out,
            "    Legend: {}=Ship  {}=Hit  {}=Miss  {}=Water",
            CellView::Ship.symbol(),
            CellView::Hit.symbol(),
            CellView::Miss.symbol(),
            CellView::Unknown.symbol()
        );
    } else {
        let _ = writeln!(
            out,
            "    Legend: {}=Hit  {}=Miss  {}=Unknown",
            CellView::Hit.symbol(),
            CellView::Miss.symbol(),
            CellView::Unknown.symbol()
        );
    }
    out
}

/// One line per ship with its sunk/afloat state.
pub fn render_fleet_status(board: &Board) -> String {
    let mut out = String::from("    Ships:\n");
    for (name, size, sunk) in board.fleet_status() {
        let status = if sunk { "SUNK" } else { "Active" };
        let _ = writeln!(out, "      {} ({}): {}", name, size, status);
    }
    out
}

/// The acting player's screen: the enemy waters (hidden) above their own
/// fleet (revealed).
pub fn render_player_view(own: &Board, enemy: &Board) -> String {
    let mut out = String::from("Enemy waters:\n");
    out.push_str(&render_board(&enemy.view(false), false));
    out.push_str("\nYour fleet:\n");
    out.push_str(&render_board(&own.view(true), true));
    out.push_str(&render_fleet_status(own));
    out
}

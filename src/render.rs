//! Console and markdown rendering of boards and game state.

use crate::board::Board;
use crate::cell::{cell_status, CellStatus};
use crate::grid::{Coord, GridDims, COLUMNS};
use crate::question::Question;
use crate::state::{GameState, TeamId};
use chrono::{DateTime, Utc};

/// Icon shown next to a question's category. Unknown categories fall
/// closed to a generic marker instead of rendering nothing.
pub fn category_icon(category: &str) -> &'static str {
    match category {
        "History" => "🏛",
        "Geography" => "🗺",
        "Science" => "🔬",
        "Music" => "🎵",
        "Movies" => "🎬",
        "Sports" => "⚽",
        "Literature" => "📚",
        "Art" => "🎨",
        _ => "❓",
    }
}

/// Marker for the n-th ship in a layout drawing: 1-9, then A, B, ...
pub fn piece_glyph(index: usize) -> char {
    char::from_digit(index as u32 + 1, 36)
        .map(|c| c.to_ascii_uppercase())
        .unwrap_or('#')
}

fn status_glyph(status: CellStatus) -> char {
    match status {
        CellStatus::Untouched => '.',
        CellStatus::Miss => 'o',
        CellStatus::Hit => 'X',
        CellStatus::Sunk => '#',
        CellStatus::Bomb => '*',
        CellStatus::RevealedShip => 'S',
        CellStatus::RevealedBomb => 'B',
    }
}

fn field_glyphs(dims: GridDims, board: &Board) -> Vec<Vec<char>> {
    let mut field = vec![vec!['·'; dims.width()]; dims.height()];
    for (i, ship) in board.ships.iter().enumerate() {
        for cell in &ship.cells {
            field[cell.row][cell.col] = piece_glyph(i);
        }
    }
    for bomb in &board.bombs {
        field[bomb.cell.row][bomb.cell.col] = '*';
    }
    field
}

// One box-drawing border line: left, a 3-dash segment per column
// (label column included), right.
fn border(width: usize, left: char, mid: char, right: char) -> String {
    let mut line = String::new();
    line.push(left);
    for _ in 0..width {
        line.push_str("───");
        line.push(mid);
    }
    line.push_str("───");
    line.push(right);
    line
}

/// Draw the full layout with every piece visible. Used after generation
/// and embedded in the positions report.
pub fn render_layout(dims: GridDims, board: &Board) -> String {
    let field = field_glyphs(dims, board);
    let mut out = String::new();
    out.push_str(&border(dims.width(), '┌', '┬', '┐'));
    out.push('\n');
    out.push_str("│   │");
    for c in 0..dims.width() {
        out.push_str(&format!(" {} │", COLUMNS[c]));
    }
    out.push('\n');
    for (r, row) in field.iter().enumerate() {
        out.push_str(&border(dims.width(), '├', '┼', '┤'));
        out.push('\n');
        out.push_str(&format!("│ {:>2}│", r + 1));
        for glyph in row {
            out.push_str(&format!(" {} │", glyph));
        }
        out.push('\n');
    }
    out.push_str(&border(dims.width(), '└', '┴', '┘'));
    out.push('\n');
    out
}

fn excerpt(text: &str) -> String {
    let short: String = text.chars().take(50).collect();
    if text.chars().count() > 50 {
        format!("{}...", short)
    } else {
        short
    }
}

/// The host's cheat sheet: the full layout plus every piece's cells and
/// the questions hiding under them. Never shown to the teams.
pub fn render_positions_markdown(
    dims: GridDims,
    board: &Board,
    questions: &[Question],
    generated_at: DateTime<Utc>,
) -> String {
    let find = |id: &str| questions.iter().find(|q| q.id == id);
    let mut md = String::new();
    md.push_str("# Ship and bomb positions\n\n");
    md.push_str(&format!(
        "*Generated: {}*\n\n",
        generated_at.format("%Y-%m-%d %H:%M UTC")
    ));

    md.push_str("## Field\n\n");
    md.push_str("```\n");
    md.push_str(&render_layout(dims, board));
    md.push_str("```\n\n");

    md.push_str("## Legend\n\n");
    md.push_str("- `·` - empty cell\n");
    md.push_str("- `1`-`9`, then letters - ship markers in listed order\n");
    md.push_str("- `*` - bomb\n\n");

    md.push_str("## Ships\n\n");
    for (i, ship) in board.ships.iter().enumerate() {
        md.push_str(&format!(
            "### {}. {} ({} cells)\n\n",
            i + 1,
            ship.name,
            ship.len()
        ));
        let cells: Vec<String> = ship.cells.iter().map(|c| c.to_string()).collect();
        md.push_str(&format!("**Position:** {}\n\n", cells.join(", ")));
        md.push_str("**Questions:**\n\n");
        for (cell, qid) in ship.cells.iter().zip(&ship.question_ids) {
            match find(qid) {
                Some(q) => md.push_str(&format!(
                    "- **{}**: [{}] {} - {}\n",
                    cell,
                    qid,
                    q.category,
                    excerpt(&q.question)
                )),
                None => md.push_str(&format!("- **{}**: [{}] question not found\n", cell, qid)),
            }
        }
        md.push('\n');
    }

    md.push_str("## Bombs\n\n");
    for (i, bomb) in board.bombs.iter().enumerate() {
        match find(&bomb.question_id) {
            Some(q) => md.push_str(&format!(
                "{}. **{}**: [{}] {} - {}\n",
                i + 1,
                bomb.cell,
                bomb.question_id,
                q.category,
                excerpt(&q.question)
            )),
            None => md.push_str(&format!(
                "{}. **{}**: [{}] question not found\n",
                i + 1,
                bomb.cell,
                bomb.question_id
            )),
        }
    }

    let ship_cells: usize = board.ships.iter().map(|s| s.len()).sum();
    let occupied = board.piece_cell_count();
    md.push_str("\n## Statistics\n\n");
    md.push_str(&format!("- Ships: {}\n", board.ships.len()));
    md.push_str(&format!("- Ship cells: {}\n", ship_cells));
    md.push_str(&format!("- Bombs: {}\n", board.bombs.len()));
    md.push_str(&format!("- Occupied cells: {}\n", occupied));
    md.push_str(&format!(
        "- Field fill: {:.1}%\n",
        occupied as f64 / dims.cell_count() as f64 * 100.0
    ));
    md
}

/// Draw the board as the teams see it. Every cell goes through
/// [`cell_status`], so view mode reveals pieces here and nowhere else.
pub fn render_play_view(dims: GridDims, board: &Board, state: &GameState) -> String {
    let inner = 2 * dims.width() + 4;
    let bar: String = "═".repeat(inner);
    let mut out = String::new();
    out.push_str(&format!("    ╔{}╗\n", bar));
    out.push_str("    ║   ");
    for c in 0..dims.width() {
        out.push_str(&format!(" {}", COLUMNS[c]));
    }
    out.push_str(" ║\n");
    out.push_str(&format!("    ╠{}╣\n", bar));
    for r in 0..dims.height() {
        out.push_str(&format!("    ║ {:2}", r + 1));
        for c in 0..dims.width() {
            let status = cell_status(
                Coord::new(c, r),
                board,
                &state.probed_cells,
                state.view_mode,
            );
            out.push_str(&format!(" {}", status_glyph(status)));
        }
        out.push_str(" ║\n");
    }
    out.push_str(&format!("    ╚{}╝\n", bar));
    if state.view_mode {
        out.push_str("    Legend: S=Ship  B=Bomb  o=Miss  .=Empty\n");
        out.push_str("\n    Ships:\n");
        for ship in &board.ships {
            let sunk = !ship.is_empty()
                && ship.cells.iter().all(|c| state.probed_cells.contains(c));
            let status = if sunk { "SUNK" } else { "Active" };
            out.push_str(&format!("      {} ({}): {}\n", ship.name, ship.len(), status));
        }
    } else {
        out.push_str("    Legend: X=Hit  #=Sunk  *=Bomb  o=Miss  .=Hidden\n");
    }
    out
}

/// Team names, scores and whose turn it is.
pub fn render_scoreboard(state: &GameState) -> String {
    let mut out = String::new();
    for id in [TeamId::One, TeamId::Two] {
        let team = state.team(id);
        let marker = if state.game_started && state.current_turn == id {
            "  ◀ turn"
        } else {
            ""
        };
        out.push_str(&format!("    {:<12} {:>4}{}\n", team.name, team.score, marker));
    }
    if state.view_mode || state.edit_mode {
        let mut modes = Vec::new();
        if state.view_mode {
            modes.push("view");
        }
        if state.edit_mode {
            modes.push("edit");
        }
        out.push_str(&format!("    [{} mode]\n", modes.join("+")));
    }
    out
}

use crossterm::style::Stylize;

use crate::board::Board;

/// Renders the rows of `board` in the same layout as its `Display`
/// output, minus the dimension line. With `color` set, the blank is dimmed and
/// the cell at flat index `highlight` is drawn bold in yellow.
pub fn render(board: &Board, highlight: Option<usize>, color: bool) -> String {
    let mut out = String::new();
    for (row, values) in board.rows().enumerate() {
        for (col, &val) in values.iter().enumerate() {
            let cell = format!("{:2}", val);
            let index = row * board.dimension() + col;
            let styled = if !color {
                cell
            } else if val == 0 {
                cell.dim().to_string()
            } else if highlight == Some(index) {
                cell.bold().yellow().to_string()
            } else {
                cell
            };
            out.push_str(&styled);
            out.push(' ');
        }
        out.push('\n');
    }
    out
}

/// Flat index of the tile that moved between two consecutive boards.
pub fn moved_tile(previous: &Board, current: &Board) -> Option<usize> {
    Board::move_between(previous, current).map(|_| previous.blank())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Move;

    #[test]
    fn plain_render_matches_display_body() {
        let board = Board::goal(3).unwrap().twin();
        let display = board.to_string();
        let body = display.split_once('\n').map(|(_, rest)| rest).unwrap();
        assert_eq!(render(&board, None, false), body);
    }

    #[test]
    fn color_render_adds_escape_codes() {
        let board = Board::goal(2).unwrap();
        let colored = render(&board, Some(0), true);
        assert!(colored.contains('\u{1b}'));
        assert_ne!(colored, render(&board, Some(0), false));
    }

    #[test]
    fn moved_tile_is_old_blank_cell() {
        let before = Board::goal(3).unwrap();
        let after = before.slide(Move::Down).unwrap();
        assert_eq!(moved_tile(&before, &after), Some(before.blank()));
        assert_eq!(after.tiles()[before.blank()], before.tiles()[after.blank()]);
        assert_eq!(moved_tile(&before, &before), None);
    }
}

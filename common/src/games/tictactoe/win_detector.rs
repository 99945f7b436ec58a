use super::board::Board;
use super::types::Mark;

/// Rows, then columns, then diagonals. Scan order matters for the bot.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|(mark, _)| mark)
}

pub fn check_win_with_line(board: &Board) -> Option<(Mark, [usize; 3])> {
    let cells = board.cells();
    LINES.iter().find_map(|line| {
        let mark = cells[line[0]];
        if mark != Mark::Empty && line.iter().all(|&index| cells[index] == mark) {
            Some((mark, *line))
        } else {
            None
        }
    })
}

/// First line holding exactly two `mark` cells and one empty cell; returns the empty index.
pub fn find_two_in_a_row(board: &Board, mark: Mark) -> Option<usize> {
    let cells = board.cells();
    for line in LINES.iter() {
        let mut owned = 0;
        let mut empty = None;
        for &index in line {
            match cells[index] {
                Mark::Empty => empty = Some(index),
                cell if cell == mark => owned += 1,
                _ => {}
            }
        }
        if owned == 2 {
            if let Some(index) = empty {
                return Some(index);
            }
        }
    }
    None
}

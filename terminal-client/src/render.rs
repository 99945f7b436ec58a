use common::games::tictactoe::{Board, Mark, BOARD_SIDE, CELL_COUNT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Zero-based cell index.
    Place(usize),
    Restart,
    Quit,
}

/// Cells are typed 1-9, left to right, top to bottom.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let input = line.trim().to_ascii_lowercase();
    match input.as_str() {
        "q" | "quit" => return Ok(Command::Quit),
        "r" | "restart" => return Ok(Command::Restart),
        _ => {}
    }

    match input.parse::<usize>() {
        Ok(cell) if (1..=CELL_COUNT).contains(&cell) => Ok(Command::Place(cell - 1)),
        _ => Err(format!("Enter a cell number 1-{}, r to restart or q to quit", CELL_COUNT)),
    }
}

/// Empty cells show the number that selects them.
pub fn render_board(board: &Board) -> String {
    let rows: Vec<String> = board
        .cells()
        .chunks(BOARD_SIDE)
        .enumerate()
        .map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(|(col, mark)| match mark {
                    Mark::Empty => format!(" {} ", row * BOARD_SIDE + col + 1),
                    _ => format!(" {} ", mark),
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();
    rows.join("\n---+---+---\n")
}

pub fn render_winning_line(line: [usize; 3]) -> String {
    format!("Winning line: {}-{}-{}", line[0] + 1, line[1] + 1, line[2] + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cell_numbers() {
        assert_eq!(parse_command("1"), Ok(Command::Place(0)));
        assert_eq!(parse_command(" 9 \n"), Ok(Command::Place(8)));
        assert!(parse_command("0").is_err());
        assert!(parse_command("10").is_err());
        assert!(parse_command("x").is_err());
        assert!(parse_command("").is_err());
    }

    #[test]
    fn test_parse_restart_and_quit() {
        assert_eq!(parse_command("r"), Ok(Command::Restart));
        assert_eq!(parse_command("Restart"), Ok(Command::Restart));
        assert_eq!(parse_command("Q"), Ok(Command::Quit));
    }

    #[test]
    fn test_render_empty_board() {
        let expected = " 1 | 2 | 3 \n---+---+---\n 4 | 5 | 6 \n---+---+---\n 7 | 8 | 9 ";
        assert_eq!(render_board(&Board::new()), expected);
    }

    #[test]
    fn test_render_marks() {
        let board = Board::from_cells([
            Mark::X, Mark::Empty, Mark::Empty,
            Mark::Empty, Mark::O, Mark::Empty,
            Mark::Empty, Mark::Empty, Mark::X,
        ]);
        let rendered = render_board(&board);
        assert!(rendered.starts_with(" X | 2 | 3 "));
        assert!(rendered.contains(" 4 | O | 6 "));
        assert!(rendered.ends_with(" 7 | 8 | X "));
    }

    #[test]
    fn test_render_winning_line_is_one_based() {
        assert_eq!(render_winning_line([2, 4, 6]), "Winning line: 3-5-7");
    }
}

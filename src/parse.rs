use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::board::Board;
use crate::error::BoardError;

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let size = parse_number::<usize>(tokens.next().ok_or(BoardError::Empty)?)?;

        let tiles = tokens
            .map(parse_number::<u32>)
            .collect::<Result<Vec<_>, _>>()?;

        Board::from_tiles(size, tiles)
    }
}

fn parse_number<T: FromStr>(token: &str) -> Result<T, BoardError> {
    token
        .parse()
        .map_err(|_| BoardError::InvalidNumber(token.to_string()))
}

pub fn read_board(path: impl AsRef<Path>) -> Result<Board, BoardError> {
    fs::read_to_string(path)?.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_reference_puzzle() {
        let board: Board = "3\n 0  1  3\n 4  2  5\n 7  8  6\n".parse().unwrap();
        assert_eq!(board.dimension(), 3);
        assert_eq!(board.tiles(), &[0, 1, 3, 4, 2, 5, 7, 8, 6]);
        assert_eq!(board.blank(), 0);
    }

    #[test]
    fn display_output_parses_back() {
        let board = Board::goal(4).unwrap().twin();
        let reparsed: Board = board.to_string().parse().unwrap();
        assert_eq!(reparsed, board);
    }

    #[test]
    fn reports_bad_input() {
        assert!(matches!("".parse::<Board>(), Err(BoardError::Empty)));
        assert!(matches!(
            "2\n1 x\n3 0".parse::<Board>(),
            Err(BoardError::InvalidNumber(token)) if token == "x"
        ));
        assert!(matches!(
            "2\n1 2\n3".parse::<Board>(),
            Err(BoardError::WrongTileCount { expected: 4, found: 3 })
        ));
        assert!(matches!(
            "2\n1 2\n3 3".parse::<Board>(),
            Err(BoardError::DuplicateTile(3))
        ));
        assert!(matches!(
            "4294967296 1 2 3 0".parse::<Board>(),
            Err(BoardError::TooLarge(_))
        ));
        assert!(matches!(
            "70000 1 2 3 0".parse::<Board>(),
            Err(BoardError::TooLarge(70_000))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            read_board("/nonexistent/puzzle.txt"),
            Err(BoardError::Io(_))
        ));
    }
}

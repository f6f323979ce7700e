use rand::{seq::SliceRandom, Rng};
use std::cell::OnceCell;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::BoardError;

// Named for the direction the tile travels, not the blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Left,
    Down,
    Right,
}

impl Move {
    // Opposites sit two apart.
    pub const ALL: [Move; 4] = [Move::Up, Move::Left, Move::Down, Move::Right];

    /// (row, column) step of the blank.
    pub fn as_offset(self) -> (isize, isize) {
        let (row, col) = match self {
            Move::Up | Move::Down => (1, 0),
            Move::Left | Move::Right => (0, 1),
        };
        match self {
            Move::Up | Move::Left => (row, col),
            Move::Down | Move::Right => (-row, -col),
        }
    }

    pub fn opposite(self) -> Self {
        Move::ALL[(self as usize + 2) % Move::ALL.len()]
    }

    pub fn name(self) -> &'static str {
        match self {
            Move::Up => "Up",
            Move::Left => "Left",
            Move::Down => "Down",
            Move::Right => "Right",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone)]
pub struct Board {
    size: usize,
    tiles: Vec<u32>,
    blank: usize,
    hamming: OnceCell<u32>,
    manhattan: OnceCell<u32>,
}

impl Board {
    pub fn new(rows: &[Vec<u32>]) -> Result<Self, BoardError> {
        let size = rows.len();
        for (row, values) in rows.iter().enumerate() {
            if values.len() != size {
                return Err(BoardError::NotSquare {
                    row,
                    len: values.len(),
                    expected: size,
                });
            }
        }
        Self::from_tiles(size, rows.iter().flatten().copied().collect())
    }

    pub fn from_tiles(size: usize, tiles: Vec<u32>) -> Result<Self, BoardError> {
        let cells = cell_count(size)?;
        if tiles.len() != cells {
            return Err(BoardError::WrongTileCount {
                expected: cells,
                found: tiles.len(),
            });
        }

        let mut seen = vec![false; cells];
        let mut blank = 0;
        for (index, &tile) in tiles.iter().enumerate() {
            let slot = seen
                .get_mut(tile as usize)
                .ok_or(BoardError::TileOutOfRange { tile, cells })?;
            if *slot {
                return Err(BoardError::DuplicateTile(tile));
            }
            *slot = true;
            if tile == 0 {
                blank = index;
            }
        }

        Ok(Self::derived(size, tiles, blank))
    }

    pub fn goal(size: usize) -> Result<Self, BoardError> {
        let last = (cell_count(size)? - 1) as u32;
        let tiles = (1..=last).chain(std::iter::once(0)).collect();
        Self::from_tiles(size, tiles)
    }

    /// Uniform over solvable boards.
    pub fn random<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Self, BoardError> {
        let mut tiles = Self::goal(size)?.tiles;

        loop {
            tiles.shuffle(rng);
            let blank = tiles.iter().position(|&t| t == 0).unwrap_or_default();
            let board = Self::derived(size, tiles.clone(), blank);
            if board.is_solvable_by_parity() {
                return Ok(board);
            }
        }
    }

    // Callers guarantee the invariants; derived boards skip validation.
    fn derived(size: usize, tiles: Vec<u32>, blank: usize) -> Self {
        Self {
            size,
            tiles,
            blank,
            hamming: OnceCell::new(),
            manhattan: OnceCell::new(),
        }
    }

    pub fn dimension(&self) -> usize {
        self.size
    }

    pub fn tiles(&self) -> &[u32] {
        &self.tiles
    }

    /// Flat index of the blank.
    pub fn blank(&self) -> usize {
        self.blank
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.tiles.chunks(self.size)
    }

    pub fn hamming(&self) -> u32 {
        *self.hamming.get_or_init(|| {
            self.tiles
                .iter()
                .enumerate()
                .filter(|&(index, &tile)| tile != 0 && tile as usize != index + 1)
                .count() as u32
        })
    }

    /// Sum of the row and column distances of every tile from its goal cell.
    pub fn manhattan(&self) -> u32 {
        *self.manhattan.get_or_init(|| {
            let size = self.size;
            self.tiles
                .iter()
                .enumerate()
                .filter(|&(_, &tile)| tile != 0)
                .map(|(index, &tile)| {
                    let target = tile as usize - 1;
                    (index / size).abs_diff(target / size) + (index % size).abs_diff(target % size)
                })
                .sum::<usize>() as u32
        })
    }

    pub fn is_goal(&self) -> bool {
        let last = self.tiles.len() - 1;
        self.tiles[..last]
            .iter()
            .enumerate()
            .all(|(index, &tile)| tile as usize == index + 1)
    }

    /// Swaps the first two tiles of row 0, or of row 1 when the blank sits in
    /// row 0. Exactly one of a board and its twin is solvable.
    pub fn twin(&self) -> Self {
        let row = if self.blank / self.size == 0 { 1 } else { 0 };
        let mut tiles = self.tiles.clone();
        tiles.swap(row * self.size, row * self.size + 1);
        Self::derived(self.size, tiles, self.blank)
    }

    pub fn neighbors(&self) -> impl Iterator<Item = Board> + '_ {
        Move::ALL.into_iter().filter_map(move |movement| self.slide(movement))
    }

    pub fn slide(&self, movement: Move) -> Option<Self> {
        let target = self.blank_target(movement)?;
        let mut tiles = self.tiles.clone();
        tiles.swap(self.blank, target);
        Some(Self::derived(self.size, tiles, target))
    }

    fn blank_target(&self, movement: Move) -> Option<usize> {
        let size = self.size;
        let blank = self.blank;
        let same_row = |target: &usize| target / size == blank / size;

        match movement {
            Move::Up => Some(blank + size).filter(|&target| target < self.tiles.len()),
            Move::Down => blank.checked_sub(size),
            Move::Left => Some(blank + 1).filter(same_row),
            Move::Right => blank.checked_sub(1).filter(same_row),
        }
    }

    /// The move that turns `from` into `to`, if they are one slide apart.
    pub fn move_between(from: &Board, to: &Board) -> Option<Move> {
        if from.size != to.size {
            return None;
        }
        let size = from.size as isize;
        let (from_row, from_col) = (from.blank as isize / size, from.blank as isize % size);
        let (to_row, to_col) = (to.blank as isize / size, to.blank as isize % size);
        let offset = (to_row - from_row, to_col - from_col);

        Move::ALL
            .into_iter()
            .find(|movement| movement.as_offset() == offset)
            .filter(|&movement| from.slide(movement).as_ref() == Some(to))
    }

    pub fn is_solvable_by_parity(&self) -> bool {
        let odd_inversions = inversions(&self.tiles) % 2 == 1;
        // A vertical slide on an even-width board flips inversion parity and
        // moves the blank one row, so the two are tracked together.
        let odd_shift = self.size % 2 == 0 && (self.blank / self.size) % 2 == 0;
        odd_inversions == odd_shift
    }
}

// 0..size*size must fit in u32 tiles.
fn cell_count(size: usize) -> Result<usize, BoardError> {
    if size < 2 {
        return Err(BoardError::TooSmall(size));
    }
    size.checked_mul(size)
        .filter(|&cells| cells - 1 <= u32::MAX as usize)
        .ok_or(BoardError::TooLarge(size))
}

fn inversions(tiles: &[u32]) -> usize {
    let numbered: Vec<u32> = tiles.iter().copied().filter(|&tile| tile != 0).collect();
    let mut count = 0;
    for (pos, &tile) in numbered.iter().enumerate() {
        count += numbered[pos + 1..].iter().filter(|&&later| later < tile).count();
    }
    count
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.tiles == other.tiles
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.size.hash(state);
        self.tiles.hash(state);
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.size)?;
        for row in self.rows() {
            for &val in row {
                write!(f, "{:2} ", val)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

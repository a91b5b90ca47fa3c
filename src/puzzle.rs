//! Sliding-tile domain: the 4x4 board, the three move-set variants, and
//! their solvability predicate.

use crate::algorithms::inversion_count;
use crate::io::{self, LoadError};
use crate::space::{Estimate, Keyed, SearchSpace};
use itertools::Itertools;
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

/// Board side length.
pub const SIDE: usize = 4;
/// Number of cells on the board.
pub const CELLS: usize = SIDE * SIDE;

/// A tile permutation. Tiles are numbered 1..=15, the blank is 0; the
/// solved ordering is 1..=15 followed by the blank.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Board {
    tiles: [u8; CELLS],
}

impl Board {
    /// Creates a board, checking that the tiles are a permutation of
    /// 0..=15.
    pub fn new(tiles: [u8; CELLS]) -> Result<Self, LoadError> {
        let mut seen = [false; CELLS];

        for &tile in &tiles {
            if usize::from(tile) >= CELLS || seen[usize::from(tile)] {
                return Err(LoadError::Format(format!(
                    "tiles must be a permutation of 0..={max}, found {tile}",
                    max = CELLS - 1
                )));
            }

            seen[usize::from(tile)] = true;
        }

        Ok(Self { tiles })
    }

    /// Returns the solved board.
    pub fn solved() -> Self {
        let mut tiles = [0; CELLS];

        for (i, tile) in tiles.iter_mut().enumerate().take(CELLS - 1) {
            *tile = i as u8 + 1;
        }

        Self { tiles }
    }

    /// Returns whether the board is in the solved ordering.
    pub fn is_solved(&self) -> bool {
        *self == Self::solved()
    }

    /// Returns the tiles in row-major order.
    pub fn tiles(&self) -> &[u8; CELLS] {
        &self.tiles
    }

    /// Returns the cell index of the blank.
    pub fn blank(&self) -> usize {
        self.tiles.iter().position(|&tile| tile == 0).unwrap()
    }

    fn swapped(&self, a: usize, b: usize) -> Self {
        let mut tiles = self.tiles;
        tiles.swap(a, b);

        Self { tiles }
    }
}

impl FromStr for Board {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tiles = io::parse_tokens::<u8>(s, CELLS)?;
        let mut array = [0; CELLS];
        array.copy_from_slice(&tiles);

        Self::new(array)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self
            .tiles
            .chunks(SIDE)
            .map(|row| row.iter().map(|tile| format!("{tile:>3}")).join(" "))
            .join("\n");

        write!(f, "{rows}")
    }
}

/// The move-set variant, chosen once at startup.
///
/// A move swaps the blank with one tile; the label names the direction
/// the tile travels. `Original` is the classic 4-neighbor set, `Circular`
/// adds wrap-around slides from the board edges, and `Luddy` replaces the
/// slides with the eight knight jumps.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MoveSet {
    Original,
    Circular,
    Luddy,
}

impl FromStr for MoveSet {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "original" => Ok(Self::Original),
            "circular" => Ok(Self::Circular),
            "luddy" => Ok(Self::Luddy),
            _ => Err(LoadError::Format(format!(
                "unsupported variant {s:?} (expected original, circular, or luddy)"
            ))),
        }
    }
}

impl MoveSet {
    /// The `(row offset, column offset, label)` jumps the blank may make.
    /// The offsets locate the tile that moves into the blank.
    fn jumps(self) -> &'static [(i32, i32, char)] {
        match self {
            Self::Original => &[(0, -1, 'R'), (0, 1, 'L'), (-1, 0, 'D'), (1, 0, 'U')],
            Self::Circular => &[
                (0, -1, 'R'),
                (0, -3, 'R'),
                (0, 1, 'L'),
                (0, 3, 'L'),
                (-1, 0, 'D'),
                (-3, 0, 'D'),
                (1, 0, 'U'),
                (3, 0, 'U'),
            ],
            Self::Luddy => &[
                (2, 1, 'A'),
                (2, -1, 'B'),
                (-2, 1, 'C'),
                (-2, -1, 'D'),
                (1, 2, 'E'),
                (1, -2, 'F'),
                (-1, 2, 'G'),
                (-1, -2, 'H'),
            ],
        }
    }

    /// A lower bound on the moves needed to bring one tile from `from` to
    /// `to`, under this move set.
    fn tile_distance(self, from: usize, to: usize) -> u32 {
        let dr = (from / SIDE).abs_diff(to / SIDE) as u32;
        let dc = (from % SIDE).abs_diff(to % SIDE) as u32;

        match self {
            Self::Original => dr + dc,
            Self::Circular => {
                dr.min(SIDE as u32 - dr) + dc.min(SIDE as u32 - dc)
            }
            // A knight jump relocates a tile by at most 3 Manhattan steps.
            Self::Luddy => (dr + dc).div_ceil(3),
        }
    }

    /// Decides in O(n²) whether the solved ordering is reachable from
    /// `board` under this move set, before any search is attempted.
    ///
    /// Every move in all three sets is a transposition whose shift of the
    /// blank keeps the inversions-plus-blank-row sum even, so they share
    /// one reachability class; the predicate is dispatched per move set so
    /// that a variant with a different class can supply its own test.
    pub fn is_solvable(self, board: &Board) -> bool {
        match self {
            Self::Original | Self::Circular | Self::Luddy => {
                (inversion_count(&board.tiles) + board.blank() / SIDE + 1) % 2 == 0
            }
        }
    }
}

/// A sliding-tile instance: a start board and a move set.
pub struct TilePuzzle {
    start: Board,
    move_set: MoveSet,
}

impl TilePuzzle {
    pub fn new(start: Board, move_set: MoveSet) -> Self {
        Self { start, move_set }
    }
}

impl SearchSpace for TilePuzzle {
    type State = Board;
    type Cost = u32;
    type Label = char;

    fn initial_state(&self) -> Self::State {
        self.start
    }

    fn successors(
        &self,
        state: &Self::State,
    ) -> impl IntoIterator<Item = (Self::Cost, Self::State, Self::Label)> {
        let blank = state.blank();
        let row = (blank / SIDE) as i32;
        let col = (blank % SIDE) as i32;

        self.move_set
            .jumps()
            .iter()
            .filter_map(|&(dr, dc, label)| {
                let tile_row = row + dr;
                let tile_col = col + dc;

                if (0..SIDE as i32).contains(&tile_row) && (0..SIDE as i32).contains(&tile_col) {
                    let tile = (tile_row as usize) * SIDE + tile_col as usize;

                    Some((1, state.swapped(blank, tile), label))
                } else {
                    None
                }
            })
            .collect::<SmallVec<[_; 8]>>()
    }

    fn is_goal(&self, state: &Self::State) -> bool {
        state.is_solved()
    }
}

impl Estimate for TilePuzzle {
    /// Sum over all tiles of the per-move-set tile distance to the tile's
    /// solved cell. Each move relocates exactly one tile and shrinks its
    /// term by at most 1, so the sum never overestimates.
    fn estimate(&self, state: &Self::State) -> Self::Cost {
        state
            .tiles
            .iter()
            .enumerate()
            .filter(|&(_, &tile)| tile != 0)
            .map(|(cell, &tile)| {
                self.move_set
                    .tile_distance(cell, usize::from(tile) - 1)
            })
            .sum()
    }
}

impl Keyed for TilePuzzle {
    type State = Board;
    type Key = Board;

    fn key(&self, state: &Self::State) -> Self::Key {
        *state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::limits::SearchLimits;
    use crate::solvers::{self, Termination};

    fn apply(board: Board, move_set: MoveSet, label: char) -> Board {
        let puzzle = TilePuzzle::new(board, move_set);

        let result = puzzle
            .successors(&board)
            .into_iter()
            .find(|&(_, _, l)| l == label)
            .map(|(_, next, _)| next)
            .unwrap();
        result
    }

    #[test]
    fn test_board_parse_and_display() {
        let board: Board = "1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 0"
            .parse()
            .unwrap();

        assert!(board.is_solved());
        assert_eq!(board.blank(), 15);

        let printed = board.to_string();
        let first_line = printed.lines().next().unwrap();
        assert_eq!(first_line, "  1   2   3   4");
        assert_eq!(printed.lines().count(), SIDE);
    }

    #[test]
    fn test_board_rejects_wrong_count() {
        let result = "1 2 3".parse::<Board>();
        assert!(result.is_err());
    }

    #[test]
    fn test_board_rejects_duplicates() {
        let result = "1 1 3 4 5 6 7 8 9 10 11 12 13 14 15 0".parse::<Board>();
        assert!(result.is_err());
    }

    #[test]
    fn test_board_rejects_out_of_range_tile() {
        let result = "1 2 3 4 5 6 7 8 9 10 11 12 13 14 16 0".parse::<Board>();
        assert!(result.is_err());
    }

    #[test]
    fn test_move_set_parse() {
        assert_eq!("original".parse::<MoveSet>().unwrap(), MoveSet::Original);
        assert_eq!("circular".parse::<MoveSet>().unwrap(), MoveSet::Circular);
        assert_eq!("luddy".parse::<MoveSet>().unwrap(), MoveSet::Luddy);
        assert!("Luddy".parse::<MoveSet>().is_err());
    }

    #[test]
    fn test_original_successors_in_corner() {
        let puzzle = TilePuzzle::new(Board::solved(), MoveSet::Original);
        let successors: Vec<_> = puzzle.successors(&Board::solved()).into_iter().collect();

        let labels: Vec<_> = successors.iter().map(|&(_, _, l)| l).collect();
        assert_eq!(labels, vec!['R', 'D']);
        assert!(successors.iter().all(|&(cost, _, _)| cost == 1));
    }

    #[test]
    fn test_circular_successors_wrap_from_edges() {
        let puzzle = TilePuzzle::new(Board::solved(), MoveSet::Circular);
        let successors: Vec<_> = puzzle.successors(&Board::solved()).into_iter().collect();

        // Corner blank: one slide and one wrap per axis.
        assert_eq!(successors.len(), 4);
    }

    #[test]
    fn test_luddy_successors_in_corner() {
        let puzzle = TilePuzzle::new(Board::solved(), MoveSet::Luddy);
        let successors: Vec<_> = puzzle.successors(&Board::solved()).into_iter().collect();

        let labels: Vec<_> = successors.iter().map(|&(_, _, l)| l).collect();
        assert_eq!(labels, vec!['D', 'H']);
    }

    #[test]
    fn test_solved_board_is_solvable() {
        let board = Board::solved();

        assert!(MoveSet::Original.is_solvable(&board));
        assert!(MoveSet::Circular.is_solvable(&board));
        assert!(MoveSet::Luddy.is_solvable(&board));
    }

    #[test]
    fn test_adjacent_swap_is_unsolvable() {
        let board = Board::solved().swapped(13, 14);

        assert!(!MoveSet::Original.is_solvable(&board));
    }

    #[test]
    fn test_moves_preserve_solvability() {
        for move_set in [MoveSet::Original, MoveSet::Circular, MoveSet::Luddy] {
            let puzzle = TilePuzzle::new(Board::solved(), move_set);
            let mut boards = vec![Board::solved()];

            for _ in 0..3 {
                boards = boards
                    .iter()
                    .flat_map(|board| {
                        puzzle
                            .successors(board)
                            .into_iter()
                            .map(|(_, next, _)| next)
                    })
                    .collect();

                assert!(boards.iter().all(|board| move_set.is_solvable(board)));
            }
        }
    }

    #[test]
    fn test_estimate_zero_at_goal() {
        for move_set in [MoveSet::Original, MoveSet::Circular, MoveSet::Luddy] {
            let puzzle = TilePuzzle::new(Board::solved(), move_set);
            assert_eq!(puzzle.estimate(&Board::solved()), 0);
        }
    }

    #[test]
    fn test_estimate_counts_displaced_tiles() {
        // Tile 15 one slide away from home.
        let board = Board::solved().swapped(14, 15);
        let puzzle = TilePuzzle::new(board, MoveSet::Original);

        assert_eq!(puzzle.estimate(&board), 1);
    }

    #[test]
    fn test_circular_estimate_uses_wraparound_distance() {
        // Tile 13 wrapped from column 0 to column 3 of the bottom row.
        let board = Board::solved().swapped(12, 15);
        let original = TilePuzzle::new(board, MoveSet::Original);
        let circular = TilePuzzle::new(board, MoveSet::Circular);

        assert_eq!(original.estimate(&board), 3);
        assert_eq!(circular.estimate(&board), 1);
    }

    #[test]
    fn test_search_solves_three_move_scramble() {
        let mut board = Board::solved();
        for label in ['R', 'D', 'R'] {
            // Walking the solved board backwards guarantees a solution in
            // at most three moves; the estimate proves it takes exactly
            // three.
            board = apply(board, MoveSet::Original, label);
        }
        let puzzle = TilePuzzle::new(board, MoveSet::Original);

        let report = solvers::search(&puzzle, SearchLimits::default());

        assert_eq!(report.termination, Termination::Goal);
        assert_eq!(report.cost, Some(3));
        assert_eq!(report.path.len(), 3);

        let mut replay = board;
        for label in &report.path {
            replay = apply(replay, MoveSet::Original, *label);
        }
        assert!(replay.is_solved());
    }

    #[test]
    fn test_search_solves_one_wrap_scramble() {
        // Tile 13 wrapped out of the bottom-left corner; only the wrap
        // move brings it back in one step.
        let board = Board::solved().swapped(12, 15);
        let puzzle = TilePuzzle::new(board, MoveSet::Circular);

        let report = solvers::search(&puzzle, SearchLimits::default());

        assert_eq!(report.cost, Some(1));
    }

    #[test]
    fn test_search_solves_luddy_scramble() {
        let mut board = Board::solved();
        for label in ['D', 'H'] {
            board = apply(board, MoveSet::Luddy, label);
        }
        let puzzle = TilePuzzle::new(board, MoveSet::Luddy);

        let report = solvers::search(&puzzle, SearchLimits::default());

        assert_eq!(report.termination, Termination::Goal);
        assert!(report.cost.unwrap() <= 2);

        let mut replay = board;
        for label in &report.path {
            replay = apply(replay, MoveSet::Luddy, *label);
        }
        assert!(replay.is_solved());
    }
}

//! Board topology: the static 37-cell hex grid.
//!
//! The board is built once at game start, either from the wire records sent
//! by the referee or from the canonical layout, and only read afterwards.
//! It carries geometry and richness; nothing that changes between turns.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use super::cell::{CellId, Direction, BOARD_SIZE};

/// Outer-ring corner cells of the standard layout.
///
/// Harvesting on these is ranked last: corners sit in the fewest shadow
/// lines, so the trees there keep producing the longest.
pub const EDGE_CELLS: [CellId; 6] = [
    CellId(19),
    CellId(22),
    CellId(25),
    CellId(28),
    CellId(31),
    CellId(34),
];

/// Highest legal richness value.
pub const MAX_RICHNESS: u8 = 3;

/// Errors raised while building a board from wire records.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("expected {expected} cells, got {got}")]
    CellCount { expected: usize, got: usize },

    #[error("cell record {position} carries index {index}")]
    IndexMismatch { position: usize, index: i64 },

    #[error("cell {cell} has richness {richness} (expected 0..=3)")]
    Richness { cell: CellId, richness: i64 },

    #[error("cell {cell} direction {direction} points at {neighbor}, which is off the board")]
    NeighborOutOfRange {
        cell: CellId,
        direction: usize,
        neighbor: i64,
    },
}

/// One cell description as received on the wire.
///
/// Neighbor slots use `-1` for "no neighbor".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellRecord {
    pub index: i64,
    pub richness: i64,
    pub neighbors: [i64; 6],
}

/// Static geometry of a single cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub id: CellId,

    /// Soil quality, 0 (unusable) to 3.
    pub richness: u8,

    /// Neighbor in each wire direction, `None` past the board edge.
    pub neighbors: [Option<CellId>; 6],
}

impl Cell {
    /// Neighbor in the given direction.
    #[must_use]
    pub fn neighbor(&self, direction: Direction) -> Option<CellId> {
        self.neighbors[direction.index()]
    }

    /// Iterate over existing neighbors.
    pub fn adjacent(&self) -> impl Iterator<Item = CellId> + '_ {
        self.neighbors.iter().flatten().copied()
    }

    /// Whether this cell is one of the outer-ring corners.
    #[must_use]
    pub fn is_edge(&self) -> bool {
        EDGE_CELLS.contains(&self.id)
    }
}

/// The full board: one `Cell` per `CellId`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: Vec<Cell>,
}

impl Board {
    /// Build a board from the referee's cell records.
    ///
    /// Records must be complete and listed in index order.
    pub fn from_records(records: &[CellRecord]) -> Result<Self, BoardError> {
        if records.len() != BOARD_SIZE {
            return Err(BoardError::CellCount {
                expected: BOARD_SIZE,
                got: records.len(),
            });
        }

        let mut cells = Vec::with_capacity(BOARD_SIZE);
        for (position, record) in records.iter().enumerate() {
            let id = match CellId::from_wire(record.index) {
                Some(id) if id.index() == position => id,
                _ => {
                    return Err(BoardError::IndexMismatch {
                        position,
                        index: record.index,
                    })
                }
            };

            if !(0..=i64::from(MAX_RICHNESS)).contains(&record.richness) {
                return Err(BoardError::Richness {
                    cell: id,
                    richness: record.richness,
                });
            }

            let mut neighbors = [None; 6];
            for (direction, &raw) in record.neighbors.iter().enumerate() {
                if raw == -1 {
                    continue;
                }
                neighbors[direction] = Some(CellId::from_wire(raw).ok_or(
                    BoardError::NeighborOutOfRange {
                        cell: id,
                        direction,
                        neighbor: raw,
                    },
                )?);
            }

            cells.push(Cell {
                id,
                richness: record.richness as u8,
                neighbors,
            });
        }

        Ok(Self { cells })
    }

    /// The canonical layout with no unusable cells.
    ///
    /// Cell 0 is the center. Each ring starts in direction 0 from the center
    /// and winds counter-clockwise. Richness is 3 for the center and first
    /// ring, 2 for the second ring and 1 for the outer ring.
    #[must_use]
    pub fn standard() -> Self {
        const CUBE_DIRECTIONS: [(i32, i32, i32); 6] = [
            (1, -1, 0),
            (1, 0, -1),
            (0, 1, -1),
            (-1, 1, 0),
            (-1, 0, 1),
            (0, -1, 1),
        ];
        const RING_RICHNESS: [u8; 4] = [3, 3, 2, 1];

        let step = |(x, y, z): (i32, i32, i32), d: usize| {
            let (dx, dy, dz) = CUBE_DIRECTIONS[d];
            (x + dx, y + dy, z + dz)
        };

        let mut coords = vec![((0, 0, 0), RING_RICHNESS[0])];
        let mut coord = step((0, 0, 0), 0);
        for distance in 1..=3 {
            for orientation in 0..6 {
                for _ in 0..distance {
                    coords.push((coord, RING_RICHNESS[distance]));
                    coord = step(coord, (orientation + 2) % 6);
                }
            }
            coord = step(coord, 0);
        }

        let lookup: FxHashMap<(i32, i32, i32), CellId> = coords
            .iter()
            .enumerate()
            .map(|(i, &(c, _))| (c, CellId(i as u8)))
            .collect();

        let cells = coords
            .iter()
            .enumerate()
            .map(|(i, &(c, richness))| {
                let mut neighbors = [None; 6];
                for (d, slot) in neighbors.iter_mut().enumerate() {
                    *slot = lookup.get(&step(c, d)).copied();
                }
                Cell {
                    id: CellId(i as u8),
                    richness,
                    neighbors,
                }
            })
            .collect();

        Self { cells }
    }

    /// Get a cell.
    #[must_use]
    pub fn cell(&self, id: CellId) -> &Cell {
        &self.cells[id.index()]
    }

    /// Richness of a cell.
    #[must_use]
    pub fn richness(&self, id: CellId) -> u8 {
        self.cell(id).richness
    }

    /// Neighbor of `id` in `direction`.
    #[must_use]
    pub fn neighbor(&self, id: CellId, direction: Direction) -> Option<CellId> {
        self.cell(id).neighbor(direction)
    }

    /// Cells visited walking up to `steps` cells from `from` in `direction`.
    ///
    /// The starting cell is excluded. The walk stops at the board edge.
    #[must_use]
    pub fn ray(&self, from: CellId, direction: Direction, steps: usize) -> SmallVec<[CellId; 3]> {
        let mut visited = SmallVec::new();
        let mut current = from;
        for _ in 0..steps {
            match self.neighbor(current, direction) {
                Some(next) => {
                    visited.push(next);
                    current = next;
                }
                None => break,
            }
        }
        visited
    }

    /// Iterate over all cells in index order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Records equivalent to this board, as the referee would send them.
    #[must_use]
    pub fn to_records(&self) -> Vec<CellRecord> {
        self.cells
            .iter()
            .map(|cell| CellRecord {
                index: cell.id.index() as i64,
                richness: i64::from(cell.richness),
                neighbors: cell
                    .neighbors
                    .map(|n| n.map_or(-1, |id| id.index() as i64)),
            })
            .collect()
    }
}

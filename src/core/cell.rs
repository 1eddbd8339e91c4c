//! Cell identification, directions and per-cell data storage.
//!
//! ## CellId
//!
//! Type-safe index into the 37-cell board. Cell 0 is the center; the
//! remaining cells spiral outward ring by ring.
//!
//! ## Direction
//!
//! One of the six hex directions. The wire layout is:
//!
//! ```text
//!  2 1
//! 3   0
//!  4 5
//! ```
//!
//! ## CellMap
//!
//! Per-cell data storage backed by `Vec` for O(1) access.
//! Every turn-derived quantity (shadow flags, sightline counts, scores)
//! lives in a fresh `CellMap` rather than on the board itself.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Number of cells on the board.
pub const BOARD_SIZE: usize = 37;

/// Cell identifier, `0..BOARD_SIZE`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CellId(pub u8);

impl CellId {
    /// Create a new cell ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw cell index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Convert a wire index into a cell ID, rejecting anything off the board.
    ///
    /// ```
    /// use photosynth_bot::core::CellId;
    ///
    /// assert_eq!(CellId::from_wire(5), Some(CellId::new(5)));
    /// assert_eq!(CellId::from_wire(-1), None);
    /// assert_eq!(CellId::from_wire(37), None);
    /// ```
    #[must_use]
    pub fn from_wire(raw: i64) -> Option<Self> {
        if (0..BOARD_SIZE as i64).contains(&raw) {
            Some(Self(raw as u8))
        } else {
            None
        }
    }

    /// Iterate over every cell on the board.
    pub fn all() -> impl Iterator<Item = CellId> {
        (0..BOARD_SIZE as u8).map(CellId)
    }
}

impl std::fmt::Display for CellId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One of the six hex directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Direction(u8);

impl Direction {
    /// All six directions in wire order.
    pub const ALL: [Direction; 6] = [
        Direction(0),
        Direction(1),
        Direction(2),
        Direction(3),
        Direction(4),
        Direction(5),
    ];

    /// Create a direction, wrapping values of 6 and above.
    #[must_use]
    pub const fn new(raw: u8) -> Self {
        Self(raw % 6)
    }

    /// Direction the sun shines from on `day`.
    #[must_use]
    pub const fn for_day(day: u32) -> Self {
        Self((day % 6) as u8)
    }

    /// The next direction clockwise in wire order.
    #[must_use]
    pub const fn next(self) -> Self {
        Self((self.0 + 1) % 6)
    }

    /// Index into a neighbor array.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Dir({})", self.0)
    }
}

/// Per-cell data storage with O(1) access.
///
/// Always holds exactly `BOARD_SIZE` entries.
///
/// ## Example
///
/// ```
/// use photosynth_bot::core::{CellId, CellMap};
///
/// let mut counts: CellMap<u32> = CellMap::with_default();
/// counts[CellId::new(4)] += 2;
/// assert_eq!(counts[CellId::new(4)], 2);
/// assert_eq!(counts[CellId::new(0)], 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellMap<T> {
    data: Vec<T>,
}

impl<T> CellMap<T> {
    /// Create a new CellMap with values from a factory function.
    pub fn new(factory: impl Fn(CellId) -> T) -> Self {
        Self {
            data: CellId::all().map(factory).collect(),
        }
    }

    /// Create a new CellMap with all entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a new CellMap with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a cell's data.
    #[must_use]
    pub fn get(&self, cell: CellId) -> &T {
        &self.data[cell.index()]
    }

    /// Get a mutable reference to a cell's data.
    pub fn get_mut(&mut self, cell: CellId) -> &mut T {
        &mut self.data[cell.index()]
    }

    /// Reset every entry to its default value.
    pub fn reset(&mut self)
    where
        T: Default,
    {
        self.data.iter_mut().for_each(|v| *v = T::default());
    }

    /// Iterate over (CellId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (CellId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (CellId(i as u8), v))
    }
}

impl<T> Index<CellId> for CellMap<T> {
    type Output = T;

    fn index(&self, cell: CellId) -> &Self::Output {
        self.get(cell)
    }
}

impl<T> IndexMut<CellId> for CellMap<T> {
    fn index_mut(&mut self, cell: CellId) -> &mut Self::Output {
        self.get_mut(cell)
    }
}

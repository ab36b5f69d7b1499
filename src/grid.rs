//! Grid geometry: coordinates named by column letter and 1-based row.

use core::fmt;
use core::str::FromStr;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Column alphabet. Its length bounds the widest supported grid.
pub const COLUMNS: [char; 20] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T',
];

/// Largest grid dimension, bounded by the column alphabet.
pub const MAX_DIM: usize = COLUMNS.len();

/// Errors from coordinate parsing and dimension validation. Parsing never
/// mutates anything, so every variant is recoverable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("empty coordinate")]
    EmptyCoordinate,
    #[error("column '{0}' is not a letter A-T")]
    BadColumn(char),
    #[error("row '{0}' is not a positive number")]
    BadRow(String),
    #[error("grid dimensions {0}x{1} are outside 1-20")]
    BadDimensions(usize, usize),
}

/// Zero-based cell position. Displays and serializes as the coordinate
/// string the data files use, e.g. column 2 / row 6 is `"C7"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub col: usize,
    pub row: usize,
}

impl Coord {
    pub fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match COLUMNS.get(self.col) {
            Some(letter) => write!(f, "{}{}", letter, self.row + 1),
            None => write!(f, "?{}", self.row + 1),
        }
    }
}

impl FromStr for Coord {
    type Err = GridError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut chars = input.chars();
        let col_ch = chars.next().ok_or(GridError::EmptyCoordinate)?;
        let upper = col_ch.to_ascii_uppercase();
        let col = COLUMNS
            .iter()
            .position(|&c| c == upper)
            .ok_or(GridError::BadColumn(col_ch))?;
        let row_str: String = chars.collect();
        let row: usize = row_str
            .parse()
            .map_err(|_| GridError::BadRow(row_str.clone()))?;
        if row == 0 {
            return Err(GridError::BadRow(row_str));
        }
        Ok(Coord { col, row: row - 1 })
    }
}

impl Serialize for Coord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Coord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Validated rectangular grid extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDims {
    width: usize,
    height: usize,
}

impl GridDims {
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if !(1..=MAX_DIM).contains(&width) || !(1..=MAX_DIM).contains(&height) {
            return Err(GridError::BadDimensions(width, height));
        }
        Ok(Self { width, height })
    }

    pub fn width(self) -> usize {
        self.width
    }

    pub fn height(self) -> usize {
        self.height
    }

    pub fn cell_count(self) -> usize {
        self.width * self.height
    }

    pub fn contains(self, coord: Coord) -> bool {
        coord.col < self.width && coord.row < self.height
    }

    /// All cells in row-major order.
    pub fn coords(self) -> impl Iterator<Item = Coord> {
        let width = self.width;
        (0..self.height).flat_map(move |row| (0..width).map(move |col| Coord::new(col, row)))
    }

    /// In-bounds cells adjacent to `coord`, diagonals included.
    pub fn neighbors(self, coord: Coord) -> impl Iterator<Item = Coord> {
        (-1isize..=1)
            .flat_map(move |dc| (-1isize..=1).map(move |dr| (dc, dr)))
            .filter(|&(dc, dr)| (dc, dr) != (0, 0))
            .filter_map(move |(dc, dr)| {
                let col = coord.col.checked_add_signed(dc)?;
                let row = coord.row.checked_add_signed(dr)?;
                let candidate = Coord::new(col, row);
                self.contains(candidate).then_some(candidate)
            })
    }
}

impl Default for GridDims {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
        }
    }
}

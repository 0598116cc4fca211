use thiserror::Error;

use super::Vector2;

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum ShapeError {
    #[error("shape table is empty")]
    EmptyTable,
    #[error("shape {index} has no columns")]
    NoColumns { index: usize },
    #[error("shape {index}: column {column} has {found} cells, expected {expected}")]
    Ragged {
        index: usize,
        column: usize,
        expected: usize,
        found: usize,
    },
    #[error("shape {index} has no filled cells")]
    NoFilledCells { index: usize },
}

const X: bool = true;
const O: bool = false;

// Column-major: each inner slice is one column, top to bottom.
const CANONICAL: &[&[&[bool]]] = &[
    // I
    &[&[X], &[X], &[X], &[X]],
    // O
    &[&[X, X], &[X, X]],
    // L, five cells, foot at the end of the bar
    &[&[X, O], &[X, O], &[X, O], &[X, X]],
    // L, foot at the start of the bar
    &[&[X, X], &[X, O], &[X, O], &[X, O]],
    // S
    &[&[X, O], &[X, X], &[O, X]],
    // T
    &[&[O, X], &[X, X], &[O, X]],
];

/// Rectangular occupancy grid stored as columns of cells.
///
/// Always non-empty, rectangular and with at least one filled cell once
/// built through [`Shape::from_columns`]. Rotation yields a new grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shape {
    columns: Vec<Vec<bool>>,
}

impl Shape {
    pub fn from_columns(columns: Vec<Vec<bool>>) -> Result<Self, ShapeError> {
        Self::validate(0, &columns)?;
        Ok(Self { columns })
    }

    fn validate(index: usize, columns: &[Vec<bool>]) -> Result<(), ShapeError> {
        let expected = match columns.first() {
            Some(first) if !first.is_empty() => first.len(),
            _ => return Err(ShapeError::NoColumns { index }),
        };
        for (column, cells) in columns.iter().enumerate() {
            if cells.len() != expected {
                return Err(ShapeError::Ragged {
                    index,
                    column,
                    expected,
                    found: cells.len(),
                });
            }
        }
        if !columns.iter().flatten().any(|&filled| filled) {
            return Err(ShapeError::NoFilledCells { index });
        }
        Ok(())
    }

    /// Builds and validates every shape in `table`.
    pub fn table(table: &[&[&[bool]]]) -> Result<Vec<Shape>, ShapeError> {
        if table.is_empty() {
            return Err(ShapeError::EmptyTable);
        }
        table
            .iter()
            .enumerate()
            .map(|(index, cols)| {
                let columns: Vec<Vec<bool>> = cols.iter().map(|c| c.to_vec()).collect();
                Self::validate(index, &columns)?;
                Ok(Self { columns })
            })
            .collect()
    }

    pub fn canonical() -> Result<Vec<Shape>, ShapeError> {
        Self::table(CANONICAL)
    }

    /// (columns, rows) of the bounding box.
    pub fn size(&self) -> Vector2<i32> {
        Vector2::new(self.columns.len() as i32, self.columns[0].len() as i32)
    }

    /// Cell at local `(x, y)`; anything outside the box reads as empty.
    pub fn filled(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        self.columns
            .get(x as usize)
            .and_then(|col| col.get(y as usize))
            .copied()
            .unwrap_or(false)
    }

    /// Local coordinates of every filled cell, column by column.
    pub fn cells(&self) -> impl Iterator<Item = Vector2<i32>> + '_ {
        self.columns.iter().enumerate().flat_map(|(x, col)| {
            col.iter()
                .enumerate()
                .filter(|(_, filled)| **filled)
                .map(move |(y, _)| Vector2::new(x as i32, y as i32))
        })
    }

    pub fn filled_count(&self) -> usize {
        self.columns.iter().flatten().filter(|&&filled| filled).count()
    }

    /// Applies `quarters % 4` quarter-turns. Each turn transposes the columns
    /// into rows and reverses every row, so cell `(x, y)` of a `w`-column
    /// grid lands on `(y, w - 1 - x)`.
    pub fn rotated(&self, quarters: u32) -> Shape {
        let mut columns = self.columns.clone();
        for _ in 0..quarters % 4 {
            columns = quarter_turn(&columns);
        }
        Shape { columns }
    }
}

fn quarter_turn(columns: &[Vec<bool>]) -> Vec<Vec<bool>> {
    let rows = columns[0].len();
    (0..rows)
        .map(|y| columns.iter().rev().map(|col| col[y]).collect())
        .collect()
}

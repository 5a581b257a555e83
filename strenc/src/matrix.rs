//! A minimal dense matrix, just enough to hold encoder output.
use crate::error::{
    ColumnOutOfBoundsSnafu, InvalidShapeSnafu, RaggedMatrixSnafu, RowOutOfBoundsSnafu,
};
use crate::{Result, StrencError};
use serde::{Deserialize, Serialize};
use snafu::ensure;

/// Dense, row-major table of `f64` values.
///
/// All of the checked accessors report an out-of-range address as an error rather than
/// panicking.  The `Index` impl panics like slice indexing does.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MatrixData")]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// A `rows` by `cols` matrix filled with zeros
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Build a matrix from a list of rows, all of which must be the same length.
    pub fn from_rows<R>(rows: impl IntoIterator<Item = R>) -> Result<Self>
    where
        R: AsRef<[f64]>,
    {
        let mut data = Vec::new();
        let mut cols = None;
        let mut n_rows = 0;

        for (index, row) in rows.into_iter().enumerate() {
            let row = row.as_ref();
            let expected = *cols.get_or_insert(row.len());
            ensure!(
                row.len() == expected,
                RaggedMatrixSnafu {
                    row: index,
                    expected,
                    actual: row.len(),
                }
            );

            data.extend_from_slice(row);
            n_rows += 1;
        }

        Ok(Self {
            rows: n_rows,
            cols: cols.unwrap_or(0),
            data,
        })
    }

    pub fn n_rows(&self) -> usize {
        self.rows
    }

    pub fn n_cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        let index = self.index_of(row, col)?;
        Ok(self.data[index])
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        let index = self.index_of(row, col)?;
        self.data[index] = value;
        Ok(())
    }

    /// Add `delta` to the value at `(row, col)`
    pub fn add(&mut self, row: usize, col: usize, delta: f64) -> Result<()> {
        let index = self.index_of(row, col)?;
        self.data[index] += delta;
        Ok(())
    }

    pub fn row(&self, row: usize) -> Result<&[f64]> {
        ensure!(
            row < self.rows,
            RowOutOfBoundsSnafu {
                row,
                rows: self.rows
            }
        );

        Ok(&self.data[row * self.cols..(row + 1) * self.cols])
    }

    /// Row-major view of all the values
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        if self.cols == 0 {
            return vec![Vec::new(); self.rows];
        }

        self.data.chunks(self.cols).map(<[f64]>::to_vec).collect()
    }

    /// Build a matrix from row-major `data` that is already known to be `rows * cols` long
    pub(crate) fn from_row_major(rows: usize, cols: usize, data: Vec<f64>) -> Self {
        debug_assert_eq!(rows * cols, data.len());
        Self { rows, cols, data }
    }

    fn index_of(&self, row: usize, col: usize) -> Result<usize> {
        ensure!(
            row < self.rows,
            RowOutOfBoundsSnafu {
                row,
                rows: self.rows
            }
        );
        ensure!(
            col < self.cols,
            ColumnOutOfBoundsSnafu {
                row,
                col,
                cols: self.cols
            }
        );

        Ok(row * self.cols + col)
    }
}

/// Unvalidated form of a [`Matrix`] as read by serde
#[derive(Deserialize)]
struct MatrixData {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl TryFrom<MatrixData> for Matrix {
    type Error = StrencError;

    fn try_from(MatrixData { rows, cols, data }: MatrixData) -> Result<Self> {
        ensure!(
            rows.checked_mul(cols) == Some(data.len()),
            InvalidShapeSnafu {
                rows,
                cols,
                len: data.len()
            }
        );

        Ok(Self { rows, cols, data })
    }
}

impl std::ops::Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.data[self.unchecked_index(row, col)]
    }
}

impl std::ops::IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        let index = self.unchecked_index(row, col);
        &mut self.data[index]
    }
}

impl Matrix {
    fn unchecked_index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        row * self.cols + col
    }
}

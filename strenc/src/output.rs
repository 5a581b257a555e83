//! Containers that encoders write their results into.
//!
//! There are two shapes of output: a dense [`Matrix`] where every row has the same width and
//! unused cells stay zero, and [`RaggedRows`] where every row is its own `Vec`.  Which one a
//! caller picks, together with the encoding policy, decides whether output is padded.  See
//! [`crate::StringEncoder::encode`].
use crate::error::{ColumnOutOfBoundsSnafu, OutputMismatchSnafu, RowOutOfBoundsSnafu};
use crate::{Matrix, Result};
use snafu::OptionExt;

/// One sequence of encoded values per input
pub type RaggedRows = Vec<Vec<usize>>;

/// A container that encoding policies write encoded values into.
///
/// Every method that addresses a cell checks the address and reports bad ones as
/// [`crate::StrencError::RowOutOfBounds`] or [`crate::StrencError::ColumnOutOfBounds`].
pub trait EncodedOutput {
    /// Whether rows may have different lengths.
    const RAGGED: bool;

    /// Discard the current contents and reshape to `rows` rows of `columns` zeros.
    fn init(&mut self, rows: usize, columns: usize);

    fn set(&mut self, row: usize, col: usize, value: usize) -> Result<()>;

    /// Add one to the value at `(row, col)`
    fn increment(&mut self, row: usize, col: usize) -> Result<()>;

    /// Append `value` to the end of `row`.
    ///
    /// Only ragged containers support this; dense ones fail with
    /// [`crate::StrencError::OutputMismatch`].
    fn append_to_row(&mut self, row: usize, value: usize) -> Result<()>;
}

impl EncodedOutput for Matrix {
    const RAGGED: bool = false;

    fn init(&mut self, rows: usize, columns: usize) {
        *self = Matrix::zeros(rows, columns);
    }

    fn set(&mut self, row: usize, col: usize, value: usize) -> Result<()> {
        Matrix::set(self, row, col, value as f64)
    }

    fn increment(&mut self, row: usize, col: usize) -> Result<()> {
        self.add(row, col, 1.0)
    }

    fn append_to_row(&mut self, _row: usize, _value: usize) -> Result<()> {
        OutputMismatchSnafu {
            container: "Matrix",
            operation: "appending to rows",
        }
        .fail()
    }
}

impl EncodedOutput for RaggedRows {
    const RAGGED: bool = true;

    fn init(&mut self, rows: usize, columns: usize) {
        self.clear();
        self.resize(rows, vec![0; columns]);
    }

    fn set(&mut self, row: usize, col: usize, value: usize) -> Result<()> {
        *cell(self, row, col)? = value;
        Ok(())
    }

    fn increment(&mut self, row: usize, col: usize) -> Result<()> {
        *cell(self, row, col)? += 1;
        Ok(())
    }

    fn append_to_row(&mut self, row: usize, value: usize) -> Result<()> {
        let rows = self.len();
        self.get_mut(row)
            .context(RowOutOfBoundsSnafu { row, rows })?
            .push(value);
        Ok(())
    }
}

fn cell(output: &mut RaggedRows, row: usize, col: usize) -> Result<&mut usize> {
    let rows = output.len();
    let values = output
        .get_mut(row)
        .context(RowOutOfBoundsSnafu { row, rows })?;
    let cols = values.len();

    values
        .get_mut(col)
        .context(ColumnOutOfBoundsSnafu { row, col, cols })
}

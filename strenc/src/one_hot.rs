//! One-hot encoding of categorical values.
//!
//! Each distinct value becomes a category, numbered in the order it's first seen, and is
//! represented by a binary indicator that is 1 for its own category and 0 everywhere else.
use crate::error::RowOutOfBoundsSnafu;
use crate::{Matrix, Result};
use rustc_hash::FxHashMap as HashMap;
use snafu::ensure;
use std::hash::Hash;
use tracing::*;

/// One-hot encode a list of labels.
///
/// The result has one row per label and one column per distinct label.  Each row holds a single
/// `1.0`, in the column of that row's label.
///
/// ```
/// let output = strenc::one_hot_encoding(&["cat", "dog", "cat", "bird"]);
///
/// assert_eq!(
///     vec![
///         vec![1.0, 0.0, 0.0],
///         vec![0.0, 1.0, 0.0],
///         vec![1.0, 0.0, 0.0],
///         vec![0.0, 0.0, 1.0],
///     ],
///     output.to_rows()
/// );
/// ```
pub fn one_hot_encoding<T: Hash + Eq>(labels: &[T]) -> Matrix {
    let (categories, n_categories) = categorize(labels.iter());

    let mut output = Matrix::zeros(labels.len(), n_categories);
    for (row, category) in categories.into_iter().enumerate() {
        output[(row, category)] = 1.0;
    }

    output
}

/// One-hot encode selected rows of a matrix.
///
/// `input` holds one feature per row and one data point per column.  Every row listed in
/// `indices` is treated as a categorical feature and replaced by one indicator row per distinct
/// value in it, in the order the values are first seen.  The rows not listed are copied through
/// unchanged, so the output has the same number of columns as `input` and the rows keep their
/// relative order.
///
/// Indices refer to rows of `input`; listing a row more than once has no further effect.  An
/// index past the last row is an error.
///
/// Values are compared exactly, except that `0.0` and `-0.0` are the same category.
pub fn one_hot_encoding_rows(input: &Matrix, indices: &[usize]) -> Result<Matrix> {
    let rows = input.n_rows();
    let cols = input.n_cols();

    let mut selected = vec![false; rows];
    for &row in indices {
        ensure!(row < rows, RowOutOfBoundsSnafu { row, rows });
        selected[row] = true;
    }

    let mut data = Vec::with_capacity(input.as_slice().len());
    let mut output_rows = 0;

    for (row, is_selected) in selected.into_iter().enumerate() {
        let values = input.row(row)?;

        if !is_selected {
            data.extend_from_slice(values);
            output_rows += 1;
            continue;
        }

        let (categories, n_categories) = categorize(values.iter().map(|&value| category_key(value)));
        trace!(row, n_categories, "Expanding categorical row");

        let start = data.len();
        data.resize(start + n_categories * cols, 0.0);
        for (col, category) in categories.into_iter().enumerate() {
            data[start + category * cols + col] = 1.0;
        }
        output_rows += n_categories;
    }

    debug!(
        input_rows = rows,
        output_rows,
        encoded = indices.len(),
        "One-hot encoded matrix rows"
    );

    Ok(Matrix::from_row_major(output_rows, cols, data))
}

/// Assign each value the number of its category, numbering categories in first-seen order.
///
/// Returns the category of each value and the number of categories.
fn categorize<T, I>(values: I) -> (Vec<usize>, usize)
where
    T: Hash + Eq,
    I: IntoIterator<Item = T>,
{
    let mut categories: HashMap<T, usize> = HashMap::default();

    let assigned = values
        .into_iter()
        .map(|value| {
            let next = categories.len();
            *categories.entry(value).or_insert(next)
        })
        .collect();

    (assigned, categories.len())
}

/// `f64` isn't `Hash`, so categories of matrix values are keyed by their bits
fn category_key(value: f64) -> u64 {
    if value == 0.0 {
        0.0f64.to_bits()
    } else {
        value.to_bits()
    }
}

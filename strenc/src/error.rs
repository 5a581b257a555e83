use snafu::Snafu;
use std::path::PathBuf;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum StrencError {
    #[snafu(display("Row {row} is out of bounds for an output with {rows} rows"))]
    RowOutOfBounds { row: usize, rows: usize },

    #[snafu(display("Column {col} is out of bounds for row {row}, which has {cols} columns"))]
    ColumnOutOfBounds { row: usize, col: usize, cols: usize },

    #[snafu(display("Output container '{container}' does not support {operation}"))]
    OutputMismatch {
        container: &'static str,
        operation: &'static str,
    },

    #[snafu(display("The '{policy}' encoding policy can only write padded output"))]
    PaddingRequired { policy: &'static str },

    #[snafu(display("Matrix row {row} has {actual} columns but {expected} were expected"))]
    RaggedMatrix {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[snafu(display("A {rows}x{cols} matrix can't hold {len} values"))]
    InvalidShape { rows: usize, cols: usize, len: usize },

    #[snafu(display("Token id {id} is not in a dictionary of {vocab_size} tokens"))]
    UnknownTokenId { id: usize, vocab_size: usize },

    #[snafu(display("Token {token:?} appears more than once in the dictionary data"))]
    DuplicateToken { token: String },

    #[snafu(display("Token data '{value}' is not valid base64"))]
    InvalidBase64 {
        value: String,
        source: base64::DecodeError,
    },

    #[snafu(display("JSON (de)serialization failed"))]
    Json { source: serde_json::Error },

    #[snafu(display("File I/O error on file '{}'", path.display()))]
    FileIo {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("The encoding policy '{policy}' isn't one of the supported policies"))]
    UnknownPolicy { policy: String },
}

//! Encoders that turn string and categorical data into numbers.
//!
//! The string encoders are built from three parts:
//!
//! - a [`Tokenizer`] that breaks each input string into tokens,
//! - a [`Dictionary`] that gives every distinct token a stable integer id,
//! - an [`EncodingPolicy`] that decides how those ids are laid out in the output.
//!
//! [`StringEncoder`] runs them over a corpus:
//!
//! ```
//! use strenc::{BagOfWordsEncoder, Matrix, SplitByAnyOf};
//!
//! let mut encoder = BagOfWordsEncoder::default();
//! let mut output = Matrix::default();
//! encoder
//!     .encode(&["hello how are you", "i am good"], &mut output, &SplitByAnyOf::new(" "))
//!     .unwrap();
//!
//! assert_eq!(
//!     vec![
//!         vec![1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 0.0],
//!         vec![0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0],
//!     ],
//!     output.to_rows()
//! );
//! ```
//!
//! Categorical values that are already separate labels can be one-hot encoded directly with
//! [`one_hot_encoding`].
mod config;
mod dictionary;
mod encoder;
mod error;
mod matrix;
mod one_hot;
mod output;
mod policy;
mod token;
pub mod tokenizer;

pub use config::*;
pub use dictionary::*;
pub use encoder::*;
pub use error::*;
pub use matrix::*;
pub use one_hot::*;
pub use output::*;
pub use policy::*;
pub use token::*;
pub use tokenizer::{AnyTokenizer, CharExtract, SplitByAnyOf, Tokenizer};

pub type Result<T> = std::result::Result<T, StrencError>;

//! Encoding policies decide how the token ids of a row end up in the output container.
//!
//! Policies are picked at compile time as the type parameter of [`crate::StringEncoder`].
use crate::error::{PaddingRequiredSnafu, UnknownPolicySnafu};
use crate::output::EncodedOutput;
use crate::token::TokenId;
use crate::Result;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, EnumVariantNames};

/// The built-in encoding policies, by name.
///
/// This is how configuration refers to a policy; code that knows its policy at compile time uses
/// the policy type directly.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    PartialEq,
    EnumString,
    EnumIter,
    EnumVariantNames,
    strum::Display,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PolicyKind {
    /// See [`DictionaryEncoding`]
    Dictionary,

    /// See [`BagOfWords`]
    #[default]
    BagOfWords,
}

impl PolicyKind {
    /// Look up a policy by its name, e.g. `"bag_of_words"`.
    pub fn from_name(name: &str) -> Result<Self> {
        name.parse()
            .map_err(|_| UnknownPolicySnafu { policy: name }.build())
    }
}

/// Strategy for writing token ids into an [`EncodedOutput`].
pub trait EncodingPolicy {
    /// Policies that set this can write each row straight into a ragged container as it's
    /// tokenized, with no padding and without knowing the final vocabulary size.
    const OUTPUT_WITH_NO_PADDING: bool = false;

    /// Name used in logs and error messages
    const NAME: &'static str;

    /// The width of padded output, given the number of tokens in the longest row and the final
    /// vocabulary size.
    fn output_columns(&self, longest_row: usize, vocab_size: usize) -> usize;

    /// Record that token `id` was found at position `col` of input `row`.
    fn encode<O: EncodedOutput>(
        &self,
        output: &mut O,
        id: TokenId,
        row: usize,
        col: usize,
    ) -> Result<()>;

    /// Append token `id` to `row` of a ragged output.
    ///
    /// Only meaningful when [`Self::OUTPUT_WITH_NO_PADDING`] is set; the default fails with
    /// [`crate::StrencError::PaddingRequired`].
    fn encode_unpadded<O: EncodedOutput>(
        &self,
        _output: &mut O,
        _id: TokenId,
        _row: usize,
    ) -> Result<()> {
        PaddingRequiredSnafu { policy: Self::NAME }.fail()
    }
}

/// Writes every token as its own value, in order, so each row is the sequence of its tokens.
///
/// Values written are `id + 1`, keeping `0` free to mean padding.  For example, splitting on `@`,
/// `["hello@wow", "wow@hello@good"]` encodes as `[[1, 2, 0], [2, 1, 3]]` in a matrix and
/// `[[1, 2], [2, 1, 3]]` in ragged output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryEncoding;

impl DictionaryEncoding {
    /// The value dense output holds past the end of a row
    pub const PADDING: usize = 0;

    /// The value written for token `id`
    pub fn code(id: TokenId) -> usize {
        id + 1
    }

    /// The token id a written value stands for, or `None` for padding
    pub fn decode_code(code: usize) -> Option<TokenId> {
        code.checked_sub(1)
    }
}

impl EncodingPolicy for DictionaryEncoding {
    const OUTPUT_WITH_NO_PADDING: bool = true;
    const NAME: &'static str = "dictionary";

    fn output_columns(&self, longest_row: usize, _vocab_size: usize) -> usize {
        longest_row
    }

    fn encode<O: EncodedOutput>(
        &self,
        output: &mut O,
        id: TokenId,
        row: usize,
        col: usize,
    ) -> Result<()> {
        output.set(row, col, Self::code(id))
    }

    fn encode_unpadded<O: EncodedOutput>(
        &self,
        output: &mut O,
        id: TokenId,
        row: usize,
    ) -> Result<()> {
        output.append_to_row(row, Self::code(id))
    }
}

/// What a bag-of-words row records about each token
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    PartialEq,
    EnumString,
    EnumIter,
    EnumVariantNames,
    strum::Display,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum BagOfWordsMode {
    /// How many times the token occurs in the row
    #[default]
    Count,

    /// 1 if the token occurs in the row at all, otherwise 0
    Binary,
}

/// Writes one column per vocabulary entry, recording each token's occurrences in its row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BagOfWords {
    pub mode: BagOfWordsMode,
}

impl BagOfWords {
    pub fn new(mode: BagOfWordsMode) -> Self {
        Self { mode }
    }
}

impl EncodingPolicy for BagOfWords {
    const NAME: &'static str = "bag_of_words";

    fn output_columns(&self, _longest_row: usize, vocab_size: usize) -> usize {
        vocab_size
    }

    fn encode<O: EncodedOutput>(
        &self,
        output: &mut O,
        id: TokenId,
        row: usize,
        _col: usize,
    ) -> Result<()> {
        match self.mode {
            BagOfWordsMode::Count => output.increment(row, id),
            BagOfWordsMode::Binary => output.set(row, id, 1),
        }
    }
}

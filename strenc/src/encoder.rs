//! The encoder ties the pieces together: it runs a tokenizer over every input string, assigns
//! dictionary ids to the tokens, and hands the ids to an encoding policy to place in the output.
use crate::error::UnknownTokenIdSnafu;
use crate::output::EncodedOutput;
use crate::policy::{BagOfWords, DictionaryEncoding, EncodingPolicy, PolicyKind};
use crate::token::TokenId;
use crate::tokenizer::{tokens, Tokenizer};
use crate::{Dictionary, Result};
use serde::{Deserialize, Serialize};
use snafu::OptionExt;
use tracing::*;

/// Encodes a corpus of strings with encoding policy `P`.
///
/// The dictionary lives as long as the encoder and keeps growing with every call to
/// [`Self::encode`], so batches encoded one after another share one vocabulary.  Call
/// [`Self::reset`] between unrelated runs.
///
/// The whole encoder, dictionary included, can be serialized with serde and restored later to
/// keep encoding with the same ids.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StringEncoder<P> {
    dictionary: Dictionary,
    policy: P,
}

/// Encoder that writes each token's id in sequence
pub type DictionaryEncoder = StringEncoder<DictionaryEncoding>;

/// Encoder that writes per-token occurrence counts
pub type BagOfWordsEncoder = StringEncoder<BagOfWords>;

impl<P: EncodingPolicy> StringEncoder<P> {
    pub fn new(policy: P) -> Self {
        Self::with_dictionary(policy, Dictionary::new())
    }

    /// Create an encoder that continues from an existing dictionary, for example one loaded with
    /// [`Dictionary::load`].
    pub fn with_dictionary(policy: P, dictionary: Dictionary) -> Self {
        Self { dictionary, policy }
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn dictionary_mut(&mut self) -> &mut Dictionary {
        &mut self.dictionary
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Clear the dictionary.
    pub fn reset(&mut self) {
        self.dictionary.reset();
    }

    /// Tokenize a single string, adding any new tokens to the dictionary, and return the
    /// (zero-based) id of each token in order.
    pub fn encode_ids<T>(&mut self, text: impl AsRef<[u8]>, tokenizer: &T) -> Vec<TokenId>
    where
        T: Tokenizer + ?Sized,
    {
        tokens(tokenizer, text.as_ref())
            .map(|token| self.dictionary.insert(token))
            .collect()
    }

    /// Encode every string in `inputs` into `output`, one row per input.
    ///
    /// Whatever `output` held before is replaced.
    ///
    /// If `output` is ragged and the policy supports unpadded output, each row holds exactly what
    /// the policy wrote for that input's tokens.  Otherwise all inputs are tokenized first, so
    /// the final vocabulary size and longest row are known, and the output is sized to
    /// `inputs.len()` rows of [`EncodingPolicy::output_columns`] zero-filled columns before the
    /// policy writes into it.
    pub fn encode<S, O, T>(&mut self, inputs: &[S], output: &mut O, tokenizer: &T) -> Result<()>
    where
        S: AsRef<[u8]>,
        O: EncodedOutput,
        T: Tokenizer + ?Sized,
    {
        let span = debug_span!("encode", policy = P::NAME, rows = inputs.len());
        let _guard = span.enter();

        if O::RAGGED && P::OUTPUT_WITH_NO_PADDING {
            output.init(inputs.len(), 0);

            for (row, input) in inputs.iter().enumerate() {
                for token in tokens(tokenizer, input.as_ref()) {
                    let id = self.dictionary.insert(token);
                    self.policy.encode_unpadded(output, id, row)?;
                }
            }
        } else {
            let dataset: Vec<Vec<TokenId>> = inputs
                .iter()
                .map(|input| self.encode_ids(input, tokenizer))
                .collect();

            let longest_row = dataset.iter().map(Vec::len).max().unwrap_or(0);
            let columns = self
                .policy
                .output_columns(longest_row, self.dictionary.len());

            trace!(longest_row, columns, "Sizing padded output");
            output.init(inputs.len(), columns);

            for (row, ids) in dataset.iter().enumerate() {
                for (col, &id) in ids.iter().enumerate() {
                    self.policy.encode(output, id, row, col)?;
                }
            }
        }

        debug!(vocab_size = self.dictionary.len(), "Encoded inputs");

        Ok(())
    }
}

impl StringEncoder<DictionaryEncoding> {
    /// Translate one row of dictionary-encoded output back into its tokens.
    ///
    /// Padding values are skipped.  Values that don't correspond to a token in this encoder's
    /// dictionary are an error.
    pub fn decode_row(&self, codes: impl IntoIterator<Item = usize>) -> Result<Vec<&[u8]>> {
        codes
            .into_iter()
            .filter_map(DictionaryEncoding::decode_code)
            .map(|id| {
                self.dictionary.token(id).context(UnknownTokenIdSnafu {
                    id,
                    vocab_size: self.dictionary.len(),
                })
            })
            .collect()
    }
}

/// An encoder whose policy is picked at runtime, usually from an [`crate::EncoderConfig`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnyEncoder {
    Dictionary(DictionaryEncoder),
    BagOfWords(BagOfWordsEncoder),
}

impl AnyEncoder {
    pub fn policy_kind(&self) -> PolicyKind {
        match self {
            AnyEncoder::Dictionary(_) => PolicyKind::Dictionary,
            AnyEncoder::BagOfWords(_) => PolicyKind::BagOfWords,
        }
    }

    pub fn dictionary(&self) -> &Dictionary {
        match self {
            AnyEncoder::Dictionary(encoder) => encoder.dictionary(),
            AnyEncoder::BagOfWords(encoder) => encoder.dictionary(),
        }
    }

    pub fn reset(&mut self) {
        match self {
            AnyEncoder::Dictionary(encoder) => encoder.reset(),
            AnyEncoder::BagOfWords(encoder) => encoder.reset(),
        }
    }

    /// See [`StringEncoder::encode_ids`]
    pub fn encode_ids<T>(&mut self, text: impl AsRef<[u8]>, tokenizer: &T) -> Vec<TokenId>
    where
        T: Tokenizer + ?Sized,
    {
        match self {
            AnyEncoder::Dictionary(encoder) => encoder.encode_ids(text, tokenizer),
            AnyEncoder::BagOfWords(encoder) => encoder.encode_ids(text, tokenizer),
        }
    }

    /// See [`StringEncoder::encode`]
    pub fn encode<S, O, T>(&mut self, inputs: &[S], output: &mut O, tokenizer: &T) -> Result<()>
    where
        S: AsRef<[u8]>,
        O: EncodedOutput,
        T: Tokenizer + ?Sized,
    {
        match self {
            AnyEncoder::Dictionary(encoder) => encoder.encode(inputs, output, tokenizer),
            AnyEncoder::BagOfWords(encoder) => encoder.encode(inputs, output, tokenizer),
        }
    }
}

impl From<DictionaryEncoder> for AnyEncoder {
    fn from(encoder: DictionaryEncoder) -> Self {
        AnyEncoder::Dictionary(encoder)
    }
}

impl From<BagOfWordsEncoder> for AnyEncoder {
    fn from(encoder: BagOfWordsEncoder) -> Self {
        AnyEncoder::BagOfWords(encoder)
    }
}

//! Configuration for building an encoder and tokenizer at runtime.
//!
//! A config is usually read from JSON:
//!
//! ```json
//! {
//!   "tokenizer": { "split_by_any_of": { "delimiters": " \t" } },
//!   "policy": "bag_of_words",
//!   "bag_of_words_mode": "binary"
//! }
//! ```
//!
//! Every field is optional.  By default text is split on spaces and encoded as bag-of-words
//! counts.
use crate::error::{FileIoSnafu, JsonSnafu};
use crate::policy::{BagOfWords, BagOfWordsMode, DictionaryEncoding, PolicyKind};
use crate::tokenizer::{AnyTokenizer, CharExtract, SplitByAnyOf};
use crate::{AnyEncoder, Result, StringEncoder};
use serde::{Deserialize, Serialize};
use snafu::ResultExt;
use std::path::Path;
use tracing::*;

/// Which tokenizer to use, and its parameters
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenizerConfig {
    /// See [`SplitByAnyOf`]
    SplitByAnyOf { delimiters: String },

    /// See [`CharExtract`]
    CharExtract,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        TokenizerConfig::SplitByAnyOf {
            delimiters: " ".to_string(),
        }
    }
}

impl TokenizerConfig {
    pub fn build(&self) -> AnyTokenizer {
        match self {
            TokenizerConfig::SplitByAnyOf { delimiters } => SplitByAnyOf::new(delimiters).into(),
            TokenizerConfig::CharExtract => CharExtract.into(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    pub tokenizer: TokenizerConfig,

    pub policy: PolicyKind,

    /// Only used by the bag-of-words policy
    pub bag_of_words_mode: BagOfWordsMode,
}

impl EncoderConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context(JsonSnafu)
    }

    /// Read a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).with_context(|_| FileIoSnafu {
            path: path.to_path_buf(),
        })?;
        let config = Self::from_json(&json)?;

        debug!(path = %path.display(), ?config, "Loaded encoder config");

        Ok(config)
    }

    pub fn build_tokenizer(&self) -> AnyTokenizer {
        self.tokenizer.build()
    }

    /// A new encoder, with an empty dictionary, using the configured policy
    pub fn build_encoder(&self) -> AnyEncoder {
        match self.policy {
            PolicyKind::Dictionary => StringEncoder::new(DictionaryEncoding).into(),
            PolicyKind::BagOfWords => {
                StringEncoder::new(BagOfWords::new(self.bag_of_words_mode)).into()
            }
        }
    }

    pub fn build(&self) -> (AnyEncoder, AnyTokenizer) {
        (self.build_encoder(), self.build_tokenizer())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Matrix, RaggedRows, StrencError};
    use assert_matches::assert_matches;

    #[test]
    fn defaults() {
        let config = EncoderConfig::from_json("{}").unwrap();
        assert_eq!(EncoderConfig::default(), config);
        assert_eq!(PolicyKind::BagOfWords, config.policy);
        assert_eq!(BagOfWordsMode::Count, config.bag_of_words_mode);

        let (mut encoder, tokenizer) = config.build();
        let mut output = Matrix::default();
        encoder
            .encode(&["a b a", "c"], &mut output, &tokenizer)
            .unwrap();
        assert_eq!(vec![vec![2.0, 1.0, 0.0], vec![0.0, 0.0, 1.0]], output.to_rows());
    }

    #[test]
    fn full_config() {
        let config = EncoderConfig::from_json(
            r#"{
                "tokenizer": { "split_by_any_of": { "delimiters": ",;" } },
                "policy": "bag_of_words",
                "bag_of_words_mode": "binary"
            }"#,
        )
        .unwrap();

        assert_eq!(
            TokenizerConfig::SplitByAnyOf {
                delimiters: ",;".to_string()
            },
            config.tokenizer
        );

        let (mut encoder, tokenizer) = config.build();
        let mut output = RaggedRows::new();
        encoder
            .encode(&["x,x;y"], &mut output, &tokenizer)
            .unwrap();
        assert_eq!(vec![vec![1, 1]], output);
    }

    #[test]
    fn character_dictionary_config() {
        let config = EncoderConfig::from_json(
            r#"{ "tokenizer": "char_extract", "policy": "dictionary" }"#,
        )
        .unwrap();

        let (mut encoder, tokenizer) = config.build();
        assert_eq!(PolicyKind::Dictionary, encoder.policy_kind());
        assert_eq!(vec![0, 1, 2, 2, 1], encoder.encode_ids("GACCA", &tokenizer));
    }

    #[test]
    fn unknown_policy() {
        assert_matches!(
            EncoderConfig::from_json(r#"{ "policy": "word2vec" }"#),
            Err(StrencError::Json { .. })
        );
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "policy": "dictionary" }"#).unwrap();

        let config = EncoderConfig::load(&path).unwrap();
        assert_eq!(PolicyKind::Dictionary, config.policy);

        assert_matches!(
            EncoderConfig::load(dir.path().join("missing.json")),
            Err(StrencError::FileIo { .. })
        );
    }
}

//! The dictionary maintains the mapping between tokens and the integer ids assigned to them.
//!
//! Ids are handed out in the order tokens are first seen, starting at 0, and are never reused.
//! The only way to shrink a dictionary is [`Dictionary::reset`], which empties it completely.
use crate::error::{DuplicateTokenSnafu, FileIoSnafu, InvalidBase64Snafu, JsonSnafu};
use crate::token::{TokenId, TokenString};
use crate::{Result, StrencError};
use base64::{engine::general_purpose, Engine as _};
use rustc_hash::FxHashMap as HashMap;
use serde::{Deserialize, Serialize};
use snafu::ResultExt;
use std::path::Path;
use tracing::*;

/// Bidirectional mapping between tokens and their ids.
///
/// The dictionary owns a copy of every token it has seen, so the tokens passed to
/// [`Self::insert`] can borrow from short-lived input text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DictionaryData", into = "DictionaryData")]
pub struct Dictionary {
    /// Mapping of token bytes to ids
    mapping: HashMap<TokenString, TokenId>,

    /// Every token, indexed by its id
    tokens: Vec<TokenString>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a dictionary from its tokens, listed in id order.
    ///
    /// Fails if any token is listed twice, since that would break the one-id-per-token invariant.
    pub fn from_tokens<I, T>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<TokenString>,
    {
        let mut dictionary = Self::new();

        for token in tokens {
            let token = token.into();
            if dictionary.mapping.contains_key(&token) {
                return DuplicateTokenSnafu {
                    token: String::from_utf8_lossy(&token).into_owned(),
                }
                .fail();
            }

            dictionary.mapping.insert(token.clone(), dictionary.tokens.len());
            dictionary.tokens.push(token);
        }

        Ok(dictionary)
    }

    /// Get the id of `token`, assigning it the next unused id if it hasn't been seen before.
    pub fn insert(&mut self, token: impl AsRef<[u8]>) -> TokenId {
        let token = token.as_ref();
        if let Some(&id) = self.mapping.get(token) {
            return id;
        }

        let id = self.tokens.len();
        self.mapping.insert(token.to_vec(), id);
        self.tokens.push(token.to_vec());

        trace!(id, token = %String::from_utf8_lossy(token), "New token");

        id
    }

    /// The id of `token`, if it's in the dictionary
    pub fn find(&self, token: impl AsRef<[u8]>) -> Option<TokenId> {
        self.mapping.get(token.as_ref()).copied()
    }

    pub fn contains(&self, token: impl AsRef<[u8]>) -> bool {
        self.mapping.contains_key(token.as_ref())
    }

    /// The token that was assigned `id`
    pub fn token(&self, id: TokenId) -> Option<&[u8]> {
        self.tokens.get(id).map(Vec::as_slice)
    }

    /// Number of distinct tokens, which is also the next id that will be assigned
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// All tokens, in id order
    pub fn tokens(&self) -> &[TokenString] {
        &self.tokens
    }

    /// All of the token/id pairs, in id order
    pub fn mapping(&self) -> impl Iterator<Item = (&[u8], TokenId)> {
        self.tokens
            .iter()
            .enumerate()
            .map(|(id, token)| (token.as_slice(), id))
    }

    /// Forget every token.  Ids start again from 0 afterwards.
    pub fn reset(&mut self) {
        debug!(vocab_size = self.len(), "Resetting dictionary");

        self.mapping.clear();
        self.tokens.clear();
    }

    /// Write the dictionary to `path` as JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_vec(self).context(JsonSnafu)?;

        std::fs::write(path, json).with_context(|_| FileIoSnafu {
            path: path.to_path_buf(),
        })?;

        info!(path = %path.display(), vocab_size = self.len(), "Saved dictionary");

        Ok(())
    }

    /// Read a dictionary previously written with [`Self::save`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read(path).with_context(|_| FileIoSnafu {
            path: path.to_path_buf(),
        })?;
        let dictionary: Self = serde_json::from_slice(&json).context(JsonSnafu)?;

        info!(path = %path.display(), vocab_size = dictionary.len(), "Loaded dictionary");

        Ok(dictionary)
    }
}

/// The persisted form of a [`Dictionary`].
///
/// Only the tokens are stored, in id order and base64 encoded since they aren't necessarily valid
/// UTF-8.  The id mapping is rebuilt on load.
#[derive(Serialize, Deserialize)]
struct DictionaryData {
    tokens: Vec<String>,
}

impl From<Dictionary> for DictionaryData {
    fn from(dictionary: Dictionary) -> Self {
        Self {
            tokens: dictionary
                .tokens
                .iter()
                .map(|token| general_purpose::STANDARD.encode(token))
                .collect(),
        }
    }
}

impl TryFrom<DictionaryData> for Dictionary {
    type Error = StrencError;

    fn try_from(data: DictionaryData) -> Result<Self> {
        let tokens = data
            .tokens
            .into_iter()
            .map(|value| {
                general_purpose::STANDARD
                    .decode(&value)
                    .context(InvalidBase64Snafu { value })
            })
            .collect::<Result<Vec<_>>>()?;

        Self::from_tokens(tokens)
    }
}

/// A token in its integer form: its position in the [`crate::Dictionary`] that first saw it.
///
/// Ids are dense and zero-based.  Encoding policies are free to shift them when writing output
/// (see [`crate::DictionaryEncoding`], which reserves `0` for padding).
pub type TokenId = usize;

/// An owned copy of a token's bytes.
///
/// Tokenizers hand out borrowed slices of the input text; the dictionary keeps one of these for
/// every distinct token so the mapping never depends on caller-owned memory.
pub type TokenString = Vec<u8>;

//! Tokenizers break a single input string into a sequence of tokens.
//!
//! A tokenizer works on a cursor over the bytes that remain to be processed: each call to
//! [`Tokenizer::next_token`] returns the next token and moves the cursor past everything it
//! consumed.  Tokens are always sub-slices of the input, so tokenizing never allocates.
//!
//! Inputs are treated as raw bytes.  Text that isn't valid UTF-8 is tokenized like anything else.

mod char_extract;
mod split_by_any_of;

pub use char_extract::CharExtract;
pub use split_by_any_of::SplitByAnyOf;

/// Extracts tokens from the front of a byte cursor.
///
/// Any function or closure with the signature `for<'a> Fn(&mut &'a [u8]) -> &'a [u8]` is also a
/// tokenizer, which makes it easy to plug in a custom rule.
pub trait Tokenizer {
    /// Return the next token from `text`, and advance `text` past the token (and any delimiter
    /// that ended it).
    ///
    /// An empty token means the input is exhausted.  Implementations must not return an empty
    /// token while there is still something worth tokenizing left in `text`, because callers stop
    /// at the first empty token.
    fn next_token<'a>(&self, text: &mut &'a [u8]) -> &'a [u8];
}

impl<F> Tokenizer for F
where
    F: for<'a> Fn(&mut &'a [u8]) -> &'a [u8],
{
    fn next_token<'a>(&self, text: &mut &'a [u8]) -> &'a [u8] {
        self(text)
    }
}

/// Iterate over the tokens `tokenizer` extracts from `text`.
pub fn tokens<'t, 'a, T>(tokenizer: &'t T, text: &'a [u8]) -> Tokens<'t, 'a, T>
where
    T: Tokenizer + ?Sized,
{
    Tokens {
        tokenizer,
        remaining: text,
        done: false,
    }
}

/// Iterator which drives a [`Tokenizer`] over one input until it yields an empty token.
///
/// See [`tokens`].
pub struct Tokens<'t, 'a, T: ?Sized> {
    tokenizer: &'t T,

    /// The part of the input that hasn't been tokenized yet
    remaining: &'a [u8],

    done: bool,
}

impl<'t, 'a, T> Iterator for Tokens<'t, 'a, T>
where
    T: Tokenizer + ?Sized,
{
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let token = self.tokenizer.next_token(&mut self.remaining);
        if token.is_empty() {
            self.done = true;
            None
        } else {
            Some(token)
        }
    }
}

impl<'t, 'a, T> std::iter::FusedIterator for Tokens<'t, 'a, T> where T: Tokenizer + ?Sized {}

/// One of the built-in tokenizers, picked at runtime.
///
/// This is what [`crate::EncoderConfig`] produces.  When the tokenizer is known at compile time,
/// use the concrete type instead.
#[derive(Clone, Debug)]
pub enum AnyTokenizer {
    SplitByAnyOf(SplitByAnyOf),
    CharExtract(CharExtract),
}

impl Tokenizer for AnyTokenizer {
    fn next_token<'a>(&self, text: &mut &'a [u8]) -> &'a [u8] {
        match self {
            AnyTokenizer::SplitByAnyOf(tokenizer) => tokenizer.next_token(text),
            AnyTokenizer::CharExtract(tokenizer) => tokenizer.next_token(text),
        }
    }
}

impl From<SplitByAnyOf> for AnyTokenizer {
    fn from(tokenizer: SplitByAnyOf) -> Self {
        AnyTokenizer::SplitByAnyOf(tokenizer)
    }
}

impl From<CharExtract> for AnyTokenizer {
    fn from(tokenizer: CharExtract) -> Self {
        AnyTokenizer::CharExtract(tokenizer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Splits on commas but keeps empty fields, which stops iteration early
    fn split_on_comma<'a>(text: &mut &'a [u8]) -> &'a [u8] {
        let remaining: &'a [u8] = *text;
        match remaining.iter().position(|&b| b == b',') {
            Some(pos) => {
                *text = &remaining[pos + 1..];
                &remaining[..pos]
            }
            None => {
                *text = &[];
                remaining
            }
        }
    }

    fn collect<T: Tokenizer + ?Sized>(tokenizer: &T, text: &str) -> Vec<String> {
        tokens(tokenizer, text.as_bytes())
            .map(|token| String::from_utf8_lossy(token).into_owned())
            .collect()
    }

    #[test]
    fn function_tokenizer() {
        assert_eq!(vec!["a", "b", "c"], collect(&split_on_comma, "a,b,c"));
        assert!(collect(&split_on_comma, "").is_empty());
    }

    #[test]
    fn empty_token_ends_iteration() {
        assert_eq!(vec!["a"], collect(&split_on_comma, "a,,b"));
    }

    #[test]
    fn tokens_is_fused() {
        let tokenizer = SplitByAnyOf::new(" ");
        let mut iter = tokens(&tokenizer, b"one");
        assert_eq!(Some(&b"one"[..]), iter.next());
        assert_eq!(None, iter.next());
        assert_eq!(None, iter.next());
    }

    #[test]
    fn any_tokenizer_dispatches() {
        let split: AnyTokenizer = SplitByAnyOf::new(" ").into();
        let chars: AnyTokenizer = CharExtract.into();

        assert_eq!(vec!["ab", "c"], collect(&split, "ab c"));
        assert_eq!(vec!["a", "b", " ", "c"], collect(&chars, "ab c"));
    }
}

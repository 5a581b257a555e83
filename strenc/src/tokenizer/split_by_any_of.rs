use super::Tokenizer;

/// One flag per possible byte value, set for the bytes that are delimiters
pub type DelimiterMask = [bool; 256];

/// Splits text on any of a set of delimiter bytes.
///
/// Runs of consecutive delimiters are treated as a single separator, so this never yields empty
/// tokens; leading and trailing delimiters are skipped the same way.  Delimiters are matched byte
/// by byte, so a multi-byte UTF-8 character in the delimiter set makes each of its bytes a
/// delimiter.
#[derive(Clone)]
pub struct SplitByAnyOf {
    mask: DelimiterMask,
}

impl SplitByAnyOf {
    /// Create a tokenizer that splits on every byte in `delimiters`.
    pub fn new(delimiters: impl AsRef<[u8]>) -> Self {
        let mut mask = [false; 256];
        for &byte in delimiters.as_ref() {
            mask[byte as usize] = true;
        }

        Self { mask }
    }

    pub fn mask(&self) -> &DelimiterMask {
        &self.mask
    }

    pub fn mask_mut(&mut self) -> &mut DelimiterMask {
        &mut self.mask
    }

    fn find_first_delimiter(&self, text: &[u8]) -> Option<usize> {
        text.iter().position(|&byte| self.mask[byte as usize])
    }
}

impl std::fmt::Debug for SplitByAnyOf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let delimiters: Vec<u8> = (0..=u8::MAX).filter(|&b| self.mask[b as usize]).collect();

        f.debug_struct("SplitByAnyOf")
            .field("delimiters", &String::from_utf8_lossy(&delimiters))
            .finish()
    }
}

impl Tokenizer for SplitByAnyOf {
    fn next_token<'a>(&self, text: &mut &'a [u8]) -> &'a [u8] {
        loop {
            let remaining: &'a [u8] = *text;

            match self.find_first_delimiter(remaining) {
                None => {
                    *text = &[];
                    return remaining;
                }
                Some(pos) => {
                    *text = &remaining[pos + 1..];

                    // Empty means we hit a delimiter straight away; keep going
                    if pos > 0 {
                        return &remaining[..pos];
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::tokens;

    fn split(delimiters: &str, text: &str) -> Vec<String> {
        let tokenizer = SplitByAnyOf::new(delimiters);
        tokens(&tokenizer, text.as_bytes())
            .map(|token| String::from_utf8_lossy(token).into_owned())
            .collect()
    }

    #[test]
    fn splits_on_single_delimiter() {
        assert_eq!(
            vec!["hello", "how", "are", "you"],
            split(" ", "hello how are you")
        );
    }

    #[test]
    fn splits_on_any_delimiter() {
        assert_eq!(vec!["a", "b", "c", "d"], split(" ,;", "a,b c;d"));
    }

    #[test]
    fn consecutive_delimiters_are_skipped() {
        assert_eq!(vec!["a", "b"], split(" ", "   a    b   "));
        assert!(split(" ", "     ").is_empty());
    }

    #[test]
    fn no_delimiter_returns_everything() {
        assert_eq!(vec!["hello@wow"], split(" ", "hello@wow"));
    }

    #[test]
    fn empty_input() {
        let tokenizer = SplitByAnyOf::new(" ");
        let mut text: &[u8] = b"";
        assert!(tokenizer.next_token(&mut text).is_empty());
        assert!(text.is_empty());
    }

    #[test]
    fn cursor_advances_past_delimiter() {
        let tokenizer = SplitByAnyOf::new("@");
        let mut text: &[u8] = b"hello@wow@good";

        assert_eq!(b"hello", tokenizer.next_token(&mut text));
        assert_eq!(b"wow@good", text);
        assert_eq!(b"wow", tokenizer.next_token(&mut text));
        assert_eq!(b"good", tokenizer.next_token(&mut text));
        assert!(text.is_empty());
        assert!(tokenizer.next_token(&mut text).is_empty());
    }

    #[test]
    fn invalid_utf8_is_opaque() {
        let tokenizer = SplitByAnyOf::new(" ");
        let input = [0xff, 0xfe, b' ', 0xc3];
        let found: Vec<&[u8]> = tokens(&tokenizer, &input).collect();
        let expected: Vec<&[u8]> = vec![&[0xff, 0xfe][..], &[0xc3][..]];
        assert_eq!(expected, found);
    }

    #[test]
    fn mask_reflects_delimiters() {
        let mut tokenizer = SplitByAnyOf::new(" \t");
        assert!(tokenizer.mask()[b' ' as usize]);
        assert!(tokenizer.mask()[b'\t' as usize]);
        assert_eq!(2, tokenizer.mask().iter().filter(|set| **set).count());

        tokenizer.mask_mut()[b',' as usize] = true;
        let found: Vec<&[u8]> = tokens(&tokenizer, b"a,b").collect();
        assert_eq!(vec![&b"a"[..], &b"b"[..]], found);
    }
}

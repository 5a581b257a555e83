use super::Tokenizer;

/// Yields the input one character at a time.
///
/// Where the input holds a valid UTF-8 encoded character, the token is all of that character's
/// bytes.  Anything else is yielded one byte at a time.
#[derive(Clone, Copy, Debug, Default)]
pub struct CharExtract;

impl Tokenizer for CharExtract {
    fn next_token<'a>(&self, text: &mut &'a [u8]) -> &'a [u8] {
        let remaining: &'a [u8] = *text;
        let Some(&lead) = remaining.first() else {
            return remaining;
        };

        let width = match utf8_width(lead) {
            width if width > 1
                && remaining.len() >= width
                && std::str::from_utf8(&remaining[..width]).is_ok() =>
            {
                width
            }
            _ => 1,
        };

        let (token, rest) = remaining.split_at(width);
        *text = rest;
        token
    }
}

/// Length of the UTF-8 sequence that `lead` starts, or 1 for bytes that can't start one
fn utf8_width(lead: u8) -> usize {
    match lead {
        0xc2..=0xdf => 2,
        0xe0..=0xef => 3,
        0xf0..=0xf4 => 4,
        _ => 1,
    }
}

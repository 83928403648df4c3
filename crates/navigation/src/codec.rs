//! Fixed-width text helpers shared by the address formats.

/// Parse exactly `width` ASCII digits.
pub(crate) fn parse_digits(text: &str, width: usize) -> Option<i32> {
    if text.len() != width || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

/// Parse `<prefix><digits>` where the digits are exactly `width` long.
pub(crate) fn parse_prefixed(text: &str, prefix: char, width: usize) -> Option<i32> {
    text.strip_prefix(prefix)
        .and_then(|digits| parse_digits(digits, width))
}

/// Which end of a hemisphere-tagged value carries the letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LetterPosition {
    Leading,
    Trailing,
}

/// A signed value written as a magnitude plus a hemisphere letter, e.g.
/// `N1248` or `0760W`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct HemisphereCodec {
    pub positive: char,
    pub negative: char,
    pub digits: usize,
    pub position: LetterPosition,
}

impl HemisphereCodec {
    pub fn encode(&self, value: i32) -> String {
        let letter = if value < 0 { self.negative } else { self.positive };
        let magnitude = value.unsigned_abs();
        match self.position {
            LetterPosition::Leading => {
                format!("{}{:0width$}", letter, magnitude, width = self.digits)
            }
            LetterPosition::Trailing => {
                format!("{:0width$}{}", magnitude, letter, width = self.digits)
            }
        }
    }

    pub fn decode(&self, text: &str) -> Option<i32> {
        if !text.is_ascii() || text.len() != self.digits + 1 {
            return None;
        }
        let (letter, digits) = match self.position {
            LetterPosition::Leading => (text.chars().next()?, &text[1..]),
            LetterPosition::Trailing => (text.chars().last()?, &text[..self.digits]),
        };
        let magnitude = parse_digits(digits, self.digits)?;
        match letter {
            c if c == self.positive => Some(magnitude),
            c if c == self.negative => Some(-magnitude),
            _ => None,
        }
    }

    /// Width of an encoded value.
    pub fn width(&self) -> usize {
        self.digits + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LATITUDE: HemisphereCodec = HemisphereCodec {
        positive: 'N',
        negative: 'S',
        digits: 4,
        position: LetterPosition::Leading,
    };

    #[test]
    fn test_parse_digits() {
        assert_eq!(parse_digits("029", 3), Some(29));
        assert_eq!(parse_digits("29", 3), None);
        assert_eq!(parse_digits("2a9", 3), None);
        assert_eq!(parse_digits("+29", 3), None);
        assert_eq!(parse_prefixed("h08", 'h', 2), Some(8));
        assert_eq!(parse_prefixed("v08", 'h', 2), None);
    }

    #[test]
    fn test_hemisphere_codec() {
        assert_eq!(LATITUDE.encode(1248), "N1248");
        assert_eq!(LATITUDE.encode(-7), "S0007");
        assert_eq!(LATITUDE.decode("S0007"), Some(-7));
        assert_eq!(LATITUDE.decode("X0007"), None);
        assert_eq!(LATITUDE.decode("N007"), None);
        assert_eq!(LATITUDE.decode("Né007"), None);

        let trailing = HemisphereCodec {
            position: LetterPosition::Trailing,
            ..LATITUDE
        };
        assert_eq!(trailing.encode(-45), "0045S");
        assert_eq!(trailing.decode("0045S"), Some(-45));
    }
}

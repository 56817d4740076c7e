//! Hold tokens
//!
//! A problem frame is a comma-separated list of tokens such as `S69`: one
//! hold-type symbol followed by the logical position.

use core::fmt;

/// Hold type, from the token's first character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HoldKind {
    /// `S` - starting hold
    Start,
    /// `P` - intermediate hold
    Progress,
    /// `E` - finishing hold
    End,
    /// `L` - left hand only
    LeftHand,
    /// `R` - right hand only
    RightHand,
    /// `M` - match hold
    Match,
    /// `F` - foot hold
    Foot,
    /// Any other symbol; rendered dark
    Unknown(char),
}

impl HoldKind {
    /// Map a symbol to its hold kind
    pub const fn from_symbol(symbol: char) -> Self {
        match symbol {
            'S' => HoldKind::Start,
            'P' => HoldKind::Progress,
            'E' => HoldKind::End,
            'L' => HoldKind::LeftHand,
            'R' => HoldKind::RightHand,
            'M' => HoldKind::Match,
            'F' => HoldKind::Foot,
            other => HoldKind::Unknown(other),
        }
    }

    /// Symbol as sent on the wire
    pub const fn symbol(self) -> char {
        match self {
            HoldKind::Start => 'S',
            HoldKind::Progress => 'P',
            HoldKind::End => 'E',
            HoldKind::LeftHand => 'L',
            HoldKind::RightHand => 'R',
            HoldKind::Match => 'M',
            HoldKind::Foot => 'F',
            HoldKind::Unknown(symbol) => symbol,
        }
    }

    /// Check if this kind lights anything
    pub const fn is_known(self) -> bool {
        !matches!(self, HoldKind::Unknown(_))
    }

    /// Color name for logs
    pub const fn color_name(self) -> &'static str {
        match self {
            HoldKind::Start => "GREEN",
            HoldKind::Progress | HoldKind::RightHand => "BLUE",
            HoldKind::End => "RED",
            HoldKind::LeftHand => "PURPLE",
            HoldKind::Match => "PINK",
            HoldKind::Foot => "CYAN",
            HoldKind::Unknown(_) => "BLACK",
        }
    }
}

/// Malformed hold token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HoldError {
    /// Token has no characters
    Empty,
    /// Position is missing, not a decimal number, or does not fit in `u16`
    InvalidPosition,
}

impl fmt::Display for HoldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HoldError::Empty => write!(f, "empty hold token"),
            HoldError::InvalidPosition => write!(f, "hold position is not a number"),
        }
    }
}

/// One hold of a problem
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HoldToken {
    /// Hold type
    pub kind: HoldKind,
    /// 0-based logical position
    pub position: u16,
}

impl HoldToken {
    /// Create a token
    pub const fn new(kind: HoldKind, position: u16) -> Self {
        Self { kind, position }
    }

    /// Parse a token such as `"P82"`
    ///
    /// Surrounding whitespace is ignored. The position must be one or more
    /// ASCII digits.
    pub fn parse(token: &str) -> Result<Self, HoldError> {
        let token = token.trim();
        let mut chars = token.chars();
        let symbol = chars.next().ok_or(HoldError::Empty)?;
        let digits = chars.as_str();

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(HoldError::InvalidPosition);
        }
        let position = digits.parse().map_err(|_| HoldError::InvalidPosition)?;

        Ok(Self::new(HoldKind::from_symbol(symbol), position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_roundtrip() {
        for symbol in ['S', 'P', 'E', 'L', 'R', 'M', 'F'] {
            let kind = HoldKind::from_symbol(symbol);
            assert!(kind.is_known());
            assert_eq!(kind.symbol(), symbol);
        }
    }

    #[test]
    fn test_unknown_symbol() {
        let kind = HoldKind::from_symbol('X');
        assert_eq!(kind, HoldKind::Unknown('X'));
        assert!(!kind.is_known());
        assert_eq!(kind.color_name(), "BLACK");
    }

    #[test]
    fn test_parse_token() {
        assert_eq!(
            HoldToken::parse("S69").unwrap(),
            HoldToken::new(HoldKind::Start, 69)
        );
        assert_eq!(
            HoldToken::parse(" E0 ").unwrap(),
            HoldToken::new(HoldKind::End, 0)
        );
        assert_eq!(
            HoldToken::parse("Q12").unwrap(),
            HoldToken::new(HoldKind::Unknown('Q'), 12)
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(HoldToken::parse(""), Err(HoldError::Empty));
        assert_eq!(HoldToken::parse("S"), Err(HoldError::InvalidPosition));
        assert_eq!(HoldToken::parse("Sx1"), Err(HoldError::InvalidPosition));
        assert_eq!(HoldToken::parse("S+4"), Err(HoldError::InvalidPosition));
        assert_eq!(HoldToken::parse("S70000"), Err(HoldError::InvalidPosition));
    }
}

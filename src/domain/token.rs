//! Input symbols: digit leaves and the four binary operators.

use std::fmt;

/// Binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    /// Combine two operand values. Division is plain `f64` division, so a zero
    /// divisor yields an infinity or NaN instead of an error.
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Operator::Add => left + right,
            Operator::Sub => left - right,
            Operator::Mul => left * right,
            Operator::Div => left / right,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One classified input character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Digit(u8),
    Operator(Operator),
}

impl Token {
    /// Classify a character; `None` for anything that is neither an ASCII digit
    /// nor an operator.
    pub fn classify(ch: char) -> Option<Self> {
        if ch.is_ascii_digit() {
            // ASCII digits always fit in a u8
            return ch.to_digit(10).map(|d| Token::Digit(d as u8));
        }
        Operator::from_char(ch).map(Token::Operator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(Token::classify('7'), Some(Token::Digit(7)));
        assert_eq!(Token::classify('0'), Some(Token::Digit(0)));
        assert_eq!(Token::classify('/'), Some(Token::Operator(Operator::Div)));
        assert_eq!(Token::classify('a'), None);
        assert_eq!(Token::classify(' '), None);
        // non-ASCII digits are not leaves
        assert_eq!(Token::classify('٣'), None);
    }

    #[test]
    fn test_operator_symbol_roundtrip() {
        for ch in ['+', '-', '*', '/'] {
            let op = Operator::from_char(ch).unwrap();
            assert_eq!(op.symbol(), ch);
            assert_eq!(op.to_string(), ch.to_string());
        }
    }

    #[test]
    fn test_apply_is_ordered() {
        assert_eq!(Operator::Sub.apply(1.0, 2.0), -1.0);
        assert_eq!(Operator::Div.apply(1.0, 4.0), 0.25);
        assert!(Operator::Div.apply(1.0, 0.0).is_infinite());
        assert!(Operator::Div.apply(0.0, 0.0).is_nan());
    }
}

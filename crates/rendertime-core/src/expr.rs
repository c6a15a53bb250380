//! Restricted arithmetic expressions for numeric input fields.
//!
//! Only numeric literals, the four basic operators, unary signs, and
//! parentheses are understood. Nothing else is ever evaluated.
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := factor (('*' | '/') factor)*
//! factor  := ('+' | '-') factor | primary
//! primary := NUMBER | '(' expr ')'
//! ```
//!
//! `NUMBER` is a decimal literal such as `24`, `1.5`, `.5`, `2e3` or `1_000`.
//! Whitespace between tokens is ignored.
//!
//! # Examples
//!
//! ```
//! use rendertime_core::expr::{self, Expr};
//!
//! assert_eq!(expr::evaluate("24 * 60").unwrap(), 1440.0);
//! assert_eq!(expr::evaluate("(1 + 2) * -3").unwrap(), -9.0);
//!
//! let parsed: Expr = "1 + 2 * 3".parse().unwrap();
//! assert_eq!(parsed.to_string(), "(1 + (2 * 3))");
//! ```

use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// Maximum accepted input length in bytes.
///
/// Bounds the nesting depth of the syntax tree, and with it the recursion
/// depth of parsing, evaluation and drop.
pub const MAX_INPUT_LEN: usize = 256;

/// Largest magnitude [`evaluate_integer`] accepts (2^53).
///
/// Every integer up to this value is exactly representable as `f64`.
pub const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Errors produced while parsing or evaluating an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ExprError {
    /// The input contains no tokens.
    #[display("expression is empty")]
    Empty,
    /// The input is longer than [`MAX_INPUT_LEN`].
    #[display("expression is longer than {max} bytes")]
    TooLong {
        /// The length limit.
        max: usize,
    },
    /// A character that is not part of the grammar.
    #[display("unexpected character {ch:?} at offset {offset}")]
    UnexpectedChar {
        /// The offending character.
        ch: char,
        /// Byte offset of the character.
        offset: usize,
    },
    /// A valid token in a position where the grammar does not allow it.
    #[display("unexpected {token} at offset {offset}")]
    UnexpectedToken {
        /// The kind of the offending token.
        token: TokenKind,
        /// Byte offset of the token.
        offset: usize,
    },
    /// The input ended in the middle of an expression.
    #[display("unexpected end of expression")]
    UnexpectedEnd,
    /// A malformed numeric literal such as `1.2.3` or `1__0`.
    #[display("invalid number at offset {offset}")]
    InvalidNumber {
        /// Byte offset where the literal starts.
        offset: usize,
    },
    /// The right-hand side of a division evaluated to zero.
    #[display("division by zero")]
    DivisionByZero,
    /// The result overflowed to infinity.
    #[display("result is not a finite number")]
    NonFinite,
    /// The result is too large to be converted to an integer exactly.
    #[display("result is out of the supported integer range")]
    OutOfRange,
}

/// Token categories, used for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum TokenKind {
    /// A numeric literal.
    #[display("number")]
    Number,
    /// `+`
    #[display("'+'")]
    Plus,
    /// `-`
    #[display("'-'")]
    Minus,
    /// `*`
    #[display("'*'")]
    Star,
    /// `/`
    #[display("'/'")]
    Slash,
    /// `(`
    #[display("'('")]
    LParen,
    /// `)`
    #[display("')'")]
    RParen,
}

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BinaryOp {
    /// Addition.
    #[display("+")]
    Add,
    /// Subtraction.
    #[display("-")]
    Sub,
    /// Multiplication.
    #[display("*")]
    Mul,
    /// True (real) division.
    #[display("/")]
    Div,
}

impl BinaryOp {
    /// Applies the operator to two operands.
    ///
    /// # Errors
    ///
    /// Returns [`ExprError::DivisionByZero`] for `Div` with a zero divisor.
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, ExprError> {
        let value = match self {
            Self::Add => lhs + rhs,
            Self::Sub => lhs - rhs,
            Self::Mul => lhs * rhs,
            Self::Div => {
                if rhs == 0.0 {
                    return Err(ExprError::DivisionByZero);
                }
                lhs / rhs
            }
        };
        Ok(value)
    }
}

/// Parsed expression tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Number(f64),
    /// Unary minus.
    Negate(Box<Expr>),
    /// A binary operation.
    Binary {
        /// The operator.
        op: BinaryOp,
        /// Left operand.
        lhs: Box<Expr>,
        /// Right operand.
        rhs: Box<Expr>,
    },
}

impl Expr {
    fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Self {
        Self::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    /// Evaluates the expression.
    ///
    /// # Errors
    ///
    /// Returns [`ExprError::DivisionByZero`] if any division has a zero divisor,
    /// and [`ExprError::NonFinite`] if the result is infinite.
    pub fn eval(&self) -> Result<f64, ExprError> {
        let value = self.eval_inner()?;
        if value.is_finite() {
            Ok(value)
        } else {
            Err(ExprError::NonFinite)
        }
    }

    fn eval_inner(&self) -> Result<f64, ExprError> {
        match self {
            Self::Number(value) => Ok(*value),
            Self::Negate(inner) => Ok(-inner.eval_inner()?),
            Self::Binary { op, lhs, rhs } => op.apply(lhs.eval_inner()?, rhs.eval_inner()?),
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => Display::fmt(value, f),
            Self::Negate(inner) => write!(f, "(-{inner})"),
            Self::Binary { op, lhs, rhs } => write!(f, "({lhs} {op} {rhs})"),
        }
    }
}

impl FromStr for Expr {
    type Err = ExprError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Parses `input` into an expression tree.
///
/// # Errors
///
/// Returns an [`ExprError`] describing the first syntax problem found.
pub fn parse(input: &str) -> Result<Expr, ExprError> {
    if input.len() > MAX_INPUT_LEN {
        return Err(ExprError::TooLong { max: MAX_INPUT_LEN });
    }
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(ExprError::Empty);
    }

    let mut parser = Parser {
        tokens: &tokens,
        pos: 0,
    };
    let expr = parser.parse_expr()?;
    if let Some(&(token, offset)) = parser.peek() {
        return Err(ExprError::UnexpectedToken {
            token: token.kind(),
            offset,
        });
    }
    Ok(expr)
}

/// Parses and evaluates `input`.
///
/// # Errors
///
/// Returns an [`ExprError`] if `input` cannot be parsed or evaluated.
pub fn evaluate(input: &str) -> Result<f64, ExprError> {
    parse(input)?.eval()
}

/// Parses and evaluates `input`, truncating the result toward zero.
///
/// # Errors
///
/// Returns an [`ExprError`] if `input` cannot be parsed or evaluated, and
/// [`ExprError::OutOfRange`] if the magnitude exceeds [`MAX_EXACT_INTEGER`].
///
/// # Examples
///
/// ```
/// use rendertime_core::expr;
///
/// assert_eq!(expr::evaluate_integer("10 / 4").unwrap(), 2);
/// assert_eq!(expr::evaluate_integer("-7 / 2").unwrap(), -3);
/// ```
#[expect(clippy::cast_possible_truncation)]
pub fn evaluate_integer(input: &str) -> Result<i64, ExprError> {
    let value = evaluate(input)?.trunc();
    if value.abs() > MAX_EXACT_INTEGER {
        return Err(ExprError::OutOfRange);
    }
    Ok(value as i64)
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

impl Token {
    fn kind(self) -> TokenKind {
        match self {
            Self::Number(_) => TokenKind::Number,
            Self::Plus => TokenKind::Plus,
            Self::Minus => TokenKind::Minus,
            Self::Star => TokenKind::Star,
            Self::Slash => TokenKind::Slash,
            Self::LParen => TokenKind::LParen,
            Self::RParen => TokenKind::RParen,
        }
    }
}

fn tokenize(input: &str) -> Result<Vec<(Token, usize)>, ExprError> {
    let bytes = input.as_bytes();
    let mut tokens = vec![];
    let mut offset = 0;
    while let Some(ch) = input[offset..].chars().next() {
        let token = match ch {
            c if c.is_whitespace() => {
                offset += c.len_utf8();
                continue;
            }
            '0'..='9' | '.' => {
                let end = scan_number(bytes, offset);
                let value = parse_number(&input[offset..end], offset)?;
                tokens.push((Token::Number(value), offset));
                offset = end;
                continue;
            }
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Star,
            '/' => Token::Slash,
            '(' => Token::LParen,
            ')' => Token::RParen,
            _ => return Err(ExprError::UnexpectedChar { ch, offset }),
        };
        tokens.push((token, offset));
        offset += 1;
    }
    Ok(tokens)
}

/// Returns the end offset of the numeric literal starting at `start`.
fn scan_number(bytes: &[u8], start: usize) -> usize {
    let mut end = start;
    while end < bytes.len() && matches!(bytes[end], b'0'..=b'9' | b'.' | b'_') {
        end += 1;
    }
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp = end + 1;
        if exp < bytes.len() && matches!(bytes[exp], b'+' | b'-') {
            exp += 1;
        }
        if exp < bytes.len() && bytes[exp].is_ascii_digit() {
            end = exp;
            while end < bytes.len() && matches!(bytes[end], b'0'..=b'9' | b'_') {
                end += 1;
            }
        }
    }
    end
}

fn parse_number(literal: &str, offset: usize) -> Result<f64, ExprError> {
    let bytes = literal.as_bytes();
    // Underscores may only separate two digits.
    for (i, b) in bytes.iter().enumerate() {
        if *b == b'_' {
            let before = i.checked_sub(1).map(|j| bytes[j]);
            let after = bytes.get(i + 1).copied();
            if !before.is_some_and(|b| b.is_ascii_digit())
                || !after.is_some_and(|b| b.is_ascii_digit())
            {
                return Err(ExprError::InvalidNumber { offset });
            }
        }
    }
    literal
        .replace('_', "")
        .parse()
        .map_err(|_| ExprError::InvalidNumber { offset })
}

struct Parser<'a> {
    tokens: &'a [(Token, usize)],
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<&(Token, usize)> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<(Token, usize)> {
        let token = self.tokens.get(self.pos).copied();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn next_op(&mut self, ops: &[(Token, BinaryOp)]) -> Option<BinaryOp> {
        let &(token, _) = self.peek()?;
        let op = ops.iter().find(|(t, _)| *t == token).map(|(_, op)| *op)?;
        self.pos += 1;
        Some(op)
    }

    fn parse_expr(&mut self) -> Result<Expr, ExprError> {
        const OPS: [(Token, BinaryOp); 2] =
            [(Token::Plus, BinaryOp::Add), (Token::Minus, BinaryOp::Sub)];
        let mut lhs = self.parse_term()?;
        while let Some(op) = self.next_op(&OPS) {
            let rhs = self.parse_term()?;
            lhs = Expr::binary(op, lhs, rhs);
        }
        Ok(lhs)
    }

    fn parse_term(&mut self) -> Result<Expr, ExprError> {
        const OPS: [(Token, BinaryOp); 2] =
            [(Token::Star, BinaryOp::Mul), (Token::Slash, BinaryOp::Div)];
        let mut lhs = self.parse_factor()?;
        while let Some(op) = self.next_op(&OPS) {
            let rhs = self.parse_factor()?;
            lhs = Expr::binary(op, lhs, rhs);
        }
        Ok(lhs)
    }

    fn parse_factor(&mut self) -> Result<Expr, ExprError> {
        match self.next() {
            Some((Token::Plus, _)) => self.parse_factor(),
            Some((Token::Minus, _)) => Ok(Expr::Negate(Box::new(self.parse_factor()?))),
            Some((Token::Number(value), _)) => Ok(Expr::Number(value)),
            Some((Token::LParen, _)) => {
                let inner = self.parse_expr()?;
                match self.next() {
                    Some((Token::RParen, _)) => Ok(inner),
                    Some((token, offset)) => Err(ExprError::UnexpectedToken {
                        token: token.kind(),
                        offset,
                    }),
                    None => Err(ExprError::UnexpectedEnd),
                }
            }
            Some((token, offset)) => Err(ExprError::UnexpectedToken {
                token: token.kind(),
                offset,
            }),
            None => Err(ExprError::UnexpectedEnd),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literals() {
        assert_eq!(evaluate("24").unwrap(), 24.0);
        assert_eq!(evaluate("  1.5 ").unwrap(), 1.5);
        assert_eq!(evaluate(".5").unwrap(), 0.5);
        assert_eq!(evaluate("2.").unwrap(), 2.0);
        assert_eq!(evaluate("2e3").unwrap(), 2000.0);
        assert_eq!(evaluate("2.5E-1").unwrap(), 0.25);
        assert_eq!(evaluate("1_000").unwrap(), 1000.0);
    }

    #[test]
    fn test_precedence_and_associativity() {
        assert_eq!(evaluate("24*60").unwrap(), 1440.0);
        assert_eq!(evaluate("1 + 2 * 3").unwrap(), 7.0);
        assert_eq!(evaluate("(1 + 2) * 3").unwrap(), 9.0);
        assert_eq!(evaluate("10 - 4 - 3").unwrap(), 3.0);
        assert_eq!(evaluate("64 / 4 / 2").unwrap(), 8.0);
        assert_eq!(evaluate("10 / 4").unwrap(), 2.5);
    }

    #[test]
    fn test_unary_signs() {
        assert_eq!(evaluate("-5").unwrap(), -5.0);
        assert_eq!(evaluate("+5").unwrap(), 5.0);
        assert_eq!(evaluate("--5").unwrap(), 5.0);
        assert_eq!(evaluate("2 * -3").unwrap(), -6.0);
        assert_eq!(evaluate("-(2 + 3)").unwrap(), -5.0);
    }

    #[test]
    fn test_display_is_fully_parenthesized() {
        let expr = parse("1 - -2 * (3 + 4)").unwrap();
        assert_eq!(expr.to_string(), "(1 - ((-2) * (3 + 4)))");
    }

    #[test]
    fn test_syntax_errors() {
        assert_eq!(parse(""), Err(ExprError::Empty));
        assert_eq!(parse("   "), Err(ExprError::Empty));
        assert_eq!(parse("1 +"), Err(ExprError::UnexpectedEnd));
        assert_eq!(parse("(1 + 2"), Err(ExprError::UnexpectedEnd));
        assert_eq!(
            parse("1 2"),
            Err(ExprError::UnexpectedToken {
                token: TokenKind::Number,
                offset: 2
            })
        );
        assert_eq!(
            parse("(1))"),
            Err(ExprError::UnexpectedToken {
                token: TokenKind::RParen,
                offset: 3
            })
        );
        assert_eq!(
            parse("* 2"),
            Err(ExprError::UnexpectedToken {
                token: TokenKind::Star,
                offset: 0
            })
        );
    }

    #[test]
    fn test_rejects_anything_but_arithmetic() {
        assert_eq!(
            parse("__import__('os')"),
            Err(ExprError::UnexpectedChar { ch: '_', offset: 0 })
        );
        assert_eq!(
            parse("2 ** 3"),
            Err(ExprError::UnexpectedToken {
                token: TokenKind::Star,
                offset: 3
            })
        );
        assert_eq!(
            parse("abc"),
            Err(ExprError::UnexpectedChar { ch: 'a', offset: 0 })
        );
        assert_eq!(
            parse("1e"),
            Err(ExprError::UnexpectedChar { ch: 'e', offset: 1 })
        );
        assert_eq!(
            parse("1 × 2"),
            Err(ExprError::UnexpectedChar { ch: '×', offset: 2 })
        );
    }

    #[test]
    fn test_invalid_numbers() {
        assert_eq!(parse("1.2.3"), Err(ExprError::InvalidNumber { offset: 0 }));
        assert_eq!(parse("."), Err(ExprError::InvalidNumber { offset: 0 }));
        assert_eq!(parse("2 + 1__0"), Err(ExprError::InvalidNumber { offset: 4 }));
        assert_eq!(parse("1_"), Err(ExprError::InvalidNumber { offset: 0 }));
        assert_eq!(parse("1_.5"), Err(ExprError::InvalidNumber { offset: 0 }));
    }

    #[test]
    fn test_evaluation_errors() {
        assert_eq!(evaluate("1 / 0"), Err(ExprError::DivisionByZero));
        assert_eq!(evaluate("1 / (2 - 2)"), Err(ExprError::DivisionByZero));
        assert_eq!(evaluate("1e308 * 10"), Err(ExprError::NonFinite));
    }

    #[test]
    fn test_length_limit() {
        let long = "1+".repeat(MAX_INPUT_LEN) + "1";
        assert_eq!(
            parse(&long),
            Err(ExprError::TooLong { max: MAX_INPUT_LEN })
        );

        let nested = format!("{}1{}", "(".repeat(100), ")".repeat(100));
        assert_eq!(evaluate(&nested).unwrap(), 1.0);
    }

    #[test]
    fn test_evaluate_integer_truncates_toward_zero() {
        assert_eq!(evaluate_integer("24").unwrap(), 24);
        assert_eq!(evaluate_integer("10 / 4").unwrap(), 2);
        assert_eq!(evaluate_integer("0.9").unwrap(), 0);
        assert_eq!(evaluate_integer("-0.9").unwrap(), 0);
        assert_eq!(evaluate_integer("-7 / 2").unwrap(), -3);
        assert_eq!(evaluate_integer("1e300"), Err(ExprError::OutOfRange));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ExprError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            ExprError::UnexpectedChar { ch: 'x', offset: 3 }.to_string(),
            "unexpected character 'x' at offset 3"
        );
        assert_eq!(
            ExprError::UnexpectedToken {
                token: TokenKind::RParen,
                offset: 1
            }
            .to_string(),
            "unexpected ')' at offset 1"
        );
    }
}

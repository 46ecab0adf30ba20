//! Arithmetic over the sequence index: `2i+1`, `(i+1)*3`, `i/2`.
//!
//! Expressions are normalized (blanks stripped, implicit multiplication such
//! as `2i` or `i2` made explicit), parsed once into an [`IndexProgram`], and
//! then evaluated in `f64` for any number of indices. The result is rounded
//! to the nearest integer, ties to even.

use super::format_index;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq)]
enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

#[derive(Debug, Clone, PartialEq)]
enum Expr {
    Index,
    Number(f64),
    Neg(Box<Expr>),
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Number(f64),
    Index,
    Op(BinaryOp),
    LParen,
    RParen,
}

/// A parsed index expression.
///
/// Expressions that fail to parse still produce a program; it evaluates to
/// the index unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexProgram {
    source: String,
    expr: Option<Expr>,
}

impl IndexProgram {
    pub fn compile(source: &str) -> Self {
        let expr = normalize(source)
            .and_then(|normalized| tokenize(&normalized))
            .and_then(|tokens| Parser::new(&tokens).parse());
        if expr.is_none() {
            trace!(expression = source, "index expression rejected, using the raw index");
        }
        Self {
            source: source.to_string(),
            expr,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn is_valid(&self) -> bool {
        self.expr.is_some()
    }

    /// Evaluate for `index`. Invalid programs, non-finite results and
    /// results outside the `i64` range yield `index` itself.
    pub fn eval(&self, index: i64) -> i64 {
        let Some(expr) = &self.expr else {
            return index;
        };
        let value = eval_expr(expr, index as f64).round_ties_even();
        if value.is_finite() && value >= i64::MIN as f64 && value < i64::MAX as f64 {
            value as i64
        } else {
            trace!(expression = %self.source, index, "index expression out of range, using the raw index");
            index
        }
    }

    pub fn render(&self, index: i64, format: Option<&str>) -> String {
        format_index(self.eval(index), format)
    }
}

fn eval_expr(expr: &Expr, index: f64) -> f64 {
    match expr {
        Expr::Index => index,
        Expr::Number(n) => *n,
        Expr::Neg(inner) => -eval_expr(inner, index),
        Expr::Binary { op, left, right } => {
            let (l, r) = (eval_expr(left, index), eval_expr(right, index));
            match op {
                BinaryOp::Add => l + r,
                BinaryOp::Sub => l - r,
                BinaryOp::Mul => l * r,
                BinaryOp::Div => l / r,
            }
        }
    }
}

// ============================================================================
// Normalization and tokens
// ============================================================================

fn is_index_char(c: char) -> bool {
    c == 'i' || c == 'I'
}

/// Strip blanks and make `2i` / `i2` multiplications explicit.
fn normalize(source: &str) -> Option<String> {
    let mut out = String::with_capacity(source.len() + 4);
    let mut previous: Option<char> = None;
    for c in source.chars().filter(|c| !c.is_whitespace()) {
        if let Some(p) = previous {
            let implicit = (p.is_ascii_digit() && is_index_char(c))
                || (is_index_char(p) && c.is_ascii_digit());
            if implicit {
                out.push('*');
            }
        }
        out.push(c);
        previous = Some(c);
    }
    if out.is_empty() { None } else { Some(out) }
}

fn tokenize(normalized: &str) -> Option<Vec<Token>> {
    let chars: Vec<char> = normalized.chars().collect();
    let is_word = |c: Option<&char>| c.is_some_and(|c| c.is_alphanumeric() || *c == '_');
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let token = match c {
            '+' => Token::Op(BinaryOp::Add),
            '-' => Token::Op(BinaryOp::Sub),
            '*' => Token::Op(BinaryOp::Mul),
            '/' => Token::Op(BinaryOp::Div),
            '(' => Token::LParen,
            ')' => Token::RParen,
            // `i` only stands for the index when it is a word of its own.
            'i' | 'I' => {
                if is_word(i.checked_sub(1).and_then(|p| chars.get(p))) || is_word(chars.get(i + 1)) {
                    return None;
                }
                Token::Index
            }
            '0'..='9' | '.' => {
                let len = chars[i..]
                    .iter()
                    .take_while(|c| c.is_ascii_digit() || **c == '.')
                    .count();
                let literal: String = chars[i..i + len].iter().collect();
                if literal == "." || literal.matches('.').count() > 1 {
                    return None;
                }
                tokens.push(Token::Number(literal.parse().ok()?));
                i += len;
                continue;
            }
            _ => return None,
        };
        tokens.push(token);
        i += 1;
    }
    Some(tokens)
}

// ============================================================================
// Recursive-descent parser
// ============================================================================

// Nesting limit for parentheses and unary signs.
const MAX_DEPTH: usize = 64;

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    fn parse(mut self) -> Option<Expr> {
        let expr = self.expression()?;
        if self.pos == self.tokens.len() { Some(expr) } else { None }
    }

    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn expression(&mut self) -> Option<Expr> {
        let mut left = self.term()?;
        while let Some(Token::Op(op @ (BinaryOp::Add | BinaryOp::Sub))) = self.peek() {
            self.pos += 1;
            let right = self.term()?;
            left = Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Some(left)
    }

    fn term(&mut self) -> Option<Expr> {
        let mut left = self.unary()?;
        while let Some(Token::Op(op @ (BinaryOp::Mul | BinaryOp::Div))) = self.peek() {
            self.pos += 1;
            let right = self.unary()?;
            left = Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Some(left)
    }

    fn unary(&mut self) -> Option<Expr> {
        if self.depth >= MAX_DEPTH {
            return None;
        }
        self.depth += 1;
        let expr = self.signed();
        self.depth -= 1;
        expr
    }

    fn signed(&mut self) -> Option<Expr> {
        match self.peek()? {
            Token::Op(BinaryOp::Sub) => {
                self.pos += 1;
                Some(Expr::Neg(Box::new(self.unary()?)))
            }
            Token::Op(BinaryOp::Add) => {
                self.pos += 1;
                self.unary()
            }
            _ => self.primary(),
        }
    }

    fn primary(&mut self) -> Option<Expr> {
        let token = self.peek()?;
        self.pos += 1;
        match token {
            Token::Number(n) => Some(Expr::Number(n)),
            Token::Index => Some(Expr::Index),
            Token::LParen => {
                let inner = self.expression()?;
                match self.peek()? {
                    Token::RParen => {
                        self.pos += 1;
                        Some(inner)
                    }
                    _ => None,
                }
            }
            Token::Op(_) | Token::RParen => None,
        }
    }
}

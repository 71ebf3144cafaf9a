//! 白名單算式計算器。
//!
//! 只接受數字、空白與 `+ - * / ( ) .`，全部以 f64 計算；
//! 除以零或非有限結果視為錯誤。

use crate::utils::error::{DemoError, Result};
use std::iter::Peekable;
use std::str::Chars;

const MAX_DEPTH: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    LeftParen,
    RightParen,
}

fn is_allowed(ch: char) -> bool {
    ch.is_ascii_digit() || ch.is_whitespace() || "+-*/().".contains(ch)
}

/// 驗證並計算算式，任何失敗都回傳 None
pub fn evaluate_expression(input: &str) -> Option<f64> {
    match try_evaluate_expression(input) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::debug!("Expression '{}' rejected: {}", input, e);
            None
        }
    }
}

pub fn try_evaluate_expression(input: &str) -> Result<f64> {
    if input.trim().is_empty() {
        return Err(DemoError::expression("expression is empty"));
    }

    if let Some(ch) = input.chars().find(|ch| !is_allowed(*ch)) {
        return Err(DemoError::expression(format!(
            "character '{}' is not allowed",
            ch
        )));
    }

    let tokens = tokenize(input)?;
    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
    };
    let value = parser.parse_sum()?;

    if let Some(token) = parser.peek() {
        return Err(DemoError::expression(format!(
            "unexpected token {:?} at position {}",
            token, parser.pos
        )));
    }

    if !value.is_finite() {
        return Err(DemoError::expression("result is not a finite number"));
    }

    Ok(value)
}

fn tokenize(input: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();

    while let Some(&ch) = chars.peek() {
        match ch {
            c if c.is_whitespace() => {
                chars.next();
            }
            '0'..='9' | '.' => tokens.push(Token::Number(consume_number(&mut chars)?)),
            '+' => {
                chars.next();
                tokens.push(Token::Plus);
            }
            '-' => {
                chars.next();
                tokens.push(Token::Minus);
            }
            '*' => {
                chars.next();
                tokens.push(Token::Star);
            }
            '/' => {
                chars.next();
                tokens.push(Token::Slash);
            }
            '(' => {
                chars.next();
                tokens.push(Token::LeftParen);
            }
            ')' => {
                chars.next();
                tokens.push(Token::RightParen);
            }
            other => {
                return Err(DemoError::expression(format!(
                    "unexpected character '{}'",
                    other
                )))
            }
        }
    }

    Ok(tokens)
}

fn consume_number(chars: &mut Peekable<Chars<'_>>) -> Result<f64> {
    let mut literal = String::new();
    while let Some(&ch) = chars.peek() {
        if ch.is_ascii_digit() || ch == '.' {
            literal.push(ch);
            chars.next();
        } else {
            break;
        }
    }

    // str::parse 固定使用 '.' 作為小數點，與系統語系無關
    literal
        .parse::<f64>()
        .map_err(|_| DemoError::expression(format!("invalid number '{}'", literal)))
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
}

impl Parser {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.peek();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    // sum := product (('+' | '-') product)*
    fn parse_sum(&mut self) -> Result<f64> {
        let mut value = self.parse_product()?;
        loop {
            match self.peek() {
                Some(Token::Plus) => {
                    self.next();
                    value += self.parse_product()?;
                }
                Some(Token::Minus) => {
                    self.next();
                    value -= self.parse_product()?;
                }
                _ => return Ok(value),
            }
        }
    }

    // product := unary (('*' | '/') unary)*
    fn parse_product(&mut self) -> Result<f64> {
        let mut value = self.parse_unary()?;
        loop {
            match self.peek() {
                Some(Token::Star) => {
                    self.next();
                    value *= self.parse_unary()?;
                }
                Some(Token::Slash) => {
                    self.next();
                    let divisor = self.parse_unary()?;
                    if divisor == 0.0 {
                        return Err(DemoError::expression("division by zero"));
                    }
                    value /= divisor;
                }
                _ => return Ok(value),
            }
        }
    }

    // 一元運算與括號都會遞迴，超過上限直接拒絕以免堆疊溢位
    fn enter(&mut self) -> Result<()> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(DemoError::expression("expression nested too deeply"));
        }
        Ok(())
    }

    fn parse_unary(&mut self) -> Result<f64> {
        self.enter()?;
        let value = match self.peek() {
            Some(Token::Minus) => {
                self.next();
                self.parse_unary().map(|v| -v)
            }
            Some(Token::Plus) => {
                self.next();
                self.parse_unary()
            }
            _ => self.parse_primary(),
        };
        self.depth -= 1;
        value
    }

    fn parse_primary(&mut self) -> Result<f64> {
        match self.next() {
            Some(Token::Number(value)) => Ok(value),
            Some(Token::LeftParen) => {
                self.enter()?;
                let value = self.parse_sum()?;
                self.depth -= 1;
                match self.next() {
                    Some(Token::RightParen) => Ok(value),
                    _ => Err(DemoError::expression("missing closing parenthesis")),
                }
            }
            Some(token) => Err(DemoError::expression(format!(
                "unexpected token {:?}",
                token
            ))),
            None => Err(DemoError::expression("unexpected end of expression")),
        }
    }
}

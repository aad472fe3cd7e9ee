use std::fmt::Debug;

use crate::{
    ast::Ast,
    error::NoMatch,
    logging::Loggable,
    parser::{Match, ParseResult, Parser},
    util,
};

#[inline]
fn single_char<'a, F>(
    input: &'a str,
    mut pred: F,
    action: &'static str,
    args: &dyn Debug,
) -> ParseResult<'a>
where
    F: FnMut(char) -> bool,
{
    input.log_inputs(action, args);
    match util::split_first_char(input) {
        Some((c, head, tail)) if pred(c) => {
            input.log_success_with_result(action, args, head);
            Ok(Match::new(tail, head, Some(Ast::Text(head))))
        }
        _ => {
            let e = NoMatch;
            input.log_failure(action, args, &e);
            Err(e)
        }
    }
}

/// Matches a literal token.
#[derive(Debug, Clone)]
pub struct Literal {
    tok: String,
}

impl Parser for Literal {
    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a> {
        // "" means always match, and contributes no ast
        if self.tok.is_empty() {
            input.log_success("string", "");
            return Ok(Match::empty(input));
        }
        input.log_inputs("string", &self.tok);
        match input.strip_prefix(self.tok.as_str()) {
            Some(rest) => {
                let parsed = util::consumed(input, rest);
                input.log_success("string", &self.tok);
                Ok(Match::new(rest, parsed, Some(Ast::Text(parsed))))
            }
            None => {
                let e = NoMatch;
                input.log_failure("string", &self.tok, &e);
                Err(e)
            }
        }
    }

    fn describe(&self, indent: &str) -> String {
        format!("{indent}string({:?})", self.tok)
    }
}

/// A literal token. `string("")` always succeeds, consuming nothing, with no ast.
pub fn string(tok: impl Into<String>) -> Literal {
    Literal { tok: tok.into() }
}

/// One character accepted by a predicate.
#[derive(Clone)]
pub struct Satisfy<F> {
    name: &'static str,
    pred: F,
}

impl<F> Parser for Satisfy<F>
where
    F: Fn(char) -> bool,
{
    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a> {
        single_char(input, &self.pred, self.name, &"")
    }

    fn describe(&self, indent: &str) -> String {
        format!("{indent}{}", self.name)
    }
}

/// One character accepted by `pred`. The ast is the character as text.
pub fn satisfy<F>(pred: F) -> Satisfy<F>
where
    F: Fn(char) -> bool,
{
    Satisfy {
        name: "satisfy",
        pred,
    }
}

/// One ascii letter, `[a-zA-Z]`.
pub fn letter() -> Satisfy<fn(char) -> bool> {
    Satisfy {
        name: "letter",
        pred: |c: char| c.is_ascii_alphabetic(),
    }
}

/// One ascii digit, `[0-9]`.
pub fn digit() -> Satisfy<fn(char) -> bool> {
    Satisfy {
        name: "digit",
        pred: |c: char| c.is_ascii_digit(),
    }
}

/// One character from (or not from) a set.
///
/// Every character of the set is taken literally: `]`, `^`, `\` and `-` have no special
/// meaning, so `one_of("a-z")` matches exactly `a`, `-` or `z`.
#[derive(Debug, Clone)]
pub struct OneOf {
    chars: Vec<char>,
    negate: bool,
}

impl Parser for OneOf {
    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a> {
        let action = if self.negate { "none_of" } else { "one_of" };
        single_char(
            input,
            |c| self.chars.contains(&c) != self.negate,
            action,
            &self.chars,
        )
    }

    fn describe(&self, indent: &str) -> String {
        let action = if self.negate { "none_of" } else { "one_of" };
        let set: String = self.chars.iter().collect();
        format!("{indent}{action}({set:?})")
    }
}

pub fn one_of(chars: &str) -> OneOf {
    OneOf {
        chars: chars.chars().collect(),
        negate: false,
    }
}

/// Fails on empty input, like every single character parser.
pub fn none_of(chars: &str) -> OneOf {
    OneOf {
        chars: chars.chars().collect(),
        negate: true,
    }
}

/// Zero or more whitespace characters. Always succeeds, no ast.
#[derive(Debug, Clone, Copy, Default)]
pub struct Whitespace;

impl Parser for Whitespace {
    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a> {
        let rest = input.trim_start();
        input.log_success("ws", "");
        Ok(Match::new(rest, util::consumed(input, rest), None))
    }

    fn describe(&self, indent: &str) -> String {
        format!("{indent}ws")
    }
}

pub fn ws() -> Whitespace {
    Whitespace
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EndOfInput;

impl Parser for EndOfInput {
    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a> {
        if input.is_empty() {
            input.log_success("eoi", "");
            Ok(Match::empty(input))
        } else {
            let e = NoMatch;
            input.log_failure("eoi", "", &e);
            Err(e)
        }
    }

    fn describe(&self, indent: &str) -> String {
        format!("{indent}end_of_input")
    }
}

/// Succeeds only when nothing is left to parse.
pub fn end_of_input() -> EndOfInput {
    EndOfInput
}

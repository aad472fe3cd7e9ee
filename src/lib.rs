#![warn(clippy::all)]
#![warn(clippy::correctness)]
#![warn(clippy::style)]
#![warn(clippy::complexity)]
#![warn(clippy::perf)]
//! Small parser combinators over `&str`.
//!
//! A parser consumes a prefix of its input and returns a [`Match`] (what is left, what was
//! consumed, and an optional [`Ast`]) or [`NoMatch`]. Larger parsers are built by combining
//! smaller ones with [`and!`], [`or!`], [`many`], [`many1`], [`sep_by`], [`make_str`] and [`ret`].
//!
//! ```
//! use prefixcomb::prelude::*;
//!
//! let ident = and![letter(), many(or![letter(), digit()])];
//! let m = ident.parse("a1b2 rest").unwrap();
//! assert_eq!(m.parsed, "a1b2");
//! assert_eq!(m.rest, " rest");
//! // the repetition contributes one nested list
//! let ast = m.ast.unwrap();
//! assert_eq!(ast, Ast::list(vec![Ast::Text("a"), Ast::list(["1", "b", "2"])]));
//! assert_eq!(ast.flatten(), Ast::from(vec!["a", "1", "b", "2"]));
//! ```
//!
//! Parsing can be traced with
//! ```sh
//! RUST_LOG=pc=trace cargo test mytest -- --nocapture
//! ```

use std::cell::Cell;

mod ast;
mod combo;
mod error;
mod logging;
mod parser;
mod text_parser;
mod util;

pub mod prelude;

#[cfg(feature = "cookbook")]
pub mod cookbook;

pub(crate) const LOG_TARGET: &str = "pc";

thread_local!(pub(crate) static LABEL: Cell<&'static str> = Cell::new(""));

pub use crate::ast::Ast;
pub use crate::combo::{
    and, label, lazy, make_str, many, many1, optional, or, ret, sep_by, And, Label, Lazy, MakeStr,
    Many, Many1, Optional, Or, Ret, SepBy,
};
pub use crate::error::{GrammarError, NoMatch, Recoverable};
pub use crate::parser::{from_fn, BoxedParser, Match, ParseResult, Parser, ParserExt};
pub use crate::text_parser::{
    digit, end_of_input, letter, none_of, one_of, satisfy, string, ws, EndOfInput, Literal, OneOf,
    Satisfy, Whitespace,
};

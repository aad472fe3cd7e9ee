pub use crate::{and, or};

pub use crate::{
    digit, end_of_input, from_fn, label, lazy, letter, make_str, many, many1, none_of, one_of,
    optional, ret, satisfy, sep_by, string, ws,
};

pub use crate::{
    And, Ast, BoxedParser, GrammarError, Match, NoMatch, Or, ParseResult, Parser, ParserExt,
    Recoverable,
};

use std::fmt;

use crate::ast::Ast;
use crate::combo::{Label, MakeStr, Many, Many1, Optional, Ret, SepBy};
use crate::error::NoMatch;
use crate::logging::Loggable;

pub type ParseResult<'a> = Result<Match<'a>, NoMatch>;

/// A successful parse.
///
/// `parsed` is exactly the consumed prefix of the input, and `rest` the unconsumed suffix,
/// so `parsed + rest == input` always holds.
#[derive(Debug, Clone, PartialEq)]
pub struct Match<'a> {
    pub rest: &'a str,
    pub parsed: &'a str,
    pub ast: Option<Ast<'a>>,
}

impl<'a> Match<'a> {
    #[inline]
    pub fn new(rest: &'a str, parsed: &'a str, ast: Option<Ast<'a>>) -> Self {
        Self { rest, parsed, ast }
    }

    /// succeed without consuming anything or contributing an ast
    #[inline]
    pub fn empty(input: &'a str) -> Self {
        Self {
            rest: input,
            parsed: &input[..0],
            ast: None,
        }
    }
}

impl fmt::Display for Match<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Match(parsed={:?}, rest={:?}, ast=", self.parsed, self.rest)?;
        match &self.ast {
            Some(ast) => write!(f, "{ast})"),
            None => write!(f, "null)"),
        }
    }
}

pub(crate) fn type_suffix(type_name: &str) -> &str {
    let type_name = type_name.split('<').next().unwrap_or(type_name);
    if let Some(i) = type_name.rfind("::") {
        &type_name[i + 2..]
    } else {
        type_name
    }
}

/// The uniform parser contract: consume a prefix of `input` and produce a [`Match`],
/// or fail with [`NoMatch`].
///
/// Implementations must be pure: the outcome depends only on `input`.
///
/// Any function or closure `for<'a> Fn(&'a str) -> ParseResult<'a>` is a parser.
/// Closures sometimes need help inferring that signature, see [`from_fn`].
pub trait Parser {
    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a>;

    /// A printable tree of the parser and its children, for debugging grammars.
    fn describe(&self, indent: &str) -> String {
        format!(
            "{indent}{name}",
            name = type_suffix(std::any::type_name::<Self>())
        )
    }
}

impl<F> Parser for F
where
    F: for<'a> Fn(&'a str) -> ParseResult<'a>,
{
    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a> {
        (self)(input)
    }

    fn describe(&self, indent: &str) -> String {
        format!(
            "{indent}fn {func}",
            func = type_suffix(std::any::type_name::<F>())
        )
    }
}

/// Pins a closure to the parser signature so that lifetimes are inferred correctly.
///
/// ```
/// use prefixcomb::prelude::*;
///
/// let two = from_fn(|s| match s.get(..2) {
///     Some(p) if p.len() == 2 => Ok(Match::new(&s[2..], p, Some(Ast::Text(p)))),
///     _ => Err(NoMatch),
/// });
/// assert_eq!(two.parse("abc").unwrap().rest, "c");
/// ```
pub fn from_fn<F>(f: F) -> F
where
    F: for<'a> Fn(&'a str) -> ParseResult<'a>,
{
    f
}

/// An owned, type-erased parser, so parsers of different types can share a sequence or
/// alternation.
pub struct BoxedParser(Box<dyn Parser + Send + Sync>);

impl BoxedParser {
    pub fn new<P>(parser: P) -> Self
    where
        P: Parser + Send + Sync + 'static,
    {
        Self(Box::new(parser))
    }
}

impl Parser for BoxedParser {
    #[inline]
    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a> {
        self.0.parse(input)
    }

    fn describe(&self, indent: &str) -> String {
        self.0.describe(indent)
    }
}

impl fmt::Debug for BoxedParser {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "BoxedParser({})", self.0.describe("").trim())
    }
}

/// Method-chaining forms of the combinators.
pub trait ParserExt: Parser + Sized {
    fn boxed(self) -> BoxedParser
    where
        Self: Send + Sync + 'static,
    {
        BoxedParser::new(self)
    }

    /// see [`make_str`](crate::make_str)
    fn capture(self) -> MakeStr<Self> {
        MakeStr::new(self)
    }

    /// see [`ret`](crate::ret)
    fn map<F>(self, transform: F) -> Ret<Self, F>
    where
        F: for<'a> Fn(Option<Ast<'a>>) -> Option<Ast<'a>>,
    {
        Ret::new(self, transform)
    }

    fn many(self) -> Many<Self> {
        Many::new(self)
    }

    fn many1(self) -> Many1<Self> {
        Many1::new(self)
    }

    fn sep_by<S: Parser>(self, separator: S) -> SepBy<Self, S> {
        SepBy::new(self, separator)
    }

    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }

    fn label(self, name: &'static str) -> Label<Self> {
        Label::new(name, self)
    }

    /// Parse, insisting that the whole input is consumed.
    fn parse_complete<'a>(&self, input: &'a str) -> ParseResult<'a> {
        let m = self.parse(input)?;
        if m.rest.is_empty() {
            Ok(m)
        } else {
            let e = NoMatch;
            m.rest.log_failure("parse_complete", "unconsumed input", &e);
            Err(e)
        }
    }
}

impl<P: Parser> ParserExt for P {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;
    use test_log::test;

    fn two_chars(s: &str) -> ParseResult<'_> {
        match s.char_indices().nth(2) {
            Some((i, _)) => Ok(Match::new(&s[i..], &s[..i], Some(Ast::Text(&s[..i])))),
            None if s.chars().count() == 2 => Ok(Match::new("", s, Some(Ast::Text(s)))),
            None => Err(NoMatch),
        }
    }

    #[test]
    fn test_functions_are_parsers() {
        let m = two_chars.parse("abc").unwrap();
        assert_eq!(m, Match::new("c", "ab", Some(Ast::Text("ab"))));
        assert_eq!(two_chars.parse("a"), Err(NoMatch));

        let boxed = two_chars.boxed();
        assert_eq!(boxed.parse("xy").unwrap().rest, "");

        let closure = from_fn(|s| digit().parse(s).map(|m| Match { ast: None, ..m }));
        assert_eq!(closure.parse("1x").unwrap(), Match::new("x", "1", None));
    }

    #[test]
    fn test_parse_complete() {
        assert!(digit().many1().parse_complete("123").is_ok());
        assert_eq!(digit().many1().parse_complete("12a"), Err(NoMatch));
    }

    #[test]
    fn test_describe() {
        let p = crate::and![letter(), many(or![letter(), digit()])];
        let tree = p.describe("");
        println!("{tree}");
        assert!(tree.starts_with("and"));
        assert!(tree.contains("many"));
        assert!(tree.contains("or"));
        assert!(format!("{:?}", p.boxed()).starts_with("BoxedParser(and"));
    }

    #[test]
    fn test_match_display() {
        let m = string("ab").parse("abc").unwrap();
        assert_eq!(m.to_string(), r#"Match(parsed="ab", rest="c", ast="ab")"#);
        assert_eq!(Match::empty("x").to_string(), r#"Match(parsed="", rest="x", ast=null)"#);
    }
}

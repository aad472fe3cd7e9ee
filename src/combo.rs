use once_cell::sync::OnceCell;

use crate::{
    ast::Ast,
    error::{GrammarError, NoMatch},
    logging::Loggable,
    parser::{BoxedParser, Match, ParseResult, Parser, ParserExt},
    util, LABEL,
};

fn child(p: &impl Parser, indent: &str) -> String {
    let indent = indent.replace("└──", "|  ");
    p.describe(&format!("{indent}└──"))
}

fn children<'p>(ps: impl IntoIterator<Item = &'p BoxedParser>, indent: &str) -> String {
    ps.into_iter()
        .map(|p| child(p, indent))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Runs each parser in order against what the previous one left.
///
/// Fails as soon as any parser fails, consuming nothing. On success the ast is the list of
/// the children's asts, skipping children that produced none.
pub struct And {
    parsers: Vec<BoxedParser>,
}

impl And {
    pub fn new(parsers: impl IntoIterator<Item = BoxedParser>) -> Result<Self, GrammarError> {
        let parsers: Vec<_> = parsers.into_iter().collect();
        if parsers.is_empty() {
            return Err(GrammarError::EmptySequence);
        }
        Ok(Self { parsers })
    }

    /// Infallible: a first parser is always present. Used by the [`and!`](crate::and!) macro.
    pub fn from_parts(first: BoxedParser, rest: Vec<BoxedParser>) -> Self {
        let mut parsers = Vec::with_capacity(rest.len() + 1);
        parsers.push(first);
        parsers.extend(rest);
        Self { parsers }
    }
}

impl Parser for And {
    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a> {
        input.log_inputs("and", self.parsers.len());
        let mut rest = input;
        let mut asts = Vec::with_capacity(self.parsers.len());
        for p in &self.parsers {
            let m = match p.parse(rest) {
                Ok(m) => m,
                Err(e) => {
                    input.log_failure("and", self.parsers.len(), &e);
                    return Err(e);
                }
            };
            asts.extend(m.ast);
            rest = m.rest;
        }
        let parsed = util::consumed(input, rest);
        input.log_success_with_result("and", self.parsers.len(), parsed);
        Ok(Match::new(rest, parsed, Some(Ast::List(asts))))
    }

    fn describe(&self, indent: &str) -> String {
        format!("{indent}and\n{}", children(&self.parsers, indent))
    }
}

/// Sequence of one or more parsers. See [`And`].
///
/// Errors with [`GrammarError::EmptySequence`] if given no parsers.
pub fn and(parsers: impl IntoIterator<Item = BoxedParser>) -> Result<And, GrammarError> {
    And::new(parsers)
}

/// Ordered choice: the first candidate to succeed on the input wins.
///
/// Each candidate sees the original input. There is no backtracking into a candidate that
/// has already succeeded.
pub struct Or {
    candidates: Vec<BoxedParser>,
}

impl Or {
    pub fn new(candidates: impl IntoIterator<Item = BoxedParser>) -> Result<Self, GrammarError> {
        let candidates: Vec<_> = candidates.into_iter().collect();
        if candidates.is_empty() {
            return Err(GrammarError::EmptyAlternation);
        }
        Ok(Self { candidates })
    }

    /// Infallible: a first candidate is always present. Used by the [`or!`](crate::or!) macro.
    pub fn from_parts(first: BoxedParser, rest: Vec<BoxedParser>) -> Self {
        let mut candidates = Vec::with_capacity(rest.len() + 1);
        candidates.push(first);
        candidates.extend(rest);
        Self { candidates }
    }
}

impl Parser for Or {
    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a> {
        input.log_inputs("or", self.candidates.len());
        for (i, p) in self.candidates.iter().enumerate() {
            if let Ok(m) = p.parse(input) {
                input.log_success("or", i);
                return Ok(m);
            }
        }
        let e = NoMatch;
        input.log_failure("or", self.candidates.len(), &e);
        Err(e)
    }

    fn describe(&self, indent: &str) -> String {
        format!("{indent}or\n{}", children(&self.candidates, indent))
    }
}

/// First successful candidate. See [`Or`].
///
/// Errors with [`GrammarError::EmptyAlternation`] if given no candidates.
pub fn or(candidates: impl IntoIterator<Item = BoxedParser>) -> Result<Or, GrammarError> {
    Or::new(candidates)
}

/// Applies `parser` repeatedly, returning the number of matches, the rest, and the collected
/// asts. A match that consumes nothing ends the repetition and is discarded, otherwise it
/// would repeat forever.
fn repeat<'a, P: Parser + ?Sized>(parser: &P, input: &'a str) -> (usize, &'a str, Vec<Ast<'a>>) {
    let mut count = 0;
    let mut rest = input;
    let mut asts = vec![];
    while let Ok(m) = parser.parse(rest) {
        if m.parsed.is_empty() {
            rest.log_success("repeat: zero width match, stopping", count);
            break;
        }
        asts.extend(m.ast);
        rest = m.rest;
        count += 1;
    }
    (count, rest, asts)
}

/// Zero or more. Always succeeds; with no matches the ast is `None`.
pub struct Many<P> {
    inner: P,
}

impl<P> Many<P> {
    pub fn new(inner: P) -> Self {
        Self { inner }
    }
}

impl<P: Parser> Parser for Many<P> {
    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a> {
        input.log_inputs("many", "");
        let (count, rest, asts) = repeat(&self.inner, input);
        input.log_success("many", count);
        if count == 0 {
            return Ok(Match::empty(input));
        }
        Ok(Match::new(rest, util::consumed(input, rest), Some(Ast::List(asts))))
    }

    fn describe(&self, indent: &str) -> String {
        format!("{indent}many\n{}", child(&self.inner, indent))
    }
}

pub fn many<P: Parser>(parser: P) -> Many<P> {
    Many::new(parser)
}

/// One or more. Fails unless the first application succeeds.
pub struct Many1<P> {
    inner: P,
}

impl<P> Many1<P> {
    pub fn new(inner: P) -> Self {
        Self { inner }
    }
}

impl<P: Parser> Parser for Many1<P> {
    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a> {
        input.log_inputs("many1", "");
        let (count, rest, asts) = repeat(&self.inner, input);
        if count == 0 {
            let e = NoMatch;
            input.log_failure("many1", count, &e);
            return Err(e);
        }
        input.log_success("many1", count);
        Ok(Match::new(rest, util::consumed(input, rest), Some(Ast::List(asts))))
    }

    fn describe(&self, indent: &str) -> String {
        format!("{indent}many1\n{}", child(&self.inner, indent))
    }
}

pub fn many1<P: Parser>(parser: P) -> Many1<P> {
    Many1::new(parser)
}

/// A list of values separated by separators, eg `1,2,3`.
///
/// The ast is flat, `[v0, s1, v1, s2, v2, ..]`, keeping the separators' asts.
/// No first value is still a success: nothing is consumed and the ast is `None`.
/// A trailing separator without a value after it is left unconsumed.
pub struct SepBy<V, S> {
    value: V,
    separator: S,
}

impl<V, S> SepBy<V, S> {
    pub fn new(value: V, separator: S) -> Self {
        Self { value, separator }
    }

    // one (separator, value) pair, as `and` would run it
    fn pair<'a>(&self, input: &'a str) -> Option<(Match<'a>, Match<'a>)>
    where
        V: Parser,
        S: Parser,
    {
        let sep = self.separator.parse(input).ok()?;
        let value = self.value.parse(sep.rest).ok()?;
        Some((sep, value))
    }
}

impl<V: Parser, S: Parser> Parser for SepBy<V, S> {
    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a> {
        input.log_inputs("sep_by", "");
        let Ok(first) = self.value.parse(input) else {
            input.log_success("sep_by", "empty list");
            return Ok(Match::empty(input));
        };
        let mut asts: Vec<Ast<'a>> = first.ast.into_iter().collect();
        let mut rest = first.rest;
        while let Some((sep, value)) = self.pair(rest) {
            if sep.parsed.is_empty() && value.parsed.is_empty() {
                break;
            }
            asts.extend(sep.ast);
            asts.extend(value.ast);
            rest = value.rest;
        }
        let parsed = util::consumed(input, rest);
        input.log_success_with_result("sep_by", asts.len(), parsed);
        Ok(Match::new(rest, parsed, Some(Ast::List(asts))))
    }

    fn describe(&self, indent: &str) -> String {
        format!(
            "{indent}sep_by\n{}\n{}",
            child(&self.value, indent),
            child(&self.separator, indent)
        )
    }
}

pub fn sep_by<V: Parser, S: Parser>(value: V, separator: S) -> SepBy<V, S> {
    SepBy::new(value, separator)
}

/// Replaces the ast with the consumed text, or `None` if nothing was consumed.
pub struct MakeStr<P> {
    inner: P,
}

impl<P> MakeStr<P> {
    pub fn new(inner: P) -> Self {
        Self { inner }
    }
}

impl<P: Parser> Parser for MakeStr<P> {
    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a> {
        let m = self.inner.parse(input)?;
        let ast = (!m.parsed.is_empty()).then_some(Ast::Text(m.parsed));
        input.log_success_with_result("make_str", "", m.parsed);
        Ok(Match { ast, ..m })
    }

    fn describe(&self, indent: &str) -> String {
        format!("{indent}make_str\n{}", child(&self.inner, indent))
    }
}

pub fn make_str<P: Parser>(parser: P) -> MakeStr<P> {
    MakeStr::new(parser)
}

/// Applies a semantic action to the ast of a successful parse.
pub struct Ret<P, F> {
    inner: P,
    transform: F,
}

impl<P, F> Ret<P, F> {
    pub fn new(inner: P, transform: F) -> Self {
        Self { inner, transform }
    }
}

impl<P, F> Parser for Ret<P, F>
where
    P: Parser,
    F: for<'a> Fn(Option<Ast<'a>>) -> Option<Ast<'a>>,
{
    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a> {
        let m = self.inner.parse(input)?;
        let ast = (self.transform)(m.ast);
        input.log_success_with_result("ret", "", &ast);
        Ok(Match {
            rest: m.rest,
            parsed: m.parsed,
            ast,
        })
    }

    fn describe(&self, indent: &str) -> String {
        format!("{indent}ret\n{}", child(&self.inner, indent))
    }
}

/// `rest` and `parsed` are untouched; only the ast is replaced by `transform(ast)`.
///
/// ```
/// use prefixcomb::prelude::*;
///
/// let number = ret(digit(), |ast| {
///     ast.and_then(|a| a.as_text()?.parse().ok()).map(Ast::Int)
/// });
/// let m = number.parse("5a").unwrap();
/// assert_eq!(m.ast, Some(Ast::Int(5)));
/// assert_eq!(m.rest, "a");
/// ```
pub fn ret<P, F>(parser: P, transform: F) -> Ret<P, F>
where
    P: Parser,
    F: for<'a> Fn(Option<Ast<'a>>) -> Option<Ast<'a>>,
{
    Ret::new(parser, transform)
}

/// Zero or one. Never fails; without a match the ast is `None`.
pub struct Optional<P> {
    inner: P,
}

impl<P> Optional<P> {
    pub fn new(inner: P) -> Self {
        Self { inner }
    }
}

impl<P: Parser> Parser for Optional<P> {
    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a> {
        Ok(self
            .inner
            .parse(input)
            .unwrap_or_else(|_| Match::empty(input)))
    }

    fn describe(&self, indent: &str) -> String {
        format!("{indent}optional\n{}", child(&self.inner, indent))
    }
}

pub fn optional<P: Parser>(parser: P) -> Optional<P> {
    Optional::new(parser)
}

/// Names a sub-grammar in trace output. Has no effect on the parse itself.
pub struct Label<P> {
    name: &'static str,
    inner: P,
}

impl<P> Label<P> {
    pub fn new(name: &'static str, inner: P) -> Self {
        Self { name, inner }
    }
}

// puts the enclosing label back, even if the inner parser unwinds
struct RestoreLabel(&'static str);

impl Drop for RestoreLabel {
    fn drop(&mut self) {
        LABEL.with(|f| f.set(self.0));
    }
}

impl<P: Parser> Parser for Label<P> {
    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a> {
        let _restore = RestoreLabel(LABEL.with(|f| f.replace(self.name)));
        self.inner.parse(input)
    }

    fn describe(&self, indent: &str) -> String {
        format!("{indent}label({})\n{}", self.name, child(&self.inner, indent))
    }
}

pub fn label<P: Parser>(name: &'static str, parser: P) -> Label<P> {
    Label::new(name, parser)
}

/// A parser built on first use, allowing grammars that refer to themselves.
pub struct Lazy<F> {
    init: F,
    cell: OnceCell<BoxedParser>,
}

impl<F, P> Parser for Lazy<F>
where
    F: Fn() -> P,
    P: Parser + Send + Sync + 'static,
{
    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a> {
        self.cell.get_or_init(|| (self.init)().boxed()).parse(input)
    }

    // not forced, a recursive grammar would describe itself forever
    fn describe(&self, indent: &str) -> String {
        format!("{indent}lazy")
    }
}

/// Defers building a parser until it is first invoked.
///
/// ```
/// use prefixcomb::prelude::*;
///
/// // nested = "(" nested ")" | "x"
/// fn nested() -> Or {
///     or![and![string("("), lazy(nested), string(")")], string("x")]
/// }
/// assert_eq!(nested().parse("((x))").unwrap().rest, "");
/// assert!(nested().parse("((x)").is_err());
/// ```
pub fn lazy<F, P>(init: F) -> Lazy<F>
where
    F: Fn() -> P,
    P: Parser + Send + Sync + 'static,
{
    Lazy {
        init,
        cell: OnceCell::new(),
    }
}

/// Sequence of parsers of any types. See [`And`].
///
/// ```
/// use prefixcomb::prelude::*;
///
/// let ident = and![letter(), many(or![letter(), digit()])];
/// let m = ident.parse("a1b2 rest").unwrap();
/// assert_eq!(m.parsed, "a1b2");
/// assert_eq!(m.rest, " rest");
/// ```
#[macro_export]
macro_rules! and {
    ($first:expr $(, $rest:expr)* $(,)?) => {
        $crate::And::from_parts(
            $crate::ParserExt::boxed($first),
            vec![$($crate::ParserExt::boxed($rest)),*],
        )
    };
}

/// Ordered choice between parsers of any types. See [`Or`].
#[macro_export]
macro_rules! or {
    ($first:expr $(, $rest:expr)* $(,)?) => {
        $crate::Or::from_parts(
            $crate::ParserExt::boxed($first),
            vec![$($crate::ParserExt::boxed($rest)),*],
        )
    };
}

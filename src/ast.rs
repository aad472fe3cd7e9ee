use std::fmt;

/// The structured value extracted by a successful parse.
///
/// Parsers that contribute nothing report `None` in [`Match::ast`](crate::Match) rather than
/// an empty `Ast`, so that sequencing and repetition can skip them without leaving a slot.
///
/// Text borrows from the parsed input (zero-copy); `Owned` is there for semantic actions that
/// build new strings.
#[derive(Debug, Clone, PartialEq)]
pub enum Ast<'a> {
    Text(&'a str),
    Owned(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    List(Vec<Ast<'a>>),
}

impl<'a> Ast<'a> {
    pub fn list<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Ast<'a>>,
    {
        Ast::List(items.into_iter().map(Into::into).collect())
    }

    /// borrowed text, valid for as long as the input is
    pub fn as_text(&self) -> Option<&'a str> {
        match self {
            Ast::Text(s) => Some(*s),
            _ => None,
        }
    }

    /// text of either flavour
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Ast::Text(s) => Some(*s),
            Ast::Owned(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Ast::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Ast::Float(f) => Some(*f),
            Ast::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Ast::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Ast<'a>]> {
        match self {
            Ast::List(v) => Some(v.as_slice()),
            _ => None,
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Ast::List(..))
    }

    pub fn into_list(self) -> Option<Vec<Ast<'a>>> {
        match self {
            Ast::List(v) => Some(v),
            _ => None,
        }
    }

    /// Splices nested lists into one flat list, eg `["a", ["1", "b"]]` -> `["a", "1", "b"]`.
    /// A scalar becomes a one element list.
    pub fn flatten(self) -> Self {
        fn walk<'a>(ast: Ast<'a>, out: &mut Vec<Ast<'a>>) {
            match ast {
                Ast::List(v) => v.into_iter().for_each(|a| walk(a, out)),
                other => out.push(other),
            }
        }
        let mut out = vec![];
        walk(self, &mut out);
        Ast::List(out)
    }

    /// Concatenates every piece of text found depth-first, eg `["a", ["b", "c"]]` -> `"abc"`.
    /// Numbers and booleans are skipped.
    pub fn flatten_text(&self) -> String {
        fn walk(ast: &Ast<'_>, out: &mut String) {
            match ast {
                Ast::Text(s) => out.push_str(s),
                Ast::Owned(s) => out.push_str(s),
                Ast::List(v) => v.iter().for_each(|a| walk(a, out)),
                Ast::Int(..) | Ast::Float(..) | Ast::Bool(..) => {}
            }
        }
        let mut out = String::new();
        walk(self, &mut out);
        out
    }
}

impl<'a> From<&'a str> for Ast<'a> {
    fn from(s: &'a str) -> Self {
        Ast::Text(s)
    }
}

impl From<String> for Ast<'_> {
    fn from(s: String) -> Self {
        Ast::Owned(s)
    }
}

impl From<i64> for Ast<'_> {
    fn from(i: i64) -> Self {
        Ast::Int(i)
    }
}

impl From<f64> for Ast<'_> {
    fn from(f: f64) -> Self {
        Ast::Float(f)
    }
}

impl From<bool> for Ast<'_> {
    fn from(b: bool) -> Self {
        Ast::Bool(b)
    }
}

impl<'a, T: Into<Ast<'a>>> From<Vec<T>> for Ast<'a> {
    fn from(v: Vec<T>) -> Self {
        Ast::list(v)
    }
}

impl fmt::Display for Ast<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{s:?}")?,
            Self::Owned(s) => write!(f, "{s:?}")?,
            Self::Int(i) => write!(f, "{i}")?,
            Self::Float(x) => write!(f, "{x}")?,
            Self::Bool(b) => write!(f, "{b}")?,
            Self::List(v) => {
                write!(f, "[")?;
                for (i, a) in v.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{a}")?;
                }
                write!(f, "]")?;
            }
        };
        Ok(())
    }
}

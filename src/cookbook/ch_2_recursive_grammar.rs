//! Grammars that refer to themselves use [`lazy`](crate::lazy), which builds the inner parser
//! on first use instead of at construction time (which would never terminate).

use crate::prelude::*;

/// s-expressions of identifiers, eg `(add x (mul y z))`
///
/// ```text
/// expr = atom | "(" ws (expr ws)* ")"
/// ```
pub fn expr() -> Or {
    let atom = make_str(many1(or![letter(), digit()]));
    let list = and![
        string("(").map(|_| None),
        ws(),
        many(and![lazy(expr), ws()].map(|ast| ast?.into_list()?.into_iter().next())),
        string(")").map(|_| None),
    ]
    .map(|ast| ast?.into_list()?.into_iter().next().or(Some(Ast::List(vec![]))));
    or![atom, list]
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_sexpr() {
        let p = expr();
        let m = p.parse("(add x (mul y z)) tail").unwrap();
        assert_eq!(m.rest, " tail");
        let expected = Ast::list(vec![
            Ast::Text("add"),
            Ast::Text("x"),
            Ast::list(["mul", "y", "z"]),
        ]);
        assert_eq!(m.ast, Some(expected));

        assert_eq!(p.parse("()").unwrap().ast, Some(Ast::List(vec![])));
        assert_eq!(p.parse("x").unwrap().ast, Some(Ast::Text("x")));
        assert!(p.parse("(a (b)").is_err());
    }
}

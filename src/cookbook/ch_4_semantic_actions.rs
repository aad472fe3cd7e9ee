//! [`ret`](crate::ret) (or `.map`) turns the text a grammar matched into values.

use crate::prelude::*;

pub fn integer() -> impl Parser + Send + Sync {
    and![optional(one_of("-")), many1(digit())]
        .capture()
        .map(|ast| ast?.as_text()?.parse().ok().map(Ast::Int))
}

/// `1 + 2 - 3`, evaluated left to right while parsing
pub fn sum() -> impl Parser + Send + Sync {
    let op = and![ws(), one_of("+-"), ws()].map(|ast| ast?.into_list()?.into_iter().next());
    sep_by(integer(), op).map(|ast| {
        let items = ast?.into_list()?;
        let mut total = items.first()?.as_int()?;
        for pair in items[1..].chunks(2) {
            let n = pair.get(1)?.as_int()?;
            match pair[0].as_text()? {
                "+" => total += n,
                _ => total -= n,
            }
        }
        Some(Ast::Int(total))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_integer() {
        assert_eq!(integer().parse("-17x").unwrap().ast, Some(Ast::Int(-17)));
        assert_eq!(integer().parse("x"), Err(NoMatch));
    }

    #[test]
    fn test_sum() {
        let m = sum().parse("1 + 2 - 10;").unwrap();
        assert_eq!(m.ast, Some(Ast::Int(-7)));
        assert_eq!(m.rest, ";");
        assert_eq!(sum().parse("5").unwrap().ast, Some(Ast::Int(5)));
        // no first value is an empty list, which has no sum
        assert_eq!(sum().parse("x").unwrap().ast, None);
    }
}

use prefixcomb::prelude::*;

// cargo run --example calculator -- "2 * (3 + 4) - 5"
//
// RUST_LOG=pc=trace cargo test --example calculator -- --nocapture

// [v0, op1, v1, op2, v2, ..] folded left to right
fn fold<'a>(ast: Option<Ast<'a>>) -> Option<Ast<'a>> {
    let items = ast?.into_list()?;
    let mut acc = items.first()?.as_float()?;
    for pair in items[1..].chunks(2) {
        let rhs = pair.get(1)?.as_float()?;
        acc = match pair[0].as_text()? {
            "+" => acc + rhs,
            "-" => acc - rhs,
            "*" => acc * rhs,
            "/" => acc / rhs,
            _ => return None,
        };
    }
    Some(Ast::Float(acc))
}

fn op(chars: &str) -> impl Parser + Send + Sync + 'static {
    and![ws(), one_of(chars), ws()].map(|ast| ast?.into_list()?.into_iter().next())
}

fn number() -> impl Parser + Send + Sync + 'static {
    and![many1(digit()), optional(and![string("."), many1(digit())])]
        .capture()
        .map(|ast| ast?.as_text()?.parse().ok().map(Ast::Float))
}

fn factor() -> Or {
    let parens = and![
        string("(").map(|_| None),
        ws(),
        lazy(expr),
        ws(),
        string(")").map(|_| None)
    ]
    .map(|ast| ast?.into_list()?.into_iter().next());
    or![number(), parens]
}

fn term() -> BoxedParser {
    sep_by(factor(), op("*/")).map(fold).boxed()
}

fn expr() -> BoxedParser {
    sep_by(term(), op("+-")).map(fold).boxed()
}

fn evaluate(s: &str) -> Option<f64> {
    let calc = and![ws(), expr(), ws(), end_of_input()];
    let m = calc.parse(s).ok()?;
    m.ast?.into_list()?.first()?.as_float()
}

fn main() {
    env_logger::init();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let exprs = if args.is_empty() {
        vec!["2 * (3 + 4) - 5".to_string()]
    } else {
        args
    };
    for e in exprs {
        match evaluate(&e) {
            Some(v) => println!("{e} = {v}"),
            None => println!("{e} : cannot parse"),
        }
    }
}

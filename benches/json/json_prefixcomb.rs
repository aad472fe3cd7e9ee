use std::collections::HashMap;

use once_cell::sync::Lazy;
use prefixcomb::prelude::*;
use prefixcomb::Literal;

use crate::JsonValue;

static BOOLEAN: Lazy<Or> = Lazy::new(|| or![string("true"), string("false")]);
static NULL: Lazy<Literal> = Lazy::new(|| string("null"));
static NUMBER: Lazy<BoxedParser> = Lazy::new(|| {
    and![
        optional(one_of("-")),
        many1(digit()),
        optional(and![string("."), many1(digit())])
    ]
    .capture()
    .boxed()
});
static STRING: Lazy<BoxedParser> = Lazy::new(|| {
    and![
        string("\"").map(|_| None),
        many(none_of("\"")).capture(),
        string("\"").map(|_| None)
    ]
    .boxed()
});

pub fn prefixcomb_parser(s: &str) -> JsonValue {
    root(s).map(|(_, v)| v).unwrap_or(JsonValue::Null)
}

fn punct<'a>(s: &'a str, p: &str) -> Result<&'a str, NoMatch> {
    let m = and![ws(), string(p), ws()].parse(s)?;
    Ok(m.rest)
}

fn string_value(s: &str) -> Result<(&str, String), NoMatch> {
    let m = STRING.parse(s.trim_start())?;
    let text = m
        .ast
        .as_ref()
        .and_then(Ast::as_list)
        .and_then(|v| v.first())
        .and_then(Ast::as_text)
        .unwrap_or_default();
    Ok((m.rest, text.to_string()))
}

fn array(s: &str) -> Result<(&str, JsonValue), NoMatch> {
    let mut rest = punct(s, "[")?;
    let mut items = vec![];
    while let Ok((r, v)) = json_value(rest) {
        items.push(v);
        rest = r;
        match punct(rest, ",") {
            Ok(r) => rest = r,
            Err(..) => break,
        }
    }
    let rest = punct(rest, "]")?;
    Ok((rest, JsonValue::Array(items)))
}

fn hash(s: &str) -> Result<(&str, JsonValue), NoMatch> {
    let mut rest = punct(s, "{")?;
    let mut map = HashMap::new();
    while let Ok((r, k)) = string_value(rest) {
        let (r, v) = json_value(punct(r, ":")?)?;
        map.insert(k, v);
        rest = r;
        match punct(rest, ",") {
            Ok(r) => rest = r,
            Err(..) => break,
        }
    }
    let rest = punct(rest, "}")?;
    Ok((rest, JsonValue::Object(map)))
}

fn json_value(s: &str) -> Result<(&str, JsonValue), NoMatch> {
    let s = s.trim_start();
    if let Ok(res) = hash(s) {
        Ok(res)
    } else if let Ok(res) = array(s) {
        Ok(res)
    } else if let Ok((rest, text)) = string_value(s) {
        Ok((rest, JsonValue::Str(text)))
    } else if let Ok(m) = NUMBER.parse(s) {
        let n = m.parsed.parse().map_err(|_| NoMatch)?;
        Ok((m.rest, JsonValue::Num(n)))
    } else if let Ok(m) = BOOLEAN.parse(s) {
        Ok((m.rest, JsonValue::Boolean(m.parsed == "true")))
    } else {
        let m = NULL.parse(s)?;
        Ok((m.rest, JsonValue::Null))
    }
}

fn root(s: &str) -> Result<(&str, JsonValue), NoMatch> {
    let s = s.trim_start();
    if let Ok(res) = hash(s) {
        Ok(res)
    } else if let Ok(res) = array(s) {
        Ok(res)
    } else {
        let m = NULL.parse(s)?;
        Ok((m.rest, JsonValue::Null))
    }
}

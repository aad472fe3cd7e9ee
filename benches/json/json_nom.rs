use std::collections::HashMap;

use nom::{
    branch::alt,
    bytes::complete::{is_not, tag},
    character::complete::{char, multispace0},
    combinator::{map, opt, value},
    multi::separated_list0,
    number::complete::double,
    sequence::{delimited, preceded, separated_pair},
    IResult,
};

use crate::JsonValue;

pub fn nom_parser(s: &str) -> JsonValue {
    root(s).map(|(_, v)| v).unwrap_or(JsonValue::Null)
}

fn sp<'a, O, F>(f: F) -> impl FnMut(&'a str) -> IResult<&'a str, O>
where
    F: FnMut(&'a str) -> IResult<&'a str, O>,
{
    delimited(multispace0, f, multispace0)
}

fn string(s: &str) -> IResult<&str, String> {
    map(
        delimited(char('"'), opt(is_not("\"")), char('"')),
        |t: Option<&str>| t.unwrap_or_default().to_string(),
    )(s)
}

fn array(s: &str) -> IResult<&str, JsonValue> {
    map(
        delimited(
            sp(char('[')),
            separated_list0(sp(char(',')), json_value),
            sp(char(']')),
        ),
        JsonValue::Array,
    )(s)
}

fn key_value(s: &str) -> IResult<&str, (String, JsonValue)> {
    separated_pair(sp(string), char(':'), json_value)(s)
}

fn hash(s: &str) -> IResult<&str, JsonValue> {
    map(
        delimited(
            sp(char('{')),
            separated_list0(sp(char(',')), key_value),
            sp(char('}')),
        ),
        |kvs| JsonValue::Object(kvs.into_iter().collect::<HashMap<_, _>>()),
    )(s)
}

fn json_value(s: &str) -> IResult<&str, JsonValue> {
    preceded(
        multispace0,
        alt((
            hash,
            array,
            map(string, JsonValue::Str),
            map(double, JsonValue::Num),
            map(tag("false"), |_| JsonValue::Boolean(false)),
            map(tag("true"), |_| JsonValue::Boolean(true)),
            value(JsonValue::Null, tag("null")),
        )),
    )(s)
}

fn root(s: &str) -> IResult<&str, JsonValue> {
    delimited(
        multispace0,
        alt((hash, array, value(JsonValue::Null, tag("null")))),
        multispace0,
    )(s)
}

mod json_nom;
mod json_prefixcomb;

use std::collections::HashMap;

use criterion::{black_box, criterion_group, Criterion};
use json_nom::nom_parser;
use json_prefixcomb::prefixcomb_parser;
use log::trace;

const JSON: &str = "  { \"a\"\t: 42,
  \"b\": [ \"x\", \"y\", 12 ] ,
  \"c\": { \"hello\" : \"world\"
  }
  } ";

#[derive(Debug, Clone, PartialEq)]
pub enum JsonValue {
    Null,
    Str(String),
    Boolean(bool),
    Num(f64),
    Array(Vec<JsonValue>),
    Object(HashMap<String, JsonValue>),
}

pub fn bench_nom(c: &mut Criterion) {
    c.bench_function("json_nom", |b| b.iter(|| nom_parser(black_box(JSON))));
}

pub fn bench_prefixcomb(c: &mut Criterion) {
    c.bench_function("json_prefixcomb", |b| {
        b.iter(|| prefixcomb_parser(black_box(JSON)))
    });
}

criterion_group!(benches, bench_nom, bench_prefixcomb);

fn main() {
    env_logger::init();
    trace!(target: "pc", "Logging enabled");
    assert_eq!(prefixcomb_parser(JSON), nom_parser(JSON));
    benches();
    Criterion::default().configure_from_args().final_summary();
}

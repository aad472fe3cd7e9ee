/*!
# Cookbook

Worked grammars, compiled with the `cookbook` feature.

Main concepts:

# Parser
Anything implementing [`Parser`](crate::Parser): given a `&str` it either consumes a prefix and
returns a [`Match`](crate::Match), or fails with [`NoMatch`](crate::NoMatch).

```unknown
  rest:   the unconsumed suffix of the input
  parsed: the consumed prefix, so parsed + rest == input
  ast:    the structured value, or None if the parser contributes nothing
```

# Combinators
Parsers are built once, typically at start-up, by nesting combinator calls, and are then
reused for any number of inputs. Parsers are immutable and can be shared across threads.

```
use prefixcomb::prelude::*;

let list = sep_by(many1(digit()).capture(), string(","));
let m = list.parse("10,20,30;").unwrap();
assert_eq!(m.rest, ";");
```

# Testing

Using a logging framework in test harnesses is encouraged

```toml
[dev-dependencies]
env_logger = "0.10"
test-log = {version = "0.2"}
```

This will allow the action of parsing to be traced with
```sh
RUST_LOG=pc=trace cargo test mytest --features cookbook -- --nocapture
```

*/

pub mod ch_1_getting_started;
pub mod ch_2_recursive_grammar;
pub mod ch_3_enum_strum;
pub mod ch_4_semantic_actions;

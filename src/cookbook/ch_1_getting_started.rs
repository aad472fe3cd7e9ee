//! Primitives consume one character or one literal; combinators glue them together.
//!
//!```rust
//! use prefixcomb::prelude::*;
//!
//! assert_eq!(letter().parse("ab").unwrap().rest, "b");
//! assert_eq!(digit().parse("ab"), Err(NoMatch));
//! assert_eq!(string("").parse("ab").unwrap().ast, None);
//!```

use crate::prelude::*;

/// An identifier: a letter followed by letters or digits, captured as one piece of text.
pub fn identifier() -> impl Parser + Send + Sync {
    make_str(and![letter(), many(or![letter(), digit()])])
}

/// A `key = value` pair, eg `width = 42`
pub fn assignment() -> impl Parser + Send + Sync {
    and![identifier(), ws(), string("=").map(|_| None), ws(), many1(digit()).capture()]
}

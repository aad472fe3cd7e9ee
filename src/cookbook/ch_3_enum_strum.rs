use std::str::FromStr;

use crate::prelude::*;
use strum::VariantNames;
use strum_macros::{EnumString, EnumVariantNames};

// Example using strum crate.
//
// strum gives us
//   derive(EnumVariantNames) + trait strum::VariantNames => FancyColor::VARIANTS
//   derive(EnumString) + trait FromStr => FancyColor::from_str
// the keyword parser is an alternation over VARIANTS, and FromStr converts the match
//

#[derive(PartialEq, Debug, EnumVariantNames, EnumString)]
pub enum FancyColor {
    Burgundy,
    Azure,
    Lime,
}

pub fn fancy_color_keyword() -> Result<Or, GrammarError> {
    or(FancyColor::VARIANTS.iter().map(|v| string(*v).boxed()))
}

pub fn parse_fancy_color(s: &str) -> Result<(&str, FancyColor), NoMatch> {
    let m = fancy_color_keyword().map_err(|_| NoMatch)?.parse(s)?;
    let text = m.ast.as_ref().and_then(Ast::as_text).ok_or(NoMatch)?;
    let color = FancyColor::from_str(text).map_err(|_| NoMatch)?;
    Ok((m.rest, color))
}

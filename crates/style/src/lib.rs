pub mod parsers;
pub mod position;
pub mod source_map;
pub mod stylesheet;
pub mod value;

mod builder;
mod printer;

pub use parsers::{Length, LengthUnit, StyleParseError};
pub use position::Position;
pub use source_map::{SourceMap, to_json_bytes};
pub use stylesheet::{AtRule, Comment, Declaration, Node, Rule, Stylesheet};
pub use value::{ValueNode, parse_value, stringify, walk_words_mut};

pub mod parse;
pub mod results;

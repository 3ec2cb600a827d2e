#[path = "helpers/mod.rs"]
mod helpers;

#[path = "parser/mod.rs"]
mod parser;

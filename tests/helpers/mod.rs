pub mod source_fixtures;

mod tests_fixtures;
mod tests_rule_parser;

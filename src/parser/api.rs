use std::time::Instant;

use pest::error::Error;
use pest::iterators::{Pair, Pairs};
use pest::Parser;
use pest_derive::Parser;

use super::ast::ProgramData;
use super::error::LowerError;
use super::lower::build_ast_from_script;

#[derive(Parser)]
#[grammar = "parser/js_grammar.pest"] // relative to src
pub struct JsParser;

const TAB_WIDTH: usize = 2;

impl JsParser {
    /// Parses `script` and lowers it into the restricted AST.
    pub fn parse_to_ast_from_str(script: &str) -> Result<ProgramData, LowerError> {
        parse_to_ast(script)
    }
}

/// Renders the raw parse tree, one pair per line, indented by depth.
pub fn parse_to_token_tree(script: &str) -> Result<String, LowerError> {
    let mut tree = vec![];
    let start = Instant::now();
    let pairs = JsParser::parse(Rule::script, script)?;
    tracing::debug!(
        elapsed_ms = start.elapsed().as_millis() as u64,
        "parsed token tree"
    );
    for pair in pairs {
        tree.push(pair_to_string(pair, 0).join("\n"));
    }
    Ok(tree.join("\n"))
}

fn pair_to_string(pair: Pair<Rule>, level: usize) -> Vec<String> {
    let mut tree = vec![];
    let span = pair.as_span();
    let rule_name = format!(
        "{:?} => ({},{}) #{:?}",
        pair.as_rule(),
        span.start(),
        span.end(),
        span.as_str()
    );
    tree.push(format!("{}{}", " ".repeat(level * TAB_WIDTH), rule_name));
    for child_pair in pair.into_inner() {
        tree.append(pair_to_string(child_pair, level + 1).as_mut());
    }
    tree
}

pub fn parse_to_pairs(script: &str) -> Result<Pairs<Rule>, Error<Rule>> {
    JsParser::parse(Rule::script, script)
}

pub fn parse_to_ast(script: &str) -> Result<ProgramData, LowerError> {
    let pairs = parse_to_pairs(script)?;
    build_ast_from_script(pairs)
}

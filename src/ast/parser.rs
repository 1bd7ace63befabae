use log::error;
use pest::{iterators::Pairs, Parser};
use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "en.pest"]
pub struct EnParser;

impl EnParser {
    pub fn parse_program(program: &str) -> Pairs<Rule> {
        match Self::parse(Rule::program, program) {
            Ok(pairs) => pairs,
            Err(err) => {
                error!("Failed to parse file ({})", err);
                std::process::exit(-1);
            }
        }
    }
}

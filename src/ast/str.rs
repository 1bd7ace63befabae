use pest::iterators::Pair;
use unescape::unescape;

use super::{Rule, Span};

#[derive(Debug, Clone)]
pub struct Str {
    pub value: String,
    pub span: Span,
}

impl Str {
    pub fn from_pair(pair: Pair<Rule>) -> Str {
        assert_eq!(pair.as_rule(), Rule::string);

        let quoted = pair.as_str();
        let raw = &quoted[1..quoted.len() - 1];

        // Escape sequences are interpreted C-style; a malformed escape keeps
        // the literal text.
        let value = unescape(raw).unwrap_or_else(|| raw.to_owned());

        Str {
            value,
            span: Span::from_pair(&pair),
        }
    }
}

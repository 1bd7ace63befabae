use pest::iterators::Pair;

use super::{CodeBlock, Expression, Ident, Param, Rule, Span, TypeAnnotation};

/// A function definition: name, parameters, declared return type, body and
/// an optional default-return expression evaluated when control reaches the
/// end of the body.
#[derive(Debug, Clone)]
pub struct FnDef {
    pub name: Ident,
    pub params: Vec<Param>,
    pub return_type: TypeAnnotation,
    pub block: CodeBlock,
    pub default_return: Option<Expression>,
    pub span: Span,
}

impl FnDef {
    pub fn from_pair(pair: Pair<Rule>) -> FnDef {
        assert_eq!(pair.as_rule(), Rule::fnDef);

        let span = Span::from_pair(&pair);
        let mut inner = pair.into_inner();

        let Some(name) = inner.find(|p| p.as_rule() == Rule::name) else {
            unreachable!("a function definition always has a name")
        };
        let name = Ident::from_pair(name);

        let mut params = vec![];
        let mut return_type = None;
        let mut block = None;
        let mut default_return = None;

        for pair in inner {
            match pair.as_rule() {
                Rule::paramList => {
                    for param in pair.into_inner() {
                        params.push(Param::from_pair(param));
                    }
                }
                Rule::typeName => return_type = Some(TypeAnnotation::from_pair(pair)),
                Rule::codeblock => block = Some(CodeBlock::from_pair(pair)),
                Rule::expr => default_return = Some(Expression::from_pair(pair)),
                _ => {}
            }
        }

        let Some(return_type) = return_type else {
            unreachable!("a function definition always declares a return type")
        };
        let Some(block) = block else {
            unreachable!("a function definition always has a body")
        };

        FnDef {
            name,
            params,
            return_type,
            block,
            default_return,
            span,
        }
    }
}

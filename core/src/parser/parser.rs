use super::{AstNode, FormatTarget, Literal, Span, TemplateNode};
use lazy_static::lazy_static;
use pest::Parser;
use pest::error::ErrorVariant;
use pest::iterators::Pair;
use pest::pratt_parser::{Op, PrattParser};
use pest_derive::Parser;
use tracing::{debug, trace};

lazy_static! {
    // Method calls and slices share one precedence level and apply left to
    // right: `name.sub(1)[:3].upper`.
    static ref PRATT_PARSER: PrattParser<Rule> = PrattParser::new()
        .op(Op::postfix(Rule::method_op) | Op::postfix(Rule::slice_op));
}

#[derive(Parser)]
#[grammar = "parser/template.pest"]
pub struct TemplateParser;

type ParseResult<T> = Result<T, pest::error::Error<Rule>>;

/// Parse a rename template.
///
/// Never fails: malformed placeholders are kept as literal text, and if the
/// grammar itself rejects the input the whole template becomes one text node.
pub fn parse(template: &str) -> TemplateNode {
    match parse_template(template) {
        Ok(parsed) => {
            trace!(template, nodes = parsed.nodes.len(), "parsed template");
            parsed
        }
        Err(err) => {
            debug!(template, error = %err, "template rejected, rendering it verbatim");
            if template.is_empty() {
                TemplateNode::default()
            } else {
                TemplateNode::new(vec![AstNode::Text(template.to_string())])
            }
        }
    }
}

fn parse_template(template: &str) -> ParseResult<TemplateNode> {
    let root = TemplateParser::parse(Rule::template, template)?
        .next()
        .ok_or_else(|| {
            pest::error::Error::new_from_pos(
                ErrorVariant::CustomError {
                    message: "empty parse tree".to_string(),
                },
                pest::Position::from_start(template),
            )
        })?;

    let mut nodes = Vec::new();
    for pair in root.into_inner() {
        let node = match pair.as_rule() {
            Rule::placeholder => parse_placeholder(pair)?,
            Rule::text | Rule::lone_brace | Rule::raw_placeholder => {
                AstNode::Text(pair.as_str().to_string())
            }
            Rule::EOI => continue,
            _ => return Err(unexpected(&pair)),
        };
        push_merged(&mut nodes, node);
    }
    Ok(TemplateNode::new(nodes))
}

// Adjacent literal pieces collapse into a single text node.
fn push_merged(nodes: &mut Vec<AstNode>, node: AstNode) {
    if let AstNode::Text(text) = &node {
        if let Some(AstNode::Text(previous)) = nodes.last_mut() {
            previous.push_str(text);
            return;
        }
    }
    nodes.push(node);
}

fn parse_placeholder(pair: Pair<Rule>) -> ParseResult<AstNode> {
    let span = pair.as_span();
    let mut inner = pair.into_inner();
    let body = inner
        .next()
        .ok_or_else(|| missing("placeholder body", span))?;
    let format = match inner.next() {
        Some(spec) => parse_format_spec(spec)?,
        None => None,
    };

    match body.as_rule() {
        Rule::index_expr => Ok(AstNode::Format {
            target: FormatTarget::IndexExpr(body.as_str().trim().to_string()),
            format,
        }),
        Rule::chain => {
            let node = parse_chain(body)?;
            Ok(match format {
                Some(format) => AstNode::Format {
                    target: FormatTarget::Node(Box::new(node)),
                    format: Some(format),
                },
                None => node,
            })
        }
        _ => Err(unexpected(&body)),
    }
}

fn parse_format_spec(pair: Pair<Rule>) -> ParseResult<Option<String>> {
    let span = pair.as_span();
    let text = pair
        .into_inner()
        .next()
        .ok_or_else(|| missing("format text", span))?;
    // Blanks around the format are layout, like those around the body.
    let format = unescape_format(text.as_str().trim_matches([' ', '\t']));
    Ok(if format.is_empty() { None } else { Some(format) })
}

fn parse_chain(pair: Pair<Rule>) -> ParseResult<AstNode> {
    PRATT_PARSER
        .map_primary(|primary| match primary.as_rule() {
            Rule::identifier => Ok(AstNode::Variable(primary.as_str().to_string())),
            _ => Err(unexpected(&primary)),
        })
        .map_postfix(|lhs, op| match op.as_rule() {
            Rule::method_op => {
                let op_span = op.as_span();
                let mut inner = op.into_inner();
                let name = inner
                    .next()
                    .ok_or_else(|| missing("method name", op_span))?
                    .as_str()
                    .to_string();
                let args = match inner.next() {
                    Some(call_args) => call_args
                        .into_inner()
                        .map(parse_argument)
                        .collect::<ParseResult<_>>()?,
                    None => Vec::new(),
                };
                Ok(AstNode::Method {
                    target: Box::new(lhs?),
                    name,
                    args,
                    span: Span::from(op_span),
                })
            }
            Rule::slice_op => {
                let mut start = None;
                let mut end = None;
                for bound in op.into_inner() {
                    match bound.as_rule() {
                        Rule::slice_start => start = Some(Box::new(parse_slice_bound(bound)?)),
                        Rule::slice_end => end = Some(Box::new(parse_slice_bound(bound)?)),
                        _ => return Err(unexpected(&bound)),
                    }
                }
                Ok(AstNode::Slice {
                    target: Box::new(lhs?),
                    start,
                    end,
                })
            }
            _ => Err(unexpected(&op)),
        })
        .parse(pair.into_inner())
}

fn parse_slice_bound(pair: Pair<Rule>) -> ParseResult<AstNode> {
    let span = pair.as_span();
    let bound = pair
        .into_inner()
        .next()
        .ok_or_else(|| missing("slice bound", span))?;
    parse_argument(bound)
}

fn parse_argument(pair: Pair<Rule>) -> ParseResult<AstNode> {
    match pair.as_rule() {
        Rule::string => {
            let span = pair.as_span();
            let body = pair
                .into_inner()
                .next()
                .ok_or_else(|| missing("string body", span))?;
            Ok(AstNode::Literal(Literal::Str(unescape_string(body.as_str()))))
        }
        // Out-of-range integers stay as text and coerce to the argument default.
        Rule::integer => Ok(AstNode::Literal(match pair.as_str().parse::<i64>() {
            Ok(value) => Literal::Int(value),
            Err(_) => Literal::Str(pair.as_str().to_string()),
        })),
        Rule::chain => parse_chain(pair),
        _ => Err(unexpected(&pair)),
    }
}

fn unescape_string(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

fn unescape_format(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(escaped) = chars.next() {
                out.push(escaped);
                continue;
            }
        }
        out.push(c);
    }
    out
}

fn unexpected(pair: &Pair<Rule>) -> pest::error::Error<Rule> {
    pest::error::Error::new_from_span(
        ErrorVariant::CustomError {
            message: format!("unexpected rule {:?}", pair.as_rule()),
        },
        pair.as_span(),
    )
}

fn missing(what: &str, span: pest::Span) -> pest::error::Error<Rule> {
    pest::error::Error::new_from_span(
        ErrorVariant::CustomError {
            message: format!("missing {what}"),
        },
        span,
    )
}

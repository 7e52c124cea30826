//! Read infix sentences and convert them to postfix order

use crate::*;
use itertools::Itertools;
use log::debug;
use pest::{iterators::Pair, Parser};

#[derive(Parser)]
#[grammar_inline = r####"
sentence = { SOI ~ token* ~ EOI }
token    = _{ not | and | or | lparen | rparen | var }
not      = { "~" }
and      = { "&" }
or       = { "|" }
lparen   = { "(" }
rparen   = { ")" }
var      = @{ !(" " | "~" | "&" | "|" | "(" | ")") ~ ANY }

WHITESPACE = _{ " " }
"####]
struct SentenceParser;

/// An element waiting on the operator stack
#[derive(Clone, Copy)]
enum Pending {
    Paren,
    Operator(Operator),
}

/// Parse an infix sentence.
///
/// ```
/// # use senkit::ParseError;
/// # fn main() -> Result<(), ParseError> {
/// let sentence = senkit::parse("(a | b) & c")?;
/// assert_eq!(format!("{}", sentence), "a b | c &");
///
/// assert_eq!(senkit::parse("(a & b").err(), Some(ParseError::MismatchedParenthesis));
/// # Ok(())
/// # }
/// ```
pub fn parse(text: &str) -> Result<Sentence, ParseError> {
    let postfix = to_postfix(tokenize(text)?)?;
    debug!("{:?} => {}", text, postfix.iter().join(" "));
    Ok(Sentence::from_postfix(postfix))
}

/// Split a text into tokens, discarding spaces.
pub fn tokenize(text: &str) -> Result<Vec<Token>, ParseError> {
    let pairs = SentenceParser::parse(Rule::sentence, text)
        .map_err(|e| ParseError::InvalidInput(e.to_string()))?;
    Ok(pairs
        .flat_map(|pair| pair.into_inner())
        .filter_map(|pair| load_token(&pair))
        .collect())
}

fn load_token(pair: &Pair<Rule>) -> Option<Token> {
    match pair.as_rule() {
        Rule::not => Some(Operator::Not.into()),
        Rule::and => Some(Operator::And.into()),
        Rule::or => Some(Operator::Or.into()),
        Rule::lparen => Some(Token::LeftParen),
        Rule::rparen => Some(Token::RightParen),
        Rule::var => pair.as_str().chars().next().and_then(Variable::new).map(Token::from),
        // end of input
        _ => None,
    }
}

/// Reorder infix tokens in postfix order (shunting-yard).
///
/// Parenthesis are consumed: the result contains only variables and operators.
pub fn to_postfix(tokens: impl IntoIterator<Item = Token>) -> Result<Vec<Token>, ParseError> {
    let mut output = Vec::new();
    let mut stack: Vec<Pending> = Vec::new();

    for token in tokens {
        match token {
            Token::Variable(_) => output.push(token),
            Token::LeftParen => stack.push(Pending::Paren),
            Token::RightParen => loop {
                match stack.pop() {
                    None => return Err(ParseError::MismatchedParenthesis),
                    Some(Pending::Paren) => break,
                    Some(Pending::Operator(op)) => output.push(op.into()),
                }
            },
            Token::Operator(op) => {
                while let Some(&Pending::Operator(stacked)) = stack.last() {
                    if !op.yields_to(stacked) {
                        break;
                    }
                    output.push(stacked.into());
                    stack.pop();
                }
                stack.push(Pending::Operator(op));
            }
        }
    }

    while let Some(pending) = stack.pop() {
        match pending {
            Pending::Paren => return Err(ParseError::MismatchedParenthesis),
            Pending::Operator(op) => output.push(op.into()),
        }
    }
    Ok(output)
}

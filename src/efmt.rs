//! Formatting API for sentences

use crate::{EvaluationError, Operator, Token};

/// Symbols used to write operators in infix form
pub struct FormatterConfig<'a> {
    s_and: &'a str,
    s_or: &'a str,
    s_not: &'a str,
}

impl<'a> FormatterConfig<'a> {
    pub const fn new(s_and: &'a str, s_or: &'a str, s_not: &'a str) -> Self {
        Self { s_and, s_or, s_not }
    }

    fn symbol(&self, op: Operator) -> &'a str {
        match op {
            Operator::Not => self.s_not,
            Operator::And => self.s_and,
            Operator::Or => self.s_or,
        }
    }
}

/// The symbols accepted by the parser
pub static DEFAULT_FMT_CFG: FormatterConfig = FormatterConfig {
    s_and: " & ",
    s_or: " | ",
    s_not: "~",
};

pub static LOWERCASE_FMT_CFG: FormatterConfig = FormatterConfig {
    s_and: " and ",
    s_or: " or ",
    s_not: "not ",
};

/// A formatted part of the sentence and the operator at its root (None for a variable)
struct Fragment {
    text: String,
    root: Option<Operator>,
}

impl Fragment {
    /// Wrap the fragment in parenthesis if its root binds looser than the given rank
    fn operand(self, parent: Operator, strict: bool) -> String {
        let wrap = match self.root {
            None | Some(Operator::Not) => false,
            Some(op) if strict => op.rank() >= parent.rank(),
            Some(op) => op.rank() > parent.rank(),
        };
        match wrap {
            true => format!("({})", self.text),
            false => self.text,
        }
    }
}

/// Write postfix tokens in infix form.
///
/// Parenthesis are added only when needed to preserve the structure of the sentence:
/// parsing the result gives back the same postfix tokens. The right operand of a binary
/// operator is enclosed if it uses the same operator.
pub fn infix(tokens: &[Token], cfg: &FormatterConfig) -> Result<String, EvaluationError> {
    let mut stack: Vec<Fragment> = Vec::new();
    for token in tokens {
        let fragment = match token {
            Token::Variable(var) => Fragment {
                text: var.to_string(),
                root: None,
            },
            Token::Operator(op) if op.arity() == 1 => {
                let operand = stack.pop().ok_or(EvaluationError::MalformedExpression)?;
                let text = match operand.root {
                    Some(Operator::And) | Some(Operator::Or) => format!("({})", operand.text),
                    _ => operand.text,
                };
                Fragment {
                    text: format!("{}{}", cfg.symbol(*op), text),
                    root: Some(*op),
                }
            }
            Token::Operator(op) => {
                let right = stack.pop().ok_or(EvaluationError::MalformedExpression)?;
                let left = stack.pop().ok_or(EvaluationError::MalformedExpression)?;
                Fragment {
                    text: format!(
                        "{}{}{}",
                        left.operand(*op, false),
                        cfg.symbol(*op),
                        right.operand(*op, true)
                    ),
                    root: Some(*op),
                }
            }
            Token::LeftParen | Token::RightParen => {
                return Err(EvaluationError::MalformedExpression)
            }
        };
        stack.push(fragment);
    }

    match (stack.pop(), stack.is_empty()) {
        (Some(fragment), true) => Ok(fragment.text),
        _ => Err(EvaluationError::MalformedExpression),
    }
}

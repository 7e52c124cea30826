//! Tokens of a sentence and the fixed table of Boolean operators

use crate::Variable;
use std::fmt;

/// Associativity of an operator, used to order operators with the same rank.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Associativity {
    Left,
    Right,
}

/// The Boolean operators available in sentences.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Operator {
    /// NOT operator: negates its only operand
    Not,
    /// AND operator: both operands need to be true
    And,
    /// OR operator: at least one operand needs to be true
    Or,
}

impl Operator {
    /// All operators, from the tightest to the loosest binding
    pub const ALL: [Operator; 3] = [Operator::Not, Operator::And, Operator::Or];

    /// The character denoting this operator in the input text
    pub fn symbol(self) -> char {
        match self {
            Operator::Not => '~',
            Operator::And => '&',
            Operator::Or => '|',
        }
    }

    /// Find the operator denoted by a character
    pub fn from_symbol(c: char) -> Option<Self> {
        Self::ALL.iter().copied().find(|op| op.symbol() == c)
    }

    /// Precedence rank of the operator: a lower rank binds tighter.
    ///
    /// NOT has rank 0, AND has rank 1 and OR has rank 2.
    pub fn rank(self) -> u8 {
        match self {
            Operator::Not => 0,
            Operator::And => 1,
            Operator::Or => 2,
        }
    }

    pub fn associativity(self) -> Associativity {
        match self {
            Operator::Not => Associativity::Right,
            Operator::And | Operator::Or => Associativity::Left,
        }
    }

    /// Number of operands
    pub fn arity(self) -> usize {
        match self {
            Operator::Not => 1,
            Operator::And | Operator::Or => 2,
        }
    }

    /// Test if an operator on the stack must be output before pushing this one.
    pub(crate) fn yields_to(self, stacked: Operator) -> bool {
        match self.associativity() {
            Associativity::Right => self.rank() > stacked.rank(),
            Associativity::Left => self.rank() >= stacked.rank(),
        }
    }

    /// Pop the operands from a stack of values and return the result.
    ///
    /// Return None if the stack does not hold enough operands.
    pub(crate) fn apply(self, operands: &mut Vec<bool>) -> Option<bool> {
        match self {
            Operator::Not => operands.pop().map(|b| !b),
            Operator::And => {
                let (b, a) = (operands.pop()?, operands.pop()?);
                Some(a && b)
            }
            Operator::Or => {
                let (b, a) = (operands.pop()?, operands.pop()?);
                Some(a || b)
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A single element of a sentence.
///
/// Parenthesis only appear in the infix input: a parsed [Sentence](crate::Sentence)
/// holds variables and operators in postfix order.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Token {
    Variable(Variable),
    Operator(Operator),
    LeftParen,
    RightParen,
}

impl Token {
    pub fn is_variable(&self) -> bool {
        matches!(self, Token::Variable(_))
    }
}

impl From<Variable> for Token {
    fn from(var: Variable) -> Self {
        Token::Variable(var)
    }
}

impl From<Operator> for Token {
    fn from(op: Operator) -> Self {
        Token::Operator(op)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Variable(var) => write!(f, "{}", var),
            Token::Operator(op) => write!(f, "{}", op),
            Token::LeftParen => write!(f, "("),
            Token::RightParen => write!(f, ")"),
        }
    }
}

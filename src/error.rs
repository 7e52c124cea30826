use crate::Variable;
use thiserror::Error;

/// Error raised while reading a sentence or an assignment.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A `)` without matching `(`, or a `(` which is never closed
    #[error("Mismatched parenthesis")]
    MismatchedParenthesis,

    /// The text could not be split into tokens
    #[error("Unrecognized input: {0}")]
    InvalidInput(String),

    /// The description of an assignment is invalid
    #[error("The assignment '{0}' is invalid")]
    InvalidAssignment(String),
}

/// Error raised while evaluating or comparing sentences.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvaluationError {
    /// The assignment has no value for a variable of the sentence
    #[error("There is no value for the variable '{0}'")]
    UndefinedVariable(Variable),

    /// The assignment gives a value to a variable which is not part of the sentence
    #[error("The variable '{0}' is not used in this sentence")]
    UnexpectedVariable(Variable),

    /// The postfix sequence does not reduce to a single value
    #[error("Not a well-formed expression")]
    MalformedExpression,

    /// Neither set of variables contains the other
    #[error("The variables of one sentence must include the variables of the other")]
    IncompatibleVariableSets,

    /// Too many variables to enumerate all assignments
    #[error("Can not enumerate the assignments of {0} variables")]
    TooManyVariables(usize),
}

/// Any error raised by this crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SenkitError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
}

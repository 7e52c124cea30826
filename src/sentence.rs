//! Propositional sentences stored in postfix order

use crate::*;

use itertools::Itertools;
use std::fmt;
use std::str::FromStr;

/// A propositional sentence.
///
/// A sentence is obtained by [parsing](crate::parse) an infix expression and stores its tokens
/// in postfix order, where each operator follows its operands. It can not be modified
/// after parsing: all derived data (variables, outcomes, properties) is computed on demand.
///
/// ```
/// use senkit::{Proposition, Sentence};
/// # use senkit::SenkitError;
/// # fn main() -> Result<(), SenkitError> {
///
/// let sentence: Sentence = "b & (a | ~b)".parse()?;
/// assert_eq!(sentence.variable_count(), 3);
/// assert_eq!(sentence.distinct_count(), 2);
/// assert_eq!(sentence.evaluate(&"a b".parse()?)?, true);
/// assert_eq!(sentence.evaluate(&"~a b".parse()?)?, false);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Sentence {
    tokens: Vec<Token>,
}

impl Sentence {
    pub(crate) fn from_postfix(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// The tokens of the sentence in postfix order
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Number of variables in the sentence, counting repeated variables
    pub fn variable_count(&self) -> usize {
        self.tokens.iter().filter(|t| t.is_variable()).count()
    }

    /// All variables of the sentence in postfix order, including repeated variables
    pub fn variables_in_order(&self) -> Vec<Variable> {
        self.tokens
            .iter()
            .filter_map(|t| match t {
                Token::Variable(var) => Some(*var),
                _ => None,
            })
            .collect()
    }

    /// Write the sentence in infix form with the default symbols
    pub fn to_infix(&self) -> Result<String, EvaluationError> {
        self.to_infix_with(&efmt::DEFAULT_FMT_CFG)
    }

    /// Write the sentence in infix form with custom symbols
    pub fn to_infix_with(&self, cfg: &efmt::FormatterConfig) -> Result<String, EvaluationError> {
        efmt::infix(&self.tokens, cfg)
    }
}

impl Proposition for Sentence {
    /// Evaluate the postfix tokens on a stack of Boolean values.
    fn evaluate(&self, assignment: &Assignment) -> Result<bool, EvaluationError> {
        assignment.ensure_within(self.distinct_variables().as_set())?;

        let mut stack = Vec::with_capacity(self.tokens.len());
        for token in &self.tokens {
            let value = match token {
                Token::Variable(var) => assignment
                    .get(*var)
                    .ok_or(EvaluationError::UndefinedVariable(*var))?,
                Token::Operator(op) => op
                    .apply(&mut stack)
                    .ok_or(EvaluationError::MalformedExpression)?,
                Token::LeftParen | Token::RightParen => {
                    return Err(EvaluationError::MalformedExpression)
                }
            };
            stack.push(value);
        }

        match stack.as_slice() {
            [value] => Ok(*value),
            _ => Err(EvaluationError::MalformedExpression),
        }
    }

    fn collect_variables(&self, variables: &mut VarList) {
        for var in self.variables_in_order() {
            variables.insert(var);
        }
    }
}

impl FromStr for Sentence {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.tokens.iter().join(" "))
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn variables() -> Result<(), SenkitError> {
        let sentence = parse("c | (a & c) | ~b & a")?;
        assert_eq!(sentence.variable_count(), 5);
        assert_eq!(
            sentence.variables_in_order(),
            "cacba".chars().filter_map(Variable::new).collect::<Vec<_>>()
        );
        assert_eq!(format!("{}", sentence.distinct_variables()), "[c, a, b]");
        assert_eq!(sentence.distinct_count(), 3);
        Ok(())
    }

    #[test]
    fn eval() -> Result<(), SenkitError> {
        let sentence = parse("(a | b) & ~c")?;
        assert!(sentence.evaluate(&"a ~b ~c".parse()?)?);
        assert!(sentence.evaluate(&"~a b ~c".parse()?)?);
        assert!(!sentence.evaluate(&"a b c".parse()?)?);
        assert!(!sentence.evaluate(&"~a ~b ~c".parse()?)?);
        Ok(())
    }

    #[test]
    fn eval_requires_exact_assignment() -> Result<(), SenkitError> {
        let sentence = parse("a & b")?;
        assert_eq!(
            sentence.evaluate(&"a".parse()?),
            Err(EvaluationError::UndefinedVariable(Variable::try_from('b')?))
        );
        assert_eq!(
            sentence.evaluate(&"a b c".parse()?),
            Err(EvaluationError::UnexpectedVariable(Variable::try_from('c')?))
        );
        Ok(())
    }

    #[test]
    fn malformed_expressions() -> Result<(), SenkitError> {
        let missing_operand = parse("a &")?;
        assert_eq!(
            missing_operand.evaluate(&"a".parse()?),
            Err(EvaluationError::MalformedExpression)
        );

        let missing_operator = parse("a b")?;
        assert_eq!(
            missing_operator.all_outcomes(),
            Err(EvaluationError::MalformedExpression)
        );

        let empty = parse("  ")?;
        assert_eq!(empty.distinct_count(), 0);
        assert_eq!(empty.valid(), Err(EvaluationError::MalformedExpression));
        Ok(())
    }

    #[test]
    fn outcomes() -> Result<(), SenkitError> {
        let sentence = parse("a | ~a")?;
        assert_eq!(sentence.all_outcomes()?, vec![true, true]);
        assert!(sentence.valid()?);
        assert!(!sentence.contingent()?);

        let sentence = parse("a & ~a")?;
        assert_eq!(sentence.all_outcomes()?, vec![false, false]);
        assert!(!sentence.satisfiable()?);
        assert!(!sentence.contingent()?);

        // outcomes follow the order of first occurrence: b is the most significant digit
        let sentence = parse("b & ~a")?;
        assert_eq!(sentence.all_outcomes()?, vec![false, false, true, false]);
        assert!(sentence.contingent()?);
        Ok(())
    }

    #[test]
    fn high_code_point_variables() -> Result<(), SenkitError> {
        let wide = parse("\u{10FFFF} & a | b & c | d & e | f & g | h & i | j")?;
        let narrow = parse("z & a | b & c | d & e | f & g | h & i | j")?;
        assert_eq!(wide.all_outcomes()?, narrow.all_outcomes()?);

        for (assignment, _) in wide.truth_table()? {
            assert!(assignment.positive.variables.capacity() < 0x10000);
            assert!(assignment.negative.variables.capacity() < 0x10000);
        }

        let last = parse("\u{10FFFF}")?;
        assert!(last.evaluate(&"\u{10FFFF}".parse()?)?);
        assert_eq!(last.to_infix()?, "\u{10FFFF}");
        Ok(())
    }

    #[test]
    fn satisfying_assignments() -> Result<(), SenkitError> {
        let sentence = parse("a | b")?;
        let satisfying = sentence.satisfying_assignments()?;
        assert_eq!(satisfying.len(), 3);
        assert!(!satisfying.contains(&"~a ~b".parse()?));

        let table = sentence.truth_table()?;
        assert_eq!(table.len(), 4);
        assert_eq!(table[0], ("~a ~b".parse::<Assignment>()?, false));
        assert_eq!(table[2], ("a ~b".parse::<Assignment>()?, true));
        Ok(())
    }

    #[test]
    fn outcome_count_grows_with_variables() -> Result<(), SenkitError> {
        let sentence = parse("a & b | c & d | e & f | g & h | i & j")?;
        let outcomes = sentence.all_outcomes()?;
        assert_eq!(outcomes.len(), 1 << 10);
        assert_eq!(outcomes.iter().filter(|b| !**b).count(), 243);
        Ok(())
    }
}

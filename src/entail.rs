//! Entailment and equivalence between propositions with different sets of variables

use crate::*;

use log::{debug, trace};
use std::cmp::Ordering;
use std::fmt;

/// Result of a comparison which may be impossible to decide.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum ThreeValued {
    True,
    False,
    Undetermined,
}

impl ThreeValued {
    /// Combine two results: true if both are true, undetermined if any of them is undetermined.
    pub fn and(self, other: Self) -> Self {
        match (self, other) {
            (ThreeValued::True, ThreeValued::True) => ThreeValued::True,
            (ThreeValued::Undetermined, _) | (_, ThreeValued::Undetermined) => {
                ThreeValued::Undetermined
            }
            _ => ThreeValued::False,
        }
    }

    /// The Boolean value, if it is determined
    pub fn as_bool(self) -> Option<bool> {
        match self {
            ThreeValued::True => Some(true),
            ThreeValued::False => Some(false),
            ThreeValued::Undetermined => None,
        }
    }
}

impl From<bool> for ThreeValued {
    fn from(b: bool) -> Self {
        match b {
            true => ThreeValued::True,
            false => ThreeValued::False,
        }
    }
}

impl fmt::Display for ThreeValued {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ThreeValued::True => write!(f, "True"),
            ThreeValued::False => write!(f, "False"),
            ThreeValued::Undetermined => write!(f, "Undetermined"),
        }
    }
}

/// How the variables of the conclusion relate to the variables of the premise
#[derive(Debug)]
enum Relation {
    /// Both use the same variables
    Same,
    /// The conclusion uses these additional variables
    Wider(VarList),
    /// The conclusion uses only a subset of the variables of the premise
    Narrower(VarSet),
}

impl Relation {
    fn between(premise: &VarList, conclusion: &VarList) -> Result<Self, EvaluationError> {
        let (left, right) = (premise.as_set(), conclusion.as_set());
        match premise.len().cmp(&conclusion.len()) {
            Ordering::Equal if left == right => Ok(Relation::Same),
            Ordering::Less if right.contains_all(left) => {
                Ok(Relation::Wider(conclusion.without(left)))
            }
            Ordering::Greater if left.contains_all(right) => Ok(Relation::Narrower(right.clone())),
            _ => Err(EvaluationError::IncompatibleVariableSets),
        }
    }
}

/// Test if all assignments satisfying the premise also satisfy the conclusion.
///
/// The variables of one of the propositions must include the variables of the other.
/// The satisfying assignments of the premise are adapted to the variables of the conclusion:
/// * if the conclusion has additional variables, each assignment is extended with all
///   combinations of values for these variables;
/// * if the conclusion uses fewer variables, each assignment is restricted to them.
///
/// ```
/// use senkit::{entails, parse, ThreeValued};
/// # use senkit::SenkitError;
/// # fn main() -> Result<(), SenkitError> {
///
/// let both = parse("a & b")?;
/// let first = parse("a")?;
/// assert_eq!(entails(&both, &first)?, ThreeValued::True);
/// assert_eq!(entails(&first, &both)?, ThreeValued::False);
/// # Ok(())
/// # }
/// ```
pub fn entails(
    premise: &dyn Proposition,
    conclusion: &dyn Proposition,
) -> Result<ThreeValued, EvaluationError> {
    let relation = Relation::between(
        &premise.distinct_variables(),
        &conclusion.distinct_variables(),
    )?;
    debug!("entailment with {:?}", relation);

    for assignment in premise.satisfying_assignments()? {
        let holds = match &relation {
            Relation::Same => conclusion.evaluate(&assignment)?,
            Relation::Wider(extra) => {
                let mut holds = true;
                for extension in Assignments::new(extra.clone())? {
                    if !conclusion.evaluate(&assignment.merged(&extension))? {
                        holds = false;
                        break;
                    }
                }
                holds
            }
            Relation::Narrower(shared) => {
                conclusion.evaluate(&assignment.restricted_to(shared))?
            }
        };
        if !holds {
            trace!("counter-example: {}", assignment);
            return Ok(ThreeValued::False);
        }
    }
    Ok(ThreeValued::True)
}

/// Test if two propositions entail each other.
///
/// The result is undetermined if one of the entailments is undetermined.
pub fn equivalent(
    first: &dyn Proposition,
    second: &dyn Proposition,
) -> Result<ThreeValued, EvaluationError> {
    Ok(entails(first, second)?.and(entails(second, first)?))
}

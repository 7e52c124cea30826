use crate::*;

/// Common API for all propositions which can be evaluated on assignments.
///
/// An implementation only provides the evaluation of a single assignment and the list of its
/// variables, the derived queries are computed by enumerating all assignments of these variables.
/// Nothing is cached: each query enumerates again all `2^n` assignments.
pub trait Proposition {
    /// Evaluate the proposition on an assignment covering exactly its variables.
    fn evaluate(&self, assignment: &Assignment) -> Result<bool, EvaluationError>;

    /// Add the variables of the proposition to the list, in order of first occurrence
    fn collect_variables(&self, variables: &mut VarList);

    /// The ordered list of distinct variables
    fn distinct_variables(&self) -> VarList {
        let mut variables = VarList::default();
        self.collect_variables(&mut variables);
        variables
    }

    fn distinct_count(&self) -> usize {
        self.distinct_variables().len()
    }

    /// Enumerate all assignments of the distinct variables
    fn truth_assignments(&self) -> Result<Assignments, EvaluationError> {
        Assignments::new(self.distinct_variables())
    }

    /// Evaluate all assignments, in the order of [Assignments].
    fn all_outcomes(&self) -> Result<Vec<bool>, EvaluationError> {
        self.truth_assignments()?
            .map(|assignment| self.evaluate(&assignment))
            .collect()
    }

    /// Pair each assignment with its outcome
    fn truth_table(&self) -> Result<Vec<(Assignment, bool)>, EvaluationError> {
        self.truth_assignments()?
            .map(|assignment| {
                let outcome = self.evaluate(&assignment)?;
                Ok((assignment, outcome))
            })
            .collect()
    }

    /// All assignments for which the proposition is true
    fn satisfying_assignments(&self) -> Result<Vec<Assignment>, EvaluationError> {
        let mut satisfying = Vec::new();
        for assignment in self.truth_assignments()? {
            if self.evaluate(&assignment)? {
                satisfying.push(assignment);
            }
        }
        Ok(satisfying)
    }

    fn properties(&self) -> Result<Properties, EvaluationError> {
        Ok(Properties::from_outcomes(&self.all_outcomes()?))
    }

    /// True if all assignments satisfy the proposition
    fn valid(&self) -> Result<bool, EvaluationError> {
        Ok(self.properties()?.valid)
    }

    /// True if at least one assignment satisfies the proposition
    fn satisfiable(&self) -> Result<bool, EvaluationError> {
        Ok(self.properties()?.satisfiable)
    }

    /// True if the proposition is satisfiable but not valid
    fn contingent(&self) -> Result<bool, EvaluationError> {
        Ok(self.properties()?.contingent)
    }

    /// Test if all assignments satisfying this proposition also satisfy the other one.
    ///
    /// See [entails](crate::entails).
    fn entails(&self, other: &dyn Proposition) -> Result<ThreeValued, EvaluationError>
    where
        Self: Sized,
    {
        entail::entails(self, other)
    }

    /// Test if both propositions entail each other.
    fn equivalent(&self, other: &dyn Proposition) -> Result<ThreeValued, EvaluationError>
    where
        Self: Sized,
    {
        entail::equivalent(self, other)
    }
}

/// Semantic properties derived from the outcomes of all assignments.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Properties {
    /// Every outcome is true
    pub valid: bool,
    /// At least one outcome is true
    pub satisfiable: bool,
    /// Some outcomes are true and some are false
    pub contingent: bool,
}

impl Properties {
    pub fn from_outcomes(outcomes: &[bool]) -> Self {
        let valid = outcomes.iter().all(|b| *b);
        let satisfiable = outcomes.iter().any(|b| *b);
        Self {
            valid,
            satisfiable,
            contingent: satisfiable && !valid,
        }
    }
}

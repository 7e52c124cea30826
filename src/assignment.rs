use crate::*;

use itertools::Itertools;
use std::fmt;
use std::iter::FromIterator;
use std::str::FromStr;

/// Truth values given to a set of variables.
///
/// An assignment is represented as a pair of [VarSet]: the variables assigned to true and
/// the variables assigned to false. Other variables have no value. Setting a variable
/// replaces its previous value, so a variable is never in both sets.
///
/// Assignments can be parsed from a list of variables separated by spaces or commas,
/// where negated variables (prefixed by `~` or `!`) are assigned to false.
///
/// ```
/// use senkit::{Assignment, Variable};
/// # use senkit::ParseError;
/// # fn main() -> Result<(), ParseError> {
///
/// let assignment: Assignment = "a ~b c".parse()?;
/// assert_eq!(assignment.get(Variable::try_from('b')?), Some(false));
/// assert_eq!(assignment.get(Variable::try_from('d')?), None);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct Assignment {
    pub(crate) positive: VarSet,
    pub(crate) negative: VarSet,
}

static ASSIGNMENT_SEPARATORS: [char; 3] = [' ', ',', ';'];

impl Assignment {
    /// Assign a value to a variable, replacing its previous value if any.
    pub fn set(&mut self, var: Variable, value: bool) {
        if value {
            self.negative.remove(var);
            self.positive.insert(var);
        } else {
            self.positive.remove(var);
            self.negative.insert(var);
        }
    }

    /// Remove the value of a variable.
    pub fn unset(&mut self, var: Variable) {
        self.positive.remove(var);
        self.negative.remove(var);
    }

    /// The value of a variable, if it is assigned
    pub fn get(&self, var: Variable) -> Option<bool> {
        match (self.positive.contains(var), self.negative.contains(var)) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }

    /// Test if a variable has a value in this assignment
    pub fn contains(&self, var: Variable) -> bool {
        self.positive.contains(var) || self.negative.contains(var)
    }

    /// The set of variables with a value
    pub fn variables(&self) -> VarSet {
        let mut vars = self.positive.clone();
        vars.union_with(&self.negative);
        vars
    }

    /// Number of assigned variables
    pub fn len(&self) -> usize {
        self.positive.len() + self.negative.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positive.is_empty() && self.negative.is_empty()
    }

    /// Iterate over the assigned variables and their values, in the order of variable UIDs
    pub fn iter(&self) -> impl Iterator<Item = (Variable, bool)> + '_ {
        self.positive
            .iter()
            .map(|v| (v, true))
            .merge_by(self.negative.iter().map(|v| (v, false)), |a, b| {
                a.0.uid() < b.0.uid()
            })
    }

    /// Keep only the values of the selected variables.
    pub fn restricted_to(&self, vars: &VarSet) -> Self {
        let mut result = self.clone();
        result.positive.intersect_with(vars);
        result.negative.intersect_with(vars);
        result
    }

    /// Combine with the values of another assignment.
    ///
    /// Values from the other assignment replace existing values.
    pub fn merged(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.positive.difference_with(&other.negative);
        result.negative.difference_with(&other.positive);
        result.positive.union_with(&other.positive);
        result.negative.union_with(&other.negative);
        result
    }

    /// Fail if a variable outside of the given set has a value.
    pub(crate) fn ensure_within(&self, vars: &VarSet) -> Result<(), EvaluationError> {
        let mut extra = self.variables();
        extra.difference_with(vars);
        match extra.iter().next() {
            Some(var) => Err(EvaluationError::UnexpectedVariable(var)),
            None => Ok(()),
        }
    }
}

impl FromIterator<(Variable, bool)> for Assignment {
    fn from_iter<I: IntoIterator<Item = (Variable, bool)>>(iter: I) -> Self {
        let mut assignment = Assignment::default();
        for (var, value) in iter {
            assignment.set(var, value);
        }
        assignment
    }
}

impl FromStr for Assignment {
    type Err = ParseError;

    fn from_str(descr: &str) -> Result<Self, ParseError> {
        descr
            .split(&ASSIGNMENT_SEPARATORS[..])
            .filter(|s| !s.is_empty())
            .map(|s| {
                let (name, value) = match s.strip_prefix(&['~', '!'][..]) {
                    Some(name) => (name, false),
                    None => (s, true),
                };
                name.parse::<Variable>()
                    .map(|var| (var, value))
                    .map_err(|_| ParseError::InvalidAssignment(descr.to_string()))
            })
            .collect()
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let values = self
            .iter()
            .map(|(v, b)| format!("{}={}", v, b as u8))
            .join(" ");
        write!(f, "{}", values)
    }
}

/// Iterate over all assignments of an ordered list of variables.
///
/// The assignment at position `i` corresponds to the binary representation of `i` on `n` digits
/// (where `n` is the number of variables): the digit at position `k`, starting from the left,
/// gives the value of the `k`-th variable. The first assignment sets all variables to false,
/// the last one sets them all to true.
///
/// ```
/// use senkit::{Assignments, VarList, Variable};
/// # use senkit::EvaluationError;
/// # fn main() -> Result<(), EvaluationError> {
///
/// let vars: VarList = "ab".chars().filter_map(Variable::new).collect();
/// let assignments: Vec<String> = Assignments::new(vars)?.map(|a| a.to_string()).collect();
/// assert_eq!(assignments, ["a=0 b=0", "a=0 b=1", "a=1 b=0", "a=1 b=1"]);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Assignments {
    variables: VarList,
    next: usize,
    total: usize,
}

impl Assignments {
    /// Prepare the enumeration of all assignments of these variables.
    ///
    /// Fails if the number of assignments does not fit in a `usize`.
    pub fn new(variables: VarList) -> Result<Self, EvaluationError> {
        let count = variables.len();
        let total = u32::try_from(count)
            .ok()
            .and_then(|n| 1usize.checked_shl(n))
            .ok_or(EvaluationError::TooManyVariables(count))?;
        Ok(Self {
            variables,
            next: 0,
            total,
        })
    }

    /// The ordered list of enumerated variables
    pub fn variables(&self) -> &VarList {
        &self.variables
    }

    /// Build the assignment at a given position of the enumeration
    pub fn assignment_at(&self, index: usize) -> Assignment {
        let n = self.variables.len();
        self.variables
            .iter()
            .enumerate()
            .map(|(k, var)| (*var, (index >> (n - 1 - k)) & 1 == 1))
            .collect()
    }
}

impl Iterator for Assignments {
    type Item = Assignment;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.total {
            return None;
        }
        let assignment = self.assignment_at(self.next);
        self.next += 1;
        Some(assignment)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Assignments {}

#[cfg(test)]
mod tests {
    use crate::*;

    fn vars(names: &str) -> VarList {
        names.chars().filter_map(Variable::new).collect()
    }

    #[test]
    fn set_and_get() -> Result<(), SenkitError> {
        let a = Variable::try_from('a')?;
        let b = Variable::try_from('b')?;

        let mut assignment = Assignment::default();
        assert!(assignment.is_empty());
        assignment.set(a, true);
        assignment.set(b, true);
        assignment.set(b, false);
        assert_eq!(assignment.get(a), Some(true));
        assert_eq!(assignment.get(b), Some(false));
        assert_eq!(assignment.len(), 2);

        assignment.unset(a);
        assert!(!assignment.contains(a));
        assert_eq!(assignment, "~b".parse::<Assignment>()?);
        Ok(())
    }

    #[test]
    fn parse_and_display() -> Result<(), SenkitError> {
        let assignment: Assignment = "c, ~a !b".parse()?;
        assert_eq!(format!("{}", assignment), "a=0 b=0 c=1");

        assert!("a ~&".parse::<Assignment>().is_err());
        assert!("ab".parse::<Assignment>().is_err());
        assert!("".parse::<Assignment>()?.is_empty());
        Ok(())
    }

    #[test]
    fn restrict_and_merge() -> Result<(), SenkitError> {
        let assignment: Assignment = "a ~b c".parse()?;
        let restricted = assignment.restricted_to(&VarSet::from_iter(vars("bc").iter().copied()));
        assert_eq!(restricted, "~b c".parse::<Assignment>()?);

        let merged = restricted.merged(&"b ~d".parse()?);
        assert_eq!(merged, "b c ~d".parse::<Assignment>()?);
        Ok(())
    }

    #[test]
    fn reject_extra_variables() -> Result<(), SenkitError> {
        let assignment: Assignment = "a ~b".parse()?;
        assert!(assignment.ensure_within(vars("ab").as_set()).is_ok());
        assert!(assignment.ensure_within(vars("abc").as_set()).is_ok());
        assert_eq!(
            assignment.ensure_within(vars("a").as_set()),
            Err(EvaluationError::UnexpectedVariable(Variable::try_from('b')?))
        );
        Ok(())
    }

    #[test]
    fn enumeration_order() -> Result<(), SenkitError> {
        let all: Vec<Assignment> = Assignments::new(vars("bac"))?.collect();
        assert_eq!(all.len(), 8);
        assert_eq!(all[0], "~b ~a ~c".parse::<Assignment>()?);
        // 3 = 011: the first variable in the list is the most significant digit
        assert_eq!(all[3], "~b a c".parse::<Assignment>()?);
        assert_eq!(all[4], "b ~a ~c".parse::<Assignment>()?);
        assert_eq!(all[7], "b a c".parse::<Assignment>()?);
        Ok(())
    }

    #[test]
    fn enumerate_no_variable() -> Result<(), SenkitError> {
        let mut all = Assignments::new(VarList::default())?;
        assert_eq!(all.len(), 1);
        assert_eq!(all.next(), Some(Assignment::default()));
        assert_eq!(all.next(), None);
        Ok(())
    }

    #[test]
    fn too_many_variables() {
        let names: String = (0..100u32).filter_map(|i| char::from_u32(0x100 + i)).collect();
        assert_eq!(
            Assignments::new(vars(&names)).err(),
            Some(EvaluationError::TooManyVariables(100))
        );
    }
}

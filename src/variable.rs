//! Variables, sets of variables and ordered lists of distinct variables

use crate::*;

use bit_set::BitSet;
use delegate::delegate;
use itertools::Itertools;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;
use std::iter::FromIterator;
use std::str::FromStr;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Number of UIDs reserved for ASCII characters
const ASCII_UIDS: usize = 128;

static REGISTRY: Lazy<Mutex<Registry>> = Lazy::new(Default::default);

/// UIDs of the non-ASCII characters used as variables, in order of first use
#[derive(Default)]
struct Registry {
    uids: HashMap<char, usize>,
    names: Vec<char>,
}

impl Registry {
    fn get() -> MutexGuard<'static, Registry> {
        REGISTRY.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn uid(&mut self, name: char) -> usize {
        let names = &mut self.names;
        *self.uids.entry(name).or_insert_with(|| {
            names.push(name);
            ASCII_UIDS + names.len() - 1
        })
    }

    fn name(&self, uid: usize) -> Option<char> {
        self.names.get(uid.checked_sub(ASCII_UIDS)?).copied()
    }
}

/// A single Boolean variable identified by one character.
///
/// Any character which is neither a space, an operator (`~`, `&`, `|`) nor a parenthesis
/// can be used as a variable. Each variable also has a small integer UID
/// to store it in [sets of variables](VarSet): ASCII characters use their code point,
/// other characters are numbered after them in order of first use.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub struct Variable {
    name: char,
    uid: usize,
}

impl Variable {
    /// Characters which can not be used as variables
    pub const RESERVED: [char; 6] = [' ', '~', '&', '|', '(', ')'];

    /// Create a variable for a character, if it is not reserved
    pub fn new(name: char) -> Option<Self> {
        if Self::RESERVED.contains(&name) {
            return None;
        }
        let uid = match name.is_ascii() {
            true => name as usize,
            false => Registry::get().uid(name),
        };
        Some(Self { name, uid })
    }

    /// The character identifying this variable
    pub fn name(&self) -> char {
        self.name
    }

    /// Return the internal integer UID
    pub fn uid(&self) -> usize {
        self.uid
    }

    fn from_uid(uid: usize) -> Option<Self> {
        let name = match uid < ASCII_UIDS {
            true => u8::try_from(uid).ok().map(char::from)?,
            false => Registry::get().name(uid)?,
        };
        Some(Self { name, uid })
    }
}

impl TryFrom<char> for Variable {
    type Error = ParseError;

    fn try_from(name: char) -> Result<Self, Self::Error> {
        Self::new(name).ok_or_else(|| ParseError::InvalidInput(name.to_string()))
    }
}

impl Proposition for Variable {
    fn evaluate(&self, assignment: &Assignment) -> Result<bool, EvaluationError> {
        assignment.ensure_within(&VarSet::from_iter([*self]))?;
        assignment
            .get(*self)
            .ok_or(EvaluationError::UndefinedVariable(*self))
    }

    fn collect_variables(&self, variables: &mut VarList) {
        variables.insert(*self);
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl FromStr for Variable {
    type Err = ParseError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let mut chars = name.trim().chars();
        match (chars.next().and_then(Variable::new), chars.next()) {
            (Some(var), None) => Ok(var),
            _ => Err(ParseError::InvalidInput(name.to_string())),
        }
    }
}

/// A set of variables with efficient bitwise operations.
///
/// A VarSet is an abstraction over [BitSet], providing a similar API.
/// Variables are iterated in the order of their UID, not in the order of insertion:
/// use a [VarList] to preserve the order.
#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct VarSet {
    pub(crate) variables: BitSet,
}

impl VarSet {
    /// Create an iterator over the contained variables
    pub fn iter(&self) -> Iter {
        self.into_iter()
    }

    /// Add a variable to this set
    pub fn insert(&mut self, var: Variable) {
        self.variables.insert(var.uid());
    }

    /// Remove a variable from this set
    pub fn remove(&mut self, var: Variable) {
        self.variables.remove(var.uid());
    }

    /// Test if a specific variable is in this set
    pub fn contains(&self, var: Variable) -> bool {
        self.variables.contains(var.uid())
    }

    /// Remove all variables from the other set
    pub fn difference_with(&mut self, vars: &Self) {
        self.variables.difference_with(&vars.variables);
    }

    /// Retain only the variables also included in the other set
    pub fn intersect_with(&mut self, vars: &Self) {
        self.variables.intersect_with(&vars.variables);
    }

    /// Add all variables from the other set
    pub fn union_with(&mut self, vars: &Self) {
        self.variables.union_with(&vars.variables);
    }

    /// Return true if this set contains all variables of the other set
    pub fn contains_all(&self, other: &Self) -> bool {
        self.variables.is_superset(&other.variables)
    }

    /// Return the number of variables in this set
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Return whether there are no selected variable in this set
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

impl FromIterator<Variable> for VarSet {
    fn from_iter<I: IntoIterator<Item = Variable>>(iter: I) -> Self {
        let mut vs = VarSet::default();
        vs.extend(iter);
        vs
    }
}

impl Extend<Variable> for VarSet {
    fn extend<T: IntoIterator<Item = Variable>>(&mut self, iter: T) {
        for v in iter {
            self.insert(v);
        }
    }
}

impl fmt::Display for VarSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{{}}}", self.iter().join(", "))
    }
}

/// Iterate over variables in a [VarSet]
pub struct Iter<'a>(bit_set::Iter<'a, u32>);

impl Iterator for Iter<'_> {
    type Item = Variable;
    fn next(&mut self) -> Option<Self::Item> {
        self.0.by_ref().find_map(Variable::from_uid)
    }
}

impl<'a> IntoIterator for &'a VarSet {
    type Item = Variable;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        Iter(self.variables.iter())
    }
}

/// An ordered list of distinct variables.
///
/// Variables are kept in the order of their first insertion: inserting a variable
/// which is already in the list has no effect. This order defines the order of
/// [enumerated assignments](Assignments).
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct VarList {
    order: Vec<Variable>,
    members: VarSet,
}

impl VarList {
    delegate! {
        to self.order {
            pub fn len(&self) -> usize;
            pub fn is_empty(&self) -> bool;
            pub fn iter(&self) -> std::slice::Iter<'_, Variable>;
        }
        to self.members {
            pub fn contains(&self, var: Variable) -> bool;
        }
    }

    /// Append a variable if it is not yet in the list.
    ///
    /// Return true if the variable was added.
    pub fn insert(&mut self, var: Variable) -> bool {
        if self.members.contains(var) {
            return false;
        }
        self.members.insert(var);
        self.order.push(var);
        true
    }

    /// The set of variables in this list
    pub fn as_set(&self) -> &VarSet {
        &self.members
    }

    /// The variables of this list which are not in the given set, in the same order
    pub fn without(&self, excluded: &VarSet) -> VarList {
        self.iter().filter(|v| !excluded.contains(**v)).copied().collect()
    }
}

impl FromIterator<Variable> for VarList {
    fn from_iter<I: IntoIterator<Item = Variable>>(iter: I) -> Self {
        let mut vl = VarList::default();
        for v in iter {
            vl.insert(v);
        }
        vl
    }
}

impl<'a> IntoIterator for &'a VarList {
    type Item = &'a Variable;
    type IntoIter = std::slice::Iter<'a, Variable>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.iter()
    }
}

impl fmt::Display for VarList {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}]", self.iter().join(", "))
    }
}

//! Parse and analyse propositional sentences.
//!
//! A [Sentence] is built from an infix expression where each variable is a single character,
//! combined with the ```~``` (NOT), ```&``` (AND) and ```|``` (OR) operators and parenthesis.
//! Spaces are ignored. NOT binds tighter than AND, which binds tighter than OR.
//! The parsed sentence stores its tokens in postfix order.
//!
//! ```
//! use senkit::{parse, Proposition};
//! # use senkit::SenkitError;
//! # fn main() -> Result<(), SenkitError> {
//!
//! let sentence = parse("a | b & ~c")?;
//! assert_eq!(sentence.to_string(), "a b c ~ & |");
//! assert_eq!(sentence.to_infix()?, "a | b & ~c");
//! # Ok(())
//! # }
//! ```
//!
//! # Assignments and outcomes
//!
//! An [Assignment] gives a truth value to each variable of a sentence. The [Proposition] trait
//! evaluates a sentence on an assignment and enumerates all assignments of its distinct variables
//! (in order of first occurrence) to derive its outcomes. The order of [enumerated assignments](Assignments)
//! follows the binary representation of their index: the first variable is the most significant digit.
//!
//! ```
//! use senkit::{parse, Proposition};
//! # use senkit::SenkitError;
//! # fn main() -> Result<(), SenkitError> {
//!
//! let sentence = parse("a & ~b")?;
//! assert_eq!(sentence.evaluate(&"a ~b".parse()?)?, true);
//!
//! // a=0 b=0 ; a=0 b=1 ; a=1 b=0 ; a=1 b=1
//! assert_eq!(sentence.all_outcomes()?, vec![false, false, true, false]);
//! assert_eq!(sentence.satisfying_assignments()?.len(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! # Semantic properties
//!
//! A sentence is *valid* if all assignments satisfy it, *satisfiable* if at least one assignment
//! satisfies it and *contingent* if it is satisfiable but not valid.
//! These properties are computed by enumerating all `2^n` assignments, for each query.
//!
//! ```
//! use senkit::{parse, Proposition};
//! # use senkit::SenkitError;
//! # fn main() -> Result<(), SenkitError> {
//!
//! assert!(parse("a | ~a")?.valid()?);
//! assert!(!parse("a & ~a")?.satisfiable()?);
//! assert!(parse("a & b")?.contingent()?);
//! # Ok(())
//! # }
//! ```
//!
//! # Entailment and equivalence
//!
//! A sentence entails another one if all assignments satisfying the first one also satisfy the second.
//! Two sentences are equivalent if they entail each other. The variables of one of the sentences
//! must include the variables of the other one. The result is a [ThreeValued] value.
//!
//! ```
//! use senkit::{parse, Proposition, ThreeValued};
//! # use senkit::SenkitError;
//! # fn main() -> Result<(), SenkitError> {
//!
//! let a = parse("a")?;
//! let a_and_b = parse("a & b")?;
//! assert_eq!(a_and_b.entails(&a)?, ThreeValued::True);
//! assert_eq!(a.entails(&a_and_b)?, ThreeValued::False);
//! assert_eq!(a_and_b.equivalent(&parse("b & a")?)?, ThreeValued::True);
//! # Ok(())
//! # }
//! ```

mod assignment;
pub mod efmt;
mod entail;
mod error;
mod parse;
mod proposition;
mod sentence;
mod token;
mod variable;

#[cfg(test)]
mod tests;

#[macro_use]
extern crate pest_derive;

// Export public structures and API
pub use assignment::{Assignment, Assignments};
pub use entail::{entails, equivalent, ThreeValued};
pub use error::{EvaluationError, ParseError, SenkitError};
pub use parse::{parse, to_postfix, tokenize};
pub use proposition::{Properties, Proposition};
pub use sentence::Sentence;
pub use token::{Associativity, Operator, Token};
pub use variable::{VarList, VarSet, Variable};

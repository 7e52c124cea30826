use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

use crate::*;

/// Infix text of a random well-formed sentence over a few variables
#[derive(Debug, Clone)]
struct Text(String);

const NAMES: [char; 5] = ['a', 'b', 'c', 'd', 'e'];

fn random_text(g: &mut Gen, depth: usize) -> String {
    let choice = match depth {
        0 => 0,
        _ => u8::arbitrary(g) % 4,
    };
    match choice {
        1 => format!("~{}", random_text(g, depth - 1)),
        2 => format!("({} & {})", random_text(g, depth - 1), random_text(g, depth - 1)),
        3 => format!("{} | {}", random_text(g, depth - 1), random_text(g, depth - 1)),
        _ => g.choose(&NAMES).copied().unwrap_or('a').to_string(),
    }
}

impl Arbitrary for Text {
    fn arbitrary(g: &mut Gen) -> Self {
        Text(random_text(g, 4))
    }
}

#[test]
fn documented_examples() -> Result<(), SenkitError> {
    assert_eq!(parse("a&b")?.to_string(), "a b &");
    assert_eq!(parse("~a|b")?.to_string(), "a ~ b |");
    assert_eq!(parse("a|b&c")?.to_string(), "a b c & |");
    assert_eq!(parse("(a|b)&c")?.to_string(), "a b | c &");

    assert!(parse("a|~a")?.valid()?);
    assert_eq!(parse("a|~a")?.all_outcomes()?, vec![true, true]);
    assert!(!parse("a&~a")?.satisfiable()?);
    assert_eq!(parse("a&~a")?.all_outcomes()?, vec![false, false]);
    assert!(parse("a&b")?.contingent()?);
    assert!(!parse("a|~a")?.contingent()?);
    assert!(!parse("a&~a")?.contingent()?);

    assert_eq!(entails(&parse("a&b")?, &parse("a")?)?, ThreeValued::True);
    assert_eq!(entails(&parse("a")?, &parse("a&b")?)?, ThreeValued::False);
    assert_eq!(equivalent(&parse("a&b")?, &parse("b&a")?)?, ThreeValued::True);
    assert_eq!(parse("a|b")?.satisfying_assignments()?.len(), 3);
    assert_eq!(parse("(a&b)").err(), None);
    assert_eq!(parse("(a&b").err(), Some(ParseError::MismatchedParenthesis));
    Ok(())
}

#[quickcheck]
fn outcome_count(text: Text) -> Result<bool, SenkitError> {
    let sentence = parse(&text.0)?;
    let outcomes = sentence.all_outcomes()?;
    Ok(outcomes.len() == 1 << sentence.distinct_count())
}

#[quickcheck]
fn contingent_iff_satisfiable_not_valid(text: Text) -> Result<bool, SenkitError> {
    let sentence = parse(&text.0)?;
    let expected = sentence.satisfiable()? && !sentence.valid()?;
    Ok(sentence.contingent()? == expected)
}

#[quickcheck]
fn negation_flips_outcomes(text: Text) -> Result<bool, SenkitError> {
    let sentence = parse(&text.0)?;
    let negated = parse(&format!("~({})", text.0))?;
    let flipped: Vec<bool> = sentence.all_outcomes()?.iter().map(|b| !b).collect();
    Ok(negated.all_outcomes()? == flipped)
}

#[quickcheck]
fn satisfying_assignments_are_true_outcomes(text: Text) -> Result<bool, SenkitError> {
    let sentence = parse(&text.0)?;
    let satisfying = sentence.satisfying_assignments()?;
    let count = sentence.all_outcomes()?.iter().filter(|b| **b).count();
    Ok(satisfying.len() == count)
}

#[quickcheck]
fn self_entailment(text: Text) -> Result<bool, SenkitError> {
    let sentence = parse(&text.0)?;
    Ok(sentence.entails(&sentence)? == ThreeValued::True
        && sentence.equivalent(&sentence)? == ThreeValued::True)
}

#[quickcheck]
fn entails_weaker_disjunction(text: Text) -> Result<bool, SenkitError> {
    let sentence = parse(&text.0)?;
    let weaker = parse(&format!("({}) | z", text.0))?;
    Ok(sentence.entails(&weaker)? == ThreeValued::True)
}

#[quickcheck]
fn infix_round_trip(text: Text) -> Result<bool, SenkitError> {
    let sentence = parse(&text.0)?;
    Ok(parse(&sentence.to_infix()?)? == sentence)
}

use senkit::*;

fn main() -> Result<(), SenkitError> {
    env_logger::init();

    let first = parse("(a | b) & ~c")?;
    let second = parse("a | b")?;

    println!("First sentence: {} (postfix: {})", first.to_infix()?, &first);
    for (assignment, outcome) in first.truth_table()? {
        println!("  {} => {}", assignment, outcome);
    }

    let properties = first.properties()?;
    println!(
        "Valid: {}, satisfiable: {}, contingent: {}",
        properties.valid, properties.satisfiable, properties.contingent
    );

    println!("First entails second: {}", first.entails(&second)?);
    println!("Second entails first: {}", second.entails(&first)?);
    println!("Equivalent: {}", first.equivalent(&second)?);
    Ok(())
}

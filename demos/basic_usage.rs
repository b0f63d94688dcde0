// ============================================================================
// Basic Usage Example
// ============================================================================

use numeric_box::prelude::*;

fn main() {
    // Trace events show where a chain fails the finite-number gate
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Numeric Box Example ===\n");

    let golden = NumericBox::of(5).sqrt().add(1).div(2);
    println!("Golden ratio: {}", golden);

    let add = |a: f64| move |b: f64| a + b;
    let hypotenuse = NumericBox::pure(add)
        .ap(NumericBox::of(3).sqr())
        .ap(NumericBox::of(4).sqr())
        .sqrt();
    println!("Hypotenuse of (3, 4): {}", hypotenuse);

    println!("\n=== Invalid Chains ===");

    let divided = NumericBox::of(1).div(0);
    println!("1 / 0 held as {:?}, valid: {}", divided, divided.is_valid());
    println!("(1 / 0) + 1 = {}", divided.inc());

    let text = NumericBox::of(2).add("foo");
    println!("2 + \"foo\" = {}", text);

    match NumericBox::of(-4).sqrt().try_value() {
        Ok(root) => println!("sqrt(-4) = {}", root),
        Err(err) => println!("sqrt(-4) failed: {}", err),
    }
}

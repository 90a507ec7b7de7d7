//! Dispatch Demo
//!
//! Runs a handful of sample packages through the classifier and prints
//! the stack each one is routed to.

use packsort::{classify, Result};

fn main() -> Result<()> {
    let samples = [
        (100.0, 100.0, 100.0, 10.0),
        (100.0, 100.0, 99.0, 19.999),
        (150.0, 10.0, 10.0, 5.0),
        (10.0, 10.0, 10.0, 20.0),
        (200.0, 200.0, 1.0, 25.0),
        (0.0, 0.0, 0.0, 0.0),
    ];

    for (width, height, length, mass) in samples {
        let stack = classify(width, height, length, mass)?;
        println!("classify({width}, {height}, {length}, {mass}) -> {stack}");
    }
    Ok(())
}

//! Command-line driver for the integer-sequence pipeline: parses naturals
//! from the arguments and runs two ready-made programs over them, the
//! identity and a fixed-point-built list sum. Run with
//! `RUST_LOG=lambdaxp=trace` to watch the codec at work.

use lambdaxp::codec::{Natural, church_encode};
use lambdaxp::combinators::{add, car, cdr, cons, empty_list, fix, identity, is_empty};
use lambdaxp::expression::Expression;
use lambdaxp::pipeline::run_on_integer_sequence;
use std::process;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("usage: sequencer NATURAL [NATURAL...]");
        eprintln!("Runs the identity and list-sum programs over the given sequence.");
        process::exit(1);
    }

    let mut input: Vec<Natural> = Vec::new();
    for arg in &args {
        match arg.parse::<Natural>() {
            Ok(n) => input.push(n),
            Err(err) => {
                eprintln!("not a natural number: {arg} ({err})");
                process::exit(1);
            }
        }
    }

    let mut echoed = Vec::new();
    run_on_integer_sequence(&input, &identity(), |n| echoed.push(n));
    println!("identity: {echoed:?}");

    let mut summed = Vec::new();
    run_on_integer_sequence(&input, &sum_program(), |n| summed.push(n));
    println!("sum:      {summed:?}");
}

/// λl. cons (sum l) empty - sums a Scott list of Church numerals through
/// the fixed-point combinator.
fn sum_program() -> Expression {
    let step = Expression::new(|recur| {
        Expression::new(move |l| {
            let rest = recur.apply(cdr().apply(l.clone()));
            let total = add().apply(car().apply(l.clone())).apply(rest);
            is_empty()
                .apply(l.clone())
                .apply(church_encode(0))
                .apply(total)
        })
    });
    let sum = fix().apply(step);
    Expression::new(move |l| cons().apply(sum.apply(l)).apply(empty_list()))
}

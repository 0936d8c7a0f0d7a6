//! Runs an arbitrary lambda term as a pure transformation over a sequence of
//! natural numbers, bridging native values through the codec on both sides.
//! This module is the external-representation bridge of the crate: nothing
//! here evaluates beyond one application of the program term; all actual
//! computation happens inside the codec's forcing.

use crate::codec::{Natural, church_decode, church_encode, scott_decode, scott_encode};
use crate::expression::Expression;

/// Run `program` over `input`, emitting the transformed sequence.
///
/// Steps: Church-encode every input natural, Scott-encode the results into
/// one list term L, apply `program` to L (a single deferred application —
/// the pure Expression → Expression transformation), Scott-decode the
/// result, and Church-decode each element to `emit`, in order.
///
/// `program` is not validated structurally. A program that does not map a
/// Scott list of Church numerals to another one produces garbage counts or
/// diverges, per the decoders' documented behavior.
///
/// # Example
/// ```
/// use lambdaxp::combinators::identity;
/// use lambdaxp::pipeline::run_on_integer_sequence;
///
/// let mut out = Vec::new();
/// run_on_integer_sequence(&[3, 1, 4], &identity(), |n| out.push(n));
/// assert_eq!(out, [3, 1, 4]);
/// ```
pub fn run_on_integer_sequence<F>(input: &[Natural], program: &Expression, mut emit: F)
where
    F: FnMut(Natural),
{
    log::debug!("running program over {} input values", input.len());

    let encoded: Vec<Expression> = input.iter().copied().map(church_encode).collect();
    let transformed = program.apply(scott_encode(&encoded));

    let mut produced = 0usize;
    scott_decode(&transformed, |term| {
        emit(church_decode(&term));
        produced += 1;
    });

    log::debug!("program produced {produced} output values");
}

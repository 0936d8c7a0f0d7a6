//! lambdaxp - Minimal evaluator for the untyped lambda calculus
//!
//! Lambda terms are first-class [`expression::Expression`] values. The crate
//! supplies a standard combinator library (booleans, the fixed-point
//! combinator, the SKI basis with iota, Church-numeral arithmetic, Scott
//! lists) and bidirectional bridges between native integer sequences and
//! calculus-level encodings, so an arbitrary term can be run as a pure
//! transformation over a sequence of natural numbers:
//!
//! ```
//! use lambdaxp::combinators::identity;
//! use lambdaxp::pipeline::run_on_integer_sequence;
//!
//! let mut out = Vec::new();
//! run_on_integer_sequence(&[3, 1, 4], &identity(), |n| out.push(n));
//! assert_eq!(out, [3, 1, 4]);
//! ```
//!
//! ## Evaluation contract
//!
//! The public application operator ([`expression::Expression::apply`]) is
//! *deferred* by exactly one step: applying a term builds a suspended
//! application and runs nothing. This call-by-name discipline on top of an
//! eagerly evaluated host is what lets the fixed-point combinator apply a
//! self-application to itself without unfolding forever. The decoders in
//! [`codec`] drive suspended values to completion with a fixed number of
//! trailing forcing applications.
//!
//! ## Totality and divergence
//!
//! Application is total: it always yields a term, never an error, and there
//! is deliberately no error type anywhere in the API. Decoding a term that
//! does not behave as the expected Church or Scott shape silently yields
//! whatever the decoder's probes observed. The calculus is untyped and
//! Turing-complete, so a program built with an unguarded fixed point can
//! diverge; no step bound or timeout is imposed. Host recursion depth during
//! decoding grows with numeral magnitude and list length, and no explicit
//! limit is enforced: callers who need liveness or bounded stacks must bound
//! their inputs and programs themselves.
//!
//! ## Modules
//!
//! - `expression`: the core term type with deferred application
//! - `combinators`: the named combinator library and its registry
//! - `codec`: Church/Scott encoding and decoding across the host boundary
//! - `pipeline`: running a term over native integer sequences

pub mod codec;
pub mod combinators;
pub mod expression;
pub mod pipeline;

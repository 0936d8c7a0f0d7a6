//! Core term representation for the untyped lambda calculus. The sole type,
//! [`Expression`], is a value that maps an argument term to a result term;
//! numerals, booleans and lists all exist only through how a term behaves
//! under further application. Terms are immutable, capture their free values
//! by value at construction time, and clone cheaply (a shared handle to the
//! underlying closure). The public application operator,
//! [`Expression::apply`], is deferred by exactly one reduction step — the
//! property that makes self-referential definitions such as the fixed-point
//! combinator expressible on top of an eagerly evaluated host language. The
//! crate-internal eager counterpart is [`Expression::invoke`].

use std::fmt;
use std::sync::Arc;

/// Canonical host signature of a term body: one term in, one term out.
type Body = dyn Fn(Expression) -> Expression + Send + Sync;

/// A term of the untyped lambda calculus.
///
/// Semantically, every `Expression` is a function from `Expression` to
/// `Expression`. A term is built either directly from a native unary mapping
/// ([`Expression::new`]) or by applying one term to another
/// ([`Expression::apply`]). Application is total: it always yields a term
/// and never signals failure — applying a term to an argument the combinator
/// library would consider ill-shaped produces a structurally valid but
/// semantically meaningless term, exactly as the untyped calculus prescribes.
///
/// No equality or identity is defined for terms; only application behavior
/// is observable.
#[derive(Clone)]
pub struct Expression(Arc<Body>);

impl Expression {
    /// Wrap a native unary mapping as a term.
    ///
    /// The mapping is the term's one-step reduction behavior. It runs when
    /// the term is forced, not when the term is built, and not when the term
    /// is merely applied through [`Expression::apply`]. Captured free values
    /// must be owned (moved or cloned in): a term is a self-contained
    /// snapshot of its environment.
    pub fn new<F>(body: F) -> Self
    where
        F: Fn(Expression) -> Expression + Send + Sync + 'static,
    {
        Expression(Arc::new(body))
    }

    /// Apply this term to an argument, deferred by one step.
    ///
    /// Nothing is evaluated here: the result is a suspended application
    /// that, when itself forced with some argument, first reduces `self` on
    /// `argument` and then reduces that result on the forcing argument. A
    /// chain of `apply` calls therefore builds thunks without running any
    /// body, so a self-application such as the one inside the fixed-point
    /// combinator returns immediately instead of unfolding forever.
    pub fn apply(&self, argument: Expression) -> Expression {
        let callee = self.clone();
        Expression::new(move |forced_with| callee.invoke(argument.clone()).invoke(forced_with))
    }

    /// Apply this term to an argument immediately, producing the true
    /// one-step reduct.
    ///
    /// Restricted to the crate: the combinator library and the codec need
    /// real reduction steps (the fixed point advances one eager step per
    /// unfolding, and decoding must flush suspended applications), while
    /// everything outside composes terms with the deferred
    /// [`Expression::apply`] only.
    pub(crate) fn invoke(&self, argument: Expression) -> Expression {
        (self.0)(argument)
    }
}

impl fmt::Debug for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Terms are opaque closures; there is no structure to print.
        write!(f, "#<expression>")
    }
}

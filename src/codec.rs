//! Bridges between host values and calculus-level encodings: Church numerals
//! (a natural n as λf x. fⁿ x) and Scott lists (nested pairs routed through
//! handlers). Encoding is a bounded host loop; decoding observes a term by
//! probing it and *forcing* the suspended applications the probe leaves
//! behind. Because the public application operator defers every application
//! by exactly one step, each decoder ends with two immediate applications of
//! the identity combinator: the first hands the term its final argument, the
//! second flushes the deferred chain, which then drives itself to completion.
//!
//! Decoding is deliberately unchecked: a term that does not behave as the
//! expected Church or Scott shape yields whatever the probes happened to
//! observe, never an error. Host recursion depth during decoding grows with
//! numeral magnitude and list length; no limit is enforced here.

use crate::combinators::{car, cdr, cons, empty_list, fix, identity, is_empty};
use crate::expression::Expression;
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Host-side natural number type crossing the codec boundary.
pub type Natural = usize;

/// Church-encode a natural number: λf x. f applied to x, n times.
///
/// Bounded by host numeric range; encoding itself performs no evaluation
/// (the n applications are deferred like any others).
///
/// # Example
/// ```
/// use lambdaxp::codec::{church_decode, church_encode};
///
/// assert_eq!(church_decode(&church_encode(3)), 3);
/// ```
pub fn church_encode(n: Natural) -> Expression {
    Expression::new(move |f| {
        Expression::new(move |x| {
            let mut applied = x;
            for _ in 0..n {
                applied = f.apply(applied);
            }
            applied
        })
    })
}

/// Church-decode a term by counting how often it applies its first argument
/// to its second.
///
/// Correct only for terms that behave as Church numerals. Any other shape
/// yields whatever count the probe happened to observe — by design this is
/// not detected and not an error.
pub fn church_decode(numeral: &Expression) -> Natural {
    let observed = Arc::new(AtomicUsize::new(0));
    let probe = {
        let observed = Arc::clone(&observed);
        Expression::new(move |x| {
            observed.fetch_add(1, Ordering::Relaxed);
            x
        })
    };

    numeral
        .invoke(probe)
        .invoke(identity())
        .invoke(identity());

    let count = observed.load(Ordering::Relaxed);
    log::trace!("church_decode observed {count} applications");
    count
}

/// Scott-encode a sequence of terms into one list term: a right fold of
/// `cons` from last to first, seeded with `empty_list`.
///
/// # Example
/// ```
/// use lambdaxp::codec::{church_decode, church_encode, scott_decode, scott_encode};
///
/// let list = scott_encode(&[church_encode(1), church_encode(2)]);
/// let mut out = Vec::new();
/// scott_decode(&list, |term| out.push(church_decode(&term)));
/// assert_eq!(out, [1, 2]);
/// ```
pub fn scott_encode(items: &[Expression]) -> Expression {
    let mut list = empty_list();
    for item in items.iter().rev() {
        list = cons().apply(item.clone()).apply(list);
    }
    list
}

/// Scott-decode a list term, handing each element to `emit` in order.
///
/// A fixed-point-built uncons routine walks the list: at each step the
/// `is_empty` selection of the current value either halts on `empty_list`
/// (which is inert under the trailing forcing applications) or visits —
/// records the head, recurses on the tail. Elements are recorded during the
/// calculus-level recursion and handed to `emit`, in order, once it has
/// terminated. A term that is not a well-founded Scott list either yields
/// garbage or never terminates; neither is detected here.
pub fn scott_decode<F>(list: &Expression, mut emit: F)
where
    F: FnMut(Expression),
{
    let collected: Arc<Mutex<Vec<Expression>>> = Arc::new(Mutex::new(Vec::new()));

    let uncons = {
        let collected = Arc::clone(&collected);
        Expression::new(move |recur| {
            let collected = Arc::clone(&collected);
            Expression::new(move |l| {
                let visit = {
                    let collected = Arc::clone(&collected);
                    let recur = recur.clone();
                    let l = l.clone();
                    Expression::new(move |driver| {
                        collected.lock().push(car().invoke(l.clone()));
                        recur.invoke(cdr().invoke(l.clone())).invoke(driver)
                    })
                };
                is_empty().invoke(l).invoke(empty_list()).invoke(visit)
            })
        })
    };

    fix()
        .invoke(uncons)
        .invoke(list.clone())
        .invoke(identity())
        .invoke(identity());

    let mut elements = collected.lock();
    log::trace!("scott_decode collected {} elements", elements.len());
    for element in elements.drain(..) {
        emit(element);
    }
}

//! The standard combinator library.
//!
//! Every entry is a closed term with a fixed, named behavior defined purely
//! through application: booleans select between their two arguments, Church
//! numerals apply their first argument n times to their second, Scott lists
//! route a handler to their head and tail. Each combinator is exposed as a
//! constructor function returning a fresh (semantically constant, pure) term,
//! and the whole set is also registered in a name-indexed registry for
//! callers that assemble programs from canonical names.
//!
//! ## Eager and deferred application
//!
//! Combinator bodies compose terms with the deferred
//! [`Expression::apply`]. The one exception is [`fix`], which value-calls
//! the self-application of its two halves so the unfolding advances exactly
//! one eager step each time the fixed point is forced; with an eager
//! application everywhere else, `fix` applied to any function would unfold
//! forever before producing a usable result.
//!
//! ## Adding a combinator
//!
//! 1. Implement the constructor following the `fn() -> Expression` shape
//! 2. Add it to `COMBINATORS` with its canonical name
//! 3. Cover its observable behavior in the tests below

use crate::codec::church_encode;
use crate::expression::Expression;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Shorthand for wrapping a host closure as a term; keeps the nested
/// combinator bodies readable.
fn lambda<F>(body: F) -> Expression
where
    F: Fn(Expression) -> Expression + Send + Sync + 'static,
{
    Expression::new(body)
}

/// Logical truth: λx y. x, selecting the first of two arguments.
pub fn truth() -> Expression {
    lambda(|x| lambda(move |_y| x.clone()))
}

/// Logical falsity: λx y. y, selecting the second of two arguments.
pub fn falsity() -> Expression {
    lambda(|_x| lambda(|y| y))
}

/// The fixed-point combinator Y: λf. (λx. f (x x)) (λx. f (x x)).
///
/// `fix` applied to f behaves as f applied to (`fix` applied to f), which
/// expresses recursion without named self-reference. The self-application of
/// the two halves is an immediate value-call, so each forcing of the fixed
/// point advances the unfolding by exactly one eager step while the
/// f (x x) body stays suspended under deferred application.
pub fn fix() -> Expression {
    lambda(|f| {
        let half = lambda(move |x| f.apply(x.apply(x.clone())));
        half.invoke(half.clone())
    })
}

/// The I combinator: λx. x.
pub fn identity() -> Expression {
    lambda(|x| x)
}

/// The K combinator: λx y. x.
pub fn constant() -> Expression {
    lambda(|x| lambda(move |_y| x.clone()))
}

/// The S combinator: λx y z. x z (y z).
pub fn substitution() -> Expression {
    lambda(|x| {
        lambda(move |y| {
            let x = x.clone();
            lambda(move |z| x.apply(z.clone()).apply(y.apply(z)))
        })
    })
}

/// The iota combinator: λf. f S K.
pub fn iota() -> Expression {
    lambda(|f| f.apply(substitution()).apply(constant()))
}

/// Church successor: λn f x. f (n f x).
pub fn succ() -> Expression {
    lambda(|n| {
        lambda(move |f| {
            let n = n.clone();
            lambda(move |x| f.apply(n.apply(f.clone()).apply(x)))
        })
    })
}

/// Church predecessor via the pair-rotation trick: iterate n times a step
/// that rotates an (ignore, value) pair, seeded with a constant function on
/// x, and drop the last rotation. The predecessor of zero is zero.
pub fn pred() -> Expression {
    lambda(|n| {
        lambda(move |f| {
            let n = n.clone();
            lambda(move |x| {
                let rotate = {
                    let f = f.clone();
                    lambda(move |g| {
                        let f = f.clone();
                        lambda(move |h| h.apply(g.apply(f.clone())))
                    })
                };
                let seed = lambda(move |_y| x.clone());
                n.apply(rotate).apply(seed).apply(lambda(|y| y))
            })
        })
    })
}

/// Church addition: λn m. n succ m.
pub fn add() -> Expression {
    lambda(|n| lambda(move |m| n.apply(succ()).apply(m)))
}

/// Church subtraction: λn m. m pred n, saturating at zero through [`pred`].
pub fn sub() -> Expression {
    lambda(|n| lambda(move |m| m.apply(pred()).apply(n.clone())))
}

/// Church multiplication: λn m. n (add m) 0.
pub fn mult() -> Expression {
    lambda(|n| lambda(move |m| n.apply(add().apply(m)).apply(church_encode(0))))
}

/// Zero test on Church numerals: λn. n (λx. falsity) truth.
pub fn is_zero() -> Expression {
    lambda(|n| n.apply(lambda(|_x| falsity())).apply(truth()))
}

/// Scott pair constructor: λa b f. f a b.
pub fn cons() -> Expression {
    lambda(|a| {
        lambda(move |b| {
            let a = a.clone();
            lambda(move |f| f.apply(a.clone()).apply(b.clone()))
        })
    })
}

/// Head of a Scott pair: λp. p (λx y. x).
pub fn car() -> Expression {
    lambda(|p| p.apply(lambda(|x| lambda(move |_y| x.clone()))))
}

/// Tail of a Scott pair: λp. p (λx y. y).
pub fn cdr() -> Expression {
    lambda(|p| p.apply(lambda(|_x| lambda(|y| y))))
}

/// The empty Scott list: λf. (λx y. x).
///
/// It ignores the uncons handler and yields a truth-shaped selector, which
/// is both what makes [`is_empty`] answer truth and what lets the list
/// decoder halt: the value absorbs the decoder's trailing forcing
/// applications without further effect.
pub fn empty_list() -> Expression {
    lambda(|_f| lambda(|x| lambda(move |_y| x.clone())))
}

/// Emptiness test on Scott lists: λl. l (λx y. falsity).
///
/// [`empty_list`] never looks at the handler and yields truth; any cons cell
/// routes its head and tail through the handler and yields falsity.
pub fn is_empty() -> Expression {
    lambda(|l| l.apply(lambda(|_x| lambda(|_y| falsity()))))
}

/// A named entry in the combinator library.
#[derive(Debug, Clone, Copy)]
pub struct Combinator {
    /// Canonical name, as used in the lambda calculus literature.
    pub name: &'static str,
    /// Builds a fresh copy of the combinator. Combinators are pure values,
    /// so separate copies are interchangeable.
    pub build: fn() -> Expression,
}

/// Registry of the whole combinator library, in presentation order.
static COMBINATORS: LazyLock<Vec<Combinator>> = LazyLock::new(|| {
    vec![
        Combinator { name: "truth", build: truth },
        Combinator { name: "falsity", build: falsity },
        Combinator { name: "Y", build: fix },
        Combinator { name: "I", build: identity },
        Combinator { name: "K", build: constant },
        Combinator { name: "S", build: substitution },
        Combinator { name: "i", build: iota },
        Combinator { name: "succ", build: succ },
        Combinator { name: "pred", build: pred },
        Combinator { name: "add", build: add },
        Combinator { name: "sub", build: sub },
        Combinator { name: "mult", build: mult },
        Combinator { name: "is_zero", build: is_zero },
        Combinator { name: "cons", build: cons },
        Combinator { name: "car", build: car },
        Combinator { name: "cdr", build: cdr },
        Combinator { name: "empty_list", build: empty_list },
        Combinator { name: "is_empty", build: is_empty },
    ]
});

/// Lazy map from canonical name to registry entry (private - use find_combinator)
static COMBINATORS_BY_NAME: LazyLock<HashMap<&'static str, &'static Combinator>> =
    LazyLock::new(|| {
        let entries: &'static [Combinator] = COMBINATORS.as_slice();
        entries.iter().map(|c| (c.name, c)).collect()
    });

/// All combinators in the library, in presentation order.
pub fn all_combinators() -> &'static [Combinator] {
    COMBINATORS.as_slice()
}

/// Look up a combinator by canonical name and build a fresh copy of it.
pub fn find_combinator(name: &str) -> Option<Expression> {
    COMBINATORS_BY_NAME.get(name).map(|c| (c.build)())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{Natural, church_decode};
    use pretty_assertions::assert_eq;

    #[test]
    fn arithmetic_decodes_as_expected() {
        let cases: Vec<(&str, Expression, Natural)> = vec![
            ("succ 0", succ().apply(church_encode(0)), 1),
            ("succ 41", succ().apply(church_encode(41)), 42),
            ("pred 0", pred().apply(church_encode(0)), 0),
            ("pred 1", pred().apply(church_encode(1)), 0),
            ("pred 10", pred().apply(church_encode(10)), 9),
            (
                "add 2 3",
                add().apply(church_encode(2)).apply(church_encode(3)),
                5,
            ),
            (
                "add 0 7",
                add().apply(church_encode(0)).apply(church_encode(7)),
                7,
            ),
            (
                "sub 5 2",
                sub().apply(church_encode(5)).apply(church_encode(2)),
                3,
            ),
            (
                "sub 2 5",
                sub().apply(church_encode(2)).apply(church_encode(5)),
                0,
            ),
            (
                "sub 6 6",
                sub().apply(church_encode(6)).apply(church_encode(6)),
                0,
            ),
            (
                "mult 3 4",
                mult().apply(church_encode(3)).apply(church_encode(4)),
                12,
            ),
            (
                "mult 0 9",
                mult().apply(church_encode(0)).apply(church_encode(9)),
                0,
            ),
            (
                "mult 9 0",
                mult().apply(church_encode(9)).apply(church_encode(0)),
                0,
            ),
        ];

        for (label, term, expected) in &cases {
            assert_eq!(church_decode(term), *expected, "{label}");
        }
    }

    #[test]
    fn booleans_select_between_numerals() {
        let chosen = truth().apply(church_encode(7)).apply(church_encode(9));
        assert_eq!(church_decode(&chosen), 7);

        let chosen = falsity().apply(church_encode(7)).apply(church_encode(9));
        assert_eq!(church_decode(&chosen), 9);
    }

    #[test]
    fn is_zero_observes_zero_and_nonzero() {
        // Observable only through selection: force the boolean to pick
        // between two distinguishable numerals and decode the pick.
        let on_zero = is_zero().apply(church_encode(0));
        let picked = on_zero.apply(church_encode(7)).apply(church_encode(9));
        assert_eq!(church_decode(&picked), 7);

        let on_one = is_zero().apply(church_encode(1));
        let picked = on_one.apply(church_encode(7)).apply(church_encode(9));
        assert_eq!(church_decode(&picked), 9);
    }

    #[test]
    fn subtraction_saturates_at_zero() {
        let below_zero = sub().apply(church_encode(2)).apply(church_encode(5));
        let flag = is_zero().apply(below_zero);
        let picked = flag.apply(church_encode(1)).apply(church_encode(0));
        assert_eq!(church_decode(&picked), 1);
    }

    #[test]
    fn ski_basis_behaves() {
        assert_eq!(church_decode(&identity().apply(church_encode(5))), 5);

        let k_picks_first = constant().apply(church_encode(3)).apply(church_encode(8));
        assert_eq!(church_decode(&k_picks_first), 3);

        // S K K behaves as the identity.
        let skk = substitution().apply(constant()).apply(constant());
        assert_eq!(church_decode(&skk.apply(church_encode(6))), 6);

        // So does iota applied to itself.
        let ii = iota().apply(iota());
        assert_eq!(church_decode(&ii.apply(church_encode(4))), 4);
    }

    #[test]
    fn list_selectors_pick_head_and_tail() {
        let rest = cons().apply(church_encode(2)).apply(empty_list());
        let pair = cons().apply(church_encode(1)).apply(rest);
        assert_eq!(church_decode(&car().apply(pair.clone())), 1);
        assert_eq!(church_decode(&car().apply(cdr().apply(pair))), 2);
    }

    #[test]
    fn is_empty_distinguishes_empty_from_cons() {
        let observe = |list: Expression| {
            let flag = is_empty().apply(list);
            church_decode(&flag.apply(church_encode(1)).apply(church_encode(0)))
        };

        assert_eq!(observe(empty_list()), 1);
        // Cons cells of arbitrary payloads answer falsity.
        assert_eq!(observe(cons().apply(truth()).apply(falsity())), 0);
        assert_eq!(observe(cons().apply(church_encode(5)).apply(empty_list())), 0);
    }

    #[test]
    fn fix_drives_recursion_over_numerals() {
        // triangular(n) = n + triangular(n - 1), triangular(0) = 0
        let step = Expression::new(|recur| {
            Expression::new(move |n| {
                let smaller = recur.apply(pred().apply(n.clone()));
                let total = add().apply(n.clone()).apply(smaller);
                is_zero()
                    .apply(n.clone())
                    .apply(church_encode(0))
                    .apply(total)
            })
        });
        let triangular = fix().apply(step);

        assert_eq!(church_decode(&triangular.apply(church_encode(0))), 0);
        assert_eq!(church_decode(&triangular.apply(church_encode(4))), 10);
    }

    #[test]
    fn registry_exposes_the_whole_library() {
        let names: Vec<&str> = all_combinators().iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            [
                "truth",
                "falsity",
                "Y",
                "I",
                "K",
                "S",
                "i",
                "succ",
                "pred",
                "add",
                "sub",
                "mult",
                "is_zero",
                "cons",
                "car",
                "cdr",
                "empty_list",
                "is_empty",
            ]
        );
    }

    #[test]
    fn find_combinator_builds_working_terms() {
        let found = find_combinator("succ").expect("succ is registered");
        assert_eq!(church_decode(&found.apply(church_encode(6))), 7);

        assert!(find_combinator("bogus").is_none());
    }
}

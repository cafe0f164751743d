/*!

The single-step reducer (§4.6, §4.7): the eagerness predicate and the `reduce` function that
performs one α/β/δ rewrite (or reports that none is available).

Reduction is normal order (leftmost-outermost) by default, biased by each node's `Priority`: an
`Eager` child of an application is driven to normal form before the application itself is
considered a candidate, and a `Lazy` abstraction in function position is never fired as a β-redex
by this function (a host that wants it forced must reduce inside it explicitly).

`reduce` threads the set of names bound by enclosing abstractions throughout: a variable whose name
is shadowed by an enclosing binder is never δ-expanded, numeral or otherwise, no matter what a
symbol table or the digit-literal convention would otherwise say (invariant 6 — a binder shadows a
free variable of the same name).

*/

use std::collections::HashMap;

use crate::abstractions::{Name, Set};
use crate::api::term::{is_numeral_literal, Term};
use crate::api::{Priority, ReduceKind};
use crate::core::church::church;
use crate::core::substitution::apply;

/// Whether this node requests eager reduction (§4.6): an `App` is eager if it is itself marked
/// `Eager` or if either child is (recursively); a `Var` is eager only if it's marked `Eager` and its
/// name isn't shadowed by an enclosing binder; an `Abs` is eager iff it's marked `Eager`.
pub fn is_eager(term: &Term, bound: &Set<Name>) -> bool {
  match term {
    Term::Var { name, priority, .. } => *priority == Priority::Eager && !bound.contains(name),
    Term::Abs { priority, .. } => *priority == Priority::Eager,
    Term::App { priority, fun, arg, .. } => {
      *priority == Priority::Eager || is_eager(fun, bound) || is_eager(arg, bound)
    }
  }
}

/// Whether this node's priority requests lazy (deferred) reduction (§4.6).
pub fn is_lazy(term: &Term) -> bool {
  term.priority() == Priority::Lazy
}

fn as_normal_form(term: &Term) -> Term {
  let mut copy = term.clone();
  copy.set_nf(true);
  copy
}

/// As `as_normal_form`, but also clears the priority annotation to `Neutral` (§4.7 Var step 5, Abs
/// step 3): a terminal leaf that will never be reduced further carries no further meaning in its
/// eager/lazy bias.
fn as_normal_form_neutral(term: &Term) -> Term {
  let mut copy = term.clone();
  copy.set_priority(Priority::Neutral);
  copy.set_nf(true);
  copy
}

/// Performs one rewrite step and reports what kind it was. A `None` kind means `term` is already
/// known (or has just been discovered) to be in normal form under `symbols`. `bound` is the set of
/// names bound by abstractions enclosing `term`.
pub fn reduce(term: &Term, symbols: &HashMap<Name, Term>, bound: &Set<Name>) -> (Term, ReduceKind) {
  if term.is_nf() {
    return (term.clone(), ReduceKind::None);
  }

  match term {
    Term::Var { name, priority, .. } => {
      if bound.contains(name) {
        (as_normal_form_neutral(term), ReduceKind::None)
      } else if is_numeral_literal(name) {
        let n: u64 = name.parse().expect("is_numeral_literal guarantees an all-digit name");
        let expanded = church(n).clone_with_priority(*priority);
        (expanded, ReduceKind::Delta)
      } else if let Some(definition) = symbols.get(name) {
        (definition.clone_with_priority(*priority), ReduceKind::Delta)
      } else {
        (as_normal_form_neutral(term), ReduceKind::None)
      }
    }

    Term::Abs { binder, body, priority, .. } => {
      let mut inner_bound = bound.clone();
      inner_bound.insert(binder.clone());
      let (new_body, kind) = reduce(body, symbols, &inner_bound);
      if kind == ReduceKind::None {
        (as_normal_form_neutral(term), ReduceKind::None)
      } else {
        (Term::abs_with_priority(binder.clone(), new_body, *priority), kind)
      }
    }

    Term::App { fun, arg, priority, .. } => {
      if is_eager(fun, bound) && !fun.is_nf() {
        let (new_fun, kind) = reduce(fun, symbols, bound);
        if kind != ReduceKind::None {
          return (Term::app_with_priority(new_fun, (**arg).clone(), *priority), kind);
        }
      }

      if is_eager(arg, bound) && !arg.is_nf() {
        let (new_arg, kind) = reduce(arg, symbols, bound);
        if kind != ReduceKind::None {
          return (Term::app_with_priority((**fun).clone(), new_arg, *priority), kind);
        }
      }

      if matches!(fun.as_ref(), Term::Abs { .. }) && !is_lazy(fun) {
        let (mut result, kind) = apply(fun, arg, bound);
        result.set_priority(*priority);
        return (result, kind);
      }

      if !fun.is_nf() {
        let (new_fun, kind) = reduce(fun, symbols, bound);
        if kind != ReduceKind::None {
          return (Term::app_with_priority(new_fun, (**arg).clone(), *priority), kind);
        }
      }

      if !arg.is_nf() {
        let (new_arg, kind) = reduce(arg, symbols, bound);
        if kind != ReduceKind::None {
          return (Term::app_with_priority((**fun).clone(), new_arg, *priority), kind);
        }
      }

      (as_normal_form(term), ReduceKind::None)
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn name(s: &str) -> Name {
    Name::from(s)
  }

  fn symbols() -> HashMap<Name, Term> {
    HashMap::new()
  }

  fn reduce_top(term: &Term, symbols: &HashMap<Name, Term>) -> (Term, ReduceKind) {
    reduce(term, symbols, &Set::default())
  }

  #[test]
  fn free_variable_is_already_normal() {
    let (result, kind) = reduce_top(&Term::var(name("x")), &symbols());
    assert_eq!(kind, ReduceKind::None);
    assert_eq!(result.to_string(), "x");
  }

  #[test]
  fn numeral_literal_expands_by_delta() {
    let (result, kind) = reduce_top(&Term::var(name("2")), &symbols());
    assert_eq!(kind, ReduceKind::Delta);
    assert_eq!(result.to_string(), "\\f.\\x. f (f x)");
  }

  #[test]
  fn symbol_table_entry_expands_by_delta() {
    let mut symbols = symbols();
    symbols.insert(name("id"), Term::abs(name("x"), Term::var(name("x"))));
    let (result, kind) = reduce_top(&Term::var(name("id")), &symbols);
    assert_eq!(kind, ReduceKind::Delta);
    assert_eq!(result.to_string(), "\\x. x");
  }

  #[test]
  fn beta_redex_fires_in_application_position() {
    // (\x. x) y -> y
    let term = Term::app(Term::abs(name("x"), Term::var(name("x"))), Term::var(name("y")));
    let (result, kind) = reduce_top(&term, &symbols());
    assert_eq!(kind, ReduceKind::Beta);
    assert_eq!(result.to_string(), "y");
  }

  #[test]
  fn normal_order_reduces_function_position_first() {
    // (\x. x) z applied to an un-reduced argument still fires the outer redex first.
    let mut symbols = symbols();
    symbols.insert(name("omega"), Term::app(Term::var(name("w")), Term::var(name("w"))));
    let term = Term::app(
      Term::abs(name("x"), Term::var(name("x"))),
      Term::var(name("omega")),
    );
    let (result, kind) = reduce_top(&term, &symbols);
    assert_eq!(kind, ReduceKind::Beta);
    assert_eq!(result.to_string(), "omega");
  }

  #[test]
  fn eager_argument_reduces_before_the_redex_fires() {
    let mut eager_arg = Term::var(name("2"));
    eager_arg.set_priority(Priority::Eager);
    let term = Term::app(Term::abs(name("x"), Term::var(name("x"))), eager_arg);
    let (result, kind) = reduce_top(&term, &symbols());
    assert_eq!(kind, ReduceKind::Delta);
    assert_eq!(result.to_string(), "(\\x. x) (\\f.\\x. f (f x))");
  }

  #[test]
  fn lazy_abstraction_in_function_position_is_not_fired() {
    let mut lazy_abs = Term::abs(name("x"), Term::var(name("x")));
    lazy_abs.set_priority(Priority::Lazy);
    let term = Term::app(lazy_abs, Term::var(name("y")));
    let (_, kind) = reduce_top(&term, &symbols());
    assert_ne!(kind, ReduceKind::Beta);
  }

  #[test]
  fn fully_reduced_term_is_marked_normal_form() {
    let term = Term::var(name("x"));
    let (result, _) = reduce_top(&term, &symbols());
    assert!(result.is_nf());
  }

  #[test]
  fn bound_variable_is_never_delta_expanded_as_a_symbol() {
    // symbols = {x := \a. a}; reducing \f.\x. f x must not expand the *bound* x.
    let mut symbols = symbols();
    symbols.insert(name("x"), Term::abs(name("a"), Term::var(name("a"))));
    let term = Term::abs(name("f"), Term::abs(name("x"), Term::app(Term::var(name("f")), Term::var(name("x")))));
    let (result, kind) = reduce_top(&term, &symbols);
    assert_eq!(kind, ReduceKind::None);
    assert_eq!(result.to_string(), "\\f.\\x. f x");
  }

  #[test]
  fn bound_variable_is_never_delta_expanded_as_a_numeral() {
    // a binder literally named "2" must shadow the numeral-literal convention inside its body.
    let term = Term::abs(name("2"), Term::var(name("2")));
    let (result, kind) = reduce_top(&term, &symbols());
    assert_eq!(kind, ReduceKind::None);
    assert_eq!(result.to_string(), "\\2. 2");
  }

  #[test]
  fn eager_already_normal_function_falls_through_to_the_redex() {
    // (\x. x) y with the abstraction marked Eager but already normal: must still fire to y.
    let mut abs = Term::abs(name("x"), Term::var(name("x")));
    abs.set_priority(Priority::Eager);
    let term = Term::app(abs, Term::var(name("y")));
    let (result, kind) = reduce_top(&term, &symbols());
    assert_eq!(kind, ReduceKind::Beta);
    assert_eq!(result.to_string(), "y");
  }

  #[test]
  fn beta_reduct_is_retagged_with_the_application_s_priority() {
    let mut term = Term::app(Term::abs(name("x"), Term::var(name("x"))), Term::var(name("y")));
    term.set_priority(Priority::Eager);
    let (result, kind) = reduce_top(&term, &symbols());
    assert_eq!(kind, ReduceKind::Beta);
    assert_eq!(result.priority(), Priority::Eager);
  }

  #[test]
  fn nested_eager_subterm_of_the_argument_forces_divergence() {
    // (\x. z) (w (\y. y) eager) : the argument isn't itself Eager, but its subterm is, so the
    // reducer must still dive into it rather than firing the outer (non-diverging) redex.
    let mut eager_leaf = Term::var(name("2"));
    eager_leaf.set_priority(Priority::Eager);
    let arg = Term::app(Term::var(name("w")), eager_leaf);
    let term = Term::app(Term::abs(name("x"), Term::var(name("z"))), arg);
    let (result, kind) = reduce_top(&term, &symbols());
    assert_eq!(kind, ReduceKind::Delta);
    assert!(result.to_string().contains("f (f x)"));
  }
}

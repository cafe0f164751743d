/*!

Capture-avoiding substitution (`replace`, §4.4) and β-firing (`apply`, §4.5).

`replace` is the workhorse: it walks a term replacing every free occurrence of a variable `x` by a
fresh clone of a substituend `s`, α-renaming binders along the way whenever a binder's name would
otherwise capture a free variable of `s`. `apply` is a thin wrapper that fires a β-redex by handing
the abstraction's body to `replace`.

*/

use crate::abstractions::{Name, Set};
use crate::api::term::Term;
use crate::api::ReduceKind;
use crate::core::fresh::fresh_name;
use crate::trace;

/// `Alpha` ranks above `Beta`, which ranks above `None` (§4.4): if both children of an `App`
/// rewrote, the higher-ranked kind is reported.
fn combine_kind(a: ReduceKind, b: ReduceKind) -> ReduceKind {
  match (a, b) {
    (ReduceKind::Alpha, _) | (_, ReduceKind::Alpha) => ReduceKind::Alpha,
    (ReduceKind::Beta, _) | (_, ReduceKind::Beta) => ReduceKind::Beta,
    _ => ReduceKind::None,
  }
}

/// Replaces every free occurrence of `x` in `term` with a fresh clone of `s`, α-renaming binders
/// that would otherwise capture a free variable of `s`. `bound` is the set of names bound by
/// abstractions enclosing `term` (used only to pick fresh names that don't collide with them).
pub fn replace(term: &Term, x: &Name, s: &Term, bound: &Set<Name>) -> (Term, ReduceKind) {
  match term {
    Term::Var { name, priority, .. } => {
      if name == x {
        (s.clone_with_priority(*priority), ReduceKind::Beta)
      } else {
        (term.clone(), ReduceKind::None)
      }
    }

    Term::Abs { binder, body, priority, .. } => {
      if binder == x {
        // The substitution is shadowed by this binder.
        (term.clone(), ReduceKind::None)
      } else if s.free_vars().contains(binder) {
        let mut avoid = bound.clone();
        avoid.extend(s.free_vars().iter().cloned());
        avoid.extend(body.free_vars().iter().cloned());
        avoid.insert(binder.clone());
        let fresh = fresh_name(&avoid);

        trace!(1, "alpha-renaming binder {} to {} to avoid capture", binder, fresh);

        let (renamed_body, _) = replace(body, binder, &Term::var(fresh.clone()), &Set::default());
        let renamed_abs = Term::abs_with_priority(fresh, renamed_body, *priority);

        let (result, kind) = replace(&renamed_abs, x, s, bound);
        let kind = if kind == ReduceKind::None { ReduceKind::None } else { ReduceKind::Alpha };
        (result, kind)
      } else {
        let mut inner_bound = bound.clone();
        inner_bound.insert(binder.clone());
        let (new_body, kind) = replace(body, x, s, &inner_bound);
        (Term::abs_with_priority(binder.clone(), new_body, *priority), kind)
      }
    }

    Term::App { fun, arg, priority, .. } => {
      let (new_fun, fun_kind) = replace(fun, x, s, bound);
      let (new_arg, arg_kind) = replace(arg, x, s, bound);
      let kind = combine_kind(fun_kind, arg_kind);
      (Term::app_with_priority(new_fun, new_arg, *priority), kind)
    }
  }
}

/// Fires a β-redex: `(\x. b) a -> b[x := a]`. Only an abstraction can be applied to something; a
/// variable or application reports `None` (it is not itself a redex).
pub fn apply(fun: &Term, arg: &Term, bound: &Set<Name>) -> (Term, ReduceKind) {
  match fun {
    Term::Abs { binder, body, priority, .. } => {
      let mut inner_bound = bound.clone();
      inner_bound.insert(binder.clone());
      let (mut result, _) = replace(body, binder, arg, &inner_bound);
      result.set_priority(*priority);
      (result, ReduceKind::Beta)
    }
    Term::Var { .. } | Term::App { .. } => (fun.clone(), ReduceKind::None),
  }
}

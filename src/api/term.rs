/*!

A `Term` is a node in a lambda-calculus expression tree — a variable, an abstraction, or an
application. Unlike the DAG-based term representation used elsewhere in this crate family, terms
here are plain trees: each node exclusively owns its children, and reduction duplicates subtrees
rather than sharing them (there is no call-by-need memoization across occurrences).

Every node carries three pieces of metadata alongside its payload:
 - `priority`, a computational hint (`Lazy`/`Neutral`/`Eager`) that biases reduction order,
 - `free_vars`, a cache of the names free in the subtree, and
 - `nf`, a memo recording that the subtree is known to contain no redex under the current symbol
   table.

*/

use std::fmt::{self, Display, Formatter};

use crate::abstractions::{Name, Set};
use crate::api::{Priority, SyntacticPrecedence};

/// A non-empty name consisting entirely of decimal digits denotes a numeral literal: looking it up
/// during reduction expands it to a Church numeral rather than a symbol-table entry (§3, §4.7).
pub fn is_numeral_literal(name: &Name) -> bool {
  !name.is_empty() && name.chars().all(|c| c.is_ascii_digit())
}

#[derive(Clone, Debug)]
pub enum Term {
  Var {
    name:      Name,
    priority:  Priority,
    free_vars: Set<Name>,
    nf:        bool,
  },
  Abs {
    binder:    Name,
    body:      Box<Term>,
    priority:  Priority,
    free_vars: Set<Name>,
    nf:        bool,
  },
  App {
    fun:       Box<Term>,
    arg:       Box<Term>,
    priority:  Priority,
    free_vars: Set<Name>,
    nf:        bool,
  },
}

impl Term {
  // region Constructors

  /// Builds a variable node. `free_vars` per invariant 1 is `{name}`.
  pub fn var(name: Name) -> Term {
    Term::var_with_priority(name, Priority::default())
  }

  pub fn var_with_priority(name: Name, priority: Priority) -> Term {
    let mut free_vars = Set::default();
    free_vars.insert(name.clone());
    Term::Var { name, priority, free_vars, nf: false }
  }

  /// Builds an abstraction node. `free_vars` per invariant 2 is `free_vars(body) \ {binder}`.
  pub fn abs(binder: Name, body: Term) -> Term {
    Term::abs_with_priority(binder, body, Priority::default())
  }

  pub fn abs_with_priority(binder: Name, body: Term, priority: Priority) -> Term {
    let mut free_vars = body.free_vars().clone();
    free_vars.remove(&binder);
    Term::Abs { binder, body: Box::new(body), priority, free_vars, nf: false }
  }

  /// Builds an application node. `free_vars` per invariant 3 is `free_vars(fun) ∪ free_vars(arg)`.
  pub fn app(fun: Term, arg: Term) -> Term {
    Term::app_with_priority(fun, arg, Priority::default())
  }

  pub fn app_with_priority(fun: Term, arg: Term, priority: Priority) -> Term {
    let mut free_vars = fun.free_vars().clone();
    free_vars.extend(arg.free_vars().iter().cloned());
    Term::App { fun: Box::new(fun), arg: Box::new(arg), priority, free_vars, nf: false }
  }

  // endregion

  // region Accessors

  pub fn priority(&self) -> Priority {
    match self {
      Term::Var { priority, .. } | Term::Abs { priority, .. } | Term::App { priority, .. } => *priority,
    }
  }

  /// Overrides the priority annotation on this node. Clears the `nf` memo when the new value
  /// differs from the old one, since eager/lazy status controls which redexes are considered
  /// (§4.1).
  pub fn set_priority(&mut self, new_priority: Priority) {
    let (priority, nf) = match self {
      Term::Var { priority, nf, .. }
      | Term::Abs { priority, nf, .. }
      | Term::App { priority, nf, .. } => (priority, nf),
    };
    if *priority != new_priority {
      *priority = new_priority;
      *nf = false;
    }
  }

  pub fn free_vars(&self) -> &Set<Name> {
    match self {
      Term::Var { free_vars, .. } | Term::Abs { free_vars, .. } | Term::App { free_vars, .. } => free_vars,
    }
  }

  /// Structural free-variable test, correct regardless of cache state. Used by α-conversion, which
  /// cannot afford to trust a cache that might be mid-rebuild.
  pub fn is_free(&self, name: &Name) -> bool {
    match self {
      Term::Var { name: n, .. } => n == name,
      Term::Abs { binder, body, .. } => binder != name && body.is_free(name),
      Term::App { fun, arg, .. } => fun.is_free(name) || arg.is_free(name),
    }
  }

  pub(crate) fn is_nf(&self) -> bool {
    match self {
      Term::Var { nf, .. } | Term::Abs { nf, .. } | Term::App { nf, .. } => *nf,
    }
  }

  pub(crate) fn set_nf(&mut self, value: bool) {
    match self {
      Term::Var { nf, .. } | Term::Abs { nf, .. } | Term::App { nf, .. } => *nf = value,
    }
  }

  pub(crate) fn precedence(&self) -> SyntacticPrecedence {
    match self {
      Term::Abs { .. } => SyntacticPrecedence::Abstraction,
      Term::App { .. } => SyntacticPrecedence::Application,
      Term::Var { .. } => SyntacticPrecedence::Variable,
    }
  }

  /// Deep copy with the root's priority overridden. Used when a substituend's priority must be
  /// replaced by the priority of the variable occurrence it replaces (§4.4, §4.5).
  pub fn clone_with_priority(&self, priority: Priority) -> Term {
    let mut clone = self.clone();
    clone.set_priority(priority);
    clone
  }

  // endregion
}

impl Display for Term {
  /// Pretty-prints with parenthesization driven by the three-level precedence `Abs < App < Var`
  /// (§4.1): an operand is parenthesized when its precedence is strictly lower than the context's,
  /// and an application's right operand is additionally parenthesized on equal precedence
  /// (applications are left-associative).
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Term::Var { name, .. } => write!(f, "{}", name),

      Term::Abs { binder, body, .. } => {
        write!(f, "\\{}.", binder)?;
        if body.precedence() > SyntacticPrecedence::Abstraction {
          write!(f, " ")?;
        }
        write!(f, "{}", body)
      }

      Term::App { fun, arg, .. } => {
        let self_precedence = SyntacticPrecedence::Application;

        if fun.precedence() < self_precedence {
          write!(f, "({})", fun)?;
        } else {
          write!(f, "{}", fun)?;
        }

        write!(f, " ")?;

        if arg.precedence() <= self_precedence {
          write!(f, "({})", arg)
        } else {
          write!(f, "{}", arg)
        }
      }
    }
  }
}

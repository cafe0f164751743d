/*!

The public API of the library: the term model and the small value types attached to every node.

*/

pub mod term;

/// A per-node hint biasing the reduction order (§4.6, §4.7 of the design doc). `Eager` asks for this
/// node to be reduced before the surrounding application fires; `Lazy` asks for the opposite. `Neutral`
/// is the default and carries no bias.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, Hash)]
pub enum Priority {
  Lazy,
  #[default]
  Neutral,
  Eager,
}

/// What kind of rewrite (if any) a single reduction step performed. Returned from every `reduce`/
/// `replace`/`apply` call so the driver can label the step trace.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, Hash)]
pub enum ReduceKind {
  #[default]
  None,
  Alpha,
  Beta,
  Delta,
}

impl ReduceKind {
  /// The header used for a step-trace line (§6): `"alpha> "`, `"beta>  "`, or `"delta> "`. `None`
  /// is never traced; callers must not ask for its header.
  pub fn trace_header(self) -> &'static str {
    match self {
      ReduceKind::None  => panic!("ReduceKind::None has no trace header"),
      ReduceKind::Alpha => "alpha> ",
      ReduceKind::Beta  => "beta>  ",
      ReduceKind::Delta => "delta> ",
    }
  }
}

/// Three-level syntactic precedence used by `Term::to_string` for parenthesization (§4.1):
/// `Abs < App < Var`.
#[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Debug)]
pub(crate) enum SyntacticPrecedence {
  Abstraction = 0,
  Application = 1,
  Variable    = 2,
}

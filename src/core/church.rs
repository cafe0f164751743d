/*!

Church-numeral sugar (§4.9): a bare numeral literal such as `3` is short for the term that applies
its first argument to its second three times over, `\f. \x. f (f (f x))`. Expansion is triggered by
`reduce` (§4.7) whenever it encounters a variable whose name is entirely decimal digits
(`is_numeral_literal`, §4.1) and is otherwise indistinguishable from any other δ-step.

*/

use crate::abstractions::Name;
use crate::api::term::Term;

/// Builds the Church numeral for `n`: `\f. \x. f (f (... (f x)))` with `n` applications of `f`.
pub fn church(n: u64) -> Term {
  let f = Name::from("f");
  let x = Name::from("x");

  let mut body = Term::var(x.clone());
  for _ in 0..n {
    body = Term::app(Term::var(f.clone()), body);
  }

  Term::abs(f, Term::abs(x, body))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn church_zero_applies_f_no_times() {
    assert_eq!(church(0).to_string(), "\\f.\\x. x");
  }

  #[test]
  fn church_one() {
    assert_eq!(church(1).to_string(), "\\f.\\x. f x");
  }

  #[test]
  fn church_three_nests_f_thrice() {
    assert_eq!(church(3).to_string(), "\\f.\\x. f (f (f x))");
  }

  #[test]
  fn church_numerals_are_closed() {
    assert!(church(5).free_vars().is_empty());
  }
}

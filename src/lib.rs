/*!

A term-rewriting engine for the untyped lambda calculus, with named symbols (`δ`-expansion),
Church-numeral sugar, and per-node priority annotations that bias reduction order.

```
use lambda_engine::{Reducer, Term};

let reducer = Reducer::new();
let term = Term::app(Term::abs("x".into(), Term::var("x".into())), Term::var("y".into()));

let mut trace = String::new();
let result = reducer.reduce(&term, &mut trace).unwrap();
assert_eq!(result.to_string(), "y");
```

*/

pub mod abstractions;
pub mod api;
mod core;

pub use abstractions::log;
pub use api::term::Term;
pub use api::{Priority, ReduceKind};
pub use core::church::church;
pub use core::{ReduceOptions, Reducer, TraceError};

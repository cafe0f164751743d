/*!

The term-rewriting engine proper: the fresh-name generator, capture-avoiding substitution,
the single-step reducer, Church-numeral generation, and the `Reducer` driver that iterates
single steps to a fixed point.

The following compares this engine to the C++ original it was distilled from.

|                  | Original (C++, virtual dispatch)        | This crate                      |
|:-----------------|:-----------------------------------------|:--------------------------------|
| term             | `Expression*` class hierarchy            | `Term` enum (`api::term`)       |
| reduction        | `Expression::reduce` virtual method      | free function, match on variant |
| substitution     | `Expression::replace` virtual method     | free function, match on variant |
| symbol table     | `unordered_map<string, Expression*>`     | `HashMap<Name, Term>`           |
| sharing          | none (always clones)                     | none (always clones)            |

*/

pub mod fresh;
pub mod substitution;
pub mod reduce;
pub mod church;
pub mod error;
pub mod driver;

pub use driver::{Reducer, ReduceOptions};
pub use error::TraceError;

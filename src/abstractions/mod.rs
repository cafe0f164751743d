/*!

Types/type aliases that abstract over the implementing backing type.

# Background and Motivation

A motivating example is the `Name` type, an interned string type. A number of external crates could provide this
functionality. This module redirects to whatever chosen implementation we want. To use the
[`string_cache` crate](https://crates.io/crates/string_cache), we just define `Name` as an alias for
`string_cache::DefaultAtom`:

```ignore
pub use string_cache::DefaultAtom as Name;
```

If we want to later change to the [`ustr` crate](https://crates.io/crates/ustr), we just define `Name` to be an
alias for `ustr::Ustr` instead. For types or infrastructure with very different backing implementations, we define an
abstraction layer over the implementation. For example, the `log` module could use any of a number of logging
frameworks or even a bespoke solution for its implementation. However, its (crate) public interface consists only of
`set_global_logging_threshold()`/`get_global_logging_threshold()` and the macros `critical!`, `error!`, `warning!`,
`info!`, `debug!`, and `trace!`. The (private) backing implementation is encapsulated in the `log` module.

*/

use std::collections::HashSet as StdHashSet;

// Logging
pub mod log;

/// An interned variable/symbol name. Two equal names are the same allocation, so membership tests
/// in free-variable sets and symbol-table lookups are cheap pointer/hash comparisons rather than
/// byte-for-byte string comparisons.
pub use string_cache::DefaultAtom as Name;

/// A set of [`Name`]s. Used for free-variable caches, avoid-sets passed to the fresh-name
/// generator, and the set of names bound by enclosing abstractions.
pub type Set<T> = StdHashSet<T>;

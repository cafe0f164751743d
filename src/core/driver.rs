/*!

`Reducer`: owns the symbol table (§4.8, `δ`-expansion) and drives single steps (§4.7) to a fixed
point, optionally emitting a step trace to a caller-supplied sink (§4.10 ambient configuration).

The step trace format, when requested, is:

```text
<echo of the input term>

alpha> <term after the step>
beta>  <term after the step>
...

to be sought:     <input term>
result:           <final term>
step taken:       <n>
character count:  <n>
time cost:        <n>ms
```

*/

use std::collections::HashMap;
use std::fmt::Write as FmtWrite;
use std::time::Instant;

use crate::abstractions::{Name, Set};
use crate::api::term::Term;
use crate::api::ReduceKind;
use crate::core::error::TraceError;
use crate::core::reduce::reduce;
use crate::{debug, info, warning};

/// Host-tunable knobs for a single `reduce_with_options` call (§4.12).
#[derive(Clone, Debug)]
pub struct ReduceOptions {
  /// Whether to write the step-by-step trace to the sink at all. When `false`, `reduce_with_options`
  /// still reduces to a fixed point (or the step budget) but writes nothing.
  pub emit_steps: bool,
  /// An upper bound on the number of rewrite steps taken before giving up and returning whatever
  /// normal form (or non-normal form) has been reached so far. `None` means unbounded.
  pub max_steps: Option<u64>,
  /// The minimum `tracing` event threshold (§4.10) this call logs at; forwarded to the global
  /// logging threshold for the duration of the call is the caller's responsibility, not this
  /// struct's — this field only documents the threshold the call was made under.
  pub logging_threshold: u8,
}

impl Default for ReduceOptions {
  fn default() -> Self {
    ReduceOptions { emit_steps: true, max_steps: None, logging_threshold: 0 }
  }
}

/// The engine: a symbol table plus the driving loop that repeatedly applies `reduce` until no
/// rewrite is available or a step budget is exhausted.
#[derive(Clone, Debug, Default)]
pub struct Reducer {
  symbols: HashMap<Name, Term>,
}

impl Reducer {
  pub fn new() -> Self {
    Reducer { symbols: HashMap::new() }
  }

  /// Binds `name` to `definition` in the symbol table (§4.8). A later registration of the same
  /// name silently replaces the earlier one, matching the C++ original's `unordered_map::operator[]`
  /// overwrite semantics.
  pub fn register_symbol(&mut self, name: Name, definition: Term) {
    info!(1, "registering symbol {}", name);
    self.symbols.insert(name, definition);
  }

  pub fn symbol(&self, name: &Name) -> Option<&Term> {
    self.symbols.get(name)
  }

  /// Reduces `term` to a fixed point under the default options (unbounded, tracing on).
  pub fn reduce<W: FmtWrite>(&self, term: &Term, sink: &mut W) -> Result<Term, TraceError> {
    self.reduce_with_options(term, &ReduceOptions::default(), sink)
  }

  /// Reduces `term` to a fixed point (or until `options.max_steps` rewrites have been taken),
  /// optionally writing the step trace to `sink`.
  pub fn reduce_with_options<W: FmtWrite>(
    &self,
    term: &Term,
    options: &ReduceOptions,
    sink: &mut W,
  ) -> Result<Term, TraceError> {
    let start = Instant::now();
    let input = term.to_string();

    info!(1, "reduce started: {}", input);

    if options.emit_steps {
      writeln!(sink, "{}", input)?;
      writeln!(sink)?;
    }

    let mut current = term.clone();
    let mut steps: u64 = 0;

    loop {
      if let Some(max) = options.max_steps {
        if steps >= max {
          warning!("reduce budget exhausted after {} steps: {}", steps, current);
          break;
        }
      }

      let (next, kind) = reduce(&current, &self.symbols, &Set::default());
      if kind == ReduceKind::None {
        break;
      }

      steps += 1;
      debug!(2, "step {} ({:?}): {}", steps, kind, next);

      if options.emit_steps {
        writeln!(sink, "{}{}", kind.trace_header(), next)?;
      }

      current = next;
    }

    if options.emit_steps {
      writeln!(sink)?;
      writeln!(sink, "to be sought:     {}", input)?;
      writeln!(sink, "result:           {}", current)?;
      writeln!(sink, "step taken:       {}", steps)?;
      writeln!(sink, "character count:  {}", current.to_string().len())?;
      writeln!(sink, "time cost:        {}ms", start.elapsed().as_millis())?;
      writeln!(sink)?;
    }

    info!(1, "reduce finished in {} steps: {}", steps, current);

    Ok(current)
  }
}

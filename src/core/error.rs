/*!

The reducer writes its step trace directly into a caller-supplied sink (§4.10, §4.11) rather than
buffering it; the only way that can fail is the sink itself refusing a write.

*/

use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

pub enum TraceError {
  /// Writing a step, a header line, or the final summary to the trace sink failed.
  SinkWrite { source: fmt::Error },
}

impl From<fmt::Error> for TraceError {
  fn from(source: fmt::Error) -> Self {
    TraceError::SinkWrite { source }
  }
}

impl Display for TraceError {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      TraceError::SinkWrite { .. } => write!(f, "failed to write the reduction trace to its sink"),
    }
  }
}

impl Debug for TraceError {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    Display::fmt(self, f)
  }
}

impl Error for TraceError {
  fn source(&self) -> Option<&(dyn Error + 'static)> {
    match self {
      TraceError::SinkWrite { source } => Some(source),
    }
  }
}

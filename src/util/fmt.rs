use std::fmt::{self, Debug, Formatter};

/// Writes the contained string as is when debug formatted, so that it isn't quoted inside lists.
pub struct DebugRaw(pub String);

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

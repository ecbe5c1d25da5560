use std::fmt::{self, Debug, Formatter};

/// Writes the held string verbatim when debug formatted, used for placeholder slots.
pub struct DebugRaw(pub String);

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//! Formatting helpers.

use {
    crate::domain::eth,
    std::fmt::{self, Display, Formatter},
};

/// Displays an address in its shortened `0x1234...abcd` form.
pub struct Short<'a>(pub &'a eth::Address);

impl Display for Short<'_> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let full = self.0.to_string();
        write!(f, "{}...{}", &full[..6], &full[full.len() - 4..])
    }
}

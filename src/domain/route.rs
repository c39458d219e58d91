//! The site's navigation surface.

use std::fmt::{self, Display, Formatter};

/// An internal page. Pages share no state; navigating always starts fresh.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Route {
    Home,
    About,
    Conjure,
    CheckEligibility,
}

impl Route {
    pub const ALL: [Route; 4] = [
        Route::Home,
        Route::About,
        Route::Conjure,
        Route::CheckEligibility,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::About => "/about",
            Self::Conjure => "/menaces",
            Self::CheckEligibility => "/check-eligibility",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|route| route.path() == path)
    }
}

/// Where activating a link leads.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Destination {
    Page(Route),
    /// An off-site link, opened in a new context.
    External(&'static str),
}

impl Display for Destination {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::Page(route) => f.write_str(route.path()),
            Self::External(url) => f.write_str(url),
        }
    }
}

//! URL-fragment route parsing.
//!
//! # Responsibility
//! - Map location-hash strings onto the three filter routes.
//!
//! # Invariants
//! - Unknown or missing segments fall back to [`Route::All`].

use std::fmt::{Display, Formatter};

/// Filter selector derived from the URL fragment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Route {
    #[default]
    All,
    Active,
    Completed,
}

impl Route {
    /// Parses a location hash such as `""`, `"#/"` or `"#/active"`.
    ///
    /// The segment after the first `/` selects the route; anything
    /// unrecognized shows all items.
    pub fn from_location_hash(hash: &str) -> Self {
        match hash.split('/').nth(1).unwrap_or("") {
            "active" => Self::Active,
            "completed" => Self::Completed,
            _ => Self::All,
        }
    }

    /// Path segment used in filter links; empty for the all route.
    pub fn segment(self) -> &'static str {
        match self {
            Self::All => "",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "All"),
            Self::Active => write!(f, "Active"),
            Self::Completed => write!(f, "Completed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Route;

    #[test]
    fn empty_hash_selects_all() {
        assert_eq!(Route::from_location_hash(""), Route::All);
        assert_eq!(Route::from_location_hash("#/"), Route::All);
    }

    #[test]
    fn known_segments_select_their_route() {
        assert_eq!(Route::from_location_hash("#/active"), Route::Active);
        assert_eq!(Route::from_location_hash("#/completed"), Route::Completed);
    }

    #[test]
    fn unknown_segment_falls_back_to_all() {
        assert_eq!(Route::from_location_hash("#/archived"), Route::All);
        assert_eq!(Route::from_location_hash("#nonsense"), Route::All);
    }

    #[test]
    fn segments_round_trip_through_links() {
        for route in [Route::All, Route::Active, Route::Completed] {
            let hash = format!("#/{}", route.segment());
            assert_eq!(Route::from_location_hash(&hash), route);
        }
    }
}

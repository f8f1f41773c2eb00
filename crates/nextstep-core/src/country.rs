//! Registry of countries the client knows how to display
//!
//! The supported set is an explicit enum with a total mapping and a defined
//! unsupported case (`parse` returning `None`). Route identifiers that do
//! not parse are shown as "not found" without touching the network.

/// A country with immigration coverage in the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountryId {
    Uk,
}

impl CountryId {
    /// Every country the client can display, in listing order.
    pub const ALL: &'static [CountryId] = &[CountryId::Uk];

    /// Parse a route identifier. Unknown ids are not an error -- they map
    /// to `None` and the caller decides how to surface that.
    pub fn parse(id: &str) -> Option<Self> {
        match id {
            "uk" => Some(CountryId::Uk),
            _ => None,
        }
    }

    /// Route identifier, as used in `/country/{id}`.
    pub fn as_str(&self) -> &'static str {
        match self {
            CountryId::Uk => "uk",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CountryId::Uk => "United Kingdom",
        }
    }

    pub fn flag(&self) -> &'static str {
        match self {
            CountryId::Uk => "\u{1F1EC}\u{1F1E7}",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            CountryId::Uk => "Latest immigration updates and policy changes",
        }
    }

    /// Static banner asset for the country card. Terminals cannot render
    /// it, but the display aggregate carries it so the contract matches
    /// the richer card shape.
    pub fn banner_image(&self) -> &'static str {
        match self {
            CountryId::Uk => "https://images.unsplash.com/photo-1512734099960-65a682cbfe2b?w=900&auto=format&fit=crop&q=60&ixlib=rb-4.1.0&ixid=M3wxMjA3fDB8MHxzZWFyY2h8Nnx8bG9uZG9ufGVufDB8MHwwfHx8Mg%3D%3D",
        }
    }
}

impl std::fmt::Display for CountryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Network type definitions

/// Supported social networks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    /// LinkedIn (UGC posts API)
    LinkedIn,
    /// Bluesky (AT Protocol)
    Bluesky,
}

impl Network {
    /// All supported networks, in the order the operator is asked about them
    pub const fn all() -> &'static [Self] {
        &[Self::LinkedIn, Self::Bluesky]
    }

    /// Get the display name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::LinkedIn => "LinkedIn",
            Self::Bluesky => "Bluesky",
        }
    }

    /// Get the emoji icon
    pub const fn emoji(&self) -> &'static str {
        match self {
            Self::LinkedIn => "💼",
            Self::Bluesky => "🦋",
        }
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

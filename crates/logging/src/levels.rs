//! crates/logging/src/levels.rs
//! Debug flags and the per-flag level table.

/// Debug flags for walker diagnostic categories.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DebugFlag {
    /// Frontier priming and directory expansion.
    Frontier,
    /// Directory listings that failed and were treated as empty.
    Listing,
    /// Files handed to the caller.
    Deliver,
}

impl DebugFlag {
    /// All flags, in the order they appear in help output.
    pub const ALL: [Self; 3] = [Self::Frontier, Self::Listing, Self::Deliver];

    /// Returns the token used to name the flag on the command line and in
    /// `DIRWALK_DEBUG`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Frontier => "frontier",
            Self::Listing => "listing",
            Self::Deliver => "deliver",
        }
    }

    /// Looks a flag up by its token name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|flag| flag.name() == name)
    }
}

/// Debug level for every [`DebugFlag`]. A level of `0` disables the flag.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DebugLevels {
    /// Frontier priming and expansion level.
    pub frontier: u8,
    /// Failed listing level.
    pub listing: u8,
    /// Delivery level.
    pub deliver: u8,
}

impl DebugLevels {
    /// Get the level for a specific flag.
    pub const fn get(&self, flag: DebugFlag) -> u8 {
        match flag {
            DebugFlag::Frontier => self.frontier,
            DebugFlag::Listing => self.listing,
            DebugFlag::Deliver => self.deliver,
        }
    }

    /// Set the level for a specific flag.
    pub fn set(&mut self, flag: DebugFlag, level: u8) {
        match flag {
            DebugFlag::Frontier => self.frontier = level,
            DebugFlag::Listing => self.listing = level,
            DebugFlag::Deliver => self.deliver = level,
        }
    }

    /// Set every flag to the same level.
    pub fn set_all(&mut self, level: u8) {
        for flag in DebugFlag::ALL {
            self.set(flag, level);
        }
    }

    /// Highest level configured across all flags.
    pub fn max(&self) -> u8 {
        DebugFlag::ALL
            .into_iter()
            .map(|flag| self.get(flag))
            .max()
            .unwrap_or(0)
    }
}

use std::fmt::{Display, Formatter};
use std::ops::BitOr;

use serde::{Deserialize, Serialize};

/// Bit-flag set describing what kind of principal a Site Directory record is.
///
/// A principal may carry several flags at once, so membership must be tested
/// with [`PrincipalTypeFlags::contains`] and never with equality against a
/// single flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrincipalTypeFlags(u32);

impl PrincipalTypeFlags {
    /// No flags set.
    pub const NONE: Self = Self(0);
    /// Individual user account.
    pub const USER: Self = Self(1);
    /// Mail distribution list.
    pub const DISTRIBUTION_LIST: Self = Self(1 << 1);
    /// Tenant security group.
    pub const SECURITY_GROUP: Self = Self(1 << 2);
    /// Site-scoped group.
    pub const SHAREPOINT_GROUP: Self = Self(1 << 3);

    const NAMED: [(Self, &'static str); 4] = [
        (Self::USER, "User"),
        (Self::DISTRIBUTION_LIST, "DistributionList"),
        (Self::SECURITY_GROUP, "SecurityGroup"),
        (Self::SHAREPOINT_GROUP, "SharePointGroup"),
    ];

    /// Creates a flag set from raw directory bits, keeping unknown bits.
    #[must_use]
    pub fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Returns the raw bits.
    #[must_use]
    pub fn bits(self) -> u32 {
        self.0
    }

    /// Returns whether every bit of `other` is set in `self`.
    #[must_use]
    pub fn contains(self, other: Self) -> bool {
        other.0 != 0 && self.0 & other.0 == other.0
    }

    /// Returns the names of the known flags that are set, in declaration order.
    #[must_use]
    pub fn names(self) -> Vec<&'static str> {
        Self::NAMED
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect()
    }
}

impl BitOr for PrincipalTypeFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl Display for PrincipalTypeFlags {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{} ({})", self.names().join(" "), self.0)
    }
}

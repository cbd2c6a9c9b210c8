//! Household composition model

use serde::{Deserialize, Serialize};

/// Minimum number of adults in a household
pub const MIN_ADULTS: u8 = 1;
/// Maximum number of adults in a household
pub const MAX_ADULTS: u8 = 2;
/// Maximum number of children in a household
pub const MAX_CHILDREN: u8 = 5;

/// Adults and children living in the recipient's household
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FamilyComposition {
    adults: u8,
    children: u8,
}

impl FamilyComposition {
    /// Create a composition; counts are clamped to the supported ranges
    #[must_use]
    pub fn new(adults: u8, children: u8) -> Self {
        Self {
            adults: adults.clamp(MIN_ADULTS, MAX_ADULTS),
            children: children.min(MAX_CHILDREN),
        }
    }

    /// Number of adults
    #[must_use]
    pub const fn adults(&self) -> u8 {
        self.adults
    }

    /// Number of children
    #[must_use]
    pub const fn children(&self) -> u8 {
        self.children
    }

    /// Household size, always `adults + children`
    #[must_use]
    pub const fn total(&self) -> u8 {
        self.adults + self.children
    }

    /// Whether the household has a single adult
    #[must_use]
    pub const fn is_single_adult(&self) -> bool {
        self.adults == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_is_sum() {
        let family = FamilyComposition::new(2, 3);
        assert_eq!(family.adults(), 2);
        assert_eq!(family.children(), 3);
        assert_eq!(family.total(), 5);
        assert!(!family.is_single_adult());
    }

    #[test]
    fn test_counts_are_clamped() {
        let family = FamilyComposition::new(0, 9);
        assert_eq!(family.adults(), MIN_ADULTS);
        assert_eq!(family.children(), MAX_CHILDREN);
        assert_eq!(family.total(), 6);

        assert_eq!(FamilyComposition::new(4, 0).adults(), MAX_ADULTS);
    }
}

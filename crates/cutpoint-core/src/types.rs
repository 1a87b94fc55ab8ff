//! # Domain Types
//!
//! The bottle volume classes, the volume table, and the calculator's
//! input and output.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌──────────────────────┐  ┌──────────────────┐  │
//! │  │BottleVolumeClass│   │  CalculationInput    │  │CalculationResult │  │
//! │  │  ─────────────  │   │  ──────────────────  │  │ ──────────────── │  │
//! │  │  Cc1000 → 100   │──►│  bottle_volume_class │─►│ washer_cutoff    │  │
//! │  │  Cc970 → 103.09 │   │  tank_volume_hl      │  │ depalletizer_    │  │
//! │  │  Cc925 → 108.11 │   │  filler_opening_count│  │   cutoff         │  │
//! │  └─────────────────┘   └──────────────────────┘  └──────────────────┘  │
//! │         bottles/HL                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here has identity or lifecycle beyond a single calculation.

use std::fmt;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::CC_PER_HL;

// =============================================================================
// Bottle Volume Class
// =============================================================================

/// Bottle size handled by the line, in cubic centimeters.
///
/// Serialized as the plain cc number (`1000`, `970`, `925`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum BottleVolumeClass {
    /// 1000 cc returnable bottle.
    #[default]
    Cc1000,
    /// 970 cc bottle.
    Cc970,
    /// 925 cc bottle.
    Cc925,
}

impl BottleVolumeClass {
    /// Every class, in the order the selector lists them.
    pub const ALL: [BottleVolumeClass; 3] = [
        BottleVolumeClass::Cc1000,
        BottleVolumeClass::Cc970,
        BottleVolumeClass::Cc925,
    ];

    /// Bottle volume in cubic centimeters.
    #[inline]
    pub const fn cc(self) -> u32 {
        match self {
            BottleVolumeClass::Cc1000 => 1000,
            BottleVolumeClass::Cc970 => 970,
            BottleVolumeClass::Cc925 => 925,
        }
    }

    /// Resolves a cc value to its class.
    ///
    /// ## Example
    /// ```rust
    /// use cutpoint_core::BottleVolumeClass;
    ///
    /// assert_eq!(BottleVolumeClass::from_cc(970), Some(BottleVolumeClass::Cc970));
    /// assert_eq!(BottleVolumeClass::from_cc(800), None);
    /// ```
    pub const fn from_cc(cc: u32) -> Option<Self> {
        match cc {
            1000 => Some(BottleVolumeClass::Cc1000),
            970 => Some(BottleVolumeClass::Cc970),
            925 => Some(BottleVolumeClass::Cc925),
            _ => None,
        }
    }

    /// Position in [`BottleVolumeClass::ALL`].
    #[inline]
    const fn index(self) -> usize {
        match self {
            BottleVolumeClass::Cc1000 => 0,
            BottleVolumeClass::Cc970 => 1,
            BottleVolumeClass::Cc925 => 2,
        }
    }

    /// Bottles filled per hectoliter, read from the volume table.
    #[inline]
    pub fn bottles_per_hl(self) -> f64 {
        volume_table().bottles_per_hl(self)
    }
}

impl TryFrom<u32> for BottleVolumeClass {
    type Error = CoreError;

    fn try_from(cc: u32) -> Result<Self, Self::Error> {
        volume_table()
            .lookup(cc)
            .map(|(class, _)| class)
            .ok_or_else(|| CoreError::UnsupportedVolumeClass {
                rejected: cc,
                supported: supported_volumes(),
            })
    }
}

impl From<BottleVolumeClass> for u32 {
    fn from(class: BottleVolumeClass) -> Self {
        class.cc()
    }
}

impl fmt::Display for BottleVolumeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}cc", self.cc())
    }
}

/// The supported cc values, in selector order.
pub fn supported_volumes() -> Vec<u32> {
    BottleVolumeClass::ALL.iter().map(|c| c.cc()).collect()
}

// =============================================================================
// Volume Table
// =============================================================================

/// Bottles-per-hectoliter conversion for every class.
///
/// Built once per process by [`volume_table`] and never mutated afterwards.
#[derive(Debug)]
pub struct VolumeTable {
    entries: [(BottleVolumeClass, f64); 3],
}

impl VolumeTable {
    fn build() -> Self {
        let entries = BottleVolumeClass::ALL.map(|class| (class, CC_PER_HL / f64::from(class.cc())));
        VolumeTable { entries }
    }

    /// Conversion constant for a class. Always strictly positive.
    pub fn bottles_per_hl(&self, class: BottleVolumeClass) -> f64 {
        self.entries[class.index()].1
    }

    /// Looks up a raw cc value.
    pub fn lookup(&self, cc: u32) -> Option<(BottleVolumeClass, f64)> {
        self.entries.iter().copied().find(|(c, _)| c.cc() == cc)
    }

    /// Iterates `(class, bottles_per_hl)` in selector order.
    pub fn iter(&self) -> impl Iterator<Item = (BottleVolumeClass, f64)> + '_ {
        self.entries.iter().copied()
    }
}

static VOLUME_TABLE: OnceLock<VolumeTable> = OnceLock::new();

/// Read accessor for the process-wide volume table.
pub fn volume_table() -> &'static VolumeTable {
    VOLUME_TABLE.get_or_init(VolumeTable::build)
}

// =============================================================================
// Calculation Input / Result
// =============================================================================

/// The three operator readings, already validated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CalculationInput {
    /// Bottle size selected on the line.
    #[ts(type = "number")]
    pub bottle_volume_class: BottleVolumeClass,

    /// Hectoliters left in the last tank.
    pub tank_volume_hl: f64,

    /// Bottle count shown by the filler at opening.
    pub filler_opening_count: f64,
}

/// The two cut points, unrounded. Either may be negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CalculationResult {
    /// Filler count at which the washer stops making room.
    pub washer_cutoff_count: f64,

    /// Filler count at which the depalletizer stops.
    pub depalletizer_cutoff_count: f64,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_table_values() {
        let table = volume_table();
        assert_eq!(table.bottles_per_hl(BottleVolumeClass::Cc1000), 100.0);
        assert_eq!(table.bottles_per_hl(BottleVolumeClass::Cc970), 100_000.0 / 970.0);
        assert_eq!(table.bottles_per_hl(BottleVolumeClass::Cc925), 100_000.0 / 925.0);
        assert!(table.iter().all(|(_, per_hl)| per_hl > 0.0));
    }

    #[test]
    fn test_volume_table_is_shared() {
        assert!(std::ptr::eq(volume_table(), volume_table()));
    }

    #[test]
    fn test_table_entries_follow_class_order() {
        for (i, class) in BottleVolumeClass::ALL.into_iter().enumerate() {
            assert_eq!(class.index(), i);
            assert_eq!(volume_table().iter().nth(i).map(|(c, _)| c), Some(class));
        }
    }

    #[test]
    fn test_lookup() {
        let (class, per_hl) = volume_table().lookup(925).unwrap();
        assert_eq!(class, BottleVolumeClass::Cc925);
        assert!((per_hl - 108.108).abs() < 0.001);
        assert!(volume_table().lookup(800).is_none());
    }

    #[test]
    fn test_try_from_rejects_unknown() {
        let err = BottleVolumeClass::try_from(800).unwrap_err();
        assert_eq!(
            err,
            CoreError::UnsupportedVolumeClass {
                rejected: 800,
                supported: vec![1000, 970, 925],
            }
        );
    }

    #[test]
    fn test_default_and_display() {
        assert_eq!(BottleVolumeClass::default(), BottleVolumeClass::Cc1000);
        assert_eq!(BottleVolumeClass::Cc970.to_string(), "970cc");
    }

    #[test]
    fn test_serde_as_number() {
        let input = CalculationInput {
            bottle_volume_class: BottleVolumeClass::Cc970,
            tank_volume_hl: 500.0,
            filler_opening_count: 20_000.0,
        };
        let json = serde_json::to_string(&input).unwrap();
        assert_eq!(
            json,
            r#"{"bottleVolumeClass":970,"tankVolumeHl":500.0,"fillerOpeningCount":20000.0}"#
        );

        let bad: Result<CalculationInput, _> = serde_json::from_str(
            r#"{"bottleVolumeClass":800,"tankVolumeHl":1.0,"fillerOpeningCount":0.0}"#,
        );
        assert!(bad.is_err());
    }
}

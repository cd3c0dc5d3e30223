use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// Enums
// =============================================================================

/// Booking availability shown as a badge next to a listing.
///
/// Display only: a `Full` hospital can still be booked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    #[default]
    Available,
    Busy,
    Full,
}

impl Availability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Availability::Available => "available",
            Availability::Busy => "busy",
            Availability::Full => "full",
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Newtype Wrappers
// =============================================================================

/// Identifier of a hospital listing. Stable for the process lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HospitalId(pub u32);

impl fmt::Display for HospitalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for HospitalId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Text that does not name a hospital id.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid hospital id: {0:?}")]
pub struct InvalidHospitalId(pub String);

/// Parses the loose forms a booking button may carry: `"2"`, `" 2 "`, and
/// integral numeric literals such as `"2.0"` or `"2e0"`.
impl FromStr for HospitalId {
    type Err = InvalidHospitalId;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(id) = trimmed.parse::<u32>() {
            return Ok(Self(id));
        }
        match trimmed.parse::<f64>() {
            Ok(v) if v.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&v) => {
                Ok(Self(v as u32))
            }
            _ => Err(InvalidHospitalId(trimmed.to_string())),
        }
    }
}

// =============================================================================
// Records
// =============================================================================

/// A single hospital listing in the directory.
///
/// Every field except `id` and `availability` is free display text; nothing
/// parses distances or wait times.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HospitalRecord {
    pub id: HospitalId,
    pub name: String,
    /// Category used for filtering, e.g. "Emergency Care" or "Cardiology".
    pub specialty: String,
    pub distance: String,
    /// Not validated against any range.
    pub rating: f32,
    pub wait_time: String,
    pub phone: String,
    pub address: String,
    #[serde(default)]
    pub availability: Availability,
}

impl HospitalRecord {
    /// True if the specialty contains any of `needles` (case-sensitive).
    pub fn specialty_matches(&self, needles: &[&str]) -> bool {
        needles.iter().any(|n| self.specialty.contains(n))
    }
}

//! The read-only hospital directory.
//!
//! Built once at startup, either from the built-in seed or from a TOML file,
//! and shared behind an `Arc`. Nothing hands out mutable access after
//! construction.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::{CareFindError, Result};
use crate::types::{Availability, HospitalId, HospitalRecord};

/// Ordered, immutable list of hospital listings.
#[derive(Debug, Clone, PartialEq)]
pub struct Directory {
    records: Vec<HospitalRecord>,
}

/// On-disk shape of a directory file: a list of `[[hospitals]]` tables.
#[derive(Debug, Deserialize)]
struct DirectoryFile {
    #[serde(default)]
    hospitals: Vec<HospitalRecord>,
}

impl Directory {
    /// Build a directory, rejecting empty lists, zero ids and duplicate ids.
    pub fn from_records(records: Vec<HospitalRecord>) -> Result<Self> {
        if records.is_empty() {
            return Err(CareFindError::Directory(
                "directory must contain at least one hospital".to_string(),
            ));
        }

        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if record.id.0 == 0 {
                return Err(CareFindError::Directory(format!(
                    "hospital '{}' has id 0; ids must be positive",
                    record.name
                )));
            }
            if !seen.insert(record.id) {
                return Err(CareFindError::Directory(format!(
                    "duplicate hospital id {}",
                    record.id
                )));
            }
        }

        Ok(Self { records })
    }

    /// Load a directory from a TOML file of `[[hospitals]]` entries.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let file: DirectoryFile = toml::from_str(&content)?;
        let directory = Self::from_records(file.hospitals)?;
        info!(
            hospitals = directory.len(),
            "Directory loaded from {}",
            path.display()
        );
        Ok(directory)
    }

    /// The built-in four-hospital directory.
    pub fn seed() -> Self {
        let records = vec![
            seed_record(
                1,
                "City General Hospital",
                "Emergency Care",
                "2.3 km",
                4.8,
                "15 min",
                "+1-555-0123",
                "123 Medical Center Dr",
                Availability::Available,
            ),
            seed_record(
                2,
                "Advanced Heart Institute",
                "Cardiology",
                "3.7 km",
                4.9,
                "25 min",
                "+1-555-0124",
                "456 Heart Care Ave",
                Availability::Busy,
            ),
            seed_record(
                3,
                "Metro Diagnostic Center",
                "Diagnostics",
                "1.8 km",
                4.6,
                "10 min",
                "+1-555-0125",
                "789 Health Plaza",
                Availability::Available,
            ),
            seed_record(
                4,
                "Children's Medical Center",
                "Pediatrics",
                "4.2 km",
                4.7,
                "20 min",
                "+1-555-0126",
                "321 Kids Health Blvd",
                Availability::Full,
            ),
        ];
        Self { records }
    }

    pub fn get(&self, id: HospitalId) -> Option<&HospitalRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// All records in insertion order.
    pub fn as_slice(&self) -> &[HospitalRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HospitalRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a Directory {
    type Item = &'a HospitalRecord;
    type IntoIter = std::slice::Iter<'a, HospitalRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[allow(clippy::too_many_arguments)]
fn seed_record(
    id: u32,
    name: &str,
    specialty: &str,
    distance: &str,
    rating: f32,
    wait_time: &str,
    phone: &str,
    address: &str,
    availability: Availability,
) -> HospitalRecord {
    HospitalRecord {
        id: HospitalId(id),
        name: name.to_string(),
        specialty: specialty.to_string(),
        distance: distance.to_string(),
        rating,
        wait_time: wait_time.to_string(),
        phone: phone.to_string(),
        address: address.to_string(),
        availability,
    }
}

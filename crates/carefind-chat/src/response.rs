//! Canned reply text: the acknowledgement pool, the phrase pickers, and the
//! booking confirmation template.

use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Opening line of every bot reply. Decorative; chosen independently of
/// what the user said.
pub static ACKNOWLEDGEMENTS: &[&str] = &[
    "Based on your symptoms, I've found several hospitals that can help you. Here are my top recommendations:",
    "I understand your concern. Let me suggest some suitable hospitals in your area:",
    "Thank you for sharing your symptoms. Here are some hospitals that specialize in your condition:",
    "I've analyzed your requirements and found these hospitals that would be perfect for your needs:",
];

/// Shown when a booking request names a listing that does not exist.
pub const NOT_FOUND_NOTICE: &str =
    "I couldn't find that listing. Please pick one of the hospitals suggested above.";

/// Booking acknowledgement for `hospital_name`.
pub fn booking_confirmation(hospital_name: &str) -> String {
    format!(
        "Great! I've initiated the booking process for {}. You'll receive a confirmation call within 15 minutes. Is there anything else I can help you with?",
        hospital_name
    )
}

// =============================================================================
// Pickers
// =============================================================================

/// Source of the index used to choose an acknowledgement.
pub trait PhrasePicker: Send + Sync {
    /// Return an index in `0..len`; larger values are wrapped by the caller.
    /// `len` is never zero.
    fn pick(&self, len: usize) -> usize;
}

/// Uniform random picker. Deterministic when built with a seed.
pub struct SeededPicker {
    rng: Mutex<StdRng>,
}

impl SeededPicker {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Seeded picker when `seed` is set, OS entropy otherwise.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::from_seed(s),
            None => Self::from_entropy(),
        }
    }
}

impl PhrasePicker for SeededPicker {
    fn pick(&self, len: usize) -> usize {
        // A panic mid-pick cannot leave the RNG in a bad state.
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.random_range(0..len)
    }
}

/// Always picks the same index (wrapped to the pool size).
#[derive(Debug, Clone, Copy)]
pub struct FixedPicker(pub usize);

impl PhrasePicker for FixedPicker {
    fn pick(&self, len: usize) -> usize {
        self.0 % len
    }
}

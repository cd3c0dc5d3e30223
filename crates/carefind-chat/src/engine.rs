//! Conversation engine: maps an utterance to a bot reply and a booking
//! request to a confirmation.
//!
//! Synchronous and free of conversation state. The directory is shared
//! read-only, so one engine can serve any number of sessions.

use std::sync::Arc;

use carefind_core::types::{HospitalId, HospitalRecord};
use carefind_core::Directory;
use tracing::{debug, warn};

use crate::error::ChatError;
use crate::response::{booking_confirmation, PhrasePicker, SeededPicker, ACKNOWLEDGEMENTS};
use crate::rules;
use crate::types::{BotReply, Utterance};

pub struct ConversationEngine {
    directory: Arc<Directory>,
    picker: Box<dyn PhrasePicker>,
}

impl ConversationEngine {
    pub fn new(directory: Arc<Directory>, picker: Box<dyn PhrasePicker>) -> Self {
        Self { directory, picker }
    }

    /// Engine over `directory` with a seeded (or OS-seeded) random picker.
    pub fn with_seed(directory: Arc<Directory>, seed: Option<u64>) -> Self {
        Self::new(directory, Box::new(SeededPicker::new(seed)))
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    /// Produce the reply for one utterance.
    pub fn handle(&self, utterance: &Utterance) -> BotReply<'_> {
        // Pickers are external; out-of-range indices wrap instead of panicking.
        let index = self.picker.pick(ACKNOWLEDGEMENTS.len()) % ACKNOWLEDGEMENTS.len();
        let text = ACKNOWLEDGEMENTS[index];
        let hospitals = if self.should_suggest(utterance) {
            self.select_hospitals(utterance)
        } else {
            Vec::new()
        };

        debug!(
            suggestions = hospitals.len(),
            "Handled utterance of {} chars",
            utterance.as_str().len()
        );
        BotReply { text, hospitals }
    }

    /// True if the utterance mentions a symptom or asks for help.
    pub fn should_suggest(&self, utterance: &Utterance) -> bool {
        rules::mentions_symptom(&utterance.to_lowercase())
    }

    /// Listings relevant to the utterance, in directory order.
    pub fn select_hospitals(&self, utterance: &Utterance) -> Vec<&HospitalRecord> {
        let lowered = utterance.to_lowercase();
        if let Some(rule) = rules::matching_rule(&lowered) {
            debug!(rule = rule.name, "Specialty rule matched");
        }
        rules::select(self.directory.as_slice(), &lowered)
    }

    /// Confirmation text for booking `id`.
    pub fn confirm_booking(&self, id: HospitalId) -> Result<String, ChatError> {
        match self.directory.get(id) {
            Some(hospital) => {
                debug!(hospital_id = %id, "Booking confirmed");
                Ok(booking_confirmation(&hospital.name))
            }
            None => {
                warn!(hospital_id = %id, "Booking requested for unknown hospital");
                Err(ChatError::HospitalNotFound(id.to_string()))
            }
        }
    }

    /// Like [`confirm_booking`](Self::confirm_booking) but takes the id as
    /// text, the way a booking button carries it. Unparseable ids are
    /// reported as not found.
    pub fn confirm_booking_raw(&self, raw_id: &str) -> Result<String, ChatError> {
        match raw_id.parse::<HospitalId>() {
            Ok(id) => self.confirm_booking(id),
            Err(_) => {
                warn!(raw_id, "Booking requested with malformed hospital id");
                Err(ChatError::HospitalNotFound(raw_id.trim().to_string()))
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

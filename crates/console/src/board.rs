//! Patient board view state.
//!
//! The board mirrors what the server last reported plus any in-flight
//! region state. It is rebuilt wholesale from a list fetch; the single
//! exception is delete, which removes one card directly, so the board can
//! transiently diverge from the server until the next full fetch.

use dianovi_types::{Patient, Recommendation};

/// Per-card recommendation region.
///
/// Each card owns one region, advanced independently of every other card:
/// requesting a view always re-fetches, so `Loaded` never acts as a cache.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecommendationPanel {
    /// Nothing requested yet; the region renders empty.
    Empty,
    /// A fetch is in flight.
    Loading,
    /// The last fetch succeeded (possibly with zero items).
    Loaded(Vec<Recommendation>),
    /// The last fetch failed.
    Unavailable,
}

/// One patient record plus its recommendation region.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatientCard {
    pub patient: Patient,
    pub panel: RecommendationPanel,
}

impl PatientCard {
    fn new(patient: Patient) -> Self {
        Self {
            patient,
            panel: RecommendationPanel::Empty,
        }
    }
}

/// Overall board state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardState {
    /// The initial fetch has not completed yet.
    Loading,
    /// The last list fetch succeeded.
    Ready(Vec<PatientCard>),
    /// The last list fetch failed.
    Unavailable,
}

/// The client-side view of the patient list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatientBoard {
    state: BoardState,
}

impl PatientBoard {
    pub fn new() -> Self {
        Self {
            state: BoardState::Loading,
        }
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    /// Rebuilds the board from a fresh server list.
    ///
    /// Clears every card and every recommendation region; this is the
    /// idempotent-overwrite contract of a full list fetch.
    pub fn set_patients(&mut self, patients: Vec<Patient>) {
        self.state = BoardState::Ready(patients.into_iter().map(PatientCard::new).collect());
    }

    /// Marks the whole board as unavailable after a failed list fetch.
    pub fn set_unavailable(&mut self) {
        self.state = BoardState::Unavailable;
    }

    /// The cards in server order; empty unless the board is `Ready`.
    pub fn cards(&self) -> &[PatientCard] {
        match &self.state {
            BoardState::Ready(cards) => cards,
            _ => &[],
        }
    }

    pub fn card(&self, patient_id: &str) -> Option<&PatientCard> {
        self.cards()
            .iter()
            .find(|c| c.patient.patient_id == patient_id)
    }

    pub fn card_mut(&mut self, patient_id: &str) -> Option<&mut PatientCard> {
        match &mut self.state {
            BoardState::Ready(cards) => cards
                .iter_mut()
                .find(|c| c.patient.patient_id == patient_id),
            _ => None,
        }
    }

    /// Removes one card without touching the rest of the board.
    ///
    /// Returns false when no card carries the identifier.
    pub fn remove_card(&mut self, patient_id: &str) -> bool {
        match &mut self.state {
            BoardState::Ready(cards) => {
                let before = cards.len();
                cards.retain(|c| c.patient.patient_id != patient_id);
                cards.len() < before
            }
            _ => false,
        }
    }
}

impl Default for PatientBoard {
    fn default() -> Self {
        Self::new()
    }
}

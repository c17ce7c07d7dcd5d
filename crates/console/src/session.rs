//! Event controller for the interactive session.
//!
//! Wires user actions to API calls and board updates. Every network
//! failure is absorbed here: reads leave an inline message in the affected
//! region, writes raise a blocking alert and leave prior state intact.
//! Only prompt-channel failures propagate to the caller.

use api_client::ApiClient;
use dianovi_types::{BirthDate, NonEmptyText, Patient};

use crate::board::{PatientBoard, RecommendationPanel};
use crate::prompt::{PromptError, Prompter};

/// One interactive session: a client, the board it maintains, and the
/// prompter used for modal dialogs.
///
/// Commands run one at a time; a command's fetch completes (or fails)
/// before the next command is read, so no two requests ever race for the
/// same region.
pub struct ConsoleSession<P> {
    client: ApiClient,
    board: PatientBoard,
    prompter: P,
}

impl<P: Prompter> ConsoleSession<P> {
    pub fn new(client: ApiClient, prompter: P) -> Self {
        Self {
            client,
            board: PatientBoard::new(),
            prompter,
        }
    }

    pub fn board(&self) -> &PatientBoard {
        &self.board
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    /// Rebuilds the board from a full list fetch.
    ///
    /// Used at bootstrap and after every successful create/update. A
    /// failed fetch blanks the board and leaves only the error line.
    pub async fn refresh(&mut self) {
        match self.client.list_patients().await {
            Ok(patients) => self.board.set_patients(patients),
            Err(e) => {
                tracing::error!("Fetch patients error: {:?}", e);
                self.board.set_unavailable();
            }
        }
    }

    /// The add-patient form: collects identifier, name and date of birth.
    ///
    /// A cancelled or empty reply aborts without a request. On success the
    /// prompted values are discarded and the board is refreshed from the
    /// server; on failure an alert is shown and nothing else changes.
    ///
    /// # Errors
    ///
    /// Returns a `PromptError` only when the prompt channel itself fails.
    pub async fn add_patient(&mut self) -> Result<(), PromptError> {
        let Some(id) = self.prompter.input("Patient ID:", "")? else {
            return Ok(());
        };
        let Ok(id) = NonEmptyText::new(&id) else {
            return Ok(());
        };
        let Some(name) = self.prompter.input("Name:", "")? else {
            return Ok(());
        };
        let Ok(name) = NonEmptyText::new(&name) else {
            return Ok(());
        };
        let Some(dob) = self.prompter.input("Date of Birth (YYYY-MM-DD):", "")? else {
            return Ok(());
        };
        if dob.trim().is_empty() {
            return Ok(());
        }
        let dob = match BirthDate::new(&dob) {
            Ok(d) => d,
            Err(e) => {
                self.prompter.alert(&e.to_string());
                return Ok(());
            }
        };

        let patient = Patient {
            patient_id: id.into_string(),
            name: name.into_string(),
            date_of_birth: dob.into_string(),
        };
        match self.client.create_patient(&patient).await {
            Ok(()) => self.refresh().await,
            Err(e) => {
                tracing::error!("Create patient error: {:?}", e);
                self.prompter.alert("Could not add patient.");
            }
        }
        Ok(())
    }

    /// Edits a card's name and date of birth via prompts pre-filled with
    /// the current values.
    ///
    /// If either reply is cancelled or empty, no request is made. On
    /// success the board is refreshed from the server (the re-render uses
    /// server data, not the locally edited values).
    ///
    /// # Errors
    ///
    /// Returns a `PromptError` only when the prompt channel itself fails.
    pub async fn edit_patient(&mut self, patient_id: &str) -> Result<(), PromptError> {
        let Some(card) = self.board.card(patient_id) else {
            self.prompter
                .alert(&format!("No patient {patient_id} on the board."));
            return Ok(());
        };
        let current_name = card.patient.name.clone();
        let current_dob = card.patient.date_of_birth.clone();

        let Some(name) = self.prompter.input("Enter new name:", &current_name)? else {
            return Ok(());
        };
        let Some(dob) = self
            .prompter
            .input("Enter new date of birth (YYYY-MM-DD):", &current_dob)?
        else {
            return Ok(());
        };
        let Ok(name) = NonEmptyText::new(&name) else {
            return Ok(());
        };
        if dob.trim().is_empty() {
            return Ok(());
        }
        let dob = match BirthDate::new(&dob) {
            Ok(d) => d,
            Err(e) => {
                self.prompter.alert(&e.to_string());
                return Ok(());
            }
        };

        let update = Patient {
            patient_id: patient_id.to_string(),
            name: name.into_string(),
            date_of_birth: dob.into_string(),
        };
        match self.client.update_patient(patient_id, &update).await {
            Ok(()) => self.refresh().await,
            Err(e) => {
                tracing::error!("Update patient error: {:?}", e);
                self.prompter.alert("Could not update patient.");
            }
        }
        Ok(())
    }

    /// Deletes a patient after a blocking confirmation.
    ///
    /// On success the card is removed from the board directly, without a
    /// list fetch, so the board may transiently diverge from the server.
    ///
    /// # Errors
    ///
    /// Returns a `PromptError` only when the prompt channel itself fails.
    pub async fn delete_patient(&mut self, patient_id: &str) -> Result<(), PromptError> {
        if self.board.card(patient_id).is_none() {
            self.prompter
                .alert(&format!("No patient {patient_id} on the board."));
            return Ok(());
        }
        let confirmed = self
            .prompter
            .confirm(&format!("Are you sure you want to delete patient {patient_id}?"))?;
        if !confirmed {
            return Ok(());
        }

        match self.client.delete_patient(patient_id).await {
            Ok(()) => {
                self.board.remove_card(patient_id);
            }
            Err(e) => {
                tracing::error!("Delete patient error: {:?}", e);
                self.prompter.alert("Could not delete patient.");
            }
        }
        Ok(())
    }

    /// Fetches a card's recommendations into its region.
    ///
    /// Always re-fetches; a region that is already `Loaded` is not a
    /// cache. Failure marks only that card's region unavailable.
    pub async fn view_recommendations(&mut self, patient_id: &str) {
        if self.board.card(patient_id).is_none() {
            self.prompter
                .alert(&format!("No patient {patient_id} on the board."));
            return;
        }
        if let Some(card) = self.board.card_mut(patient_id) {
            card.panel = RecommendationPanel::Loading;
        }
        let panel = match self.client.list_recommendations(patient_id).await {
            Ok(items) => RecommendationPanel::Loaded(items),
            Err(e) => {
                tracing::error!("Fetch recommendations error: {:?}", e);
                RecommendationPanel::Unavailable
            }
        };
        if let Some(card) = self.board.card_mut(patient_id) {
            card.panel = panel;
        }
    }
}

//! Text rendering of the patient board.
//!
//! Rendering is a pure function of board state: every call produces the
//! full view, there is no diffing or incremental patching.

use crate::board::{BoardState, PatientBoard, PatientCard, RecommendationPanel};

const CARD_RULE: &str = "----------------------------------------";

/// Renders the whole board.
pub fn render_board(board: &PatientBoard) -> String {
    match board.state() {
        BoardState::Loading => "Loading patients...\n".to_string(),
        BoardState::Unavailable => "Error loading patients. Is the API running?\n".to_string(),
        BoardState::Ready(cards) if cards.is_empty() => "No patients found.\n".to_string(),
        BoardState::Ready(cards) => {
            let mut out = String::new();
            for card in cards {
                out.push_str(&render_card(card));
            }
            out
        }
    }
}

/// Renders one patient card: the record fields, the available actions and
/// the card's recommendation region.
pub fn render_card(card: &PatientCard) -> String {
    let mut out = String::new();
    out.push_str(CARD_RULE);
    out.push('\n');
    out.push_str(&format!("{}\n", card.patient.name));
    out.push_str(&format!("  Patient ID:    {}\n", card.patient.patient_id));
    out.push_str(&format!("  Date of Birth: {}\n", card.patient.date_of_birth));
    out.push_str(&format!(
        "  [edit {id}] [delete {id}] [view {id}]\n",
        id = card.patient.patient_id
    ));
    out.push_str(&render_panel(&card.panel));
    out
}

/// Renders a card's recommendation region.
pub fn render_panel(panel: &RecommendationPanel) -> String {
    match panel {
        RecommendationPanel::Empty => String::new(),
        RecommendationPanel::Loading => "  Loading recommendations...\n".to_string(),
        RecommendationPanel::Unavailable => "  Could not load recommendations.\n".to_string(),
        RecommendationPanel::Loaded(items) if items.is_empty() => {
            "  No recommendations available.\n".to_string()
        }
        RecommendationPanel::Loaded(items) => {
            let mut out = String::from("  Recommendations:\n");
            for item in items {
                out.push_str(&format!("    - {}\n", item.text));
            }
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dianovi_types::{Patient, Recommendation};

    fn patient(id: &str, name: &str, dob: &str) -> Patient {
        Patient {
            patient_id: id.to_string(),
            name: name.to_string(),
            date_of_birth: dob.to_string(),
        }
    }

    #[test]
    fn renders_one_card_per_patient_with_matching_fields() {
        let mut board = PatientBoard::new();
        board.set_patients(vec![
            patient("p001", "Sarah Williams", "1992-03-20"),
            patient("p002", "John Smith", "1985-11-02"),
            patient("p003", "Ana Costa", "2001-07-14"),
        ]);

        let out = render_board(&board);
        assert_eq!(out.matches(CARD_RULE).count(), 3);
        for (id, name, dob) in [
            ("p001", "Sarah Williams", "1992-03-20"),
            ("p002", "John Smith", "1985-11-02"),
            ("p003", "Ana Costa", "2001-07-14"),
        ] {
            assert!(out.contains(&format!("Patient ID:    {id}")));
            assert!(out.contains(name));
            assert!(out.contains(&format!("Date of Birth: {dob}")));
        }
    }

    #[test]
    fn empty_list_renders_placeholder_line() {
        let mut board = PatientBoard::new();
        board.set_patients(vec![]);
        assert_eq!(render_board(&board), "No patients found.\n");
    }

    #[test]
    fn failed_list_fetch_renders_error_line() {
        let mut board = PatientBoard::new();
        board.set_unavailable();
        assert_eq!(
            render_board(&board),
            "Error loading patients. Is the API running?\n"
        );
    }

    #[test]
    fn empty_recommendations_render_no_items() {
        let out = render_panel(&RecommendationPanel::Loaded(vec![]));
        assert_eq!(out, "  No recommendations available.\n");
        assert!(!out.contains("- "));
    }

    #[test]
    fn each_recommendation_renders_verbatim() {
        let texts = [
            "Consider Guideline XYZ for billing optimization.",
            "Check for recent lab result consistency.",
        ];
        let items = texts
            .iter()
            .map(|t| Recommendation {
                id: None,
                text: t.to_string(),
            })
            .collect();

        let out = render_panel(&RecommendationPanel::Loaded(items));
        assert_eq!(out.matches("    - ").count(), texts.len());
        for text in texts {
            assert!(out.contains(&format!("- {text}")));
        }
    }

    #[test]
    fn untouched_region_renders_empty() {
        assert_eq!(render_panel(&RecommendationPanel::Empty), "");
    }
}

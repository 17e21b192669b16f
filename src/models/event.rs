use serde::{Deserialize, Serialize};

use crate::utils::format::format_date_fr;

/// Kind of club activity. The API may grow new values, so deserialization
/// is tolerant of unknown strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventType {
    #[serde(rename = "entraînement")]
    Training,
    #[serde(rename = "match")]
    Match,
    #[serde(rename = "tournoi")]
    Tournament,
    #[serde(rename = "événement_social")]
    Social,
    #[serde(rename = "autre", other)]
    Other,
}

impl EventType {
    /// Pictogram shown next to the event title.
    pub fn icon(&self) -> &'static str {
        match self {
            EventType::Training => "🏃",
            EventType::Match => "🏆",
            EventType::Tournament => "🏅",
            EventType::Social => "🎉",
            EventType::Other => "📅",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EventType::Training => "Entraînement",
            EventType::Match => "Match",
            EventType::Tournament => "Tournoi",
            EventType::Social => "Soirée",
            EventType::Other => "Autre",
        }
    }
}

/// An upcoming club event. Read-only on this side; sourced from the fixture
/// or fetched from the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "titre")]
    pub title: String,
    pub description: String,
    /// ISO date, `YYYY-MM-DD`.
    pub date: String,
    #[serde(rename = "heure")]
    pub time: String,
    #[serde(rename = "lieu")]
    pub location: String,
    #[serde(rename = "type_evenement")]
    pub event_type: EventType,
    #[serde(rename = "places_max")]
    pub max_capacity: Option<u32>,
    #[serde(rename = "prix")]
    pub price: Option<String>,
}

impl Event {
    /// Long French date for the detail panel: "lundi 20 janvier 2025".
    pub fn formatted_date(&self) -> String {
        format_date_fr(&self.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_event_with_french_field_names() {
        let json = r#"{
            "id": "2",
            "titre": "Match amical vs. Les Fauves",
            "description": "Match amical contre l'équipe des Fauves de Lyon.",
            "date": "2025-01-25",
            "heure": "19:00",
            "lieu": "Gymnase Municipal - 123 Rue du Sport, Paris",
            "type_evenement": "match",
            "places_max": 50,
            "prix": "5€ entrée"
        }"#;

        let event: Event = serde_json::from_str(json).expect("event should parse");
        assert_eq!(event.title, "Match amical vs. Les Fauves");
        assert_eq!(event.event_type, EventType::Match);
        assert_eq!(event.max_capacity, Some(50));
        assert_eq!(event.price.as_deref(), Some("5€ entrée"));
    }

    #[test]
    fn test_null_capacity_and_unknown_type() {
        let json = r#"{
            "titre": "Stage découverte",
            "description": "Journée portes ouvertes",
            "date": "2025-03-01",
            "heure": "10:00",
            "lieu": "Gymnase Municipal",
            "type_evenement": "stage",
            "places_max": null,
            "prix": null
        }"#;

        let event: Event = serde_json::from_str(json).expect("event should parse");
        assert_eq!(event.event_type, EventType::Other);
        assert_eq!(event.max_capacity, None);
        assert_eq!(event.price, None);
    }
}

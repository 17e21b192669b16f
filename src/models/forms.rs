//! Form drafts and their wire payloads.
//!
//! Drafts hold whatever the user typed; required-field checks live here and
//! are applied by the input surface before submission. The controller itself
//! validates nothing.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ExperienceLevel {
    #[default]
    #[serde(rename = "débutant")]
    Beginner,
    #[serde(rename = "intermédiaire")]
    Intermediate,
    #[serde(rename = "avancé")]
    Advanced,
}

impl ExperienceLevel {
    pub fn label(&self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "Débutant(e)",
            ExperienceLevel::Intermediate => "Intermédiaire",
            ExperienceLevel::Advanced => "Avancé(e)",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            ExperienceLevel::Beginner => ExperienceLevel::Intermediate,
            ExperienceLevel::Intermediate => ExperienceLevel::Advanced,
            ExperienceLevel::Advanced => ExperienceLevel::Beginner,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            ExperienceLevel::Beginner => ExperienceLevel::Advanced,
            ExperienceLevel::Intermediate => ExperienceLevel::Beginner,
            ExperienceLevel::Advanced => ExperienceLevel::Intermediate,
        }
    }
}

/// Membership registration form, as typed. Reset to defaults after a
/// successful submission or a cancel; left intact on failure so the user
/// can retry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    /// Raw input; coerced to an integer when the payload is built.
    pub age: String,
    pub level: ExperienceLevel,
    pub note: String,
}

impl RegistrationDraft {
    /// All required fields non-empty and the age parses as a number.
    /// Range limits (12-100) are the input surface's concern.
    pub fn is_complete(&self) -> bool {
        !self.first_name.trim().is_empty()
            && !self.last_name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.phone.trim().is_empty()
            && self.age.trim().parse::<u32>().is_ok()
    }

    pub fn payload(&self) -> RegistrationPayload {
        RegistrationPayload {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            age: self.age.trim().parse().unwrap_or(0),
            level: self.level,
            note: if self.note.trim().is_empty() {
                None
            } else {
                Some(self.note.clone())
            },
        }
    }
}

/// Wire form of a registration; age as an integer per the API contract.
#[derive(Debug, Clone, Serialize)]
pub struct RegistrationPayload {
    #[serde(rename = "prenom")]
    pub first_name: String,
    #[serde(rename = "nom")]
    pub last_name: String,
    pub email: String,
    #[serde(rename = "telephone")]
    pub phone: String,
    pub age: i64,
    #[serde(rename = "niveau_experience")]
    pub level: ExperienceLevel,
    #[serde(rename = "message")]
    pub note: Option<String>,
}

/// Contact form. Serialized as-is; same lifecycle as `RegistrationDraft`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactDraft {
    #[serde(rename = "nom")]
    pub name: String,
    pub email: String,
    #[serde(rename = "sujet")]
    pub subject: String,
    pub message: String,
}

impl ContactDraft {
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.subject.trim().is_empty()
            && !self.message.trim().is_empty()
    }
}

/// Per-event signup. Built on demand and sent immediately; never kept as
/// controller state.
#[derive(Debug, Clone, Serialize)]
pub struct EventSignup {
    #[serde(rename = "nom")]
    pub name: String,
    pub email: String,
    #[serde(rename = "telephone")]
    pub phone: String,
    #[serde(rename = "nom_evenement")]
    pub event_title: String,
}

impl EventSignup {
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.phone.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_draft() -> RegistrationDraft {
        RegistrationDraft {
            first_name: "Jamie".to_string(),
            last_name: "Fox".to_string(),
            email: "jamie@example.com".to_string(),
            phone: "0600000000".to_string(),
            age: "22".to_string(),
            level: ExperienceLevel::Beginner,
            note: String::new(),
        }
    }

    #[test]
    fn test_registration_completeness() {
        assert!(filled_draft().is_complete());
        assert!(!RegistrationDraft::default().is_complete());

        let mut draft = filled_draft();
        draft.age = "vingt-deux".to_string();
        assert!(!draft.is_complete());
    }

    #[test]
    fn test_payload_coerces_age_and_uses_french_keys() {
        let payload = filled_draft().payload();
        assert_eq!(payload.age, 22);

        let json = serde_json::to_value(&payload).expect("payload should serialize");
        assert_eq!(json["prenom"], "Jamie");
        assert_eq!(json["nom"], "Fox");
        assert_eq!(json["telephone"], "0600000000");
        assert_eq!(json["age"], 22);
        assert_eq!(json["niveau_experience"], "débutant");
        assert_eq!(json["message"], serde_json::Value::Null);
    }

    #[test]
    fn test_event_signup_requires_all_attendee_fields() {
        let signup = EventSignup {
            name: "Alex Dupont".to_string(),
            email: "alex@example.com".to_string(),
            phone: String::new(),
            event_title: "Tournoi Régional d'Hiver".to_string(),
        };
        assert!(!signup.is_complete());

        let json = serde_json::to_value(&signup).expect("signup should serialize");
        assert_eq!(json["nom_evenement"], "Tournoi Régional d'Hiver");
    }

    #[test]
    fn test_experience_level_cycle() {
        let level = ExperienceLevel::Beginner;
        assert_eq!(level.next().next().next(), level);
        assert_eq!(level.prev(), ExperienceLevel::Advanced);
    }
}

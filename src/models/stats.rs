use serde::{Deserialize, Serialize};

/// Display-only aggregate counters for the home section.
/// Every field defaults to zero so a partial payload still renders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClubStats {
    #[serde(rename = "total_inscriptions", default)]
    pub total_registrations: u32,
    #[serde(rename = "membres_actifs", default)]
    pub active_members: u32,
    #[serde(rename = "evenements_a_venir", default)]
    pub upcoming_events: u32,
    #[serde(rename = "total_photos", default)]
    pub total_photos: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_zero() {
        // The backend only reports counters it tracks; the rest stay 0.
        let json = r#"{"total_inscriptions": 23, "membres_actifs": 23, "total_contacts": 7}"#;
        let stats: ClubStats = serde_json::from_str(json).expect("stats should parse");

        assert_eq!(stats.total_registrations, 23);
        assert_eq!(stats.active_members, 23);
        assert_eq!(stats.upcoming_events, 0);
        assert_eq!(stats.total_photos, 0);
    }
}

//! Built-in demo data, used when no backend is available.

use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;
use tracing::debug;

use crate::api::ApiError;
use crate::models::{
    ClubStats, ContactDraft, Event, EventSignup, EventType, Photo, PhotoCategory,
    RegistrationPayload,
};

use super::DataSource;

/// Member count the demo starts from; registrations bump it.
const BASE_MEMBERS: u32 = 23;

/// In-memory stand-in for the backend. Registrations are counted so the
/// home-page stats react to submissions, but nothing is persisted.
pub struct FixtureSource {
    registrations: AtomicU32,
}

impl FixtureSource {
    pub fn new() -> Self {
        Self {
            registrations: AtomicU32::new(BASE_MEMBERS),
        }
    }
}

impl Default for FixtureSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DataSource for FixtureSource {
    async fn fetch_stats(&self) -> Result<ClubStats, ApiError> {
        let registrations = self.registrations.load(Ordering::Relaxed);
        Ok(ClubStats {
            total_registrations: registrations,
            active_members: registrations,
            upcoming_events: demo_events().len() as u32,
            total_photos: demo_photos().len() as u32,
        })
    }

    async fn fetch_events(&self) -> Result<Vec<Event>, ApiError> {
        Ok(demo_events())
    }

    async fn fetch_gallery(&self) -> Result<Vec<Photo>, ApiError> {
        Ok(demo_photos())
    }

    async fn submit_registration(
        &self,
        payload: &RegistrationPayload,
    ) -> Result<String, ApiError> {
        self.registrations.fetch_add(1, Ordering::Relaxed);
        debug!(email = %payload.email, "Demo registration accepted");
        Ok("Inscription reçue ! (Version démo - les données ne sont pas sauvegardées)".to_string())
    }

    async fn submit_contact(&self, draft: &ContactDraft) -> Result<String, ApiError> {
        debug!(subject = %draft.subject, "Demo contact message accepted");
        Ok("Message envoyé ! (Version démo - les données ne sont pas sauvegardées)".to_string())
    }

    async fn register_for_event(&self, signup: &EventSignup) -> Result<String, ApiError> {
        Ok(format!(
            "Inscription à \"{}\" confirmée ! (Version démo - les données ne sont pas sauvegardées)",
            signup.event_title
        ))
    }
}

fn demo_events() -> Vec<Event> {
    vec![
        Event {
            id: "1".to_string(),
            title: "Entraînement débutants".to_string(),
            description: "Séance spéciale pour les nouveaux membres. Venez découvrir le roller \
                          derby dans une ambiance conviviale !"
                .to_string(),
            date: "2025-01-20".to_string(),
            time: "14:00".to_string(),
            location: "Gymnase Municipal - 123 Rue du Sport, Paris".to_string(),
            event_type: EventType::Training,
            max_capacity: Some(15),
            price: Some("Gratuit pour les nouveaux".to_string()),
        },
        Event {
            id: "2".to_string(),
            title: "Match amical vs. Les Fauves".to_string(),
            description: "Match amical contre l'équipe des Fauves de Lyon. Venez encourager La \
                          Harde !"
                .to_string(),
            date: "2025-01-25".to_string(),
            time: "19:00".to_string(),
            location: "Gymnase Municipal - 123 Rue du Sport, Paris".to_string(),
            event_type: EventType::Match,
            max_capacity: Some(50),
            price: Some("5€ entrée".to_string()),
        },
        Event {
            id: "3".to_string(),
            title: "Tournoi Régional d'Hiver".to_string(),
            description: "Participation au tournoi régional. L'occasion de voir du roller derby \
                          de haut niveau !"
                .to_string(),
            date: "2025-02-15".to_string(),
            time: "09:00".to_string(),
            location: "Palais des Sports - Créteil".to_string(),
            event_type: EventType::Tournament,
            max_capacity: None,
            price: Some("10€ - transport inclus".to_string()),
        },
        Event {
            id: "4".to_string(),
            title: "Soirée conviviale équipe".to_string(),
            description: "Soirée détente avec toute l'équipe. Pizzas, jeux et bonne humeur au \
                          programme !"
                .to_string(),
            date: "2025-02-08".to_string(),
            time: "20:00".to_string(),
            location: "Local du club".to_string(),
            event_type: EventType::Social,
            max_capacity: Some(30),
            price: Some("15€ repas inclus".to_string()),
        },
    ]
}

fn demo_photos() -> Vec<Photo> {
    let photo = |id: &str, title: &str, description: &str, url: &str, category, date: &str| Photo {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        image_url: url.to_string(),
        category,
        taken_on: Some(date.to_string()),
    };

    vec![
        photo(
            "1",
            "Entraînement en équipe",
            "Séance d'entraînement intensive avec toute l'équipe de La Harde",
            "https://images.unsplash.com/photo-1568557412756-7d219873dd11",
            PhotoCategory::Training,
            "2024-12-15",
        ),
        photo(
            "2",
            "Préparation physique",
            "Échauffement avant un match important",
            "https://images.unsplash.com/photo-1526676537331-7747bf8278fc",
            PhotoCategory::Training,
            "2024-12-10",
        ),
        photo(
            "3",
            "Match contre les Tigres",
            "Action de jeu lors du match contre l'équipe des Tigres",
            "https://images.unsplash.com/photo-1559302995-ab792ee16ce8",
            PhotoCategory::Match,
            "2024-11-28",
        ),
        photo(
            "4",
            "Esprit d'équipe",
            "La cohésion de l'équipe La Harde en action",
            "https://images.unsplash.com/photo-1573301724534-c9ad93472d13",
            PhotoCategory::Team,
            "2024-12-01",
        ),
        photo(
            "5",
            "Concentration avant match",
            "Les joueuses se préparent mentalement avant le coup d'envoi",
            "https://images.unsplash.com/photo-1603124076947-7b6412d8958e",
            PhotoCategory::Team,
            "2024-11-20",
        ),
        photo(
            "6",
            "Formation technique",
            "Apprentissage des techniques de base du roller derby",
            "https://images.unsplash.com/photo-1568557412756-7d219873dd11",
            PhotoCategory::Training,
            "2024-11-15",
        ),
        photo(
            "7",
            "Victoire d'équipe",
            "Célébration après une victoire importante",
            "https://images.unsplash.com/photo-1526676537331-7747bf8278fc",
            PhotoCategory::Match,
            "2024-10-30",
        ),
        photo(
            "8",
            "Nouvelles recrues",
            "Accueil des nouveaux membres dans l'équipe",
            "https://images.unsplash.com/photo-1573301724534-c9ad93472d13",
            PhotoCategory::Team,
            "2024-10-15",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExperienceLevel;

    fn payload() -> RegistrationPayload {
        RegistrationPayload {
            first_name: "Jamie".to_string(),
            last_name: "Fox".to_string(),
            email: "jamie@example.com".to_string(),
            phone: "0601020304".to_string(),
            age: 22,
            level: ExperienceLevel::Beginner,
            note: None,
        }
    }

    #[tokio::test]
    async fn test_stats_reflect_registrations() {
        let source = FixtureSource::new();
        let before = source.fetch_stats().await.unwrap();
        assert_eq!(before.total_registrations, BASE_MEMBERS);

        source.submit_registration(&payload()).await.unwrap();
        let after = source.fetch_stats().await.unwrap();
        assert_eq!(after.total_registrations, BASE_MEMBERS + 1);
        assert_eq!(after.active_members, BASE_MEMBERS + 1);
    }

    #[tokio::test]
    async fn test_photo_count_matches_gallery() {
        let source = FixtureSource::new();
        let stats = source.fetch_stats().await.unwrap();
        let photos = source.fetch_gallery().await.unwrap();
        assert_eq!(stats.total_photos as usize, photos.len());
    }

    #[tokio::test]
    async fn test_event_signup_echoes_event_title() {
        let source = FixtureSource::new();
        let signup = EventSignup {
            name: "Jamie Fox".to_string(),
            email: "jamie@example.com".to_string(),
            phone: "0601020304".to_string(),
            event_title: "Tournoi Régional d'Hiver".to_string(),
        };
        let message = source.register_for_event(&signup).await.unwrap();
        assert!(message.contains("Tournoi Régional d'Hiver"));
    }
}

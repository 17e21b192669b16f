//! Application state and controller.
//!
//! One `App` owns everything the UI renders: the active section, the data
//! fetched so far, the form drafts, and the transient status message.
//! Background refreshes report back over an MPSC channel drained once per
//! tick; form submissions are awaited inline so at most one is in flight.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{debug, error, info};

use crate::api::ApiError;
use crate::models::{
    filter_photos, ClubStats, ContactDraft, Event, EventSignup, GalleryFilter, Photo,
    RegistrationDraft,
};
use crate::source::DataSource;

const CHANNEL_BUFFER_SIZE: usize = 32;

/// How long a status message stays on screen.
const STATUS_MESSAGE_TTL: Duration = Duration::from_secs(5);

/// Site sections, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Accueil,
    Club,
    RollerDerby,
    Evenements,
    Galerie,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Accueil,
        Section::Club,
        Section::RollerDerby,
        Section::Evenements,
        Section::Galerie,
        Section::Contact,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Section::Accueil => "Accueil",
            Section::Club => "Le Club",
            Section::RollerDerby => "Roller Derby",
            Section::Evenements => "Événements",
            Section::Galerie => "Galerie",
            Section::Contact => "Contact",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Section::Accueil => Section::Club,
            Section::Club => Section::RollerDerby,
            Section::RollerDerby => Section::Evenements,
            Section::Evenements => Section::Galerie,
            Section::Galerie => Section::Contact,
            Section::Contact => Section::Accueil,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Section::Accueil => Section::Contact,
            Section::Club => Section::Accueil,
            Section::RollerDerby => Section::Club,
            Section::Evenements => Section::RollerDerby,
            Section::Galerie => Section::Evenements,
            Section::Contact => Section::Galerie,
        }
    }
}

/// Focused field of the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegistrationField {
    #[default]
    FirstName,
    LastName,
    Email,
    Phone,
    Age,
    Level,
    Note,
    Submit,
}

impl RegistrationField {
    pub fn next(&self) -> Self {
        match self {
            RegistrationField::FirstName => RegistrationField::LastName,
            RegistrationField::LastName => RegistrationField::Email,
            RegistrationField::Email => RegistrationField::Phone,
            RegistrationField::Phone => RegistrationField::Age,
            RegistrationField::Age => RegistrationField::Level,
            RegistrationField::Level => RegistrationField::Note,
            RegistrationField::Note => RegistrationField::Submit,
            RegistrationField::Submit => RegistrationField::FirstName,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            RegistrationField::FirstName => RegistrationField::Submit,
            RegistrationField::LastName => RegistrationField::FirstName,
            RegistrationField::Email => RegistrationField::LastName,
            RegistrationField::Phone => RegistrationField::Email,
            RegistrationField::Age => RegistrationField::Phone,
            RegistrationField::Level => RegistrationField::Age,
            RegistrationField::Note => RegistrationField::Level,
            RegistrationField::Submit => RegistrationField::Note,
        }
    }
}

/// Focused field of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactField {
    #[default]
    Name,
    Email,
    Subject,
    Message,
    Submit,
}

impl ContactField {
    pub fn next(&self) -> Self {
        match self {
            ContactField::Name => ContactField::Email,
            ContactField::Email => ContactField::Subject,
            ContactField::Subject => ContactField::Message,
            ContactField::Message => ContactField::Submit,
            ContactField::Submit => ContactField::Name,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            ContactField::Name => ContactField::Submit,
            ContactField::Email => ContactField::Name,
            ContactField::Subject => ContactField::Email,
            ContactField::Message => ContactField::Subject,
            ContactField::Submit => ContactField::Message,
        }
    }
}

/// Focused field of the per-event signup form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignupField {
    #[default]
    Name,
    Email,
    Phone,
    Submit,
}

impl SignupField {
    pub fn next(&self) -> Self {
        match self {
            SignupField::Name => SignupField::Email,
            SignupField::Email => SignupField::Phone,
            SignupField::Phone => SignupField::Submit,
            SignupField::Submit => SignupField::Name,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            SignupField::Name => SignupField::Submit,
            SignupField::Email => SignupField::Name,
            SignupField::Phone => SignupField::Email,
            SignupField::Submit => SignupField::Phone,
        }
    }
}

/// Per-event signup overlay: the attendee details plus which event they
/// are signing up for. Exists only while the overlay is open.
#[derive(Debug, Clone)]
pub struct EventSignupForm {
    pub signup: EventSignup,
    pub focus: SignupField,
}

impl EventSignupForm {
    pub fn new(event_title: String) -> Self {
        Self {
            signup: EventSignup {
                name: String::new(),
                email: String::new(),
                phone: String::new(),
                event_title,
            },
            focus: SignupField::default(),
        }
    }
}

/// Results delivered by background tasks, drained once per UI tick.
#[derive(Debug)]
enum AppEvent {
    Stats(ClubStats),
    Events(Vec<Event>),
    Gallery(Vec<Photo>),
    /// Fired when a status message's display window elapses. The payload is
    /// the generation the timer was armed for; stale timers are ignored.
    StatusExpired(u64),
}

pub struct App {
    source: Arc<dyn DataSource>,

    pub section: Section,
    pub stats: ClubStats,
    pub events: Vec<Event>,
    pub photos: Vec<Photo>,
    pub gallery_filter: GalleryFilter,
    pub event_selection: usize,

    pub show_registration_form: bool,
    pub registration_draft: RegistrationDraft,
    pub registration_focus: RegistrationField,

    pub show_contact_form: bool,
    pub contact_draft: ContactDraft,
    pub contact_focus: ContactField,

    pub signup_form: Option<EventSignupForm>,

    /// True while a submission is awaited; blocks further submits.
    pub submitting: bool,
    pub status_message: Option<String>,
    status_generation: u64,

    events_rx: mpsc::Receiver<AppEvent>,
    events_tx: mpsc::Sender<AppEvent>,
}

impl App {
    pub fn new(source: Arc<dyn DataSource>) -> Self {
        let (tx, rx) = mpsc::channel(CHANNEL_BUFFER_SIZE);

        Self {
            source,
            section: Section::default(),
            stats: ClubStats::default(),
            events: Vec::new(),
            photos: Vec::new(),
            gallery_filter: GalleryFilter::default(),
            event_selection: 0,
            show_registration_form: false,
            registration_draft: RegistrationDraft::default(),
            registration_focus: RegistrationField::default(),
            show_contact_form: false,
            contact_draft: ContactDraft::default(),
            contact_focus: ContactField::default(),
            signup_form: None,
            submitting: false,
            status_message: None,
            status_generation: 0,
            events_rx: rx,
            events_tx: tx,
        }
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Switch to a section. Selecting the already-active section is a no-op;
    /// no per-section state is reset either way.
    pub fn select_section(&mut self, section: Section) {
        self.section = section;

        // Retry the fetch for sections whose data never arrived.
        match section {
            Section::Evenements if self.events.is_empty() => self.refresh_events(),
            Section::Galerie if self.photos.is_empty() => self.refresh_gallery(),
            _ => {}
        }
    }

    pub fn next_section(&mut self) {
        self.select_section(self.section.next());
    }

    pub fn prev_section(&mut self) {
        self.select_section(self.section.prev());
    }

    // =========================================================================
    // Events list
    // =========================================================================

    pub fn selected_event(&self) -> Option<&Event> {
        self.events.get(self.event_selection)
    }

    pub fn select_next_event(&mut self) {
        if self.event_selection + 1 < self.events.len() {
            self.event_selection += 1;
        }
    }

    pub fn select_prev_event(&mut self) {
        self.event_selection = self.event_selection.saturating_sub(1);
    }

    // =========================================================================
    // Gallery
    // =========================================================================

    pub fn next_gallery_filter(&mut self) {
        self.gallery_filter = self.gallery_filter.next();
    }

    pub fn prev_gallery_filter(&mut self) {
        self.gallery_filter = self.gallery_filter.prev();
    }

    pub fn visible_photos(&self) -> Vec<&Photo> {
        filter_photos(&self.photos, self.gallery_filter)
    }

    // =========================================================================
    // Forms
    // =========================================================================

    pub fn open_registration_form(&mut self) {
        self.show_registration_form = true;
        self.registration_focus = RegistrationField::default();
    }

    /// Close the registration form, discarding whatever was typed.
    pub fn cancel_registration_form(&mut self) {
        self.show_registration_form = false;
        self.registration_draft = RegistrationDraft::default();
        self.registration_focus = RegistrationField::default();
    }

    pub fn open_contact_form(&mut self) {
        self.show_contact_form = true;
        self.contact_focus = ContactField::default();
    }

    pub fn cancel_contact_form(&mut self) {
        self.show_contact_form = false;
        self.contact_draft = ContactDraft::default();
        self.contact_focus = ContactField::default();
    }

    /// Open the signup overlay for the currently selected event. Does
    /// nothing when the list is empty.
    pub fn open_event_signup(&mut self) {
        if let Some(event) = self.selected_event() {
            self.signup_form = Some(EventSignupForm::new(event.title.clone()));
        }
    }

    pub fn cancel_event_signup(&mut self) {
        self.signup_form = None;
    }

    /// True when any modal overlay is capturing input.
    pub fn overlay_open(&self) -> bool {
        self.show_registration_form || self.show_contact_form || self.signup_form.is_some()
    }

    // =========================================================================
    // Status messages
    // =========================================================================

    /// Show a status message and arm its expiry timer. A newer message
    /// bumps the generation, so the older timer fires into the void.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_generation += 1;

        let generation = self.status_generation;
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(STATUS_MESSAGE_TTL).await;
            let _ = tx.send(AppEvent::StatusExpired(generation)).await;
        });
    }

    // =========================================================================
    // Submissions
    // =========================================================================

    /// Submit the membership registration. On success the draft is reset,
    /// the form closes, and the stats refresh; on failure the draft stays
    /// so the user can correct and retry.
    pub async fn submit_registration(&mut self) {
        if self.submitting {
            return;
        }
        self.submitting = true;

        let payload = self.registration_draft.payload();
        let result = self.source.submit_registration(&payload).await;
        self.submitting = false;

        match result {
            Ok(message) => {
                info!(email = %payload.email, "Registration accepted");
                self.registration_draft = RegistrationDraft::default();
                self.show_registration_form = false;
                self.set_status(format!("✅ {message}"));
                self.refresh_stats();
            }
            Err(e) => {
                debug!(error = %e, "Registration rejected");
                self.set_status(e.user_message());
            }
        }
    }

    pub async fn submit_contact(&mut self) {
        if self.submitting {
            return;
        }
        self.submitting = true;

        let result = self.source.submit_contact(&self.contact_draft).await;
        self.submitting = false;

        match result {
            Ok(message) => {
                self.contact_draft = ContactDraft::default();
                self.show_contact_form = false;
                self.set_status(format!("✅ {message}"));
            }
            Err(e) => {
                debug!(error = %e, "Contact message rejected");
                self.set_status(e.user_message());
            }
        }
    }

    pub async fn submit_event_signup(&mut self) {
        if self.submitting {
            return;
        }
        let Some(form) = self.signup_form.clone() else {
            return;
        };
        self.submitting = true;

        let result = self.source.register_for_event(&form.signup).await;
        self.submitting = false;

        match result {
            Ok(message) => {
                self.signup_form = None;
                self.set_status(format!("✅ {message}"));
            }
            Err(e) => {
                debug!(error = %e, "Event signup rejected");
                self.set_status(e.user_message());
            }
        }
    }

    // =========================================================================
    // Background refresh
    // =========================================================================

    /// Fetch stats, events, and the gallery in one background task.
    pub fn refresh_all(&mut self) {
        info!("Starting background refresh");
        let source = Arc::clone(&self.source);
        let tx = self.events_tx.clone();

        tokio::spawn(async move {
            let (stats, events, gallery) = tokio::join!(
                source.fetch_stats(),
                source.fetch_events(),
                source.fetch_gallery(),
            );
            Self::forward(&tx, "stats", stats, AppEvent::Stats).await;
            Self::forward(&tx, "events", events, AppEvent::Events).await;
            Self::forward(&tx, "gallery", gallery, AppEvent::Gallery).await;
        });
    }

    pub fn refresh_stats(&mut self) {
        let source = Arc::clone(&self.source);
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let stats = source.fetch_stats().await;
            Self::forward(&tx, "stats", stats, AppEvent::Stats).await;
        });
    }

    pub fn refresh_events(&mut self) {
        let source = Arc::clone(&self.source);
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let events = source.fetch_events().await;
            Self::forward(&tx, "events", events, AppEvent::Events).await;
        });
    }

    pub fn refresh_gallery(&mut self) {
        let source = Arc::clone(&self.source);
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let gallery = source.fetch_gallery().await;
            Self::forward(&tx, "gallery", gallery, AppEvent::Gallery).await;
        });
    }

    /// Send a successful fetch back to the main loop; a failed fetch is
    /// logged and dropped, keeping whatever data is already displayed.
    async fn forward<T, F>(
        tx: &mpsc::Sender<AppEvent>,
        name: &str,
        result: Result<T, ApiError>,
        wrap: F,
    ) where
        F: FnOnce(T) -> AppEvent,
    {
        match result {
            Ok(data) => {
                if let Err(e) = tx.send(wrap(data)).await {
                    error!(error = %e, "Failed to deliver refresh result - channel closed");
                }
            }
            Err(e) => {
                debug!(fetch = name, error = %e, "Refresh failed; keeping previous data");
            }
        }
    }

    /// Drain pending background results. Called once per UI tick.
    pub fn drain_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.apply_event(event);
        }
    }

    fn apply_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Stats(stats) => self.stats = stats,
            AppEvent::Events(events) => {
                self.events = events;
                if self.event_selection >= self.events.len() {
                    self.event_selection = self.events.len().saturating_sub(1);
                }
            }
            AppEvent::Gallery(photos) => self.photos = photos,
            AppEvent::StatusExpired(generation) => {
                if generation == self.status_generation {
                    self.status_message = None;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EventType;
    use std::sync::Mutex;

    /// Data source whose responses are queued up front. Queues are popped
    /// per call; an empty queue answers with empty data.
    #[derive(Default)]
    struct ScriptedSource {
        stats: Mutex<Vec<Result<ClubStats, ApiError>>>,
        events: Mutex<Vec<Result<Vec<Event>, ApiError>>>,
        gallery: Mutex<Vec<Result<Vec<Photo>, ApiError>>>,
        registrations: Mutex<Vec<Result<String, ApiError>>>,
        contacts: Mutex<Vec<Result<String, ApiError>>>,
        signups: Mutex<Vec<Result<String, ApiError>>>,
    }

    #[async_trait::async_trait]
    impl DataSource for ScriptedSource {
        async fn fetch_stats(&self) -> Result<ClubStats, ApiError> {
            pop(&self.stats).unwrap_or(Ok(ClubStats::default()))
        }

        async fn fetch_events(&self) -> Result<Vec<Event>, ApiError> {
            pop(&self.events).unwrap_or(Ok(Vec::new()))
        }

        async fn fetch_gallery(&self) -> Result<Vec<Photo>, ApiError> {
            pop(&self.gallery).unwrap_or(Ok(Vec::new()))
        }

        async fn submit_registration(
            &self,
            _payload: &crate::models::RegistrationPayload,
        ) -> Result<String, ApiError> {
            pop(&self.registrations).unwrap_or(Ok("ok".to_string()))
        }

        async fn submit_contact(&self, _draft: &ContactDraft) -> Result<String, ApiError> {
            pop(&self.contacts).unwrap_or(Ok("ok".to_string()))
        }

        async fn register_for_event(&self, _signup: &EventSignup) -> Result<String, ApiError> {
            pop(&self.signups).unwrap_or(Ok("ok".to_string()))
        }
    }

    fn pop<T>(queue: &Mutex<Vec<T>>) -> Option<T> {
        let mut queue = queue.lock().unwrap();
        if queue.is_empty() {
            None
        } else {
            Some(queue.remove(0))
        }
    }

    fn rejected(detail: &str) -> ApiError {
        ApiError::Rejected {
            detail: detail.to_string(),
        }
    }

    fn app_with(source: ScriptedSource) -> App {
        App::new(Arc::new(source))
    }

    fn sample_event(id: &str, title: &str) -> Event {
        Event {
            id: id.to_string(),
            title: title.to_string(),
            description: "Description".to_string(),
            date: "2025-01-20".to_string(),
            time: "14:00".to_string(),
            location: "Gymnase Municipal".to_string(),
            event_type: EventType::Training,
            max_capacity: Some(15),
            price: None,
        }
    }

    fn filled_registration() -> RegistrationDraft {
        RegistrationDraft {
            first_name: "Jamie".to_string(),
            last_name: "Fox".to_string(),
            email: "jamie@example.com".to_string(),
            phone: "0601020304".to_string(),
            age: "22".to_string(),
            ..Default::default()
        }
    }

    /// Let spawned tasks run and deliver their channel messages.
    async fn settle(app: &mut App) {
        tokio::task::yield_now().await;
        tokio::task::yield_now().await;
        app.drain_events();
    }

    #[tokio::test]
    async fn test_section_selection_is_idempotent() {
        let mut app = app_with(ScriptedSource::default());
        app.select_section(Section::Galerie);
        app.gallery_filter = GalleryFilter::Category(crate::models::PhotoCategory::Match);

        app.select_section(Section::Galerie);
        assert_eq!(app.section, Section::Galerie);
        assert_eq!(
            app.gallery_filter,
            GalleryFilter::Category(crate::models::PhotoCategory::Match)
        );
    }

    #[tokio::test]
    async fn test_section_cycle_wraps() {
        let mut app = app_with(ScriptedSource::default());
        for _ in 0..Section::ALL.len() {
            app.next_section();
        }
        assert_eq!(app.section, Section::Accueil);

        app.prev_section();
        assert_eq!(app.section, Section::Contact);
    }

    #[tokio::test(start_paused = true)]
    async fn test_successful_registration_resets_draft_and_closes_form() {
        let source = ScriptedSource::default();
        source
            .registrations
            .lock()
            .unwrap()
            .push(Ok("Inscription reçue avec succès!".to_string()));

        let mut app = app_with(source);
        app.open_registration_form();
        app.registration_draft = filled_registration();

        app.submit_registration().await;

        assert!(!app.show_registration_form);
        assert_eq!(app.registration_draft, RegistrationDraft::default());
        assert!(!app.submitting);
        assert_eq!(
            app.status_message.as_deref(),
            Some("✅ Inscription reçue avec succès!")
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_registration_keeps_draft_for_retry() {
        let source = ScriptedSource::default();
        source
            .registrations
            .lock()
            .unwrap()
            .push(Err(rejected("Une inscription existe déjà avec cet email")));

        let mut app = app_with(source);
        app.open_registration_form();
        app.registration_draft = filled_registration();

        app.submit_registration().await;

        assert!(app.show_registration_form);
        assert_eq!(app.registration_draft, filled_registration());
        assert!(!app.submitting);
        let status = app.status_message.expect("failure should set a status");
        assert!(status.contains("Une inscription existe déjà avec cet email"));
        assert!(status.starts_with("❌"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_transport_failure_shows_generic_message() {
        let source = ScriptedSource::default();
        source
            .contacts
            .lock()
            .unwrap()
            .push(Err(ApiError::InvalidResponse(
                "connexion refusée".to_string(),
            )));

        let mut app = app_with(source);
        app.open_contact_form();
        app.contact_draft.name = "Alex".to_string();

        app.submit_contact().await;

        assert!(app.show_contact_form);
        assert_eq!(app.contact_draft.name, "Alex");
        assert_eq!(
            app.status_message.as_deref(),
            Some("❌ Erreur de connexion. Veuillez réessayer.")
        );
    }

    #[tokio::test]
    async fn test_forms_open_independently() {
        let mut app = app_with(ScriptedSource::default());
        app.open_registration_form();
        app.open_contact_form();

        assert!(app.show_registration_form);
        assert!(app.show_contact_form);
        assert!(app.overlay_open());

        app.cancel_contact_form();
        assert!(app.show_registration_form);
        assert!(!app.show_contact_form);
    }

    #[tokio::test(start_paused = true)]
    async fn test_status_message_expires_after_display_window() {
        let mut app = app_with(ScriptedSource::default());
        app.set_status("✅ Message envoyé avec succès!");

        tokio::time::sleep(Duration::from_secs(4)).await;
        app.drain_events();
        assert!(app.status_message.is_some());

        tokio::time::sleep(Duration::from_secs(2)).await;
        app.drain_events();
        assert!(app.status_message.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_newer_status_survives_older_timer() {
        let mut app = app_with(ScriptedSource::default());
        app.set_status("premier");

        tokio::time::sleep(Duration::from_secs(3)).await;
        app.set_status("second");

        // The first timer fires at t=5s; the second message must survive it.
        tokio::time::sleep(Duration::from_secs(3)).await;
        app.drain_events();
        assert_eq!(app.status_message.as_deref(), Some("second"));

        tokio::time::sleep(Duration::from_secs(3)).await;
        app.drain_events();
        assert!(app.status_message.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_refresh_keeps_previous_data() {
        let source = ScriptedSource::default();
        source
            .events
            .lock()
            .unwrap()
            .push(Err(ApiError::InvalidResponse("backend down".to_string())));

        let mut app = app_with(source);
        app.events = vec![sample_event("1", "Entraînement débutants")];

        app.refresh_events();
        settle(&mut app).await;

        assert_eq!(app.events.len(), 1);
        assert_eq!(app.events[0].title, "Entraînement débutants");
    }

    #[tokio::test(start_paused = true)]
    async fn test_refresh_all_populates_data() {
        let source = ScriptedSource::default();
        source.stats.lock().unwrap().push(Ok(ClubStats {
            total_registrations: 23,
            active_members: 23,
            upcoming_events: 4,
            total_photos: 15,
        }));
        source
            .events
            .lock()
            .unwrap()
            .push(Ok(vec![sample_event("1", "Entraînement débutants")]));

        let mut app = app_with(source);
        app.refresh_all();
        settle(&mut app).await;

        assert_eq!(app.stats.active_members, 23);
        assert_eq!(app.events.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_event_selection_clamps_when_list_shrinks() {
        let mut app = app_with(ScriptedSource::default());
        app.apply_event(AppEvent::Events(vec![
            sample_event("1", "A"),
            sample_event("2", "B"),
            sample_event("3", "C"),
        ]));

        app.select_next_event();
        app.select_next_event();
        assert_eq!(app.event_selection, 2);
        app.select_next_event();
        assert_eq!(app.event_selection, 2);

        app.apply_event(AppEvent::Events(vec![sample_event("1", "A")]));
        assert_eq!(app.event_selection, 0);
        assert_eq!(app.selected_event().map(|e| e.title.as_str()), Some("A"));

        app.apply_event(AppEvent::Events(Vec::new()));
        assert!(app.selected_event().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_event_signup_targets_selected_event() {
        let source = ScriptedSource::default();
        source.signups.lock().unwrap().push(Ok(
            "Inscription à \"Tournoi Régional d'Hiver\" confirmée!".to_string(),
        ));

        let mut app = app_with(source);
        app.events = vec![
            sample_event("1", "Entraînement débutants"),
            sample_event("2", "Tournoi Régional d'Hiver"),
        ];
        app.select_next_event();
        app.open_event_signup();

        let form = app.signup_form.as_mut().expect("overlay should be open");
        assert_eq!(form.signup.event_title, "Tournoi Régional d'Hiver");
        form.signup.name = "Jamie Fox".to_string();
        form.signup.email = "jamie@example.com".to_string();
        form.signup.phone = "0601020304".to_string();

        app.submit_event_signup().await;

        assert!(app.signup_form.is_none());
        let status = app.status_message.expect("success should set a status");
        assert!(status.starts_with("✅"));
        assert!(status.contains("Tournoi Régional d'Hiver"));
    }

    #[tokio::test]
    async fn test_signup_does_not_open_without_events() {
        let mut app = app_with(ScriptedSource::default());
        app.open_event_signup();
        assert!(app.signup_form.is_none());
    }

    #[tokio::test]
    async fn test_cancel_discards_typed_draft() {
        let mut app = app_with(ScriptedSource::default());
        app.open_registration_form();
        app.registration_draft.first_name = "Jamie".to_string();

        app.cancel_registration_form();
        assert!(!app.show_registration_form);
        assert_eq!(app.registration_draft, RegistrationDraft::default());
    }
}

//! Keyboard input handling for the TUI.
//!
//! Translates key events into controller calls. Open overlays capture
//! input first, topmost overlay first; returns `true` when the app
//! should quit.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use crate::app::{App, ContactField, RegistrationField, Section, SignupField};

pub async fn handle_input(app: &mut App, key: KeyEvent) -> Result<bool> {
    // Overlays capture input in render stacking order, topmost first.
    if app.signup_form.is_some() {
        handle_signup_input(app, key).await?;
        return Ok(false);
    }
    if app.show_contact_form {
        handle_contact_input(app, key).await?;
        return Ok(false);
    }
    if app.show_registration_form {
        handle_registration_input(app, key).await?;
        return Ok(false);
    }

    match key.code {
        KeyCode::Char('q') => return Ok(true),

        KeyCode::Char('1') => app.select_section(Section::Accueil),
        KeyCode::Char('2') => app.select_section(Section::Club),
        KeyCode::Char('3') => app.select_section(Section::RollerDerby),
        KeyCode::Char('4') => app.select_section(Section::Evenements),
        KeyCode::Char('5') => app.select_section(Section::Galerie),
        KeyCode::Char('6') => app.select_section(Section::Contact),
        KeyCode::Tab => app.next_section(),
        KeyCode::BackTab => app.prev_section(),

        KeyCode::Char('i') => app.open_registration_form(),
        KeyCode::Char('c') => app.open_contact_form(),
        KeyCode::Char('r') => app.refresh_all(),

        _ => handle_section_input(app, key),
    }

    Ok(false)
}

fn handle_section_input(app: &mut App, key: KeyEvent) {
    match app.section {
        Section::Evenements => match key.code {
            KeyCode::Up => app.select_prev_event(),
            KeyCode::Down => app.select_next_event(),
            KeyCode::Enter => app.open_event_signup(),
            _ => {}
        },
        Section::Galerie => match key.code {
            KeyCode::Left => app.prev_gallery_filter(),
            KeyCode::Right => app.next_gallery_filter(),
            _ => {}
        },
        _ => {}
    }
}

const MISSING_FIELDS_MESSAGE: &str = "❌ Veuillez remplir tous les champs obligatoires.";

async fn handle_registration_input(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Esc => app.cancel_registration_form(),
        KeyCode::Tab | KeyCode::Down => {
            app.registration_focus = app.registration_focus.next();
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.registration_focus = app.registration_focus.prev();
        }
        KeyCode::Left if app.registration_focus == RegistrationField::Level => {
            app.registration_draft.level = app.registration_draft.level.prev();
        }
        KeyCode::Right if app.registration_focus == RegistrationField::Level => {
            app.registration_draft.level = app.registration_draft.level.next();
        }
        KeyCode::Enter => {
            if app.registration_focus == RegistrationField::Submit {
                if !app.registration_draft.is_complete() {
                    app.set_status(MISSING_FIELDS_MESSAGE);
                } else if !app.submitting {
                    app.submit_registration().await;
                }
            } else {
                app.registration_focus = app.registration_focus.next();
            }
        }
        KeyCode::Backspace => {
            if let Some(field) = registration_field_mut(app) {
                field.pop();
            }
        }
        KeyCode::Char(c) => {
            // The age field only accepts digits.
            if app.registration_focus == RegistrationField::Age && !c.is_ascii_digit() {
                return Ok(());
            }
            if let Some(field) = registration_field_mut(app) {
                field.push(c);
            }
        }
        _ => {}
    }
    Ok(())
}

fn registration_field_mut(app: &mut App) -> Option<&mut String> {
    let draft = &mut app.registration_draft;
    match app.registration_focus {
        RegistrationField::FirstName => Some(&mut draft.first_name),
        RegistrationField::LastName => Some(&mut draft.last_name),
        RegistrationField::Email => Some(&mut draft.email),
        RegistrationField::Phone => Some(&mut draft.phone),
        RegistrationField::Age => Some(&mut draft.age),
        RegistrationField::Note => Some(&mut draft.note),
        RegistrationField::Level | RegistrationField::Submit => None,
    }
}

async fn handle_contact_input(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Esc => app.cancel_contact_form(),
        KeyCode::Tab | KeyCode::Down => {
            app.contact_focus = app.contact_focus.next();
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.contact_focus = app.contact_focus.prev();
        }
        KeyCode::Enter => {
            if app.contact_focus == ContactField::Submit {
                if !app.contact_draft.is_complete() {
                    app.set_status(MISSING_FIELDS_MESSAGE);
                } else if !app.submitting {
                    app.submit_contact().await;
                }
            } else {
                app.contact_focus = app.contact_focus.next();
            }
        }
        KeyCode::Backspace => {
            if let Some(field) = contact_field_mut(app) {
                field.pop();
            }
        }
        KeyCode::Char(c) => {
            if let Some(field) = contact_field_mut(app) {
                field.push(c);
            }
        }
        _ => {}
    }
    Ok(())
}

fn contact_field_mut(app: &mut App) -> Option<&mut String> {
    let draft = &mut app.contact_draft;
    match app.contact_focus {
        ContactField::Name => Some(&mut draft.name),
        ContactField::Email => Some(&mut draft.email),
        ContactField::Subject => Some(&mut draft.subject),
        ContactField::Message => Some(&mut draft.message),
        ContactField::Submit => None,
    }
}

async fn handle_signup_input(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Esc => app.cancel_event_signup(),
        KeyCode::Tab | KeyCode::Down => {
            if let Some(form) = app.signup_form.as_mut() {
                form.focus = form.focus.next();
            }
        }
        KeyCode::BackTab | KeyCode::Up => {
            if let Some(form) = app.signup_form.as_mut() {
                form.focus = form.focus.prev();
            }
        }
        KeyCode::Enter => {
            let (on_submit, complete) = match app.signup_form.as_ref() {
                Some(form) => (form.focus == SignupField::Submit, form.signup.is_complete()),
                None => return Ok(()),
            };
            if on_submit {
                if !complete {
                    app.set_status(MISSING_FIELDS_MESSAGE);
                } else if !app.submitting {
                    app.submit_event_signup().await;
                }
            } else if let Some(form) = app.signup_form.as_mut() {
                form.focus = form.focus.next();
            }
        }
        KeyCode::Backspace => {
            if let Some(field) = signup_field_mut(app) {
                field.pop();
            }
        }
        KeyCode::Char(c) => {
            if let Some(field) = signup_field_mut(app) {
                field.push(c);
            }
        }
        _ => {}
    }
    Ok(())
}

fn signup_field_mut(app: &mut App) -> Option<&mut String> {
    let form = app.signup_form.as_mut()?;
    match form.focus {
        SignupField::Name => Some(&mut form.signup.name),
        SignupField::Email => Some(&mut form.signup.email),
        SignupField::Phone => Some(&mut form.signup.phone),
        SignupField::Submit => None,
    }
}

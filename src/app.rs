//! Application state and core logic

use crate::config::CaptureConfig;
use crate::ingest::{IngestClient, LeadIngest};
use crate::platform;
use crate::state::{FormPhase, LeadForm, LeadStore};
use anyhow::Result;
use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// The lead form controller
    pub form: LeadForm,
    /// Leads accepted during this session
    pub store: LeadStore,
    /// Client for the ingestion endpoint
    client: Box<dyn LeadIngest>,
    /// Whether the app should quit
    quit: bool,
    /// Transient message shown in the status bar
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App instance against the real ingestion endpoint
    pub fn new() -> Result<Self> {
        let config = CaptureConfig::load().unwrap_or_default();
        let client = IngestClient::new(&config)?;
        Ok(Self::with_client(Box::new(client)))
    }

    /// Create an App with a specific ingestion client (used by tests)
    pub fn with_client(client: Box<dyn LeadIngest>) -> Self {
        Self {
            form: LeadForm::new(),
            store: LeadStore::new(),
            client,
            quit: false,
            status_message: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event according to the current form phase
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match self.form.phase() {
            FormPhase::Editing => self.handle_editing_key(key).await,
            // The POST is awaited inline, so no key arrives mid-flight;
            // if one ever did, ignoring it keeps the guard intact.
            FormPhase::Submitting => {}
            FormPhase::Submitted => self.handle_submitted_key(key),
        }
        Ok(())
    }

    /// Handle keys while the form is being filled in
    async fn handle_editing_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.form.prev_field(),
            KeyCode::Right => self.form.select_next(),
            KeyCode::Left => self.form.select_prev(),
            KeyCode::Enter if self.form.is_submit_row_active() => self.submit_lead().await,
            KeyCode::Enter => self.form.next_field(),
            // Submit from anywhere (Ctrl+S or Cmd+S)
            KeyCode::Char('s') if key.modifiers.contains(platform::SUBMIT_MODIFIER) => {
                self.submit_lead().await;
            }
            KeyCode::Esc => {
                self.form.reset();
                self.status_message = Some("Form cleared".to_string());
            }
            KeyCode::Backspace => self.form.pop_char(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.form.push_char(c);
            }
            _ => {}
        }
    }

    /// Handle keys on the success screen
    fn handle_submitted_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char('n') => {
                self.form.reset();
                self.status_message = Some("Ready for the next lead".to_string());
            }
            KeyCode::Esc | KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    /// Validate the draft and, if it is clean, send it to the ingestion
    /// endpoint. A validation failure surfaces field errors without
    /// touching the network; an endpoint failure keeps the draft for retry.
    async fn submit_lead(&mut self) {
        let Some(pending) = self.form.begin_submit() else {
            return;
        };

        let result = self
            .client
            .submit_lead(&pending.name, &pending.email, pending.industry)
            .await;

        match result {
            Ok(()) => {
                let lead = self.form.accept(pending, Utc::now());
                self.store.add(lead);
                self.status_message = None;
            }
            Err(err) => {
                tracing::error!("Lead submission failed: {err}");
                self.form.reject(err.to_string());
                self.status_message = Some("Submission failed, your input was kept".to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::{IngestError, MockLeadIngest};
    use crate::state::{FieldValue, Industry, LeadField};
    use mockall::predicate::eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn fill_form(app: &mut App) {
        app.form
            .set_field(LeadField::Name, FieldValue::Text("Ada".to_string()));
        app.form.set_field(
            LeadField::Email,
            FieldValue::Text("ada@example.com".to_string()),
        );
        app.form.set_field(
            LeadField::Industry,
            FieldValue::Select(Some(Industry::Technology)),
        );
    }

    fn app_with_accepting_endpoint() -> App {
        let mut mock = MockLeadIngest::new();
        mock.expect_submit_lead()
            .times(1)
            .returning(|_, _, _| Ok(()));
        App::with_client(Box::new(mock))
    }

    #[tokio::test]
    async fn test_successful_submit_records_lead_and_shows_success() {
        let mut mock = MockLeadIngest::new();
        mock.expect_submit_lead()
            .with(eq("Ada"), eq("ada@example.com"), eq(Industry::Technology))
            .times(1)
            .returning(|_, _, _| Ok(()));

        let mut app = App::with_client(Box::new(mock));
        fill_form(&mut app);

        app.handle_key(KeyEvent::new(
            KeyCode::Char('s'),
            platform::SUBMIT_MODIFIER,
        ))
        .await
        .unwrap();

        assert_eq!(app.form.phase(), FormPhase::Submitted);
        assert_eq!(app.store.count(), 1);
        assert_eq!(app.store.leads()[0].name, "Ada");
        assert_eq!(app.form.name.as_text(), ""); // draft cleared
    }

    #[tokio::test]
    async fn test_enter_on_submit_row_submits() {
        let mut app = app_with_accepting_endpoint();
        fill_form(&mut app);

        // Tab to the submit row, then Enter
        for _ in 0..3 {
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
        }
        assert!(app.form.is_submit_row_active());
        app.handle_key(key(KeyCode::Enter)).await.unwrap();

        assert_eq!(app.form.phase(), FormPhase::Submitted);
        assert_eq!(app.store.count(), 1);
    }

    #[tokio::test]
    async fn test_enter_on_a_field_moves_focus_instead_of_submitting() {
        let mock = MockLeadIngest::new(); // no calls expected
        let mut app = App::with_client(Box::new(mock));
        fill_form(&mut app);

        app.handle_key(key(KeyCode::Enter)).await.unwrap();
        assert_eq!(app.form.active_field_index, 1);
        assert_eq!(app.form.phase(), FormPhase::Editing);
    }

    #[tokio::test]
    async fn test_invalid_draft_never_touches_the_endpoint() {
        let mock = MockLeadIngest::new(); // no calls expected
        let mut app = App::with_client(Box::new(mock));

        app.handle_key(KeyEvent::new(
            KeyCode::Char('s'),
            platform::SUBMIT_MODIFIER,
        ))
        .await
        .unwrap();

        assert_eq!(app.form.phase(), FormPhase::Editing);
        assert_eq!(app.form.errors().len(), 3);
        assert_eq!(app.store.count(), 0);
    }

    #[tokio::test]
    async fn test_endpoint_failure_keeps_draft_and_surfaces_message() {
        let mut mock = MockLeadIngest::new();
        mock.expect_submit_lead()
            .times(1)
            .returning(|_, _, _| Err(IngestError::Http { status: 500 }));

        let mut app = App::with_client(Box::new(mock));
        fill_form(&mut app);

        app.handle_key(KeyEvent::new(
            KeyCode::Char('s'),
            platform::SUBMIT_MODIFIER,
        ))
        .await
        .unwrap();

        assert_eq!(app.form.phase(), FormPhase::Editing);
        assert_eq!(app.form.name.as_text(), "Ada");
        assert!(app.form.submit_error().is_some());
        assert_eq!(app.store.count(), 0);
        assert!(app.status_message.is_some());
    }

    #[tokio::test]
    async fn test_retry_after_failure_can_succeed() {
        let mut mock = MockLeadIngest::new();
        let mut attempts = 0;
        mock.expect_submit_lead()
            .times(2)
            .returning(move |_, _, _| {
                attempts += 1;
                if attempts == 1 {
                    Err(IngestError::Http { status: 502 })
                } else {
                    Ok(())
                }
            });

        let mut app = App::with_client(Box::new(mock));
        fill_form(&mut app);

        let submit = KeyEvent::new(KeyCode::Char('s'), platform::SUBMIT_MODIFIER);
        app.handle_key(submit).await.unwrap();
        assert_eq!(app.form.phase(), FormPhase::Editing);

        app.handle_key(submit).await.unwrap();
        assert_eq!(app.form.phase(), FormPhase::Submitted);
        assert_eq!(app.store.count(), 1);
    }

    #[tokio::test]
    async fn test_submit_another_resets_form_but_keeps_store() {
        let mut app = app_with_accepting_endpoint();
        fill_form(&mut app);

        let submit = KeyEvent::new(KeyCode::Char('s'), platform::SUBMIT_MODIFIER);
        app.handle_key(submit).await.unwrap();
        assert_eq!(app.store.count(), 1);

        app.handle_key(key(KeyCode::Enter)).await.unwrap();
        assert_eq!(app.form.phase(), FormPhase::Editing);
        assert!(app.form.errors().is_empty());
        assert_eq!(app.store.count(), 1); // session count survives the reset
    }

    #[tokio::test]
    async fn test_quit_from_success_screen() {
        let mut app = app_with_accepting_endpoint();
        fill_form(&mut app);

        app.handle_key(KeyEvent::new(
            KeyCode::Char('s'),
            platform::SUBMIT_MODIFIER,
        ))
        .await
        .unwrap();
        assert!(!app.should_quit());

        app.handle_key(key(KeyCode::Char('q'))).await.unwrap();
        assert!(app.should_quit());
    }

    #[tokio::test]
    async fn test_typing_flows_into_the_focused_field() {
        let mock = MockLeadIngest::new();
        let mut app = App::with_client(Box::new(mock));

        for c in "Ada".chars() {
            app.handle_key(key(KeyCode::Char(c))).await.unwrap();
        }
        app.handle_key(key(KeyCode::Tab)).await.unwrap();
        for c in "ada@example.com".chars() {
            app.handle_key(key(KeyCode::Char(c))).await.unwrap();
        }
        app.handle_key(key(KeyCode::Tab)).await.unwrap();
        app.handle_key(key(KeyCode::Right)).await.unwrap();

        let draft = app.form.draft();
        assert_eq!(draft.name, "Ada");
        assert_eq!(draft.email, "ada@example.com");
        assert_eq!(draft.industry, Some(Industry::Technology));
    }

    #[tokio::test]
    async fn test_escape_clears_the_form() {
        let mock = MockLeadIngest::new();
        let mut app = App::with_client(Box::new(mock));
        fill_form(&mut app);

        app.handle_key(key(KeyCode::Esc)).await.unwrap();
        assert_eq!(app.form.draft().name, "");
        assert!(app.status_message.is_some());
    }
}

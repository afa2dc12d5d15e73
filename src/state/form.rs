//! Lead form state machine and field editing

use super::lead::{Industry, Lead, LeadDraft, LeadField, PendingLead};
use super::validate::{validate, ValidationError};
use chrono::{DateTime, Utc};

/// Type-safe field values
#[derive(Debug, Clone)]
pub enum FieldValue {
    Text(String),
    Select(Option<Industry>),
}

/// A single form field with its configuration and current value
#[derive(Debug, Clone)]
pub struct FormField {
    pub field: LeadField,
    pub placeholder: String,
    pub value: FieldValue,
}

impl FormField {
    /// Create a new text field
    pub fn text(field: LeadField, placeholder: &str) -> Self {
        Self {
            field,
            placeholder: placeholder.to_string(),
            value: FieldValue::Text(String::new()),
        }
    }

    /// Create a new select field with nothing chosen
    pub fn select(field: LeadField, placeholder: &str) -> Self {
        Self {
            field,
            placeholder: placeholder.to_string(),
            value: FieldValue::Select(None),
        }
    }

    pub fn label(&self) -> &'static str {
        self.field.label()
    }

    /// Get the text value (returns empty string for select fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Select(_) => "",
        }
    }

    /// Get the chosen industry (returns None for text fields)
    pub fn selected(&self) -> Option<Industry> {
        match &self.value {
            FieldValue::Select(choice) => *choice,
            FieldValue::Text(_) => None,
        }
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        if let FieldValue::Text(s) = &mut self.value {
            s.push(c);
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        if let FieldValue::Text(s) = &mut self.value {
            s.pop();
        }
    }

    /// Advance a select field to the next option
    pub fn select_next(&mut self) {
        if let FieldValue::Select(choice) = &mut self.value {
            *choice = Some(choice.map_or(Industry::ALL[0], |c| c.next()));
        }
    }

    /// Move a select field to the previous option
    pub fn select_prev(&mut self) {
        if let FieldValue::Select(choice) = &mut self.value {
            *choice = Some(choice.map_or(Industry::ALL[Industry::ALL.len() - 1], |c| c.prev()));
        }
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Select(choice) => *choice = None,
        }
    }

    pub fn is_empty(&self) -> bool {
        match &self.value {
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::Select(choice) => choice.is_none(),
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Select(choice) => choice.map(|c| c.label().to_string()).unwrap_or_default(),
        }
    }
}

/// Submission phase state machine.
///
/// Editing -> Submitting via a clean validation pass, Submitting ->
/// Submitted on endpoint acceptance, Submitting -> Editing on failure,
/// Submitted -> Editing via reset. No other transitions exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Editing,
    Submitting,
    Submitted,
}

/// Focus slot index of the submit button row
pub const SUBMIT_ROW: usize = 3;

const FIELD_COUNT: usize = 4; // name, email, industry, submit row

/// The lead-capture form controller.
///
/// Exclusively owns the draft, the active validation errors, and the
/// submission phase for one form instance.
#[derive(Debug, Clone)]
pub struct LeadForm {
    pub name: FormField,
    pub email: FormField,
    pub industry: FormField,
    pub active_field_index: usize,
    errors: Vec<ValidationError>,
    phase: FormPhase,
    submit_error: Option<String>,
}

impl LeadForm {
    pub fn new() -> Self {
        Self {
            name: FormField::text(LeadField::Name, "Your name"),
            email: FormField::text(LeadField::Email, "your@email.com"),
            industry: FormField::select(LeadField::Industry, "Select your industry"),
            active_field_index: 0,
            errors: Vec::new(),
            phase: FormPhase::default(),
            submit_error: None,
        }
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    #[allow(dead_code)]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// The active error for a field, if any
    pub fn error_for(&self, field: LeadField) -> Option<&ValidationError> {
        self.errors.iter().find(|e| e.field == field)
    }

    /// Message from the last rejected submission, cleared on the next attempt
    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    /// Move focus to the next slot (wraps around, submit row included)
    pub fn next_field(&mut self) {
        self.active_field_index = (self.active_field_index + 1) % FIELD_COUNT;
    }

    /// Move focus to the previous slot (wraps around)
    pub fn prev_field(&mut self) {
        if self.active_field_index == 0 {
            self.active_field_index = FIELD_COUNT - 1;
        } else {
            self.active_field_index -= 1;
        }
    }

    /// Returns true if the submit button row is currently focused
    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == SUBMIT_ROW
    }

    /// The field under focus, None when the submit row is focused
    pub fn active_field(&self) -> Option<&FormField> {
        match self.active_field_index {
            0 => Some(&self.name),
            1 => Some(&self.email),
            2 => Some(&self.industry),
            _ => None,
        }
    }

    fn active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_field_index {
            0 => Some(&mut self.name),
            1 => Some(&mut self.email),
            2 => Some(&mut self.industry),
            _ => None,
        }
    }

    /// Overwrite a field wholesale, dropping any error held against it.
    /// Errors for other fields are preserved; no validation runs on edits.
    #[allow(dead_code)]
    pub fn set_field(&mut self, field: LeadField, value: FieldValue) {
        if self.phase != FormPhase::Editing {
            return;
        }
        match field {
            LeadField::Name => self.name.value = value,
            LeadField::Email => self.email.value = value,
            LeadField::Industry => self.industry.value = value,
        }
        self.clear_error(field);
    }

    /// Append a character to the focused text field
    pub fn push_char(&mut self, c: char) {
        self.edit_active(|f| f.push_char(c));
    }

    /// Delete the last character of the focused text field
    pub fn pop_char(&mut self) {
        self.edit_active(FormField::pop_char);
    }

    /// Cycle the focused select field forward
    pub fn select_next(&mut self) {
        self.edit_active(FormField::select_next);
    }

    /// Cycle the focused select field backward
    pub fn select_prev(&mut self) {
        self.edit_active(FormField::select_prev);
    }

    fn edit_active(&mut self, edit: impl FnOnce(&mut FormField)) {
        if self.phase != FormPhase::Editing {
            return;
        }
        if let Some(field) = self.active_field_mut() {
            let touched = field.field;
            edit(field);
            self.clear_error(touched);
        }
    }

    fn clear_error(&mut self, field: LeadField) {
        self.errors.retain(|e| e.field != field);
    }

    /// Snapshot of the current draft values
    pub fn draft(&self) -> LeadDraft {
        LeadDraft {
            name: self.name.as_text().to_string(),
            email: self.email.as_text().to_string(),
            industry: self.industry.selected(),
        }
    }

    /// Validate the draft and, if clean, enter Submitting and yield the
    /// values to send. On validation failure the error list is replaced,
    /// the draft is untouched, and the network must not be contacted.
    ///
    /// A no-op outside Editing, so a repeated trigger cannot start a
    /// second submission while one is in flight.
    pub fn begin_submit(&mut self) -> Option<PendingLead> {
        if self.phase != FormPhase::Editing {
            return None;
        }

        let draft = self.draft();
        let errors = validate(&draft);
        if !errors.is_empty() {
            self.errors = errors;
            return None;
        }

        // A clean validation pass guarantees an industry is chosen
        let industry = draft.industry?;
        self.errors.clear();
        self.submit_error = None;
        self.phase = FormPhase::Submitting;
        Some(PendingLead {
            name: draft.name,
            email: draft.email,
            industry,
        })
    }

    /// Record endpoint acceptance: stamp the submission time, clear the
    /// draft, and move to Submitted. Returns the lead for the session store.
    pub fn accept(&mut self, pending: PendingLead, now: DateTime<Utc>) -> Lead {
        self.name.clear();
        self.email.clear();
        self.industry.clear();
        self.errors.clear();
        self.submit_error = None;
        self.active_field_index = 0;
        self.phase = FormPhase::Submitted;

        Lead {
            name: pending.name,
            email: pending.email,
            industry: pending.industry,
            submitted_at: now,
        }
    }

    /// Record endpoint rejection: back to Editing with the draft intact so
    /// the user can retry without losing input.
    pub fn reject(&mut self, message: impl Into<String>) {
        if self.phase == FormPhase::Submitting {
            self.phase = FormPhase::Editing;
            self.submit_error = Some(message.into());
        }
    }

    /// Unconditionally restore the initial empty state, from any phase
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for LeadForm {
    fn default() -> Self {
        Self::new()
    }
}

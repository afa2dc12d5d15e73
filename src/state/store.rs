//! In-session registry of accepted leads

use super::lead::Lead;

/// Append-only record of the leads accepted during this session.
///
/// Owned by the application and passed explicitly into the submission flow;
/// nothing here persists across restarts. Only used to tell the user which
/// number they are this session.
#[derive(Debug, Default)]
pub struct LeadStore {
    leads: Vec<Lead>,
}

impl LeadStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an accepted lead
    pub fn add(&mut self, lead: Lead) {
        self.leads.push(lead);
    }

    /// Number of leads accepted so far this session
    pub fn count(&self) -> usize {
        self.leads.len()
    }

    #[allow(dead_code)]
    pub fn leads(&self) -> &[Lead] {
        &self.leads
    }
}

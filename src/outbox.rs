//! The outbox collects contact-form submissions for the session.
//!
//! This module defines what work in the contact form manifests as once the
//! TUI exits: accepted submissions accumulate here and are printed as JSON on
//! quit, ready to pipe into whatever relay you actually use. Nothing is sent
//! over the network from inside the page.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone)]
/// One validated message from the contact form.
pub struct Submission {
    /// Sender's name, required.
    pub name: String,
    /// Sender's email address, required and shape-checked.
    pub email: String,
    /// Message body, required.
    pub message: String,
}

impl Submission {
    /// Check the submission against the form's acceptance rules.
    ///
    /// Name and message must be nonempty; the email must be nonempty and
    /// look like an address (an `@` and a dot).
    ///
    /// # Errors
    ///
    /// Returns the first failing rule's message, worded for the help bar.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name is required".to_string());
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err("Email is required".to_string());
        }
        if !email.contains('@') || !email.contains('.') {
            return Err("Invalid email format".to_string());
        }
        if self.message.trim().is_empty() {
            return Err("Message is required".to_string());
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Clone, Default)]
/// Serialisable collection of the session's accepted submissions.
pub struct Outbox {
    /// Submissions in acceptance order.
    pub submissions: Vec<Submission>,
}

impl Outbox {
    /// Append an already-validated submission.
    pub fn record(&mut self, submission: Submission) {
        self.submissions.push(submission);
    }

    #[must_use]
    /// True when no submission was accepted this session.
    pub fn is_empty(&self) -> bool {
        self.submissions.is_empty()
    }
}

#[cfg(test)]
#[path = "tests/outbox.rs"]
mod tests;

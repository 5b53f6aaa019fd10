//! Activity aggregate entity.
//!
//! An Activity is one extracurricular offering together with the ordered list
//! of student emails signed up for it.
//!
//! # Design Decisions
//!
//! - **Emails are opaque**: no format validation, exact string comparison
//! - **Capacity is advisory**: `max_participants` is reported, never enforced

use super::ActivityError;

/// Activity aggregate - an offering and its participant roster.
///
/// # Invariants
///
/// - Each email appears at most once in `participants`
/// - `participants` is in signup order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    name: String,
    description: String,
    schedule: String,
    max_participants: u32,
    participants: Vec<String>,
}

impl Activity {
    /// Create an activity with an empty roster.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    /// Pre-populate participants, skipping repeated emails.
    pub fn with_participants<I, S>(mut self, emails: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for email in emails {
            let email = email.into();
            if !self.is_registered(&email) {
                self.participants.push(email);
            }
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn schedule(&self) -> &str {
        &self.schedule
    }

    pub fn max_participants(&self) -> u32 {
        self.max_participants
    }

    pub fn participants(&self) -> &[String] {
        &self.participants
    }

    pub fn is_registered(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// True once the roster has grown past `max_participants`.
    pub fn is_over_capacity(&self) -> bool {
        self.participants.len() > self.max_participants as usize
    }

    /// Append `email` to the roster.
    ///
    /// # Errors
    ///
    /// - `AlreadyRegistered` if the email is already a participant
    pub fn sign_up(&mut self, email: &str) -> Result<(), ActivityError> {
        if self.is_registered(email) {
            return Err(ActivityError::already_registered(&self.name, email));
        }
        self.participants.push(email.to_string());
        Ok(())
    }

    /// Remove `email` from the roster, keeping the others in order.
    ///
    /// # Errors
    ///
    /// - `NotRegistered` if the email is not a participant
    pub fn unregister(&mut self, email: &str) -> Result<(), ActivityError> {
        let position = self
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or_else(|| ActivityError::not_registered(&self.name, email))?;
        self.participants.remove(position);
        Ok(())
    }
}

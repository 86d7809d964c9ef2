//! Newsletter sign-up: submit shows a thank-you, which clears itself later.

/// Proof that a reset belongs to a particular submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetTicket {
    pub submission: u64,
    pub delay_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Newsletter {
    email: String,
    submitted: bool,
    submissions: u64,
}

impl Newsletter {
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn submitted(&self) -> bool {
        self.submitted
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// Blank input is ignored. Otherwise returns the reset to schedule.
    pub fn submit(&mut self, reset_after_ms: u64) -> Option<ResetTicket> {
        if self.email.trim().is_empty() {
            return None;
        }
        self.submitted = true;
        self.submissions += 1;
        Some(ResetTicket {
            submission: self.submissions,
            delay_ms: reset_after_ms,
        })
    }

    /// Clear the form, unless a later submission owns the current state.
    pub fn reset(&mut self, ticket: ResetTicket) -> bool {
        if ticket.submission != self.submissions {
            return false;
        }
        self.submitted = false;
        self.email.clear();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_email_is_not_submitted() {
        let mut form = Newsletter::default();
        form.set_email("   ");
        assert_eq!(form.submit(3_000), None);
        assert!(!form.submitted());
    }

    #[test]
    fn submit_then_reset_clears_the_form() {
        let mut form = Newsletter::default();
        form.set_email("sara@example.com");
        let ticket = form.submit(3_000).unwrap();
        assert!(form.submitted());
        assert_eq!(ticket.delay_ms, 3_000);

        assert!(form.reset(ticket));
        assert!(!form.submitted());
        assert_eq!(form.email(), "");
    }

    #[test]
    fn older_reset_does_not_clear_a_newer_submission() {
        let mut form = Newsletter::default();
        form.set_email("a@example.com");
        let first = form.submit(3_000).unwrap();
        let second = form.submit(3_000).unwrap();

        assert!(!form.reset(first));
        assert!(form.submitted());
        assert!(form.reset(second));
    }
}

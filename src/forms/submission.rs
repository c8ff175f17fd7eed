//! Submit button state for a form dialog

use std::time::{Duration, Instant};

/// How long a success/error banner stays before the form goes idle again
pub const RESET_DELAY: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success(String),
    Error(String),
}

impl SubmitStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmitStatus::Submitting)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            SubmitStatus::Success(msg) | SubmitStatus::Error(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Tracks one form's submit lifecycle
///
/// `begin` refuses a second submission while one is in flight, so a
/// double click can never produce two requests.
#[derive(Debug, Clone, Default)]
pub struct SubmissionTracker {
    status: SubmitStatus,
    settled_at: Option<Instant>,
}

impl SubmissionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    /// Enter `Submitting`; returns false if already submitting
    pub fn begin(&mut self) -> bool {
        if self.status.is_submitting() {
            return false;
        }
        self.status = SubmitStatus::Submitting;
        self.settled_at = None;
        true
    }

    pub fn succeed(&mut self, message: impl Into<String>, now: Instant) {
        self.status = SubmitStatus::Success(message.into());
        self.settled_at = Some(now);
    }

    pub fn fail(&mut self, message: impl Into<String>, now: Instant) {
        self.status = SubmitStatus::Error(message.into());
        self.settled_at = Some(now);
    }

    /// Return to `Idle` once [`RESET_DELAY`] has passed since settling
    pub fn tick(&mut self, now: Instant) {
        if let Some(settled) = self.settled_at {
            if now.saturating_duration_since(settled) >= RESET_DELAY {
                self.status = SubmitStatus::Idle;
                self.settled_at = None;
            }
        }
    }

    pub fn reset(&mut self) {
        self.status = SubmitStatus::Idle;
        self.settled_at = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_blocks_double_submit() {
        let mut tracker = SubmissionTracker::new();
        assert!(tracker.begin());
        assert!(!tracker.begin());
        assert!(tracker.status().is_submitting());
    }

    #[test]
    fn test_success_resets_after_delay() {
        let start = Instant::now();
        let mut tracker = SubmissionTracker::new();
        tracker.begin();
        tracker.succeed("문의가 등록되었습니다", start);

        tracker.tick(start + Duration::from_secs(2));
        assert_eq!(tracker.status().message(), Some("문의가 등록되었습니다"));

        tracker.tick(start + RESET_DELAY);
        assert_eq!(tracker.status(), &SubmitStatus::Idle);
    }

    #[test]
    fn test_error_then_retry() {
        let start = Instant::now();
        let mut tracker = SubmissionTracker::new();
        tracker.begin();
        tracker.fail("서버 오류", start);
        assert!(matches!(tracker.status(), SubmitStatus::Error(_)));

        assert!(tracker.begin());
        tracker.tick(start + Duration::from_secs(10));
        assert!(tracker.status().is_submitting());
    }
}

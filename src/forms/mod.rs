//! Form drafts, validation and submission status
//!
//! Every dialog on the site is a controlled form: local field state, a
//! synchronous required-field check, then a single network call. The
//! drafts here are the request bodies; [`Validate`] is the check that
//! must pass before any request is made.

mod drafts;
mod submission;

pub use drafts::{
    EnrollmentRequest, InquiryDraft, LessonInquiryDraft, LoginForm, OutreachInquiryDraft,
    OutreachInquiryPatch, ReviewDraft, SignupRequest,
};
pub use submission::{SubmissionTracker, SubmitStatus, RESET_DELAY};

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use thiserror::Error;

/// Per-field validation messages
#[derive(Error, Debug, Clone, Default, PartialEq, Eq)]
#[error("입력값을 확인해주세요: {}", summary(.fields))]
pub struct ValidationErrors {
    fields: BTreeMap<String, String>,
}

fn summary(fields: &BTreeMap<String, String>) -> String {
    fields
        .iter()
        .map(|(field, message)| format!("{} ({})", message, field))
        .collect::<Vec<_>>()
        .join(", ")
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message; the first message for a field wins
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.fields.entry(field.into()).or_insert_with(|| message.into());
    }

    /// Record `message` when `value` is blank after trimming
    pub fn require(&mut self, field: &str, value: &str, message: &str) {
        if value.trim().is_empty() {
            self.add(field, message);
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `Ok(())` when nothing was recorded
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// Client-side check run before submitting a form
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationErrors>;
}

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
const PHONE_PATTERN: &str = r"^[\d\-\s()]+$";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("valid email regex"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PHONE_PATTERN).expect("valid phone regex"));

pub(crate) fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Digits, dashes, spaces and parentheses only
pub(crate) fn is_valid_phone(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

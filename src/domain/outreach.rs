//! Outreach (출강) inquiries
//!
//! Requests for on-site coding instruction at a school or organization.
//! Each request moves through a server-driven status workflow:
//!
//! `접수대기` → `검토중` → `견적발송` → `확정` → `진행중` → `완료`
//!
//! with `취소` reachable from any non-terminal state.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

use super::User;

// ============================================
// Course type
// ============================================

/// Course offered for outreach and classes
///
/// Codes the site does not know are kept verbatim in `Other` so a new
/// backend course never breaks the boards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CourseType {
    AppInventor,
    Arduino,
    RaspberryPi,
    Ai,
    Python,
    Scratch,
    WebDevelopment,
    GameDevelopment,
    DataScience,
    Robotics,
    Other(String),
}

impl CourseType {
    pub fn known() -> &'static [CourseType] {
        &[
            CourseType::AppInventor,
            CourseType::Arduino,
            CourseType::RaspberryPi,
            CourseType::Ai,
            CourseType::Python,
            CourseType::Scratch,
            CourseType::WebDevelopment,
            CourseType::GameDevelopment,
            CourseType::DataScience,
            CourseType::Robotics,
        ]
    }

    pub fn code(&self) -> &str {
        match self {
            CourseType::AppInventor => "app-inventor",
            CourseType::Arduino => "arduino",
            CourseType::RaspberryPi => "raspberry-pi",
            CourseType::Ai => "ai",
            CourseType::Python => "python",
            CourseType::Scratch => "scratch",
            CourseType::WebDevelopment => "web-development",
            CourseType::GameDevelopment => "game-development",
            CourseType::DataScience => "data-science",
            CourseType::Robotics => "robotics",
            CourseType::Other(code) => code,
        }
    }

    /// Korean course name; unknown codes are shown as-is
    pub fn label(&self) -> &str {
        match self {
            CourseType::AppInventor => "앱 인벤터",
            CourseType::Arduino => "아두이노",
            CourseType::RaspberryPi => "Raspberry Pi",
            CourseType::Ai => "AI 코딩",
            CourseType::Python => "파이썬 코딩",
            CourseType::Scratch => "스크래치",
            CourseType::WebDevelopment => "웹 개발",
            CourseType::GameDevelopment => "게임 개발",
            CourseType::DataScience => "데이터 사이언스",
            CourseType::Robotics => "로보틱스",
            CourseType::Other(code) => code,
        }
    }
}

impl From<String> for CourseType {
    fn from(code: String) -> Self {
        CourseType::known()
            .iter()
            .find(|c| c.code() == code)
            .cloned()
            .unwrap_or(CourseType::Other(code))
    }
}

impl From<CourseType> for String {
    fn from(course: CourseType) -> Self {
        course.code().to_string()
    }
}

impl FromStr for CourseType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let by_label = CourseType::known().iter().find(|c| c.label() == s).cloned();
        Ok(by_label.unwrap_or_else(|| CourseType::from(s.to_string())))
    }
}

impl std::fmt::Display for CourseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

// ============================================
// Status workflow
// ============================================

/// Outreach inquiry status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OutreachStatus {
    #[serde(rename = "접수대기")]
    Received,
    #[serde(rename = "검토중")]
    Reviewing,
    #[serde(rename = "견적발송")]
    QuoteSent,
    #[serde(rename = "확정")]
    Confirmed,
    #[serde(rename = "진행중")]
    InProgress,
    #[serde(rename = "완료")]
    Completed,
    #[serde(rename = "취소")]
    Cancelled,
}

/// Coarse grouping used by the statistics panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusGroup {
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl OutreachStatus {
    pub fn all() -> &'static [OutreachStatus] {
        &[
            OutreachStatus::Received,
            OutreachStatus::Reviewing,
            OutreachStatus::QuoteSent,
            OutreachStatus::Confirmed,
            OutreachStatus::InProgress,
            OutreachStatus::Completed,
            OutreachStatus::Cancelled,
        ]
    }

    /// Wire value and display label (the backend uses the Korean text)
    pub fn label(&self) -> &'static str {
        match self {
            OutreachStatus::Received => "접수대기",
            OutreachStatus::Reviewing => "검토중",
            OutreachStatus::QuoteSent => "견적발송",
            OutreachStatus::Confirmed => "확정",
            OutreachStatus::InProgress => "진행중",
            OutreachStatus::Completed => "완료",
            OutreachStatus::Cancelled => "취소",
        }
    }

    /// Chip color on the board
    pub fn color(&self) -> &'static str {
        match self {
            OutreachStatus::Received => "#ff9800",
            OutreachStatus::Reviewing => "#2196f3",
            OutreachStatus::QuoteSent => "#9c27b0",
            OutreachStatus::Confirmed => "#4caf50",
            OutreachStatus::InProgress => "#00bcd4",
            OutreachStatus::Completed => "#607d8b",
            OutreachStatus::Cancelled => "#f44336",
        }
    }

    /// Material icon name for the chip
    pub fn icon(&self) -> &'static str {
        match self {
            OutreachStatus::Received => "schedule",
            OutreachStatus::Reviewing => "search",
            OutreachStatus::QuoteSent => "send",
            OutreachStatus::Confirmed => "check_circle",
            OutreachStatus::InProgress => "play_circle",
            OutreachStatus::Completed => "done_all",
            OutreachStatus::Cancelled => "cancel",
        }
    }

    /// Next step of the forward workflow, `None` at the end
    pub fn next(&self) -> Option<OutreachStatus> {
        match self {
            OutreachStatus::Received => Some(OutreachStatus::Reviewing),
            OutreachStatus::Reviewing => Some(OutreachStatus::QuoteSent),
            OutreachStatus::QuoteSent => Some(OutreachStatus::Confirmed),
            OutreachStatus::Confirmed => Some(OutreachStatus::InProgress),
            OutreachStatus::InProgress => Some(OutreachStatus::Completed),
            OutreachStatus::Completed | OutreachStatus::Cancelled => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, OutreachStatus::Completed | OutreachStatus::Cancelled)
    }

    /// Whether a requested change follows the workflow
    ///
    /// Only the next forward step, or cancellation of an open inquiry.
    pub fn can_transition_to(&self, target: OutreachStatus) -> bool {
        if self.is_terminal() {
            return false;
        }
        target == OutreachStatus::Cancelled || self.next() == Some(target)
    }

    pub fn group(&self) -> StatusGroup {
        match self {
            OutreachStatus::Received => StatusGroup::Pending,
            OutreachStatus::Reviewing
            | OutreachStatus::QuoteSent
            | OutreachStatus::Confirmed
            | OutreachStatus::InProgress => StatusGroup::InProgress,
            OutreachStatus::Completed => StatusGroup::Completed,
            OutreachStatus::Cancelled => StatusGroup::Cancelled,
        }
    }

    fn alias(&self) -> &'static str {
        match self {
            OutreachStatus::Received => "received",
            OutreachStatus::Reviewing => "reviewing",
            OutreachStatus::QuoteSent => "quote-sent",
            OutreachStatus::Confirmed => "confirmed",
            OutreachStatus::InProgress => "in-progress",
            OutreachStatus::Completed => "completed",
            OutreachStatus::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for OutreachStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for OutreachStatus {
    type Err = String;

    /// Accepts the Korean label or an ASCII alias (`quote-sent`, `completed`, ...)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase().replace('_', "-");
        OutreachStatus::all()
            .iter()
            .find(|st| st.label() == needle || st.alias() == needle)
            .copied()
            .ok_or_else(|| format!("unknown status: {}", s))
    }
}

// ============================================
// Records
// ============================================

/// An outreach inquiry (list rows carry only a subset of the fields)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutreachInquiry {
    pub id: u64,
    #[serde(default)]
    pub user: Option<User>,
    pub title: String,
    #[serde(default)]
    pub requester_name: Option<String>,
    #[serde(default)]
    pub organization_name: Option<String>,
    #[serde(default)]
    pub contact_person: Option<String>,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub course_type: CourseType,
    #[serde(default)]
    pub course_type_display: Option<String>,
    pub student_count: u32,
    #[serde(default)]
    pub student_grade: Option<String>,
    pub preferred_date: NaiveDate,
    #[serde(default)]
    pub preferred_time: Option<String>,
    #[serde(default)]
    pub formatted_date: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    pub status: OutreachStatus,
    pub created_at: DateTime<FixedOffset>,
    #[serde(default)]
    pub updated_at: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub budget: Option<String>,
    #[serde(default)]
    pub special_requests: Option<String>,
    #[serde(default)]
    pub equipment: Vec<String>,
    #[serde(default)]
    pub admin_notes: Option<String>,
    #[serde(default)]
    pub is_owner: bool,
}

impl OutreachInquiry {
    /// Who asked, from the most specific field available
    pub fn requester_display(&self) -> String {
        let non_empty = |v: &Option<String>| v.as_deref().filter(|s| !s.trim().is_empty()).map(str::to_string);

        if let Some(name) = non_empty(&self.requester_name) {
            return name;
        }

        match (non_empty(&self.organization_name), non_empty(&self.contact_person)) {
            (Some(org), Some(person)) => return format!("{} {}", org, person),
            (Some(org), None) => return org,
            (None, Some(person)) => return person,
            (None, None) => {}
        }

        non_empty(&self.author_name).unwrap_or_else(|| "익명".to_string())
    }

    /// Course label, preferring the server-rendered one
    pub fn course_label(&self) -> String {
        self.course_type_display
            .clone()
            .unwrap_or_else(|| self.course_type.label().to_string())
    }

    /// `YYYY.MM.DD HH:MM` when a time is known
    pub fn schedule_display(&self) -> String {
        let date = self.preferred_date.format("%Y.%m.%d").to_string();
        match self.preferred_time.as_deref().and_then(|t| t.get(..5)) {
            Some(time) => format!("{} {}", date, time),
            None => date,
        }
    }
}

/// Echo of a created outreach inquiry
///
/// The create endpoint answers with the submitted fields only; it carries
/// no id, status or timestamps. Every field is optional so any echo shape
/// decodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutreachReceipt {
    pub id: Option<u64>,
    pub title: Option<String>,
    pub organization_name: Option<String>,
    pub contact_person: Option<String>,
    pub email: Option<String>,
    pub course_type: Option<CourseType>,
    pub student_count: Option<u32>,
    pub preferred_date: Option<NaiveDate>,
}

/// Aggregates served by `/outreach-inquiries/statistics/`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutreachStatistics {
    pub total_inquiries: u64,
    pub total_students: u64,
    #[serde(default)]
    pub status_breakdown: BTreeMap<String, u64>,
    #[serde(default)]
    pub course_type_breakdown: BTreeMap<String, u64>,
    #[serde(default)]
    pub pending_count: u64,
    #[serde(default)]
    pub in_progress_count: u64,
    #[serde(default)]
    pub completed_count: u64,
}

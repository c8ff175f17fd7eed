//! Request bodies for every form on the site

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::{is_valid_email, is_valid_phone, Validate, ValidationErrors};
use crate::domain::{CourseType, InquiryType, LessonInquiryType, OutreachStatus};

/// Largest group the outreach form accepts
pub const MAX_OUTREACH_STUDENTS: u32 = 100;

/// Minimum password length for registration
pub const MIN_PASSWORD_LEN: usize = 8;

fn trimmed(value: &str) -> String {
    value.trim().to_string()
}

fn trimmed_opt(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

// ============================================
// Product inquiry
// ============================================

/// Create/update body for a product inquiry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InquiryDraft {
    pub title: String,
    pub description: String,
    pub inquiry_type: InquiryType,
    pub requester_name: String,
}

impl InquiryDraft {
    /// Copy with surrounding whitespace removed
    pub fn normalized(&self) -> Self {
        Self {
            title: trimmed(&self.title),
            description: trimmed(&self.description),
            inquiry_type: self.inquiry_type,
            requester_name: trimmed(&self.requester_name),
        }
    }
}

impl Validate for InquiryDraft {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require("title", &self.title, "제목을 입력해주세요");
        errors.require("description", &self.description, "문의 내용을 입력해주세요");
        errors.require("requester_name", &self.requester_name, "요청자 이름을 입력해주세요");
        errors.into_result()
    }
}

// ============================================
// Lesson inquiry
// ============================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LessonInquiryDraft {
    pub title: String,
    pub description: String,
    pub inquiry_type: LessonInquiryType,
    pub requester_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_audience: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub participant_count: Option<u32>,
}

impl LessonInquiryDraft {
    pub fn normalized(&self) -> Self {
        Self {
            title: trimmed(&self.title),
            description: trimmed(&self.description),
            inquiry_type: self.inquiry_type,
            requester_name: trimmed(&self.requester_name),
            target_audience: trimmed_opt(&self.target_audience),
            preferred_date: trimmed_opt(&self.preferred_date),
            participant_count: self.participant_count,
        }
    }
}

impl Validate for LessonInquiryDraft {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require("title", &self.title, "제목을 입력해주세요");
        errors.require("description", &self.description, "문의 내용을 입력해주세요");
        errors.require("requester_name", &self.requester_name, "요청자 이름을 입력해주세요");

        if self.participant_count == Some(0) {
            errors.add("participant_count", "참가 인원은 양수여야 합니다");
        }

        errors.into_result()
    }
}

// ============================================
// Outreach inquiry
// ============================================

/// Create body for an outreach inquiry (anonymous submission allowed)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutreachInquiryDraft {
    pub title: String,
    pub requester_name: String,
    pub phone: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_type: Option<CourseType>,
    pub student_count: u32,
    #[serde(default)]
    pub student_grade: String,
    /// `YYYY-MM-DD`
    pub preferred_date: String,
    /// `HH:MM`
    pub preferred_time: String,
    pub duration: String,
    pub location: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub equipment: Vec<String>,
}

impl Default for OutreachInquiryDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            requester_name: String::new(),
            phone: String::new(),
            email: String::new(),
            course_type: None,
            student_count: 1,
            student_grade: String::new(),
            preferred_date: String::new(),
            preferred_time: String::new(),
            duration: String::new(),
            location: String::new(),
            message: String::new(),
            budget: None,
            special_requests: None,
            equipment: Vec::new(),
        }
    }
}

impl OutreachInquiryDraft {
    pub fn normalized(&self) -> Self {
        Self {
            title: trimmed(&self.title),
            requester_name: trimmed(&self.requester_name),
            phone: trimmed(&self.phone),
            email: trimmed(&self.email),
            course_type: self.course_type.clone(),
            student_count: self.student_count,
            student_grade: trimmed(&self.student_grade),
            preferred_date: trimmed(&self.preferred_date),
            preferred_time: trimmed(&self.preferred_time),
            duration: trimmed(&self.duration),
            location: trimmed(&self.location),
            message: trimmed(&self.message),
            budget: trimmed_opt(&self.budget),
            special_requests: trimmed_opt(&self.special_requests),
            equipment: self
                .equipment
                .iter()
                .map(|e| trimmed(e))
                .filter(|e| !e.is_empty())
                .collect(),
        }
    }
}

impl Validate for OutreachInquiryDraft {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require("title", &self.title, "교육 제목을 입력해주세요");
        errors.require("requester_name", &self.requester_name, "기관/담당자명을 입력해주세요");
        errors.require("phone", &self.phone, "연락처를 입력해주세요");
        errors.require("email", &self.email, "이메일을 입력해주세요");
        errors.require("preferred_date", &self.preferred_date, "희망 날짜를 입력해주세요");
        errors.require("preferred_time", &self.preferred_time, "희망 시간을 입력해주세요");
        errors.require("duration", &self.duration, "희망 수업 시간을 입력해주세요");
        errors.require("location", &self.location, "교육 장소를 입력해주세요");
        errors.require("message", &self.message, "교육 요청사항을 입력해주세요");

        match &self.course_type {
            None => errors.add("course_type", "교육 과정을 선택해주세요"),
            Some(course) if course.code().trim().is_empty() => {
                errors.add("course_type", "교육 과정을 선택해주세요")
            }
            Some(_) => {}
        }

        let phone = self.phone.trim();
        if !phone.is_empty() && !is_valid_phone(phone) {
            errors.add("phone", "올바른 연락처 형식이 아닙니다");
        }

        let email = self.email.trim();
        if !email.is_empty() && !is_valid_email(email) {
            errors.add("email", "올바른 이메일 형식이 아닙니다");
        }

        if self.student_count == 0 {
            errors.add("student_count", "참여 인원은 1명 이상이어야 합니다");
        } else if self.student_count > MAX_OUTREACH_STUDENTS {
            errors.add("student_count", "참여 인원은 100명을 초과할 수 없습니다");
        }

        let date = self.preferred_date.trim();
        if !date.is_empty() && NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
            errors.add("preferred_date", "날짜는 YYYY-MM-DD 형식으로 입력해주세요");
        }

        let time = self.preferred_time.trim();
        if !time.is_empty()
            && NaiveTime::parse_from_str(time, "%H:%M").is_err()
            && NaiveTime::parse_from_str(time, "%H:%M:%S").is_err()
        {
            errors.add("preferred_time", "시간은 HH:MM 형식으로 입력해주세요");
        }

        errors.into_result()
    }
}

/// Partial update for an outreach inquiry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutreachInquiryPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<OutreachStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_notes: Option<String>,
}

impl OutreachInquiryPatch {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

impl Validate for OutreachInquiryPatch {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.is_empty() {
            errors.add("patch", "변경할 항목이 없습니다");
        }
        if let Some(title) = &self.title {
            errors.require("title", title, "교육 제목을 입력해주세요");
        }
        if let Some(phone) = &self.phone {
            if !is_valid_phone(phone.trim()) {
                errors.add("phone", "올바른 연락처 형식이 아닙니다");
            }
        }
        if let Some(email) = &self.email {
            if !is_valid_email(email.trim()) {
                errors.add("email", "올바른 이메일 형식이 아닙니다");
            }
        }
        if let Some(count) = self.student_count {
            if count == 0 || count > MAX_OUTREACH_STUDENTS {
                errors.add("student_count", "참여 인원은 1명 이상 100명 이하여야 합니다");
            }
        }

        errors.into_result()
    }
}

// ============================================
// Class enrollment
// ============================================

/// Body of `/internal-classes/{id}/enroll/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrollmentRequest {
    pub requester_name: String,
    pub phone: String,
    pub email: String,
    pub student_count: u32,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub special_requests: String,
}

impl Default for EnrollmentRequest {
    fn default() -> Self {
        Self {
            requester_name: String::new(),
            phone: String::new(),
            email: String::new(),
            student_count: 1,
            message: String::new(),
            special_requests: String::new(),
        }
    }
}

impl EnrollmentRequest {
    /// Validate, then check the head count against the seats left
    pub fn validate_against(&self, remaining_seats: u32) -> Result<(), ValidationErrors> {
        let mut errors = match self.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };

        if self.student_count > remaining_seats {
            errors.add(
                "student_count",
                format!("최대 {}명까지 신청 가능합니다", remaining_seats),
            );
        }

        errors.into_result()
    }
}

impl Validate for EnrollmentRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require("requester_name", &self.requester_name, "이름을 입력해주세요");
        errors.require("phone", &self.phone, "연락처를 입력해주세요");
        errors.require("email", &self.email, "이메일을 입력해주세요");

        if self.student_count == 0 {
            errors.add("student_count", "참여 인원은 1명 이상이어야 합니다");
        }

        errors.into_result()
    }
}

// ============================================
// Reviews
// ============================================

/// A student review written on a class card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewDraft {
    pub author: String,
    pub rating: u8,
    pub content: String,
}

impl Validate for ReviewDraft {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require("author", &self.author, "작성자를 입력해주세요");
        errors.require("content", &self.content, "후기 내용을 입력해주세요");

        if !(1..=5).contains(&self.rating) {
            errors.add("rating", "별점은 1점에서 5점 사이여야 합니다");
        }

        errors.into_result()
    }
}

// ============================================
// Account forms
// ============================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl Validate for LoginForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require("email", &self.email, "이메일을 입력해주세요");
        errors.require("password", &self.password, "비밀번호를 입력해주세요");
        errors.into_result()
    }
}

/// Registration body; the confirmation never leaves the client
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    #[serde(skip)]
    pub password_confirm: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl Validate for SignupRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require("email", &self.email, "이메일을 입력해주세요");
        errors.require("password", &self.password, "비밀번호를 입력해주세요");

        let email = self.email.trim();
        if !email.is_empty() && !is_valid_email(email) {
            errors.add("email", "올바른 이메일 형식이 아닙니다");
        }
        if !self.password.is_empty() && self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.add("password", "비밀번호는 8자 이상이어야 합니다");
        }
        if self.password != self.password_confirm {
            errors.add("password_confirm", "비밀번호가 일치하지 않습니다");
        }

        errors.into_result()
    }
}

//! Product (kit) inquiries and lesson inquiries
//!
//! Both boards share a shape: a titled request from a named requester,
//! owned by the account that created it. Ownership is decided by the
//! backend and arrives as `is_owner`.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::User;

// ============================================
// Product inquiry
// ============================================

/// Kind of product inquiry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum InquiryType {
    /// Teaching kit question
    #[default]
    Product,
    /// Quote / bulk pricing
    Price,
    /// Shipping
    Delivery,
    /// Anything else
    Etc,
}

impl InquiryType {
    pub fn all() -> &'static [InquiryType] {
        &[
            InquiryType::Product,
            InquiryType::Price,
            InquiryType::Delivery,
            InquiryType::Etc,
        ]
    }

    /// Korean label shown on the board
    pub fn label(&self) -> &'static str {
        match self {
            InquiryType::Product => "교구문의",
            InquiryType::Price => "가격문의",
            InquiryType::Delivery => "배송문의",
            InquiryType::Etc => "기타문의",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InquiryType::Product => "product",
            InquiryType::Price => "price",
            InquiryType::Delivery => "delivery",
            InquiryType::Etc => "etc",
        }
    }
}

impl std::fmt::Display for InquiryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InquiryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InquiryType::all()
            .iter()
            .find(|t| t.as_str() == s || t.label() == s)
            .copied()
            .ok_or_else(|| format!("unknown inquiry type: {}", s))
    }
}

/// Staff reply attached to an inquiry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InquiryReply {
    pub content: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<FixedOffset>>,
}

/// A product (kit) inquiry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inquiry {
    pub id: u64,
    #[serde(default)]
    pub user: Option<User>,
    pub title: String,
    pub description: String,
    pub inquiry_type: InquiryType,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
    pub requester_name: String,
    #[serde(default)]
    pub is_owner: bool,
    #[serde(default)]
    pub reply: Option<InquiryReply>,
}

// ============================================
// Lesson inquiry
// ============================================

/// Kind of lesson inquiry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum LessonInquiryType {
    #[default]
    Offline,
    Online,
    Workshop,
    Coaching,
    Etc,
}

impl LessonInquiryType {
    pub fn all() -> &'static [LessonInquiryType] {
        &[
            LessonInquiryType::Offline,
            LessonInquiryType::Online,
            LessonInquiryType::Workshop,
            LessonInquiryType::Coaching,
            LessonInquiryType::Etc,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            LessonInquiryType::Offline => "대면 수업 문의",
            LessonInquiryType::Online => "온라인 수업 문의",
            LessonInquiryType::Workshop => "워크샵 문의",
            LessonInquiryType::Coaching => "코칭/멘토링 문의",
            LessonInquiryType::Etc => "기타 문의",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LessonInquiryType::Offline => "offline",
            LessonInquiryType::Online => "online",
            LessonInquiryType::Workshop => "workshop",
            LessonInquiryType::Coaching => "coaching",
            LessonInquiryType::Etc => "etc",
        }
    }
}

impl std::fmt::Display for LessonInquiryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LessonInquiryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LessonInquiryType::all()
            .iter()
            .find(|t| t.as_str() == s || t.label() == s)
            .copied()
            .ok_or_else(|| format!("unknown lesson inquiry type: {}", s))
    }
}

/// A lesson (on-site or online class) inquiry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonInquiry {
    pub id: u64,
    #[serde(default)]
    pub user: Option<User>,
    pub title: String,
    pub description: String,
    pub inquiry_type: LessonInquiryType,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
    pub requester_name: String,
    #[serde(default)]
    pub is_owner: bool,
    /// Free text, e.g. "초등학교 4학년"
    #[serde(default)]
    pub target_audience: String,
    /// Free text, e.g. "2025년 5월 중"
    #[serde(default)]
    pub preferred_date: String,
    #[serde(default)]
    pub participant_count: Option<u32>,
    #[serde(default)]
    pub reply: Option<InquiryReply>,
}

//! Class schedule catalog
//!
//! Listing entries for the schedule page. Entries come either from the
//! offerings shipped with the site ([`ScheduleCatalog::seeded`]) or from
//! `/internal-classes/available/` rows converted with `From<InternalClass>`.
//! Reviews and bookmarks live only in the catalog and are never sent to
//! the backend.

mod catalog;
mod seed;

pub use catalog::{ScheduleCatalog, ScheduleError, ScheduleFilter};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::CourseType;
use crate::pricing::{calculate_discount_price, DiscountInfo, DiscountQuote};

/// Average rating needed for the bestseller badge
pub const BESTSELLER_MIN_RATING: f64 = 4.5;

/// Length of the card description before it is cut with `...`
const SUMMARY_CHARS: usize = 100;

/// Where the class takes place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassType {
    #[serde(rename = "오프라인")]
    Offline,
    #[serde(rename = "직접출강")]
    Visiting,
}

impl ClassType {
    pub fn code(&self) -> &'static str {
        match self {
            ClassType::Offline => "오프라인",
            ClassType::Visiting => "직접출강",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ClassType::Offline => "오프라인 수업",
            ClassType::Visiting => "직접 출강",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            ClassType::Offline => "#2196f3",
            ClassType::Visiting => "#ff9800",
        }
    }
}

impl std::str::FromStr for ClassType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "오프라인" | "오프라인 수업" | "offline" => Ok(ClassType::Offline),
            "직접출강" | "직접 출강" | "visiting" | "outreach" => Ok(ClassType::Visiting),
            other => Err(format!("unknown class type: {}", other)),
        }
    }
}

impl std::fmt::Display for ClassType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonPlan {
    pub session: u32,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentReview {
    pub author: String,
    /// 1 to 5
    pub rating: u8,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// A class offering as shown on the schedule page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationSchedule {
    pub id: u64,
    pub title: String,
    pub instructor: String,
    pub target_grade: String,
    pub max_students: u32,
    pub current_students: u32,
    /// Display text, e.g. `2025.06.07 ~ 2025.06.28 14:00`
    pub schedule: String,
    pub duration_hours: u32,
    pub sessions: u32,
    pub price: i64,
    pub class_type: ClassType,
    pub course_type: CourseType,
    pub description: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub youtube_url: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub lesson_plans: Vec<LessonPlan>,
    #[serde(default)]
    pub reviews: Vec<StudentReview>,
    #[serde(default)]
    pub discounts: Vec<DiscountInfo>,
    #[serde(default)]
    pub is_bookmarked: bool,
}

impl EducationSchedule {
    /// Seats taken, as a rounded percentage
    pub fn enrollment_rate(&self) -> u32 {
        if self.max_students == 0 {
            return 100;
        }
        let rate = (u64::from(self.current_students) * 100 + u64::from(self.max_students) / 2)
            / u64::from(self.max_students);
        rate.min(u64::from(u32::MAX)) as u32
    }

    pub fn is_full(&self) -> bool {
        self.current_students >= self.max_students
    }

    pub fn remaining_seats(&self) -> u32 {
        self.max_students.saturating_sub(self.current_students)
    }

    /// Price after the best active discount
    pub fn quote(&self) -> DiscountQuote {
        calculate_discount_price(self.price, &self.discounts)
    }

    pub fn average_rating(&self) -> Option<f64> {
        if self.reviews.is_empty() {
            return None;
        }
        let total: u32 = self.reviews.iter().map(|r| u32::from(r.rating)).sum();
        Some(f64::from(total) / self.reviews.len() as f64)
    }

    pub fn is_bestseller(&self) -> bool {
        self.average_rating()
            .map_or(false, |avg| avg >= BESTSELLER_MIN_RATING)
    }

    /// Card description, cut at 100 characters
    pub fn summary(&self) -> String {
        if self.description.chars().count() > SUMMARY_CHARS {
            let cut: String = self.description.chars().take(SUMMARY_CHARS).collect();
            format!("{}...", cut)
        } else {
            self.description.clone()
        }
    }
}

/// Row of `/internal-classes/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InternalClass {
    pub id: u64,
    pub title: String,
    pub course_type: CourseType,
    pub class_type: ClassType,
    pub instructor: String,
    pub target_grade: String,
    pub max_students: u32,
    #[serde(default)]
    pub current_students: u32,
    #[serde(default)]
    pub formatted_schedule: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub class_time: Option<String>,
    pub duration_hours: u32,
    #[serde(default = "default_sessions")]
    pub sessions: u32,
    pub price: i64,
    #[serde(default)]
    pub discount_rate: u32,
    #[serde(default)]
    pub description: String,
    /// Session titles, or `{session, title, description}` objects
    #[serde(default)]
    pub curriculum: Vec<serde_json::Value>,
    #[serde(default)]
    pub prerequisites: Option<String>,
    #[serde(default)]
    pub materials: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub youtube_url: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub travel_fee: i64,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_sessions() -> u32 {
    1
}

fn default_active() -> bool {
    true
}

impl InternalClass {
    /// Server-formatted schedule, or one built from the dates
    pub fn schedule_text(&self) -> String {
        if let Some(text) = self.formatted_schedule.as_deref().filter(|s| !s.is_empty()) {
            return text.to_string();
        }

        let date = |d: NaiveDate| d.format("%Y.%m.%d").to_string();
        let mut text = match (self.start_date, self.end_date) {
            (Some(start), Some(end)) if start != end => format!("{} ~ {}", date(start), date(end)),
            (Some(start), _) => date(start),
            (None, Some(end)) => date(end),
            (None, None) => String::new(),
        };
        if let Some(time) = self.class_time.as_deref().and_then(|t| t.get(..5)) {
            if !text.is_empty() {
                text.push(' ');
            }
            text.push_str(time);
        }
        text
    }

    fn lesson_plans(&self) -> Vec<LessonPlan> {
        self.curriculum
            .iter()
            .enumerate()
            .filter_map(|(idx, item)| match item {
                serde_json::Value::String(title) => Some(LessonPlan {
                    session: idx as u32 + 1,
                    title: title.clone(),
                    description: String::new(),
                }),
                serde_json::Value::Object(fields) => Some(LessonPlan {
                    session: fields
                        .get("session")
                        .and_then(|v| v.as_u64())
                        .map(|s| s as u32)
                        .unwrap_or(idx as u32 + 1),
                    title: fields.get("title")?.as_str()?.to_string(),
                    description: fields
                        .get("description")
                        .and_then(|v| v.as_str())
                        .unwrap_or_default()
                        .to_string(),
                }),
                _ => None,
            })
            .collect()
    }
}

impl From<InternalClass> for EducationSchedule {
    fn from(class: InternalClass) -> Self {
        let schedule = class.schedule_text();
        let lesson_plans = class.lesson_plans();
        let discounts = if class.discount_rate > 0 {
            vec![DiscountInfo::new("할인", class.discount_rate, true)]
        } else {
            Vec::new()
        };

        Self {
            id: class.id,
            title: class.title,
            instructor: class.instructor,
            target_grade: class.target_grade,
            max_students: class.max_students,
            current_students: class.current_students,
            schedule,
            duration_hours: class.duration_hours,
            sessions: class.sessions.max(1),
            price: class.price,
            class_type: class.class_type,
            course_type: class.course_type,
            description: class.description,
            thumbnail: class.thumbnail,
            youtube_url: class.youtube_url,
            location: class.location,
            lesson_plans,
            reviews: Vec::new(),
            discounts,
            is_bookmarked: false,
        }
    }
}

use chrono::{DateTime, Utc};

use super::{seed, ClassType, EducationSchedule, InternalClass, StudentReview};
use crate::domain::CourseType;
use crate::forms::{ReviewDraft, Validate, ValidationErrors};

/// Equality filters from the schedule page menus; `None` means all
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScheduleFilter {
    pub course_type: Option<CourseType>,
    pub class_type: Option<ClassType>,
    pub target_grade: Option<String>,
    pub bookmarked_only: bool,
}

impl ScheduleFilter {
    pub fn matches(&self, entry: &EducationSchedule) -> bool {
        self.course_type
            .as_ref()
            .map_or(true, |c| *c == entry.course_type)
            && self.class_type.map_or(true, |c| c == entry.class_type)
            && self
                .target_grade
                .as_deref()
                .map_or(true, |g| g == entry.target_grade)
            && (!self.bookmarked_only || entry.is_bookmarked)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    #[error("Class {0} not found")]
    NotFound(u64),

    #[error(transparent)]
    Invalid(#[from] ValidationErrors),
}

/// The schedule page's list of classes
#[derive(Debug, Clone, Default)]
pub struct ScheduleCatalog {
    entries: Vec<EducationSchedule>,
}

impl ScheduleCatalog {
    pub fn new(entries: Vec<EducationSchedule>) -> Self {
        Self { entries }
    }

    /// Offerings shipped with the site
    pub fn seeded() -> Self {
        Self::new(seed::entries())
    }

    /// Catalog built from `/internal-classes/available/` rows
    pub fn from_classes(classes: Vec<InternalClass>) -> Self {
        Self::new(
            classes
                .into_iter()
                .filter(|c| c.is_active)
                .map(EducationSchedule::from)
                .collect(),
        )
    }

    pub fn entries(&self) -> &[EducationSchedule] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn filter(&self, filter: &ScheduleFilter) -> Vec<&EducationSchedule> {
        self.entries.iter().filter(|e| filter.matches(e)).collect()
    }

    pub fn get(&self, id: u64) -> Option<&EducationSchedule> {
        self.entries.iter().find(|e| e.id == id)
    }

    fn get_mut(&mut self, id: u64) -> Result<&mut EducationSchedule, ScheduleError> {
        self.entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(ScheduleError::NotFound(id))
    }

    /// Flip the bookmark; returns the new state
    pub fn toggle_bookmark(&mut self, id: u64) -> Result<bool, ScheduleError> {
        let entry = self.get_mut(id)?;
        entry.is_bookmarked = !entry.is_bookmarked;
        Ok(entry.is_bookmarked)
    }

    /// Validate and append a review to the local copy
    pub fn add_review(
        &mut self,
        id: u64,
        draft: &ReviewDraft,
        now: DateTime<Utc>,
    ) -> Result<&StudentReview, ScheduleError> {
        draft.validate()?;
        let entry = self.get_mut(id)?;
        entry.reviews.push(StudentReview {
            author: draft.author.trim().to_string(),
            rating: draft.rating,
            content: draft.content.trim().to_string(),
            created_at: now,
        });
        tracing::debug!(class_id = id, "Review added");

        let review = entry
            .reviews
            .last()
            .ok_or(ScheduleError::NotFound(id))?;
        Ok(review)
    }

    pub fn bestsellers(&self) -> Vec<&EducationSchedule> {
        self.entries.iter().filter(|e| e.is_bestseller()).collect()
    }

    /// Distinct course types, in listing order
    pub fn course_types(&self) -> Vec<CourseType> {
        let mut seen = Vec::new();
        for entry in &self.entries {
            if !seen.contains(&entry.course_type) {
                seen.push(entry.course_type.clone());
            }
        }
        seen
    }

    pub fn class_types(&self) -> Vec<ClassType> {
        let mut seen = Vec::new();
        for entry in &self.entries {
            if !seen.contains(&entry.class_type) {
                seen.push(entry.class_type);
            }
        }
        seen
    }

    pub fn target_grades(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for entry in &self.entries {
            if !seen.contains(&entry.target_grade) {
                seen.push(entry.target_grade.clone());
            }
        }
        seen
    }
}

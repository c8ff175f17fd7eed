//! Domain records mirrored from the site backend
//!
//! These are the data-transfer types for each board and the catalog.
//! Enumerated fields are real enums so that labels, colors and workflow
//! rules are derived in one place with exhaustive matches.

mod inquiry;
mod outreach;
mod product;
mod user;

pub use inquiry::{Inquiry, InquiryReply, InquiryType, LessonInquiry, LessonInquiryType};
pub use outreach::{
    CourseType, OutreachInquiry, OutreachReceipt, OutreachStatistics, OutreachStatus, StatusGroup,
};
pub use product::{
    CategoryRef, DescriptionBlock, Product, ProductImage, ProductSort, ProductStatus,
};
pub use user::User;

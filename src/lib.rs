//! # makerlab
//!
//! Client library for the AI Maker Lab coding-education site: product and
//! lesson inquiry boards, outreach (visiting class) requests, the kit
//! catalog, the class schedule and account sessions.
//!
//! ## Modules
//!
//! - [`api`]: typed REST client, one handle per resource
//! - [`session`]: persisted login session and the shared auth context
//! - [`board`]: board pagination, owner gating and load state
//! - [`forms`]: request drafts, validation and submit state
//! - [`schedule`]: class catalog with filters, bookmarks and reviews
//! - [`pricing`] / [`format`]: discounts, won amounts and dates
//! - [`output`]: table, CSV and JSON rendering for the CLI
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use makerlab::api::{ApiClient, ApiClientConfig};
//! use makerlab::board::{BoardItem, BoardList};
//! use makerlab::session::{AuthContext, FileSessionStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let auth = AuthContext::new(FileSessionStore::new("session.json"))?;
//!     let client = ApiClient::new(ApiClientConfig::default(), auth)?;
//!
//!     let page = client.inquiries().list().await?;
//!     let rows: Vec<BoardItem> = page.results.iter().map(BoardItem::from).collect();
//!
//!     let board = BoardList::new("/inquiries", true);
//!     for row in board.visible(&rows) {
//!         println!("{} {} {:?}", row.id, row.title, board.badges(row));
//!     }
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod board;
pub mod config;
pub mod content;
pub mod domain;
pub mod format;
pub mod forms;
pub mod output;
pub mod pricing;
pub mod schedule;
pub mod session;

pub use api::{ApiClient, ApiClientConfig, ApiError, Page};

pub use board::{
    BoardBackend, BoardError, BoardItem, BoardList, InquiryBoard, ItemAction, LoadState, Paginator,
};

pub use config::{Config, ConfigError};

pub use domain::{
    CourseType, Inquiry, InquiryType, LessonInquiry, LessonInquiryType, OutreachInquiry,
    OutreachStatus, Product, User,
};

pub use forms::{SubmissionTracker, SubmitStatus, Validate, ValidationErrors};

pub use pricing::{calculate_discount_price, DiscountInfo, DiscountQuote, PurchaseBox};

pub use schedule::{EducationSchedule, ScheduleCatalog, ScheduleFilter};

pub use session::{AuthContext, Session, SessionError};

//! Inquiry boards
//!
//! List state shared by the product, lesson and outreach boards:
//! client-side pagination, owner gating of the detail view, the
//! [`LoadState`] of the last fetch and the create flow driven by
//! [`InquiryBoard`].

use std::time::Instant;

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use crate::api::{ApiError, InquiriesApi, LessonsApi, OutreachApi};
use crate::domain::{Inquiry, LessonInquiry, OutreachInquiry, OutreachStatistics};
use crate::forms::{
    InquiryDraft, LessonInquiryDraft, OutreachInquiryDraft, OutreachInquiryPatch,
    SubmissionTracker, Validate, ValidationErrors,
};

pub const DEFAULT_PAGE_SIZE: usize = 10;

const LOGIN_PROMPT: &str = "로그인이 필요합니다. 로그인 후 다시 시도해주세요.";

/// Failures of the owner-gated board actions
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("작성자만 접근할 수 있습니다 (문의 {id})")]
    NotOwner { id: u64 },

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Invalid(#[from] ValidationErrors),
}

// ============================================
// Load state
// ============================================

/// Outcome of the last fetch of a view
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState<T> {
    #[default]
    Loading,
    Loaded(T),
    Empty,
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => LoadState::Loaded(value),
            Err(e) => LoadState::Failed(e.user_message()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl<T> LoadState<Vec<T>> {
    /// Like [`LoadState::from_result`], but an empty list is `Empty`
    pub fn from_list(result: Result<Vec<T>, ApiError>) -> Self {
        match result {
            Ok(items) if items.is_empty() => LoadState::Empty,
            other => LoadState::from_result(other),
        }
    }

    pub fn items(&self) -> &[T] {
        match self {
            LoadState::Loaded(items) => items,
            _ => &[],
        }
    }
}

// ============================================
// Pagination
// ============================================

/// Fixed-size, 1-based client-side pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_size: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Paginator {
    /// A zero size is treated as one item per page
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self, len: usize) -> usize {
        len.div_ceil(self.page_size)
    }

    pub fn start_index(&self, page: usize) -> usize {
        page.saturating_sub(1).saturating_mul(self.page_size)
    }

    /// Items on `page`; empty when the page is out of range
    pub fn page<'a, T>(&self, items: &'a [T], page: usize) -> &'a [T] {
        if page == 0 {
            return &[];
        }
        let start = self.start_index(page);
        if start >= items.len() {
            return &[];
        }
        let end = start.saturating_add(self.page_size).min(items.len());
        &items[start..end]
    }
}

// ============================================
// Rows
// ============================================

/// One row of a board listing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardItem {
    pub id: u64,
    pub title: String,
    pub requester: String,
    pub category: String,
    pub status: Option<String>,
    pub created_at: DateTime<FixedOffset>,
    pub is_owner: bool,
}

impl From<&Inquiry> for BoardItem {
    fn from(inquiry: &Inquiry) -> Self {
        Self {
            id: inquiry.id,
            title: inquiry.title.clone(),
            requester: inquiry.requester_name.clone(),
            category: inquiry.inquiry_type.label().to_string(),
            status: inquiry.reply.as_ref().map(|_| "답변완료".to_string()),
            created_at: inquiry.created_at,
            is_owner: inquiry.is_owner,
        }
    }
}

impl From<&LessonInquiry> for BoardItem {
    fn from(inquiry: &LessonInquiry) -> Self {
        Self {
            id: inquiry.id,
            title: inquiry.title.clone(),
            requester: inquiry.requester_name.clone(),
            category: inquiry.inquiry_type.label().to_string(),
            status: inquiry.reply.as_ref().map(|_| "답변완료".to_string()),
            created_at: inquiry.created_at,
            is_owner: inquiry.is_owner,
        }
    }
}

impl From<&OutreachInquiry> for BoardItem {
    fn from(inquiry: &OutreachInquiry) -> Self {
        Self {
            id: inquiry.id,
            title: inquiry.title.clone(),
            requester: inquiry.requester_display(),
            category: inquiry.course_label(),
            status: Some(inquiry.status.label().to_string()),
            created_at: inquiry.created_at,
            is_owner: inquiry.is_owner,
        }
    }
}

// ============================================
// Board list
// ============================================

/// What opening a row does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemAction {
    Navigate(String),
    AccessDenied,
}

#[derive(Debug, Clone)]
pub struct BoardList {
    base_url: String,
    show_only_owner_details: bool,
    paginator: Paginator,
    current_page: usize,
    items_len: usize,
}

impl BoardList {
    pub fn new(base_url: impl Into<String>, show_only_owner_details: bool) -> Self {
        Self {
            base_url: base_url.into(),
            show_only_owner_details,
            paginator: Paginator::default(),
            current_page: 1,
            items_len: 0,
        }
    }

    pub fn with_paginator(mut self, paginator: Paginator) -> Self {
        self.paginator = paginator;
        self
    }

    pub fn paginator(&self) -> Paginator {
        self.paginator
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.paginator.total_pages(self.items_len)
    }

    /// Record the list length; a different length goes back to page 1
    pub fn set_items_len(&mut self, len: usize) {
        if len != self.items_len {
            self.items_len = len;
            self.current_page = 1;
        }
    }

    /// Move to `page`, clamped to the existing pages
    pub fn go_to(&mut self, page: usize) {
        self.current_page = page.clamp(1, self.total_pages().max(1));
    }

    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        self.paginator.page(items, self.current_page)
    }

    /// Row number of the first visible item, 1-based
    pub fn first_row_number(&self) -> usize {
        self.paginator.start_index(self.current_page) + 1
    }

    pub fn open(&self, item: &BoardItem) -> ItemAction {
        if self.show_only_owner_details && !item.is_owner {
            return ItemAction::AccessDenied;
        }
        ItemAction::Navigate(format!("{}/{}", self.base_url.trim_end_matches('/'), item.id))
    }

    pub fn badges(&self, item: &BoardItem) -> Vec<&'static str> {
        if item.is_owner {
            vec!["작성자"]
        } else if self.show_only_owner_details {
            vec!["읽기전용"]
        } else {
            Vec::new()
        }
    }
}

// ============================================
// Backend seam
// ============================================

/// Remote side of a board: listing, lookup, create and edit
#[async_trait]
pub trait BoardBackend: Send + Sync {
    type Item: Send;
    type Draft: Validate + Send + Sync;
    type Patch: Validate + Send + Sync;

    /// Whether calls go out with a login
    fn is_authenticated(&self) -> bool;

    async fn fetch(&self) -> Result<Vec<Self::Item>, ApiError>;

    async fn get(&self, id: u64) -> Result<Self::Item, ApiError>;

    /// Store a new item; the list is refetched afterwards, so only the
    /// outcome matters
    async fn create(&self, draft: &Self::Draft) -> Result<(), ApiError>;

    async fn update(&self, id: u64, patch: &Self::Patch) -> Result<(), ApiError>;
}

#[async_trait]
impl<'a> BoardBackend for InquiriesApi<'a> {
    type Item = Inquiry;
    type Draft = InquiryDraft;
    type Patch = InquiryDraft;

    fn is_authenticated(&self) -> bool {
        self.client().auth_context().is_authenticated()
    }

    async fn fetch(&self) -> Result<Vec<Inquiry>, ApiError> {
        Ok(self.list().await?.results)
    }

    async fn get(&self, id: u64) -> Result<Inquiry, ApiError> {
        InquiriesApi::get(self, id).await
    }

    async fn create(&self, draft: &InquiryDraft) -> Result<(), ApiError> {
        InquiriesApi::create(self, draft).await.map(|_| ())
    }

    async fn update(&self, id: u64, draft: &InquiryDraft) -> Result<(), ApiError> {
        InquiriesApi::update(self, id, draft).await.map(|_| ())
    }
}

#[async_trait]
impl<'a> BoardBackend for LessonsApi<'a> {
    type Item = LessonInquiry;
    type Draft = LessonInquiryDraft;
    type Patch = LessonInquiryDraft;

    fn is_authenticated(&self) -> bool {
        self.client().auth_context().is_authenticated()
    }

    async fn fetch(&self) -> Result<Vec<LessonInquiry>, ApiError> {
        Ok(self.list().await?.results)
    }

    async fn get(&self, id: u64) -> Result<LessonInquiry, ApiError> {
        LessonsApi::get(self, id).await
    }

    async fn create(&self, draft: &LessonInquiryDraft) -> Result<(), ApiError> {
        LessonsApi::create(self, draft).await.map(|_| ())
    }

    async fn update(&self, id: u64, draft: &LessonInquiryDraft) -> Result<(), ApiError> {
        LessonsApi::update(self, id, draft).await.map(|_| ())
    }
}

#[async_trait]
impl<'a> BoardBackend for OutreachApi<'a> {
    type Item = OutreachInquiry;
    type Draft = OutreachInquiryDraft;
    type Patch = OutreachInquiryPatch;

    fn is_authenticated(&self) -> bool {
        self.client().auth_context().is_authenticated()
    }

    async fn fetch(&self) -> Result<Vec<OutreachInquiry>, ApiError> {
        Ok(self.list().await?.results)
    }

    async fn get(&self, id: u64) -> Result<OutreachInquiry, ApiError> {
        OutreachApi::get(self, id).await
    }

    async fn create(&self, draft: &OutreachInquiryDraft) -> Result<(), ApiError> {
        OutreachApi::create(self, draft).await.map(|_| ())
    }

    async fn update(&self, id: u64, patch: &OutreachInquiryPatch) -> Result<(), ApiError> {
        OutreachApi::update(self, id, patch).await.map(|_| ())
    }
}

// ============================================
// Board controller
// ============================================

/// A board page: the list plus its "new inquiry" dialog
pub struct InquiryBoard<B: BoardBackend> {
    backend: B,
    state: LoadState<Vec<B::Item>>,
    submission: SubmissionTracker,
    login_required: bool,
}

impl<B: BoardBackend> InquiryBoard<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            state: LoadState::Loading,
            submission: SubmissionTracker::new(),
            login_required: false,
        }
    }

    pub fn state(&self) -> &LoadState<Vec<B::Item>> {
        &self.state
    }

    pub fn submission(&self) -> &SubmissionTracker {
        &self.submission
    }

    pub fn submission_mut(&mut self) -> &mut SubmissionTracker {
        &mut self.submission
    }

    /// Set when the last create was rejected for lack of a login
    pub fn login_required(&self) -> bool {
        self.login_required
    }

    pub async fn refresh(&mut self) -> &LoadState<Vec<B::Item>> {
        self.state = LoadState::Loading;
        self.state = LoadState::from_list(self.backend.fetch().await);
        &self.state
    }

    /// Validate, create, then reload the list
    ///
    /// Validation errors are returned without contacting the backend.
    /// A rejected create is recorded on the submission tracker; a second
    /// call while one is in flight is ignored.
    pub async fn submit(&mut self, draft: &B::Draft, now: Instant) -> Result<(), ValidationErrors> {
        draft.validate()?;
        if !self.submission.begin() {
            return Ok(());
        }
        self.login_required = false;

        match self.backend.create(draft).await {
            Ok(()) => {
                self.submission.succeed("문의가 성공적으로 등록되었습니다.", now);
                self.refresh().await;
            }
            Err(e) if e.requires_login() => {
                tracing::warn!(error = %e, "Create rejected, login required");
                self.login_required = true;
                self.submission.fail(LOGIN_PROMPT, now);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Create failed");
                self.submission.fail(e.user_message(), now);
            }
        }
        Ok(())
    }

    /// Look up row `id` and apply the owner rule of `list` to it
    ///
    /// The row is fetched by id, so rows past the first server page open
    /// the same way.
    pub async fn open(&self, list: &BoardList, id: u64) -> Result<B::Item, BoardError>
    where
        for<'r> BoardItem: From<&'r B::Item>,
    {
        let item = self.backend.get(id).await?;
        match list.open(&BoardItem::from(&item)) {
            ItemAction::Navigate(path) => {
                tracing::debug!(%path, "Opening detail");
                Ok(item)
            }
            ItemAction::AccessDenied => Err(BoardError::NotOwner { id }),
        }
    }

    /// Edit row `id` under the owner rule of `list`
    ///
    /// `build` turns the current row into the update body. Without a login
    /// nothing is sent; for a row `list` keeps closed only the lookup is.
    pub async fn edit<F>(&self, list: &BoardList, id: u64, build: F) -> Result<(), BoardError>
    where
        F: FnOnce(&B::Item) -> B::Patch,
        for<'r> BoardItem: From<&'r B::Item>,
    {
        if !self.backend.is_authenticated() {
            return Err(ApiError::AuthRequired.into());
        }

        let current = self.open(list, id).await?;
        let patch = build(&current);
        patch.validate()?;
        self.backend.update(id, &patch).await?;
        tracing::info!(id, "Board item updated");
        Ok(())
    }
}

// ============================================
// Outreach dashboard
// ============================================

/// Outreach list and its statistics panel
#[derive(Debug, Clone, Default)]
pub struct OutreachDashboard {
    pub inquiries: LoadState<Vec<OutreachInquiry>>,
    pub statistics: LoadState<OutreachStatistics>,
}

impl OutreachDashboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch both panels concurrently; each keeps its own outcome
    pub async fn refresh(&mut self, api: &OutreachApi<'_>) {
        self.inquiries = LoadState::Loading;
        self.statistics = LoadState::Loading;
        let (list, stats) = tokio::join!(api.list(), api.statistics());
        self.apply(list.map(|page| page.results), stats);
    }

    pub fn apply(
        &mut self,
        list: Result<Vec<OutreachInquiry>, ApiError>,
        stats: Result<OutreachStatistics, ApiError>,
    ) {
        self.inquiries = LoadState::from_list(list);
        self.statistics = LoadState::from_result(stats);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    fn item(id: u64, is_owner: bool) -> BoardItem {
        BoardItem {
            id,
            title: format!("문의 {}", id),
            requester: "홍길동".into(),
            category: "일반".into(),
            status: None,
            created_at: DateTime::parse_from_rfc3339("2025-06-01T09:00:00+09:00").unwrap(),
            is_owner,
        }
    }

    impl From<&BoardItem> for BoardItem {
        fn from(item: &BoardItem) -> Self {
            item.clone()
        }
    }

    fn draft() -> InquiryDraft {
        InquiryDraft {
            title: "배송 문의".into(),
            description: "언제 도착하나요?".into(),
            requester_name: "홍길동".into(),
            ..Default::default()
        }
    }

    struct MockBackend {
        rows: Mutex<Vec<BoardItem>>,
        fetches: AtomicUsize,
        gets: AtomicUsize,
        creates: AtomicUsize,
        updates: Mutex<Vec<(u64, InquiryDraft)>>,
        create_status: Option<u16>,
        authenticated: bool,
    }

    impl MockBackend {
        fn new(create_status: Option<u16>) -> Self {
            Self {
                rows: Mutex::new(vec![item(1, false)]),
                fetches: AtomicUsize::new(0),
                gets: AtomicUsize::new(0),
                creates: AtomicUsize::new(0),
                updates: Mutex::new(Vec::new()),
                create_status,
                authenticated: true,
            }
        }

        /// Rows 1..=count; even ids belong to the current user
        fn with_rows(count: u64) -> Self {
            let backend = Self::new(None);
            *backend.rows.lock().unwrap() = (1..=count).map(|id| item(id, id % 2 == 0)).collect();
            backend
        }

        fn logged_out(mut self) -> Self {
            self.authenticated = false;
            self
        }
    }

    #[async_trait]
    impl BoardBackend for MockBackend {
        type Item = BoardItem;
        type Draft = InquiryDraft;
        type Patch = InquiryDraft;

        fn is_authenticated(&self) -> bool {
            self.authenticated
        }

        async fn fetch(&self) -> Result<Vec<BoardItem>, ApiError> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn get(&self, id: u64) -> Result<BoardItem, ApiError> {
            self.gets.fetch_add(1, Ordering::SeqCst);
            self.rows
                .lock()
                .unwrap()
                .iter()
                .find(|row| row.id == id)
                .cloned()
                .ok_or_else(|| ApiError::from_status(404, r#"{"detail": "없음"}"#))
        }

        async fn create(&self, draft: &InquiryDraft) -> Result<(), ApiError> {
            self.creates.fetch_add(1, Ordering::SeqCst);
            if let Some(status) = self.create_status {
                return Err(ApiError::from_status(status, r#"{"detail": "거부됨"}"#));
            }
            let mut rows = self.rows.lock().unwrap();
            let mut created = item(rows.len() as u64 + 1, true);
            created.title = draft.title.clone();
            rows.push(created);
            Ok(())
        }

        async fn update(&self, id: u64, draft: &InquiryDraft) -> Result<(), ApiError> {
            self.updates.lock().unwrap().push((id, draft.clone()));
            Ok(())
        }
    }

    #[test]
    fn test_paginator_pages() {
        let items: Vec<u32> = (0..12).collect();
        let paginator = Paginator::new(5);

        assert_eq!(paginator.total_pages(items.len()), 3);
        let sizes: Vec<usize> = (1..=3).map(|p| paginator.page(&items, p).len()).collect();
        assert_eq!(sizes, vec![5, 5, 2]);
        assert_eq!(paginator.start_index(2), 5);
        assert_eq!(paginator.page(&items, 2)[0], 5);
        assert!(paginator.page(&items, 4).is_empty());
        assert!(paginator.page(&items, 0).is_empty());
        assert_eq!(paginator.total_pages(0), 0);
    }

    #[test]
    fn test_board_list_gating() {
        let gated = BoardList::new("/inquiries/", true);
        assert_eq!(gated.open(&item(3, true)), ItemAction::Navigate("/inquiries/3".into()));
        assert_eq!(gated.open(&item(4, false)), ItemAction::AccessDenied);
        assert_eq!(gated.badges(&item(3, true)), vec!["작성자"]);
        assert_eq!(gated.badges(&item(4, false)), vec!["읽기전용"]);

        let open = BoardList::new("/lessons", false);
        assert_eq!(open.open(&item(4, false)), ItemAction::Navigate("/lessons/4".into()));
        assert!(open.badges(&item(4, false)).is_empty());
    }

    #[test]
    fn test_items_len_change_resets_page() {
        let mut list = BoardList::new("/inquiries", false).with_paginator(Paginator::new(5));
        list.set_items_len(12);
        list.go_to(3);
        assert_eq!(list.current_page(), 3);
        assert_eq!(list.first_row_number(), 11);

        list.set_items_len(12);
        assert_eq!(list.current_page(), 3);

        list.set_items_len(13);
        assert_eq!(list.current_page(), 1);

        list.go_to(99);
        assert_eq!(list.current_page(), 3);
    }

    #[test]
    fn test_load_state_from_list() {
        let empty: LoadState<Vec<u32>> = LoadState::from_list(Ok(Vec::new()));
        assert_eq!(empty, LoadState::Empty);

        let loaded = LoadState::from_list(Ok(vec![1, 2]));
        assert_eq!(loaded.items(), &[1, 2]);

        let failed: LoadState<Vec<u32>> = LoadState::from_list(Err(ApiError::Unavailable));
        assert!(failed.items().is_empty());
        assert!(failed.error().is_some());
    }

    #[tokio::test]
    async fn test_submit_creates_then_refetches() {
        let mut board = InquiryBoard::new(MockBackend::new(None));
        board.refresh().await;
        assert_eq!(board.state().items().len(), 1);

        board.submit(&draft(), Instant::now()).await.unwrap();

        assert_eq!(board.backend.creates.load(Ordering::SeqCst), 1);
        assert_eq!(board.backend.fetches.load(Ordering::SeqCst), 2);
        assert_eq!(board.state().items().len(), 2);
        assert!(board.submission().status().message().is_some());
        assert!(!board.login_required());
    }

    #[tokio::test]
    async fn test_invalid_draft_makes_no_call() {
        let mut board = InquiryBoard::new(MockBackend::new(None));
        let errors = board
            .submit(&InquiryDraft::default(), Instant::now())
            .await
            .unwrap_err();

        assert!(errors.get("title").is_some());
        assert_eq!(board.backend.creates.load(Ordering::SeqCst), 0);
        assert_eq!(board.backend.fetches.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_unauthorized_create_prompts_login() {
        let mut board = InquiryBoard::new(MockBackend::new(Some(401)));
        board.submit(&draft(), Instant::now()).await.unwrap();

        assert!(board.login_required());
        assert_eq!(board.submission().status().message(), Some(LOGIN_PROMPT));
        assert_eq!(board.backend.fetches.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_failed_create_keeps_server_message() {
        let mut board = InquiryBoard::new(MockBackend::new(Some(500)));
        board.submit(&draft(), Instant::now()).await.unwrap();

        assert!(!board.login_required());
        assert_eq!(board.submission().status().message(), Some("거부됨"));
    }

    #[tokio::test]
    async fn test_open_fetches_row_by_id() {
        let board = InquiryBoard::new(MockBackend::with_rows(25));
        let gated = BoardList::new("/inquiries", true);

        let row = board.open(&gated, 24).await.unwrap();
        assert_eq!(row.id, 24);
        assert_eq!(board.backend.gets.load(Ordering::SeqCst), 1);
        assert_eq!(board.backend.fetches.load(Ordering::SeqCst), 0);

        let err = board.open(&gated, 23).await.unwrap_err();
        assert!(matches!(err, BoardError::NotOwner { id: 23 }));

        let err = board.open(&gated, 99).await.unwrap_err();
        assert!(matches!(err, BoardError::Api(ApiError::NotFound { .. })));

        let open = BoardList::new("/inquiries", false);
        assert_eq!(board.open(&open, 23).await.unwrap().id, 23);
    }

    #[tokio::test]
    async fn test_edit_by_owner() {
        let board = InquiryBoard::new(MockBackend::with_rows(4));

        board
            .edit(&BoardList::new("/inquiries", true), 2, |current| InquiryDraft {
                title: format!("{} (수정)", current.title),
                ..draft()
            })
            .await
            .unwrap();

        let updates = board.backend.updates.lock().unwrap();
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].0, 2);
        assert_eq!(updates[0].1.title, "문의 2 (수정)");
    }

    #[tokio::test]
    async fn test_edit_without_login_sends_nothing() {
        let board = InquiryBoard::new(MockBackend::with_rows(4).logged_out());

        let gated = BoardList::new("/inquiries", true);
        let err = board.edit(&gated, 2, |_| draft()).await.unwrap_err();
        assert!(matches!(err, BoardError::Api(ApiError::AuthRequired)));
        assert_eq!(board.backend.gets.load(Ordering::SeqCst), 0);
        assert!(board.backend.updates.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_edit_refuses_other_authors() {
        let board = InquiryBoard::new(MockBackend::with_rows(4));

        let err = board
            .edit(&BoardList::new("/inquiries", true), 3, |_| draft())
            .await
            .unwrap_err();
        assert!(matches!(err, BoardError::NotOwner { id: 3 }));
        assert!(board.backend.updates.lock().unwrap().is_empty());

        board
            .edit(&BoardList::new("/inquiries", false), 3, |_| draft())
            .await
            .unwrap();
        assert_eq!(board.backend.updates.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_edit_validates_before_sending() {
        let board = InquiryBoard::new(MockBackend::with_rows(4));

        let err = board
            .edit(&BoardList::new("/inquiries", true), 2, |_| InquiryDraft::default())
            .await
            .unwrap_err();
        match err {
            BoardError::Invalid(errors) => assert!(errors.get("title").is_some()),
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(board.backend.updates.lock().unwrap().is_empty());
    }

    #[test]
    fn test_dashboard_sides_independent() {
        let mut dashboard = OutreachDashboard::new();
        dashboard.apply(
            Err(ApiError::Timeout),
            Ok(OutreachStatistics {
                total_inquiries: 4,
                ..Default::default()
            }),
        );

        assert!(dashboard.inquiries.error().is_some());
        assert_eq!(dashboard.statistics.loaded().unwrap().total_inquiries, 4);
    }
}

//! AI Maker Lab CLI
//!
//! Command-line front end for the site:
//! - Browse and write product, lesson and outreach inquiries
//! - Browse the kit catalog and the class schedule, enroll in a class
//! - Log in with email or a social provider and keep the session on disk

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{anyhow, bail, Context};
use clap::{Args, Parser, Subcommand};
use makerlab::api::oauth::{authorize_url, OAuthProvider};
use makerlab::api::{ApiClient, ApiClientConfig, ApiError, OutreachFilter, ProductFilter};
use makerlab::board::{
    BoardBackend, BoardError, BoardItem, BoardList, InquiryBoard, LoadState, OutreachDashboard,
    Paginator, DEFAULT_PAGE_SIZE,
};
use makerlab::config::{generate_default_config, Config, LoggingConfig};
use makerlab::content;
use makerlab::domain::{
    CourseType, InquiryType, LessonInquiryType, OutreachInquiry, OutreachStatus, ProductSort,
};
use makerlab::format::{format_date, format_won};
use makerlab::forms::{
    EnrollmentRequest, InquiryDraft, LessonInquiryDraft, LoginForm, OutreachInquiryDraft,
    OutreachInquiryPatch, SignupRequest, SubmitStatus, Validate, ValidationErrors,
};
use makerlab::output::{render, render_fields, OutputFormat, Tabular};
use makerlab::pricing::PurchaseBox;
use makerlab::schedule::{ClassType, EducationSchedule, ScheduleCatalog, ScheduleFilter};
use makerlab::session::{AuthContext, FileSessionStore};
use serde::Serialize;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOGIN_HINT: &str = "먼저 로그인하세요: makerlab login <email> --password <password>";

#[derive(Parser)]
#[command(name = "makerlab")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "AI Maker Lab site client")]
#[command(long_about = "AI Maker Lab site client.\nInquiry boards, kit catalog, class schedule and account session from the terminal.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Backend REST root (overrides the config file)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Output format (table, json, csv)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Config file (default: user config dir, /etc/makerlab, ./config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Session file (overrides the config file)
    #[arg(long, global = true)]
    pub session: Option<PathBuf>,

    /// Keep the session in memory only
    #[arg(long, global = true)]
    pub no_persist: bool,
}

#[derive(Args, Debug, Clone, Copy)]
pub struct PageArgs {
    /// Page number, starting at 1
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: usize,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Company introduction
    About,

    /// Phone, email, address and department contacts
    Contact,

    /// Product inquiry board
    Inquiries {
        #[command(subcommand)]
        action: InquiryCommand,
    },

    /// Lesson inquiry board
    Lessons {
        #[command(subcommand)]
        action: LessonCommand,
    },

    /// Visiting class (outreach) requests
    Outreach {
        #[command(subcommand)]
        action: OutreachCommand,
    },

    /// Kit catalog
    Products {
        #[command(subcommand)]
        action: ProductCommand,
    },

    /// Class schedule and enrollment
    Schedule {
        #[command(subcommand)]
        action: ScheduleCommand,
    },

    /// Log in with email and password
    Login {
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Log out and forget the stored session
    Logout,

    /// Create an account
    Register {
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        password_confirm: String,
        #[arg(long)]
        username: Option<String>,
    },

    /// Show the logged-in user
    Whoami,

    /// Social login
    Oauth {
        #[command(subcommand)]
        action: OAuthCommand,
    },

    /// Password reset by email
    Password {
        #[command(subcommand)]
        action: PasswordCommand,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum InquiryCommand {
    List {
        #[command(flatten)]
        pages: PageArgs,
    },
    Show {
        id: u64,
        /// Only the author may open the detail
        #[arg(long)]
        owner_only: bool,
    },
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        requester: String,
        /// Inquiry type code or label
        #[arg(long = "type")]
        inquiry_type: Option<InquiryType>,
    },
    /// Change your own inquiry; omitted fields keep their value
    Edit {
        id: u64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        requester: Option<String>,
        #[arg(long = "type")]
        inquiry_type: Option<InquiryType>,
    },
    Delete {
        id: u64,
    },
}

#[derive(Subcommand)]
pub enum LessonCommand {
    List {
        #[command(flatten)]
        pages: PageArgs,
    },
    Show {
        id: u64,
        #[arg(long)]
        owner_only: bool,
    },
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        requester: String,
        #[arg(long = "type")]
        inquiry_type: Option<LessonInquiryType>,
        #[arg(long)]
        target_audience: Option<String>,
        #[arg(long)]
        preferred_date: Option<String>,
        #[arg(long)]
        participants: Option<u32>,
    },
    /// Change your own lesson inquiry; omitted fields keep their value
    Edit {
        id: u64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        requester: Option<String>,
        #[arg(long = "type")]
        inquiry_type: Option<LessonInquiryType>,
        #[arg(long)]
        target_audience: Option<String>,
        #[arg(long)]
        preferred_date: Option<String>,
        #[arg(long)]
        participants: Option<u32>,
    },
    Delete {
        id: u64,
    },
}

#[derive(Subcommand)]
pub enum OutreachCommand {
    List {
        #[command(flatten)]
        pages: PageArgs,
        /// Status label or alias (e.g. 검토중, quote-sent)
        #[arg(long)]
        status: Option<OutreachStatus>,
        #[arg(long)]
        course: Option<CourseType>,
        #[arg(long)]
        search: Option<String>,
        /// created_at, preferred_date or student_count; prefix '-' for descending
        #[arg(long)]
        ordering: Option<String>,
    },
    Show {
        id: u64,
    },
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        requester: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        course: CourseType,
        #[arg(long, default_value_t = 1)]
        students: u32,
        #[arg(long, default_value = "")]
        grade: String,
        /// YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// HH:MM
        #[arg(long)]
        time: String,
        #[arg(long)]
        duration: String,
        #[arg(long)]
        location: String,
        #[arg(long, default_value = "")]
        message: String,
    },
    /// Change fields of a request; only the given fields are sent
    Edit {
        id: u64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        students: Option<u32>,
        /// YYYY-MM-DD
        #[arg(long)]
        date: Option<String>,
        /// HH:MM
        #[arg(long)]
        time: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        message: Option<String>,
    },
    /// Move an inquiry to another workflow status (staff)
    Status {
        id: u64,
        status: OutreachStatus,
    },
    Delete {
        id: u64,
    },
    /// Statistics and the current list
    Dashboard,
    /// The five most recent inquiries
    Recent,
}

#[derive(Subcommand)]
pub enum ProductCommand {
    List {
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        search: Option<String>,
        /// price_asc, price_desc or latest
        #[arg(long)]
        sort: Option<ProductSort>,
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        page_size: Option<u32>,
    },
    Show {
        id: u64,
        #[arg(long, default_value_t = 1)]
        quantity: u32,
    },
}

#[derive(Subcommand)]
pub enum ScheduleCommand {
    List {
        #[command(flatten)]
        pages: PageArgs,
        #[arg(long)]
        course: Option<CourseType>,
        /// 오프라인 or 직접출강
        #[arg(long)]
        class_type: Option<ClassType>,
        #[arg(long)]
        grade: Option<String>,
        /// Read open classes from the backend instead of the built-in list
        #[arg(long)]
        remote: bool,
    },
    Show {
        id: u64,
        #[arg(long)]
        remote: bool,
    },
    Enroll {
        id: u64,
        #[arg(long)]
        name: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        email: String,
        #[arg(long, default_value_t = 1)]
        students: u32,
        #[arg(long, default_value = "")]
        message: String,
    },
}

#[derive(Subcommand)]
pub enum OAuthCommand {
    /// Print the provider's authorize URL
    Url { provider: OAuthProvider },
    /// Exchange a Kakao authorization code
    Kakao { code: String },
    /// Exchange a Google id token
    Google { id_token: String },
}

#[derive(Subcommand)]
pub enum PasswordCommand {
    /// Email a reset link
    Forgot { email: String },
    /// Set a new password with the token from the reset link
    Reset {
        token: String,
        #[arg(long)]
        password: String,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("오류: {:#}", e);
            std::process::exit(1);
        }
    };
    init_logging(&config.logging);

    if let Err(e) = run(cli, config).await {
        report(&e);
        std::process::exit(1);
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }
    if let Some(path) = &cli.session {
        config.session.path = path.clone();
    }
    Ok(config)
}

fn init_logging(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().pretty().with_writer(std::io::stderr))
            .init();
    }
}

fn report(error: &anyhow::Error) {
    let board = error.downcast_ref::<BoardError>();
    let api = error.downcast_ref::<ApiError>().or(match board {
        Some(BoardError::Api(e)) => Some(e),
        _ => None,
    });
    let invalid = error.downcast_ref::<ValidationErrors>().or(match board {
        Some(BoardError::Invalid(e)) => Some(e),
        _ => None,
    });

    if let Some(api) = api {
        eprintln!("오류: {}", api.user_message());
        if api.requires_login() {
            eprintln!("{}", LOGIN_HINT);
        }
    } else if let Some(invalid) = invalid {
        eprintln!("입력값을 확인해주세요:");
        for (field, message) in invalid.fields() {
            eprintln!("  {}: {}", field, message);
        }
    } else {
        eprintln!("오류: {:#}", error);
    }
}

fn emit(text: String) {
    if text.ends_with('\n') {
        print!("{}", text);
    } else {
        println!("{}", text);
    }
}

/// Full record as JSON, or its key fields otherwise
fn emit_record<T: Serialize>(
    record: &T,
    fields: &[(&str, String)],
    format: OutputFormat,
) -> anyhow::Result<()> {
    let text = match format {
        OutputFormat::Json => serde_json::to_string_pretty(record)?,
        other => render_fields(fields, other)?,
    };
    emit(text);
    Ok(())
}

/// Render one page of `rows`, with a page footer in table mode
fn emit_page<T: Tabular + Serialize>(
    rows: &[T],
    pages: PageArgs,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let mut list = BoardList::new("", false).with_paginator(Paginator::new(pages.page_size));
    list.set_items_len(rows.len());
    list.go_to(pages.page);

    emit(render(list.visible(rows), format)?);
    if format == OutputFormat::Table {
        println!(
            "{}/{} 페이지 (총 {}건)",
            list.current_page(),
            list.total_pages().max(1),
            rows.len()
        );
    }
    Ok(())
}

async fn run(cli: Cli, config: Config) -> anyhow::Result<()> {
    let format = cli.format;

    match cli.command {
        Commands::About => return show_about(format),
        Commands::Contact => return show_contact(format),
        Commands::Config { output } => return write_config(output),
        Commands::Schedule {
            action: ScheduleCommand::List { pages, course, class_type, grade, remote: false },
        } => {
            let catalog = ScheduleCatalog::seeded();
            return list_schedule(&catalog, pages, course, class_type, grade, format);
        }
        Commands::Schedule {
            action: ScheduleCommand::Show { id, remote: false },
        } => {
            let catalog = ScheduleCatalog::seeded();
            let entry = catalog
                .get(id)
                .ok_or_else(|| anyhow!("수업 {}을(를) 찾을 수 없습니다", id))?;
            return show_schedule(entry, format);
        }
        _ => {}
    }

    let auth = if cli.no_persist {
        AuthContext::in_memory()
    } else {
        AuthContext::new(FileSessionStore::new(&config.session.path))
            .context("저장된 세션을 읽을 수 없습니다")?
    };
    let client = ApiClient::new(ApiClientConfig::from(&config.api), auth)
        .context("HTTP 클라이언트를 만들 수 없습니다")?;

    match cli.command {
        Commands::Inquiries { action } => match action {
            InquiryCommand::List { pages } => {
                list_board(InquiryBoard::new(client.inquiries()), pages, format).await?
            }
            InquiryCommand::Show { id, owner_only } => {
                let board = InquiryBoard::new(client.inquiries());
                let inquiry = board.open(&BoardList::new("/inquiries", owner_only), id).await?;
                let mut fields = vec![
                    ("번호", inquiry.id.to_string()),
                    ("제목", inquiry.title.clone()),
                    ("분류", inquiry.inquiry_type.label().to_string()),
                    ("요청자", inquiry.requester_name.clone()),
                    ("작성일", format_date(&inquiry.created_at)),
                    ("내용", inquiry.description.clone()),
                ];
                if let Some(reply) = &inquiry.reply {
                    fields.push(("답변", reply.content.clone()));
                }
                emit_record(&inquiry, &fields, format)?;
            }
            InquiryCommand::Create { title, description, requester, inquiry_type } => {
                let draft = InquiryDraft {
                    title,
                    description,
                    inquiry_type: inquiry_type.unwrap_or_default(),
                    requester_name: requester,
                };
                submit(InquiryBoard::new(client.inquiries()), &draft).await?;
            }
            InquiryCommand::Edit { id, title, description, requester, inquiry_type } => {
                let board = InquiryBoard::new(client.inquiries());
                board
                    .edit(&BoardList::new("/inquiries", true), id, |current| InquiryDraft {
                        title: title.unwrap_or_else(|| current.title.clone()),
                        description: description.unwrap_or_else(|| current.description.clone()),
                        inquiry_type: inquiry_type.unwrap_or(current.inquiry_type),
                        requester_name: requester.unwrap_or_else(|| current.requester_name.clone()),
                    })
                    .await?;
                println!("문의 {}이(가) 수정되었습니다.", id);
            }
            InquiryCommand::Delete { id } => {
                client.inquiries().delete(id).await?;
                println!("문의 {}이(가) 삭제되었습니다.", id);
            }
        },

        Commands::Lessons { action } => match action {
            LessonCommand::List { pages } => {
                list_board(InquiryBoard::new(client.lessons()), pages, format).await?
            }
            LessonCommand::Show { id, owner_only } => {
                let board = InquiryBoard::new(client.lessons());
                let lesson = board.open(&BoardList::new("/lessons", owner_only), id).await?;
                let mut fields = vec![
                    ("번호", lesson.id.to_string()),
                    ("제목", lesson.title.clone()),
                    ("분류", lesson.inquiry_type.label().to_string()),
                    ("요청자", lesson.requester_name.clone()),
                    ("대상", lesson.target_audience.clone()),
                    ("희망일", lesson.preferred_date.clone()),
                    ("작성일", format_date(&lesson.created_at)),
                    ("내용", lesson.description.clone()),
                ];
                if let Some(count) = lesson.participant_count {
                    fields.push(("인원", format!("{}명", count)));
                }
                if let Some(reply) = &lesson.reply {
                    fields.push(("답변", reply.content.clone()));
                }
                emit_record(&lesson, &fields, format)?;
            }
            LessonCommand::Create {
                title,
                description,
                requester,
                inquiry_type,
                target_audience,
                preferred_date,
                participants,
            } => {
                let draft = LessonInquiryDraft {
                    title,
                    description,
                    inquiry_type: inquiry_type.unwrap_or_default(),
                    requester_name: requester,
                    target_audience,
                    preferred_date,
                    participant_count: participants,
                };
                submit(InquiryBoard::new(client.lessons()), &draft).await?;
            }
            LessonCommand::Edit {
                id,
                title,
                description,
                requester,
                inquiry_type,
                target_audience,
                preferred_date,
                participants,
            } => {
                let board = InquiryBoard::new(client.lessons());
                board
                    .edit(&BoardList::new("/lessons", true), id, |current| LessonInquiryDraft {
                        title: title.unwrap_or_else(|| current.title.clone()),
                        description: description.unwrap_or_else(|| current.description.clone()),
                        inquiry_type: inquiry_type.unwrap_or(current.inquiry_type),
                        requester_name: requester.unwrap_or_else(|| current.requester_name.clone()),
                        target_audience: target_audience
                            .or_else(|| Some(current.target_audience.clone()))
                            .filter(|s| !s.trim().is_empty()),
                        preferred_date: preferred_date
                            .or_else(|| Some(current.preferred_date.clone()))
                            .filter(|s| !s.trim().is_empty()),
                        participant_count: participants.or(current.participant_count),
                    })
                    .await?;
                println!("수업 문의 {}이(가) 수정되었습니다.", id);
            }
            LessonCommand::Delete { id } => {
                client.lessons().delete(id).await?;
                println!("수업 문의 {}이(가) 삭제되었습니다.", id);
            }
        },

        Commands::Outreach { action } => outreach(&client, action, format).await?,
        Commands::Products { action } => products(&client, action, format).await?,
        Commands::Schedule { action } => schedule(&client, action, format).await?,

        Commands::Login { email, password } => {
            LoginForm { email: email.clone(), password: password.clone() }.validate()?;
            let session = client.auth().login(&email, &password).await?;
            let name = session
                .user
                .as_ref()
                .map(|u| u.label().to_string())
                .unwrap_or(email);
            println!("{}님, 환영합니다!", name);
        }

        Commands::Logout => {
            client.auth().logout().await;
            println!("로그아웃되었습니다.");
        }

        Commands::Register { email, password, password_confirm, username } => {
            let signup = SignupRequest { email, password, password_confirm, username };
            signup.validate()?;
            match client.auth().register(&signup).await? {
                Some(_) => println!("회원가입이 완료되었습니다. 로그인되었습니다."),
                None => println!("회원가입이 완료되었습니다. 로그인해주세요."),
            }
        }

        Commands::Whoami => {
            let status = client.auth().check_status().await?;
            match status.user {
                Some(user) if status.authenticated => {
                    let fields = vec![
                        ("이름", user.label().to_string()),
                        ("이메일", user.email.clone()),
                        ("관리자", if user.is_staff { "예" } else { "아니오" }.to_string()),
                    ];
                    emit_record(&user, &fields, format)?;
                }
                _ => println!("로그인되어 있지 않습니다."),
            }
        }

        Commands::Oauth { action } => match action {
            OAuthCommand::Url { provider } => {
                let nonce = uuid::Uuid::new_v4().to_string();
                let url = authorize_url(&config.oauth, provider, &nonce).ok_or_else(|| {
                    anyhow!("{} client id가 설정되지 않았습니다 ([oauth] 섹션)", provider.name())
                })?;
                println!("{}", url);
            }
            OAuthCommand::Kakao { code } => {
                let redirect = OAuthProvider::Kakao.redirect_uri(&config.oauth.redirect_base);
                client.auth().kakao_callback(&code, &redirect).await?;
                println!("카카오 계정으로 로그인되었습니다.");
            }
            OAuthCommand::Google { id_token } => {
                client.auth().google_callback(&id_token).await?;
                println!("구글 계정으로 로그인되었습니다.");
            }
        },

        Commands::Password { action } => match action {
            PasswordCommand::Forgot { email } => {
                client.auth().request_password_reset(&email).await?;
                println!("비밀번호 재설정 메일을 보냈습니다. 메일함을 확인해주세요.");
            }
            PasswordCommand::Reset { token, password } => {
                client.auth().reset_password(&token, &password).await?;
                println!("비밀번호가 변경되었습니다. 새 비밀번호로 로그인해주세요.");
            }
        },

        Commands::About | Commands::Contact | Commands::Config { .. } => {}
    }

    Ok(())
}

async fn list_board<B>(mut board: InquiryBoard<B>, pages: PageArgs, format: OutputFormat) -> anyhow::Result<()>
where
    B: BoardBackend,
    for<'r> BoardItem: From<&'r B::Item>,
{
    match board.refresh().await {
        LoadState::Loaded(items) => {
            let rows: Vec<BoardItem> = items.iter().map(BoardItem::from).collect();
            emit_page(&rows, pages, format)
        }
        LoadState::Empty => {
            println!("등록된 문의가 없습니다.");
            Ok(())
        }
        LoadState::Failed(message) => bail!("{}", message),
        LoadState::Loading => Ok(()),
    }
}

async fn submit<B: BoardBackend>(mut board: InquiryBoard<B>, draft: &B::Draft) -> anyhow::Result<()> {
    board.submit(draft, Instant::now()).await?;
    match board.submission().status() {
        SubmitStatus::Success(message) => {
            println!("{}", message);
            Ok(())
        }
        SubmitStatus::Error(message) if board.login_required() => {
            bail!("{}\n{}", message, LOGIN_HINT)
        }
        SubmitStatus::Error(message) => bail!("{}", message),
        SubmitStatus::Idle | SubmitStatus::Submitting => Ok(()),
    }
}

fn outreach_fields(inquiry: &OutreachInquiry) -> Vec<(&'static str, String)> {
    let opt = |v: &Option<String>| v.clone().unwrap_or_else(|| "-".into());
    vec![
        ("번호", inquiry.id.to_string()),
        ("제목", inquiry.title.clone()),
        ("요청자", inquiry.requester_display()),
        ("상태", format!("{} {}", inquiry.status.icon(), inquiry.status.label())),
        ("과정", inquiry.course_label()),
        ("인원", format!("{}명", inquiry.student_count)),
        ("학년", opt(&inquiry.student_grade)),
        ("희망일시", inquiry.schedule_display()),
        ("수업시간", opt(&inquiry.duration)),
        ("장소", opt(&inquiry.location)),
        ("연락처", opt(&inquiry.phone)),
        ("이메일", opt(&inquiry.email)),
        ("요청사항", opt(&inquiry.message)),
        ("작성일", format_date(&inquiry.created_at)),
    ]
}

async fn outreach(client: &ApiClient, action: OutreachCommand, format: OutputFormat) -> anyhow::Result<()> {
    let api = client.outreach();

    match action {
        OutreachCommand::List { pages, status, course, search, ordering } => {
            let filter = OutreachFilter { status, course_type: course, search, ordering };
            let state = LoadState::from_list(api.list_filtered(&filter).await.map(|p| p.results));
            match state {
                LoadState::Loaded(items) => {
                    let rows: Vec<BoardItem> = items.iter().map(BoardItem::from).collect();
                    emit_page(&rows, pages, format)?;
                }
                LoadState::Empty => println!("등록된 출강 문의가 없습니다."),
                LoadState::Failed(message) => bail!("{}", message),
                LoadState::Loading => {}
            }
        }
        OutreachCommand::Show { id } => {
            let inquiry = api.get(id).await?;
            emit_record(&inquiry, &outreach_fields(&inquiry), format)?;
        }
        OutreachCommand::Create {
            title,
            requester,
            phone,
            email,
            course,
            students,
            grade,
            date,
            time,
            duration,
            location,
            message,
        } => {
            let draft = OutreachInquiryDraft {
                title,
                requester_name: requester,
                phone,
                email,
                course_type: Some(course),
                student_count: students,
                student_grade: grade,
                preferred_date: date,
                preferred_time: time,
                duration,
                location,
                message,
                ..Default::default()
            };
            submit(InquiryBoard::new(client.outreach()), &draft).await?;
        }
        OutreachCommand::Edit { id, title, phone, email, students, date, time, location, message } => {
            let patch = OutreachInquiryPatch {
                title,
                phone,
                email,
                student_count: students,
                preferred_date: date,
                preferred_time: time,
                location,
                message,
                ..Default::default()
            };
            // the backend lets any logged-in user change a request
            let board = InquiryBoard::new(client.outreach());
            board.edit(&BoardList::new("/outreach", false), id, |_| patch).await?;
            println!("출강 문의 {}이(가) 수정되었습니다.", id);
        }
        OutreachCommand::Status { id, status } => {
            let current = api.get(id).await?;
            if !current.status.can_transition_to(status) {
                tracing::warn!(
                    from = current.status.label(),
                    to = status.label(),
                    "Unusual status transition"
                );
            }
            let updated = api.update_status(id, status).await?;
            println!("문의 {}: {} → {}", id, current.status.label(), updated.status.label());
        }
        OutreachCommand::Delete { id } => {
            api.delete(id).await?;
            println!("출강 문의 {}이(가) 삭제되었습니다.", id);
        }
        OutreachCommand::Dashboard => {
            let mut dashboard = OutreachDashboard::new();
            dashboard.refresh(&api).await;

            match &dashboard.statistics {
                LoadState::Loaded(stats) => {
                    let mut fields = vec![
                        ("전체 문의", stats.total_inquiries.to_string()),
                        ("전체 학생 수", stats.total_students.to_string()),
                        ("대기", stats.pending_count.to_string()),
                        ("진행", stats.in_progress_count.to_string()),
                        ("완료", stats.completed_count.to_string()),
                    ];
                    for (status, count) in &stats.status_breakdown {
                        fields.push(("상태별", format!("{}: {}", status, count)));
                    }
                    emit_record(stats, &fields, format)?;
                }
                LoadState::Failed(message) => eprintln!("통계를 불러오지 못했습니다: {}", message),
                LoadState::Empty | LoadState::Loading => {}
            }

            match &dashboard.inquiries {
                LoadState::Loaded(items) => {
                    let rows: Vec<BoardItem> = items.iter().map(BoardItem::from).collect();
                    emit(render(&rows, format)?);
                }
                LoadState::Empty => println!("등록된 출강 문의가 없습니다."),
                LoadState::Failed(message) => eprintln!("목록을 불러오지 못했습니다: {}", message),
                LoadState::Loading => {}
            }
        }
        OutreachCommand::Recent => {
            let rows: Vec<BoardItem> = api.recent().await?.iter().map(BoardItem::from).collect();
            emit(render(&rows, format)?);
        }
    }
    Ok(())
}

async fn products(client: &ApiClient, action: ProductCommand, format: OutputFormat) -> anyhow::Result<()> {
    let api = client.products();

    match action {
        ProductCommand::List { category, search, sort, page, page_size } => {
            let filter = ProductFilter { category, search, sort, page, page_size };
            let page = api.list(&filter).await?;
            if page.is_empty() {
                println!("등록된 상품이 없습니다.");
                return Ok(());
            }
            emit(render(&page.results, format)?);
            if format == OutputFormat::Table {
                println!("총 {}개 상품", page.count);
            }
        }
        ProductCommand::Show { id, quantity } => {
            let product = api.get(id).await?;
            let purchase = PurchaseBox::new(product.price_won(), 0).with_quantity(quantity);

            let mut fields = vec![
                ("번호", product.id.to_string()),
                ("상품명", product.name.clone()),
                ("카테고리", product.category.label()),
                ("가격", format_won(product.price_won())),
                ("상태", product.status.label().to_string()),
            ];
            if !product.tags.is_empty() {
                fields.push(("태그", product.tags.join(", ")));
            }
            if let Some(duration) = &product.duration {
                fields.push(("기간", duration.clone()));
            }
            if let Some(description) = &product.description {
                fields.push(("설명", description.clone()));
            }
            for block in &product.description_blocks {
                fields.push(("상세", format!("{}: {}", block.title, block.items.join(" / "))));
            }
            if product.is_purchasable() {
                fields.push(("수량", purchase.quantity().to_string()));
                fields.push(("합계", format_won(purchase.total())));
            }
            emit_record(&product, &fields, format)?;
        }
    }
    Ok(())
}

fn schedule_filter(course: Option<CourseType>, class_type: Option<ClassType>, grade: Option<String>) -> ScheduleFilter {
    ScheduleFilter {
        course_type: course,
        class_type,
        target_grade: grade,
        bookmarked_only: false,
    }
}

fn list_schedule(
    catalog: &ScheduleCatalog,
    pages: PageArgs,
    course: Option<CourseType>,
    class_type: Option<ClassType>,
    grade: Option<String>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let rows: Vec<EducationSchedule> = catalog
        .filter(&schedule_filter(course, class_type, grade))
        .into_iter()
        .cloned()
        .collect();
    if rows.is_empty() {
        println!("조건에 맞는 수업이 없습니다.");
        return Ok(());
    }
    emit_page(&rows, pages, format)
}

fn show_schedule(entry: &EducationSchedule, format: OutputFormat) -> anyhow::Result<()> {
    let quote = entry.quote();
    let mut fields = vec![
        ("번호", entry.id.to_string()),
        ("과정", entry.title.clone()),
        ("강사", entry.instructor.clone()),
        ("유형", entry.class_type.label().to_string()),
        ("분야", entry.course_type.label().to_string()),
        ("대상", entry.target_grade.clone()),
        ("일정", entry.schedule.clone()),
        ("구성", format!("{}회 / {}시간", entry.sessions, entry.duration_hours)),
        (
            "모집",
            format!(
                "{}/{}명 ({}%)",
                entry.current_students,
                entry.max_students,
                entry.enrollment_rate()
            ),
        ),
        ("정가", format_won(quote.original_price)),
    ];
    if quote.has_discount() {
        fields.push(("할인가", format!("{} ({}% 할인)", format_won(quote.discounted_price), quote.rate())));
    }
    if let Some(location) = &entry.location {
        fields.push(("장소", location.clone()));
    }
    if let Some(avg) = entry.average_rating() {
        fields.push(("평점", format!("{:.1} ({}개 후기)", avg, entry.reviews.len())));
    }
    fields.push(("소개", entry.description.clone()));
    for plan in &entry.lesson_plans {
        fields.push(("차시", format!("{}. {}", plan.session, plan.title)));
    }
    emit_record(entry, &fields, format)
}

async fn schedule(client: &ApiClient, action: ScheduleCommand, format: OutputFormat) -> anyhow::Result<()> {
    let classes = client.classes();

    match action {
        ScheduleCommand::List { pages, course, class_type, grade, .. } => {
            let catalog = ScheduleCatalog::from_classes(classes.available().await?);
            list_schedule(&catalog, pages, course, class_type, grade, format)
        }
        ScheduleCommand::Show { id, .. } => {
            let entry = EducationSchedule::from(classes.get(id).await?);
            show_schedule(&entry, format)
        }
        ScheduleCommand::Enroll { id, name, phone, email, students, message } => {
            let entry = EducationSchedule::from(classes.get(id).await?);
            if entry.is_full() {
                bail!("'{}' 수업은 모집이 마감되었습니다.", entry.title);
            }
            let request = EnrollmentRequest {
                requester_name: name,
                phone,
                email,
                student_count: students,
                message,
                ..Default::default()
            };
            request.validate_against(entry.remaining_seats())?;

            let receipt = classes.enroll(id, &request).await?;
            println!("{}", receipt.message);
            if let Some(inquiry_id) = receipt.inquiry_id {
                println!("접수 번호: {}", inquiry_id);
            }
            Ok(())
        }
    }
}

fn show_about(format: OutputFormat) -> anyhow::Result<()> {
    let about = content::about();
    if format == OutputFormat::Json {
        emit(serde_json::to_string_pretty(about)?);
        return Ok(());
    }

    let mut fields = vec![
        ("소개", about.headline.to_string()),
        ("미션", about.mission.to_string()),
        ("개요", about.overview.to_string()),
        ("비전", about.vision.to_string()),
    ];
    for value in about.core_values {
        fields.push(("핵심 가치", format!("{}: {}", value.title, value.description)));
    }
    for achievement in about.achievements {
        fields.push(("성과", format!("{} {}", achievement.label, achievement.value)));
    }
    for member in about.team {
        fields.push((
            "교육진",
            format!("{} ({}) - {}", member.name, member.position, member.expertise.join(", ")),
        ));
    }
    emit(render_fields(&fields, format)?);
    Ok(())
}

fn show_contact(format: OutputFormat) -> anyhow::Result<()> {
    let contact = content::contact();
    if format == OutputFormat::Json {
        emit(serde_json::to_string_pretty(contact)?);
        return Ok(());
    }

    let mut fields = Vec::new();
    for card in contact.info.iter().chain(contact.transport) {
        fields.push((card.title, card.lines.join(" / ")));
    }
    for dept in contact.departments {
        fields.push((dept.department, format!("{} {} ({})", dept.phone, dept.email, dept.topics)));
    }
    emit(render_fields(&fields, format)?);
    Ok(())
}

fn write_config(output: Option<PathBuf>) -> anyhow::Result<()> {
    let config = generate_default_config();

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, &config)?;
            println!("Config written to {:?}", path);
        }
        None => print!("{}", config),
    }
    Ok(())
}

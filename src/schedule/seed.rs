//! Offerings shipped with the site

use chrono::{DateTime, NaiveDate, Utc};

use super::{ClassType, EducationSchedule, LessonPlan, StudentReview};
use crate::domain::CourseType;
use crate::pricing::DiscountInfo;

fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(10, 0, 0))
        .map(|dt| dt.and_utc())
        .unwrap_or_default()
}

fn plans(titles: &[(&str, &str)]) -> Vec<LessonPlan> {
    titles
        .iter()
        .enumerate()
        .map(|(idx, (title, description))| LessonPlan {
            session: idx as u32 + 1,
            title: title.to_string(),
            description: description.to_string(),
        })
        .collect()
}

fn review(author: &str, rating: u8, content: &str, created_at: DateTime<Utc>) -> StudentReview {
    StudentReview {
        author: author.to_string(),
        rating,
        content: content.to_string(),
        created_at,
    }
}

pub(super) fn entries() -> Vec<EducationSchedule> {
    vec![
        EducationSchedule {
            id: 1,
            title: "앱 인벤터 기초 과정".into(),
            instructor: "김AI 강사".into(),
            target_grade: "초등 5-6학년".into(),
            max_students: 15,
            current_students: 12,
            schedule: "매주 토요일 14:00".into(),
            duration_hours: 3,
            sessions: 4,
            price: 80_000,
            class_type: ClassType::Offline,
            course_type: CourseType::AppInventor,
            description: "스마트폰 앱 개발의 첫걸음, 블록 코딩으로 쉽게 배우는 앱 인벤터".into(),
            thumbnail: None,
            youtube_url: None,
            location: Some("AI 메이커랩 교육장".into()),
            lesson_plans: plans(&[
                ("앱 인벤터 시작하기", "개발 환경과 화면 구성 익히기"),
                ("이벤트와 블록", "버튼과 이벤트로 첫 앱 만들기"),
                ("센서 활용", "가속도 센서로 흔들기 게임 만들기"),
                ("나만의 앱 발표", "완성한 앱을 발표하고 공유하기"),
            ]),
            reviews: vec![
                review("학부모 김", 5, "아이가 직접 만든 앱을 자랑해요", at(2025, 3, 8)),
                review("학생 이", 5, "블록 코딩이라 쉬웠어요", at(2025, 3, 15)),
            ],
            discounts: vec![
                DiscountInfo::new("얼리버드", 10, true),
                DiscountInfo::new("형제 할인", 15, false),
            ],
            is_bookmarked: false,
        },
        EducationSchedule {
            id: 2,
            title: "아두이노 기초 및 개발환경 구축".into(),
            instructor: "김강사".into(),
            target_grade: "초등 5-6학년".into(),
            max_students: 15,
            current_students: 8,
            schedule: "매주 토요일 14:00 (6회)".into(),
            duration_hours: 12,
            sessions: 6,
            price: 120_000,
            class_type: ClassType::Offline,
            course_type: CourseType::Arduino,
            description: "아두이노 보드를 활용한 기초 프로그래밍과 센서 제어를 배웁니다.".into(),
            thumbnail: None,
            youtube_url: None,
            location: Some("AI 메이커랩 교육장".into()),
            lesson_plans: plans(&[
                ("아두이노 소개", "보드 구성과 개발환경 설치"),
                ("디지털 출력", "LED 깜빡이기"),
                ("센서 입력", "온도·조도 센서 읽기"),
                ("모터 제어", "서보 모터로 움직이는 작품"),
                ("스마트 홈 키트", "센서와 모터를 묶은 미니 프로젝트"),
                ("작품 발표", "완성 작품 시연"),
            ]),
            reviews: vec![
                review("학생 박", 4, "센서가 신기했어요", at(2025, 4, 5)),
                review("학부모 최", 4, "설명이 친절했습니다", at(2025, 4, 12)),
            ],
            discounts: vec![DiscountInfo::new("할인", 10, true)],
            is_bookmarked: false,
        },
        EducationSchedule {
            id: 3,
            title: "Python 기초 코딩 교육".into(),
            instructor: "이강사".into(),
            target_grade: "중학생".into(),
            max_students: 20,
            current_students: 12,
            schedule: "학교 협의 일정 15:30 (8회)".into(),
            duration_hours: 16,
            sessions: 8,
            price: 200_000,
            class_type: ClassType::Visiting,
            course_type: CourseType::Python,
            description: "Python 프로그래밍 언어의 기초부터 실전 프로젝트까지 학습합니다.".into(),
            thumbnail: None,
            youtube_url: None,
            location: Some("서울시 강남구".into()),
            lesson_plans: plans(&[
                ("변수와 자료형", ""),
                ("조건문과 반복문", ""),
                ("함수", ""),
                ("리스트와 딕셔너리", ""),
            ]),
            reviews: Vec::new(),
            discounts: vec![DiscountInfo::new("할인", 15, true)],
            is_bookmarked: false,
        },
        EducationSchedule {
            id: 4,
            title: "AI 코딩과 머신러닝 입문".into(),
            instructor: "박박사".into(),
            target_grade: "고등학생".into(),
            max_students: 12,
            current_students: 10,
            schedule: "매주 일요일 13:00 (10회)".into(),
            duration_hours: 20,
            sessions: 10,
            price: 300_000,
            class_type: ClassType::Offline,
            course_type: CourseType::Ai,
            description: "AI와 머신러닝의 기초 개념부터 실습까지 체계적으로 학습합니다. \
                          데이터 수집과 전처리, 분류 모델 학습, 이미지 인식 실습을 거쳐 \
                          나만의 인공지능 서비스를 기획하고 완성하는 프로젝트로 마무리합니다."
                .into(),
            thumbnail: None,
            youtube_url: Some("https://www.youtube.com/@aimakerlab".into()),
            location: Some("AI 메이커랩 교육장".into()),
            lesson_plans: plans(&[
                ("인공지능 개요", "머신러닝과 딥러닝의 차이"),
                ("데이터 다루기", "수집과 전처리"),
                ("분류 모델", "학습과 평가"),
                ("이미지 인식", "사전 학습 모델 활용"),
                ("프로젝트", "AI 서비스 기획과 구현"),
            ]),
            reviews: vec![
                review("학생 정", 5, "어려웠지만 보람 있었어요", at(2025, 2, 23)),
                review("학생 한", 4, "프로젝트가 재밌었어요", at(2025, 3, 2)),
                review("학부모 윤", 5, "진로에 도움이 되었습니다", at(2025, 3, 9)),
            ],
            discounts: Vec::new(),
            is_bookmarked: false,
        },
        EducationSchedule {
            id: 5,
            title: "Raspberry Pi 미니 컴퓨터".into(),
            instructor: "최하드웨어 강사".into(),
            target_grade: "중학생".into(),
            max_students: 10,
            current_students: 10,
            schedule: "매주 수요일 15:00".into(),
            duration_hours: 3,
            sessions: 3,
            price: 90_000,
            class_type: ClassType::Offline,
            course_type: CourseType::RaspberryPi,
            description: "라즈베리파이로 만드는 나만의 미니 컴퓨터".into(),
            thumbnail: None,
            youtube_url: None,
            location: Some("AI 메이커랩 교육장".into()),
            lesson_plans: Vec::new(),
            reviews: Vec::new(),
            discounts: Vec::new(),
            is_bookmarked: false,
        },
        EducationSchedule {
            id: 6,
            title: "스크래치 게임 만들기 출강".into(),
            instructor: "정강사".into(),
            target_grade: "초등 3-4학년".into(),
            max_students: 25,
            current_students: 5,
            schedule: "학교 협의 일정".into(),
            duration_hours: 4,
            sessions: 2,
            price: 60_000,
            class_type: ClassType::Visiting,
            course_type: CourseType::Scratch,
            description: "스크래치 블록으로 간단한 게임을 만들며 순차·반복·조건을 익힙니다.".into(),
            thumbnail: None,
            youtube_url: None,
            location: None,
            lesson_plans: plans(&[("캐릭터와 움직임", ""), ("점수와 게임 규칙", "")]),
            reviews: vec![review("교사 강", 5, "아이들 몰입도가 높았어요", at(2025, 5, 20))],
            discounts: vec![DiscountInfo::new("단체 할인", 20, true)],
            is_bookmarked: false,
        },
    ]
}

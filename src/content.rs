//! Company introduction and contact pages

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CoreValue {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TeamMember {
    pub name: &'static str,
    pub position: &'static str,
    pub description: &'static str,
    pub expertise: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Achievement {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct About {
    pub headline: &'static str,
    pub mission: &'static str,
    pub overview: &'static str,
    pub vision: &'static str,
    pub core_values: &'static [CoreValue],
    pub achievements: &'static [Achievement],
    pub team: &'static [TeamMember],
}

/// A block of the contact page: a title and its lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContactCard {
    pub title: &'static str,
    pub lines: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DepartmentContact {
    pub department: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub topics: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Contact {
    pub info: &'static [ContactCard],
    pub transport: &'static [ContactCard],
    pub departments: &'static [DepartmentContact],
}

static ABOUT: About = About {
    headline: "미래를 이끌어갈 창의적인 인재 양성을 위해 최고의 AI와 메이커 교육을 제공하는 교육 전문 기관입니다.",
    mission: "모든 학생이 AI와 기술을 통해 자신의 꿈을 실현할 수 있도록 돕는다",
    overview: "AI MAKER LAB은 중고등학생들이 4차 산업혁명 시대에 필요한 핵심 역량을 기를 수 있도록 \
               체계적이고 실용적인 교육을 제공합니다. 단순한 지식 전달을 넘어서 창의적 사고와 \
               문제 해결 능력을 기를 수 있는 프로젝트 중심의 교육을 진행합니다.",
    vision: "AI와 기술을 통해 더 나은 세상을 만들어가는 창의적이고 혁신적인 인재를 양성하는 \
             대한민국 최고의 교육 기관이 되겠습니다.",
    core_values: &[
        CoreValue {
            title: "창의성",
            description: "학생들의 창의적 사고를 자극하고 혁신적인 아이디어를 실현할 수 있도록 지원합니다.",
        },
        CoreValue {
            title: "기술 혁신",
            description: "최신 기술 트렌드를 교육에 접목하여 미래 지향적인 학습 경험을 제공합니다.",
        },
        CoreValue {
            title: "협업",
            description: "팀워크와 소통을 통해 함께 성장하는 교육 환경을 조성합니다.",
        },
        CoreValue {
            title: "실용성",
            description: "이론과 실습의 균형을 통해 실제 활용 가능한 지식과 기술을 전달합니다.",
        },
    ],
    achievements: &[
        Achievement { value: "500+", label: "수료생" },
        Achievement { value: "50+", label: "프로젝트" },
        Achievement { value: "98%", label: "만족도" },
        Achievement { value: "3년", label: "운영 경력" },
    ],
    team: &[
        TeamMember {
            name: "김AI",
            position: "대표이사 / AI 교육 전문가",
            description: "10년 이상의 AI 연구 경험과 교육 노하우를 바탕으로 학생들에게 최고의 AI 교육을 제공합니다.",
            expertise: &["AI/ML", "교육 설계", "프로젝트 관리"],
        },
        TeamMember {
            name: "박메이커",
            position: "교육 이사 / 메이커 교육 전문가",
            description: "다양한 메이커 프로젝트 경험을 통해 창의적이고 실용적인 교육 프로그램을 개발합니다.",
            expertise: &["아두이노", "3D 프린팅", "IoT"],
        },
        TeamMember {
            name: "이코딩",
            position: "기술 이사 / 프로그래밍 교육 전문가",
            description: "다양한 프로그래밍 언어와 플랫폼에 대한 깊은 이해로 체계적인 코딩 교육을 진행합니다.",
            expertise: &["Python", "JavaScript", "앱 개발"],
        },
        TeamMember {
            name: "최하드웨어",
            position: "연구 이사 / 하드웨어 전문가",
            description: "하드웨어와 소프트웨어의 융합을 통한 혁신적인 교육 솔루션을 연구 개발합니다.",
            expertise: &["Raspberry Pi", "센서", "임베디드"],
        },
    ],
};

static CONTACT: Contact = Contact {
    info: &[
        ContactCard {
            title: "전화 문의",
            lines: &["02-1234-5678", "평일 09:00 - 18:00"],
        },
        ContactCard {
            title: "이메일",
            lines: &["info@aimakerlab.com", "24시간 접수 가능"],
        },
        ContactCard {
            title: "주소",
            lines: &["서울시 강남구 테헤란로 123", "(우) 06234"],
        },
        ContactCard {
            title: "운영 시간",
            lines: &["평일: 09:00 - 18:00", "토요일: 10:00 - 16:00", "일요일 및 공휴일 휴무"],
        },
    ],
    transport: &[
        ContactCard {
            title: "지하철",
            lines: &["2호선 강남역 3번 출구 도보 5분", "9호선 신논현역 1번 출구 도보 7분"],
        },
        ContactCard {
            title: "버스",
            lines: &["간선: 146, 360, 740", "지선: 3412, 6411", "광역: 9303, 9408"],
        },
        ContactCard {
            title: "주차",
            lines: &["건물 지하 1-3층 주차 가능", "2시간 무료 주차 제공", "발렛파킹 서비스 이용 가능"],
        },
    ],
    departments: &[
        DepartmentContact {
            department: "교육 문의",
            phone: "02-1234-5678",
            email: "education@aimakerlab.com",
            topics: "교육 과정, 수강 신청, 일정 문의",
        },
        DepartmentContact {
            department: "기업 교육",
            phone: "02-1234-5679",
            email: "corporate@aimakerlab.com",
            topics: "기업 맞춤 교육, 단체 교육 문의",
        },
        DepartmentContact {
            department: "제품 문의",
            phone: "02-1234-5680",
            email: "products@aimakerlab.com",
            topics: "교육 키트, 제품 구매 문의",
        },
        DepartmentContact {
            department: "일반 문의",
            phone: "02-1234-5681",
            email: "info@aimakerlab.com",
            topics: "기타 문의사항, 제휴 문의",
        },
    ],
};

pub fn about() -> &'static About {
    &ABOUT
}

pub fn contact() -> &'static Contact {
    &CONTACT
}

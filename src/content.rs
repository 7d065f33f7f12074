//! Static portfolio content rendered by the views.

pub const OWNER_NAME: &str = "Sourabh Singh Mandloi";
pub const OWNER_SHORT_NAME: &str = "Sourabh Singh";
pub const TAGLINE: &str = "Software Engineer & AIML Enthusiast";
pub const EMAIL: &str = "sourabhsinghmandloi122@gmail.com";
pub const LOCATION: &str = "Indore, Madhya Pradesh, India";
pub const RESUME_PATH: &str = "/resume.pdf";
pub const RESUME_FILE_NAME: &str = "Sourabh-Resume.pdf";

/// Number of projects shown on the home page.
pub const FEATURED_PROJECT_COUNT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialKind {
    GitHub,
    LinkedIn,
    Email,
}

#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub name: &'static str,
    pub url: &'static str,
}

pub static SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        kind: SocialKind::GitHub,
        name: "GitHub",
        url: "https://github.com/sourabhsingh88",
    },
    SocialLink {
        kind: SocialKind::LinkedIn,
        name: "LinkedIn",
        url: "https://www.linkedin.com/in/sourabh-singh-mandloi/",
    },
    SocialLink {
        kind: SocialKind::Email,
        name: "Email",
        url: "mailto:sourabhsinghmandloi122@gmail.com",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub title: &'static str,
    pub description: &'static str,
    pub details: &'static str,
}

pub static SKILLS: &[Skill] = &[
    Skill {
        title: "Java & Spring Boot",
        description: "Java development with Spring Boot, RESTful APIs and enterprise application architecture.",
        details: "Full-stack applications on Spring Boot with 10+ RESTful APIs, optimized JPA/Hibernate queries, microservices and role-based access control.",
    },
    Skill {
        title: "Python & FastAPI",
        description: "High-performance API development, automation and trading systems with FastAPI.",
        details: "Automated trading platforms on FastAPI and MetaTrader5 with risk management, serving 10,000+ simulated requests a day.",
    },
    Skill {
        title: "AI/ML & Computer Vision",
        description: "Machine learning, deep learning and computer vision with MobileNet and model training.",
        details: "An ML-powered image search engine on MobileNet v2 with a cosine-similarity search pipeline.",
    },
    Skill {
        title: "Web Development",
        description: "Angular frontends, HTML/CSS and responsive web applications.",
        details: "10+ Angular components and responsive applications built around modern UI/UX design.",
    },
    Skill {
        title: "Database Management",
        description: "MySQL and Oracle, relational schema design and query optimization.",
        details: "Normalized MySQL schemas with 20+ tables. Oracle Cloud Database Services 2025 Certified Professional.",
    },
    Skill {
        title: "DevOps & Testing",
        description: "Docker, CI/CD, unit and integration testing, performance work.",
        details: "SDLC and CI/CD practices, Docker, automated testing with PyTest and Selenium.",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct EducationEntry {
    pub degree: &'static str,
    pub institution: &'static str,
    pub location: &'static str,
    pub duration: &'static str,
    pub grade: &'static str,
    pub achievements: &'static [&'static str],
    pub courses: &'static [&'static str],
    pub skills: &'static [&'static str],
}

pub static EDUCATION: &[EducationEntry] = &[
    EducationEntry {
        degree: "B.Tech., AIML (Minor in Computer Science and Engineering)",
        institution: "Institute of Engineering And Technology, Indore",
        location: "Indore, MP",
        duration: "July 2022 - June 2026",
        grade: "CGPA: 6.8/10",
        achievements: &[
            "AWS Academy Graduate - Machine Learning Foundations",
            "Cognitive Classes - SQL and Relational Databases",
            "Oracle - Cloud Database Services 2025 Certified Professional",
            "NVIDIA - NLP",
        ],
        courses: &[
            "Artificial Intelligence & Machine Learning",
            "Data Structures and Algorithms",
            "Database Management Systems",
            "Computer Vision and Deep Learning",
            "NLP",
        ],
        skills: &["Java", "Python", "MySQL", "AI/ML", "Spring Boot", "FastAPI"],
    },
    EducationEntry {
        degree: "Higher Secondary Certificate (XII CBSE)",
        institution: "Sandapi Academy",
        location: "Mandleshwar, Madhya Pradesh",
        duration: "2022",
        grade: "Score: 64%",
        achievements: &[
            "School topper in Mathematics and Computer Science",
            "Participated in state-level science exhibition",
            "Active member of the school's coding club",
        ],
        courses: &["Mathematics", "Physics", "Chemistry", "Computer Science"],
        skills: &["C++", "Basic Web Development", "Problem Solving"],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct TechSkill {
    pub name: &'static str,
    /// Proficiency in percent.
    pub level: u8,
    pub related: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct TechTab {
    pub label: &'static str,
    pub skills: &'static [TechSkill],
}

pub static TECH_TABS: &[TechTab] = &[
    TechTab {
        label: "Programming",
        skills: &[
            TechSkill {
                name: "Java",
                level: 90,
                related: &["Spring Boot", "Spring MVC", "JPA/Hibernate"],
            },
            TechSkill {
                name: "Python",
                level: 90,
                related: &["FastAPI", "Flask", "NumPy", "Pandas", "Scikit-learn"],
            },
            TechSkill {
                name: "Spring Boot",
                level: 90,
                related: &["Spring MVC", "JPA/Hibernate", "REST APIs"],
            },
            TechSkill {
                name: "FastAPI",
                level: 90,
                related: &["Pydantic", "MetaTrader5", "Automation"],
            },
            TechSkill {
                name: "SQL",
                level: 85,
                related: &["MySQL", "Oracle"],
            },
            TechSkill {
                name: "HTML/CSS",
                level: 80,
                related: &[],
            },
        ],
    },
    TechTab {
        label: "Technical",
        skills: &[
            TechSkill {
                name: "REST APIs",
                level: 90,
                related: &[],
            },
            TechSkill {
                name: "AI/ML",
                level: 90,
                related: &[],
            },
            TechSkill {
                name: "OOP",
                level: 85,
                related: &[],
            },
            TechSkill {
                name: "Data Structures & Algorithms",
                level: 85,
                related: &[],
            },
            TechSkill {
                name: "SDLC",
                level: 80,
                related: &[],
            },
            TechSkill {
                name: "DevOps",
                level: 75,
                related: &[],
            },
        ],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub highlights: &'static [&'static str],
    pub github: &'static str,
    pub live: Option<&'static str>,
}

/// Every project, featured ones first.
pub static PROJECTS: &[Project] = &[
    Project {
        title: "Automated Trading Platform",
        description: "An automated trading bot built on FastAPI, MetaTrader5 and Python that executes trades with custom strategies, backtested on historical data.",
        technologies: &["Python", "FastAPI", "MetaTrader5", "Pydantic"],
        highlights: &[
            "25-30% higher returns compared to manual strategies",
            "Risk management features reducing manual errors by 80%",
            "Scalable APIs supporting 10,000+ simulated requests/day",
        ],
        github: "https://github.com/sourabhsingh88/TradingBot",
        live: None,
    },
    Project {
        title: "Image Search Engine",
        description: "An ML-powered image search engine using MobileNet with a search pipeline optimized around cosine similarity.",
        technologies: &["Python", "Flask", "MobileNET v2", "Machine Learning"],
        highlights: &[
            "Retrieval accuracy boosted by 85%+ using MobileNet",
            "Query time cut by 40%",
            "100% code coverage",
        ],
        github: "https://github.com/sourabhsingh88/ImageSearchEngine",
        live: None,
    },
    Project {
        title: "Trip Planner",
        description: "A full-stack trip management app with role-based access (Admin, Planner, User) backed by Spring Boot REST APIs.",
        technologies: &["Spring Boot", "Angular", "MySQL", "SDLC"],
        highlights: &[
            "10+ RESTful APIs improving data handling speed by 30%",
            "Role-based access control",
            "MySQL schema with 20+ normalized tables",
        ],
        github: "https://github.com/sourabhsingh88/Trip--Planner",
        live: None,
    },
    Project {
        title: "Image Recognition using Flask and Google Gemini AI",
        description: "Upload an image and get an AI-generated description, read aloud through text-to-speech.",
        technologies: &["Python", "Flask", "Google Gemini AI", "gTTS", "Pillow (PIL)", "HTML/CSS/JS"],
        highlights: &[],
        github: "https://github.com/sourabhsingh88/Image-recognition",
        live: None,
    },
    Project {
        title: "CRM – Property Management Platform",
        description: "A real-estate CRM for property listings, leads and client interactions with a FastAPI backend and an Angular frontend.",
        technologies: &["Python", "FastAPI", "Angular", "MySQL"],
        highlights: &[],
        github: "https://github.com/sourabhsingh88/CRM-Property",
        live: None,
    },
    Project {
        title: "Fit Plan Hub",
        description: "A fitness platform connecting users with verified trainers: follow trainers, browse plans in a feed and subscribe to premium plans.",
        technologies: &["Python", "FastAPI", "Angular", "MySQL"],
        highlights: &[],
        github: "https://github.com/sourabhsingh88/Fit_Plan_Hub",
        live: None,
    },
];

pub fn featured_projects() -> &'static [Project] {
    &PROJECTS[..FEATURED_PROJECT_COUNT.min(PROJECTS.len())]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_featured_projects_prefix() {
        let featured = featured_projects();
        assert_eq!(featured.len(), FEATURED_PROJECT_COUNT);
        for (f, p) in featured.iter().zip(PROJECTS.iter()) {
            assert_eq!(f.title, p.title);
        }
        // featured cards render highlights, the listing does not
        assert!(featured.iter().all(|p| !p.highlights.is_empty()));
    }

    #[test]
    fn test_project_titles_unique() {
        let titles = PROJECTS.iter().map(|p| p.title).collect::<HashSet<_>>();
        assert_eq!(titles.len(), PROJECTS.len());
        assert!(PROJECTS.iter().all(|p| p.github.starts_with("https://github.com/")));
    }

    #[test]
    fn test_tech_levels_are_percentages() {
        assert_eq!(TECH_TABS.len(), 2);
        for tab in TECH_TABS {
            assert!(!tab.skills.is_empty(), "tab {} is empty", tab.label);
            assert!(tab.skills.iter().all(|s| s.level <= 100));
        }
    }

    #[test]
    fn test_social_links() {
        let email = SOCIAL_LINKS
            .iter()
            .find(|l| l.kind == SocialKind::Email)
            .expect("email link should exist");
        assert_eq!(email.url, format!("mailto:{EMAIL}"));
    }
}

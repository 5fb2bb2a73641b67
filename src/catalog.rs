use crate::models::{Difficulty, Internship, InternshipType};
use chrono::NaiveDate;
use std::collections::HashSet;
use std::path::Path;
use std::sync::{Arc, OnceLock};
use thiserror::Error;

/// Errors that can occur while loading an alternative catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate internship id: {0}")]
    DuplicateId(String),

    #[error("Catalog contains no internships")]
    Empty,
}

/// Immutable, ordered set of internship listings
///
/// Entries are shared: match results hold clones of the same `Arc`.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<Arc<Internship>>,
}

impl Catalog {
    /// Build a catalog, rejecting empty input and duplicate ids
    pub fn new(internships: Vec<Internship>) -> Result<Self, CatalogError> {
        if internships.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut ids = HashSet::with_capacity(internships.len());
        for internship in &internships {
            if !ids.insert(internship.id.as_str()) {
                return Err(CatalogError::DuplicateId(internship.id.clone()));
            }
        }

        Ok(Self {
            entries: internships.into_iter().map(Arc::new).collect(),
        })
    }

    /// Parse a JSON array of internships
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let internships: Vec<Internship> = serde_json::from_str(json)?;
        Self::new(internships)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let catalog = Self::from_json_str(&raw)?;
        tracing::info!(
            "Loaded {} internships from {}",
            catalog.len(),
            path.as_ref().display()
        );
        Ok(catalog)
    }

    /// The built-in reference catalog, created once per process
    pub fn reference() -> &'static Catalog {
        static REFERENCE: OnceLock<Catalog> = OnceLock::new();
        REFERENCE.get_or_init(|| Catalog {
            entries: SEEDS.iter().map(|seed| Arc::new(seed.to_internship())).collect(),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Internship>> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[Arc<Internship>] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&Arc<Internship>> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Static seed record for the reference catalog
struct Seed {
    id: &'static str,
    title: &'static str,
    company: &'static str,
    location: &'static str,
    work_type: InternshipType,
    duration: &'static str,
    stipend: &'static str,
    description: &'static str,
    requirements: &'static [&'static str],
    skills: &'static [&'static str],
    application_deadline: (i32, u32, u32),
    start_date: (i32, u32, u32),
    applicants: u32,
    required_education: &'static [&'static str],
    category: &'static str,
    difficulty: Difficulty,
}

impl Seed {
    fn to_internship(&self) -> Internship {
        Internship {
            id: self.id.to_string(),
            title: self.title.to_string(),
            company: self.company.to_string(),
            location: self.location.to_string(),
            work_type: self.work_type,
            duration: self.duration.to_string(),
            stipend: self.stipend.to_string(),
            description: self.description.to_string(),
            requirements: to_strings(self.requirements),
            skills: to_strings(self.skills),
            application_deadline: date(self.application_deadline),
            start_date: date(self.start_date),
            applicants: self.applicants,
            required_education: to_strings(self.required_education),
            category: self.category.to_string(),
            difficulty: self.difficulty,
        }
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn date((year, month, day): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

const SEEDS: &[Seed] = &[
    Seed {
        id: "1",
        title: "Frontend Developer Intern",
        company: "TechCorp India",
        location: "Bengaluru",
        work_type: InternshipType::OnSite,
        duration: "3 months",
        stipend: "₹15,000/month",
        description: "Develop modern web applications using React and TypeScript. Work with UI/UX designers to create engaging user experiences.",
        requirements: &[
            "Currently pursuing B.Tech/MCA in Computer Science",
            "Knowledge of JavaScript, React, HTML/CSS",
            "Understanding of responsive design",
            "Good problem-solving skills",
        ],
        skills: &["JavaScript", "React", "HTML/CSS", "UI/UX Design"],
        application_deadline: (2024, 2, 15),
        start_date: (2024, 3, 1),
        applicants: 156,
        required_education: &["B.Tech - Computer Science", "BCA", "BSc - Computer Science", "MCA"],
        category: "web-dev",
        difficulty: Difficulty::Beginner,
    },
    Seed {
        id: "2",
        title: "Data Science Intern",
        company: "Analytics Pro",
        location: "Remote",
        work_type: InternshipType::Remote,
        duration: "6 months",
        stipend: "₹18,000/month",
        description: "Work on machine learning projects, analyze large datasets, and build predictive models using Python and R.",
        requirements: &[
            "Background in Statistics, Mathematics, or Computer Science",
            "Knowledge of Python and data analysis libraries",
            "Understanding of statistical concepts and machine learning",
            "Experience with SQL databases",
        ],
        skills: &["Python", "Machine Learning", "SQL", "Data Analysis", "Statistics"],
        application_deadline: (2024, 2, 20),
        start_date: (2024, 3, 15),
        applicants: 89,
        required_education: &["B.Tech - Computer Science", "BSc - Computer Science", "MCA", "BSc - IT"],
        category: "data-science",
        difficulty: Difficulty::Intermediate,
    },
    Seed {
        id: "3",
        title: "Digital Marketing Intern",
        company: "Brand Builders",
        location: "Mumbai",
        work_type: InternshipType::Hybrid,
        duration: "4 months",
        stipend: "₹12,000/month",
        description: "Create digital marketing campaigns, manage social media accounts, and analyze marketing metrics.",
        requirements: &[
            "Graduate in Marketing, Communications, or related field",
            "Understanding of social media platforms",
            "Creative thinking and content creation skills",
            "Basic knowledge of digital marketing tools",
        ],
        skills: &["Digital Marketing", "Content Writing", "Social Media", "Analytics"],
        application_deadline: (2024, 2, 25),
        start_date: (2024, 3, 10),
        applicants: 234,
        required_education: &["BBA", "MBA - Marketing", "Other"],
        category: "digital-marketing",
        difficulty: Difficulty::Beginner,
    },
    Seed {
        id: "4",
        title: "Mobile App Developer Intern",
        company: "AppTech Solutions",
        location: "Hyderabad",
        work_type: InternshipType::OnSite,
        duration: "4 months",
        stipend: "₹16,000/month",
        description: "Develop mobile applications for Android and iOS platforms using React Native and Flutter.",
        requirements: &[
            "Computer Science or IT background",
            "Knowledge of mobile development frameworks",
            "Understanding of mobile UI/UX principles",
            "Problem-solving and debugging skills",
        ],
        skills: &["React Native", "Flutter", "JavaScript", "Mobile Development"],
        application_deadline: (2024, 2, 18),
        start_date: (2024, 3, 5),
        applicants: 127,
        required_education: &["B.Tech - Computer Science", "BCA", "BSc - IT", "MCA"],
        category: "mobile-dev",
        difficulty: Difficulty::Intermediate,
    },
    Seed {
        id: "5",
        title: "AI/ML Research Intern",
        company: "AI Research Lab",
        location: "Pune",
        work_type: InternshipType::OnSite,
        duration: "6 months",
        stipend: "₹20,000/month",
        description: "Conduct research in artificial intelligence and machine learning, work on cutting-edge AI projects.",
        requirements: &[
            "Strong background in Computer Science or Mathematics",
            "Experience with Python, TensorFlow, or PyTorch",
            "Understanding of machine learning algorithms",
            "Research aptitude and analytical thinking",
        ],
        skills: &["Python", "Machine Learning", "AI", "TensorFlow", "Research"],
        application_deadline: (2024, 2, 22),
        start_date: (2024, 3, 20),
        applicants: 67,
        required_education: &["B.Tech - Computer Science", "MCA", "BSc - Computer Science"],
        category: "ai-ml",
        difficulty: Difficulty::Advanced,
    },
    Seed {
        id: "6",
        title: "Cybersecurity Intern",
        company: "SecureNet Systems",
        location: "Chennai",
        work_type: InternshipType::OnSite,
        duration: "3 months",
        stipend: "₹14,000/month",
        description: "Learn about network security, ethical hacking, and cybersecurity best practices.",
        requirements: &[
            "Computer Science or IT background",
            "Interest in cybersecurity and ethical hacking",
            "Basic understanding of networking concepts",
            "Attention to detail and analytical mindset",
        ],
        skills: &["Cybersecurity", "Networking", "Ethical Hacking", "Security Analysis"],
        application_deadline: (2024, 2, 28),
        start_date: (2024, 3, 12),
        applicants: 98,
        required_education: &["B.Tech - Computer Science", "BSc - Computer Science", "BCA", "BSc - IT"],
        category: "cybersecurity",
        difficulty: Difficulty::Intermediate,
    },
    Seed {
        id: "7",
        title: "Business Analysis Intern",
        company: "Consulting Corp",
        location: "Delhi NCR",
        work_type: InternshipType::Hybrid,
        duration: "5 months",
        stipend: "₹13,000/month",
        description: "Analyze business processes, create documentation, and support digital transformation initiatives.",
        requirements: &[
            "Business, Economics, or Engineering background",
            "Strong analytical and communication skills",
            "Understanding of business processes",
            "Proficiency in Excel and data analysis",
        ],
        skills: &["Business Analysis", "Excel", "Project Management", "Communication"],
        application_deadline: (2024, 2, 26),
        start_date: (2024, 3, 8),
        applicants: 167,
        required_education: &["BBA", "MBA - Finance", "MBA - Operations", "B.Tech - Mechanical"],
        category: "business-analysis",
        difficulty: Difficulty::Beginner,
    },
    Seed {
        id: "8",
        title: "Content Writing Intern",
        company: "Media House",
        location: "Remote",
        work_type: InternshipType::Remote,
        duration: "3 months",
        stipend: "₹8,000/month",
        description: "Create engaging content for blogs, social media, and marketing campaigns across various industries.",
        requirements: &[
            "Any graduate with strong writing skills",
            "Creativity and ability to research topics",
            "Understanding of SEO and content marketing",
            "Good command over English language",
        ],
        skills: &["Content Writing", "SEO", "Creative Writing", "Communication"],
        application_deadline: (2024, 2, 24),
        start_date: (2024, 3, 6),
        applicants: 289,
        required_education: &["Other", "BBA", "12th Grade"],
        category: "content-writing",
        difficulty: Difficulty::Beginner,
    },
];

//! Static reference data: keyword families, the next-step course catalog and
//! the state adjacency map. Everything here is compile-time constant.

use crate::models::candidate::FutureCourse;
use crate::recommend::level::EducationLevelKey;
use crate::recommend::stream::StreamKey;

// ────────────────────────────────────────────────────────────────────────────
// Stream keywords
// ────────────────────────────────────────────────────────────────────────────

/// Keyword families used to classify free-text course names, in priority order.
/// Matching is lower-case substring containment; first family to hit wins.
pub const COURSE_STREAM_RULES: &[(StreamKey, &[&str])] = &[
    (
        StreamKey::ComputerScience,
        &[
            "cse",
            "computer",
            " it",
            "bca",
            "software",
            "data",
            "information technology",
            "mca",
        ],
    ),
    (
        StreamKey::Medical,
        &[
            "mbbs", "medical", "medicine", "bds", "nursing", "pharma", "biology", "pcb", "neet",
            "bams",
        ],
    ),
    (
        StreamKey::Commerce,
        &[
            "commerce",
            "bcom",
            "b.com",
            "mba",
            "bba",
            "finance",
            "accounting",
            "economics",
            "chartered",
        ],
    ),
    (
        StreamKey::Arts,
        &[
            "arts",
            "b.a",
            "humanities",
            "literature",
            "history",
            "psychology",
            "journalism",
            "design",
        ],
    ),
    (
        StreamKey::Engineering,
        &[
            "engineering",
            "btech",
            "b.tech",
            "mechanical",
            "electrical",
            "civil",
        ],
    ),
];

/// Keywords that mark a college (specialisation, type or courses) as serving a stream.
pub fn stream_keywords(stream: StreamKey) -> &'static [&'static str] {
    match stream {
        StreamKey::ComputerScience => &[
            "computer",
            "engineering",
            "technology",
            "software",
            "computing",
            "information technology",
            "data science",
            "bca",
            "mca",
        ],
        StreamKey::Medical => &[
            "medical",
            "medicine",
            "health",
            "nursing",
            "pharmacy",
            "dental",
            "ayurved",
            "paramedical",
            "mbbs",
        ],
        StreamKey::Commerce => &[
            "commerce",
            "management",
            "business",
            "finance",
            "accounting",
            "economics",
        ],
        StreamKey::Arts => &[
            "arts",
            "humanities",
            "literature",
            "social science",
            "design",
            "languages",
            "journalism",
        ],
        StreamKey::Science => &[
            "science",
            "research",
            "physics",
            "chemistry",
            "mathematics",
            "biotechnology",
        ],
        StreamKey::Engineering => &[
            "engineering",
            "technology",
            "technical",
            "polytechnic",
            "b.tech",
            "btech",
        ],
    }
}

// ────────────────────────────────────────────────────────────────────────────
// State adjacency
// ────────────────────────────────────────────────────────────────────────────

const NEIGHBORING_STATES: &[(&str, &[&str])] = &[
    ("Andhra Pradesh", &["Telangana", "Karnataka", "Tamil Nadu", "Odisha", "Chhattisgarh"]),
    ("Arunachal Pradesh", &["Assam", "Nagaland"]),
    (
        "Assam",
        &[
            "Arunachal Pradesh",
            "Nagaland",
            "Manipur",
            "Mizoram",
            "Tripura",
            "Meghalaya",
            "West Bengal",
        ],
    ),
    ("Bihar", &["Uttar Pradesh", "Jharkhand", "West Bengal"]),
    ("Chandigarh", &["Punjab", "Haryana"]),
    (
        "Chhattisgarh",
        &[
            "Madhya Pradesh",
            "Maharashtra",
            "Telangana",
            "Andhra Pradesh",
            "Odisha",
            "Jharkhand",
            "Uttar Pradesh",
        ],
    ),
    ("Delhi", &["Haryana", "Uttar Pradesh"]),
    ("Goa", &["Maharashtra", "Karnataka"]),
    ("Gujarat", &["Rajasthan", "Madhya Pradesh", "Maharashtra"]),
    (
        "Haryana",
        &["Punjab", "Himachal Pradesh", "Uttar Pradesh", "Rajasthan", "Delhi", "Chandigarh"],
    ),
    (
        "Himachal Pradesh",
        &[
            "Jammu and Kashmir",
            "Ladakh",
            "Punjab",
            "Haryana",
            "Uttarakhand",
            "Uttar Pradesh",
        ],
    ),
    ("Jammu and Kashmir", &["Ladakh", "Himachal Pradesh", "Punjab"]),
    (
        "Jharkhand",
        &["Bihar", "Uttar Pradesh", "Chhattisgarh", "Odisha", "West Bengal"],
    ),
    (
        "Karnataka",
        &["Goa", "Maharashtra", "Telangana", "Andhra Pradesh", "Tamil Nadu", "Kerala"],
    ),
    ("Kerala", &["Karnataka", "Tamil Nadu"]),
    ("Ladakh", &["Jammu and Kashmir", "Himachal Pradesh"]),
    (
        "Madhya Pradesh",
        &["Rajasthan", "Uttar Pradesh", "Chhattisgarh", "Maharashtra", "Gujarat"],
    ),
    (
        "Maharashtra",
        &["Gujarat", "Madhya Pradesh", "Chhattisgarh", "Telangana", "Karnataka", "Goa"],
    ),
    ("Manipur", &["Nagaland", "Assam", "Mizoram"]),
    ("Meghalaya", &["Assam"]),
    ("Mizoram", &["Assam", "Manipur", "Tripura"]),
    ("Nagaland", &["Assam", "Arunachal Pradesh", "Manipur"]),
    ("Odisha", &["West Bengal", "Jharkhand", "Chhattisgarh", "Andhra Pradesh"]),
    ("Puducherry", &["Tamil Nadu"]),
    (
        "Punjab",
        &["Jammu and Kashmir", "Himachal Pradesh", "Haryana", "Rajasthan", "Chandigarh"],
    ),
    (
        "Rajasthan",
        &["Punjab", "Haryana", "Uttar Pradesh", "Madhya Pradesh", "Gujarat"],
    ),
    ("Sikkim", &["West Bengal"]),
    ("Tamil Nadu", &["Kerala", "Karnataka", "Andhra Pradesh", "Puducherry"]),
    (
        "Telangana",
        &["Maharashtra", "Chhattisgarh", "Andhra Pradesh", "Karnataka"],
    ),
    ("Tripura", &["Assam", "Mizoram"]),
    (
        "Uttar Pradesh",
        &[
            "Uttarakhand",
            "Himachal Pradesh",
            "Haryana",
            "Delhi",
            "Rajasthan",
            "Madhya Pradesh",
            "Chhattisgarh",
            "Jharkhand",
            "Bihar",
        ],
    ),
    ("Uttarakhand", &["Himachal Pradesh", "Uttar Pradesh"]),
    (
        "West Bengal",
        &["Sikkim", "Bihar", "Jharkhand", "Odisha", "Assam"],
    ),
];

/// Neighbors of `state` (case-insensitive). Unknown states have none.
pub fn neighboring_states(state: &str) -> &'static [&'static str] {
    let state = state.trim();
    NEIGHBORING_STATES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(state))
        .map(|(_, neighbors)| *neighbors)
        .unwrap_or(&[])
}

/// The preferred state followed by its neighbors, or `None` when no state is set.
pub fn region_states(preferred_state: &str) -> Option<Vec<String>> {
    let state = preferred_state.trim();
    if state.is_empty() {
        return None;
    }
    let mut states = vec![state.to_string()];
    states.extend(neighboring_states(state).iter().map(|s| s.to_string()));
    Some(states)
}

// ────────────────────────────────────────────────────────────────────────────
// Next-step course catalog
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub code: &'static str,
    pub tags: &'static [&'static str],
    pub duration: &'static str,
    pub careers: &'static [&'static str],
}

impl CatalogEntry {
    pub fn to_course(&self) -> FutureCourse {
        FutureCourse {
            name: self.name.to_string(),
            code: self.code.to_string(),
            tags: self.tags.iter().map(|t| t.to_string()).collect(),
            duration: Some(self.duration.to_string()),
            description: None,
            career_paths: self.careers.iter().map(|c| c.to_string()).collect(),
        }
    }
}

const fn entry(
    name: &'static str,
    code: &'static str,
    tags: &'static [&'static str],
    duration: &'static str,
    careers: &'static [&'static str],
) -> CatalogEntry {
    CatalogEntry {
        name,
        code,
        tags,
        duration,
        careers,
    }
}

const TWELFTH_SCIENCE_PCM: &[CatalogEntry] = &[
    entry("B.Tech Computer Science", "btech-cse", &["engineering", "computer", "programming"], "4 years", &["Software Engineer", "Data Engineer"]),
    entry("B.Tech Electronics & Communication", "btech-ece", &["engineering", "electronics"], "4 years", &["Embedded Engineer", "Telecom Engineer"]),
    entry("B.Tech Mechanical Engineering", "btech-me", &["engineering", "mechanical"], "4 years", &["Design Engineer", "Production Engineer"]),
    entry("BCA Computer Applications", "bca", &["computer", "programming"], "3 years", &["Web Developer", "System Administrator"]),
    entry("B.Sc Data Science", "bsc-ds", &["data", "statistics"], "3 years", &["Data Analyst", "ML Engineer"]),
    entry("B.Sc Physics", "bsc-phy", &["science", "physics", "research"], "3 years", &["Research Scientist", "Lecturer"]),
    entry("B.Arch Architecture", "barch", &["design", "architecture"], "5 years", &["Architect", "Urban Planner"]),
    entry("NDA Defence Services", "nda", &["defence", "leadership"], "3 years", &["Armed Forces Officer"]),
];

const TWELFTH_SCIENCE_PCB: &[CatalogEntry] = &[
    entry("MBBS Medicine", "mbbs", &["medical", "healthcare"], "5.5 years", &["Doctor", "Surgeon"]),
    entry("BDS Dental Surgery", "bds", &["medical", "dental"], "5 years", &["Dentist"]),
    entry("B.Pharm Pharmacy", "bpharm", &["pharmacy", "healthcare"], "4 years", &["Pharmacist", "Drug Inspector"]),
    entry("B.Sc Nursing", "bsc-nursing", &["healthcare", "nursing"], "4 years", &["Nurse", "Nursing Officer"]),
    entry("BAMS Ayurveda", "bams", &["medical", "ayurveda"], "5.5 years", &["Ayurvedic Doctor"]),
    entry("BPT Physiotherapy", "bpt", &["healthcare", "physiotherapy"], "4.5 years", &["Physiotherapist"]),
    entry("B.Sc Biotechnology", "bsc-biotech", &["biology", "research"], "3 years", &["Biotechnologist", "Lab Scientist"]),
];

const TWELFTH_COMMERCE: &[CatalogEntry] = &[
    entry("B.Com Honours", "bcom-hons", &["commerce", "accounting"], "3 years", &["Accountant", "Auditor"]),
    entry("BBA Business Administration", "bba", &["business", "management"], "3 years", &["Business Analyst", "Manager"]),
    entry("Chartered Accountancy Foundation", "ca-foundation", &["accounting", "finance"], "4-5 years", &["Chartered Accountant"]),
    entry("Company Secretary Executive", "cs-executive", &["commerce", "law"], "3 years", &["Company Secretary"]),
    entry("BMS Management Studies", "bms", &["management", "business"], "3 years", &["Operations Manager"]),
    entry("Economics Honours", "ba-eco", &["economics", "research"], "3 years", &["Economist", "Policy Analyst"]),
    entry("B.Sc Actuarial Science", "bsc-actuarial", &["finance", "statistics"], "3 years", &["Actuary", "Risk Analyst"]),
];

const TWELFTH_ARTS: &[CatalogEntry] = &[
    entry("BA Psychology", "ba-psy", &["humanities", "psychology"], "3 years", &["Counsellor", "HR Specialist"]),
    entry("BA LLB Integrated Law", "ballb", &["law", "humanities"], "5 years", &["Lawyer", "Legal Advisor"]),
    entry("BJMC Journalism & Mass Communication", "bjmc", &["media", "writing"], "3 years", &["Journalist", "Content Strategist"]),
    entry("B.Des Design", "bdes", &["design", "creative"], "4 years", &["Product Designer", "UX Designer"]),
    entry("BFA Fine Arts", "bfa", &["arts", "creative"], "4 years", &["Artist", "Illustrator"]),
    entry("BA Economics", "ba-econ", &["economics", "humanities"], "3 years", &["Economist", "Civil Servant"]),
    entry("BHM Hotel Management", "bhm", &["hospitality", "management"], "4 years", &["Hotel Manager", "Event Planner"]),
];

const DIPLOMA_CS: &[CatalogEntry] = &[
    entry("B.Tech Computer Science (Lateral Entry)", "btech-le-cse", &["engineering", "computer", "programming"], "3 years", &["Software Engineer"]),
    entry("BCA Computer Applications", "bca", &["computer", "programming"], "3 years", &["Web Developer"]),
    entry("B.Sc Information Technology", "bsc-infotech", &["technology", "computer"], "3 years", &["IT Support Engineer", "Network Administrator"]),
    entry("Full Stack Development Certification", "fsd-cert", &["programming", "technology"], "6 months", &["Full Stack Developer"]),
    entry("Cloud & DevOps Certification", "cloud-cert", &["technology", "cloud"], "6 months", &["DevOps Engineer", "Cloud Engineer"]),
];

const DIPLOMA_ENGINEERING: &[CatalogEntry] = &[
    entry("B.Tech Mechanical (Lateral Entry)", "btech-le-me", &["engineering", "mechanical"], "3 years", &["Mechanical Engineer"]),
    entry("B.Tech Civil (Lateral Entry)", "btech-le-ce", &["engineering", "civil"], "3 years", &["Site Engineer", "Structural Engineer"]),
    entry("B.Tech Electrical (Lateral Entry)", "btech-le-ee", &["engineering", "electrical"], "3 years", &["Electrical Engineer"]),
    entry("AMIE Associate Membership", "amie", &["engineering", "technical"], "3-4 years", &["Engineer"]),
    entry("Industrial Automation Certification", "automation-cert", &["technology", "automation"], "6 months", &["Automation Technician"]),
];

const UG_CS: &[CatalogEntry] = &[
    entry("M.Tech Computer Science", "mtech-cse", &["engineering", "computer", "research"], "2 years", &["Senior Engineer", "Researcher"]),
    entry("MCA Computer Applications", "mca", &["computer", "programming"], "2 years", &["Software Developer"]),
    entry("M.Sc Data Science", "msc-ds", &["data", "statistics"], "2 years", &["Data Scientist"]),
    entry("MS Computer Science (Abroad)", "ms-abroad", &["computer", "research"], "2 years", &["Research Engineer"]),
    entry("PG Diploma in AI & Machine Learning", "pgd-aiml", &["data", "technology"], "1 year", &["ML Engineer"]),
    entry("MBA Technology Management", "mba-tech", &["management", "business"], "2 years", &["Product Manager"]),
    entry("Cybersecurity Certification", "cyber-cert", &["technology", "security"], "6 months", &["Security Analyst"]),
];

const UG_MEDICAL: &[CatalogEntry] = &[
    entry("MD General Medicine", "md-gm", &["medical", "healthcare"], "3 years", &["Physician"]),
    entry("MS General Surgery", "ms-surgery", &["medical", "surgery"], "3 years", &["Surgeon"]),
    entry("MPH Public Health", "mph", &["healthcare", "research"], "2 years", &["Epidemiologist", "Health Officer"]),
    entry("MHA Hospital Administration", "mha", &["healthcare", "management"], "2 years", &["Hospital Administrator"]),
    entry("M.Sc Clinical Research", "msc-cr", &["medical", "research"], "2 years", &["Clinical Research Associate"]),
    entry("M.Pharm Pharmacology", "mpharm", &["pharmacy", "research"], "2 years", &["Pharmacologist"]),
];

const UG_COMMERCE: &[CatalogEntry] = &[
    entry("MBA Finance", "mba-fin", &["finance", "management"], "2 years", &["Financial Analyst", "Investment Banker"]),
    entry("M.Com Accounting", "mcom", &["commerce", "accounting"], "2 years", &["Senior Accountant", "Lecturer"]),
    entry("Chartered Accountancy Final", "ca-final", &["accounting", "finance"], "2-3 years", &["Chartered Accountant"]),
    entry("CFA Program", "cfa", &["finance", "investment"], "2-4 years", &["Portfolio Manager"]),
    entry("M.A. Economics", "ma-econ", &["economics", "research"], "2 years", &["Economist"]),
    entry("Company Secretary Professional", "cs-professional", &["commerce", "law"], "1-2 years", &["Company Secretary"]),
];

const UG_ARTS: &[CatalogEntry] = &[
    entry("M.A. English Literature", "ma-english", &["literature", "writing"], "2 years", &["Editor", "Lecturer"]),
    entry("M.A. Psychology", "ma-psychology", &["psychology", "humanities"], "2 years", &["Clinical Psychologist"]),
    entry("MSW Social Work", "msw", &["humanities", "social"], "2 years", &["Social Worker", "NGO Manager"]),
    entry("LLB Law", "llb", &["law", "humanities"], "3 years", &["Lawyer"]),
    entry("M.Des Design", "mdes", &["design", "creative"], "2 years", &["Design Lead"]),
    entry("MJMC Journalism", "mjmc", &["media", "writing"], "2 years", &["Senior Journalist"]),
    entry("Civil Services Preparation", "upsc-cse", &["governance", "humanities"], "1-2 years", &["IAS Officer", "IPS Officer"]),
];

const UG_SCIENCE: &[CatalogEntry] = &[
    entry("M.Sc Physics", "msc-physics", &["science", "physics", "research"], "2 years", &["Research Scientist"]),
    entry("M.Sc Chemistry", "msc-chemistry", &["science", "chemistry", "research"], "2 years", &["Chemist", "Quality Analyst"]),
    entry("M.Sc Mathematics", "msc-maths", &["science", "mathematics"], "2 years", &["Mathematician", "Quant Analyst"]),
    entry("PhD Research Programme", "phd", &["research", "science"], "3-5 years", &["Professor", "Scientist"]),
    entry("M.Tech via GATE", "mtech-gate", &["engineering", "technology"], "2 years", &["Scientist (PSU)", "Engineer"]),
    entry("MBA General Management", "mba-gen", &["management", "business"], "2 years", &["Manager", "Consultant"]),
    entry("B.Ed Teaching", "b-ed", &["education", "humanities"], "2 years", &["School Teacher"]),
];

/// Catalog of next-step courses for a level key.
pub fn course_catalog(level: EducationLevelKey) -> &'static [CatalogEntry] {
    match level {
        EducationLevelKey::TwelfthSciencePcm => TWELFTH_SCIENCE_PCM,
        EducationLevelKey::TwelfthSciencePcb => TWELFTH_SCIENCE_PCB,
        EducationLevelKey::TwelfthCommerce => TWELFTH_COMMERCE,
        EducationLevelKey::TwelfthArts => TWELFTH_ARTS,
        EducationLevelKey::DiplomaCs => DIPLOMA_CS,
        EducationLevelKey::DiplomaEngineering => DIPLOMA_ENGINEERING,
        EducationLevelKey::UgCs => UG_CS,
        EducationLevelKey::UgMedical => UG_MEDICAL,
        EducationLevelKey::UgCommerce => UG_COMMERCE,
        EducationLevelKey::UgArts => UG_ARTS,
        EducationLevelKey::UgScience => UG_SCIENCE,
    }
}

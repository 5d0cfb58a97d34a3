//! Static subject and open-educational-resource tables, and deterministic
//! synthesis of resource entries from them.

use super::{ResourceEntry, ResourceKind};

#[derive(Debug, Clone, Copy)]
pub struct Subject {
    pub name: &'static str,
    pub code: &'static str,
    pub topics: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct Source {
    pub name: &'static str,
    pub base_url: &'static str,
    /// subject code → path under `base_url`
    pub paths: &'static [(&'static str, &'static str)],
}

impl Source {
    pub fn path_for(&self, code: &str) -> Option<&'static str> {
        self.paths.iter().find(|(c, _)| *c == code).map(|(_, p)| *p)
    }
}

pub static SUBJECTS: &[Subject] = &[
    Subject {
        name: "English Language",
        code: "eng",
        topics: &["Comprehension", "Lexis and Structure", "Oral English", "Literature"],
    },
    Subject {
        name: "Mathematics",
        code: "math",
        topics: &["Algebra", "Geometry", "Statistics", "Calculus", "Trigonometry"],
    },
    Subject {
        name: "Physics",
        code: "phy",
        topics: &["Mechanics", "Energy", "Waves", "Electricity", "Modern Physics"],
    },
    Subject {
        name: "Chemistry",
        code: "chem",
        topics: &["Atomic Structure", "Chemical Reactions", "Organic Chemistry", "Electrolysis"],
    },
    Subject {
        name: "Biology",
        code: "bio",
        topics: &["Cell Biology", "Genetics", "Ecology", "Physiology", "Evolution"],
    },
    Subject {
        name: "Government",
        code: "gov",
        topics: &[
            "Nigerian Constitution",
            "Political Systems",
            "Democracy",
            "International Relations",
        ],
    },
    Subject {
        name: "Literature",
        code: "lit",
        topics: &["Poetry", "Drama", "Prose", "Literary Devices"],
    },
    Subject {
        name: "Economics",
        code: "econ",
        topics: &[
            "Microeconomics",
            "Macroeconomics",
            "Development Economics",
            "Public Finance",
        ],
    },
];

pub static SOURCES: &[Source] = &[
    Source {
        name: "OpenStax",
        base_url: "https://openstax.org/subjects/",
        paths: &[
            ("math", "math"),
            ("eng", "humanities"),
            ("bio", "science"),
            ("chem", "science"),
            ("phy", "science"),
            ("gov", "social-sciences"),
            ("econ", "business"),
        ],
    },
    Source {
        name: "Khan Academy",
        base_url: "https://www.khanacademy.org/",
        paths: &[
            ("math", "math"),
            ("eng", "humanities/grammar"),
            ("bio", "science/biology"),
            ("chem", "science/chemistry"),
            ("phy", "science/physics"),
            ("gov", "humanities/world-history"),
            ("econ", "economics-finance-domain/microeconomics"),
        ],
    },
    Source {
        name: "LibreTexts",
        base_url: "https://libretexts.org/",
        paths: &[
            ("math", "Mathematics"),
            ("eng", "Humanities"),
            ("bio", "Biology"),
            ("chem", "Chemistry"),
            ("phy", "Physics"),
            ("gov", "SocialSciences"),
            ("econ", "Business"),
        ],
    },
    Source {
        name: "YouTube EDU",
        base_url: "https://www.youtube.com/results?search_query=",
        paths: &[
            ("math", "JAMB+Mathematics+tutorial"),
            ("eng", "JAMB+English+tutorial"),
            ("bio", "JAMB+Biology+tutorial"),
            ("chem", "JAMB+Chemistry+tutorial"),
            ("phy", "JAMB+Physics+tutorial"),
            ("gov", "JAMB+Government+tutorial"),
            ("lit", "JAMB+Literature+tutorial"),
            ("econ", "JAMB+Economics+tutorial"),
        ],
    },
    Source {
        name: "JAMB eLearning",
        base_url: "https://www.jamb.gov.ng/elearning/",
        paths: &[
            ("math", "mathematics"),
            ("eng", "english"),
            ("bio", "biology"),
            ("chem", "chemistry"),
            ("phy", "physics"),
            ("gov", "government"),
            ("lit", "literature"),
            ("econ", "economics"),
        ],
    },
];

pub fn subject(name: &str) -> Option<&'static Subject> {
    SUBJECTS.iter().find(|s| s.name == name)
}

pub fn subject_names() -> impl Iterator<Item = &'static str> {
    SUBJECTS.iter().map(|s| s.name)
}

/// "Organic Chemistry" → "organic-chemistry"
pub fn slug(topic: &str) -> String {
    topic.to_lowercase().replace(' ', "-")
}

fn entry(
    title: String,
    kind: ResourceKind,
    source: &str,
    url: String,
    description: String,
    rating: f64,
) -> ResourceEntry {
    ResourceEntry {
        title,
        kind,
        source: source.to_string(),
        url,
        description,
        rating,
    }
}

/// One entry per source that covers the subject (in source order), then two
/// topic-specific entries when a topic is given.
pub fn synthesize(subject: &Subject, topic: Option<&str>) -> Vec<ResourceEntry> {
    let name = subject.name;
    let mut out = Vec::new();

    for source in SOURCES {
        let Some(path) = source.path_for(subject.code) else {
            continue;
        };
        let url = format!("{}{}", source.base_url, path);
        let item = match source.name {
            "OpenStax" => entry(
                format!("{name} Textbook"),
                ResourceKind::Book,
                source.name,
                url,
                format!("Comprehensive {name} textbook covering all JAMB topics"),
                4.7,
            ),
            "Khan Academy" => match topic {
                Some(t) => entry(
                    format!("{t} - {name} Tutorial"),
                    ResourceKind::Video,
                    source.name,
                    format!("{url}/{}", slug(t)),
                    format!("Interactive lessons on {t} for {name} JAMB preparation"),
                    4.8,
                ),
                None => entry(
                    format!("{name} Course"),
                    ResourceKind::Course,
                    source.name,
                    url,
                    format!("Full {name} course with practice exercises"),
                    4.9,
                ),
            },
            "LibreTexts" => entry(
                format!("{name} LibreText"),
                ResourceKind::Book,
                source.name,
                url,
                format!("Open educational resource for {name} with examples and problems"),
                4.5,
            ),
            "YouTube EDU" => entry(
                format!("JAMB {name} Video Tutorials"),
                ResourceKind::Video,
                source.name,
                url,
                format!("Curated video lessons for JAMB {name} exam preparation"),
                4.6,
            ),
            "JAMB eLearning" => entry(
                format!("Official JAMB {name} Materials"),
                ResourceKind::Official,
                source.name,
                url,
                format!("Official study materials and practice questions for JAMB {name}"),
                4.9,
            ),
            _ => continue,
        };
        out.push(item);
    }

    if let Some(t) = topic {
        let code = subject.code;
        out.push(entry(
            format!("{t} in {name} - Study Guide"),
            ResourceKind::Notes,
            "Nigerian Academia",
            format!("https://example.com/jamb/{code}/{}", slug(t)),
            format!("Comprehensive notes on {t} for JAMB {name} preparation"),
            4.7,
        ));
        out.push(entry(
            format!("{t} Practice Questions"),
            ResourceKind::Practice,
            "JAMB Prep",
            format!("https://example.com/practice/{code}/{}", slug(t)),
            format!("Over 200 practice questions on {t} for {name} JAMB preparation"),
            4.8,
        ));
    }

    out
}

//! Document analysis: keyword heuristics that guess the target cloud platform and
//! the complexity tier of an uploaded requirements document.
//!
//! Pure and deterministic: the result depends only on the text and the static tables below.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Keyword tables
// ────────────────────────────────────────────────────────────────────────────

/// Platform service names. Each distinct hit counts once, weighted by `SERVICE_WEIGHT`.
pub const GCP_SERVICES: &[&str] = &[
    "bigquery",
    "vertex ai",
    "cloud storage",
    "cloud dataflow",
    "cloud pub/sub",
    "cloud functions",
    "gke",
    "google kubernetes engine",
    "cloud sql",
    "cloud memorystore",
    "looker",
    "data studio",
    "cloud build",
    "firebase",
];

pub const AZURE_SERVICES: &[&str] = &[
    "azure sql",
    "azure storage",
    "azure functions",
    "aks",
    "azure devops",
    "power bi",
    "azure monitor",
    "azure active directory",
    "cosmos db",
];

pub const AWS_SERVICES: &[&str] = &[
    "s3",
    "ec2",
    "rds",
    "lambda",
    "cloudformation",
    "cloudwatch",
    "iam",
    "eks",
];

/// Brand mentions, counted per occurrence.
const GCP_MENTIONS: &[&str] = &[r"\bgcp\b", "google cloud"];
const AZURE_MENTIONS: &[&str] = &[r"\bazure\b", "microsoft azure"];
const AWS_MENTIONS: &[&str] = &[r"\baws\b", "amazon web services"];

/// Scope and risk phrases. Presence only; repeats do not add.
pub const COMPLEXITY_INDICATORS: &[&str] = &[
    "migration",
    "microservices",
    "kubernetes",
    "enterprise",
    "legacy",
    "compliance",
    "multi-region",
    "high availability",
    "disaster recovery",
    "ci/cd",
    "devops",
    "security audit",
    "performance optimization",
];

const SERVICE_WEIGHT: u32 = 2;
const ENTERPRISE_THRESHOLD: usize = 6;
const MEDIUM_THRESHOLD: usize = 3;

/// Word boundaries are ASCII-only: a brand name touching a non-ASCII letter
/// ("AWSへ") still counts as a mention.
static MENTION_PATTERNS: Lazy<[Vec<Regex>; 3]> = Lazy::new(|| {
    [AWS_MENTIONS, AZURE_MENTIONS, GCP_MENTIONS].map(|patterns| {
        patterns
            .iter()
            .map(|p| {
                RegexBuilder::new(p)
                    .unicode(false)
                    .build()
                    .expect("mention patterns are valid regexes")
            })
            .collect()
    })
});

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    #[serde(rename = "AWS")]
    Aws,
    Azure,
    #[serde(rename = "GCP")]
    Gcp,
}

impl Platform {
    /// Evaluation order. The first entry wins ties.
    pub const ALL: [Platform; 3] = [Platform::Aws, Platform::Azure, Platform::Gcp];

    pub fn label(self) -> &'static str {
        match self {
            Platform::Aws => "AWS",
            Platform::Azure => "Azure",
            Platform::Gcp => "GCP",
        }
    }

    pub fn services(self) -> &'static [&'static str] {
        match self {
            Platform::Aws => AWS_SERVICES,
            Platform::Azure => AZURE_SERVICES,
            Platform::Gcp => GCP_SERVICES,
        }
    }

    fn mention_patterns(self) -> &'static [Regex] {
        let idx = match self {
            Platform::Aws => 0,
            Platform::Azure => 1,
            Platform::Gcp => 2,
        };
        &MENTION_PATTERNS[idx]
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectSize {
    Small,
    Medium,
    Enterprise,
}

impl ProjectSize {
    pub fn from_complexity(score: usize) -> Self {
        if score >= ENTERPRISE_THRESHOLD {
            ProjectSize::Enterprise
        } else if score >= MEDIUM_THRESHOLD {
            ProjectSize::Medium
        } else {
            ProjectSize::Small
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProjectSize::Small => "Small",
            ProjectSize::Medium => "Medium",
            ProjectSize::Enterprise => "Enterprise",
        }
    }

    pub fn estimated_weeks(self) -> &'static str {
        match self {
            ProjectSize::Small => "4-8",
            ProjectSize::Medium => "8-16",
            ProjectSize::Enterprise => "16-32",
        }
    }

    pub fn estimated_cost(self) -> &'static str {
        match self {
            ProjectSize::Small => "$25,000 - $75,000",
            ProjectSize::Medium => "$75,000 - $200,000",
            ProjectSize::Enterprise => "$150,000 - $500,000",
        }
    }
}

/// Per-platform values keyed the way the dashboard reads them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformMap<T> {
    pub aws: T,
    pub azure: T,
    pub gcp: T,
}

impl<T> PlatformMap<T> {
    fn from_fn(mut f: impl FnMut(Platform) -> T) -> Self {
        Self {
            aws: f(Platform::Aws),
            azure: f(Platform::Azure),
            gcp: f(Platform::Gcp),
        }
    }

    pub fn get(&self, platform: Platform) -> &T {
        match platform {
            Platform::Aws => &self.aws,
            Platform::Azure => &self.azure,
            Platform::Gcp => &self.gcp,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformAnalysis {
    pub detected: Platform,
    /// `distinct services * 2 + mentions`
    pub scores: PlatformMap<u32>,
    pub services: PlatformMap<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectAnalysis {
    pub size: ProjectSize,
    pub complexity: usize,
    pub estimated_weeks: String,
    pub estimated_cost: String,
    pub indicators: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentStats {
    pub filename: String,
    /// Length of the decoded text in UTF-16 code units.
    pub size: usize,
    pub word_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub platform: PlatformAnalysis,
    pub project: ProjectAnalysis,
    pub document: DocumentStats,
}

// ────────────────────────────────────────────────────────────────────────────
// Core algorithm
// ────────────────────────────────────────────────────────────────────────────

/// Classifies a document. Never fails; empty text yields AWS / Small / zero scores.
pub fn analyze_document(text: &str, filename: &str) -> AnalysisResult {
    let lower = text.to_lowercase();

    let services = PlatformMap::from_fn(|p| matched_terms(&lower, p.services()));
    let scores = PlatformMap::from_fn(|p| {
        let service_score = services.get(p).len() as u32;
        service_score * SERVICE_WEIGHT + mention_score(&lower, p)
    });
    let detected = detect_platform(&scores);

    let indicators = matched_terms(&lower, COMPLEXITY_INDICATORS);
    let complexity = indicators.len();
    let size = ProjectSize::from_complexity(complexity);

    AnalysisResult {
        platform: PlatformAnalysis {
            detected,
            scores,
            services,
        },
        project: ProjectAnalysis {
            size,
            complexity,
            estimated_weeks: size.estimated_weeks().to_string(),
            estimated_cost: size.estimated_cost().to_string(),
            indicators,
        },
        document: DocumentStats {
            filename: filename.to_string(),
            size: text.encode_utf16().count(),
            word_count: count_words(text),
        },
    }
}

/// Terms from `table` that occur anywhere in `haystack`, in table order.
fn matched_terms(haystack: &str, table: &[&str]) -> Vec<String> {
    table
        .iter()
        .filter(|term| haystack.contains(*term))
        .map(|term| term.to_string())
        .collect()
}

fn mention_score(haystack: &str, platform: Platform) -> u32 {
    platform
        .mention_patterns()
        .iter()
        .map(|re| re.find_iter(haystack).count() as u32)
        .sum()
}

/// A platform only displaces the current pick when it strictly beats every other total.
fn detect_platform(scores: &PlatformMap<u32>) -> Platform {
    let mut detected = Platform::Aws;
    for candidate in Platform::ALL {
        let score = *scores.get(candidate);
        let dominates = Platform::ALL
            .iter()
            .filter(|other| **other != candidate)
            .all(|other| score > *scores.get(*other));
        if dominates {
            detected = candidate;
        }
    }
    detected
}

/// Whitespace-separated token count. Empty and blank text count as zero words.
fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

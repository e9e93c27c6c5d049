//! Fixed vocabulary backing the ambiguity detector: subjective terms, weak
//! modality terms, undefined references, non-testable phrasings, and the
//! context patterns that suppress corroborated subjective terms.

/// Subjective adjectives that need measurable criteria to be testable.
pub static SUBJECTIVE_TERMS: &[&str] = &[
    "fast",
    "slow",
    "quick",
    "rapid",
    "secure",
    "safe",
    "scalable",
    "optimal",
    "efficient",
    "user-friendly",
    "intuitive",
    "robust",
    "reliable",
    "stable",
    "flexible",
    "portable",
    "compatible",
    "accessible",
    "responsive",
    "smooth",
    "seamless",
    "clean",
    "proper",
    "correct",
    "appropriate",
    "adequate",
    "sufficient",
];

/// Modal and hedging terms that make a requirement optional.
pub static WEAK_MODALITY_TERMS: &[&str] = &[
    "should",
    "could",
    "might",
    "may",
    "can",
    "if possible",
    "as needed",
    "when necessary",
    "ideally",
    "preferably",
];

/// Pronouns, demonstratives, and generic noun phrases that tend to dangle.
pub static UNDEFINED_REFERENCE_TERMS: &[&str] = &[
    "it",
    "this",
    "that",
    "these",
    "those",
    "the system",
    "the component",
    "the application",
    "the user",
];

/// Loose phrasings that cannot be turned into objective assertions.
pub static NON_TESTABLE_PATTERNS: &[&str] = &[
    r"handle.*properly",
    r"work.*correctly",
    r"function.*properly",
    r"behave.*correctly",
    r"perform.*properly",
    r"process.*correctly",
];

/// Semantic category of a subjective term, used for per-term scoring weights.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TermCategory {
    Performance,
    Quality,
    Usability,
    Reliability,
    Security,
    Scalability,
    Efficiency,
    Accuracy,
    Compatibility,
    Maintainability,
}

static PERFORMANCE_TERMS: &[&str] = &[
    "fast",
    "slow",
    "quick",
    "rapid",
    "speedy",
    "swift",
    "brisk",
    "sluggish",
    "laggy",
    "smooth",
    "responsive",
    "snappy",
    "nimble",
    "agile",
    "zippy",
    "crawling",
    "glacial",
    "lethargic",
    "tardy",
    "delayed",
    "unresponsive",
    "clunky",
    "fluid",
    "seamless",
    "effortless",
    "lightning",
    "blazing",
    "superfast",
    "ultrafast",
];

static QUALITY_TERMS: &[&str] = &[
    "good",
    "bad",
    "better",
    "best",
    "worse",
    "worst",
    "excellent",
    "poor",
    "superior",
    "inferior",
    "great",
    "terrible",
    "superb",
    "awful",
    "outstanding",
    "mediocre",
    "exceptional",
    "subpar",
    "premium",
    "low-quality",
    "high-quality",
    "top-notch",
    "first-rate",
    "second-rate",
    "world-class",
    "substandard",
    "impressive",
    "dismal",
    "stellar",
    "pathetic",
    "magnificent",
    "shoddy",
    "splendid",
    "lousy",
];

static USABILITY_TERMS: &[&str] = &[
    "easy",
    "hard",
    "simple",
    "complex",
    "intuitive",
    "confusing",
    "user-friendly",
    "difficult",
    "straightforward",
    "complicated",
    "accessible",
    "inaccessible",
    "ergonomic",
    "awkward",
    "natural",
    "unnatural",
    "obvious",
    "non-obvious",
    "self-explanatory",
    "puzzling",
    "clear",
    "unclear",
    "transparent",
    "opaque",
    "learnable",
    "steep",
    "gentle",
    "frustrating",
    "pleasing",
    "annoying",
];

static RELIABILITY_TERMS: &[&str] = &[
    "reliable",
    "unreliable",
    "robust",
    "fragile",
    "stable",
    "unstable",
    "consistent",
    "inconsistent",
    "dependable",
    "flaky",
    "trustworthy",
    "untrustworthy",
    "solid",
    "breakable",
    "steady",
    "erratic",
    "predictable",
    "unpredictable",
    "bulletproof",
    "vulnerable",
    "resilient",
    "brittle",
    "fault-tolerant",
    "failure-prone",
];

static SECURITY_TERMS: &[&str] = &[
    "secure",
    "insecure",
    "safe",
    "unsafe",
    "protected",
    "vulnerable",
    "trustworthy",
    "risky",
    "encrypted",
    "exposed",
    "guarded",
    "defenseless",
    "fortified",
    "weak",
    "tamper-proof",
    "hackable",
    "authenticated",
    "unauthenticated",
    "authorized",
    "unauthorized",
    "validated",
    "unvalidated",
    "sanitized",
    "contaminated",
];

static SCALABILITY_TERMS: &[&str] = &[
    "scalable",
    "non-scalable",
    "flexible",
    "rigid",
    "adaptable",
    "inflexible",
    "extensible",
    "limited",
    "expandable",
    "constrained",
    "elastic",
    "static",
    "dynamic",
    "fixed",
    "modular",
    "monolithic",
    "distributed",
    "centralized",
    "cloud-ready",
    "on-premise",
    "horizontal",
    "vertical",
    "auto-scaling",
    "manual",
];

static EFFICIENCY_TERMS: &[&str] = &[
    "efficient",
    "inefficient",
    "optimal",
    "suboptimal",
    "effective",
    "ineffective",
    "productive",
    "wasteful",
    "streamlined",
    "cumbersome",
    "lean",
    "bloated",
    "concise",
    "verbose",
    "succinct",
    "redundant",
    "economical",
    "extravagant",
    "frugal",
    "lavish",
    "thrifty",
    "resourceful",
    "profligate",
];

static ACCURACY_TERMS: &[&str] = &[
    "accurate",
    "inaccurate",
    "precise",
    "imprecise",
    "exact",
    "inexact",
    "correct",
    "incorrect",
    "right",
    "wrong",
    "valid",
    "invalid",
    "true",
    "false",
    "factual",
    "erroneous",
    "authentic",
    "fake",
    "genuine",
    "counterfeit",
    "legitimate",
    "bogus",
];

static COMPATIBILITY_TERMS: &[&str] = &[
    "compatible",
    "incompatible",
    "interoperable",
    "non-interoperable",
    "universal",
    "proprietary",
    "standard",
    "custom",
    "open",
    "closed",
    "cross-platform",
    "platform-specific",
    "vendor-neutral",
    "vendor-locked",
    "agnostic",
    "dependent",
];

static MAINTAINABILITY_TERMS: &[&str] = &[
    "maintainable",
    "unmaintainable",
    "modular",
    "monolithic",
    "clean",
    "messy",
    "readable",
    "unreadable",
    "organized",
    "disorganized",
    "structured",
    "chaotic",
    "documented",
    "undocumented",
    "testable",
    "untestable",
    "debuggable",
    "opaque",
];

static TERM_CATEGORIES: &[(TermCategory, &[&str])] = &[
    (TermCategory::Performance, PERFORMANCE_TERMS),
    (TermCategory::Quality, QUALITY_TERMS),
    (TermCategory::Usability, USABILITY_TERMS),
    (TermCategory::Reliability, RELIABILITY_TERMS),
    (TermCategory::Security, SECURITY_TERMS),
    (TermCategory::Scalability, SCALABILITY_TERMS),
    (TermCategory::Efficiency, EFFICIENCY_TERMS),
    (TermCategory::Accuracy, ACCURACY_TERMS),
    (TermCategory::Compatibility, COMPATIBILITY_TERMS),
    (TermCategory::Maintainability, MAINTAINABILITY_TERMS),
];

/// Resolve a subjective term to its weight category. First listed category
/// wins; unmapped terms fall back to `Quality`.
pub fn resolve_term_category(term: &str) -> TermCategory {
    TERM_CATEGORIES
        .iter()
        .find(|(_, terms)| terms.contains(&term))
        .map(|(category, _)| *category)
        .unwrap_or(TermCategory::Quality)
}

/// Family of corroborating context that suppresses a subjective term when
/// present near it. Window sizes differ per family.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextFamily {
    Performance,
    Security,
    Usability,
    Reliability,
    Scalability,
    Quantitative,
}

impl ContextFamily {
    /// Which context family corroborates the given subjective term. Only a
    /// handful of terms get a dedicated family; everything else is checked
    /// against generic quantitative evidence.
    pub fn for_term(term: &str) -> Self {
        match term {
            "fast" => ContextFamily::Performance,
            "secure" | "safe" => ContextFamily::Security,
            "user-friendly" => ContextFamily::Usability,
            "reliable" => ContextFamily::Reliability,
            "scalable" => ContextFamily::Scalability,
            _ => ContextFamily::Quantitative,
        }
    }

    /// Char window searched on each side of the token.
    pub fn window(self) -> usize {
        match self {
            ContextFamily::Quantitative => 50,
            ContextFamily::Security => 150,
            _ => 100,
        }
    }
}

pub static QUANTITATIVE_CONTEXT: &[&str] = &[
    r"\d+",
    r"\d+\s*(?:ms|sec|second|minute|hour|day)",
    r"\d+\s*(?:%|percent)",
    r"\d+\s*(?:px|pixel|mb|gb|kb)",
    r"\d+\s*(?:user|request|transaction|operation)",
    r"less than|greater than|at least|at most",
    r"\d+\.\d+",
    r"zero|one|two|three|four|five|six|seven|eight|nine|ten",
];

pub static PERFORMANCE_CONTEXT: &[&str] = &[
    r"\d+\s*(?:ms|millisecond|sec|second|minute)",
    r"under|within|less than|no more than",
    r"response time|load time|render time",
    r"\d+\s*fps|frames per second",
    r"latency|throughput|bandwidth",
];

pub static SECURITY_CONTEXT: &[&str] = &[
    r"encryption|ssl|tls|https|oauth|jwt|saml",
    r"authentication|authorization|auth",
    r"firewall|vpn|certificate|key",
    r"sql injection|xss|csrf|attack|threat",
    r"password|credential|token|session",
    r"aes|rsa|sha|hash|salt",
];

pub static USABILITY_CONTEXT: &[&str] = &[
    r"accessibility|wcag|contrast|font size",
    r"click|tap|gesture|navigation|menu",
    r"error message|feedback|guidance",
    r"learning curve|training time",
    r"efficiency|effectiveness|satisfaction",
    r"task completion|success rate|error rate",
];

pub static RELIABILITY_CONTEXT: &[&str] = &[
    r"\d+\s*(?:%|percent)\s*uptime",
    r"mean time|mtbf|mttr",
    r"availability|sla|downtime",
    r"redundancy|failover|backup",
    r"error rate|failure rate|recovery",
    r"\d+\s*nines|five nines|four nines",
];

pub static SCALABILITY_CONTEXT: &[&str] = &[
    r"\d+\s*(?:user|request|transaction|connection)",
    r"concurrent|simultaneous|parallel",
    r"horizontal|vertical|auto.?scal",
    r"load balanc|cluster|distributed",
    r"peak|maximum|capacity|throughput",
    r"elastic|dynamic|on.?demand",
];

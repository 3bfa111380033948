//! Canned demo assistant. No inference happens here: responses come from
//! a fixed table keyed by verbosity and tone, optionally prefixed with a
//! contextual snippet when the question mentions a known keyword. The
//! streaming cadence (chunk widths and 180-300 ms delays) is a scripted
//! effect; all randomness comes from an injected RNG so the whole surface
//! is deterministic under a seed.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;
use std::time::Duration;

/// Lower bound of the inter-chunk delay, milliseconds.
const CHUNK_DELAY_MIN_MS: u64 = 180;
/// Upper bound (exclusive) of the inter-chunk delay, milliseconds.
const CHUNK_DELAY_MAX_MS: u64 = 300;

/// Response length requested by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Short,
    Medium,
    Long,
}

impl Verbosity {
    /// Words per streamed chunk.
    fn chunk_size(self) -> usize {
        match self {
            Verbosity::Short => 3,
            Verbosity::Medium => 4,
            Verbosity::Long => 5,
        }
    }
}

impl std::str::FromStr for Verbosity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "short" => Ok(Verbosity::Short),
            "medium" => Ok(Verbosity::Medium),
            "long" => Ok(Verbosity::Long),
            _ => Err(format!(
                "Invalid verbosity: {}. Please specify 'short', 'medium' or 'long'",
                s
            )),
        }
    }
}

/// Audience register of the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tone {
    Technical,
    NonTechnical,
}

impl std::str::FromStr for Tone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "technical" => Ok(Tone::Technical),
            "non-technical" | "nontechnical" => Ok(Tone::NonTechnical),
            _ => Err(format!(
                "Invalid tone: {}. Please specify 'technical' or 'non-technical'",
                s
            )),
        }
    }
}

/// Contextual snippets, checked in order against the lowercased question.
/// The first match wins and is prefixed to the canned response.
const CONTEXTUAL_KEYWORDS: [(&str, &str); 5] = [
    (
        "risk",
        "Based on QUASAR data, your top risks include: RSA-2048 certificates (342 assets), vulnerable APIs, and legacy authentication systems.",
    ),
    (
        "migration",
        "Migration priority: 89 assets flagged critical. Recommend starting with internet-facing TLS endpoints and customer authentication layers.",
    ),
    (
        "compliance",
        "Current compliance score: 67%. NIST PQC standards require migration by 2025. You're on track but need acceleration.",
    ),
    (
        "certificate",
        "Certificate analysis: 127 expired or expiring within 90 days. 89 use quantum-vulnerable algorithms. Renewal + PQC upgrade recommended.",
    ),
    (
        "performance",
        "PQC performance impact: +15-20% latency, +30% CPU. ML-DSA signatures 2x slower than ECDSA but quantum-safe.",
    ),
];

fn canned_response(verbosity: Verbosity, tone: Tone) -> &'static str {
    match (verbosity, tone) {
        (Verbosity::Short, Tone::Technical) => {
            "Your infrastructure shows 67% quantum vulnerability across RSA-2048 assets. Immediate PQC migration recommended for critical systems."
        }
        (Verbosity::Short, Tone::NonTechnical) => {
            "Your systems have significant exposure to future quantum threats. We recommend upgrading security protocols soon."
        }
        (Verbosity::Medium, Tone::Technical) => {
            "Analysis reveals 67% of assets use quantum-vulnerable algorithms (RSA-2048, ECC). Current quantum threat level is at 73%. Post-quantum cryptography migration should prioritize TLS certificates and API endpoints. Estimated timeline: 6-8 months for full deployment."
        }
        (Verbosity::Medium, Tone::NonTechnical) => {
            "Our security systems are at risk from emerging quantum computing technology. About two-thirds of our digital assets need security upgrades. This is a significant but manageable project that will take 6-8 months to complete properly."
        }
        (Verbosity::Long, Tone::Technical) => {
            "Comprehensive quantum risk assessment indicates 73% threat level with 67% asset vulnerability. Your infrastructure relies heavily on RSA-2048 (342 assets) and ECDSA-P256 (89 assets), both quantum-vulnerable. Shor's algorithm simulations show these can be broken within 24 hours by a sufficiently powerful quantum computer. Recommended migration path: 1) Prioritize internet-facing TLS certificates and authentication endpoints, 2) Deploy CRYSTALS-Kyber for key exchange, 3) Implement ML-DSA for digital signatures. Estimated performance impact: 15-20% latency increase, 30% higher CPU utilization during initial rollout. Full migration timeline: 8-12 months with phased deployment."
        }
        (Verbosity::Long, Tone::NonTechnical) => {
            "Your organization faces growing security risks from quantum computing advances. Currently, about 70% of your digital security systems use older encryption methods that quantum computers could break. This affects everything from customer data to internal communications. The good news: proven quantum-safe solutions exist and can be deployed over the next year. The transition will require careful planning to avoid disrupting business operations. We'll prioritize customer-facing systems first, then internal infrastructure. Expect minor performance impacts during rollout, but long-term security benefits far outweigh short-term costs. Executive approval and budget allocation needed for Q1 next year."
        }
    }
}

/// Composes the full response for a question: the canned text for the
/// requested verbosity/tone, prefixed with the first matching contextual
/// snippet.
pub fn compose_response(question: &str, verbosity: Verbosity, tone: Tone) -> String {
    let base = canned_response(verbosity, tone);
    let lower = question.to_lowercase();
    for (keyword, context) in CONTEXTUAL_KEYWORDS {
        if lower.contains(keyword) {
            return format!("{} {}", context, base);
        }
    }
    base.to_string()
}

/// Splits a response into streamed word chunks (3/4/5 words per chunk
/// depending on verbosity). Joining the chunks with single spaces
/// reconstructs the response.
pub fn chunk_response(response: &str, verbosity: Verbosity) -> Vec<String> {
    let words: Vec<&str> = response.split(' ').collect();
    words
        .chunks(verbosity.chunk_size())
        .map(|chunk| chunk.join(" "))
        .collect()
}

/// Randomized inter-chunk delay, uniform in [180, 300) ms.
pub fn chunk_delay<R: Rng>(rng: &mut R) -> Duration {
    Duration::from_millis(rng.random_range(CHUNK_DELAY_MIN_MS..CHUNK_DELAY_MAX_MS))
}

/// One completed assistant exchange, exportable as JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssistantInteraction {
    pub query: String,
    pub response: String,
    pub verbosity: Verbosity,
    pub tone: Tone,
    pub timestamp: DateTime<Utc>,
}

impl AssistantInteraction {
    pub fn new(query: String, verbosity: Verbosity, tone: Tone, timestamp: DateTime<Utc>) -> Self {
        let response = compose_response(&query, verbosity, tone);
        Self {
            query,
            response,
            verbosity,
            tone,
            timestamp,
        }
    }

    /// Export filename: `quasar-response-<epoch-ms>.json`.
    pub fn export_filename(&self) -> String {
        format!("quasar-response-{}.json", self.timestamp.timestamp_millis())
    }
}

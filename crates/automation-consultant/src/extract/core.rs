/// The generic n8n reply for a webhook that answers before the workflow finishes.
pub const DEFAULT_ACK_MARKER: &str = "Workflow was started";

/// Trait for locating a JSON object candidate inside free-form text
pub trait ContentExtractor {
    /// Extract the body of a Markdown code fence tagged with `lang`
    fn extract_fenced<'a>(&self, text: &'a str, lang: &str) -> Option<&'a str>;

    /// Extract the first complete, brace-balanced object
    fn extract_balanced<'a>(&self, text: &'a str) -> Option<&'a str>;

    /// Extract everything between the first `{` and the last `}`, inclusive
    fn extract_brace_span<'a>(&self, text: &'a str) -> Option<&'a str>;
}

/// Extraction strategy configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionStrategy {
    /// First balanced object inside a ```json fence
    FencedJsonBlock,

    /// First balanced top-level object; string- and escape-aware
    FirstBalancedObject,

    /// First `{` to last `}`, no balancing. Tolerates truncated or noisy output.
    BraceSpan,
}

/// Configuration for response sanitizing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizerConfig {
    /// Substring marking an asynchronous acknowledgement
    pub ack_marker: String,

    /// Ordered list of extraction strategies to try
    pub extraction_strategies: Vec<ExtractionStrategy>,

    /// Whether to enable debug logging
    pub debug_mode: bool,
}

impl Default for SanitizerConfig {
    fn default() -> Self {
        Self {
            ack_marker: DEFAULT_ACK_MARKER.to_string(),
            extraction_strategies: SanitizerConfig::standard_strategies(),
            debug_mode: false,
        }
    }
}

impl SanitizerConfig {
    /// Fenced block, then first balanced object, then the raw brace span.
    pub fn standard_strategies() -> Vec<ExtractionStrategy> {
        vec![
            ExtractionStrategy::FencedJsonBlock,
            ExtractionStrategy::FirstBalancedObject,
            ExtractionStrategy::BraceSpan,
        ]
    }

    /// Only the first-brace/last-brace heuristic.
    pub fn legacy() -> Self {
        Self {
            extraction_strategies: vec![ExtractionStrategy::BraceSpan],
            ..Default::default()
        }
    }

    /// Set the acknowledgement marker
    pub fn with_ack_marker(mut self, marker: impl Into<String>) -> Self {
        self.ack_marker = marker.into();
        self
    }

    /// Replace the strategy chain
    pub fn with_strategies(mut self, strategies: Vec<ExtractionStrategy>) -> Self {
        self.extraction_strategies = strategies;
        self
    }

    /// Enable debug mode
    pub fn with_debug(mut self) -> Self {
        self.debug_mode = true;
        self
    }
}

use super::core::{ContentExtractor, ExtractionStrategy, SanitizerConfig};

use super::error::SanitizeError;
use log::debug;
use regex::Regex;

/// Extracts a single JSON object candidate from a raw backend reply.
///
/// The candidate is returned as a slice of the input, unparsed. Strategies are
/// tried in the configured order and the first hit wins.
#[derive(Debug, Clone, Default)]
pub struct ResponseSanitizer {
    config: SanitizerConfig,
}

impl ResponseSanitizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SanitizerConfig) -> Self {
        Self { config }
    }

    pub fn with_debug(mut self) -> Self {
        self.config.debug_mode = true;
        self
    }

    pub fn config(&self) -> &SanitizerConfig {
        &self.config
    }

    /// Standard sanitizing: acknowledgement check, then the strategy chain.
    pub fn sanitize<'a>(&self, text: &'a str) -> Result<&'a str, SanitizeError> {
        if self.config.debug_mode {
            debug!("Sanitizing response text: {}", text);
        }

        let marker = &self.config.ack_marker;
        if !marker.is_empty() && text.contains(marker.as_str()) {
            debug!("Response contains acknowledgement marker '{}'", marker);
            return Err(SanitizeError::AsyncAcknowledgement {
                marker: marker.clone(),
            });
        }

        self.extract_with_strategies(text, &self.config.extraction_strategies)
    }

    /// Extract content using specified strategy
    pub fn extract_with_strategy<'a>(
        &self,
        text: &'a str,
        strategy: &ExtractionStrategy,
    ) -> Option<&'a str> {
        if self.config.debug_mode {
            debug!("Trying extraction strategy: {:?}", strategy);
        }

        match strategy {
            ExtractionStrategy::FencedJsonBlock => self
                .extract_fenced(text, "json")
                .and_then(|body| self.extract_balanced(body)),
            ExtractionStrategy::FirstBalancedObject => self.extract_balanced(text),
            ExtractionStrategy::BraceSpan => self.extract_brace_span(text),
        }
    }

    /// Try multiple extraction strategies in order
    pub fn extract_with_strategies<'a>(
        &self,
        text: &'a str,
        strategies: &[ExtractionStrategy],
    ) -> Result<&'a str, SanitizeError> {
        for strategy in strategies {
            if let Some(candidate) = self.extract_with_strategy(text, strategy) {
                if self.config.debug_mode {
                    debug!("Successfully extracted with strategy: {:?}", strategy);
                }
                return Ok(candidate);
            }
        }

        debug!("No strategy produced a JSON candidate");
        Err(SanitizeError::NoJsonFound)
    }
}

impl ContentExtractor for ResponseSanitizer {
    fn extract_fenced<'a>(&self, text: &'a str, lang: &str) -> Option<&'a str> {
        let pattern = format!(
            r"(?mi)^\s*```[ \t]*{}[ \t]*\r?\n((?:.*\n)*?)^\s*```\s*$",
            regex::escape(lang)
        );

        if let Ok(regex) = Regex::new(&pattern)
            && let Some(captures) = regex.captures(text)
            && let Some(body) = captures.get(1)
        {
            return Some(body.as_str());
        }

        if self.config.debug_mode {
            debug!("No ```{} fence in response", lang);
        }

        None
    }

    fn extract_balanced<'a>(&self, text: &'a str) -> Option<&'a str> {
        // Braces in prose (`{name}`, a lone `{`) are not object openers.
        for (start, _) in text.match_indices('{') {
            if !opens_object(&text[start + 1..]) {
                continue;
            }

            if let Some(len) = balanced_len(&text[start..]) {
                return Some(&text[start..start + len]);
            }

            // An object that opens but never closes is truncated output.
            if self.config.debug_mode {
                debug!("Unclosed JSON object at byte {}", start);
            }
            return None;
        }

        if self.config.debug_mode {
            debug!("No JSON object opener in response");
        }

        None
    }

    fn extract_brace_span<'a>(&self, text: &'a str) -> Option<&'a str> {
        let start = text.find('{')?;
        let end = text.rfind('}')?;
        if end < start {
            return None;
        }
        Some(&text[start..=end])
    }
}

/// A JSON object starts with a key or is empty.
fn opens_object(after_brace: &str) -> bool {
    matches!(after_brace.trim_start().chars().next(), Some('"') | Some('}'))
}

/// Byte length of the object starting at `text[0] == '{'`, if it closes.
fn balanced_len(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escape_next = false;

    for (i, ch) in text.char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }

        match ch {
            '\\' if in_string => escape_next = true,
            '"' => in_string = !in_string,
            '{' if !in_string => depth += 1,
            '}' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(i + 1);
                }
            }
            _ => {}
        }
    }

    None
}

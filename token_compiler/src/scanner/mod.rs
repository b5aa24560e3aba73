//! Scanner: applies the pattern library to raw source text
//!
//! Output order is category order, then rule declaration order, then source
//! order. A source with no matches yields an empty hit list, which is valid.

use crate::config::compile_time::scanning::{MAX_HITS_PER_RULE, MAX_TOKEN_NAME_LENGTH};
use crate::logging::codes;
use crate::patterns::{ExtractionRule, PatternLibrary, RuleShape};
use crate::tokens::Category;
use crate::{log_debug, log_success, log_warning};

/// One raw match of one rule
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionHit {
    pub category: Category,
    pub rule_id: &'static str,
    pub shape: RuleShape,
    pub name: String,
    /// Capture groups after the name, verbatim
    pub captures: Vec<String>,
    /// 1-based line of the match start
    pub line: usize,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanMetrics {
    /// Hits per category in canonical order
    pub hits_per_category: Vec<(Category, usize)>,
    /// Rules that matched at least once, in scan order
    pub matched_rules: Vec<&'static str>,
    /// Matches rejected by a rule's name guard
    pub guarded_out: usize,
    /// Matches dropped by the per-rule or name-length limits
    pub dropped: usize,
}

impl ScanMetrics {
    pub fn total_hits(&self) -> usize {
        self.hits_per_category.iter().map(|(_, n)| n).sum()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScanOutput {
    pub hits: Vec<ExtractionHit>,
    pub metrics: ScanMetrics,
}

/// Byte offsets of line starts, for offset → line lookups
struct LineIndex {
    starts: Vec<usize>,
}

impl LineIndex {
    fn new(source: &str) -> Self {
        let starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self { starts }
    }

    fn line_of(&self, offset: usize) -> usize {
        match self.starts.binary_search(&offset) {
            Ok(index) => index + 1,
            Err(index) => index,
        }
    }
}

/// Stateless scanner over a compiled library
pub struct Scanner<'a> {
    library: &'a PatternLibrary,
}

impl<'a> Scanner<'a> {
    pub fn new(library: &'a PatternLibrary) -> Self {
        Self { library }
    }

    pub fn scan(&self, source: &str) -> ScanOutput {
        let lines = LineIndex::new(source);
        let mut output = ScanOutput::default();

        for category in Category::ALL {
            let before = output.hits.len();
            for rule in self.library.rules_for(category) {
                let found = self.apply_rule(rule, source, &lines, &mut output);
                if found > 0 {
                    output.metrics.matched_rules.push(rule.id);
                }
            }
            output
                .metrics
                .hits_per_category
                .push((category, output.hits.len() - before));
        }

        log_success!(codes::success::SCAN_COMPLETE, "Source scan complete",
            "hits" => output.metrics.total_hits(),
            "rules_matched" => output.metrics.matched_rules.len(),
            "guarded_out" => output.metrics.guarded_out);

        output
    }

    /// Collect every accepted match of one rule; returns the number accepted
    fn apply_rule(
        &self,
        rule: &ExtractionRule,
        source: &str,
        lines: &LineIndex,
        output: &mut ScanOutput,
    ) -> usize {
        let mut accepted = 0;

        for captures in rule.regex.captures_iter(source) {
            let (Some(whole), Some(name)) = (captures.get(0), captures.get(1)) else {
                continue;
            };
            let name = name.as_str();
            let line = lines.line_of(whole.start());

            if !rule.guard.accepts(name) {
                output.metrics.guarded_out += 1;
                continue;
            }

            if name.len() > MAX_TOKEN_NAME_LENGTH {
                log_warning!(codes::scanning::NAME_TOO_LONG, "Token name exceeds maximum length",
                    line = line,
                    "rule" => rule.id,
                    "length" => name.len(),
                    "max_length" => MAX_TOKEN_NAME_LENGTH);
                output.metrics.dropped += 1;
                continue;
            }

            if accepted == MAX_HITS_PER_RULE {
                log_warning!(codes::scanning::HIT_LIMIT_REACHED, "Rule hit limit reached; remaining matches ignored",
                    line = line,
                    "rule" => rule.id,
                    "limit" => MAX_HITS_PER_RULE);
                output.metrics.dropped += 1;
                break;
            }

            let rest = captures
                .iter()
                .skip(2)
                .map(|m| m.map(|m| m.as_str().to_string()).unwrap_or_default())
                .collect();

            log_debug!("Extraction hit", "rule" => rule.id, "name" => name, "line" => line);

            output.hits.push(ExtractionHit {
                category: rule.category,
                rule_id: rule.id,
                shape: rule.shape,
                name: name.to_string(),
                captures: rest,
                line,
            });
            accepted += 1;
        }

        accepted
    }
}

/// Scan with the given library
pub fn scan(library: &PatternLibrary, source: &str) -> ScanOutput {
    Scanner::new(library).scan(source)
}

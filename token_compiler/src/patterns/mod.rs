//! Pattern library: compiled extraction rules grouped by token category
//!
//! Every pattern is compiled once when the library is built. A pattern that
//! fails to compile is a startup error, never a per-run condition.

pub mod rules;

use crate::log_debug;
use crate::logging::codes;
use crate::tokens::Category;
use regex::Regex;
use std::collections::HashSet;

pub use rules::{NameGuard, RuleDefinition, RuleShape, STANDARD_RULES};

#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("Pattern for rule '{rule_id}' failed to compile: {source}")]
    Compile {
        rule_id: &'static str,
        #[source]
        source: regex::Error,
    },

    #[error("Duplicate extraction rule id: {rule_id}")]
    DuplicateRuleId { rule_id: &'static str },
}

impl PatternError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            PatternError::Compile { .. } => codes::patterns::PATTERN_COMPILE_FAILED,
            PatternError::DuplicateRuleId { .. } => codes::patterns::DUPLICATE_RULE_ID,
        }
    }
}

/// Compiled extraction rule
#[derive(Debug, Clone)]
pub struct ExtractionRule {
    pub id: &'static str,
    pub category: Category,
    pub regex: Regex,
    pub shape: RuleShape,
    pub guard: NameGuard,
}

/// Compiled sub-patterns used inside composite captures
#[derive(Debug, Clone)]
pub struct SubPatterns {
    pub gradient_stop: Regex,
    pub font_size: Regex,
    pub font_weight: Regex,
    pub blur_radius: Regex,
    pub offset: Regex,
    pub alpha: Regex,
}

impl SubPatterns {
    fn compile() -> Result<Self, PatternError> {
        Ok(Self {
            gradient_stop: compile("gradient_stop", rules::GRADIENT_STOP)?,
            font_size: compile("font_size", rules::FONT_SIZE)?,
            font_weight: compile("font_weight", rules::FONT_WEIGHT)?,
            blur_radius: compile("blur_radius", rules::BLUR_RADIUS)?,
            offset: compile("offset", rules::OFFSET)?,
            alpha: compile("alpha", rules::ALPHA)?,
        })
    }
}

fn compile(rule_id: &'static str, pattern: &str) -> Result<Regex, PatternError> {
    Regex::new(pattern).map_err(|source| PatternError::Compile { rule_id, source })
}

/// Immutable registry of extraction rules
#[derive(Debug, Clone)]
pub struct PatternLibrary {
    rules: Vec<ExtractionRule>,
    sub_patterns: SubPatterns,
}

impl PatternLibrary {
    /// Library with the standard rule table
    pub fn standard() -> Result<Self, PatternError> {
        Self::from_definitions(STANDARD_RULES)
    }

    pub fn from_definitions(definitions: &[RuleDefinition]) -> Result<Self, PatternError> {
        let mut seen = HashSet::new();
        let mut rules = Vec::with_capacity(definitions.len());

        for definition in definitions {
            if !seen.insert(definition.id) {
                return Err(PatternError::DuplicateRuleId {
                    rule_id: definition.id,
                });
            }

            rules.push(ExtractionRule {
                id: definition.id,
                category: definition.category,
                regex: compile(definition.id, definition.pattern)?,
                shape: definition.shape,
                guard: definition.guard,
            });
        }

        log_debug!("Pattern library compiled", "rules" => rules.len());

        Ok(Self {
            rules,
            sub_patterns: SubPatterns::compile()?,
        })
    }

    /// Rules of one category in declaration order
    pub fn rules_for(&self, category: Category) -> impl Iterator<Item = &ExtractionRule> {
        self.rules.iter().filter(move |rule| rule.category == category)
    }

    pub fn sub_patterns(&self) -> &SubPatterns {
        &self.sub_patterns
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }
}

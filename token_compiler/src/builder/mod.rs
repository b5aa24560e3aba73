//! Token model builder
//!
//! Turns scanner hits into the canonical [`TokenModel`]. Malformed values are
//! dropped with a coded warning; building itself never fails.

pub mod normalize;

use crate::config::compile_time::export::GRADIENT_SUFFIX;
use crate::logging::{codes, Code};
use crate::patterns::{PatternLibrary, RuleShape, SubPatterns};
use crate::scanner::ExtractionHit;
use crate::tokens::{Category, ShadowToken, TokenModel, TokenValue};
use crate::{log_success, log_warning};
use normalize::{normalize_hex, parse_millis, parse_number, parse_offset};

/// Recoverable problem with one hit
#[derive(Debug, Clone, PartialEq)]
pub struct BuildWarning {
    pub code: Code,
    pub category: Category,
    pub name: String,
    pub line: usize,
    pub message: String,
    /// Offending text as captured
    pub raw: String,
}

impl std::fmt::Display for BuildWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "warning[{}]: {} ({}.{} at line {}: '{}')",
            self.code, self.message, self.category, self.name, self.line, self.raw
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct BuildOutput {
    pub model: TokenModel,
    pub warnings: Vec<BuildWarning>,
}

/// Assembles the model from hits in scan order
pub struct ModelBuilder<'a> {
    sub: &'a SubPatterns,
    model: TokenModel,
    warnings: Vec<BuildWarning>,
}

impl<'a> ModelBuilder<'a> {
    pub fn new(library: &'a PatternLibrary) -> Self {
        Self {
            sub: library.sub_patterns(),
            model: TokenModel::new(),
            warnings: Vec::new(),
        }
    }

    pub fn build(mut self, hits: &[ExtractionHit]) -> BuildOutput {
        for hit in hits {
            self.apply(hit);
        }

        log_success!(codes::success::MODEL_BUILD_COMPLETE, "Token model built",
            "tokens" => self.model.total_tokens(),
            "warnings" => self.warnings.len());

        BuildOutput {
            model: self.model,
            warnings: self.warnings,
        }
    }

    fn apply(&mut self, hit: &ExtractionHit) {
        let raw = hit.captures.first().map(String::as_str).unwrap_or_default();

        match hit.shape {
            RuleShape::Hex => match normalize_hex(raw) {
                Some(hex) => self.insert(hit, hit.name.clone(), TokenValue::Hex(hex)),
                None => self.warn(hit, codes::building::MALFORMED_COLOR, "Color value could not be normalized", raw),
            },
            RuleShape::Gradient => self.apply_gradient(hit, raw),
            RuleShape::Numeric => match parse_number(raw) {
                Some(n) => self.insert(hit, hit.name.clone(), TokenValue::Number(n)),
                None => self.warn(hit, codes::building::MALFORMED_NUMBER, "Numeric value could not be parsed", raw),
            },
            RuleShape::TextStyle => self.apply_text_style(hit, raw),
            RuleShape::Shadow => self.apply_shadow(hit, raw),
            RuleShape::Duration => match parse_millis(raw) {
                Some(ms) => self.insert(hit, format!("{}_duration", hit.name), TokenValue::Integer(ms)),
                None => self.warn(hit, codes::building::MALFORMED_DURATION, "Duration is not a whole number of milliseconds", raw),
            },
            RuleShape::Curve => {
                self.insert(hit, format!("{}_curve", hit.name), TokenValue::Symbol(raw.to_string()))
            }
        }
    }

    fn apply_gradient(&mut self, hit: &ExtractionHit, body: &str) {
        let sub = self.sub;
        let mut stops = Vec::new();
        for captures in sub.gradient_stop.captures_iter(body) {
            match normalize_hex(&captures[1]) {
                Some(hex) => stops.push(hex),
                None => {
                    let stop = captures[1].to_string();
                    self.warn(hit, codes::building::MALFORMED_COLOR, "Gradient stop could not be normalized", &stop);
                }
            }
        }
        self.insert(
            hit,
            format!("{}{}", hit.name, GRADIENT_SUFFIX),
            TokenValue::Gradient(stops),
        );
    }

    fn apply_text_style(&mut self, hit: &ExtractionHit, body: &str) {
        let sub = self.sub;
        if let Some(captures) = sub.font_size.captures(body) {
            let raw = captures[1].to_string();
            match parse_number(&raw) {
                Some(n) => self.insert(hit, format!("{}_fontSize", hit.name), TokenValue::Number(n)),
                None => self.warn(hit, codes::building::MALFORMED_NUMBER, "fontSize could not be parsed", &raw),
            }
        }

        if let Some(captures) = sub.font_weight.captures(body) {
            let weight = captures[1].to_string();
            self.insert(hit, format!("{}_fontWeight", hit.name), TokenValue::Symbol(weight));
        }
    }

    fn apply_shadow(&mut self, hit: &ExtractionHit, body: &str) {
        let sub = self.sub;
        let mut shadow = ShadowToken::default();

        if let Some(captures) = sub.blur_radius.captures(body) {
            let raw = captures[1].to_string();
            match parse_number(&raw) {
                Some(n) => shadow.blur_radius = Some(n),
                None => self.warn(hit, codes::building::MALFORMED_NUMBER, "blurRadius could not be parsed", &raw),
            }
        }

        if let Some(captures) = sub.offset.captures(body) {
            let raw = captures[1].to_string();
            match parse_offset(&raw) {
                Some(offset) => shadow.offset = Some(offset),
                None => self.warn(hit, codes::building::MALFORMED_OFFSET, "Shadow offset is not an (x, y) pair", &raw),
            }
        }

        if let Some(captures) = sub.alpha.captures(body) {
            let raw = captures[1].to_string();
            match parse_number(&raw) {
                Some(n) => shadow.alpha = Some(n),
                None => self.warn(hit, codes::building::MALFORMED_NUMBER, "alpha could not be parsed", &raw),
            }
        }

        // A shadow block with no recognized sub-field still binds its name
        self.insert(hit, hit.name.clone(), TokenValue::Shadow(shadow));
    }

    fn insert(&mut self, hit: &ExtractionHit, key: String, value: TokenValue) {
        if self.model.insert(hit.category, key, value).is_some() {
            crate::log_debug!("Token re-bound; last write wins",
                "category" => hit.category,
                "name" => hit.name,
                "rule" => hit.rule_id);
        }
    }

    fn warn(&mut self, hit: &ExtractionHit, code: Code, message: &str, raw: &str) {
        log_warning!(code, message,
            line = hit.line,
            "category" => hit.category,
            "token" => hit.name,
            "value" => raw);

        self.warnings.push(BuildWarning {
            code,
            category: hit.category,
            name: hit.name.clone(),
            line: hit.line,
            message: message.to_string(),
            raw: raw.to_string(),
        });
    }
}

/// Build the model from scanner hits
pub fn build(library: &PatternLibrary, hits: &[ExtractionHit]) -> BuildOutput {
    ModelBuilder::new(library).build(hits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::scan;
    use crate::tokens::Offset;

    fn build_source(source: &str) -> BuildOutput {
        let library = PatternLibrary::standard().unwrap();
        let scanned = scan(&library, source);
        build(&library, &scanned.hits)
    }

    #[test]
    fn test_end_to_end_example() {
        let output = build_source(
            "static double get spacingMd => 8.0;\n\
             static Color get primary => const Color(0xFF336699);\n",
        );

        assert!(output.warnings.is_empty());
        assert_eq!(
            output.model.get(Category::Spacing, "spacingMd"),
            Some(&TokenValue::Number(8.0))
        );
        assert_eq!(
            output.model.get(Category::Colors, "primary"),
            Some(&TokenValue::Hex("#336699".into()))
        );
        assert_eq!(output.model.total_tokens(), 2);
    }

    #[test]
    fn test_colors_and_gradients() {
        let output = build_source(
            "Color get overlay => const Color(0x80000000);\n\
             Color get accent => const Color(0x12ab34);\n\
             LinearGradient get brand => const LinearGradient(\n  colors: [Color(0xFF112233), Color(0x80445566)],\n);\n",
        );

        let colors = output.model.colors();
        assert_eq!(colors["overlay"], TokenValue::Hex("#00000080".into()));
        assert_eq!(colors["accent"], TokenValue::Hex("#12AB34".into()));
        assert_eq!(
            colors["brand_gradient"],
            TokenValue::Gradient(vec!["#112233".into(), "#44556680".into()])
        );
    }

    #[test]
    fn test_text_style_derived_entries() {
        let output = build_source(
            "TextStyle get body => const TextStyle(fontSize: 16, fontWeight: FontWeight.w400);\n\
             TextStyle get caption => TextStyle(letterSpacing: 0.4);\n\
             TextStyle get label => TextStyle(fontWeight: FontWeight.bold);\n",
        );

        let typography = output.model.typography();
        assert_eq!(typography["body_fontSize"], TokenValue::Number(16.0));
        assert_eq!(typography["body_fontWeight"], TokenValue::Symbol("w400".into()));
        assert!(!typography.contains_key("caption_fontSize"));
        assert!(!typography.contains_key("caption_fontWeight"));
        assert!(!typography.contains_key("label_fontSize"));
        assert_eq!(typography["label_fontWeight"], TokenValue::Symbol("bold".into()));
    }

    #[test]
    fn test_shadows() {
        let output = build_source(
            "List<BoxShadow> get shadowMd => const [\n  BoxShadow(blurRadius: 8, offset: const Offset(0, 2), color: Colors.black.withValues(alpha: 0.1)),\n];\n\
             List<BoxShadow> get shadowBare => [BoxShadow(spreadRadius: 1)];\n",
        );

        let shadows = output.model.shadows();
        assert_eq!(
            shadows["shadowMd"],
            TokenValue::Shadow(ShadowToken {
                blur_radius: Some(8.0),
                offset: Some(Offset { x: 0.0, y: 2.0 }),
                alpha: Some(0.1),
            })
        );
        assert_eq!(shadows["shadowBare"], TokenValue::Shadow(ShadowToken::default()));
    }

    #[test]
    fn test_malformed_offset_keeps_rest_of_shadow() {
        let output = build_source(
            "List<BoxShadow> get shadowOdd => [BoxShadow(blurRadius: 4, offset: Offset(dx, dy))];\n",
        );

        assert_eq!(
            output.model.shadows()["shadowOdd"],
            TokenValue::Shadow(ShadowToken {
                blur_radius: Some(4.0),
                offset: None,
                alpha: None,
            })
        );
        assert_eq!(output.warnings.len(), 1);
        assert_eq!(output.warnings[0].code, codes::building::MALFORMED_OFFSET);
        assert_eq!(output.warnings[0].raw, "dx, dy");
    }

    #[test]
    fn test_animations() {
        let output = build_source(
            "Duration get fast => const Duration(milliseconds: 150);\n\
             Duration get odd => const Duration(milliseconds: 150.5);\n\
             Curve get standard => Curves.easeInOut;\n",
        );

        let animations = output.model.animations();
        assert_eq!(animations["fast_duration"], TokenValue::Integer(150));
        assert_eq!(animations["standard_curve"], TokenValue::Symbol("easeInOut".into()));
        assert!(!animations.contains_key("odd_duration"));
        assert_eq!(output.warnings.len(), 1);
        assert_eq!(output.warnings[0].code, codes::building::MALFORMED_DURATION);
        assert_eq!(output.warnings[0].line, 2);
    }

    #[test]
    fn test_malformed_number_dropped() {
        let output = build_source(
            "double get spacingOdd => 1.2.3;\ndouble get spacingOk => 4;\n",
        );

        assert!(output.model.get(Category::Spacing, "spacingOdd").is_none());
        assert_eq!(
            output.model.get(Category::Spacing, "spacingOk"),
            Some(&TokenValue::Number(4.0))
        );
        assert_eq!(output.warnings[0].code, codes::building::MALFORMED_NUMBER);
        assert!(output.warnings[0].to_string().contains("spacing.spacingOdd"));
    }

    #[test]
    fn test_last_write_wins_within_category() {
        let output = build_source(
            "double get spacingMd => 8.0;\n\
             double get spacingLg => 16.0;\n\
             double get spacingMd => 12.0;\n",
        );

        let spacing: Vec<(&String, &TokenValue)> = output.model.spacing().iter().collect();
        assert_eq!(spacing.len(), 2);
        assert_eq!(spacing[0], (&"spacingMd".to_string(), &TokenValue::Number(12.0)));
        assert_eq!(spacing[1].0, "spacingLg");
    }

    #[test]
    fn test_numeric_scales_are_disjoint() {
        let output = build_source(
            "double get spacingMd => 8.0;\n\
             double get radiusMd => 12.0;\n\
             double get borderThin => 1.0;\n\
             double get fontSizeLg => 20.0;\n",
        );

        assert_eq!(output.model.spacing().len(), 1);
        assert_eq!(output.model.borders().len(), 2);
        assert_eq!(output.model.typography().len(), 1);
        assert!(output.model.get(Category::Spacing, "radiusMd").is_none());
    }

    #[test]
    fn test_empty_input() {
        let output = build_source("");
        assert!(output.model.is_empty());
        assert!(output.warnings.is_empty());
    }
}

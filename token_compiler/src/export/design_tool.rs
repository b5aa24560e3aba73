use super::error::ExportError;
use super::format::{border_numbers, format_timestamp, scalar_colors, spacing_numbers, to_pretty_json, with_unit};
use super::{ExportAdapter, ExportContext};
use crate::tokens::TokenModel;
use indexmap::IndexMap;
use serde::Serialize;

/// Generic design-tool token tree
///
/// Only scalar colors, spacing and border metrics are represented. Every
/// entry is wrapped in a `{value, type}` record.
pub struct DesignToolAdapter;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DesignToolDocument<'a> {
    version: &'a str,
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    generated_at: Option<String>,
    tokens: TokenTree<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TokenTree<'a> {
    color: IndexMap<&'a str, TypedValue>,
    spacing: IndexMap<&'a str, TypedValue>,
    border_radius: IndexMap<&'a str, TypedValue>,
}

#[derive(Serialize)]
struct TypedValue {
    value: String,
    #[serde(rename = "type")]
    kind: &'static str,
}

impl TypedValue {
    fn new(value: String, kind: &'static str) -> Self {
        Self { value, kind }
    }
}

impl ExportAdapter for DesignToolAdapter {
    fn id(&self) -> &'static str {
        "design-tool"
    }

    fn file_name(&self) -> &'static str {
        "figma-tokens.json"
    }

    fn description(&self) -> &'static str {
        "Token tree for design-tool import"
    }

    fn render(&self, model: &TokenModel, ctx: &ExportContext) -> Result<String, ExportError> {
        let tokens = TokenTree {
            color: scalar_colors(model)
                .into_iter()
                .map(|(name, hex)| (name, TypedValue::new(hex.to_string(), "color")))
                .collect(),
            spacing: spacing_numbers(model)
                .into_iter()
                .map(|(name, n)| (name, TypedValue::new(with_unit(n), "dimension")))
                .collect(),
            border_radius: border_numbers(model)
                .into_iter()
                .map(|(name, n)| (name, TypedValue::new(with_unit(n), "borderRadius")))
                .collect(),
        };

        let document = DesignToolDocument {
            version: &ctx.schema_version,
            name: &ctx.document_name,
            generated_at: ctx.generated_at.as_ref().map(format_timestamp),
            tokens,
        };

        to_pretty_json(self.id(), &document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::test_support::{context, sample_model};
    use chrono::{TimeZone, Utc};
    use serde_json::{json, Value};

    #[test]
    fn test_token_tree() {
        let contents = DesignToolAdapter.render(&sample_model(), &context()).unwrap();
        let doc: Value = serde_json::from_str(&contents).unwrap();

        assert_eq!(
            doc,
            json!({
                "version": "2.0.0",
                "name": "Sample Tokens",
                "tokens": {
                    "color": {
                        "primary": {"value": "#336699", "type": "color"},
                        "overlay": {"value": "#00000080", "type": "color"}
                    },
                    "spacing": {
                        "spacingMd": {"value": "8px", "type": "dimension"},
                        "gutter": {"value": "12.5px", "type": "dimension"}
                    },
                    "borderRadius": {
                        "radiusSm": {"value": "4px", "type": "borderRadius"}
                    }
                }
            })
        );
    }

    #[test]
    fn test_generated_at_only_when_set() {
        let mut ctx = context();
        ctx.generated_at = Some(Utc.with_ymd_and_hms(2024, 5, 2, 8, 0, 0).unwrap());

        let contents = DesignToolAdapter.render(&TokenModel::new(), &ctx).unwrap();
        let doc: Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(doc["generatedAt"], "2024-05-02T08:00:00Z");
        assert_eq!(doc["tokens"]["color"], json!({}));
    }
}

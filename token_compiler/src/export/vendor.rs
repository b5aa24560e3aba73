use super::error::ExportError;
use super::flat::ColorSpacing;
use super::format::{format_timestamp, to_pretty_json};
use super::{ExportAdapter, ExportContext};
use crate::tokens::TokenModel;
use serde::Serialize;

/// Same content as the flat maps, wrapped with product name and version
pub struct VendorAdapter;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct VendorDocument<'a> {
    version: &'a str,
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    generated_at: Option<String>,
    #[serde(flatten)]
    body: ColorSpacing<'a>,
}

impl ExportAdapter for VendorAdapter {
    fn id(&self) -> &'static str {
        "vendor"
    }

    fn file_name(&self) -> &'static str {
        "adobe-xd-tokens.json"
    }

    fn description(&self) -> &'static str {
        "Color and spacing maps with product envelope"
    }

    fn render(&self, model: &TokenModel, ctx: &ExportContext) -> Result<String, ExportError> {
        let document = VendorDocument {
            version: &ctx.schema_version,
            name: &ctx.document_name,
            generated_at: ctx.generated_at.as_ref().map(format_timestamp),
            body: ColorSpacing::from_model(model),
        };
        to_pretty_json(self.id(), &document)
    }
}

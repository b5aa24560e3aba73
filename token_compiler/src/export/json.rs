use super::error::ExportError;
use super::format::to_pretty_json;
use super::{ExportAdapter, ExportContext};
use crate::tokens::TokenModel;

/// Full model, all six categories, nested records preserved
pub struct JsonAdapter;

impl ExportAdapter for JsonAdapter {
    fn id(&self) -> &'static str {
        "json"
    }

    fn file_name(&self) -> &'static str {
        "design-tokens.json"
    }

    fn description(&self) -> &'static str {
        "Complete token model as JSON"
    }

    fn render(&self, model: &TokenModel, _ctx: &ExportContext) -> Result<String, ExportError> {
        to_pretty_json(self.id(), model)
    }
}

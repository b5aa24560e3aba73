use super::error::ExportError;
use super::format::{scalar_colors, spacing_numbers, to_pretty_json};
use super::{ExportAdapter, ExportContext};
use crate::tokens::TokenModel;
use indexmap::IndexMap;
use serde::Serialize;

/// Flat color and spacing maps, no envelope
pub struct FlatAdapter;

#[derive(Serialize)]
pub(super) struct ColorSpacing<'a> {
    pub colors: IndexMap<&'a str, &'a str>,
    pub spacing: IndexMap<&'a str, f64>,
}

impl<'a> ColorSpacing<'a> {
    pub fn from_model(model: &'a TokenModel) -> Self {
        Self {
            colors: scalar_colors(model),
            spacing: spacing_numbers(model),
        }
    }
}

impl ExportAdapter for FlatAdapter {
    fn id(&self) -> &'static str {
        "flat"
    }

    fn file_name(&self) -> &'static str {
        "sketch-tokens.json"
    }

    fn description(&self) -> &'static str {
        "Flat color and spacing maps"
    }

    fn render(&self, model: &TokenModel, _ctx: &ExportContext) -> Result<String, ExportError> {
        to_pretty_json(self.id(), &ColorSpacing::from_model(model))
    }
}

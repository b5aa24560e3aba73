//! Export adapters and their registry
//!
//! Each adapter is a pure projection of a finished [`TokenModel`] into the
//! text of exactly one output document. Adapters never write files
//! themselves; the pipeline owns the output directory.

pub mod css;
pub mod design_tool;
pub mod error;
pub mod flat;
pub mod format;
pub mod json;
pub mod readme;
pub mod vendor;

pub use css::CssAdapter;
pub use design_tool::DesignToolAdapter;
pub use error::ExportError;
pub use flat::FlatAdapter;
pub use json::JsonAdapter;
pub use readme::ReadmeAdapter;
pub use vendor::VendorAdapter;

use crate::log_debug;
use crate::tokens::TokenModel;
use chrono::{DateTime, Utc};

/// Format adapter interface
pub trait ExportAdapter: Send + Sync {
    /// Unique adapter identifier, e.g. `css`
    fn id(&self) -> &'static str;

    /// File name inside the output directory
    fn file_name(&self) -> &'static str;

    /// One-line description shown in the generated README
    fn description(&self) -> &'static str;

    /// Render the complete document text
    fn render(&self, model: &TokenModel, ctx: &ExportContext) -> Result<String, ExportError>;

    fn export(&self, model: &TokenModel, ctx: &ExportContext) -> Result<ExportDocument, ExportError> {
        let contents = self.render(model, ctx)?;
        Ok(ExportDocument {
            adapter_id: self.id(),
            file_name: self.file_name(),
            contents,
        })
    }
}

/// Rendered document ready to be written
#[derive(Debug, Clone, PartialEq)]
pub struct ExportDocument {
    pub adapter_id: &'static str,
    pub file_name: &'static str,
    pub contents: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ManifestEntry {
    pub file_name: &'static str,
    pub description: &'static str,
}

/// Metadata shared by all adapters for one run
#[derive(Debug, Clone)]
pub struct ExportContext {
    pub document_name: String,
    pub schema_version: String,
    /// `None` keeps output byte-identical across runs
    pub generated_at: Option<DateTime<Utc>>,
    /// Source path as given, for the README regeneration hint
    pub source: String,
    /// Every document the registry will produce, in registration order
    pub manifest: Vec<ManifestEntry>,
}

/// Ordered set of adapters with unique ids and file names
pub struct AdapterRegistry {
    adapters: Vec<Box<dyn ExportAdapter>>,
}

impl AdapterRegistry {
    pub fn new() -> Self {
        Self {
            adapters: Vec::new(),
        }
    }

    /// Built-in adapters; the README goes last so it can describe the rest
    pub fn standard(generate_readme: bool) -> Result<Self, ExportError> {
        let mut registry = Self::new();
        registry.register(Box::new(JsonAdapter))?;
        registry.register(Box::new(CssAdapter))?;
        registry.register(Box::new(DesignToolAdapter))?;
        registry.register(Box::new(FlatAdapter))?;
        registry.register(Box::new(VendorAdapter))?;
        if generate_readme {
            registry.register(Box::new(ReadmeAdapter))?;
        }
        Ok(registry)
    }

    pub fn register(&mut self, adapter: Box<dyn ExportAdapter>) -> Result<(), ExportError> {
        let id = adapter.id();
        let file_name = adapter.file_name();

        if self.adapters.iter().any(|a| a.id() == id) {
            return Err(ExportError::DuplicateAdapter { id });
        }

        if let Some(existing) = self.adapters.iter().find(|a| a.file_name() == file_name) {
            return Err(ExportError::DuplicateFileName {
                id,
                file_name,
                existing: existing.id(),
            });
        }

        log_debug!("Registered export adapter",
            "adapter" => id,
            "file" => file_name
        );
        self.adapters.push(adapter);
        Ok(())
    }

    pub fn adapters(&self) -> &[Box<dyn ExportAdapter>] {
        &self.adapters
    }

    pub fn manifest(&self) -> Vec<ManifestEntry> {
        self.adapters
            .iter()
            .map(|a| ManifestEntry {
                file_name: a.file_name(),
                description: a.description(),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }
}

impl Default for AdapterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::tokens::{Category, Offset, ShadowToken, TokenValue};

    pub fn context() -> ExportContext {
        ExportContext {
            document_name: "Sample Tokens".to_string(),
            schema_version: "2.0.0".to_string(),
            generated_at: None,
            source: "lib/theme/tokens.dart".to_string(),
            manifest: Vec::new(),
        }
    }

    pub fn sample_model() -> TokenModel {
        let mut model = TokenModel::new();
        let hex = |s: &str| TokenValue::Hex(s.to_string());

        model.insert(Category::Colors, "primary".into(), hex("#336699"));
        model.insert(
            Category::Colors,
            "brand_gradient".into(),
            TokenValue::Gradient(vec!["#112233".into(), "#44556680".into()]),
        );
        model.insert(Category::Colors, "overlay".into(), hex("#00000080"));

        model.insert(Category::Spacing, "spacingMd".into(), TokenValue::Number(8.0));
        model.insert(Category::Spacing, "gutter".into(), TokenValue::Number(12.5));

        model.insert(Category::Typography, "body_fontSize".into(), TokenValue::Number(16.0));
        model.insert(
            Category::Typography,
            "body_fontWeight".into(),
            TokenValue::Symbol("w400".into()),
        );
        model.insert(Category::Typography, "fontSizeLg".into(), TokenValue::Number(20.0));
        model.insert(
            Category::Typography,
            "label_fontWeight".into(),
            TokenValue::Symbol("w500".into()),
        );

        model.insert(
            Category::Shadows,
            "shadowMd".into(),
            TokenValue::Shadow(ShadowToken {
                blur_radius: Some(4.0),
                offset: Some(Offset { x: 0.0, y: 2.0 }),
                alpha: None,
            }),
        );

        model.insert(Category::Animations, "fast_duration".into(), TokenValue::Integer(150));
        model.insert(
            Category::Animations,
            "standard_curve".into(),
            TokenValue::Symbol("easeInOut".into()),
        );

        model.insert(Category::Borders, "radiusSm".into(), TokenValue::Number(4.0));
        model
    }
}

use super::error::ExportError;
use super::format::format_timestamp;
use super::{ExportAdapter, ExportContext};
use crate::tokens::TokenModel;
use std::fmt::Write;

/// Markdown manifest of the generated documents
///
/// Lists every file from the context manifest, so it must be registered
/// after the adapters it describes.
pub struct ReadmeAdapter;

impl ExportAdapter for ReadmeAdapter {
    fn id(&self) -> &'static str {
        "readme"
    }

    fn file_name(&self) -> &'static str {
        "README.md"
    }

    fn description(&self) -> &'static str {
        "This overview"
    }

    fn render(&self, model: &TokenModel, ctx: &ExportContext) -> Result<String, ExportError> {
        let mut md = String::new();

        // Writing into a String cannot fail
        let _ = writeln!(md, "# {}", ctx.document_name);
        let _ = writeln!(md);
        let _ = writeln!(md, "Schema version `{}`.", ctx.schema_version);
        if let Some(ts) = &ctx.generated_at {
            let _ = writeln!(md, "Generated at {}.", format_timestamp(ts));
        }

        let _ = writeln!(md);
        let _ = writeln!(md, "## Files");
        let _ = writeln!(md);
        for entry in &ctx.manifest {
            let _ = writeln!(md, "- `{}` - {}", entry.file_name, entry.description);
        }

        let _ = writeln!(md);
        let _ = writeln!(md, "## Tokens");
        let _ = writeln!(md);
        let _ = writeln!(md, "| Category | Count |");
        let _ = writeln!(md, "|----------|-------|");
        for (category, count) in model.counts() {
            let _ = writeln!(md, "| {} | {} |", category.title(), count);
        }
        let _ = writeln!(md, "| **Total** | {} |", model.total_tokens());

        let _ = writeln!(md);
        let _ = writeln!(md, "## Regenerating");
        let _ = writeln!(md);
        let _ = writeln!(md, "```bash");
        if ctx.source.is_empty() {
            let _ = writeln!(md, "export-tokens");
        } else {
            let _ = writeln!(md, "export-tokens --source {}", ctx.source);
        }
        let _ = writeln!(md, "```");

        Ok(md)
    }
}

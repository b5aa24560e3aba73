use super::error::ExportError;
use super::format::{scalar_colors, spacing_numbers, with_unit};
use super::{ExportAdapter, ExportContext};
use crate::tokens::TokenModel;
use std::fmt::Write;

const FONT_SIZE_SUFFIX: &str = "_fontSize";

/// CSS custom properties on `:root`
///
/// Emits scalar colors, spacing, and `*_fontSize` typography entries. An
/// empty model still produces a valid empty rule.
pub struct CssAdapter;

impl ExportAdapter for CssAdapter {
    fn id(&self) -> &'static str {
        "css"
    }

    fn file_name(&self) -> &'static str {
        "design-tokens.css"
    }

    fn description(&self) -> &'static str {
        "CSS custom properties for web development"
    }

    fn render(&self, model: &TokenModel, _ctx: &ExportContext) -> Result<String, ExportError> {
        let mut css = String::from(":root {\n");

        // Writing into a String cannot fail
        for (name, hex) in scalar_colors(model) {
            let _ = writeln!(css, "  --color-{}: {};", name, hex);
        }

        for (name, value) in spacing_numbers(model) {
            let _ = writeln!(css, "  --spacing-{}: {};", name, with_unit(value));
        }

        for (name, value) in model.typography() {
            let (Some(base), Some(size)) = (name.strip_suffix(FONT_SIZE_SUFFIX), value.as_number())
            else {
                continue;
            };
            let _ = writeln!(css, "  --font-size-{}: {};", base, with_unit(size));
        }

        css.push_str("}\n");
        Ok(css)
    }
}

use serde::Serialize;

/// Token categories in canonical emission order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Colors,
    Typography,
    Spacing,
    Shadows,
    Animations,
    Borders,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Colors,
        Category::Typography,
        Category::Spacing,
        Category::Shadows,
        Category::Animations,
        Category::Borders,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Colors => "colors",
            Category::Typography => "typography",
            Category::Spacing => "spacing",
            Category::Shadows => "shadows",
            Category::Animations => "animations",
            Category::Borders => "borders",
        }
    }

    /// Heading used in human-readable reports
    pub fn title(&self) -> &'static str {
        match self {
            Category::Colors => "Colors",
            Category::Typography => "Typography",
            Category::Spacing => "Spacing",
            Category::Shadows => "Shadows",
            Category::Animations => "Animations",
            Category::Borders => "Borders",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

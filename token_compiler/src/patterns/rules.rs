//! Standard extraction rule table
//!
//! Declaration order matters: within a category, later rules re-bind names
//! bound by earlier ones.

use crate::tokens::Category;

/// How a rule's captures become a typed value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleShape {
    /// `(name, hex digits)`
    Hex,
    /// `(name, stop list)`
    Gradient,
    /// `(name, number)`
    Numeric,
    /// `(name, style body)`
    TextStyle,
    /// `(name, shadow list body)`
    Shadow,
    /// `(name, milliseconds)`
    Duration,
    /// `(name, curve identifier)`
    Curve,
}

/// Restricts which captured names a rule accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameGuard {
    Any,
    /// Name starts with one of the prefixes
    Prefix(&'static [&'static str]),
    /// Name starts with none of the prefixes
    NotPrefix(&'static [&'static str]),
}

impl NameGuard {
    pub fn accepts(&self, name: &str) -> bool {
        match self {
            NameGuard::Any => true,
            NameGuard::Prefix(prefixes) => prefixes.iter().any(|p| name.starts_with(p)),
            NameGuard::NotPrefix(prefixes) => !prefixes.iter().any(|p| name.starts_with(p)),
        }
    }
}

pub const BORDER_PREFIXES: &[&str] = &["radius", "border", "stroke"];
pub const TYPOGRAPHY_PREFIXES: &[&str] = &["fontSize", "textSize", "lineHeight", "letterSpacing"];

/// Union of every prefix claimed by a non-spacing numeric scale
pub const CLAIMED_SCALE_PREFIXES: &[&str] = &[
    "radius",
    "border",
    "stroke",
    "fontSize",
    "textSize",
    "lineHeight",
    "letterSpacing",
];

/// Uncompiled rule
#[derive(Debug, Clone, Copy)]
pub struct RuleDefinition {
    pub id: &'static str,
    pub category: Category,
    pub pattern: &'static str,
    pub shape: RuleShape,
    pub guard: NameGuard,
}

const NUMERIC_GETTER: &str = r"double get (\w+) => ([\d.]+)";

pub const STANDARD_RULES: &[RuleDefinition] = &[
    RuleDefinition {
        id: "color_argb",
        category: Category::Colors,
        pattern: r"Color get (\w+) => const Color\(0x([A-Fa-f0-9]{8})\)",
        shape: RuleShape::Hex,
        guard: NameGuard::Any,
    },
    RuleDefinition {
        id: "color_rgb",
        category: Category::Colors,
        pattern: r"Color get (\w+) => const Color\(0x([A-Fa-f0-9]{6})\)",
        shape: RuleShape::Hex,
        guard: NameGuard::Any,
    },
    RuleDefinition {
        id: "gradient",
        category: Category::Colors,
        pattern: r"LinearGradient get (\w+) => const LinearGradient\(\s*colors:\s*\[([^\]]+)\]",
        shape: RuleShape::Gradient,
        guard: NameGuard::Any,
    },
    RuleDefinition {
        id: "font_scale",
        category: Category::Typography,
        pattern: NUMERIC_GETTER,
        shape: RuleShape::Numeric,
        guard: NameGuard::Prefix(TYPOGRAPHY_PREFIXES),
    },
    RuleDefinition {
        id: "text_style",
        category: Category::Typography,
        pattern: r"TextStyle get (\w+) => (?:const )?TextStyle\(([^)]+)\)",
        shape: RuleShape::TextStyle,
        guard: NameGuard::Any,
    },
    RuleDefinition {
        id: "spacing_scale",
        category: Category::Spacing,
        pattern: NUMERIC_GETTER,
        shape: RuleShape::Numeric,
        guard: NameGuard::NotPrefix(CLAIMED_SCALE_PREFIXES),
    },
    RuleDefinition {
        id: "shadow",
        category: Category::Shadows,
        pattern: r"List<BoxShadow> get (\w+) => (?:const )?\[([^\]]+)\]",
        shape: RuleShape::Shadow,
        guard: NameGuard::Any,
    },
    RuleDefinition {
        id: "duration",
        category: Category::Animations,
        pattern: r"Duration get (\w+) => const Duration\(milliseconds: ([\d.]+)\)",
        shape: RuleShape::Duration,
        guard: NameGuard::Any,
    },
    RuleDefinition {
        id: "curve",
        category: Category::Animations,
        pattern: r"Curve get (\w+) => Curves\.(\w+)",
        shape: RuleShape::Curve,
        guard: NameGuard::Any,
    },
    RuleDefinition {
        id: "border_scale",
        category: Category::Borders,
        pattern: NUMERIC_GETTER,
        shape: RuleShape::Numeric,
        guard: NameGuard::Prefix(BORDER_PREFIXES),
    },
];

// Sub-patterns applied inside composite captures
pub const GRADIENT_STOP: &str = r"Color\(0x([A-Fa-f0-9]{8}|[A-Fa-f0-9]{6})\)";
pub const FONT_SIZE: &str = r"fontSize:\s*([\d.]+)";
pub const FONT_WEIGHT: &str = r"fontWeight:\s*(?:FontWeight\.)?(\w+)";
pub const BLUR_RADIUS: &str = r"blurRadius:\s*([\d.]+)";
pub const OFFSET: &str = r"offset:\s*(?:const )?Offset\(([^)]+)\)";
pub const ALPHA: &str = r"alpha:\s*([\d.]+)";

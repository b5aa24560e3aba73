use serde::Serialize;

/// Typed token value
///
/// Serialized untagged, so a hex color and a symbolic name both come out as
/// plain JSON strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TokenValue {
    /// Normalized `#RRGGBB` or `#RRGGBBAA`
    Hex(String),
    /// Ordered gradient stops, each normalized like [`TokenValue::Hex`]
    Gradient(Vec<String>),
    Number(f64),
    /// Whole milliseconds
    Integer(u64),
    /// Identifier copied from the source, e.g. `w600` or `easeInOut`
    Symbol(String),
    Shadow(ShadowToken),
}

impl TokenValue {
    /// Scalar color, i.e. not a gradient
    pub fn as_hex(&self) -> Option<&str> {
        match self {
            TokenValue::Hex(hex) => Some(hex),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            TokenValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

/// Shadow record; only sub-fields found in the source are present
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShadowToken {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blur_radius: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<Offset>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub alpha: Option<f64>,
}

impl ShadowToken {
    pub fn is_empty(&self) -> bool {
        self.blur_radius.is_none() && self.offset.is_none() && self.alpha.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_untagged_serialization() {
        assert_eq!(
            serde_json::to_value(TokenValue::Hex("#336699".into())).unwrap(),
            json!("#336699")
        );
        assert_eq!(
            serde_json::to_value(TokenValue::Number(8.0)).unwrap(),
            json!(8.0)
        );
        assert_eq!(
            serde_json::to_value(TokenValue::Integer(300)).unwrap(),
            json!(300)
        );
        assert_eq!(
            serde_json::to_value(TokenValue::Gradient(vec!["#000000".into(), "#FFFFFF".into()]))
                .unwrap(),
            json!(["#000000", "#FFFFFF"])
        );
    }

    #[test]
    fn test_shadow_omits_absent_fields() {
        let shadow = ShadowToken {
            blur_radius: Some(4.0),
            offset: None,
            alpha: Some(0.1),
        };
        assert_eq!(
            serde_json::to_value(TokenValue::Shadow(shadow)).unwrap(),
            json!({"blurRadius": 4.0, "alpha": 0.1})
        );
        assert!(ShadowToken::default().is_empty());
    }

    #[test]
    fn test_accessors() {
        assert_eq!(TokenValue::Hex("#FFFFFF".into()).as_hex(), Some("#FFFFFF"));
        assert_eq!(TokenValue::Gradient(vec![]).as_hex(), None);
        assert_eq!(TokenValue::Number(2.5).as_number(), Some(2.5));
        assert_eq!(TokenValue::Symbol("w600".into()).as_number(), None);
    }
}

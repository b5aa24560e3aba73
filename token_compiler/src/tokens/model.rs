use super::category::Category;
use super::value::TokenValue;
use indexmap::IndexMap;
use serde::Serialize;

/// Ordered name → value table for one category
pub type TokenTable = IndexMap<String, TokenValue>;

/// Canonical, category-partitioned token model
///
/// Names are unique within a category. Re-inserting a name replaces the value
/// but keeps the position where the name was first seen. Only the builder
/// inserts; everything downstream gets a shared reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TokenModel {
    colors: TokenTable,
    typography: TokenTable,
    spacing: TokenTable,
    shadows: TokenTable,
    animations: TokenTable,
    borders: TokenTable,
}

impl TokenModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(&self, category: Category) -> &TokenTable {
        match category {
            Category::Colors => &self.colors,
            Category::Typography => &self.typography,
            Category::Spacing => &self.spacing,
            Category::Shadows => &self.shadows,
            Category::Animations => &self.animations,
            Category::Borders => &self.borders,
        }
    }

    fn category_mut(&mut self, category: Category) -> &mut TokenTable {
        match category {
            Category::Colors => &mut self.colors,
            Category::Typography => &mut self.typography,
            Category::Spacing => &mut self.spacing,
            Category::Shadows => &mut self.shadows,
            Category::Animations => &mut self.animations,
            Category::Borders => &mut self.borders,
        }
    }

    /// Last write wins; returns the replaced value if the name was bound
    pub(crate) fn insert(
        &mut self,
        category: Category,
        name: String,
        value: TokenValue,
    ) -> Option<TokenValue> {
        self.category_mut(category).insert(name, value)
    }

    pub fn get(&self, category: Category, name: &str) -> Option<&TokenValue> {
        self.category(category).get(name)
    }

    pub fn colors(&self) -> &TokenTable {
        &self.colors
    }

    pub fn typography(&self) -> &TokenTable {
        &self.typography
    }

    pub fn spacing(&self) -> &TokenTable {
        &self.spacing
    }

    pub fn shadows(&self) -> &TokenTable {
        &self.shadows
    }

    pub fn animations(&self) -> &TokenTable {
        &self.animations
    }

    pub fn borders(&self) -> &TokenTable {
        &self.borders
    }

    /// No category populated
    pub fn is_empty(&self) -> bool {
        Category::ALL.iter().all(|c| self.category(*c).is_empty())
    }

    pub fn total_tokens(&self) -> usize {
        Category::ALL.iter().map(|c| self.category(*c).len()).sum()
    }

    /// Token count per category, in canonical order
    pub fn counts(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .iter()
            .map(|c| (*c, self.category(*c).len()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_write_wins_keeps_first_position() {
        let mut model = TokenModel::new();
        model.insert(Category::Spacing, "a".into(), TokenValue::Number(1.0));
        model.insert(Category::Spacing, "b".into(), TokenValue::Number(2.0));
        let replaced = model.insert(Category::Spacing, "a".into(), TokenValue::Number(3.0));

        assert_eq!(replaced, Some(TokenValue::Number(1.0)));
        let entries: Vec<(&str, f64)> = model
            .spacing()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_number().unwrap()))
            .collect();
        assert_eq!(entries, vec![("a", 3.0), ("b", 2.0)]);
    }

    #[test]
    fn test_cross_category_names_coexist() {
        let mut model = TokenModel::new();
        model.insert(Category::Spacing, "md".into(), TokenValue::Number(8.0));
        model.insert(Category::Borders, "md".into(), TokenValue::Number(4.0));

        assert_eq!(model.get(Category::Spacing, "md"), Some(&TokenValue::Number(8.0)));
        assert_eq!(model.get(Category::Borders, "md"), Some(&TokenValue::Number(4.0)));
        assert_eq!(model.total_tokens(), 2);
    }

    #[test]
    fn test_empty_model() {
        let model = TokenModel::new();
        assert!(model.is_empty());
        assert!(model.counts().iter().all(|(_, n)| *n == 0));
    }

    #[test]
    fn test_serializes_all_categories_in_order() {
        let mut model = TokenModel::new();
        model.insert(Category::Colors, "primary".into(), TokenValue::Hex("#336699".into()));

        let json = serde_json::to_string(&model).unwrap();
        assert_eq!(
            json,
            r##"{"colors":{"primary":"#336699"},"typography":{},"spacing":{},"shadows":{},"animations":{},"borders":{}}"##
        );
    }
}

//! Category catalogue entries.

use serde::{Deserialize, Serialize};

fn default_icon() -> String {
    "📦".to_string()
}

/// A configured inventory category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default = "default_icon")]
    pub icon: String,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: icon.into(),
        }
    }

    /// `"{icon} {name}"`
    pub fn display_name(&self) -> String {
        format!("{} {}", self.icon, self.name)
    }
}

/// The catalogue shipped with a fresh configuration.
pub fn default_categories() -> Vec<Category> {
    vec![
        Category::new("clinical_supplies", "Clinical Supplies", "📋"),
        Category::new("medication", "Medication", "💊"),
        Category::new("therapeutic_tools", "Therapeutic Tools", "🧸"),
        Category::new("office_equipment", "Office Equipment", "💺"),
        Category::new("educational_material", "Educational Material", "📚"),
        Category::new("other", "Other Resources", "📌"),
    ]
}

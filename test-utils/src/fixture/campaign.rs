//! Campaign fixtures for creating in-memory test data.

use entity::campaign;

/// Default test campaign title.
pub const DEFAULT_TITLE: &str = "Test Campaign";

/// Default genre.
pub const DEFAULT_GENRE: &str = "Fantasy";

/// Default character cap.
pub const DEFAULT_MAX_CLASSES: i32 = 4;

/// Creates a campaign entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - title: `"Test Campaign"`
/// - genre: `Some("Fantasy")`
/// - description: `None`
/// - max_classes: `4`
/// - created_by: `1`
pub fn entity() -> campaign::Model {
    entity_builder().build()
}

/// Creates a campaign entity builder for customization.
pub fn entity_builder() -> CampaignEntityBuilder {
    CampaignEntityBuilder::default()
}

/// Builder for customized campaign entity models.
pub struct CampaignEntityBuilder {
    id: i32,
    title: String,
    genre: Option<String>,
    description: Option<String>,
    max_classes: i32,
    created_by: i32,
}

impl Default for CampaignEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            title: DEFAULT_TITLE.to_string(),
            genre: Some(DEFAULT_GENRE.to_string()),
            description: None,
            max_classes: DEFAULT_MAX_CLASSES,
            created_by: 1,
        }
    }
}

impl CampaignEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn max_classes(mut self, max_classes: i32) -> Self {
        self.max_classes = max_classes;
        self
    }

    pub fn created_by(mut self, created_by: i32) -> Self {
        self.created_by = created_by;
        self
    }

    pub fn build(self) -> campaign::Model {
        campaign::Model {
            id: self.id,
            title: self.title,
            genre: self.genre,
            description: self.description,
            max_classes: self.max_classes,
            created_by: self.created_by,
        }
    }
}

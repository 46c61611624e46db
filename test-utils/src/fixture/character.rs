//! Character fixtures for creating in-memory test data.

use entity::character;
use serde_json::json;

/// Default character race.
pub const DEFAULT_RACE: &str = "Human";

/// Creates a character entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Test Character"`
/// - race: `"Human"`
/// - skills: `{"strength": 10}`
/// - notes / inventory: `None`
/// - campaign_id / user_id: `1`
pub fn entity() -> character::Model {
    entity_builder().build()
}

/// Creates a character entity builder for customization.
pub fn entity_builder() -> CharacterEntityBuilder {
    CharacterEntityBuilder::default()
}

/// Builder for customized character entity models.
pub struct CharacterEntityBuilder {
    id: i32,
    name: String,
    race: String,
    skills: serde_json::Value,
    notes: Option<String>,
    inventory: Option<String>,
    campaign_id: i32,
    user_id: i32,
}

impl Default for CharacterEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            name: "Test Character".to_string(),
            race: DEFAULT_RACE.to_string(),
            skills: json!({ "strength": 10 }),
            notes: None,
            inventory: None,
            campaign_id: 1,
            user_id: 1,
        }
    }
}

impl CharacterEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn skills(mut self, skills: serde_json::Value) -> Self {
        self.skills = skills;
        self
    }

    pub fn notes(mut self, notes: Option<String>) -> Self {
        self.notes = notes;
        self
    }

    pub fn campaign_id(mut self, campaign_id: i32) -> Self {
        self.campaign_id = campaign_id;
        self
    }

    pub fn user_id(mut self, user_id: i32) -> Self {
        self.user_id = user_id;
        self
    }

    pub fn build(self) -> character::Model {
        character::Model {
            id: self.id,
            name: self.name,
            race: self.race,
            skills: self.skills,
            notes: self.notes,
            inventory: self.inventory,
            campaign_id: self.campaign_id,
            user_id: self.user_id,
        }
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use domainkit_core::validation::{max_length, required};
use domainkit_core::{Entity, EntityKind, EntityValidationError, FieldErrors, Uuid, Validator};

/// Kind descriptor used by category repositories.
pub const CATEGORY_KIND: EntityKind = EntityKind::new("Category");

/// Longest accepted category name, in characters.
pub const NAME_MAX_LENGTH: usize = 255;

/// Construction input. Absent fields fall back to their defaults.
#[derive(Debug, Clone, Default)]
pub struct CategoryProps {
    pub category_id: Option<Uuid>,
    pub name: String,
    pub description: Option<String>,
    pub is_active: Option<bool>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Command: CreateCategory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCategory {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

/// Entity: Category.
///
/// Every validated field change goes through [`CategoryRules`]; a change that
/// fails validation is rejected and the category keeps its previous state.
#[derive(Debug, Clone, Serialize)]
pub struct Category {
    category_id: Uuid,
    name: String,
    description: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl Category {
    /// The one ruleset owned by this entity kind.
    pub const RULES: CategoryRules = CategoryRules;

    /// Build a category from stored or trusted values, without validation.
    ///
    /// Defaults: a fresh identity, no description, active, created now.
    pub fn new(props: CategoryProps) -> Self {
        Self {
            category_id: props.category_id.unwrap_or_default(),
            name: props.name,
            description: props.description,
            is_active: props.is_active.unwrap_or(true),
            created_at: props.created_at.unwrap_or_else(Utc::now),
        }
    }

    /// Create a new category, validating it once.
    pub fn create(cmd: CreateCategory) -> Result<Self, EntityValidationError> {
        let category = Self::new(CategoryProps {
            name: cmd.name,
            description: cmd.description,
            is_active: cmd.is_active,
            ..CategoryProps::default()
        });
        Self::RULES.validate(&category).into_result()?;
        Ok(category)
    }

    pub fn category_id(&self) -> &Uuid {
        &self.category_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn change_name(&mut self, name: impl Into<String>) -> Result<(), EntityValidationError> {
        let name = name.into();
        self.commit(|draft| draft.name = name)
    }

    pub fn change_description(
        &mut self,
        description: impl Into<String>,
    ) -> Result<(), EntityValidationError> {
        let description = description.into();
        self.commit(|draft| draft.description = Some(description))
    }

    pub fn activate(&mut self) {
        self.is_active = true;
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    /// Apply `change` to a draft and swap it in only if the draft validates.
    fn commit(&mut self, change: impl FnOnce(&mut Self)) -> Result<(), EntityValidationError> {
        let mut draft = self.clone();
        change(&mut draft);
        Self::RULES.validate(&draft).into_result()?;
        *self = draft;
        Ok(())
    }
}

impl Entity for Category {
    type Id = Uuid;

    fn entity_id(&self) -> &Self::Id {
        &self.category_id
    }
}

/// Validation ruleset for [`Category`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryRules;

impl Validator<Category> for CategoryRules {
    fn validate(&self, candidate: &Category) -> FieldErrors {
        let mut errors = FieldErrors::new();
        required(&mut errors, "name", &candidate.name);
        max_length(&mut errors, "name", &candidate.name, NAME_MAX_LENGTH);
        errors
    }
}

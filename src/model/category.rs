use serde::Serialize;

/// Vehicle category as exposed through the API.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

impl Category {
    pub fn from_entity(entity: entity::category::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
        }
    }
}

/// Parameters for creating a category.
#[derive(Debug, Clone)]
pub struct CreateCategoryParams {
    pub name: String,
    pub description: Option<String>,
}

/// Parameters for updating a category. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateCategoryParams {
    pub name: Option<String>,
    pub description: Option<String>,
}

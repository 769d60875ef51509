//! Salon service (catalog entry) domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Service domain entity
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Service {
    /// Unique service identifier
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    /// Service name (unique across the catalog)
    #[schema(example = "Haircut")]
    pub name: String,
    /// Human-readable description
    #[schema(example = "Classic haircut with styling")]
    pub description: String,
    /// Price in the salon's currency
    #[schema(example = 35.0)]
    pub price: f64,
    /// Duration in minutes
    #[schema(example = 45)]
    pub duration: i32,
    /// Record creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Service {
    /// Create a new service with a fresh identifier
    pub fn new(data: CreateService) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: data.name,
            description: data.description,
            price: data.price,
            duration: data.duration,
            created_at: Utc::now(),
        }
    }

    /// Apply a partial update, leaving omitted fields unchanged
    pub fn apply(&mut self, changes: UpdateService) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(description) = changes.description {
            self.description = description;
        }
        if let Some(price) = changes.price {
            self.price = price;
        }
        if let Some(duration) = changes.duration {
            self.duration = duration;
        }
    }
}

/// Service creation data transfer object
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateService {
    /// Service name (unique across the catalog)
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Haircut")]
    pub name: String,
    /// Human-readable description
    #[schema(example = "Classic haircut with styling")]
    pub description: String,
    /// Price in the salon's currency
    #[validate(range(min = 0.0, message = "Price must be non-negative"))]
    #[schema(example = 35.0)]
    pub price: f64,
    /// Duration in minutes
    #[validate(range(min = 1, message = "Duration must be at least one minute"))]
    #[schema(example = 45)]
    pub duration: i32,
}

/// Service update data transfer object (all fields optional)
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateService {
    /// New service name
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: Option<String>,
    /// New description
    pub description: Option<String>,
    /// New price
    #[validate(range(min = 0.0, message = "Price must be non-negative"))]
    pub price: Option<f64>,
    /// New duration in minutes
    #[validate(range(min = 1, message = "Duration must be at least one minute"))]
    pub duration: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_price_only_keeps_other_fields() {
        let mut service = Service::new(CreateService {
            name: "Manicure".to_string(),
            description: "Classic manicure".to_string(),
            price: 25.0,
            duration: 30,
        });

        service.apply(UpdateService {
            name: None,
            description: None,
            price: Some(30.0),
            duration: None,
        });

        assert_eq!(service.price, 30.0);
        assert_eq!(service.name, "Manicure");
        assert_eq!(service.description, "Classic manicure");
        assert_eq!(service.duration, 30);
    }
}

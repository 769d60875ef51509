//! Master (stylist) domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Master domain entity
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Master {
    /// Unique master identifier
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    /// Master display name
    #[schema(example = "Natasha Ivanova")]
    pub name: String,
    /// Master sex
    #[schema(example = "female")]
    pub sex: String,
    /// Contact phone number (unique across masters)
    #[schema(example = "+1-555-0101")]
    pub phone: String,
    /// Years of experience
    #[schema(example = 5)]
    pub experience: i32,
    /// Area of specialization
    #[schema(example = "coloring")]
    pub specialty: String,
    /// Record creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Master {
    /// Create a new master with a fresh identifier
    pub fn new(data: CreateMaster) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: data.name,
            sex: data.sex,
            phone: data.phone,
            experience: data.experience,
            specialty: data.specialty,
            created_at: Utc::now(),
        }
    }

    /// Apply a partial update, leaving omitted fields unchanged
    pub fn apply(&mut self, changes: UpdateMaster) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(sex) = changes.sex {
            self.sex = sex;
        }
        if let Some(phone) = changes.phone {
            self.phone = phone;
        }
        if let Some(experience) = changes.experience {
            self.experience = experience;
        }
        if let Some(specialty) = changes.specialty {
            self.specialty = specialty;
        }
    }
}

/// Master creation data transfer object
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateMaster {
    /// Master display name
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Natasha Ivanova")]
    pub name: String,
    /// Master sex
    #[validate(length(min = 1, message = "Sex is required"))]
    #[schema(example = "female")]
    pub sex: String,
    /// Contact phone number (unique across masters)
    #[validate(length(min = 1, message = "Phone is required"))]
    #[schema(example = "+1-555-0101")]
    pub phone: String,
    /// Years of experience (defaults to 0)
    #[serde(default)]
    #[validate(range(min = 0, message = "Experience must be non-negative"))]
    #[schema(example = 5)]
    pub experience: i32,
    /// Area of specialization
    #[validate(length(min = 1, message = "Specialty is required"))]
    #[schema(example = "coloring")]
    pub specialty: String,
}

/// Master update data transfer object (all fields optional)
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateMaster {
    /// New display name
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: Option<String>,
    /// New sex value
    #[validate(length(min = 1, message = "Sex cannot be empty"))]
    pub sex: Option<String>,
    /// New phone number
    #[validate(length(min = 1, message = "Phone cannot be empty"))]
    pub phone: Option<String>,
    /// New years of experience
    #[validate(range(min = 0, message = "Experience must be non-negative"))]
    pub experience: Option<i32>,
    /// New specialization
    #[validate(length(min = 1, message = "Specialty cannot be empty"))]
    pub specialty: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CreateMaster {
        CreateMaster {
            name: "Anna".to_string(),
            sex: "female".to_string(),
            phone: "+1-555-0199".to_string(),
            experience: 3,
            specialty: "styling".to_string(),
        }
    }

    #[test]
    fn test_new_master_gets_unique_id() {
        let a = Master::new(sample());
        let b = Master::new(sample());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_apply_merges_only_provided_fields() {
        let mut master = Master::new(sample());
        let original_phone = master.phone.clone();

        master.apply(UpdateMaster {
            name: Some("Anna K".to_string()),
            sex: None,
            phone: None,
            experience: Some(4),
            specialty: None,
        });

        assert_eq!(master.name, "Anna K");
        assert_eq!(master.experience, 4);
        assert_eq!(master.phone, original_phone);
        assert_eq!(master.sex, "female");
        assert_eq!(master.specialty, "styling");
    }
}

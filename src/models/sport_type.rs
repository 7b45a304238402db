use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;

use crate::models::error::FieldError;

/// The schema CHECK on `sport_types.name` uses the same bound.
pub const MAX_NAME_LEN: usize = 50;

#[derive(FromRow, Debug, Clone, Serialize, Deserialize)]
pub struct SportType {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewSportType {
    pub name: String,
}

/// Validates a sport type name independently of any request context.
pub fn validate_name(name: &str) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if name.is_empty() {
        errors.push(FieldError::new("name", "name is required"));
    }
    if name.chars().count() > MAX_NAME_LEN {
        errors.push(FieldError::new(
            "name",
            "the name cannot exceed 50 characters",
        ));
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_names_up_to_the_maximum() {
        assert!(validate_name("Football").is_empty());
        assert!(validate_name(&"x".repeat(MAX_NAME_LEN)).is_empty());
    }

    #[test]
    fn rejects_empty_name() {
        let errors = validate_name("");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "name");
    }

    #[test]
    fn rejects_name_over_the_maximum() {
        let errors = validate_name(&"x".repeat(MAX_NAME_LEN + 1));
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("50"));
    }
}

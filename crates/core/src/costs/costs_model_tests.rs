//! Tests for cost domain models.

use crate::constants::COST_CATEGORIES;
use crate::costs::NewCost;
use crate::errors::{Error, ValidationError};

fn new_cost(category: &str) -> NewCost {
    NewCost {
        description: "weekly groceries".to_string(),
        category: category.to_string(),
        userid: 1,
        sum: 42.5,
        date: None,
    }
}

#[test]
fn every_known_category_is_accepted() {
    for category in COST_CATEGORIES {
        assert!(new_cost(category).validate().is_ok(), "category {category}");
    }
}

#[test]
fn unknown_category_is_rejected() {
    let err = new_cost("vacations").validate().unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationError::InvalidInput(_))
    ));
}

#[test]
fn category_check_is_case_sensitive() {
    assert!(new_cost("Food").validate().is_err());
}

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::location::check_contact_number;

/// Ordering user's contact plus the store-scoped credits key (secondary auth
/// token, distinct from the API key).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDetails {
    pub contact_number: String,
    pub credits_key: String,
}

impl UserDetails {
    pub fn new(contact_number: impl Into<String>, credits_key: impl Into<String>) -> Result<Self> {
        let contact_number = contact_number.into();
        check_contact_number(&contact_number)?;

        Ok(Self {
            contact_number,
            credits_key: credits_key.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::UserDetails;
    use crate::error::Error;

    #[test]
    fn valid_user_constructs() {
        let user = UserDetails::new("9876543210", "test_credits_456").unwrap();
        assert_eq!(user.credits_key, "test_credits_456");
    }

    #[test]
    fn malformed_contact_number_fails_validation() {
        let result = UserDetails::new("12345678901", "test_credits_456");
        assert!(matches!(result, Err(Error::Validation { .. })));
    }
}

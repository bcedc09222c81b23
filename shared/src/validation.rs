//! Input validation for credential fields
//!
//! Both fields are required and otherwise unconstrained; uniqueness of
//! usernames is the store's job, not the validator's.

/// Validate a username
pub fn validate_username(username: &str) -> Result<(), String> {
    if username.is_empty() {
        return Err("Username is required.".to_string());
    }
    Ok(())
}

/// Validate a password
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.is_empty() {
        return Err("Password is required.".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_validate_username() {
        assert!(validate_username("alice").is_ok());
        assert!(validate_username("a").is_ok());
        assert_eq!(
            validate_username("").unwrap_err(),
            "Username is required."
        );
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("secret").is_ok());
        assert_eq!(
            validate_password("").unwrap_err(),
            "Password is required."
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_any_nonempty_username_is_valid(username in ".{1,64}") {
            prop_assert!(validate_username(&username).is_ok());
        }

        #[test]
        fn prop_any_nonempty_password_is_valid(password in ".{1,128}") {
            prop_assert!(validate_password(&password).is_ok());
        }
    }
}

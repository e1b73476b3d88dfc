use std::{fmt, path::Path};

use alloy::primitives::{Address, U256};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Mint allowances to grant: `users[i]` receives `amounts[i]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VipGrantRequest {
    pub users: Vec<Address>,
    pub amounts: Vec<U256>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("users and amounts differ in length ({users} users, {amounts} amounts)")]
    LengthMismatch { users: usize, amounts: usize },

    #[error("grant request has no users")]
    Empty,
}

impl VipGrantRequest {
    #[cfg(test)]
    pub fn new(users: Vec<Address>, amounts: Vec<U256>) -> Self {
        Self { users, amounts }
    }

    /// Reads a request from a JSON file shaped `{"users": [...], "amounts": [...]}`.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading grant request {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("parsing grant request {}", path.display()))
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.users.len() != self.amounts.len() {
            return Err(ValidationError::LengthMismatch {
                users: self.users.len(),
                amounts: self.amounts.len(),
            });
        }
        if self.users.is_empty() {
            return Err(ValidationError::Empty);
        }
        Ok(())
    }
}

impl fmt::Display for VipGrantRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{users: {:?}, amounts: [", self.users)?;
        for (i, amount) in self.amounts.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{amount}")?;
        }
        write!(f, "]}}")
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use alloy::primitives::address;

    use super::*;

    const ALICE: Address = address!("647384899878C28EC3F61d100daF4d40471f1852");
    const BOB: Address = address!("983267588688C28EC3F61d100daF4d40471f1853");

    #[test]
    fn test_validate_accepts_paired_request() {
        let request = VipGrantRequest::new(vec![ALICE, BOB], vec![U256::from(1), U256::from(2)]);
        assert_eq!(request.validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_length_mismatch() {
        let request = VipGrantRequest::new(vec![ALICE, BOB], vec![U256::from(1)]);
        assert_eq!(
            request.validate(),
            Err(ValidationError::LengthMismatch {
                users: 2,
                amounts: 1
            })
        );
    }

    #[test]
    fn test_validate_rejects_empty_request() {
        assert_eq!(
            VipGrantRequest::default().validate(),
            Err(ValidationError::Empty)
        );
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"users": ["{ALICE}", "{BOB}"], "amounts": ["0x5", "0xa"]}}"#
        )
        .unwrap();

        let request = VipGrantRequest::from_json_file(file.path()).unwrap();

        assert_eq!(request.users, vec![ALICE, BOB]);
        assert_eq!(request.amounts, vec![U256::from(5), U256::from(10)]);
    }

    #[test]
    fn test_display_lists_amounts_in_decimal() {
        let request = VipGrantRequest::new(vec![ALICE], vec![U256::from(42)]);
        assert!(request.to_string().ends_with("amounts: [42]}"));
    }
}

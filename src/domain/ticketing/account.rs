//! Purchasing account identifier.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::InvalidPurchaseError;

/// Identifier of the account making a purchase. Always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct AccountId(i64);

impl AccountId {
    pub fn new(value: i64) -> Result<Self, InvalidPurchaseError> {
        if value <= 0 {
            return Err(InvalidPurchaseError::InvalidAccountId);
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for AccountId {
    type Error = InvalidPurchaseError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AccountId> for i64 {
    fn from(id: AccountId) -> Self {
        id.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AccountId {
    type Err = InvalidPurchaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .parse::<i64>()
            .map_err(|_| InvalidPurchaseError::InvalidAccountId)?;
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_ids() {
        assert_eq!(AccountId::new(1).unwrap().value(), 1);
        assert_eq!(AccountId::new(i64::MAX).unwrap().value(), i64::MAX);
    }

    #[test]
    fn rejects_zero_and_negative_ids() {
        assert_eq!(AccountId::new(0), Err(InvalidPurchaseError::InvalidAccountId));
        assert_eq!(AccountId::new(-3), Err(InvalidPurchaseError::InvalidAccountId));
    }

    #[test]
    fn parses_integer_text() {
        assert_eq!("42".parse::<AccountId>().unwrap().value(), 42);
    }

    #[test]
    fn rejects_non_integer_text() {
        for input in ["abc", "1.5", "", "-1", "0"] {
            assert_eq!(
                input.parse::<AccountId>(),
                Err(InvalidPurchaseError::InvalidAccountId),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn serde_applies_validation() {
        let id: AccountId = serde_json::from_str("7").unwrap();
        assert_eq!(id.value(), 7);
        assert_eq!(serde_json::to_string(&id).unwrap(), "7");
        assert!(serde_json::from_str::<AccountId>("0").is_err());
    }
}

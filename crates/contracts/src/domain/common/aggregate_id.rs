use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Trait for aggregate identifier types.
///
/// Identifiers travel through URLs (`/product/:id`), so every id must
/// round-trip through its string form.
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    fn as_string(&self) -> String;

    fn from_string(s: &str) -> Result<Self, String>;
}

impl AggregateId for u32 {
    fn as_string(&self) -> String {
        ToString::to_string(self)
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.trim()
            .parse::<u32>()
            .map_err(|e| format!("Invalid u32: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u32_round_trip() {
        assert_eq!(<u32 as AggregateId>::from_string("42"), Ok(42));
        assert_eq!(42u32.as_string(), "42");
        assert!(<u32 as AggregateId>::from_string("abc").is_err());
    }
}

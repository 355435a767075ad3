use serde::{Deserialize, Serialize};

/// Identifier of a catalog listing (a game).
/// Doubles as the merge key of cart line items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListingId(i64);

impl ListingId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw numeric identifier.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ListingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ListingId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_expose_raw_value() {
        let id = ListingId::new(42);
        assert_eq!(id.value(), 42);
    }

    #[test]
    fn should_display_listing_id() {
        let id = ListingId::new(7);
        assert_eq!(format!("{}", id), "7");
    }

    #[test]
    fn should_serialize_as_plain_number() {
        let id = ListingId::new(3);
        assert_eq!(serde_json::to_string(&id).unwrap(), "3");

        let parsed: ListingId = serde_json::from_str("3").unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn should_convert_from_i64() {
        let id: ListingId = 99.into();
        assert_eq!(id, ListingId::new(99));
    }
}

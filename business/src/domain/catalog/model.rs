use bigdecimal::BigDecimal;

use crate::domain::shared::value_objects::ListingId;

/// A purchasable game as published by the hosted catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub id: ListingId,
    pub title: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub image_url: Option<String>,
    /// `false` for upcoming games that cannot be bought yet.
    pub available: bool,
}

/// Catalog front page: listings that can be bought now and upcoming ones.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeaturedListings {
    pub available: Vec<Listing>,
    pub upcoming: Vec<Listing>,
}

impl FeaturedListings {
    /// Splits listings by availability, keeping the catalog order in each group.
    pub fn from_listings(listings: Vec<Listing>) -> Self {
        let (available, upcoming) = listings.into_iter().partition(|l| l.available);
        Self {
            available,
            upcoming,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.available.is_empty() && self.upcoming.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn listing(id: i64, available: bool) -> Listing {
        Listing {
            id: ListingId::new(id),
            title: format!("Game {}", id),
            description: None,
            price: BigDecimal::from_str("9.99").unwrap(),
            image_url: None,
            available,
        }
    }

    #[test]
    fn should_split_listings_by_availability() {
        let featured = FeaturedListings::from_listings(vec![
            listing(1, true),
            listing(2, false),
            listing(3, true),
        ]);

        let available: Vec<i64> = featured.available.iter().map(|l| l.id.value()).collect();
        let upcoming: Vec<i64> = featured.upcoming.iter().map(|l| l.id.value()).collect();
        assert_eq!(available, vec![1, 3]);
        assert_eq!(upcoming, vec![2]);
    }

    #[test]
    fn should_report_empty_catalog() {
        assert!(FeaturedListings::from_listings(Vec::new()).is_empty());
        assert!(!FeaturedListings::from_listings(vec![listing(1, false)]).is_empty());
    }
}

//! Stores, ratings, and aggregate statistics.

use crate::error::DomainError;
use crate::ids::{StoreId, UserId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A star rating value, always in 1-5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct RatingValue(u8);

impl RatingValue {
    /// Minimum allowed rating.
    pub const MIN: u8 = 1;
    /// Maximum allowed rating.
    pub const MAX: u8 = 5;

    /// Create a rating value, rejecting anything outside 1-5.
    pub fn new(value: u8) -> Result<Self, DomainError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(DomainError::RatingOutOfRange(value))
        }
    }

    /// Create a rating value, clamping into 1-5. For trusted fixture data
    /// where the range is known good.
    pub fn clamped(value: u8) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    /// Get the raw value.
    pub fn get(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for RatingValue {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RatingValue> for u8 {
    fn from(value: RatingValue) -> u8 {
        value.0
    }
}

impl fmt::Display for RatingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single rating of a store by an identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    /// The identity that submitted the rating.
    pub user_id: UserId,
    /// The star value.
    #[serde(rename = "rating")]
    pub value: RatingValue,
    /// The date the rating was submitted.
    pub date: NaiveDate,
}

impl Rating {
    /// Create a rating with an explicit date.
    pub fn new(user_id: UserId, value: RatingValue, date: NaiveDate) -> Self {
        Self { user_id, value, date }
    }

    /// Create a rating dated today.
    pub fn today(user_id: UserId, value: RatingValue) -> Self {
        Self::new(user_id, value, chrono::Local::now().date_naive())
    }
}

/// A store on the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    /// Unique identifier.
    pub id: StoreId,
    /// Store name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Street address.
    pub address: String,
    /// Owning identity, if the store has been claimed.
    #[serde(default)]
    pub owner_id: Option<UserId>,
    /// Ratings in submission order.
    #[serde(default)]
    pub ratings: Vec<Rating>,
}

impl Store {
    /// Create an unowned, unrated store.
    pub fn new(
        id: StoreId,
        name: impl Into<String>,
        email: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            address: address.into(),
            owner_id: None,
            ratings: Vec::new(),
        }
    }

    /// Assign an owner.
    pub fn with_owner(mut self, owner_id: UserId) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    /// Submit a rating. A user rates a store at most once: a second rating
    /// by the same user replaces the first.
    pub fn rate(&mut self, rating: Rating) {
        match self.ratings.iter_mut().find(|r| r.user_id == rating.user_id) {
            Some(existing) => *existing = rating,
            None => self.ratings.push(rating),
        }
    }

    /// The rating previously submitted by a user, if any.
    pub fn rating_by(&self, user_id: &UserId) -> Option<&Rating> {
        self.ratings.iter().find(|r| &r.user_id == user_id)
    }

    /// Mean of all rating values. `None` for an unrated store.
    pub fn average_rating(&self) -> Option<f64> {
        if self.ratings.is_empty() {
            return None;
        }
        let sum: u32 = self.ratings.iter().map(|r| u32::from(r.value.get())).sum();
        Some(f64::from(sum) / self.ratings.len() as f64)
    }
}

/// Aggregate platform statistics for the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    /// Number of known identities.
    pub total_users: usize,
    /// Number of stores.
    pub total_stores: usize,
    /// Number of ratings across all stores.
    pub total_ratings: usize,
}

impl Statistics {
    /// Collect statistics from a user count and a store slice.
    pub fn collect(total_users: usize, stores: &[Store]) -> Self {
        Self {
            total_users,
            total_stores: stores.len(),
            total_ratings: stores.iter().map(|s| s.ratings.len()).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> Store {
        Store::new(StoreId::new("1"), "Grocery Mart", "contact@grocerymart.com", "123 Market Street")
    }

    #[test]
    fn test_rating_value_bounds() {
        assert!(RatingValue::new(1).is_ok());
        assert!(RatingValue::new(5).is_ok());
        assert_eq!(RatingValue::new(0), Err(DomainError::RatingOutOfRange(0)));
        assert_eq!(RatingValue::new(6), Err(DomainError::RatingOutOfRange(6)));
    }

    #[test]
    fn test_rating_value_clamped() {
        assert_eq!(RatingValue::clamped(0).get(), 1);
        assert_eq!(RatingValue::clamped(3).get(), 3);
        assert_eq!(RatingValue::clamped(9).get(), 5);
    }

    #[test]
    fn test_rating_value_serde_rejects_out_of_range() {
        let ok: Result<RatingValue, _> = serde_json::from_str("4");
        assert_eq!(ok.unwrap().get(), 4);
        let bad: Result<RatingValue, _> = serde_json::from_str("9");
        assert!(bad.is_err());
    }

    #[test]
    fn test_unrated_store_has_no_average() {
        assert_eq!(store().average_rating(), None);
    }

    #[test]
    fn test_average_rating() {
        let mut s = store();
        s.rate(Rating::today(UserId::new("user-1"), RatingValue::new(4).unwrap()));
        s.rate(Rating::today(UserId::new("admin-1"), RatingValue::new(5).unwrap()));
        assert_eq!(s.average_rating(), Some(4.5));
    }

    #[test]
    fn test_re_rating_replaces() {
        let mut s = store();
        let user = UserId::new("user-1");
        s.rate(Rating::today(user.clone(), RatingValue::new(2).unwrap()));
        s.rate(Rating::today(user.clone(), RatingValue::new(5).unwrap()));
        assert_eq!(s.ratings.len(), 1);
        assert_eq!(s.rating_by(&user).unwrap().value.get(), 5);
        assert_eq!(s.average_rating(), Some(5.0));
    }

    #[test]
    fn test_statistics_collect() {
        let mut a = store();
        a.rate(Rating::today(UserId::new("user-1"), RatingValue::new(3).unwrap()));
        a.rate(Rating::today(UserId::new("user-2"), RatingValue::new(4).unwrap()));
        let b = Store::new(StoreId::new("2"), "Tech Haven", "info@techhaven.com", "456 Electronics Avenue");
        let stats = Statistics::collect(3, &[a, b]);
        assert_eq!(stats.total_users, 3);
        assert_eq!(stats.total_stores, 2);
        assert_eq!(stats.total_ratings, 2);
    }
}

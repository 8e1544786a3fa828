use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub mod add_friend_form;
pub mod friend_store;
pub mod split_bill_form;

pub use add_friend_form::AddFriendForm;
pub use friend_store::{FriendStore, StoreCommand, UiState};
pub use split_bill_form::SplitBillForm;

/// Avatar service used when the user does not type their own image URL
pub const DEFAULT_IMAGE_URL: &str = "https://i.pravatar.cc/48";

/// Opaque friend identifier. Seed friends carry numeric ids, new friends a UUID v4.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FriendId(String);

impl FriendId {
    /// Generate a fresh unique id
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FriendId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for FriendId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for FriendId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Friend {
    pub id: FriendId,
    pub name: String,
    /// Avatar URI
    pub image: String,
    /// Net amount owed: negative when the user owes the friend, positive when the friend owes the user
    pub balance: f64,
}

impl Friend {
    /// Build a friend with a settled balance
    pub fn new(id: FriendId, name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            image: image.into(),
            balance: 0.0,
        }
    }

    pub fn status(&self) -> BalanceStatus {
        BalanceStatus::from_balance(self.balance)
    }

    /// Human-readable status line shown under the friend's name
    pub fn status_line(&self) -> String {
        match self.status() {
            BalanceStatus::YouOwe(amount) => format!("You owe {} {}", self.name, amount),
            BalanceStatus::OwesYou(amount) => format!("{} owes you {}", self.name, amount),
            BalanceStatus::Even => format!("You and {} are even", self.name),
        }
    }
}

/// Who is on which side of a balance, with the absolute amount
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BalanceStatus {
    /// The user owes the friend
    YouOwe(f64),
    /// The friend owes the user
    OwesYou(f64),
    Even,
}

impl BalanceStatus {
    pub fn from_balance(balance: f64) -> Self {
        if balance < 0.0 {
            BalanceStatus::YouOwe(balance.abs())
        } else if balance > 0.0 {
            BalanceStatus::OwesYou(balance)
        } else {
            BalanceStatus::Even
        }
    }

    /// CSS class for the status line
    pub fn css_class(&self) -> &'static str {
        match self {
            BalanceStatus::YouOwe(_) => "red",
            BalanceStatus::OwesYou(_) => "green",
            BalanceStatus::Even => "",
        }
    }
}

/// Party fronting the bill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Payer {
    #[default]
    You,
    Friend,
}

impl Payer {
    /// Value used by the payer `<select>` options
    pub fn as_str(&self) -> &'static str {
        match self {
            Payer::You => "you",
            Payer::Friend => "friend",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "you" => Some(Payer::You),
            "friend" => Some(Payer::Friend),
            _ => None,
        }
    }
}

/// Startup configuration for the friend list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FriendsConfig {
    /// Seed URL the add-friend form starts with
    pub default_image_url: String,
    pub initial_friends: Vec<Friend>,
}

impl Default for FriendsConfig {
    fn default() -> Self {
        let seed = |id: &str, name: &str| {
            Friend::new(
                FriendId::from(id),
                name,
                format!("{}?u={}", DEFAULT_IMAGE_URL, id),
            )
        };

        Self {
            default_image_url: DEFAULT_IMAGE_URL.to_string(),
            initial_friends: vec![
                seed("118836", "Clark"),
                seed("933372", "Sarah"),
                seed("499476", "Anthony"),
            ],
        }
    }
}

impl FriendsConfig {
    /// Parse a JSON override. Missing fields fall back to the defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid friends config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Reason a form submission was ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormRejection {
    #[error("Friend name is empty")]
    EmptyName,
    #[error("Image URL is empty")]
    EmptyImage,
    #[error("Bill value is empty")]
    EmptyBill,
    #[error("Your expense is empty")]
    EmptyShare,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn friend_with_balance(balance: f64) -> Friend {
        Friend {
            balance,
            ..Friend::new(FriendId::from("1"), "Clark", "https://i.pravatar.cc/48?u=1")
        }
    }

    #[test]
    fn test_status_from_balance_sign() {
        assert_eq!(BalanceStatus::from_balance(-7.0), BalanceStatus::YouOwe(7.0));
        assert_eq!(BalanceStatus::from_balance(20.0), BalanceStatus::OwesYou(20.0));
        assert_eq!(BalanceStatus::from_balance(0.0), BalanceStatus::Even);
    }

    #[test]
    fn test_status_lines() {
        assert_eq!(friend_with_balance(-7.0).status_line(), "You owe Clark 7");
        assert_eq!(friend_with_balance(60.0).status_line(), "Clark owes you 60");
        assert_eq!(friend_with_balance(12.5).status_line(), "Clark owes you 12.5");
        assert_eq!(friend_with_balance(0.0).status_line(), "You and Clark are even");
    }

    #[test]
    fn test_status_css_class() {
        assert_eq!(friend_with_balance(-1.0).status().css_class(), "red");
        assert_eq!(friend_with_balance(1.0).status().css_class(), "green");
        assert_eq!(friend_with_balance(0.0).status().css_class(), "");
    }

    #[test]
    fn test_payer_values() {
        assert_eq!(Payer::default(), Payer::You);
        assert_eq!(Payer::parse(Payer::You.as_str()), Some(Payer::You));
        assert_eq!(Payer::parse(Payer::Friend.as_str()), Some(Payer::Friend));
        assert_eq!(Payer::parse("someone"), None);
    }

    #[test]
    fn test_default_config_seeds_three_settled_friends() {
        let config = FriendsConfig::default();
        let names: Vec<&str> = config.initial_friends.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Clark", "Sarah", "Anthony"]);
        assert!(config.initial_friends.iter().all(|f| f.balance == 0.0));
        assert_eq!(config.initial_friends[0].image, "https://i.pravatar.cc/48?u=118836");
        assert_eq!(config.default_image_url, DEFAULT_IMAGE_URL);
    }

    #[test]
    fn test_config_from_json() {
        let json = r#"{
            "initial_friends": [
                { "id": "42", "name": "Dana", "image": "https://example.com/dana.png", "balance": -3.5 }
            ]
        }"#;

        let config = FriendsConfig::from_json(json).unwrap();
        assert_eq!(config.default_image_url, DEFAULT_IMAGE_URL);
        assert_eq!(config.initial_friends.len(), 1);
        assert_eq!(config.initial_friends[0].id, FriendId::from("42"));
        assert_eq!(config.initial_friends[0].balance, -3.5);
    }

    #[test]
    fn test_config_from_invalid_json() {
        assert!(matches!(
            FriendsConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_generated_ids_are_unique() {
        assert_ne!(FriendId::generate(), FriendId::generate());
    }
}

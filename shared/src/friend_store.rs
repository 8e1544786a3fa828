//! Friend store for the split-bill app.
//!
//! The store is the single owner of the friend list, the current selection and
//! the add-friend form visibility. Views never touch it directly: they send a
//! [`StoreCommand`] and render whatever state comes back.

use log::{debug, warn};

use crate::{Friend, FriendId, FriendsConfig};

/// Commands views send to the store
#[derive(Debug, Clone, PartialEq)]
pub enum StoreCommand {
    AddFriend(Friend),
    SelectFriend(FriendId),
    ToggleAddForm,
    ApplyBillDelta(f64),
}

/// What the app is currently showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiState {
    Idle,
    AddingFriend,
    FriendSelected,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FriendStore {
    friends: Vec<Friend>,
    selected: Option<FriendId>,
    show_add_friend: bool,
}

impl Default for FriendStore {
    fn default() -> Self {
        Self::from_config(&FriendsConfig::default())
    }
}

impl FriendStore {
    /// Create a store holding `friends` in order. Later duplicates of an id are dropped.
    pub fn new(friends: Vec<Friend>) -> Self {
        let mut store = Self {
            friends: Vec::with_capacity(friends.len()),
            selected: None,
            show_add_friend: false,
        };
        for friend in friends {
            store.push_unique(friend);
        }
        store
    }

    pub fn from_config(config: &FriendsConfig) -> Self {
        Self::new(config.initial_friends.clone())
    }

    pub fn friends(&self) -> &[Friend] {
        &self.friends
    }

    pub fn selected_id(&self) -> Option<&FriendId> {
        self.selected.as_ref()
    }

    pub fn selected_friend(&self) -> Option<&Friend> {
        let id = self.selected.as_ref()?;
        self.friends.iter().find(|friend| &friend.id == id)
    }

    pub fn is_selected(&self, id: &FriendId) -> bool {
        self.selected.as_ref() == Some(id)
    }

    pub fn show_add_friend(&self) -> bool {
        self.show_add_friend
    }

    /// Selection wins over the add form when both are showing
    pub fn ui_state(&self) -> UiState {
        if self.selected.is_some() {
            UiState::FriendSelected
        } else if self.show_add_friend {
            UiState::AddingFriend
        } else {
            UiState::Idle
        }
    }

    /// Apply one command
    pub fn apply(&mut self, command: StoreCommand) {
        match command {
            StoreCommand::AddFriend(friend) => self.add_friend(friend),
            StoreCommand::SelectFriend(id) => self.select_friend(&id),
            StoreCommand::ToggleAddForm => self.toggle_add_form(),
            StoreCommand::ApplyBillDelta(delta) => self.apply_bill_delta(delta),
        }
    }

    /// Append a new friend and close the add form
    pub fn add_friend(&mut self, friend: Friend) {
        if self.push_unique(friend) {
            self.show_add_friend = false;
        }
    }

    /// Toggle selection of `id`. Always hides the add form.
    pub fn select_friend(&mut self, id: &FriendId) {
        if !self.contains(id) {
            warn!("Ignoring selection of unknown friend {}", id);
            return;
        }

        if self.is_selected(id) {
            debug!("Deselecting friend {}", id);
            self.selected = None;
        } else {
            debug!("Selecting friend {}", id);
            self.selected = Some(id.clone());
        }
        self.show_add_friend = false;
    }

    pub fn toggle_add_form(&mut self) {
        self.show_add_friend = !self.show_add_friend;
    }

    /// Add `delta` to the selected friend's balance, then clear the selection
    pub fn apply_bill_delta(&mut self, delta: f64) {
        let Some(id) = self.selected.take() else {
            warn!("Ignoring bill delta {} with no friend selected", delta);
            return;
        };

        self.friends = self
            .friends
            .iter()
            .map(|friend| {
                if friend.id == id {
                    Friend {
                        balance: friend.balance + delta,
                        ..friend.clone()
                    }
                } else {
                    friend.clone()
                }
            })
            .collect();

        debug!("Applied bill delta {} to friend {}", delta, id);
    }

    fn contains(&self, id: &FriendId) -> bool {
        self.friends.iter().any(|friend| &friend.id == id)
    }

    fn push_unique(&mut self, friend: Friend) -> bool {
        if self.contains(&friend.id) {
            warn!("Friend id {} already exists, not adding {}", friend.id, friend.name);
            return false;
        }

        debug!("Adding friend {} ({})", friend.name, friend.id);
        self.friends.push(friend);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clark() -> FriendId {
        FriendId::from("118836")
    }

    fn sarah() -> FriendId {
        FriendId::from("933372")
    }

    fn balance_of(store: &FriendStore, id: &FriendId) -> f64 {
        store
            .friends()
            .iter()
            .find(|friend| &friend.id == id)
            .map(|friend| friend.balance)
            .unwrap()
    }

    #[test]
    fn test_default_store_is_idle_with_seed_friends() {
        let store = FriendStore::default();
        assert_eq!(store.friends().len(), 3);
        assert_eq!(store.selected_id(), None);
        assert!(!store.show_add_friend());
        assert_eq!(store.ui_state(), UiState::Idle);
    }

    #[test]
    fn test_add_friend_appends_in_order() {
        let mut store = FriendStore::default();
        let before = store.friends().to_vec();

        store.add_friend(Friend::new(FriendId::from("new"), "Dana", "https://i.pravatar.cc/48?u=new"));

        assert_eq!(store.friends().len(), 4);
        assert_eq!(&store.friends()[..3], &before[..]);
        assert_eq!(store.friends()[3].name, "Dana");
        assert_eq!(store.friends()[3].balance, 0.0);
    }

    #[test]
    fn test_add_friend_closes_add_form() {
        let mut store = FriendStore::default();
        store.toggle_add_form();
        assert_eq!(store.ui_state(), UiState::AddingFriend);

        store.add_friend(Friend::new(FriendId::from("new"), "Dana", "img"));
        assert_eq!(store.ui_state(), UiState::Idle);
    }

    #[test]
    fn test_add_friend_with_existing_id_is_ignored() {
        let mut store = FriendStore::default();
        store.toggle_add_form();

        store.add_friend(Friend::new(clark(), "Another Clark", "img"));

        assert_eq!(store.friends().len(), 3);
        assert_eq!(store.friends()[0].name, "Clark");
        assert!(store.show_add_friend());
    }

    #[test]
    fn test_new_drops_duplicate_ids() {
        let store = FriendStore::new(vec![
            Friend::new(FriendId::from("1"), "A", "img"),
            Friend::new(FriendId::from("1"), "B", "img"),
        ]);
        assert_eq!(store.friends().len(), 1);
        assert_eq!(store.friends()[0].name, "A");
    }

    #[test]
    fn test_select_twice_clears_selection() {
        let mut store = FriendStore::default();

        store.select_friend(&clark());
        assert!(store.is_selected(&clark()));
        assert_eq!(store.selected_friend().map(|f| f.name.as_str()), Some("Clark"));
        assert_eq!(store.ui_state(), UiState::FriendSelected);

        store.select_friend(&clark());
        assert_eq!(store.selected_id(), None);
        assert_eq!(store.ui_state(), UiState::Idle);
    }

    #[test]
    fn test_select_other_friend_switches_selection() {
        let mut store = FriendStore::default();
        store.select_friend(&clark());
        store.select_friend(&sarah());
        assert!(store.is_selected(&sarah()));
        assert!(!store.is_selected(&clark()));
    }

    #[test]
    fn test_select_hides_add_form() {
        let mut store = FriendStore::default();
        store.toggle_add_form();
        assert!(store.show_add_friend());

        store.select_friend(&clark());
        assert!(!store.show_add_friend());
        assert_eq!(store.ui_state(), UiState::FriendSelected);
    }

    #[test]
    fn test_select_unknown_friend_is_ignored() {
        let mut store = FriendStore::default();
        store.toggle_add_form();

        store.select_friend(&FriendId::from("missing"));

        assert_eq!(store.selected_id(), None);
        assert!(store.show_add_friend());
    }

    #[test]
    fn test_toggle_add_form() {
        let mut store = FriendStore::default();
        store.toggle_add_form();
        assert!(store.show_add_friend());
        store.toggle_add_form();
        assert!(!store.show_add_friend());
    }

    #[test]
    fn test_apply_bill_delta_updates_only_selected_friend() {
        let mut store = FriendStore::default();
        store.select_friend(&clark());

        store.apply_bill_delta(60.0);

        assert_eq!(balance_of(&store, &clark()), 60.0);
        assert_eq!(balance_of(&store, &sarah()), 0.0);
        assert_eq!(store.selected_id(), None);
    }

    #[test]
    fn test_apply_bill_delta_accumulates() {
        let mut store = FriendStore::default();
        store.select_friend(&sarah());
        store.apply_bill_delta(60.0);
        store.select_friend(&sarah());
        store.apply_bill_delta(-40.0);

        assert_eq!(balance_of(&store, &sarah()), 20.0);
    }

    #[test]
    fn test_apply_bill_delta_without_selection_is_noop() {
        let mut store = FriendStore::default();
        let before = store.clone();

        store.apply_bill_delta(25.0);

        assert_eq!(store, before);
    }

    #[test]
    fn test_apply_dispatches_commands() {
        let mut store = FriendStore::default();

        store.apply(StoreCommand::ToggleAddForm);
        assert_eq!(store.ui_state(), UiState::AddingFriend);

        store.apply(StoreCommand::AddFriend(Friend::new(FriendId::from("x"), "Dana", "img")));
        assert_eq!(store.friends().len(), 4);

        store.apply(StoreCommand::SelectFriend(FriendId::from("x")));
        assert_eq!(store.ui_state(), UiState::FriendSelected);

        store.apply(StoreCommand::ApplyBillDelta(-40.0));
        assert_eq!(balance_of(&store, &FriendId::from("x")), -40.0);
        assert_eq!(store.ui_state(), UiState::Idle);
    }
}

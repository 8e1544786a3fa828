use std::rc::Rc;

use shared::{Friend, FriendId, FriendStore, FriendsConfig, StoreCommand};
use yew::prelude::*;

/// Reducer state wrapping the friend store
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FriendStoreState {
    pub store: FriendStore,
}

impl Reducible for FriendStoreState {
    type Action = StoreCommand;

    fn reduce(self: Rc<Self>, command: Self::Action) -> Rc<Self> {
        log::debug!("Applying {:?}", command);
        let mut store = self.store.clone();
        store.apply(command);
        Rc::new(Self { store })
    }
}

pub struct UseFriendStoreResult {
    pub store: FriendStore,
    pub actions: FriendStoreActions,
}

#[derive(Clone, PartialEq)]
pub struct FriendStoreActions {
    pub add_friend: Callback<Friend>,
    pub select_friend: Callback<FriendId>,
    pub toggle_add_form: Callback<()>,
    pub apply_bill_delta: Callback<f64>,
}

#[hook]
pub fn use_friend_store(config: &FriendsConfig) -> UseFriendStoreResult {
    let state = {
        let config = config.clone();
        use_reducer(move || FriendStoreState {
            store: FriendStore::from_config(&config),
        })
    };
    let dispatcher = state.dispatcher();

    let add_friend = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |friend: Friend| dispatcher.dispatch(StoreCommand::AddFriend(friend)))
    };

    let select_friend = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |id: FriendId| dispatcher.dispatch(StoreCommand::SelectFriend(id)))
    };

    let toggle_add_form = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |_: ()| dispatcher.dispatch(StoreCommand::ToggleAddForm))
    };

    let apply_bill_delta =
        Callback::from(move |delta: f64| dispatcher.dispatch(StoreCommand::ApplyBillDelta(delta)));

    UseFriendStoreResult {
        store: state.store.clone(),
        actions: FriendStoreActions {
            add_friend,
            select_friend,
            toggle_add_form,
            apply_bill_delta,
        },
    }
}

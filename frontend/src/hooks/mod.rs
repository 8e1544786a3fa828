pub mod use_friend_store;

use shared::FriendsConfig;

use super::logging::Logger;

/// Id of the `<script type="application/json">` element holding the config
pub const CONFIG_ELEMENT_ID: &str = "friends-config";

/// Read the startup config from the page, falling back to the built-in seed friends
pub fn load_friends_config() -> FriendsConfig {
    let text = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());

    config_from_text(text.as_deref())
}

fn config_from_text(text: Option<&str>) -> FriendsConfig {
    let Some(text) = text.filter(|text| !text.trim().is_empty()) else {
        Logger::info_with_component("Config", "No friends config in page, using defaults");
        return FriendsConfig::default();
    };

    match FriendsConfig::from_json(text) {
        Ok(config) => {
            Logger::info_with_component(
                "Config",
                &format!("Loaded {} friends from page config", config.initial_friends.len()),
            );
            config
        }
        Err(e) => {
            Logger::warn_with_component("Config", &format!("{}, using defaults", e));
            FriendsConfig::default()
        }
    }
}

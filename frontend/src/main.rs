use log::LevelFilter;
use shared::FriendsConfig;
use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::button::Button;
use components::forms::add_friend_form::AddFriendForm;
use components::forms::split_bill_form::SplitBillForm;
use components::friend_list::FriendList;
use hooks::use_friend_store::use_friend_store;
use services::config::load_friends_config;
use services::logging::Logger;

#[derive(Properties, PartialEq)]
struct AppProps {
    config: FriendsConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let friend_store = use_friend_store(&props.config);
    let store = &friend_store.store;
    let actions = &friend_store.actions;

    let on_toggle_add_form = actions.toggle_add_form.reform(|_: MouseEvent| ());

    html! {
        <div class="app">
            <div class="sidebar">
                <FriendList
                    friends={store.friends().to_vec()}
                    selected={store.selected_id().cloned()}
                    on_select={actions.select_friend.clone()}
                />

                {if store.show_add_friend() {
                    html! {
                        <AddFriendForm
                            default_image={props.config.default_image_url.clone()}
                            on_add={actions.add_friend.clone()}
                        />
                    }
                } else { html! {} }}

                <Button onclick={Some(on_toggle_add_form)}>
                    {if store.show_add_friend() { "close" } else { "Add Friend" }}
                </Button>
            </div>

            // Keyed by friend so switching friends starts a fresh form
            {if let Some(friend) = store.selected_friend() {
                html! {
                    <SplitBillForm
                        key={friend.id.to_string()}
                        friend={friend.clone()}
                        on_split={actions.apply_bill_delta.clone()}
                    />
                }
            } else { html! {} }}
        </div>
    }
}

fn main() {
    Logger::init(LevelFilter::Debug);

    let config = load_friends_config();
    Logger::info_with_component("App", "Starting split bill app");

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}

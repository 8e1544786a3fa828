use shared::{AddFriendForm as AddFriendFormState, Friend};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::button::Button;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct AddFriendFormProps {
    /// Image URL the form starts with and resets to
    pub default_image: String,
    pub on_add: Callback<Friend>,
}

#[function_component(AddFriendForm)]
pub fn add_friend_form(props: &AddFriendFormProps) -> Html {
    let form = {
        let default_image = props.default_image.clone();
        use_state(move || AddFriendFormState::new(default_image))
    };

    let on_name_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.set_name(input.value());
            form.set(next);
        })
    };

    let on_image_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.set_image(input.value());
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let on_add = props.on_add.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let mut next = (*form).clone();
            match next.submit() {
                Ok(friend) => {
                    Logger::info_with_component("AddFriendForm", &format!("Adding {}", friend.name));
                    form.set(next);
                    on_add.emit(friend);
                }
                Err(reason) => Logger::debug_with_component("AddFriendForm", &reason.to_string()),
            }
        })
    };

    html! {
        <form class="form-add-friend" onsubmit={on_submit}>
            <label for="friend-name">{"👫 Friend name"}</label>
            <input
                type="text"
                id="friend-name"
                value={form.name.clone()}
                oninput={on_name_input}
            />

            <label for="friend-image">{"🌄 Image URL"}</label>
            <input
                type="text"
                id="friend-image"
                value={form.image.clone()}
                oninput={on_image_input}
            />

            <Button>{"Add"}</Button>
        </form>
    }
}

use shared::{Friend, FriendId};
use yew::prelude::*;

use super::button::Button;

#[derive(Properties, PartialEq)]
pub struct FriendListProps {
    pub friends: Vec<Friend>,
    pub selected: Option<FriendId>,
    pub on_select: Callback<FriendId>,
}

#[function_component(FriendList)]
pub fn friend_list(props: &FriendListProps) -> Html {
    html! {
        <ul>
            {for props.friends.iter().map(|friend| {
                let is_selected = props.selected.as_ref() == Some(&friend.id);
                html! {
                    <FriendItem
                        key={friend.id.to_string()}
                        friend={friend.clone()}
                        {is_selected}
                        on_select={props.on_select.clone()}
                    />
                }
            })}
        </ul>
    }
}

#[derive(Properties, PartialEq)]
pub struct FriendItemProps {
    pub friend: Friend,
    pub is_selected: bool,
    pub on_select: Callback<FriendId>,
}

#[function_component(FriendItem)]
pub fn friend_item(props: &FriendItemProps) -> Html {
    let friend = &props.friend;
    let status = friend.status();

    let onclick = {
        let id = friend.id.clone();
        props.on_select.reform(move |_: MouseEvent| id.clone())
    };

    html! {
        <li class={classes!(props.is_selected.then_some("selected"))}>
            <img src={friend.image.clone()} alt={friend.name.clone()} />
            <h3>{&friend.name}</h3>
            <p class={status.css_class()}>{friend.status_line()}</p>
            <Button onclick={Some(onclick)}>
                {if props.is_selected { "close" } else { "select" }}
            </Button>
        </li>
    }
}

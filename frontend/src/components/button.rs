use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    /// Left unset inside forms so the button submits
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    pub children: Children,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    html! {
        <button class="button" onclick={props.onclick.clone()}>
            { for props.children.iter() }
        </button>
    }
}

use shared::{Friend, Payer, SplitBillForm as SplitBillFormState};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::button::Button;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct SplitBillFormProps {
    pub friend: Friend,
    pub on_split: Callback<f64>,
}

#[function_component(SplitBillForm)]
pub fn split_bill_form(props: &SplitBillFormProps) -> Html {
    let form = use_state(SplitBillFormState::new);
    let friend_name = &props.friend.name;

    let on_bill_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            if next.set_bill(&input.value()) {
                form.set(next);
            } else {
                input.set_value(&form.bill_text());
            }
        })
    };

    // A rejected share leaves the state untouched, so the DOM value is restored by hand
    let on_share_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            if next.set_your_share(&input.value()) {
                form.set(next);
            } else {
                input.set_value(&form.your_share_text());
            }
        })
    };

    let on_payer_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(payer) = Payer::parse(&select.value()) {
                let mut next = (*form).clone();
                next.set_payer(payer);
                form.set(next);
            }
        })
    };

    let on_submit = {
        let form = form.clone();
        let on_split = props.on_split.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            match form.submit() {
                Ok(delta) => {
                    Logger::info_with_component("SplitBillForm", &format!("Splitting bill, delta {}", delta));
                    on_split.emit(delta);
                }
                Err(reason) => Logger::debug_with_component("SplitBillForm", &reason.to_string()),
            }
        })
    };

    let payer = form.payer();

    html! {
        <form class="form-split-bill" onsubmit={on_submit}>
            <h2>{format!("Split bill with {}", friend_name)}</h2>

            <label for="bill">{"💰 Bill value"}</label>
            <input
                type="text"
                id="bill"
                value={form.bill_text()}
                oninput={on_bill_input}
            />

            <label for="your-share">{"🧍 Your expense"}</label>
            <input
                type="text"
                id="your-share"
                value={form.your_share_text()}
                oninput={on_share_input}
            />

            <label for="friend-share">{format!("👫 {}'s expense", friend_name)}</label>
            <input
                type="text"
                id="friend-share"
                disabled={true}
                value={form.friend_share().to_string()}
            />

            <label for="payer">{"🤑 Who is paying the bill"}</label>
            <select id="payer" onchange={on_payer_change}>
                <option value={Payer::You.as_str()} selected={payer == Payer::You}>{"You"}</option>
                <option value={Payer::Friend.as_str()} selected={payer == Payer::Friend}>
                    {friend_name}
                </option>
            </select>

            <Button>{"Split bill"}</Button>
        </form>
    }
}

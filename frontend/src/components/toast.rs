use yew::prelude::*;

use super::icons::icon_close;
use crate::state::{Notice, NoticeKind};

#[derive(Properties, PartialEq)]
pub struct ToastHostProps {
    pub notices: Vec<Notice>,
    pub on_dismiss: Callback<u64>,
}

#[function_component(ToastHost)]
pub fn toast_host(props: &ToastHostProps) -> Html {
    if props.notices.is_empty() {
        return html! {};
    }

    html! {
        <div class="fixed bottom-4 right-4 z-50 flex flex-col gap-2 w-80" role="status" aria-live="polite">
            { for props.notices.iter().map(|notice| {
                let on_dismiss = props.on_dismiss.clone();
                let id = notice.id;
                let tone = match notice.kind {
                    NoticeKind::Success => "border-green-500 text-green-800 bg-green-50",
                    NoticeKind::Error => "border-accent text-dark bg-white",
                };
                html! {
                    <div key={id.to_string()} class={classes!("flex", "items-start", "justify-between", "gap-3", "px-4", "py-3", "border-l-4", "rounded-md", "shadow-md", "text-sm", tone)}>
                        <span class="flex-1 break-words">{ notice.message.clone() }</span>
                        <button type="button" aria-label="Dismiss" class="text-gray-400 hover:text-gray-500"
                            onclick={Callback::from(move |_: MouseEvent| on_dismiss.emit(id))}>
                            { icon_close() }
                        </button>
                    </div>
                }
            }) }
        </div>
    }
}

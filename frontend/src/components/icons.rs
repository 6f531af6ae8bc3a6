use yew::prelude::*;

fn icon_base(path: &'static str, class: &'static str) -> Html {
    html! {
        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class={class}>
            <path d={path}></path>
        </svg>
    }
}

pub fn icon_chevron_up(class: &'static str) -> Html {
    icon_base("M18 15l-6-6-6 6", class)
}
pub fn icon_chevron_down(class: &'static str) -> Html {
    icon_base("M6 9l6 6 6-6", class)
}
pub fn icon_chevron_left() -> Html {
    icon_base("M15 18l-6-6 6-6", "h-5 w-5")
}
pub fn icon_chevron_right() -> Html {
    icon_base("M9 18l6-6-6-6", "h-5 w-5")
}
pub fn icon_close() -> Html {
    icon_base("M18 6L6 18M6 6l12 12", "h-5 w-5")
}
pub fn icon_upload() -> Html {
    icon_base("M21 15v4a2 2 0 01-2 2H5a2 2 0 01-2-2v-4M17 8l-5-5-5 5M12 3v12", "h-5 w-5 mr-2")
}
pub fn icon_trash() -> Html {
    icon_base("M3 6h18M19 6l-1 14a2 2 0 01-2 2H8a2 2 0 01-2-2L5 6M10 11v6M14 11v6M9 6V4a1 1 0 011-1h4a1 1 0 011 1v2", "h-5 w-5 mr-2")
}
pub fn icon_rotate() -> Html {
    icon_base("M1 4v6h6M3.51 15a9 9 0 102.13-9.36L1 10", "h-4 w-4 mr-1")
}

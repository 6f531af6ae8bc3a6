use chrono::NaiveDate;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use super::icons::icon_rotate;
use crate::model::{FilterChange, FilterState};

#[derive(Properties, PartialEq)]
pub struct FiltersPanelProps {
    pub filter: FilterState,
    pub categories: Vec<String>,
    pub on_change: Callback<FilterChange>,
    pub on_reset: Callback<()>,
}

fn input_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

#[function_component(FiltersPanel)]
pub fn filters_panel(props: &FiltersPanelProps) -> Html {
    let on_start = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(FilterChange::start_date(&input.value()));
        })
    };
    let on_end = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(FilterChange::end_date(&input.value()));
        })
    };
    let on_category = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(FilterChange::category(&select.value()));
        })
    };
    let on_reset = {
        let on_reset = props.on_reset.clone();
        Callback::from(move |_: MouseEvent| on_reset.emit(()))
    };

    let selected = props.filter.category.clone().unwrap_or_default();
    let field_class = "mt-1 block w-full rounded-md border-gray-300 shadow-sm focus:border-accent focus:ring-accent sm:text-sm h-[38px]";

    html! {
        <div class="bg-white rounded-lg shadow-md overflow-hidden">
            <div class="px-4 py-5 sm:px-6">
                <div class="flex justify-between items-center mb-4">
                    <h2 class="text-lg font-medium text-dark">{"Filters"}</h2>
                    <button type="button" onclick={on_reset} class="inline-flex items-center text-accent hover:text-accent/90 transition-colors">
                        { icon_rotate() }
                        {"Reset"}
                    </button>
                </div>
                <div class="space-y-4">
                    <div>
                        <label for="start-date" class="block text-sm font-medium text-dark">{"Start Date"}</label>
                        <input type="date" id="start-date" value={input_value(props.filter.start_date)} onchange={on_start} class={field_class} />
                    </div>
                    <div>
                        <label for="end-date" class="block text-sm font-medium text-dark">{"End Date"}</label>
                        <input type="date" id="end-date" value={input_value(props.filter.end_date)} onchange={on_end} class={field_class} />
                    </div>
                    <div>
                        <label for="category" class="block text-sm font-medium text-dark">{"Category"}</label>
                        <select id="category" onchange={on_category} class={field_class}>
                            <option value="" selected={selected.is_empty()}>{"All Categories"}</option>
                            { for props.categories.iter().map(|category| html! {
                                <option key={category.clone()} value={category.clone()} selected={*category == selected}>{ category.clone() }</option>
                            }) }
                        </select>
                    </div>
                </div>
            </div>
        </div>
    }
}

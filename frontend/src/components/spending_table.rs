use yew::prelude::*;

use super::icons::{icon_chevron_down, icon_chevron_left, icon_chevron_right, icon_chevron_up};
use crate::format::{format_amount, format_date};
use crate::model::{SortDirection, SortField, SortState, Transaction};
use crate::pagination::PageItem;
use crate::pipeline::PageView;

#[derive(Properties, PartialEq)]
pub struct SpendingTableProps {
    pub view: PageView,
    pub window: Vec<PageItem>,
    pub sort: SortState,
    pub loading: bool,
    pub empty_message: &'static str,
    pub on_sort: Callback<SortField>,
    pub on_row_click: Callback<Transaction>,
    pub on_page_change: Callback<usize>,
}

fn sort_icon(field: SortField, sort: SortState) -> Html {
    if field != sort.field {
        return icon_chevron_up("h-4 w-4 text-gray-400 opacity-0 group-hover:opacity-100");
    }
    match sort.direction {
        SortDirection::Asc => icon_chevron_up("h-4 w-4 text-accent"),
        SortDirection::Desc => icon_chevron_down("h-4 w-4 text-accent"),
    }
}

#[function_component(SpendingTable)]
pub fn spending_table(props: &SpendingTableProps) -> Html {
    let view = &props.view;

    let header = |field: SortField| {
        let on_sort = props.on_sort.clone();
        html! {
            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider cursor-pointer group"
                onclick={Callback::from(move |_: MouseEvent| on_sort.emit(field))}>
                <div class="flex items-center space-x-1">
                    <span>{ field.label() }</span>
                    { sort_icon(field, props.sort) }
                </div>
            </th>
        }
    };

    let body = if props.loading {
        html! {
            <tr><td colspan="3" class="px-6 py-4 text-center text-sm text-gray-500">{"Loading..."}</td></tr>
        }
    } else if view.rows.is_empty() {
        html! {
            <tr><td colspan="3" class="px-6 py-4 text-center text-sm text-gray-500">{ props.empty_message }</td></tr>
        }
    } else {
        html! {
            <>
            { for view.rows.iter().enumerate().map(|(idx, item)| {
                let on_row_click = props.on_row_click.clone();
                let record = item.clone();
                html! {
                    <tr key={format!("{}-{}-{}", item.date, item.category, idx)}
                        onclick={Callback::from(move |_: MouseEvent| on_row_click.emit(record.clone()))}
                        class="cursor-pointer hover:bg-accent/10 transition-colors">
                        <td class="px-6 py-4 whitespace-nowrap text-sm text-dark">{ format_date(item.date) }</td>
                        <td class="px-6 py-4 whitespace-nowrap text-sm text-dark">{ &item.category }</td>
                        <td class="px-6 py-4 whitespace-nowrap text-sm text-dark">{ format_amount(item.amount) }</td>
                    </tr>
                }
            }) }
            </>
        }
    };

    html! {
        <div class="bg-white rounded-lg shadow-md overflow-hidden">
            <div class="px-4 py-5 sm:px-6 flex justify-between items-center border-b border-gray-200">
                <h2 class="text-lg font-medium text-dark">{"Monthly Spending"}</h2>
                <p class="text-sm text-gray-500">{ format!("{} transactions found", view.total_count) }</p>
            </div>
            <div class="overflow-x-auto">
                <table class="min-w-full divide-y divide-gray-200">
                    <thead class="bg-gray-50">
                        <tr>
                            { header(SortField::Date) }
                            { header(SortField::Category) }
                            { header(SortField::Amount) }
                        </tr>
                    </thead>
                    <tbody class="bg-white divide-y divide-gray-200">
                        { body }
                    </tbody>
                </table>
            </div>
            { pagination_bar(view, &props.window, &props.on_page_change) }
        </div>
    }
}

fn pagination_bar(view: &PageView, window: &[PageItem], on_page_change: &Callback<usize>) -> Html {
    if view.total_pages <= 1 {
        return html! {};
    }

    let current = view.page;
    let on_prev = {
        let cb = on_page_change.clone();
        Callback::from(move |_: MouseEvent| cb.emit(current.saturating_sub(1).max(1)))
    };
    let on_next = {
        let cb = on_page_change.clone();
        let last = view.total_pages;
        Callback::from(move |_: MouseEvent| cb.emit((current + 1).min(last)))
    };
    let step_class = "relative inline-flex items-center px-2 py-2 border border-gray-300 bg-white text-sm font-medium text-gray-500 hover:bg-gray-50 disabled:opacity-50";

    html! {
        <div class="px-4 py-3 bg-gray-50 border-t border-gray-200 sm:px-6">
            <div class="flex items-center justify-between">
                <p class="text-sm text-dark">
                    {"Showing "}<span class="font-medium">{ view.first_index().to_string() }</span>
                    {" to "}<span class="font-medium">{ view.last_index().to_string() }</span>
                    {" of "}<span class="font-medium">{ view.total_count.to_string() }</span>{" results"}
                </p>
                <nav class="relative z-0 inline-flex rounded-md shadow-sm -space-x-px" aria-label="Pagination">
                    <button type="button" onclick={on_prev} disabled={current <= 1} class={classes!(step_class, "rounded-l-md")}>
                        { icon_chevron_left() }
                    </button>
                    { for window.iter().enumerate().map(|(idx, item)| match *item {
                        PageItem::Page(page) => {
                            let cb = on_page_change.clone();
                            let class = if page == current {
                                "relative inline-flex items-center px-4 py-2 border text-sm font-medium z-10 bg-accent/10 border-accent text-dark"
                            } else {
                                "relative inline-flex items-center px-4 py-2 border text-sm font-medium bg-white border-gray-300 text-gray-500 hover:bg-gray-50"
                            };
                            html! {
                                <button type="button" key={idx} class={class} onclick={Callback::from(move |_: MouseEvent| cb.emit(page))}>
                                    { page.to_string() }
                                </button>
                            }
                        }
                        PageItem::Ellipsis => html! {
                            <span key={idx} class="relative inline-flex items-center px-4 py-2 border border-gray-300 bg-white text-sm font-medium text-gray-700">
                                {"..."}
                            </span>
                        },
                    }) }
                    <button type="button" onclick={on_next} disabled={current >= view.total_pages} class={classes!(step_class, "rounded-r-md")}>
                        { icon_chevron_right() }
                    </button>
                </nav>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct DetailModalProps {
    pub record: Transaction,
    pub on_close: Callback<()>,
}

#[function_component(DetailModal)]
pub fn detail_modal(props: &DetailModalProps) -> Html {
    let on_close = {
        let cb = props.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let record = &props.record;
    let field = |label: &'static str, value: String| {
        html! {
            <div>
                <label class="block text-sm font-medium text-dark">{ label }</label>
                <p class="mt-1 text-sm text-dark">{ value }</p>
            </div>
        }
    };

    html! {
        <div class="fixed inset-0 bg-dark bg-opacity-75 flex items-center justify-center p-4 z-50">
            <div class="bg-white rounded-lg shadow-xl max-w-lg w-full">
                <div class="px-6 py-4 border-b border-gray-200 flex justify-between items-center">
                    <h3 class="text-lg font-medium text-dark">{"Transaction Details"}</h3>
                    <button type="button" onclick={on_close.clone()} class="text-gray-400 hover:text-gray-500">
                        { super::icons::icon_close() }
                    </button>
                </div>
                <div class="px-6 py-4 space-y-4">
                    { field("Date", format_date(record.date)) }
                    { field("Category", record.category.clone()) }
                    { field("Amount", format_amount(record.amount)) }
                    { field("Description", record.description.clone()) }
                </div>
                <div class="px-6 py-4 bg-gray-50 rounded-b-lg">
                    <button type="button" onclick={on_close} class="w-full inline-flex justify-center px-4 py-2 border border-transparent text-sm font-medium rounded-md text-white bg-accent hover:bg-accent/90">
                        {"Close"}
                    </button>
                </div>
            </div>
        </div>
    }
}

use wasm_bindgen_futures::spawn_local;
use web_sys::{File, HtmlInputElement};
use yew::prelude::*;

use crate::api::HttpApi;
use crate::components::{DetailModal, FiltersPanel, SpendingTable, ToastHost, UploadPanel};
use crate::config::AppConfig;
use crate::flows;
use crate::model::{FilterChange, SortField, Transaction};
use crate::state::{Action, ViewState};

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: AppConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let page_size = props.config.page_size;
    let api = use_memo(|base_url: &String| HttpApi::new(base_url), props.config.api_base_url.clone());
    let state = use_reducer(move || ViewState::new(page_size));
    let chosen_file = use_mut_ref(|| None::<File>);
    let file_input = use_node_ref();

    {
        let api = api.clone();
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    flows::refresh(&*api, &|action| dispatcher.dispatch(action)).await;
                });
                || ()
            },
            (),
        );
    }

    let on_filter = {
        let dispatcher = state.dispatcher();
        Callback::from(move |change: FilterChange| dispatcher.dispatch(Action::SetFilter(change)))
    };
    let on_reset = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(Action::ResetFilters))
    };
    let on_sort = {
        let dispatcher = state.dispatcher();
        Callback::from(move |field: SortField| dispatcher.dispatch(Action::SetSort(field)))
    };
    let on_page_change = {
        let dispatcher = state.dispatcher();
        Callback::from(move |page: usize| dispatcher.dispatch(Action::SetPage(page)))
    };
    let on_row_click = {
        let dispatcher = state.dispatcher();
        Callback::from(move |record: Transaction| dispatcher.dispatch(Action::SelectRecord(record)))
    };
    let on_close_detail = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(Action::CloseDetail))
    };
    let on_dismiss = {
        let dispatcher = state.dispatcher();
        Callback::from(move |id: u64| dispatcher.dispatch(Action::DismissNotice(id)))
    };

    let on_file_change = {
        let dispatcher = state.dispatcher();
        let chosen_file = chosen_file.clone();
        Callback::from(move |file: Option<File>| {
            // Keep the previous choice when the picker is dismissed.
            if let Some(file) = file {
                dispatcher.dispatch(Action::ChooseFile(Some(file.name())));
                *chosen_file.borrow_mut() = Some(file);
            }
        })
    };

    let on_upload = {
        let api = api.clone();
        let state = state.clone();
        let chosen_file = chosen_file.clone();
        let file_input = file_input.clone();
        Callback::from(move |_: ()| {
            let api = api.clone();
            let snapshot = (*state).clone();
            let dispatcher = state.dispatcher();
            let chosen_file = chosen_file.clone();
            let file_input = file_input.clone();
            let file = chosen_file.borrow().clone();
            spawn_local(async move {
                let dispatch = |action: Action| dispatcher.dispatch(action);
                if flows::upload(&*api, &snapshot, file, &dispatch).await {
                    chosen_file.borrow_mut().take();
                    if let Some(input) = file_input.cast::<HtmlInputElement>() {
                        input.set_value("");
                    }
                }
            });
        })
    };

    let on_delete_request = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(Action::RequestDeleteAll))
    };
    let on_delete_cancel = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(Action::CancelDeleteAll))
    };
    let on_delete_confirm = {
        let api = api.clone();
        let state = state.clone();
        Callback::from(move |_: ()| {
            let api = api.clone();
            let snapshot = (*state).clone();
            let dispatcher = state.dispatcher();
            spawn_local(async move {
                flows::confirm_delete_all(&*api, &snapshot, &|action| dispatcher.dispatch(action))
                    .await;
            });
        })
    };

    let view = state.view();
    let window = state.page_window(view.total_pages);
    let categories = state.categories();
    let detail = state.detail.clone();

    html! {
        <div>
            <div class="py-8 px-4 sm:px-6 lg:px-8">
                <div class="flex gap-8 max-w-7xl mx-auto">
                    <div class="w-1/3 space-y-6">
                        <FiltersPanel
                            filter={state.filter.clone()}
                            categories={categories}
                            on_change={on_filter}
                            on_reset={on_reset}
                        />
                        <UploadPanel
                            file_name={state.chosen_file.clone()}
                            uploading={state.uploading}
                            can_upload={state.can_upload()}
                            delete_flow={state.delete_flow}
                            deleting={state.deleting}
                            input_ref={file_input}
                            on_file_change={on_file_change}
                            on_upload={on_upload}
                            on_delete_request={on_delete_request}
                            on_delete_confirm={on_delete_confirm}
                            on_delete_cancel={on_delete_cancel}
                        />
                    </div>
                    <div class="w-2/3">
                        <SpendingTable
                            view={view}
                            window={window}
                            sort={state.sort}
                            loading={state.loading}
                            empty_message={state.empty_message()}
                            on_sort={on_sort}
                            on_row_click={on_row_click}
                            on_page_change={on_page_change}
                        />
                    </div>
                </div>
            </div>
            {
                if let Some(record) = detail {
                    html! { <DetailModal {record} on_close={on_close_detail} /> }
                } else { html! {} }
            }
            <ToastHost notices={state.notices.clone()} on_dismiss={on_dismiss} />
        </div>
    }
}

/// Mounts the dashboard into the document body.
pub fn run_app(config: AppConfig) {
    yew::Renderer::<App>::with_props(AppProps { config }).render();
}

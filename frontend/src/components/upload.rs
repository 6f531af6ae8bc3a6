use web_sys::{File, HtmlInputElement};
use yew::prelude::*;

use super::icons::{icon_trash, icon_upload};
use crate::state::DeleteFlow;

#[derive(Properties, PartialEq)]
pub struct UploadPanelProps {
    pub file_name: Option<String>,
    pub uploading: bool,
    pub can_upload: bool,
    pub delete_flow: DeleteFlow,
    pub deleting: bool,
    pub input_ref: NodeRef,
    pub on_file_change: Callback<Option<File>>,
    pub on_upload: Callback<()>,
    pub on_delete_request: Callback<()>,
    pub on_delete_confirm: Callback<()>,
    pub on_delete_cancel: Callback<()>,
}

#[function_component(UploadPanel)]
pub fn upload_panel(props: &UploadPanelProps) -> Html {
    let on_change = {
        let on_file_change = props.on_file_change.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let file = input.files().and_then(|files| files.get(0));
            on_file_change.emit(file);
        })
    };
    let on_submit = {
        let on_upload = props.on_upload.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_upload.emit(());
        })
    };
    let on_delete_request = {
        let cb = props.on_delete_request.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_delete_confirm = {
        let cb = props.on_delete_confirm.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_delete_cancel = {
        let cb = props.on_delete_cancel.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    let accent_button = "w-full inline-flex justify-center items-center px-4 py-2 border border-transparent text-sm font-medium rounded-md shadow-sm text-white bg-accent hover:bg-accent/90 disabled:opacity-50 transition-colors";
    let chooser_label = props
        .file_name
        .clone()
        .unwrap_or_else(|| "Choose CSV File".to_string());

    html! {
        <>
            <div class="bg-white p-6 rounded-lg shadow-md">
                <h2 class="text-lg font-medium text-dark mb-4">{"Upload Data"}</h2>
                <form onsubmit={on_submit} class="space-y-4">
                    <div>
                        <label for="file-upload" class="flex items-center justify-center px-4 py-2 border-2 border-accent rounded-md shadow-sm text-sm font-medium text-dark bg-white hover:bg-accent/10 cursor-pointer transition-colors">
                            { icon_upload() }
                            { chooser_label }
                            <input ref={props.input_ref.clone()} id="file-upload" name="file-upload" type="file" accept=".csv" class="sr-only" onchange={on_change} />
                        </label>
                        <p class="mt-2 text-xs text-gray-500">{"Columns: date (YYYY-MM-DD), amount, description, category"}</p>
                    </div>
                    <button type="submit" disabled={!props.can_upload} class={accent_button}>
                        { if props.uploading { "Uploading..." } else { "Upload" } }
                    </button>
                </form>

                <div class="mt-6 pt-6 border-t border-gray-200">
                    <h3 class="text-sm font-medium text-dark mb-4">{"Danger Zone"}</h3>
                    <button type="button" onclick={on_delete_request} class={accent_button}>
                        { icon_trash() }
                        {"Delete All Data"}
                    </button>
                </div>
            </div>

            {
                if props.delete_flow == DeleteFlow::Confirming {
                    html! {
                        <div class="fixed inset-0 bg-dark bg-opacity-75 flex items-center justify-center p-4 z-50">
                            <div class="bg-white rounded-lg shadow-xl max-w-md w-full">
                                <div class="px-6 py-4 border-b border-gray-200">
                                    <h3 class="text-lg font-medium text-dark">{"Confirm Delete"}</h3>
                                </div>
                                <div class="px-6 py-4">
                                    <p class="text-sm text-gray-500">{"Are you sure you want to delete all spending data? This action cannot be undone."}</p>
                                </div>
                                <div class="px-6 py-4 bg-gray-50 rounded-b-lg flex justify-end space-x-4">
                                    <button type="button" onclick={on_delete_cancel} disabled={props.deleting} class="px-4 py-2 border border-gray-300 rounded-md text-sm font-medium text-dark bg-white hover:bg-gray-50 disabled:opacity-50">
                                        {"Cancel"}
                                    </button>
                                    <button type="button" onclick={on_delete_confirm} disabled={props.deleting} class="px-4 py-2 border border-transparent rounded-md text-sm font-medium text-white bg-accent hover:bg-accent/90 disabled:opacity-50">
                                        { if props.deleting { "Deleting..." } else { "Delete All" } }
                                    </button>
                                </div>
                            </div>
                        </div>
                    }
                } else { html! {} }
            }
        </>
    }
}

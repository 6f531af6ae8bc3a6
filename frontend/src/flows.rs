use tracing::{error, info, warn};

use crate::api::SpendingApi;
use crate::state::{Action, DeleteFlow, NoticeKind, ViewState};

pub async fn refresh<A: SpendingApi>(api: &A, dispatch: &impl Fn(Action)) -> bool {
    match api.fetch_spending().await {
        Ok(records) => {
            info!(count = records.len(), "loaded spending records");
            dispatch(Action::RecordsLoaded(records));
            true
        }
        Err(err) => {
            error!(%err, "error fetching monthly spending");
            dispatch(Action::RefreshFailed(format!(
                "Could not load spending data: {err}"
            )));
            false
        }
    }
}

/// Returns whether the upload went through so the caller can reset its file
/// input. The `uploading` guard reads the snapshot taken at click time, so it
/// only catches a stale repeat; the disabled Upload button is what blocks a
/// second click while a request is outstanding.
pub async fn upload<A: SpendingApi>(
    api: &A,
    snapshot: &ViewState,
    file: Option<A::Upload>,
    dispatch: &impl Fn(Action),
) -> bool {
    if snapshot.uploading {
        warn!("upload already in progress");
        return false;
    }
    let Some(file) = file else {
        warn!("no file selected for upload");
        return false;
    };

    dispatch(Action::UploadStarted);
    let uploaded = match api.upload_csv(&file).await {
        Ok(()) => {
            info!(file = ?snapshot.chosen_file, "csv uploaded");
            refresh(api, dispatch).await;
            dispatch(Action::FileCleared);
            dispatch(Action::Notify(
                NoticeKind::Success,
                "CSV file uploaded successfully".to_string(),
            ));
            true
        }
        Err(err) => {
            error!(%err, status = ?err.status(), "error uploading file");
            dispatch(Action::Notify(
                NoticeKind::Error,
                format!("Upload failed: {err}"),
            ));
            false
        }
    };
    dispatch(Action::UploadFinished);
    info!("upload process finished");
    uploaded
}

// The prompt closes whether or not the server accepted the delete.
pub async fn confirm_delete_all<A: SpendingApi>(
    api: &A,
    snapshot: &ViewState,
    dispatch: &impl Fn(Action),
) -> bool {
    if snapshot.delete_flow != DeleteFlow::Confirming {
        warn!(flow = ?snapshot.delete_flow, "delete confirmed without a pending request");
        return false;
    }
    if snapshot.deleting {
        warn!("delete already in progress");
        return false;
    }

    dispatch(Action::DeleteStarted);
    let deleted = match api.delete_all().await {
        Ok(message) => {
            info!(%message, "deleted all transactions");
            refresh(api, dispatch).await;
            let message = if message.is_empty() {
                "All spending data deleted".to_string()
            } else {
                message
            };
            dispatch(Action::Notify(NoticeKind::Success, message));
            true
        }
        Err(err) => {
            error!(%err, status = ?err.status(), "error deleting data");
            dispatch(Action::Notify(
                NoticeKind::Error,
                format!("Delete failed: {err}"),
            ));
            false
        }
    };
    dispatch(Action::DeleteSettled);
    deleted
}

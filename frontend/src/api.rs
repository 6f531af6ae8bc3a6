use gloo_net::http::{Request, Response};
use thiserror::Error;
use tracing::{debug, warn};
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

use crate::model::{DeleteResponse, Transaction};

pub const UPLOAD_PATH: &str = "/upload_csv/";
pub const SPENDING_PATH: &str = "/get_monthly_spending/";
pub const DELETE_ALL_PATH: &str = "/delete_all_transactions/";
pub const UPLOAD_FIELD: &str = "csv_file";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("server responded with status {status}: {body}")]
    Server { status: u16, body: String },

    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    fn from_js(context: &str, value: JsValue) -> Self {
        ApiError::Network(format!("{context}: {value:?}"))
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(err) => ApiError::Decode(err.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

/// The server endpoints the dashboard talks to.
#[allow(async_fn_in_trait)]
pub trait SpendingApi {
    /// Whatever the platform hands us for a chosen file.
    type Upload;

    async fn fetch_spending(&self) -> Result<Vec<Transaction>, ApiError>;

    async fn upload_csv(&self, file: &Self::Upload) -> Result<(), ApiError>;

    /// Returns the server's confirmation message.
    async fn delete_all(&self) -> Result<String, ApiError>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct HttpApi {
    base_url: String,
}

impl HttpApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn ensure_ok(resp: Response) -> Result<Response, ApiError> {
        if resp.ok() {
            return Ok(resp);
        }
        let status = resp.status();
        let url = resp.url();
        let err = rejected(status, resp.text().await);
        warn!(status, %url, %err, "request rejected");
        Err(err)
    }
}

fn rejected(status: u16, body: Result<String, gloo_net::Error>) -> ApiError {
    let body = match body {
        Ok(body) => body,
        Err(err) => {
            warn!(status, %err, "could not read error body");
            String::new()
        }
    };
    ApiError::Server { status, body }
}

impl SpendingApi for HttpApi {
    type Upload = File;

    async fn fetch_spending(&self) -> Result<Vec<Transaction>, ApiError> {
        let url = self.url(SPENDING_PATH);
        debug!(%url, "fetching spending records");
        let resp = Request::get(&url).send().await?;
        let resp = Self::ensure_ok(resp).await?;
        Ok(resp.json::<Vec<Transaction>>().await?)
    }

    async fn upload_csv(&self, file: &File) -> Result<(), ApiError> {
        let url = self.url(UPLOAD_PATH);
        let form = FormData::new().map_err(|e| ApiError::from_js("form data", e))?;
        form.append_with_blob_and_filename(UPLOAD_FIELD, file, &file.name())
            .map_err(|e| ApiError::from_js("attach file", e))?;

        debug!(%url, file = %file.name(), size = file.size(), "uploading csv");
        let resp = Request::post(&url).body(form)?.send().await?;
        Self::ensure_ok(resp).await?;
        Ok(())
    }

    async fn delete_all(&self) -> Result<String, ApiError> {
        let url = self.url(DELETE_ALL_PATH);
        debug!(%url, "deleting all transactions");
        let resp = Request::delete(&url).send().await?;
        let resp = Self::ensure_ok(resp).await?;
        let reply = resp.json::<DeleteResponse>().await?;
        Ok(reply.message)
    }
}

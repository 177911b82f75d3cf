//! CRUD calls shared by every resource hook.

use super::{ApiError, collection_url, record_url};
use crate::REQUEST_TIMEOUT_MS;
use crate::schema::{Record, RecordId, ResourceSchema};
use futures::future::{self, Either};
use futures::pin_mut;
use gloo::net::http::{Request, Response};
use gloo::timers::future::TimeoutFuture;
use log::debug;
use std::future::Future;

/// `GET /<path>` — the current list, in response order.
pub async fn fetch_list(schema: &'static ResourceSchema) -> Result<Vec<Record>, ApiError> {
    let url = collection_url(schema.path);
    debug!("GET {url}");
    with_timeout(async move {
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        let response = ensure_ok(response)?;
        response
            .json::<Vec<Record>>()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    })
    .await
}

/// `POST /<path>` with a JSON body.
pub async fn create(schema: &'static ResourceSchema, record: &Record) -> Result<(), ApiError> {
    let url = collection_url(schema.path);
    debug!("POST {url}");
    let request = Request::post(&url)
        .json(record)
        .map_err(|err| ApiError::Decode(err.to_string()))?;
    with_timeout(async move {
        let response = request
            .send()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        ensure_ok(response).map(|_| ())
    })
    .await
}

/// `PUT /<path>/<id>` with a JSON body.
pub async fn update(
    schema: &'static ResourceSchema,
    id: RecordId,
    record: &Record,
) -> Result<(), ApiError> {
    let url = record_url(schema.path, id);
    debug!("PUT {url}");
    let request = Request::put(&url)
        .json(record)
        .map_err(|err| ApiError::Decode(err.to_string()))?;
    with_timeout(async move {
        let response = request
            .send()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        ensure_ok(response).map(|_| ())
    })
    .await
}

/// `DELETE /<path>/<id>`.
pub async fn delete_by_id(schema: &'static ResourceSchema, id: RecordId) -> Result<(), ApiError> {
    let url = record_url(schema.path, id);
    debug!("DELETE {url}");
    with_timeout(async move {
        let response = Request::delete(&url)
            .send()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        ensure_ok(response).map(|_| ())
    })
    .await
}

fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        Ok(response)
    } else {
        Err(ApiError::Status {
            code: response.status(),
            text: response.status_text(),
        })
    }
}

async fn with_timeout<F, T>(request: F) -> Result<T, ApiError>
where
    F: Future<Output = Result<T, ApiError>>,
{
    let deadline = TimeoutFuture::new(REQUEST_TIMEOUT_MS);
    pin_mut!(request);
    pin_mut!(deadline);
    match future::select(request, deadline).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(ApiError::Timeout),
    }
}

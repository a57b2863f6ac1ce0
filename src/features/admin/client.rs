//! Client for the admin REST endpoints. Every call carries the stored bearer
//! token; endpoint paths are derived from the record kind.

use crate::{
    app_lib::{
        AppError,
        api::{delete_with_headers, get_json_with_headers, put_json_with_headers},
    },
    features::{
        admin::{
            console::{AdminService, Confirm},
            types::{Record, RecordKind},
        },
        auth::token::{LocalStorageTokenStore, bearer_headers},
    },
};

#[derive(Clone, Copy, Debug, Default)]
pub struct HttpAdminService;

impl AdminService for HttpAdminService {
    async fn list(&self, kind: RecordKind) -> Result<Vec<Record>, AppError> {
        let headers = bearer_headers(&LocalStorageTokenStore);
        get_json_with_headers(&kind.collection_path(), &headers).await
    }

    async fn update(&self, kind: RecordKind, id: &str, record: &Record) -> Result<(), AppError> {
        let headers = bearer_headers(&LocalStorageTokenStore);
        put_json_with_headers(&kind.record_path(id), record, &headers).await
    }

    async fn delete(&self, kind: RecordKind, id: &str) -> Result<(), AppError> {
        let headers = bearer_headers(&LocalStorageTokenStore);
        delete_with_headers(&kind.record_path(id), &headers).await
    }
}

/// Confirmation through `window.confirm`. A missing window counts as "no".
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserConfirm;

impl Confirm for BrowserConfirm {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}

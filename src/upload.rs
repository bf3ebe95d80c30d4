use std::fs;

use tracing::{error, info, span, Level};

use crate::{
    adapters::adapter::ObjectStore,
    model::{error::StoreError, request::UploadRequest},
};

/// Uploads one local file and returns the key it was stored under.
///
/// The local path is checked before the store is touched: anything that is not
/// a regular file fails with [`StoreError::LocalFileMissing`] and no transfer
/// is attempted.
pub fn upload(store: &dyn ObjectStore, request: &UploadRequest) -> Result<String, StoreError> {
    let span = span!(Level::INFO, "upload", context = "upload");
    let _e = span.enter();

    let key = request.resolved_key();
    info!(file = %request.local_path, bucket = %request.bucket, key = %key, "called");

    let is_file = fs::metadata(&request.local_path)
        .map(|meta| meta.is_file())
        .unwrap_or(false);
    if !is_file {
        let err = StoreError::LocalFileMissing {
            path: request.local_path.clone(),
        };
        error!(error_message = %err, error_group = err.group());
        return Err(err);
    }

    store.upload_file(request).map_err(|err| {
        error!(error_message = %err, error_group = err.group(), key = %key);
        err
    })?;

    info!(key = %key, "uploaded");
    Ok(key)
}

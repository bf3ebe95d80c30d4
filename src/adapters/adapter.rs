use crate::model::{
    error::StoreError,
    request::{BucketSpec, UploadRequest},
};

/// The two calls this tool needs from an object store.
pub trait ObjectStore {
    fn create_bucket(&self, spec: &BucketSpec) -> Result<(), StoreError>;

    /// Transfers `request.local_path` to `request.bucket` under `request.resolved_key()`.
    fn upload_file(&self, request: &UploadRequest) -> Result<(), StoreError>;
}

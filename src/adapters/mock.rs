use std::cell::RefCell;

use crate::{
    adapters::adapter::ObjectStore,
    model::{
        error::StoreError,
        request::{BucketSpec, UploadRequest},
    },
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    CreateBucket(BucketSpec),
    UploadFile(UploadRequest),
}

/// Records every call and answers with scripted results.
pub struct MockStore {
    pub create_result: Result<(), StoreError>,
    pub upload_result: Result<(), StoreError>,
    pub calls: RefCell<Vec<Call>>,
}

impl MockStore {
    pub fn new() -> Self {
        Self {
            create_result: Ok(()),
            upload_result: Ok(()),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn failing_create(mut self, err: StoreError) -> Self {
        self.create_result = Err(err);
        self
    }

    pub fn failing_upload(mut self, err: StoreError) -> Self {
        self.upload_result = Err(err);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }
}

impl ObjectStore for MockStore {
    fn create_bucket(&self, spec: &BucketSpec) -> Result<(), StoreError> {
        self.calls.borrow_mut().push(Call::CreateBucket(spec.clone()));
        self.create_result.clone()
    }

    fn upload_file(&self, request: &UploadRequest) -> Result<(), StoreError> {
        self.calls.borrow_mut().push(Call::UploadFile(request.clone()));
        self.upload_result.clone()
    }
}

use crate::util;

/// A bucket to create. `region: None` means the provider's default region.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BucketSpec {
    pub name: String,
    pub region: Option<String>,
}

impl BucketSpec {
    pub fn new(name: &str, region: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            region: region.map(str::to_string),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadRequest {
    pub local_path: String,
    pub bucket: String,
    pub object_key: Option<String>,
    /// Region the bucket lives in, `None` for the provider default.
    pub region: Option<String>,
}

impl UploadRequest {
    pub fn new(local_path: &str, bucket: &str, object_key: Option<&str>) -> Self {
        Self {
            local_path: local_path.to_string(),
            bucket: bucket.to_string(),
            object_key: object_key.map(str::to_string),
            region: None,
        }
    }

    pub fn in_region(mut self, region: Option<&str>) -> Self {
        self.region = region.map(str::to_string);
        self
    }

    /// The key the object is stored under: the explicit key, else the
    /// final segment of the local path.
    pub fn resolved_key(&self) -> String {
        match &self.object_key {
            Some(key) => key.clone(),
            None => util::object::derive_key(&self.local_path).to_string(),
        }
    }
}

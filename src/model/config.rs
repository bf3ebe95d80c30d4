use clap::Parser;

use crate::model::request::{BucketSpec, UploadRequest};

pub const DEFAULT_BUCKET: &str = "ecom-db2024";
pub const DEFAULT_REGION: &str = "us-west-1";
pub const DEFAULT_FILE: &str = "database/initdb.sql";

/// Create a bucket and upload one file into it.
#[derive(Parser, Clone, Debug, PartialEq, Eq)]
#[command(name = "datadump", version)]
pub struct Config {
    /// Bucket to create and upload into
    #[arg(long, default_value = DEFAULT_BUCKET)]
    pub bucket: String,

    /// Region the bucket is created in
    #[arg(long, default_value = DEFAULT_REGION, conflicts_with = "default_region")]
    pub region: String,

    /// Create the bucket in the provider's default region
    #[arg(long)]
    pub default_region: bool,

    /// Local file to upload
    #[arg(long, default_value = DEFAULT_FILE)]
    pub file: String,

    /// Object key, defaults to the file name
    #[arg(long)]
    pub key: Option<String>,

    /// Endpoint of an S3-compatible store
    #[arg(long)]
    pub endpoint_url: Option<String>,
}

impl Config {
    pub fn bucket_spec(&self) -> BucketSpec {
        let region = if self.default_region {
            None
        } else {
            Some(self.region.as_str())
        };

        BucketSpec::new(&self.bucket, region)
    }

    pub fn upload_request(&self) -> UploadRequest {
        UploadRequest::new(&self.file, &self.bucket, self.key.as_deref())
            .in_region(self.bucket_spec().region.as_deref())
    }
}

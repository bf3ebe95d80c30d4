use std::{error::Error, io};

use aws_config::SdkConfig;
use aws_credential_types::provider::error::CredentialsError;
use aws_sdk_s3::{
    config::Region,
    error::DisplayErrorContext,
    primitives::ByteStream,
    types::{BucketLocationConstraint, CreateBucketConfiguration},
};

use crate::{
    adapters::adapter::ObjectStore,
    model::{
        error::StoreError,
        request::{BucketSpec, UploadRequest},
    },
    util,
};

/// `ObjectStore` over the AWS SDK. Every call builds its own client from the shared config.
pub struct S3Store {
    config: SdkConfig,
}

impl S3Store {
    pub fn new(config: SdkConfig) -> Self {
        Self { config }
    }

    fn client(&self, region: Option<&str>) -> aws_sdk_s3::Client {
        let mut builder = aws_sdk_s3::config::Builder::from(&self.config);
        if let Some(region) = region {
            builder = builder.region(Region::new(region.to_string()));
        }

        aws_sdk_s3::Client::from_conf(builder.build())
    }
}

impl ObjectStore for S3Store {
    fn create_bucket(&self, spec: &BucketSpec) -> Result<(), StoreError> {
        let region = spec.region.as_deref();
        let req = self
            .client(region)
            .create_bucket()
            .bucket(&spec.name)
            .set_create_bucket_configuration(bucket_configuration(region));

        util::poll::poll_until_ready(req.send()).map_err(|err| classify_error(&err))?;

        Ok(())
    }

    fn upload_file(&self, request: &UploadRequest) -> Result<(), StoreError> {
        let key = request.resolved_key();

        let body = util::poll::poll_until_ready(ByteStream::from_path(&request.local_path))
            .map_err(|err| {
                if is_not_found(&err) {
                    StoreError::LocalFileMissing {
                        path: request.local_path.clone(),
                    }
                } else {
                    StoreError::provider(format!(
                        "failed to read {}, {}",
                        request.local_path,
                        DisplayErrorContext(&err)
                    ))
                }
            })?;

        let req = self
            .client(request.region.as_deref())
            .put_object()
            .bucket(&request.bucket)
            .key(key)
            .body(body);

        util::poll::poll_until_ready(req.send()).map_err(|err| classify_error(&err))?;

        Ok(())
    }
}

/// `None` for the default region: the location constraint must be left out entirely there.
pub fn bucket_configuration(region: Option<&str>) -> Option<CreateBucketConfiguration> {
    region.map(|region| {
        CreateBucketConfiguration::builder()
            .location_constraint(BucketLocationConstraint::from(region))
            .build()
    })
}

const ACCESS_KEY_ID_VARS: [&str; 2] = ["AWS_ACCESS_KEY_ID", "AWS_ACCESS_KEY"];
const SECRET_ACCESS_KEY_VARS: [&str; 3] = [
    "AWS_SECRET_ACCESS_KEY",
    "SECRET_ACCESS_KEY",
    "AWS_SECRET_KEY",
];

/// Maps an SDK failure onto the error taxonomy by looking through its source chain.
pub fn classify_error(err: &(dyn Error + 'static)) -> StoreError {
    classify(err, env_keys_partial())
}

/// The default chain reports a key id without its secret (or the reverse) in the
/// environment as not loaded, so `partial_env` turns that into the incomplete kind.
fn classify(err: &(dyn Error + 'static), partial_env: bool) -> StoreError {
    let detail = DisplayErrorContext(err).to_string();

    let mut cause = Some(err);
    while let Some(cur) = cause {
        if let Some(creds) = cur.downcast_ref::<CredentialsError>() {
            match creds {
                CredentialsError::CredentialsNotLoaded(_) if partial_env => {
                    return StoreError::credentials_incomplete(detail)
                }
                CredentialsError::CredentialsNotLoaded(_) => {
                    return StoreError::credentials_missing(detail)
                }
                CredentialsError::InvalidConfiguration(_) => {
                    return StoreError::credentials_incomplete(detail)
                }
                _ => break,
            }
        }

        cause = cur.source();
    }

    StoreError::provider(detail)
}

fn env_keys_partial() -> bool {
    let is_set = |vars: &[&str]| {
        vars.iter().any(|var| {
            std::env::var(var)
                .map(|val| !val.trim().is_empty())
                .unwrap_or(false)
        })
    };

    is_set(&ACCESS_KEY_ID_VARS) != is_set(&SECRET_ACCESS_KEY_VARS)
}

fn is_not_found(err: &(dyn Error + 'static)) -> bool {
    let mut cause = Some(err);
    while let Some(cur) = cause {
        if let Some(io_err) = cur.downcast_ref::<io::Error>() {
            return io_err.kind() == io::ErrorKind::NotFound;
        }
        cause = cur.source();
    }

    false
}

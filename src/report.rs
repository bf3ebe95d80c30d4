use crate::model::{
    error::StoreError,
    request::{BucketSpec, UploadRequest},
};

pub fn bucket_line(spec: &BucketSpec, outcome: &Result<(), StoreError>) -> String {
    match outcome {
        Ok(()) => format!("Bucket {} created successfully", spec.name),
        Err(err) => format!("Error creating bucket: {}", err.detail()),
    }
}

/// `outcome` carries the resolved key on success.
pub fn upload_line(request: &UploadRequest, outcome: &Result<String, StoreError>) -> String {
    match outcome {
        Ok(key) => format!(
            "File {} uploaded to bucket {} as {}",
            request.local_path, request.bucket, key
        ),
        Err(err @ StoreError::Provider { .. }) => format!("Error uploading file: {}", err),
        Err(err) => err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_line() {
        let spec = BucketSpec::new("ecom-db2024", Some("us-west-1"));

        assert_eq!(
            bucket_line(&spec, &Ok(())),
            "Bucket ecom-db2024 created successfully"
        );
        assert_eq!(
            bucket_line(&spec, &Err(StoreError::provider("BucketAlreadyExists"))),
            "Error creating bucket: BucketAlreadyExists"
        );
        assert_eq!(
            bucket_line(
                &spec,
                &Err(StoreError::credentials_missing(
                    "dispatch failure: no providers in chain provided credentials"
                ))
            ),
            "Error creating bucket: dispatch failure: no providers in chain provided credentials"
        );
    }

    #[test]
    fn test_upload_line() {
        let request = UploadRequest::new("database/initdb.sql", "ecom-db2024", None);

        assert_eq!(
            upload_line(&request, &Ok("initdb.sql".to_string())),
            "File database/initdb.sql uploaded to bucket ecom-db2024 as initdb.sql"
        );
        assert_eq!(
            upload_line(
                &request,
                &Err(StoreError::LocalFileMissing {
                    path: "database/initdb.sql".to_string()
                })
            ),
            "The file database/initdb.sql was not found"
        );
        assert_eq!(
            upload_line(
                &request,
                &Err(StoreError::credentials_missing("no providers in chain provided credentials"))
            ),
            "Credentials not available"
        );
        assert_eq!(
            upload_line(
                &request,
                &Err(StoreError::credentials_incomplete("AWS_SECRET_ACCESS_KEY not set"))
            ),
            "Incomplete credentials provided"
        );
        assert_eq!(
            upload_line(&request, &Err(StoreError::provider("AccessDenied"))),
            "Error uploading file: AccessDenied"
        );
    }
}

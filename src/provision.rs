use tracing::{error, info, span, Level};

use crate::{
    adapters::adapter::ObjectStore,
    model::{error::StoreError, request::BucketSpec},
};

/// Requests creation of `spec.name`, region-scoped when `spec.region` is set.
/// A single attempt; "already exists" comes back as a provider error like any other.
pub fn ensure(store: &dyn ObjectStore, spec: &BucketSpec) -> Result<(), StoreError> {
    let span = span!(Level::INFO, "ensure", context = "provision");
    let _e = span.enter();
    info!(bucket = %spec.name, region = ?spec.region, "called");

    store.create_bucket(spec).map_err(|err| {
        error!(error_message = %err, error_group = err.group(), bucket = %spec.name);
        err
    })?;

    info!(bucket = %spec.name, "created");
    Ok(())
}

use aws_config::{meta::region::RegionProviderChain, BehaviorVersion};
use clap::Parser;
use tracing::{info, span, Level};

mod adapters;
mod model;
mod provision;
mod report;
mod upload;
mod util;

use adapters::adapter::ObjectStore;
use model::config::Config;

const FALLBACK_REGION: &str = "us-east-1";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .json()
        .with_writer(std::io::stderr)
        .init();

    let span = span!(Level::INFO, "main", context = "main");
    let _e = span.enter();
    info!("called");

    let config = Config::parse();
    info!(
        bucket = %config.bucket,
        region = ?config.bucket_spec().region,
        file = %config.file,
        endpoint_url = ?config.endpoint_url,
        "args"
    );

    let mut loader = aws_config::defaults(BehaviorVersion::latest())
        .region(RegionProviderChain::default_provider().or_else(FALLBACK_REGION));
    if let Some(endpoint_url) = &config.endpoint_url {
        loader = loader.endpoint_url(endpoint_url);
    }

    let sdk_config = util::poll::poll_until_ready(loader.load());
    let store = adapters::s3::S3Store::new(sdk_config);

    for line in run(&store, &config) {
        println!("{}", line);
    }
}

/// Provisions the bucket, then uploads regardless of how provisioning went.
/// Returns one report line per step.
fn run(store: &dyn ObjectStore, config: &Config) -> Vec<String> {
    let spec = config.bucket_spec();
    let created = provision::ensure(store, &spec);

    let request = config.upload_request();
    let uploaded = upload::upload(store, &request);

    vec![
        report::bucket_line(&spec, &created),
        report::upload_line(&request, &uploaded),
    ]
}

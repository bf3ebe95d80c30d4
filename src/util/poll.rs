use std::future::Future;

/// Drives an SDK future to completion from synchronous code.
///
/// The I/O behind the future is serviced by the surrounding tokio runtime, so
/// this must be called from a thread that is not one of that runtime's workers.
pub fn poll_until_ready<Fut, T>(future: Fut) -> T
where
    Fut: Future<Output = T>,
{
    futures::executor::block_on(future)
}

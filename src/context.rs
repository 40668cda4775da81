use crate::dataset::Dataset;

/// Everything a request handler may read. Built once at startup and
/// shared read-only across the worker threads.
#[derive(Debug, Default)]
pub struct AppContext {
    pub dataset: Dataset,
}

impl AppContext {
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset }
    }
}

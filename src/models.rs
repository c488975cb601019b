use std::path::PathBuf;
use std::time::Duration;

/// Everything one run needs: where to GET, how long to wait, where to write.
///
/// Built once per invocation from constants in the binary; tests build their
/// own pointing at a mock server and a temp directory.
#[derive(Debug, Clone)]
pub struct FetchJob {
    pub url: String,
    pub timeout: Duration,
    pub output: PathBuf,
}

/// Which of the two known response envelopes to check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    /// Open Food Facts product lookup: `status` / `status_verbose` envelope,
    /// whole document persisted.
    ProductLookup,
    /// NHTSA recall listing: `Count` / `results` envelope, only `results`
    /// persisted.
    RecallList,
}

/// Per-wrapper configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchOptions {
    /// Invoke the producer once when the wrapper is created.
    pub autorun: bool,
    /// Only apply the result of the most recently issued run. A run that
    /// settles after a newer run (or a reset) leaves the state untouched.
    /// When false, every run writes its outcome in completion order.
    pub discard_stale: bool,
}

impl Default for FetchOptions {
    fn default() -> Self {
        FetchOptions {
            autorun: true,
            discard_stale: true,
        }
    }
}

impl FetchOptions {
    pub fn autorun(mut self, autorun: bool) -> Self {
        self.autorun = autorun;
        self
    }

    pub fn discard_stale(mut self, discard_stale: bool) -> Self {
        self.discard_stale = discard_stale;
        self
    }
}

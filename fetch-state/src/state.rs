use crate::FetchError;

/// Distinguishes "never fetched" from "fetched", so an empty result (e.g. an
/// empty list) is not mistaken for missing data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchState<T> {
    NotFetched,
    Fetched(T),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::NotFetched
    }
}

impl<T> FetchState<T> {
    pub fn is_fetched(&self) -> bool {
        matches!(self, FetchState::Fetched(_))
    }

    pub fn as_ref(&self) -> Option<&T> {
        match self {
            FetchState::Fetched(data) => Some(data),
            FetchState::NotFetched => None,
        }
    }
}

/// Point-in-time copy of a wrapper's `data`, `loading` and `error`.
///
/// `data` and `error` can both be set: a failed run leaves the value from
/// the last successful run in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot<T> {
    pub data: FetchState<T>,
    pub loading: bool,
    pub error: Option<FetchError>,
}

impl<T> Default for Snapshot<T> {
    fn default() -> Self {
        Snapshot {
            data: FetchState::NotFetched,
            loading: false,
            error: None,
        }
    }
}

impl<T> Snapshot<T> {
    /// Nothing fetched yet, a call outstanding and no failure to show.
    pub fn is_initial_loading(&self) -> bool {
        self.loading && !self.data.is_fetched() && self.error.is_none()
    }
}

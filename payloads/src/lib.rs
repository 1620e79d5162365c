//! Types shared with the backend, plus the client used to fetch them.

pub mod api_client;
pub mod responses;

pub use api_client::{APIClient, ClientError};

use derive_more::Display;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display,
)]
#[serde(transparent)]
pub struct UserId(pub Uuid);

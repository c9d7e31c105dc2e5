use serde::{Deserialize, Serialize};

/// Liveness payload returned by `GET /service-status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub message: String,
}

impl ServiceStatus {
    pub fn ok() -> Self {
        Self {
            message: "OK".to_string(),
        }
    }
}

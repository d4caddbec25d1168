use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

pub use models::support_query::DEFAULT_STATUS;

/// A stored support ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportQuery {
    pub id: i32,
    pub issue: String,
    pub order_id: String,
    pub status: String,
}

impl From<models::support_query::Model> for SupportQuery {
    fn from(m: models::support_query::Model) -> Self {
        Self { id: m.id, issue: m.issue, order_id: m.order_id, status: m.status }
    }
}

/// Create request body as received.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateQueryInput {
    pub issue: Option<String>,
    pub order_id: Option<String>,
}

impl CreateQueryInput {
    pub fn new(issue: impl Into<String>, order_id: impl Into<String>) -> Self {
        Self { issue: Some(issue.into()), order_id: Some(order_id.into()) }
    }

    /// Both fields must be present; their contents are not checked.
    pub fn validate(self) -> Result<NewQuery, ServiceError> {
        Ok(NewQuery {
            issue: self.issue.ok_or_else(|| ServiceError::required("issue"))?,
            order_id: self.order_id.ok_or_else(|| ServiceError::required("orderId"))?,
        })
    }
}

/// Validated create input handed to repositories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuery {
    pub issue: String,
    pub order_id: String,
}

/// Status update body. Any string is accepted; there is no transition graph.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateStatusInput {
    pub status: Option<String>,
}

impl UpdateStatusInput {
    pub fn new(status: impl Into<String>) -> Self { Self { status: Some(status.into()) } }

    pub fn validate(self) -> Result<String, ServiceError> {
        self.status.ok_or_else(|| ServiceError::required("status"))
    }
}

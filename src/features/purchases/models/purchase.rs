use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

/// Purchase status matching database enum.
///
/// Settlement is instant, so a new purchase is created directly as
/// `completed`; `pending` exists only as a stored value. The terminal
/// states are `refunded` and `cancelled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "purchase_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PurchaseStatus {
    Completed,
    Pending,
    Refunded,
    Cancelled,
}

impl PurchaseStatus {
    /// Only completed purchases can move to refunded
    pub fn can_refund(&self) -> bool {
        matches!(self, PurchaseStatus::Completed)
    }
}

impl std::fmt::Display for PurchaseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PurchaseStatus::Completed => write!(f, "completed"),
            PurchaseStatus::Pending => write!(f, "pending"),
            PurchaseStatus::Refunded => write!(f, "refunded"),
            PurchaseStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Database model for purchase
#[derive(Debug, Clone, FromRow)]
pub struct Purchase {
    pub id: Uuid,
    pub user_id: String,
    pub course_id: Uuid,
    pub amount: i64,
    pub status: PurchaseStatus,
    pub payment_method: String,
    pub refund_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_completed_can_refund() {
        assert!(PurchaseStatus::Completed.can_refund());
        assert!(!PurchaseStatus::Pending.can_refund());
        assert!(!PurchaseStatus::Refunded.can_refund());
        assert!(!PurchaseStatus::Cancelled.can_refund());
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::catalog::dtos::CourseResponseDto;
use crate::features::catalog::models::Course;
use crate::features::purchases::models::{Purchase, PurchaseStatus};

/// Request DTO for recording a purchase
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePurchaseDto {
    /// The course being purchased
    pub course_id: Uuid,
}

/// Request DTO for refunding a purchase
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RefundPurchaseDto {
    /// Reason for the refund (required)
    #[validate(length(min = 1, max = 2000, message = "Refund reason is required"))]
    pub reason: String,
}

/// Response DTO for a purchase, with its course when still present
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseResponseDto {
    pub id: Uuid,
    pub user_id: String,
    pub course_id: Uuid,
    pub amount: i64,
    pub status: PurchaseStatus,
    pub payment_method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course: Option<CourseResponseDto>,
}

impl PurchaseResponseDto {
    pub fn from_purchase(p: Purchase, course: Option<Course>) -> Self {
        Self {
            id: p.id,
            user_id: p.user_id,
            course_id: p.course_id,
            amount: p.amount,
            status: p.status,
            payment_method: p.payment_method,
            refund_reason: p.refund_reason,
            created_at: p.created_at,
            updated_at: p.updated_at,
            course: course.map(Into::into),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_refund_requires_non_empty_reason() {
        let empty = RefundPurchaseDto {
            reason: String::new(),
        };
        assert!(empty.validate().is_err());

        let valid = RefundPurchaseDto {
            reason: "defective".to_string(),
        };
        assert!(valid.validate().is_ok());
    }
}

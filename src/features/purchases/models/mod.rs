mod purchase;

pub use purchase::{Purchase, PurchaseStatus};

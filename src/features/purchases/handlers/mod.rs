pub mod purchase_handler;

pub use purchase_handler::{create_purchase, list_purchases, refund_purchase};

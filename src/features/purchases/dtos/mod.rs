mod purchase_dto;

pub use purchase_dto::{CreatePurchaseDto, PurchaseResponseDto, RefundPurchaseDto};

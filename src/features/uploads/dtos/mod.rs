mod upload_dto;

pub use upload_dto::{
    object_name, validate_image, ImageSlot, UploadImageForm, UploadImageResponseDto,
};

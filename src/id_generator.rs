use crate::image::ImageId;

/// Fresh random id for a new or duplicated image.
pub fn generate_image_id() -> ImageId {
    ImageId::new(uuid::Uuid::new_v4().to_string())
}

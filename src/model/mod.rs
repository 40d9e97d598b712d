/// Photo records with orientation and tags
pub mod photo;
/// Slides built from one horizontal or two merged vertical photos
pub mod slide;
/// Ordered tag-set algebra shared by photos and slides
pub mod tags;

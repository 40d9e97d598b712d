//! Slides assembled from photographs
//!
//! A slide shows either one horizontal photo or exactly two vertical
//! photos merged side by side. Slide identity is positional: two slides
//! with identical tag sets remain distinct entities in the slide list.

use crate::model::photo::Photo;
use crate::model::tags::TagSet;

/// A slideshow element: one horizontal photo or two merged verticals
#[derive(Clone, Debug)]
pub struct Slide {
    photos: Vec<usize>,
    tags: TagSet,
}

impl Slide {
    /// Build a slide from a single horizontal photo
    pub fn from_horizontal(photo: &Photo) -> Self {
        Self {
            photos: vec![photo.index()],
            tags: photo.tags().clone(),
        }
    }

    /// Build a slide by merging two vertical photos
    ///
    /// The combined tag set keeps shared tags once and the exclusive tags
    /// of both photos.
    pub fn from_vertical_pair(first: &Photo, second: &Photo) -> Self {
        Self {
            photos: vec![first.index(), second.index()],
            tags: first.tags().merge(second.tags()),
        }
    }

    /// Photo indices shown on this slide, in merge order
    pub fn photo_indices(&self) -> &[usize] {
        &self.photos
    }

    /// Combined tag set
    pub const fn tags(&self) -> &TagSet {
        &self.tags
    }
}

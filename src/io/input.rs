//! Dataset parsing for tagged photo collections
//!
//! A dataset starts with the photo count on its own line, followed by one
//! record per photo: an `H` or `V` orientation marker, the tag count, and
//! the tags. Record order assigns the zero-based photo indices the output
//! format refers to.

use crate::io::error::{Result, SlideshowError, invalid_record};
use crate::model::photo::{Orientation, Photo};
use crate::model::tags::TagSet;

/// Parse a dataset into photo records
///
/// # Errors
///
/// Returns `InvalidRecord` for malformed lines and `PhotoCountMismatch`
/// when the header count disagrees with the records present.
pub fn parse_dataset(raw: &str) -> Result<Vec<Photo>> {
    let mut lines = raw.trim().lines();
    let Some(header) = lines.next() else {
        return Err(invalid_record(1, &"empty dataset"));
    };
    let declared: usize = header
        .trim()
        .parse()
        .map_err(|_| invalid_record(1, &"photo count is not an integer"))?;

    let mut photos = Vec::with_capacity(declared);
    for (offset, line) in lines.enumerate() {
        let line_number = offset + 2;
        photos.push(parse_record(line, line_number, photos.len())?);
    }

    if photos.len() != declared {
        return Err(SlideshowError::PhotoCountMismatch {
            declared,
            actual: photos.len(),
        });
    }
    Ok(photos)
}

fn parse_record(line: &str, line_number: usize, index: usize) -> Result<Photo> {
    let mut fields = line.split_whitespace();

    let orientation = match fields.next() {
        Some("H") => Orientation::Horizontal,
        Some("V") => Orientation::Vertical,
        _ => return Err(invalid_record(line_number, &"expected orientation H or V")),
    };

    let declared_tags: usize = fields
        .next()
        .ok_or_else(|| invalid_record(line_number, &"missing tag count"))?
        .parse()
        .map_err(|_| invalid_record(line_number, &"tag count is not an integer"))?;

    let tags: TagSet = fields.collect();
    if tags.len() != declared_tags {
        return Err(invalid_record(
            line_number,
            &format!("declared {declared_tags} tags, found {}", tags.len()),
        ));
    }

    Ok(Photo::new(index, orientation, tags))
}

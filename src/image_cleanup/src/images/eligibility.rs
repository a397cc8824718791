use super::record::ImageRecord;

/// An image is a removal candidate when nothing references it by tag.
/// Creation time and labels never factor in.
pub fn is_eligible(record: &ImageRecord) -> bool {
    record.tags.is_empty()
}

use crate::model::tag::TagClubCountDto;

/// Tag name paired with the number of distinct clubs carrying it.
///
/// Tags with no clubs are included with a count of zero.
#[derive(Debug, Clone, PartialEq)]
pub struct TagClubCount {
    pub tag_name: String,
    pub num_clubs: u64,
}

impl TagClubCount {
    pub fn into_dto(self) -> TagClubCountDto {
        TagClubCountDto {
            tag_name: self.tag_name,
            num_clubs: self.num_clubs,
        }
    }
}

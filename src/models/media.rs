/// A video shown in the showcase and played in the modal.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MediaItem {
    pub id: u32,
    pub title: String,
    pub duration_label: String,
    /// Cover image shown on the card.
    pub thumbnail: String,
    /// Video file played in the modal.
    pub media: String,
}

impl Default for MediaItem {
    fn default() -> Self {
        Self {
            id: 0,
            title: String::new(),
            duration_label: "0:00".to_string(),
            thumbnail: String::new(),
            media: String::new(),
        }
    }
}

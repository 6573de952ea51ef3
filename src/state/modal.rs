use crate::models::media::MediaItem;

/// Where a click on the open modal landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The dimmed overlay around the player.
    Backdrop,
    /// The player panel and anything inside it.
    Panel,
}

/// The single media slot for the page. Opening replaces, never queues.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveMedia {
    item: Option<MediaItem>,
}

impl ActiveMedia {
    pub fn activate(&mut self, item: MediaItem) {
        if let Some(previous) = self.item.as_ref() {
            log::debug!("replacing active media {} with {}", previous.id, item.id);
        }
        self.item = Some(item);
    }

    pub fn deactivate(&mut self) {
        self.item = None;
    }

    /// Route a click. Returns true if it closed the modal.
    pub fn click(&mut self, target: ClickTarget) -> bool {
        match target {
            ClickTarget::Backdrop if self.item.is_some() => {
                self.deactivate();
                true
            }
            _ => false,
        }
    }

    pub fn current(&self) -> Option<&MediaItem> {
        self.item.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.item.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u32) -> MediaItem {
        MediaItem {
            id,
            title: format!("Video {id}"),
            media: format!("/videos/{id}.mp4"),
            ..Default::default()
        }
    }

    #[test]
    fn last_activation_wins() {
        let mut modal = ActiveMedia::default();
        modal.activate(item(1));
        modal.activate(item(2));
        assert_eq!(modal.current().map(|m| m.id), Some(2));
    }

    #[test]
    fn deactivate_clears() {
        let mut modal = ActiveMedia::default();
        modal.activate(item(3));
        modal.deactivate();
        assert!(!modal.is_active());
        assert!(modal.current().is_none());
    }

    #[test]
    fn panel_click_keeps_modal_open() {
        let mut modal = ActiveMedia::default();
        modal.activate(item(1));
        assert!(!modal.click(ClickTarget::Panel));
        assert!(modal.is_active());
    }

    #[test]
    fn backdrop_click_closes() {
        let mut modal = ActiveMedia::default();
        modal.activate(item(1));
        assert!(modal.click(ClickTarget::Backdrop));
        assert!(!modal.is_active());
        // nothing left to close
        assert!(!modal.click(ClickTarget::Backdrop));
    }
}

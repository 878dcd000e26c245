use egui::{Color32, RichText};

use crate::TabEntry;

/// Rendered state of one tab header: its own copy of the title and the
/// active marker, synced from the entry at construction and kept current by
/// the container's event dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabHeader {
    id: String,
    title: String,
    active: bool,
}

impl TabHeader {
    pub(crate) fn new(entry: &TabEntry, active: bool) -> Self {
        Self {
            id: entry.id().to_string(),
            title: entry.title().to_string(),
            active,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub const fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub(crate) fn set_title(&mut self, title: String) {
        self.title = title;
    }

    pub const fn color(&self) -> Color32 {
        if self.active {
            Color32::LIGHT_RED
        } else {
            Color32::WHITE
        }
    }

    pub fn text(&self) -> RichText {
        RichText::new(&self.title).color(self.color())
    }
}

use std::collections::VecDeque;

use crate::{Result, TabContent, TabEntry, TabError, TabEvent, TabInit};

/// Ordered set of tab entries, keyed by id. Insertion order is display order.
///
/// The collection is the single writer for the active id: `set_active` clears
/// the previous holder and marks the new one within one call, so at most one
/// entry is ever active. Every mutation records `TabEvent`s for the owning
/// container to drain.
pub struct TabCollection {
    entries: Vec<TabEntry>,
    active: Option<String>,
    events: VecDeque<TabEvent>,
}

impl Default for TabCollection {
    fn default() -> Self {
        Self::create()
    }
}

impl TabCollection {
    pub fn create() -> Self {
        Self {
            entries: Vec::new(),
            active: None,
            events: VecDeque::new(),
        }
    }

    /// Appends a new entry at the end of display order. An id already in the
    /// collection is ignored, keeping the original entry.
    pub fn add(&mut self, init: TabInit) -> Result<()> {
        if init.id.is_empty() {
            return Err(TabError::MissingId);
        }

        if self.contains(&init.id) {
            log::warn!("ignoring duplicate tab: {}", init.id);
            return Ok(());
        }

        log::debug!("adding tab: {}", init.id);

        let entry = TabEntry::new(init);
        self.events.push_back(TabEvent::Added {
            id: entry.id().to_string(),
        });
        self.entries.push(entry);

        Ok(())
    }

    pub fn remove(&mut self, id: &str) -> Result<TabEntry> {
        let pos = self
            .position(id)
            .ok_or_else(|| TabError::NotFound(id.to_string()))?;

        log::debug!("removing tab: {id}");

        let entry = self.entries.remove(pos);

        let was_active = self.active.as_deref() == Some(id);
        if was_active {
            self.active = None;
        }

        self.events.push_back(TabEvent::Removed {
            id: entry.id().to_string(),
            was_active,
        });

        Ok(entry)
    }

    /// Moves the active flag in one call: the previous holder is deactivated
    /// before the new one is activated. Re-activating the current tab records
    /// nothing.
    pub fn set_active(&mut self, id: &str) -> Result<()> {
        if !self.contains(id) {
            return Err(TabError::NotFound(id.to_string()));
        }

        if self.active.as_deref() == Some(id) {
            return Ok(());
        }

        log::debug!("activating tab: {id}");

        if let Some(previous) = self.active.replace(id.to_string()) {
            self.events.push_back(TabEvent::ActiveChanged {
                id: previous,
                active: false,
            });
        }

        self.events.push_back(TabEvent::ActiveChanged {
            id: id.to_string(),
            active: true,
        });

        Ok(())
    }

    /// No event is recorded unless the title actually changes.
    pub fn set_title(&mut self, id: &str, title: impl ToString) -> Result<()> {
        let title = title.to_string();

        let entry = self.get_mut(id)?;
        if entry.title() == title {
            return Ok(());
        }

        entry.set_title(title);
        self.events.push_back(TabEvent::TitleChanged {
            id: id.to_string(),
        });

        Ok(())
    }

    /// No event is recorded unless the content actually changes.
    pub fn set_content(&mut self, id: &str, content: impl Into<TabContent>) -> Result<()> {
        let content = content.into();

        let entry = self.get_mut(id)?;
        if *entry.content() == content {
            return Ok(());
        }

        entry.set_content(content);
        self.events.push_back(TabEvent::ContentChanged {
            id: id.to_string(),
        });

        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&TabEntry> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn active_entry(&self) -> Option<&TabEntry> {
        self.active.as_deref().and_then(|id| self.get(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &TabEntry> + ExactSizeIterator {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn take_events(&mut self) -> VecDeque<TabEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
        self.active = None;
        self.events.clear();
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut TabEntry> {
        self.entries
            .iter_mut()
            .find(|entry| entry.id() == id)
            .ok_or_else(|| TabError::NotFound(id.to_string()))
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id() == id)
    }
}

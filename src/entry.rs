use crate::TabContent;

/// Initializer for a single tab. The container rejects an empty `id`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TabInit {
    pub id: String,
    pub title: String,
    pub content: TabContent,
}

impl TabInit {
    pub fn new(id: impl ToString, title: impl ToString, content: impl Into<TabContent>) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            content: content.into(),
        }
    }
}

/// A single tab's record. The id is fixed at creation; title and content are
/// mutated through the collection so changes get recorded as events.
#[derive(Debug, Clone, PartialEq)]
pub struct TabEntry {
    id: String,
    title: String,
    content: TabContent,
}

impl TabEntry {
    pub(crate) fn new(init: TabInit) -> Self {
        Self {
            id: init.id,
            title: init.title,
            content: init.content,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &TabContent {
        &self.content
    }

    pub(crate) fn set_title(&mut self, title: String) {
        self.title = title;
    }

    pub(crate) fn set_content(&mut self, content: TabContent) {
        self.content = content;
    }
}

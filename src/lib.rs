mod content;
pub use content::TabContent;

mod entry;
pub use entry::{TabEntry, TabInit};

mod event;
pub use event::{PointerKind, TabEvent};

mod error;
pub use error::TabError;

mod collection;
pub use collection::TabCollection;

mod header;
pub use header::TabHeader;

mod view;
pub use view::{Options, TabsView};

pub mod logger;

pub mod widgets;

pub type Result<T> = std::result::Result<T, TabError>;

/// Serializable snapshot of a whole tab set, for host persistence.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct PersistState {
    pub tabs: Vec<PersistTab>,
    pub active: Option<String>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct PersistTab {
    pub id: String,
    pub title: String,
    pub content: Option<String>,
}

impl From<PersistTab> for TabInit {
    fn from(tab: PersistTab) -> Self {
        Self {
            id: tab.id,
            title: tab.title,
            content: tab.content.map(TabContent::Text).unwrap_or_default(),
        }
    }
}

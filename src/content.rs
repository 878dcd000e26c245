use std::rc::Rc;

/// What a tab shows when selected. Opaque to the container, which only hands
/// it to the rendering layer: either a markup string drawn as a label, or a
/// pre-built renderable node.
#[derive(Clone, Default)]
pub enum TabContent {
    #[default]
    Empty,
    Text(String),
    Widget(Rc<dyn Fn(&mut egui::Ui)>),
}

impl TabContent {
    pub fn widget(draw: impl Fn(&mut egui::Ui) + 'static) -> Self {
        Self::Widget(Rc::new(draw))
    }

    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl std::fmt::Debug for TabContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => f.write_str("Empty"),
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Widget(..) => f.write_str("Widget(..)"),
        }
    }
}

// widget nodes compare by identity, everything else by value
impl PartialEq for TabContent {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Empty, Self::Empty) => true,
            (Self::Text(left), Self::Text(right)) => left == right,
            (Self::Widget(left), Self::Widget(right)) => Rc::ptr_eq(left, right),
            _ => false,
        }
    }
}

impl From<String> for TabContent {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for TabContent {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

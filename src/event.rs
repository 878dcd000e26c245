/// Change notifications recorded by the collection and drained by the
/// container after every mutation. Emission order is mutation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabEvent {
    Added { id: String },
    Removed { id: String, was_active: bool },
    ActiveChanged { id: String, active: bool },
    TitleChanged { id: String },
    ContentChanged { id: String },
}

impl TabEvent {
    pub fn id(&self) -> &str {
        match self {
            Self::Added { id }
            | Self::Removed { id, .. }
            | Self::ActiveChanged { id, .. }
            | Self::TitleChanged { id }
            | Self::ContentChanged { id } => id,
        }
    }
}

/// Pointer interactions that can be delegated across all tab headers.
///
/// `Hover` fires every frame the pointer is over a header, not only on entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerKind {
    Click,
    DoubleClick,
    MiddleClick,
    SecondaryClick,
    Hover,
}

impl PointerKind {
    pub(crate) fn matches(&self, response: &egui::Response) -> bool {
        match self {
            Self::Click => response.clicked(),
            Self::DoubleClick => response.double_clicked(),
            Self::MiddleClick => response.clicked_by(egui::PointerButton::Middle),
            Self::SecondaryClick => response.secondary_clicked(),
            Self::Hover => response.hovered(),
        }
    }
}

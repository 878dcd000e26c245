use crate::{
    PersistState, PersistTab, PointerKind, Result, TabCollection, TabContent, TabEntry, TabError,
    TabEvent, TabHeader, TabInit,
};

type PointerHook = Box<dyn FnMut(&str, &egui::Response)>;

/// Construction options: tabs are loaded in order, then `active` (if given)
/// is activated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Options {
    pub tabs: Vec<TabInit>,
    pub active: Option<String>,
}

/// The tabbed container. Owns the collection, one header per entry, the
/// cached content region and the registered pointer hooks.
///
/// Every public mutation runs synchronously: the collection is mutated, its
/// pending events are drained, and the headers and content region are brought
/// up to date before the call returns.
pub struct TabsView {
    collection: TabCollection,
    headers: Vec<TabHeader>,
    content: TabContent,
    hooks: Vec<(PointerKind, PointerHook)>,
}

// hooks hold opaque closures, so Debug is written by hand
impl std::fmt::Debug for TabsView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TabsView")
            .field("collection", &"..")
            .field("headers", &self.headers)
            .field("content", &self.content)
            .field("hooks", &self.hooks.len())
            .finish()
    }
}

impl Default for TabsView {
    fn default() -> Self {
        Self::create()
    }
}

impl TabsView {
    pub fn create() -> Self {
        Self {
            collection: TabCollection::create(),
            headers: Vec::new(),
            content: TabContent::Empty,
            hooks: Vec::new(),
        }
    }

    /// Bulk-loads `options.tabs` in order, one add notification per entry,
    /// then activates `options.active` if given.
    pub fn with_options(options: Options) -> Result<Self> {
        let mut view = Self::create();

        for init in options.tabs {
            view.add_tab(init)?;
        }

        if let Some(active) = options.active {
            view.set_active_tab(&active)
                .map_err(|_| TabError::UnknownActiveTab(active))?;
        }

        Ok(view)
    }

    /// Appends a tab at the end of display order and mounts its header.
    pub fn add_tab(&mut self, init: TabInit) -> Result<()> {
        self.collection.add(init)?;
        self.sync();
        Ok(())
    }

    /// Discards the tab and its header. If it was the active tab the content
    /// region clears; no other tab is promoted.
    pub fn remove_tab(&mut self, id: &str) -> Result<()> {
        self.collection.remove(id)?;
        self.sync();
        Ok(())
    }

    /// Activating the already-active tab is a no-op.
    pub fn set_active_tab(&mut self, id: &str) -> Result<()> {
        self.collection.set_active(id)?;
        self.sync();
        Ok(())
    }

    pub fn active_tab(&self) -> Option<&str> {
        self.collection.active_id()
    }

    pub fn set_tab_title(&mut self, id: &str, title: impl ToString) -> Result<()> {
        self.collection.set_title(id, title)?;
        self.sync();
        Ok(())
    }

    /// Content of a background tab is stored but not rendered until that tab
    /// is selected.
    pub fn set_tab_content(&mut self, id: &str, content: impl Into<TabContent>) -> Result<()> {
        self.collection.set_content(id, content)?;
        self.sync();
        Ok(())
    }

    /// Activates the tab after the active one in display order, wrapping
    /// around. With no active tab the first tab is activated.
    pub fn activate_next(&mut self) {
        if let Some(id) = self.step_from_active(1) {
            let _ = self.set_active_tab(&id);
        }
    }

    /// Activates the tab before the active one in display order, wrapping
    /// around. With no active tab the last tab is activated.
    pub fn activate_previous(&mut self) {
        if let Some(id) = self.step_from_active(-1) {
            let _ = self.set_active_tab(&id);
        }
    }

    /// Registers `handler` for a pointer interaction on any tab header. The
    /// handler receives the tab id and the header's `egui::Response`; `Hover`
    /// fires every frame the pointer is over the header.
    pub fn on_tab_pointer(
        &mut self,
        kind: PointerKind,
        handler: impl FnMut(&str, &egui::Response) + 'static,
    ) {
        self.hooks.push((kind, Box::new(handler)));
    }

    /// Tears the widget down, discarding every header, entry and hook.
    pub fn remove(mut self) {
        log::debug!("removing tabs view ({} tabs)", self.headers.len());
        self.headers.clear();
        self.hooks.clear();
        self.collection.clear();
        self.content = TabContent::Empty;
    }

    pub fn len(&self) -> usize {
        self.collection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.collection.contains(id)
    }

    pub fn entries(&self) -> impl Iterator<Item = &TabEntry> + ExactSizeIterator {
        self.collection.iter()
    }

    pub fn headers(&self) -> impl Iterator<Item = &TabHeader> + ExactSizeIterator {
        self.headers.iter()
    }

    /// The cached content region: whatever the active tab last rendered, or
    /// empty when no tab is active.
    pub fn content(&self) -> &TabContent {
        &self.content
    }

    /// Snapshot for persistence. Widget-valued content has no serializable
    /// form and is saved as `None`.
    pub fn persist_state(&self) -> PersistState {
        PersistState {
            tabs: self
                .collection
                .iter()
                .map(|entry| PersistTab {
                    id: entry.id().to_string(),
                    title: entry.title().to_string(),
                    content: entry.content().as_text().map(ToString::to_string),
                })
                .collect(),
            active: self.active_tab().map(ToString::to_string),
        }
    }

    pub fn from_persist(state: PersistState) -> Result<Self> {
        Self::with_options(Options {
            tabs: state.tabs.into_iter().map(TabInit::from).collect(),
            active: state.active,
        })
    }

    pub(crate) fn dispatch_pointer(&mut self, id: &str, response: &egui::Response) {
        for (kind, handler) in &mut self.hooks {
            if kind.matches(response) {
                handler(id, response);
            }
        }
    }

    // Drains the collection's pending notifications and applies them to the
    // headers and the content region, in emission order.
    fn sync(&mut self) {
        for event in self.collection.take_events() {
            match event {
                TabEvent::Added { id } => {
                    let active = self.collection.active_id() == Some(id.as_str());
                    if let Some(entry) = self.collection.get(&id) {
                        self.headers.push(TabHeader::new(entry, active));
                    }
                }

                TabEvent::Removed { id, was_active } => {
                    self.headers.retain(|header| header.id() != id);
                    if was_active {
                        self.content = TabContent::Empty;
                    }
                }

                TabEvent::ActiveChanged { id, active } => {
                    if let Some(header) = self.header_mut(&id) {
                        header.set_active(active);
                    }
                    if active {
                        self.refresh_content();
                    }
                }

                TabEvent::TitleChanged { id } => {
                    let title = self
                        .collection
                        .get(&id)
                        .map(|entry| entry.title().to_string());
                    if let Some(title) = title {
                        if let Some(header) = self.header_mut(&id) {
                            header.set_title(title);
                        }
                    }
                }

                TabEvent::ContentChanged { id } => {
                    if self.collection.active_id() == Some(id.as_str()) {
                        self.refresh_content();
                    }
                }
            }
        }
    }

    fn refresh_content(&mut self) {
        self.content = self
            .collection
            .active_entry()
            .map(|entry| entry.content().clone())
            .unwrap_or_default();
    }

    fn header_mut(&mut self, id: &str) -> Option<&mut TabHeader> {
        self.headers.iter_mut().find(|header| header.id() == id)
    }

    fn step_from_active(&self, step: isize) -> Option<String> {
        let len = self.headers.len();
        if len == 0 {
            return None;
        }

        let active_pos = self
            .active_tab()
            .and_then(|id| self.headers.iter().position(|header| header.id() == id));

        let pos = match active_pos {
            Some(pos) => (pos as isize + step).rem_euclid(len as isize) as usize,
            None if step >= 0 => 0,
            None => len - 1,
        };

        Some(self.headers[pos].id().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init(id: &str) -> TabInit {
        TabInit::new(id, id.to_uppercase(), format!("content of {id}"))
    }

    fn header_ids(view: &TabsView) -> Vec<String> {
        view.headers().map(|header| header.id().to_string()).collect()
    }

    fn active_headers(view: &TabsView) -> Vec<String> {
        view.headers()
            .filter(|header| header.is_active())
            .map(|header| header.id().to_string())
            .collect()
    }

    #[test]
    fn constructor_loads_tabs_in_order_and_activates() {
        let view = TabsView::with_options(Options {
            tabs: vec![init("a"), init("b")],
            active: Some("b".into()),
        })
        .unwrap();

        assert_eq!(view.active_tab(), Some("b"));
        assert_eq!(header_ids(&view), ["a", "b"]);
        assert_eq!(active_headers(&view), ["b"]);
        assert_eq!(*view.content(), TabContent::from("content of b"));
    }

    #[test]
    fn unknown_active_id_fails_construction() {
        let err = TabsView::with_options(Options {
            tabs: vec![init("a")],
            active: Some("zzz".into()),
        })
        .unwrap_err();

        assert_eq!(err, TabError::UnknownActiveTab("zzz".into()));
    }

    #[test]
    fn activating_renders_the_content_region() {
        let mut view = TabsView::create();
        view.add_tab(TabInit::new("t1", "A", "x")).unwrap();
        assert_eq!(*view.content(), TabContent::Empty);

        view.set_active_tab("t1").unwrap();

        assert_eq!(*view.content(), TabContent::from("x"));
        assert_eq!(active_headers(&view), ["t1"]);
    }

    #[test]
    fn at_most_one_header_is_active() {
        let mut view = TabsView::with_options(Options {
            tabs: vec![init("a"), init("b"), init("c")],
            active: None,
        })
        .unwrap();

        for id in ["a", "c", "b", "c"] {
            view.set_active_tab(id).unwrap();
            assert_eq!(active_headers(&view), [id]);
            assert_eq!(view.active_tab(), Some(id));
        }
    }

    #[test]
    fn removing_the_active_tab_clears_the_content_region() {
        let mut view = TabsView::with_options(Options {
            tabs: vec![init("a"), init("b")],
            active: Some("a".into()),
        })
        .unwrap();

        view.remove_tab("a").unwrap();

        assert_eq!(view.active_tab(), None);
        assert_eq!(*view.content(), TabContent::Empty);
        assert_eq!(header_ids(&view), ["b"]);
        assert!(active_headers(&view).is_empty());
    }

    #[test]
    fn background_content_is_stored_not_rendered() {
        let mut view = TabsView::with_options(Options {
            tabs: vec![init("a"), init("b")],
            active: Some("a".into()),
        })
        .unwrap();

        view.set_tab_content("b", "z").unwrap();
        assert_eq!(*view.content(), TabContent::from("content of a"));

        view.set_active_tab("b").unwrap();
        assert_eq!(*view.content(), TabContent::from("z"));
    }

    #[test]
    fn content_changes_on_the_active_tab_rerender() {
        let mut view = TabsView::with_options(Options {
            tabs: vec![init("a")],
            active: Some("a".into()),
        })
        .unwrap();

        view.set_tab_content("a", "updated").unwrap();
        assert_eq!(*view.content(), TabContent::from("updated"));
    }

    #[test]
    fn title_changes_redraw_the_header() {
        let mut view = TabsView::create();
        view.add_tab(init("a")).unwrap();

        view.set_tab_title("a", "New").unwrap();

        let header = view.headers().next().unwrap();
        assert_eq!(header.title(), "New");
    }

    #[test]
    fn bad_ids_error_out() {
        let mut view = TabsView::create();
        view.add_tab(init("a")).unwrap();

        assert_eq!(
            view.add_tab(TabInit::default()).unwrap_err(),
            TabError::MissingId
        );

        let not_found = TabError::NotFound("missing".into());
        assert_eq!(view.remove_tab("missing").unwrap_err(), not_found);
        assert_eq!(view.set_active_tab("missing").unwrap_err(), not_found);
        assert_eq!(view.set_tab_title("missing", "t").unwrap_err(), not_found);
        assert_eq!(view.set_tab_content("missing", "c").unwrap_err(), not_found);
    }

    #[test]
    fn last_activation_wins_across_add_remove_sequences() {
        let mut view = TabsView::create();
        view.add_tab(init("a")).unwrap();
        view.add_tab(init("b")).unwrap();
        view.add_tab(init("c")).unwrap();

        view.set_active_tab("b").unwrap();
        view.remove_tab("c").unwrap();
        view.add_tab(init("d")).unwrap();
        assert_eq!(view.active_tab(), Some("b"));

        view.remove_tab("b").unwrap();
        assert_eq!(view.active_tab(), None);
        assert!(active_headers(&view).is_empty());
    }

    #[test]
    fn cycling_wraps_in_display_order() {
        let mut view = TabsView::with_options(Options {
            tabs: vec![init("a"), init("b"), init("c")],
            active: None,
        })
        .unwrap();

        view.activate_next();
        assert_eq!(view.active_tab(), Some("a"));
        view.activate_next();
        assert_eq!(view.active_tab(), Some("b"));
        view.activate_next();
        view.activate_next();
        assert_eq!(view.active_tab(), Some("a"));

        view.activate_previous();
        assert_eq!(view.active_tab(), Some("c"));
    }

    #[test]
    fn cycling_from_nothing_picks_an_end() {
        let mut view = TabsView::with_options(Options {
            tabs: vec![init("a"), init("b")],
            active: None,
        })
        .unwrap();

        view.activate_previous();
        assert_eq!(view.active_tab(), Some("b"));

        let mut view = TabsView::create();
        view.activate_next(); // empty container, nothing to do
        assert_eq!(view.active_tab(), None);
    }

    #[test]
    fn persist_state_round_trips() {
        let mut view = TabsView::with_options(Options {
            tabs: vec![init("a"), init("b")],
            active: Some("b".into()),
        })
        .unwrap();
        view.add_tab(TabInit::new("w", "Widget", TabContent::widget(|_| {})))
            .unwrap();

        let json = serde_json::to_string(&view.persist_state()).unwrap();
        let state = serde_json::from_str::<PersistState>(&json).unwrap();
        let restored = TabsView::from_persist(state).unwrap();

        assert_eq!(header_ids(&restored), ["a", "b", "w"]);
        assert_eq!(restored.active_tab(), Some("b"));
        assert_eq!(*restored.content(), TabContent::from("content of b"));
        // widget content couldn't be carried over
        assert_eq!(*restored.entries().last().unwrap().content(), TabContent::Empty);
    }

    #[test]
    fn teardown_consumes_the_view() {
        let mut view = TabsView::create();
        view.add_tab(init("a")).unwrap();
        view.on_tab_pointer(PointerKind::Click, |_, _| {});
        view.remove();
    }
}

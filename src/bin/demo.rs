use eframe::NativeOptions;
use egui::CentralPanel;

use tabstrip::{logger, Options, PersistState, PointerKind, TabContent, TabInit, TabsView};

const TABS_KEY: &str = "tabstrip_demo_tabs";

struct App {
    tabs: TabsView,
    next_tab: usize,
}

impl App {
    fn new(mut tabs: TabsView) -> Self {
        tabs.on_tab_pointer(PointerKind::SecondaryClick, |id, _| {
            log::info!("context menu requested on tab: {id}");
        });

        Self { tabs, next_tab: 0 }
    }

    fn seed() -> anyhow::Result<TabsView> {
        let mut view = TabsView::with_options(Options {
            tabs: vec![
                TabInit::new("welcome", "Welcome", "select a tab to see its content"),
                TabInit::new("about", "About", "a tabbed container widget for egui"),
            ],
            active: Some("welcome".to_string()),
        })?;

        view.add_tab(TabInit::new(
            "painter",
            "Painter",
            TabContent::widget(|ui| {
                ui.heading("a renderable node");
                ui.label("this tab's content is a closure, not a string");
            }),
        ))?;

        Ok(view)
    }

    fn add_numbered_tab(&mut self) {
        self.next_tab += 1;
        let id = format!("tab-{}", self.next_tab);
        let init = TabInit::new(&id, format!("Tab {}", self.next_tab), format!("content of {id}"));

        if let Err(err) = self.tabs.add_tab(init) {
            log::error!("couldn't add tab: {err}");
        }
    }

    fn close_active_tab(&mut self) {
        if let Some(id) = self.tabs.active_tab().map(ToString::to_string) {
            let _ = self.tabs.remove_tab(&id);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input().key_pressed(egui::Key::Tab) {
            self.tabs.activate_next();
        }

        CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("add tab").clicked() {
                    self.add_numbered_tab();
                }

                if ui.button("close active").clicked() {
                    self.close_active_tab();
                }
            });

            ui.separator();
            ui.add(&mut self.tabs);
        });
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let data = self.tabs.persist_state();
        let s = serde_json::to_string(&data).expect("valid json");
        storage.set_string(TABS_KEY, s);
    }
}

fn load_tabs(storage: &dyn eframe::Storage) -> Option<TabsView> {
    let state = storage
        .get_string(TABS_KEY)
        .as_deref()
        .map(serde_json::from_str::<PersistState>)
        .transpose()
        .ok()
        .flatten()?;

    TabsView::from_persist(state).ok()
}

fn main() -> anyhow::Result<()> {
    logger::init_logger()?;

    eframe::run_native(
        "tabstrip demo",
        NativeOptions::default(),
        Box::new(|cc| {
            let tabs = match cc.storage.and_then(|storage| load_tabs(storage)) {
                Some(tabs) => tabs,
                None => App::seed().unwrap_or_else(|err| {
                    log::error!("couldn't seed tabs: {err}");
                    TabsView::create()
                }),
            };

            Box::new(App::new(tabs))
        }),
    );

    Ok(())
}

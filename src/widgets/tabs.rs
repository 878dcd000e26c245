use crate::{widgets::TabStrip, TabContent, TabsView};

pub type TabsWidget<'a> = &'a mut TabsView;

impl egui::Widget for TabsWidget<'_> {
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        ui.vertical(|ui| {
            ui.add(TabStrip { view: &mut *self });
            ui.separator();

            match self.content().clone() {
                TabContent::Empty => {}
                TabContent::Text(text) => {
                    ui.label(text);
                }
                TabContent::Widget(draw) => draw(ui),
            }
        })
        .response
    }
}

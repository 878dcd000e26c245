use crate::TabsView;

/// The clickable header row. Clicking a header asks the container to
/// activate that tab; registered pointer hooks run against every header's
/// response.
pub struct TabStrip<'a> {
    pub view: &'a mut TabsView,
}

impl egui::Widget for TabStrip<'_> {
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        let resp = ui.horizontal(|ui| {
            let mut responses = Vec::with_capacity(self.view.len());

            for header in self.view.headers() {
                let response = ui.selectable_label(header.is_active(), header.text());
                responses.push((header.id().to_string(), response));
            }

            responses
        });

        let mut clicked = None;
        for (id, response) in &resp.inner {
            if response.clicked() {
                clicked = Some(id.clone());
            }
            self.view.dispatch_pointer(id, response);
        }

        if let Some(id) = clicked {
            // the id came from a live header, so this cannot fail
            let _ = self.view.set_active_tab(&id);
        }

        resp.response
    }
}

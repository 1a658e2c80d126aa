use egui::Ui;

use crate::data::view::ChartData;

#[derive(Debug, Clone, Copy)]
pub struct PanelState {
    pub title: &'static str,
    pub icon: &'static str,
    pub visible: bool,
}

impl PanelState {
    pub fn new(title: &'static str, icon: &'static str) -> Self {
        Self {
            title,
            icon,
            visible: true,
        }
    }
}

pub trait Panel {
    fn state(&self) -> &PanelState;
    fn state_mut(&mut self) -> &mut PanelState;

    fn title(&self) -> &'static str {
        self.state().title
    }

    fn icon_only(&self) -> Option<&'static str> {
        let icon = self.state().icon;
        (!icon.is_empty()).then_some(icon)
    }

    fn title_and_icon(&self) -> String {
        match self.icon_only() {
            Some(icon) => format!("{icon} {}", self.title()),
            None => self.title().to_string(),
        }
    }

    fn is_visible(&self) -> bool {
        self.state().visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.state_mut().visible = visible;
    }

    // Optional hooks with default empty impls
    fn render_menu(&mut self, _ui: &mut Ui, _data: &mut ChartData<'_>) {}
    fn render_panel(&mut self, ui: &mut Ui, data: &mut ChartData<'_>);
}

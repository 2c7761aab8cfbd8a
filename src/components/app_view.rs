//! Defines the shared application view state.

#[derive(Clone, Copy, PartialEq)]
pub enum AppView {
    Player,
    Library,
    Settings,
}

pub fn view_label(view: &AppView) -> &'static str {
    match view {
        AppView::Player => "Player",
        AppView::Library => "Library",
        AppView::Settings => "Settings",
    }
}

mod strip;
pub use strip::TabStrip;

mod tabs;
pub use tabs::TabsWidget;

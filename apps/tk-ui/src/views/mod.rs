pub mod control_panel;
pub mod network_view;
pub mod trend_view;

pub use control_panel::ControlPanel;
pub use network_view::NetworkView;
pub use trend_view::TrendView;

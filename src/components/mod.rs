pub mod farm_panel;
pub mod input_form;
pub mod placement_view;
pub mod results_table;
pub mod status;

pub use farm_panel::FarmPanel;
pub use input_form::InputForm;
pub use placement_view::PlacementView;
pub use results_table::ResultsTable;

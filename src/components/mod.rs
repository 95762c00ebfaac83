pub mod area_pictures;
pub mod chart;
pub mod debounced_input;
pub mod floorplan;
pub mod footer;
pub mod header;
pub mod queue_info;
pub mod reservation_span;
pub mod sort_dropdown;
pub mod status;
pub mod vacancy_grid;
pub mod vacancy_map;
pub mod vacancy_table;

pub use footer::Footer;
pub use header::Header;

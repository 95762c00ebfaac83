pub mod deadline;
pub mod debounce;
pub mod format;
pub mod geo;

pub mod archive;
pub mod area;
pub mod error;
pub mod place;
pub mod property;
pub mod sorting;
pub mod user;

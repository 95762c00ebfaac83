pub mod use_archive;
pub mod use_area;
pub mod use_auth;
pub mod use_place;
pub mod use_query;
pub mod use_sorting;
pub mod use_urgency;
pub mod use_vacancies;

pub mod limited_published;

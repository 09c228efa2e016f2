pub mod api_utils;
pub mod clipboard;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod icons;
pub mod messages;
pub mod modal_frame;
pub mod notifications;
pub mod pagination;
pub mod request_scope;

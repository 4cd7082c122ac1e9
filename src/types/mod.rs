pub mod app_state;
pub mod notification;
pub mod transit;

pub mod map_renderer;
pub mod restbus_client;
pub mod selection;

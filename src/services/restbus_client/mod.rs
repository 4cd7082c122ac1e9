pub mod restbus_client;
pub mod types;

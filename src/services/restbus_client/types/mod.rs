pub mod restbus_agency_response;
pub mod restbus_client_error;
pub mod restbus_route_detail_response;
pub mod restbus_route_response;
pub mod restbus_vehicle_response;

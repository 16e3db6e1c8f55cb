pub mod authorizer_context;
pub mod inventory_services;

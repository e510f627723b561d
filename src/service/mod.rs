pub mod contract_service;
pub mod profile;

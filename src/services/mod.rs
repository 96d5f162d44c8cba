//! Services module
//!
//! Lógica de negocio: los generadores de códigos de coche y de nombres
//! de usuario de concesionario, y el alta conjunta que los combina.
//! Son funciones puras; no dependen del estado de la aplicación.

pub mod car_code_service;
pub mod dealer_username_service;
pub mod provisioning_service;

pub use car_code_service::{car_code_for, generate_car_code, generate_car_codes};
pub use dealer_username_service::generate_dealer_usernames;
pub use provisioning_service::provision_dealer_inventory;

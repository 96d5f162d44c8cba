//! Generadores de IDs para el inventario de concesionarios.
//!
//! - Códigos de coche: etiqueta del modelo + fragmento MD5 de los atributos.
//! - Usernames de concesionario: `D_` + nombre + marca + secuencia por lote.
//!
//! Los generadores viven en [`services`]; el resto de módulos los exponen
//! como API HTTP.

pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

pub use models::{CarCode, DealerRecord, DealerUsername, VehicleAttributes};
pub use services::{generate_car_code, generate_car_codes, generate_dealer_usernames};
pub use utils::errors::{IdGenerationError, InvalidRecordReason};

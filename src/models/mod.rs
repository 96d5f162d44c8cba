//! Modelos del sistema
//!
//! Tipos de dominio de los generadores: atributos de vehículo,
//! códigos de coche y registros de concesionario.

pub mod car;
pub mod dealer;

pub use car::*;
pub use dealer::*;

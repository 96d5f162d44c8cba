//! Modelo de concesionario
//!
//! Registros de entrada (`DealerRecord`), nombres de usuario generados
//! y el contador por lote que asigna los números de secuencia.

use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

use crate::models::car::{CarCode, VehicleAttributes};

/// Registro de concesionario tal como llega de la importación
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealerRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "brand_id")]
    pub brand_id: String,
}

impl DealerRecord {
    pub fn new(name: &str, brand_id: &str) -> Self {
        Self {
            name: name.to_string(),
            brand_id: brand_id.to_string(),
        }
    }
}

/// Nombre de usuario de concesionario: base + secuencia de 3 dígitos
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DealerUsername {
    base_username: String,
    sequence: u32,
}

impl DealerUsername {
    pub(crate) fn new(base_username: String, sequence: u32) -> Self {
        Self {
            base_username,
            sequence,
        }
    }

    pub fn base_username(&self) -> &str {
        &self.base_username
    }

    pub fn sequence(&self) -> u32 {
        self.sequence
    }
}

impl fmt::Display for DealerUsername {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:03}", self.base_username, self.sequence)
    }
}

impl Serialize for DealerUsername {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Contador de apariciones por nombre de usuario base.
/// Vive lo que dura una llamada de generación por lote.
#[derive(Debug, Default)]
pub struct UsernameCounter {
    counts: HashMap<String, u32>,
}

impl UsernameCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Número de usuarios ya emitidos para esta base (0 si no hay ninguno)
    pub fn count(&self, base_username: &str) -> u32 {
        self.counts.get(base_username).copied().unwrap_or(0)
    }

    /// Registra una emisión más y devuelve la cuenta actualizada
    pub fn increment(&mut self, base_username: &str) -> u32 {
        let count = self.counts.entry(base_username.to_string()).or_insert(0);
        *count += 1;
        *count
    }

    pub fn distinct_bases(&self) -> usize {
        self.counts.len()
    }
}

/// Vehículo de un lote de alta, asociado a un concesionario por posición
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealerVehicle {
    pub dealer_index: usize,
    #[serde(default)]
    pub model: Option<String>,
    pub variant: String,
    pub price_inr: String,
    pub fuel_type: String,
    pub body_type: String,
    pub colour: String,
}

impl DealerVehicle {
    /// Atributos completos usando el usuario generado del concesionario
    pub fn with_dealer_username(&self, dealer_username: &DealerUsername) -> VehicleAttributes {
        VehicleAttributes {
            model: self.model.clone(),
            variant: self.variant.clone(),
            price_inr: self.price_inr.clone(),
            fuel_type: self.fuel_type.clone(),
            body_type: self.body_type.clone(),
            colour: self.colour.clone(),
            dealer_username: dealer_username.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionedDealer {
    pub record: DealerRecord,
    pub username: DealerUsername,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionedVehicle {
    pub dealer_username: DealerUsername,
    pub car_code: CarCode,
}

/// Resultado de un alta conjunta de concesionarios y vehículos
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionedInventory {
    pub dealers: Vec<ProvisionedDealer>,
    pub vehicles: Vec<ProvisionedVehicle>,
}

//! Utilidades de validación
//!
//! Comprobaciones de transporte aplicadas antes de invocar a los generadores.
//! Los generadores no validan el contenido de los atributos.

use validator::ValidationError;

/// Validar que un lote no supere el tamaño máximo configurado
pub fn validate_batch_size(len: usize, max: usize) -> Result<(), ValidationError> {
    if len > max {
        let mut error = ValidationError::new("batch_size");
        error.add_param("max".into(), &max);
        error.add_param("actual".into(), &len);
        return Err(error);
    }
    Ok(())
}

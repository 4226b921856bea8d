//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de campos
//! del catálogo de vehículos.

use num_traits::Zero;
use serde::Serialize;
use validator::ValidationError;

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor sea positivo
pub fn validate_positive<T: PartialOrd + Zero + Serialize>(value: T) -> Result<(), ValidationError> {
    if value <= T::zero() {
        let mut error = ValidationError::new("positive");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor sea distinto de cero
pub fn validate_non_zero<T: Zero + Serialize>(value: T) -> Result<(), ValidationError> {
    if value.is_zero() {
        let mut error = ValidationError::new("non_zero");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

//! Document models and DTOs.
//!
//! Each submodule contains:
//! - A `Serialize` + `Deserialize` document struct as stored in its collection
//! - A create DTO whose fields are all `Option` so missing ones can be named,
//!   with `into_document` checking presence and value constraints
//! - An update DTO (all `Option` fields) merged by the document's `apply`
//!
//! Foreign keys and natural-key uniqueness need store access and are checked
//! by the API handlers.

pub mod cuota;
pub mod departamento;
pub mod feedback;
pub mod gasto_comun;
pub mod historial_pago;
pub mod mantenimiento;
pub mod morosidad;
pub mod notificacion;
pub mod pago;
pub mod penalizacion;
pub mod personal;
pub mod propietario;
pub mod queja;
pub mod residente;
pub mod solicitud;
pub mod transaccion;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// A record type stored in its own collection.
pub trait Document: Serialize + DeserializeOwned + Send + Sync {
    /// Collection name, also the URL segment under `/api/`.
    const COLLECTION: &'static str;
    /// Human-readable entity name used in error messages and logs.
    const ENTITY: &'static str;

    fn id(&self) -> &str;
}

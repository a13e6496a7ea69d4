//! Enumerated value sets for status and type fields.
//!
//! Values are stored and exchanged verbatim (including accents and spaces).
//! The API only checks membership; it never moves a record from one status
//! to another on its own.

// ---------------------------------------------------------------------------
// Departamento
// ---------------------------------------------------------------------------

pub const DEPARTAMENTO_TIPOS: &[&str] = &["Propietario", "Arriendo"];

pub const DEPARTAMENTO_ESTADOS: &[&str] = &["Ocupado", "Disponible", "En Mantenimiento"];

// ---------------------------------------------------------------------------
// Billing: cuotas, pagos, gastos comunes, transacciones
// ---------------------------------------------------------------------------

pub const CUOTA_ESTADOS: &[&str] = &["Pagada", "Pendiente", "Atrasada"];

pub const PAGO_ESTADOS: &[&str] = &["Pagado", "Pendiente", "Atrasado"];

pub const GASTO_COMUN_TIPOS: &[&str] = &[
    "Agua",
    "Gas",
    "Luz",
    "Internet",
    "Remuneraciones",
    "Insumos",
    "Extraordinario",
    "Servicio",
    "Otro",
];

pub const GASTO_COMUN_ESTADOS: &[&str] = &["Pagado", "Pendiente"];

pub const TRANSACCION_TIPOS: &[&str] = &["Ingreso", "Egreso"];

pub const HISTORIAL_PAGO_METODOS: &[&str] = &["Transferencia", "Tarjeta", "Efectivo", "Otro"];

pub const HISTORIAL_PAGO_ESTADOS: &[&str] = &["Completado", "Parcial", "Fallido"];

// ---------------------------------------------------------------------------
// Delinquency
// ---------------------------------------------------------------------------

pub const MOROSIDAD_ESTADOS: &[&str] = &["Activo", "Cancelado"];

pub const PENALIZACION_ESTADOS: &[&str] = &["Aplicada", "Revertida"];

// ---------------------------------------------------------------------------
// Staff and maintenance
// ---------------------------------------------------------------------------

pub const PERSONAL_CARGOS: &[&str] = &["Mantenimiento", "Conserje", "Instalaciones", "Atención"];

pub const MANTENIMIENTO_ESTADOS: &[&str] = &["Pendiente", "En Proceso", "Completado"];

// ---------------------------------------------------------------------------
// Resident communication
// ---------------------------------------------------------------------------

pub const NOTIFICACION_TIPOS: &[&str] = &[
    "Recordatorio",
    "Penalización",
    "Aviso de Mantención",
    "Emergencia",
];

pub const NOTIFICACION_ESTADOS: &[&str] = &["Enviado", "Leído", "Fallido"];

pub const SOLICITUD_TIPOS: &[&str] = &["Mantenimiento", "Reparación", "Servicio General", "Otro"];

pub const SOLICITUD_ESTADOS: &[&str] = &["Pendiente", "En Proceso", "Completada", "Cancelada"];

pub const SOLICITUD_PRIORIDADES: &[&str] = &["Baja", "Media", "Alta"];

pub const QUEJA_ESTADOS: &[&str] = &["Pendiente", "En Revisión", "Resuelta", "Rechazada"];

pub const FEEDBACK_TIPOS: &[&str] = &["Positivo", "Negativo", "Sugerencia"];

pub const FEEDBACK_ESTADOS: &[&str] = &["Nuevo", "En Revisión", "Atendido"];

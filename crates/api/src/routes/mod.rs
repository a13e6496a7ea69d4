//! Route definitions.
//!
//! Every collection is served under `/api/{collection}` with the same five
//! operations:
//!
//! ```text
//! GET    /api/{collection}/       -> list
//! POST   /api/{collection}/       -> create
//! GET    /api/{collection}/{id}/  -> get
//! PUT    /api/{collection}/{id}/  -> update
//! DELETE /api/{collection}/{id}/  -> delete
//! ```
//!
//! Each path also answers without the trailing slash.

pub mod health;

use axum::routing::{get, post, put, MethodRouter};
use axum::Router;
use condo_db::models::cuota::Cuota;
use condo_db::models::departamento::Departamento;
use condo_db::models::feedback::Feedback;
use condo_db::models::gasto_comun::GastoComun;
use condo_db::models::historial_pago::HistorialPago;
use condo_db::models::mantenimiento::Mantenimiento;
use condo_db::models::morosidad::Morosidad;
use condo_db::models::notificacion::Notificacion;
use condo_db::models::pago::Pago;
use condo_db::models::penalizacion::Penalizacion;
use condo_db::models::personal::Personal;
use condo_db::models::propietario::Propietario;
use condo_db::models::queja::Queja;
use condo_db::models::residente::Residente;
use condo_db::models::solicitud::Solicitud;
use condo_db::models::transaccion::Transaccion;
use condo_db::models::Document;

use crate::handlers::{
    self, cuota, departamento, feedback, gasto_comun, historial_pago, mantenimiento, morosidad,
    notificacion, pago, penalizacion, personal, propietario, queja, residente, solicitud,
    transaccion,
};
use crate::state::AppState;

/// All collection routes, mounted at the root with absolute `/api/...` paths.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(resource::<Departamento>(
            post(departamento::create_departamento),
            put(departamento::update_departamento),
        ))
        .merge(resource::<Cuota>(
            post(cuota::create_cuota),
            put(cuota::update_cuota),
        ))
        .merge(resource::<Propietario>(
            post(propietario::create_propietario),
            put(propietario::update_propietario),
        ))
        .merge(resource::<Residente>(
            post(residente::create_residente),
            put(residente::update_residente),
        ))
        .merge(resource::<Personal>(
            post(personal::create_personal),
            put(personal::update_personal),
        ))
        .merge(resource::<GastoComun>(
            post(gasto_comun::create_gasto_comun),
            put(gasto_comun::update_gasto_comun),
        ))
        .merge(resource::<Pago>(post(pago::create_pago), put(pago::update_pago)))
        .merge(resource::<Mantenimiento>(
            post(mantenimiento::create_mantenimiento),
            put(mantenimiento::update_mantenimiento),
        ))
        .merge(resource::<Transaccion>(
            post(transaccion::create_transaccion),
            put(transaccion::update_transaccion),
        ))
        .merge(resource::<Morosidad>(
            post(morosidad::create_morosidad),
            put(morosidad::update_morosidad),
        ))
        .merge(resource::<Notificacion>(
            post(notificacion::create_notificacion),
            put(notificacion::update_notificacion),
        ))
        .merge(resource::<Penalizacion>(
            post(penalizacion::create_penalizacion),
            put(penalizacion::update_penalizacion),
        ))
        .merge(resource::<HistorialPago>(
            post(historial_pago::create_historial_pago),
            put(historial_pago::update_historial_pago),
        ))
        .merge(resource::<Solicitud>(
            post(solicitud::create_solicitud),
            put(solicitud::update_solicitud),
        ))
        .merge(resource::<Queja>(
            post(queja::create_queja),
            put(queja::update_queja),
        ))
        .merge(resource::<Feedback>(
            post(feedback::create_feedback),
            put(feedback::update_feedback),
        ))
}

/// Build the five CRUD routes for one collection.
///
/// List, get and delete are the generic handlers; `create` and `update`
/// are supplied by the entity's handler module.
fn resource<T: Document + 'static>(
    create: MethodRouter<AppState>,
    update: MethodRouter<AppState>,
) -> Router<AppState> {
    let base = format!("/api/{}", T::COLLECTION);
    let item = format!("{base}/{{id}}");

    let collection = get(handlers::list_documents::<T>).merge(create);
    let member = get(handlers::get_document::<T>)
        .delete(handlers::delete_document::<T>)
        .merge(update);

    Router::new()
        .route(&base, collection.clone())
        .route(&format!("{base}/"), collection)
        .route(&item, member.clone())
        .route(&format!("{item}/"), member)
}

use actix_web::{web, HttpResponse, Responder};

use crate::models::{CheckProcessQuery, ProcessStatus, RunningList};
use crate::services::{is_valid_unit_name, query_unit_active};
use crate::state::AppState;

/// GET /check-process?name=<unit>
///
/// Always answers 200 with `{"isRunning": bool}`. A missing, empty or
/// invalid name is reported as not running without touching the
/// supervisor; supervisor failures and timeouts also degrade to false,
/// with the cause kept in the logs.
pub async fn check_process(
    data: web::Data<AppState>,
    query: web::Query<CheckProcessQuery>,
) -> impl Responder {
    let name = query.name.as_deref().unwrap_or("").trim();

    if name.is_empty() {
        log::debug!("check-process called without a name, reporting not running");
        return HttpResponse::Ok().json(ProcessStatus { is_running: false });
    }

    if !is_valid_unit_name(name) {
        log::warn!("Rejected unit name {:?}: not a valid unit identifier", name);
        return HttpResponse::Ok().json(ProcessStatus { is_running: false });
    }

    let is_running = match query_unit_active(name, data.query_timeout).await {
        Ok(active) => {
            log::debug!("Unit '{}' active: {}", name, active);
            active
        }
        Err(e) => {
            log::error!("Supervisor query for '{}' failed: {:#}", name, e);
            false
        }
    };

    HttpResponse::Ok().json(ProcessStatus { is_running })
}

/// GET /get-running-list
///
/// Returns the deployment's configured service labels. This is static
/// configuration data, not a live check.
pub async fn get_running_list(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(RunningList {
        running_list: data.running_list.clone(),
    })
}

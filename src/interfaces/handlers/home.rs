use actix_web::{get, HttpResponse, Responder};

#[get("/")]
pub async fn home() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Bienvenido a la API del portal de egresados",
        "status": "Ok",
        "version": env!("CARGO_PKG_VERSION"),
        "api": "/api/v1"
    }))
}

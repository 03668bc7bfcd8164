use std::net::SocketAddr;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::App;
use crate::error::AppResult;

#[derive(Serialize)]
pub struct Health {
    status: &'static str,
    version: &'static str,
    listen: SocketAddr,
}

pub async fn status(app: State<App>) -> AppResult<Json<Health>> {
    Ok(Json(Health {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        listen: app.config().http.listen,
    }))
}

// src/handlers/metrics.rs
use warp::reply::Json;
use warp::Rejection;
use log::{debug, info};
use crate::models::RawInputs;
use crate::services::page::metrics_response;

fn respond(inputs: RawInputs) -> Json {
    let response = metrics_response(inputs);
    debug!("Computed metrics: {:?}", response.metrics);
    warp::reply::json(&response)
}

pub async fn get_metrics(inputs: RawInputs) -> Result<Json, Rejection> {
    info!("Handling GET metrics request");
    Ok(respond(inputs))
}

pub async fn post_metrics(inputs: RawInputs) -> Result<Json, Rejection> {
    info!("Handling POST metrics request");
    Ok(respond(inputs))
}

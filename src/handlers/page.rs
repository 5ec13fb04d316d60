// src/handlers/page.rs
use warp::reply::Json;
use warp::Rejection;
use log::info;
use crate::models::RawInputs;
use crate::services::page::{calculator_page, optimization_tips};

pub async fn get_calculator() -> Result<Json, Rejection> {
    info!("Handling request for the calculator page");
    Ok(warp::reply::json(&calculator_page(&RawInputs::default())))
}

pub async fn get_tips() -> Result<Json, Rejection> {
    info!("Handling request for optimization tips");
    Ok(warp::reply::json(&optimization_tips()))
}

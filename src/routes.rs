// src/routes.rs
use crate::handlers::error::ApiError;
use crate::handlers::metrics::{get_metrics, post_metrics};
use crate::handlers::page::{get_calculator, get_tips};
use crate::models::RawInputs;
use log::{info, warn};

use std::convert::Infallible;
use warp::filters::body::BodyDeserializeError;
use warp::reject::{
    InvalidQuery, LengthRequired, MethodNotAllowed, PayloadTooLarge, Rejection,
    UnsupportedMediaType,
};
use warp::{Filter, Reply};

const MAX_BODY_BYTES: u64 = 16 * 1024;

// Turn every rejection into a JSON error body
async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let api_error = if let Some(e) = err.find::<BodyDeserializeError>() {
        ApiError::bad_request(e.to_string())
    } else if let Some(e) = err.find::<InvalidQuery>() {
        ApiError::bad_request(e.to_string())
    } else if err.find::<PayloadTooLarge>().is_some() {
        ApiError::payload_too_large()
    } else if err.find::<UnsupportedMediaType>().is_some() {
        ApiError::unsupported_media_type()
    } else if err.find::<LengthRequired>().is_some() {
        ApiError::length_required()
    } else if err.is_not_found() {
        ApiError::not_found()
    } else if err.find::<MethodNotAllowed>().is_some() {
        ApiError::method_not_allowed()
    } else {
        warn!("Unhandled rejection: {:?}", err);
        ApiError::internal()
    };

    Ok(api_error.into_reply())
}

pub fn routes() -> impl Filter<Extract = impl Reply, Error = Infallible> + Clone {
    info!("Configuring routes...");

    let metrics_get_route = warp::path!("api" / "v1" / "metrics")
        .and(warp::get())
        .and(warp::query::<RawInputs>())
        .and_then(get_metrics);

    let metrics_post_route = warp::path!("api" / "v1" / "metrics")
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::json::<RawInputs>())
        .and_then(post_metrics);

    let calculator_route = warp::path!("api" / "v1" / "calculator")
        .and(warp::get())
        .and_then(get_calculator);

    let tips_route = warp::path!("api" / "v1" / "tips")
        .and(warp::get())
        .and_then(get_tips);

    info!("All routes configured successfully.");

    metrics_get_route
        .or(metrics_post_route)
        .or(calculator_route)
        .or(tips_route)
        .recover(handle_rejection)
}

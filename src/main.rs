use ad_metrics_calculator::config::Config;
use ad_metrics_calculator::routes;
use anyhow::Result;
use dotenv::dotenv;
use log::info;
use warp::Filter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    // Initialize the logger
    env_logger::init();
    info!("Logger initialized. Starting the application...");

    let config = Config::from_env()?;
    let addr = config.socket_addr();
    info!("Will bind to: {}", addr);

    // The presentation surface is served from another origin
    let cors = warp::cors()
        .allow_any_origin()
        .allow_header("content-type")
        .allow_methods(vec!["GET", "POST"]);

    let api = routes::routes().with(cors);
    info!("Routes configured successfully with CORS.");

    info!("Starting server on {}", addr);
    warp::serve(api).run(addr).await;
    Ok(())
}

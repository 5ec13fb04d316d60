// src/bin/compute_metrics.rs
use ad_metrics_calculator::models::RawInputs;
use ad_metrics_calculator::services::page::{metrics_response, optimization_tips};
use dotenv::dotenv;
use std::env;

// Usage: compute_metrics [budget] [clicks] [impressions]
//        compute_metrics budget=1000 impressions=10000 ...
fn main() {
    dotenv().ok();
    env_logger::init();

    let inputs = RawInputs::from_args(env::args().skip(1));

    let response = metrics_response(inputs);
    for card in &response.cards {
        println!("{:<26} {}", card.title, card.display);
    }

    let tips = optimization_tips();
    println!();
    println!("{}:", tips.heading);
    for tip in &tips.tips {
        println!("  - {}", tip);
    }
}

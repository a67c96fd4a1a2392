//! Lambda function: creates short links (`POST|PUT /links`).

use snipline::api::routes::create_routes;
use snipline::config::load_from_env;
use snipline::server::run_function;
use snipline::telemetry::{Runtime, init_tracing};

#[tokio::main]
async fn main() -> Result<(), lambda_http::Error> {
    let config = load_from_env()?;
    init_tracing(&config, Runtime::Lambda);

    run_function(config, create_routes()).await
}

//! Lambda function: redirects short links to their original URL (`GET /{id}`).

use snipline::api::routes::redirect_routes;
use snipline::config::load_from_env;
use snipline::server::run_function;
use snipline::telemetry::{Runtime, init_tracing};

#[tokio::main]
async fn main() -> Result<(), lambda_http::Error> {
    let config = load_from_env()?;
    init_tracing(&config, Runtime::Lambda);

    run_function(config, redirect_routes()).await
}

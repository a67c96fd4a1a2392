//! Local development server.
//!
//! Serves every route from one process. Set `STORAGE_BACKEND=memory` to run
//! without AWS or PostgreSQL.

use snipline::config::load_from_env;
use snipline::server;
use snipline::telemetry::{Runtime, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = load_from_env()?;
    init_tracing(&config, Runtime::Local);
    config.print_summary();

    server::run(config).await
}

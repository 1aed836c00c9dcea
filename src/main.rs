mod cmd;
pub mod conf;
pub mod pkg;
mod prelude;

use crate::prelude::Result;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    cmd::run().await?;
    Ok(())
}

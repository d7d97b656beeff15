//! Navigate a live HAL API from the command line.
//!
//! Fetches the API root and optionally follows one relation by name:
//!
//! ```text
//! cargo run --example navigate -- http://localhost:8080/ users
//! ```

use anyhow::Result;
use hal_http::{HttpService, ResourceFactory, ServiceConfig};
use url::Url;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let base = args
        .next()
        .unwrap_or_else(|| "http://localhost:8080/".to_string());
    let rel = args.next();

    let http = HttpService::with_config(ServiceConfig::with_base_url(Url::parse(&base)?));
    let factory = ResourceFactory::new(http);

    let root = factory.from_uri("/").get_self(None).await?;
    println!("root: {root:#}");

    if let Some(rel) = rel {
        let next = factory.from_value(root)?.get(&rel, None).await?;
        println!("{rel}: {next:#}");
    }

    Ok(())
}

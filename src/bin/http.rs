#[cfg(feature = "http_api")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use std::net::SocketAddr;

    use clap::Parser;
    use nurse_sleep_schedule::{Schedule, http_api};
    use tracing_subscriber::EnvFilter;

    #[derive(Parser)]
    #[command(name = "http")]
    #[command(about = "Serve the sleep schedule over HTTP")]
    struct Cli {
        /// Address to bind
        #[arg(long, env = "NURSE_SLEEP_HTTP_ADDR", default_value = "0.0.0.0:3000")]
        addr: SocketAddr,

        /// Enable debug logging
        #[arg(long, short)]
        verbose: bool,
    }

    let cli = Cli::parse();
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!(addr = %cli.addr, "nurse-sleep-schedule HTTP API listening");
    http_api::serve(cli.addr, Schedule::new()).await?;
    Ok(())
}

#[cfg(not(feature = "http_api"))]
fn main() {
    eprintln!("Rebuild with the `http_api` feature to enable the HTTP server.");
}

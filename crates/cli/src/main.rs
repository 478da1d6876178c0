//! Syncmark CLI entry point.

#[tokio::main]
async fn main() {
    if let Err(e) = syncmark_cli::run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

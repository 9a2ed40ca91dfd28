use anyhow::Result;

/// Main entry point
#[tokio::main]
async fn main() -> Result<()> {
    hnsearch::cli::run().await
}

//! Binary entrypoint.
//!
//! Converts every pending Netscape bookmark export in the working directory.

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    netscape_bookmark_nav::interface::cli::run().await
}

//! Server command implementation

use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Result};

use stride_core::MemoryStore;

/// Axum's static file service takes a UTF-8 path; reject anything else up
/// front instead of panicking mid-startup.
fn static_dir_as_str(path: &Path) -> Result<&str> {
    match path.to_str() {
        Some(s) => Ok(s),
        None => bail!("Static directory path is not valid UTF-8: {}", path.display()),
    }
}

pub async fn cmd_serve(
    host: &str,
    port: u16,
    no_auth: bool,
    static_dir: Option<&Path>,
) -> Result<()> {
    println!("🚀 Starting Stride web server...");
    println!("   Listening: http://{}:{}", host, port);
    if let Some(dir) = static_dir {
        println!("   Static files: {}", dir.display());
    }

    // Parse API keys from environment (comma-separated)
    let api_keys: Vec<String> = std::env::var("STRIDE_API_KEYS")
        .unwrap_or_default()
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    if no_auth {
        println!();
        println!("   ⚠️  Authentication DISABLED - do not expose to network!");
    } else if api_keys.is_empty() {
        println!("   🔑 API keys: none configured (set STRIDE_API_KEYS to grant access)");
    } else {
        println!("   🔑 API keys: {} configured (STRIDE_API_KEYS)", api_keys.len());
    }
    println!("   💾 Storage: in-memory (volatile; state is lost on restart)");
    println!();
    println!("   Press Ctrl+C to stop");

    // The store lives for the lifetime of the process and is handed to the
    // router by handle; there is no durable state.
    let store = Arc::new(MemoryStore::new());

    let config = stride_server::ServerConfig {
        require_auth: !no_auth,
        allowed_origins: vec![],
        api_keys,
    };

    let static_dir_str = static_dir.map(static_dir_as_str).transpose()?;
    stride_server::serve_with_config(store, host, port, static_dir_str, config).await?;

    Ok(())
}

mod cli;
mod config;
mod error;
mod models;
mod server;
mod spelling;
mod utils;

use config::constants::FALLBACK_SPELLING;
use error::SpellError;
use server::{create_router, AppState};
use spelling::number_to_english;
use std::env;
use std::time::Duration;
use utils::sanitize::clamp_fraction_digits;

#[tokio::main]
async fn main() -> error::Result<()> {
    // Load .env file if it exists (silently ignore if it doesn't)
    let _ = dotenvy::dotenv();

    // Initialize tracing for logging with environment variable support
    // Override with RUST_LOG env var: RUST_LOG=debug for verbose output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("spellout_server=info")),
        )
        .with_target(false) // Hide module path for cleaner output
        .compact() // Use compact formatting
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    if args.contains(&"--help".to_string()) || args.contains(&"-h".to_string()) {
        cli::print_help();
        return Ok(());
    }

    if args.contains(&"--version".to_string()) || args.contains(&"-v".to_string()) {
        cli::print_version();
        return Ok(());
    }

    // Check if we should run in server mode
    let server_mode = args.contains(&"--server".to_string());
    let port = args
        .iter()
        .position(|arg| arg == "--port")
        .and_then(|pos| args.get(pos + 1))
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(3000);

    if server_mode {
        println!("Spellout Server v{}", env!("CARGO_PKG_VERSION"));
        println!("Starting spelling HTTP server on port {}...", port);

        let request_timeout = load_request_timeout();

        let addr = format!("0.0.0.0:{}", port);
        let listener = tokio::net::TcpListener::bind(&addr).await?;

        println!("\nServer listening on http://{}", addr);
        println!("\nAvailable endpoints:");
        println!("  POST   /spell        - Spell a number as English words");
        println!("  GET    /health       - Health check");
        println!("\nRequest Timeout:");
        println!("  Timeout: {} seconds", request_timeout.as_secs());
        println!("  Configure: REQUEST_TIMEOUT_SECONDS (default: 60)");

        let state = AppState { request_timeout };

        let app = create_router(state);

        axum::serve(listener, app).await?;
    } else {
        // CLI mode - spell a single number
        let input = if args.len() > 1 {
            args[1].clone()
        } else {
            "123456".to_string()
        };

        // Same consumer contract as the HTTP surface: clamp typing past
        // two decimal places, fall back on magnitude overflow
        let clamped = clamp_fraction_digits(input.trim());

        if clamped.contains('.') {
            println!("(decimals are spelled as currency)");
        }

        match number_to_english(&clamped) {
            Ok(spelling) => println!("{}", spelling),
            Err(SpellError::MagnitudeOverflow { digits }) => {
                tracing::debug!("Magnitude overflow at {} digits", digits);
                println!("{}", FALLBACK_SPELLING);
            }
            Err(err) => return Err(err),
        }
    }

    Ok(())
}

/// Load request timeout configuration from environment variable
fn load_request_timeout() -> Duration {
    let timeout_seconds = env::var("REQUEST_TIMEOUT_SECONDS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60); // Default to 60 seconds

    Duration::from_secs(timeout_seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_request_timeout_default() {
        // Clear environment variable to test default
        env::remove_var("REQUEST_TIMEOUT_SECONDS");

        let timeout = load_request_timeout();
        assert_eq!(
            timeout,
            Duration::from_secs(60),
            "Default timeout should be 60 seconds"
        );
    }

    #[test]
    fn test_load_request_timeout_custom() {
        env::set_var("REQUEST_TIMEOUT_SECONDS", "120");

        let timeout = load_request_timeout();
        assert_eq!(
            timeout,
            Duration::from_secs(120),
            "Custom timeout should be 120 seconds"
        );

        // Cleanup
        env::remove_var("REQUEST_TIMEOUT_SECONDS");
    }

    #[test]
    fn test_load_request_timeout_invalid_falls_back_to_default() {
        env::set_var("REQUEST_TIMEOUT_SECONDS", "invalid");

        let timeout = load_request_timeout();
        assert_eq!(
            timeout,
            Duration::from_secs(60),
            "Invalid timeout should fall back to 60 seconds"
        );

        // Cleanup
        env::remove_var("REQUEST_TIMEOUT_SECONDS");
    }

    #[test]
    fn test_load_request_timeout_negative_falls_back_to_default() {
        env::set_var("REQUEST_TIMEOUT_SECONDS", "-1");

        let timeout = load_request_timeout();
        assert_eq!(
            timeout,
            Duration::from_secs(60),
            "Negative timeout should fall back to 60 seconds"
        );

        // Cleanup
        env::remove_var("REQUEST_TIMEOUT_SECONDS");
    }
}

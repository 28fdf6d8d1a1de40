/// CLI argument parsing and help text

pub fn print_help() {
    let version = env!("CARGO_PKG_VERSION");
    println!("Spellout Server v{}", version);
    println!("Number-to-English spelling HTTP server and CLI");
    println!();
    println!("USAGE:");
    println!("    spellout_server [OPTIONS] [NUMBER]");
    println!();
    println!("OPTIONS:");
    println!("    --server              Start HTTP server mode");
    println!("    --port <PORT>         Server port (default: 3000)");
    println!("    -h, --help            Print this help message");
    println!("    -v, --version         Print version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Start HTTP server on default port 3000");
    println!("    spellout_server --server");
    println!();
    println!("    # Start server on custom port");
    println!("    spellout_server --server --port 8080");
    println!();
    println!("    # CLI mode: spell a number");
    println!("    spellout_server 123456");
    println!();
    println!("    # Decimals are spelled as currency");
    println!("    spellout_server 23.45");
    println!();
    println!("SERVER ENDPOINTS:");
    println!("    POST   /spell        - Spell a number as English words");
    println!("    GET    /health       - Health check");
    println!();
    println!("ENVIRONMENT VARIABLES:");
    println!("    REQUEST_TIMEOUT_SECONDS          - Request timeout in seconds (default: 60)");
    println!("    RUST_LOG                         - Log level (error/warn/info/debug/trace)");
    println!();
    println!("CONFIGURATION:");
    println!("    Settings can be configured via .env file in the current working directory");
}

pub fn print_version() {
    println!("Spellout Server v{}", env!("CARGO_PKG_VERSION"));
}

//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

#[tokio::main]
async fn main() {
    env_logger::init();
    if let Err(err) = hangspot_cli::run().await {
        eprintln!("hangspot: {err}");
        std::process::exit(1);
    }
}

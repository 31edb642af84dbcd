// Entrypoint for the CLI application.
// - Keeps `main` small: create an API client and hand it to the UI loop.
// - Returns `anyhow::Result` to simplify error handling.

use dogceo_cli::{api::ApiClient, ui::main_menu};

fn main() -> anyhow::Result<()> {
    // Debug logging is off by default; enable with RUST_LOG=debug.
    env_logger::init();

    // Create API client configured by environment variable `DOG_API_URL`
    // or default to https://dog.ceo/api. See `api::ApiClient::from_env`.
    let api = ApiClient::from_env()?;

    // Start the interactive menu. This call blocks until the user exits.
    main_menu(api)?;
    Ok(())
}

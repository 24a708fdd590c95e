// Entrypoint for the CLI application.
// - Keeps `main` small: parse flags, create an API client, run one fetch.
// - Returns `anyhow::Result` so any client error prints and exits non-zero.

use clap::Parser;
use photo_catalog_cli::{api::ApiClient, cli::Cli, ui};

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    if args.help {
        Cli::exit_with_usage();
    }

    // Endpoint comes from `PHOTOS_API_URL` when set, otherwise the
    // production catalog URL. See `api::ApiClient::from_env`.
    let api = ApiClient::from_env()?;

    ui::run(&api, &args.to_filters())
}

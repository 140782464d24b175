// Entrypoint for the CLI application.
// - Keeps `main` small: parse the command line, build the client and the
//   file store, and hand everything to `cli::run`.
// - Returns `anyhow::Result` to simplify error handling at the edge.

use clap::Parser;

use moviedb_cli::api::ApiClient;
use moviedb_cli::cli::{self, Cli};
use moviedb_cli::store::FileStore;

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    // Client configured by `TMDB_API_KEY` and the optional `TMDB_BASE_URL`;
    // see `api::ApiClient::from_env`. A missing key is only reported when a
    // network fetch actually happens, local-file commands still work.
    let api = ApiClient::from_env()?;
    let store = FileStore::from_env();

    cli::run(args, &api, &store)
}

// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) parses the command line and hands the parsed command to
// these modules.
//
// Module responsibilities:
// - `api`: Encapsulates the HTTP interactions with The Movie Database
//   (movie and person lookups) behind the `MovieApi` trait.
// - `store`: Reads and writes the per-resource JSON cache files behind
//   the `CacheStore` trait.
// - `dispatch`: Routes a request to a fetch source and a sink and
//   returns the outcome to report.
// - `render`: Turns raw JSON payloads into the text printed to stdout.
// - `cli`: The clap command table plus flag coercion.
// - `interactive`: The prompt sequence that builds the same requests.
// - `progress`: Spinner and notice lines on stderr.
// - `error`: The crate-wide error taxonomy.
//
// Keeping the traits at the `api`/`store` seams makes it easy to test
// the dispatch logic without a network or a real data directory.
pub mod api;
pub mod cli;
pub mod dispatch;
pub mod error;
pub mod interactive;
pub mod progress;
pub mod render;
pub mod store;

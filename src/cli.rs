// Command-line surface: the clap command table, coercion of raw flag values
// into a `Request`, and the spinner-wrapped dispatch loop shared by the flag
// commands and interactive mode.

use clap::{Parser, Subcommand};

use crate::api::MovieApi;
use crate::dispatch::{self, Outcome, Request, Sink};
use crate::error::{Error, Result};
use crate::interactive;
use crate::progress::{self, Spinner};
use crate::store::CacheStore;

/// moviedb-cli: fetch movie and person data from The Movie Database.
#[derive(Debug, Parser)]
#[command(
    name = "moviedb-cli",
    about = "Fetch movie and person data from The Movie Database",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// All subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Make a network request to fetch the most popular persons.
    GetPersons(GetPersonsArgs),
    /// Make a network request to fetch the data of a single person.
    GetPerson(GetPersonArgs),
    /// Make a network request to fetch movies.
    GetMovies(GetMoviesArgs),
    /// Make a network request to fetch the data of a single movie.
    GetMovie(GetMovieArgs),
    /// Interactive way to make the same requests.
    Interactive,
}

/// Arguments for `moviedb-cli get-persons`.
#[derive(Debug, Parser)]
pub struct GetPersonsArgs {
    /// The page of persons data results to fetch.
    #[arg(long, value_name = "NUMBER")]
    pub page: String,

    /// Fetch the popular persons. The list is popular either way; the flag
    /// is kept for symmetry with get-movies.
    #[arg(short, long)]
    pub popular: bool,

    /// Save the persons to the files directory.
    #[arg(long)]
    pub save: bool,

    /// Fetch the persons from the files directory.
    #[arg(long)]
    pub local: bool,
}

impl GetPersonsArgs {
    fn request(&self) -> Result<Request> {
        Ok(Request::Persons {
            page: parse_page(&self.page)?,
            local: self.local,
            save: self.save,
        })
    }
}

/// Arguments for `moviedb-cli get-person`.
#[derive(Debug, Parser)]
pub struct GetPersonArgs {
    /// The id of the person.
    #[arg(short, long, value_name = "NUMBER")]
    pub id: String,

    /// Save the person to the files directory.
    #[arg(long)]
    pub save: bool,

    /// Fetch the person from the files directory.
    #[arg(long)]
    pub local: bool,
}

impl GetPersonArgs {
    fn request(&self) -> Result<Request> {
        Ok(Request::Person {
            id: parse_id(&self.id)?,
            local: self.local,
            save: self.save,
        })
    }
}

/// Arguments for `moviedb-cli get-movies`.
#[derive(Debug, Parser)]
pub struct GetMoviesArgs {
    /// The page of movies data results to fetch.
    #[arg(long, value_name = "NUMBER")]
    pub page: String,

    /// Fetch the popular movies. This is already the default list; the flag
    /// only documents the choice.
    #[arg(short, long)]
    pub popular: bool,

    /// Fetch the movies that are playing now.
    #[arg(short, long)]
    pub now_playing: bool,

    /// Save the movies to the files directory.
    #[arg(long)]
    pub save: bool,

    /// Fetch the movies from the files directory.
    #[arg(long)]
    pub local: bool,
}

impl GetMoviesArgs {
    fn request(&self) -> Result<Request> {
        Ok(Request::Movies {
            page: parse_page(&self.page)?,
            local: self.local,
            now_playing: self.now_playing,
            save: self.save,
        })
    }
}

/// Arguments for `moviedb-cli get-movie`.
#[derive(Debug, Parser)]
pub struct GetMovieArgs {
    /// The id of the movie.
    #[arg(short, long, value_name = "NUMBER")]
    pub id: String,

    /// Accepted for symmetry with the other commands; a single movie is
    /// never written to a file.
    #[arg(long)]
    pub save: bool,

    /// Accepted for symmetry with the other commands; a single movie always
    /// comes from the network.
    #[arg(long)]
    pub local: bool,

    /// Fetch the reviews of the movie.
    #[arg(short, long)]
    pub reviews: bool,
}

impl GetMovieArgs {
    fn request(&self) -> Result<Request> {
        Ok(Request::Movie {
            id: parse_id(&self.id)?,
            reviews: self.reviews,
        })
    }
}

/// Coerce a raw `--page` value. Pages start at 1.
fn parse_page(raw: &str) -> Result<u32> {
    let page: u32 = raw
        .trim()
        .parse()
        .map_err(|_| Error::InvalidArgument(format!("the page must be a number, got '{raw}'")))?;
    if page < 1 {
        return Err(Error::InvalidArgument(format!(
            "the page must be a positive number, got '{raw}'"
        )));
    }
    Ok(page)
}

/// Coerce a raw `--id` value.
fn parse_id(raw: &str) -> Result<u64> {
    raw.trim()
        .parse()
        .map_err(|_| Error::InvalidArgument(format!("the id must be a number, got '{raw}'")))
}

/// Route a parsed command line to the dispatcher.
///
/// Every dispatch outcome, success or failure, is reported through the
/// progress indicator and ends the process with exit code 0; only clap usage
/// errors terminate earlier with a non-zero code.
pub fn run<A: MovieApi, C: CacheStore>(cli: Cli, api: &A, store: &C) -> anyhow::Result<()> {
    match cli.command {
        Command::GetPersons(args) => execute(args.request(), api, store),
        Command::GetPerson(args) => execute(args.request(), api, store),
        Command::GetMovies(args) => execute(args.request(), api, store),
        Command::GetMovie(args) => execute(args.request(), api, store),
        Command::Interactive => {
            let request = interactive::prompt_request()?;
            execute(Ok(request), api, store)
        }
    }
}

fn execute<A: MovieApi, C: CacheStore>(
    request: Result<Request>,
    api: &A,
    store: &C,
) -> anyhow::Result<()> {
    let request = match request {
        Ok(request) => request,
        Err(err) => {
            Spinner::start("Checking the command arguments...").fail(&err.to_string());
            return Ok(());
        }
    };
    let spinner = Spinner::start(request.progress_label());
    report(spinner, dispatch::run(&request, api, store));
    Ok(())
}

/// Print the outcome of one dispatch. Rendered payloads go to stdout while
/// the spinner is suspended; the status mark and any notice go to stderr.
fn report(spinner: Spinner, result: Result<Outcome>) {
    match result {
        Ok(outcome) => {
            if let Sink::Rendered(text) = &outcome.sink {
                spinner.suspend(|| print!("{text}"));
            }
            spinner.succeed(&outcome.status);
            if let Some(notice) = outcome.notice {
                progress::notify(notice);
            }
        }
        Err(err) => spinner.fail(&err.to_string()),
    }
}

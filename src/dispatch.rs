// Dispatcher: the resolve-fetch-sink core. Each request picks one data
// source (network or cache file) and one sink (render or save), performs
// the fetch, and returns an outcome for the caller to report.

use crate::api::MovieApi;
use crate::error::Result;
use crate::render;
use crate::store::{CacheStore, ResourceKind};
use serde::Deserialize;
use serde_json::Value;

/// One validated user action, ready to dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    Movies {
        page: u32,
        local: bool,
        now_playing: bool,
        save: bool,
    },
    Movie {
        id: u64,
        reviews: bool,
    },
    Persons {
        page: u32,
        local: bool,
        save: bool,
    },
    Person {
        id: u64,
        local: bool,
        save: bool,
    },
}

impl Request {
    /// In-flight spinner label for this action.
    pub fn progress_label(&self) -> &'static str {
        match self {
            Request::Movies { .. } => "Fetching the movies data...",
            Request::Movie { .. } => "Fetching the movie data...",
            Request::Persons { .. } => "Fetching the popular persons data...",
            Request::Person { .. } => "Fetching the person's data...",
        }
    }
}

/// Where one dispatch sent its payload.
#[derive(Debug, PartialEq, Eq)]
pub enum Sink {
    /// Formatted text ready for stdout.
    Rendered(String),
    /// The cache file that was overwritten.
    Saved(ResourceKind),
}

/// What one dispatch did: the sink that ran, the status line to report, and
/// an optional saved-notification.
#[derive(Debug)]
pub struct Outcome {
    pub sink: Sink,
    pub status: String,
    pub notice: Option<&'static str>,
}

/// Route a request to its resolver. Exactly one fetch source and one sink
/// run per invocation; the first error aborts the dispatch with nothing
/// rendered and nothing written.
pub fn run<A: MovieApi, C: CacheStore>(request: &Request, api: &A, store: &C) -> Result<Outcome> {
    match *request {
        Request::Movies {
            page,
            local,
            now_playing,
            save,
        } => movies(page, local, now_playing, save, api, store),
        Request::Movie { id, reviews } => movie(id, reviews, api),
        Request::Persons { page, local, save } => persons(page, local, save, api, store),
        Request::Person { id, local, save } => person(id, local, save, api, store),
    }
}

/// The three page fields every list payload carries. Missing fields default
/// rather than error; the items themselves stay opaque.
#[derive(Debug, Default, Deserialize)]
struct PageEnvelope {
    #[serde(default)]
    page: i64,
    #[serde(default)]
    total_pages: i64,
    #[serde(default)]
    results: Vec<Value>,
}

impl PageEnvelope {
    fn extract(payload: &Value) -> Self {
        serde_json::from_value(payload.clone()).unwrap_or_default()
    }
}

/// Movie lists: source keyed by `local`, endpoint and cache file keyed by
/// `now_playing`, sink keyed by `save`. Source and sink are orthogonal, so
/// local+save reloads the cache file and writes it straight back.
fn movies<A: MovieApi, C: CacheStore>(
    page: u32,
    local: bool,
    now_playing: bool,
    save: bool,
    api: &A,
    store: &C,
) -> Result<Outcome> {
    let kind = if now_playing {
        ResourceKind::NowPlayingMovies
    } else {
        ResourceKind::PopularMovies
    };
    let payload = if local {
        store.load(kind)?
    } else if now_playing {
        api.now_playing_movies(page)?
    } else {
        api.popular_movies(page)?
    };
    let loaded = if now_playing {
        "Movies playing now data loaded"
    } else {
        "Popular movies data loaded"
    };
    if save {
        store.save(kind, &payload)?;
        Ok(Outcome {
            sink: Sink::Saved(kind),
            status: format!("{loaded} and saved to {}", kind.file_name()),
            notice: Some("Movies saved to file!"),
        })
    } else {
        let envelope = PageEnvelope::extract(&payload);
        Ok(Outcome {
            sink: Sink::Rendered(render::movie_page(
                envelope.page,
                envelope.total_pages,
                &envelope.results,
            )),
            status: loaded.to_string(),
            notice: None,
        })
    }
}

/// A single movie always comes from the network and is always rendered.
/// With `reviews`, a second independent fetch appends the review collection
/// after the detail record; either fetch failing aborts the whole dispatch.
fn movie<A: MovieApi>(id: u64, reviews: bool, api: &A) -> Result<Outcome> {
    let detail = api.movie(id)?;
    let mut text = render::movie_details(&detail);
    let status = if reviews {
        let collection = api.movie_reviews(id)?;
        text.push_str(&render::reviews(&collection));
        "Movie reviews data loaded"
    } else {
        "Movie data loaded"
    };
    Ok(Outcome {
        sink: Sink::Rendered(text),
        status: status.to_string(),
        notice: None,
    })
}

/// Person lists keep their historical branch order: a local load always
/// renders and `save` only applies to fetched pages.
fn persons<A: MovieApi, C: CacheStore>(
    page: u32,
    local: bool,
    save: bool,
    api: &A,
    store: &C,
) -> Result<Outcome> {
    let kind = ResourceKind::PopularPersons;
    if local {
        let payload = store.load(kind)?;
        Ok(Outcome {
            sink: Sink::Rendered(render::person_page(&payload)),
            status: "Popular persons data loaded".to_string(),
            notice: None,
        })
    } else if save {
        let payload = api.popular_persons(page)?;
        store.save(kind, &payload)?;
        Ok(Outcome {
            sink: Sink::Saved(kind),
            status: format!("Popular persons data saved to {}", kind.file_name()),
            notice: Some("Persons saved to file!"),
        })
    } else {
        let payload = api.popular_persons(page)?;
        Ok(Outcome {
            sink: Sink::Rendered(render::person_page(&payload)),
            status: "Popular persons data loaded".to_string(),
            notice: None,
        })
    }
}

/// A single person: source keyed by `local`, sink keyed by `save`.
fn person<A: MovieApi, C: CacheStore>(
    id: u64,
    local: bool,
    save: bool,
    api: &A,
    store: &C,
) -> Result<Outcome> {
    let kind = ResourceKind::Person;
    let payload = if local { store.load(kind)? } else { api.person(id)? };
    if save {
        store.save(kind, &payload)?;
        Ok(Outcome {
            sink: Sink::Saved(kind),
            status: format!("Person data saved to {}", kind.file_name()),
            notice: None,
        })
    } else {
        Ok(Outcome {
            sink: Sink::Rendered(render::person_details(&payload)),
            status: "Person data loaded".to_string(),
            notice: None,
        })
    }
}

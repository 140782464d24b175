// Interactive mode: a strictly linear prompt sequence. One pass through the
// steps fills an answers record, which becomes the single request to
// dispatch; the mode never loops back to an earlier prompt.

use crate::dispatch::Request;
use anyhow::Result;
use dialoguer::{Confirm, Input, Select};

/// The five selectable actions, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    PopularMovies,
    NowPlayingMovies,
    SingleMovie,
    PopularPersons,
    SinglePerson,
}

const ACTIONS: [Action; 5] = [
    Action::PopularMovies,
    Action::NowPlayingMovies,
    Action::SingleMovie,
    Action::PopularPersons,
    Action::SinglePerson,
];

impl Action {
    fn label(self) -> &'static str {
        match self {
            Action::PopularMovies => "Popular movies",
            Action::NowPlayingMovies => "Now playing movies",
            Action::SingleMovie => "A specific movie",
            Action::PopularPersons => "Popular persons",
            Action::SinglePerson => "A specific person",
        }
    }
}

/// Prompt steps, walked strictly forward. The save step is only reached on
/// the web branch; a local source goes straight to the parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Action,
    Source,
    SaveChoice,
    Params,
    Done,
}

/// Accumulator for the answers collected so far.
#[derive(Debug, Default)]
struct Answers {
    action: Option<Action>,
    local: bool,
    save: bool,
    page: Option<u32>,
    movie_id: Option<u64>,
    include_reviews: bool,
    person_id: Option<u64>,
}

impl Answers {
    /// Convert the collected answers into a dispatchable request. A movie
    /// action drops the source/save answers: single movies always come from
    /// the network and are never saved.
    fn into_request(self) -> Option<Request> {
        match self.action? {
            Action::PopularMovies => Some(Request::Movies {
                page: self.page.unwrap_or(1),
                local: self.local,
                now_playing: false,
                save: self.save,
            }),
            Action::NowPlayingMovies => Some(Request::Movies {
                page: self.page.unwrap_or(1),
                local: self.local,
                now_playing: true,
                save: self.save,
            }),
            Action::SingleMovie => Some(Request::Movie {
                id: self.movie_id?,
                reviews: self.include_reviews,
            }),
            Action::PopularPersons => Some(Request::Persons {
                page: self.page.unwrap_or(1),
                local: self.local,
                save: self.save,
            }),
            Action::SinglePerson => Some(Request::Person {
                id: self.person_id?,
                local: self.local,
                save: self.save,
            }),
        }
    }
}

/// Walk the prompt sequence once and return the request to dispatch.
pub fn prompt_request() -> Result<Request> {
    let mut answers = Answers::default();
    let mut step = Step::Action;
    while step != Step::Done {
        step = advance(step, &mut answers)?;
    }
    answers
        .into_request()
        .ok_or_else(|| anyhow::anyhow!("the prompt sequence ended without a complete request"))
}

/// Run one prompt step and return the next one.
fn advance(step: Step, answers: &mut Answers) -> Result<Step> {
    match step {
        Step::Action => {
            let labels: Vec<&str> = ACTIONS.iter().map(|action| action.label()).collect();
            let index = Select::new()
                .with_prompt("What do you want to fetch?")
                .items(&labels)
                .default(0)
                .interact()?;
            answers.action = Some(ACTIONS[index]);
            Ok(Step::Source)
        }
        Step::Source => {
            let from_web = Confirm::new()
                .with_prompt(
                    "Do you want to fetch it from the web? The alternative is a stored JSON file",
                )
                .default(true)
                .interact()?;
            answers.local = !from_web;
            Ok(if from_web { Step::SaveChoice } else { Step::Params })
        }
        Step::SaveChoice => {
            answers.save = Confirm::new()
                .with_prompt("Do you want to save it to a file?")
                .default(false)
                .interact()?;
            Ok(Step::Params)
        }
        Step::Params => {
            collect_params(answers)?;
            Ok(Step::Done)
        }
        Step::Done => Ok(Step::Done),
    }
}

/// Collect the per-action parameters. Non-integer input re-prompts here;
/// the dispatcher only ever sees valid numbers.
fn collect_params(answers: &mut Answers) -> Result<()> {
    match answers.action {
        Some(Action::PopularMovies | Action::NowPlayingMovies | Action::PopularPersons) => {
            let page: u32 = Input::new()
                .with_prompt("What page do you want to fetch?")
                .default(1)
                .validate_with(|page: &u32| {
                    if *page >= 1 {
                        Ok(())
                    } else {
                        Err("The page number must be a positive number")
                    }
                })
                .interact_text()?;
            answers.page = Some(page);
        }
        Some(Action::SingleMovie) => {
            let id: u64 = Input::new()
                .with_prompt("Id of the movie to fetch")
                .interact_text()?;
            answers.movie_id = Some(id);
            answers.include_reviews = Confirm::new()
                .with_prompt("Do you want to see the movie reviews as well?")
                .default(false)
                .interact()?;
        }
        Some(Action::SinglePerson) => {
            let id: u64 = Input::new()
                .with_prompt("Id of the person to fetch")
                .interact_text()?;
            answers.person_id = Some(id);
        }
        None => {}
    }
    Ok(())
}

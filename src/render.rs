//! Terminal renderer for fetched jokes
//!
//! Fetch failures and empty results become a single inline message.
//! Otherwise every joke is written setup first, then punchline; with a
//! countdown, each punchline is held back for a fixed number of ticks and
//! jokes are revealed one after another.
//!
//! Submissions are answered with one line as well: the server's error text,
//! a confirmation, or a failure notice when the request never completed.

use std::io::{self, Write};
use std::time::Duration;

use crate::client::{ClientError, JokeClient, SubmitOutcome};
use crate::models::{Joke, SubmissionRequest};

/// Smallest count the client will ask for
pub const LOWEST_JOKE_AMOUNT: i64 = 1;
/// Largest count the client will ask for
pub const HIGHEST_JOKE_AMOUNT: i64 = 100;
/// Ticks shown before each punchline
pub const COUNTDOWN_TICKS: u32 = 3;

pub const FETCH_FAILED: &str = "ERROR: Failed to connect to server";
pub const NO_RESULTS: &str = "No jokes found for this selection.";
pub const SUBMITTED: &str = "Joke submitted!";
pub const SUBMIT_FAILED: &str = "Submission failed.";
pub const FIELDS_REQUIRED: &str = "Please fill in all required fields.";

/// How punchlines are revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reveal {
    /// Punchline printed right after the setup
    Immediate,
    /// Punchline printed after [`COUNTDOWN_TICKS`] ticks of this length
    Countdown(Duration),
}

/// Writes jokes to any `Write` sink.
pub struct Renderer<W> {
    out: W,
    reveal: Reveal,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W, reveal: Reveal) -> Self {
        Self { out, reveal }
    }

    /// Renders the outcome of a fetch.
    pub async fn render(&mut self, outcome: Result<Vec<Joke>, ClientError>) -> io::Result<()> {
        match outcome {
            Err(_) => self.message(FETCH_FAILED),
            Ok(jokes) if jokes.is_empty() => self.message(NO_RESULTS),
            Ok(jokes) => self.render_jokes(&jokes).await,
        }
    }

    /// Renders the outcome of a submission.
    pub fn render_submission(
        &mut self,
        outcome: Result<SubmitOutcome, ClientError>,
    ) -> io::Result<()> {
        match outcome {
            Ok(SubmitOutcome::Accepted(_)) => self.message(SUBMITTED),
            Ok(SubmitOutcome::Rejected(rejection)) => self.message(&rejection.error),
            Err(_) => self.message(SUBMIT_FAILED),
        }
    }

    /// Writes a single inline message line.
    pub fn message(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")?;
        self.out.flush()
    }

    async fn render_jokes(&mut self, jokes: &[Joke]) -> io::Result<()> {
        writeln!(self.out, "Jokes:")?;
        for joke in jokes {
            writeln!(self.out)?;
            writeln!(self.out, "ID: {}", joke.id)?;
            writeln!(self.out, "{}", joke.setup)?;

            if let Reveal::Countdown(tick) = self.reveal {
                for remaining in (1..=COUNTDOWN_TICKS).rev() {
                    writeln!(self.out, "Get it yet... {remaining}!")?;
                    self.out.flush()?;
                    tokio::time::sleep(tick).await;
                }
            }

            writeln!(self.out, "Punchline: {}", joke.punchline)?;
            self.out.flush()?;
        }
        Ok(())
    }

    /// Consumes the renderer, returning the sink.
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Checks a user-entered count against the client's bounds.
pub fn validate_count(count: i64) -> Result<i64, String> {
    if (LOWEST_JOKE_AMOUNT..=HIGHEST_JOKE_AMOUNT).contains(&count) {
        Ok(count)
    } else {
        Err(format!(
            "ERROR: Number must be between {LOWEST_JOKE_AMOUNT} and {HIGHEST_JOKE_AMOUNT}"
        ))
    }
}

/// Fetches `count` jokes of `joke_type` and renders them.
///
/// An out-of-range count is reported inline without making a request.
pub async fn show_jokes<W: Write>(
    client: &JokeClient,
    renderer: &mut Renderer<W>,
    joke_type: &str,
    count: i64,
) -> io::Result<()> {
    match validate_count(count) {
        Ok(count) => {
            let outcome = client.jokes(joke_type, count).await;
            renderer.render(outcome).await
        }
        Err(msg) => renderer.message(&msg),
    }
}

/// Fetches as many jokes of any type as the client allows and renders them.
pub async fn show_all_jokes<W: Write>(
    client: &JokeClient,
    renderer: &mut Renderer<W>,
) -> io::Result<()> {
    let outcome = client.jokes(crate::cache::ANY_TYPE, HIGHEST_JOKE_AMOUNT).await;
    renderer.render(outcome).await
}

/// Submits a joke and renders the reply.
///
/// Blank setup, punchline or type is reported inline without making a
/// request. Surrounding whitespace is trimmed before sending.
pub async fn submit_joke<W: Write>(
    client: &JokeClient,
    renderer: &mut Renderer<W>,
    request: SubmissionRequest,
) -> io::Result<()> {
    match request.validate() {
        Ok(submission) => {
            let outcome = client.submit(&SubmissionRequest::from(submission)).await;
            renderer.render_submission(outcome)
        }
        Err(_) => renderer.message(FIELDS_REQUIRED),
    }
}

//! Records and request/response models
//!
//! Joke records plus the DTOs used for serializing/deserializing HTTP bodies.

pub mod joke;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use joke::{Joke, JokeType};
pub use requests::{
    JokeQuery, NewJoke, Submission, SubmissionRequest, SubmitJokeRequest, DEFAULT_JOKE_COUNT,
};
pub use responses::{ErrorResponse, HealthResponse, SubmissionResponse, SubmittedJoke};

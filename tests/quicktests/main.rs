//! Property tests against the public API, using the standard library as the model.

mod ordered;
mod search;
mod sort;

//! Career recommendation engine: stream and level inference, entity scoring,
//! candidate selection and aggregate explanations, plus the HTTP handlers and
//! data source that host it.

pub mod explain;
pub mod handlers;
pub mod level;
pub mod reference;
pub mod scoring;
pub mod selector;
pub mod source;
pub mod stream;

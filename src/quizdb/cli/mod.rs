//! Terminal front end: table rendering and the interactive quiz loop.

pub(crate) mod play;
pub(crate) mod print;

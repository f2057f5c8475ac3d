// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{copy,export,refresh,poll}.

mod copy;     // src/gui/actions/copy.rs
mod export;   // src/gui/actions/export.rs
mod refresh;  // src/gui/actions/refresh.rs

pub use copy::copy;
pub use export::export;
pub use refresh::{FetchResult, poll, refresh};

// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{load, extract, copy}.

mod copy;
mod extract;
mod load;

pub use copy::copy;
pub use extract::extract;
pub use load::load;

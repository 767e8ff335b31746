mod helpers;
mod state;

pub use state::*;

mod clock;
mod pipeline;
mod scene;
mod types;

pub use clock::*;
pub use pipeline::*;
pub use scene::*;
pub use types::*;

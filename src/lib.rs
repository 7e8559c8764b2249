pub mod args;
pub mod error;
pub mod model;
pub mod storage;
pub mod client {
    pub mod espn;
    pub mod micro;
}
pub mod controller {
    pub mod diff;
    pub mod extract;
    pub mod parse;
    pub mod pipeline;
}

pub use controller::pipeline::Pipeline;
pub use error::CoreError;

//! Interactive front end for unitconv

mod logging;
mod session;

pub use logging::init_logger;
pub use session::{run, SessionConfig};

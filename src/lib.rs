pub mod advisor;
pub mod error;
pub mod log;
pub mod logging;
pub mod round;
pub mod stats;

pub use advisor::Advisor;
pub use error::{FormatProblem, LogError};
pub use log::{read_all, RoundLog};
pub use round::{Choice, Outcome, Round};
pub use stats::Tally;

pub const DEFAULT_LOG_PATH: &str = "felix_data.txt";

mod fetch_progress;
mod progress_style;

pub use fetch_progress::{fetch_spinner, spinner_progress};
pub use progress_style::ProgressStyleTemplate;

use crate::collect::{FetchProgress, FetchStep};
use crate::utils::ProgressStyleTemplate;
use indicatif::ProgressBar;
use std::time::Duration;

/// Spinner on stderr showing the request in flight, with one line per finished request.
pub fn fetch_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyleTemplate::spinner());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

pub fn spinner_progress(pb: &ProgressBar) -> FetchProgress<'_> {
    Box::new(move |step: FetchStep<'_>| match step {
        FetchStep::Started { source, label } => {
            pb.set_message(format!("Fetching {source} [{label}] ..."));
        }
        FetchStep::Finished {
            source,
            label,
            kept,
        } => {
            pb.println(format!("✅ {source} [{label}]: {kept} issues"));
        }
    })
}

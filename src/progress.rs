pub use indicatif::ProgressBar;
use indicatif::ProgressStyle;

/// One tick per gene pipeline; safe to increment from worker threads.
pub fn batch(size: usize) -> ProgressBar {
    let progress = ProgressBar::new(size as u64);
    progress.set_style(
        ProgressStyle::default_bar().template("{wide_bar} {pos}/{len} genes [{elapsed} elapsed]"),
    );

    progress
}

// src/progress.rs

/// Lightweight progress reporting for the multi-year fetch. The CLI
/// implements this to print per-year status; library callers can pass
/// `None` or a [`NullProgress`].
pub trait Progress {
    /// Called once up front with the number of years in the range.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line.
    fn log(&mut self, _msg: &str) {}

    /// One year's page fetched and parsed.
    fn year_done(&mut self, _year: i32, _episodes: usize) {}

    /// Called after the last year, whether or not the run succeeded.
    fn finish(&mut self) {}
}

/// Progress sink that discards everything.
pub struct NullProgress;
impl Progress for NullProgress {}

mod quiz;
mod state;
mod summary;

pub use quiz::QuizView;
pub use state::ViewError;
pub use summary::SummaryView;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

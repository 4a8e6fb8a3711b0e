//! Submission sink for accepted sign-in values

mod console;
mod traits;

pub use console::ConsoleSubmitter;
pub use traits::Submitter;

#[cfg(test)]
pub use traits::MockSubmitter;

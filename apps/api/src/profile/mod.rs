// Profile transformation layer: loads the portfolio document once and
// derives the persona prompt and structured views from it.
// Nothing in here performs I/O except `loader`.

pub mod education;
pub mod handlers;
pub mod loader;
pub mod parser;
pub mod presets;
pub mod prompts;
pub mod validation;

#[cfg(test)]
pub mod testing;

pub use parser::{ConfigParser, ContactInfo, ProfileInfo, ProjectCard, ResumeDetails};

#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod generator;
pub mod model;
pub mod time;

pub use catalog::{Curriculum, StandardCurriculum, TopicDescriptor};
pub use error::Error;
pub use generator::{Dispatcher, GenerateError, GeneratorRegistry, ProblemGenerator};
pub use time::Clock;

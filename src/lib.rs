pub mod config;
pub mod core;
pub mod error;
pub mod pipeline;

pub use self::core::corrector::{correct, notes_for, CorrectionNote, CorrectionResult, Corrector};
pub use self::core::register::{enforce_register, SpeechLevel};
pub use pipeline::{process, CorrectionRequest, CorrectionResponse, Smoother};

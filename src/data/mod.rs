mod loader;

pub use loader::{DEFAULT_QUESTIONS_PATH, LoadError, load_questions_from_json};

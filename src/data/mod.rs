mod loader;

pub use loader::{LoadError, bundled_questions, load_questions_from_json, parse_questions};

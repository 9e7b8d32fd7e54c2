pub mod characters;
pub mod curriculum;
pub mod modules;

pub use characters::{Character, CHARACTERS, character_by_key};
pub use curriculum::{Subject, Topic, grades, subjects, topic_text, topics};
pub use modules::{GlobalModule, AUTO_SELECTOR, GLOBAL_MODULES, NONE_SELECTOR, module_by_selector};

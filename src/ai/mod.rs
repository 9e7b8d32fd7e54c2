pub mod client;
pub mod generator;
pub mod prompt;

pub use client::{LessonModel, ModelConfig, OpenRouterClient};
pub use generator::{
    PartialLessonOutput, extract_json_object, generate_lesson_pack, parse_lesson_response,
};
pub use prompt::{build_lesson_prompt, module_fragment};

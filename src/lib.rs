pub mod ai;
pub mod app;
pub mod config;
pub mod content;
pub mod error;
pub mod export;
pub mod intake;
pub mod logger;
pub mod models;
pub mod ui;
pub mod utils;
pub mod worker;


// Re-exports for convenience
pub use ai::{LessonModel, ModelConfig, OpenRouterClient, build_lesson_prompt, generate_lesson_pack};
pub use app::App;
pub use config::AppConfig;
pub use error::{GENERATION_FAILED_MESSAGE, GenerationError, ParseError};
pub use export::export_markdown;
pub use intake::{load_material, load_material_blocking, process_ocr, process_speech_to_text};
pub use models::{AppState, ContentOrigin, GradeLevel, LessonInput, LessonOutput, QaPair};
pub use worker::{GenerationWorker, spawn_generation_worker};

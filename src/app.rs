use crate::config::AppConfig;
use crate::content::{self, CHARACTERS, GLOBAL_MODULES, NONE_SELECTOR, Subject, Topic};
use crate::export::export_markdown;
use crate::intake::{Material, load_material_blocking};
use crate::logger;
use crate::models::{
    AppState, ContentOrigin, GenerationEvent, GenerationRequest, GradeLevel, LessonInput,
    LessonOutput,
};
use crate::ui::lesson_lines;
use crate::utils::byte_offset;
use crossbeam_channel::Sender;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::PathBuf;
use std::time::Instant;

pub const DASHBOARD_ITEMS: [&str; 4] = [
    "Browse NCERT curriculum",
    "Write or paste material",
    "Upload material from a file",
    "Quit",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    Info(String),
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseLevel {
    Grade,
    Subject,
    Topic,
}

/// Cursor into the grade -> subject -> topic tree.
#[derive(Debug, Clone)]
pub struct CurriculumBrowser {
    pub level: BrowseLevel,
    pub grades: Vec<GradeLevel>,
    pub grade_index: usize,
    pub subject_index: usize,
    pub topic_index: usize,
}

impl Default for CurriculumBrowser {
    fn default() -> Self {
        Self {
            level: BrowseLevel::Grade,
            grades: content::grades(),
            grade_index: 0,
            subject_index: 0,
            topic_index: 0,
        }
    }
}

impl CurriculumBrowser {
    pub fn grade(&self) -> Option<GradeLevel> {
        self.grades.get(self.grade_index).copied()
    }

    pub fn subjects(&self) -> &'static [Subject] {
        self.grade().map(content::subjects).unwrap_or(&[])
    }

    pub fn subject(&self) -> Option<&'static Subject> {
        self.subjects().get(self.subject_index)
    }

    pub fn topics(&self) -> &'static [Topic] {
        self.subject().map(|s| s.topics.as_slice()).unwrap_or(&[])
    }

    pub fn topic(&self) -> Option<&'static Topic> {
        self.topics().get(self.topic_index)
    }

    fn len(&self) -> usize {
        match self.level {
            BrowseLevel::Grade => self.grades.len(),
            BrowseLevel::Subject => self.subjects().len(),
            BrowseLevel::Topic => self.topics().len(),
        }
    }

    fn index_mut(&mut self) -> &mut usize {
        match self.level {
            BrowseLevel::Grade => &mut self.grade_index,
            BrowseLevel::Subject => &mut self.subject_index,
            BrowseLevel::Topic => &mut self.topic_index,
        }
    }

    pub fn selected(&self) -> usize {
        match self.level {
            BrowseLevel::Grade => self.grade_index,
            BrowseLevel::Subject => self.subject_index,
            BrowseLevel::Topic => self.topic_index,
        }
    }

    fn move_up(&mut self) {
        let idx = self.index_mut();
        *idx = idx.saturating_sub(1);
    }

    fn move_down(&mut self) {
        let last = self.len().saturating_sub(1);
        let idx = self.index_mut();
        if *idx < last {
            *idx += 1;
        }
    }

    /// Go one level deeper. Returns false when already at a topic.
    fn descend(&mut self) -> bool {
        match self.level {
            BrowseLevel::Grade => {
                self.level = BrowseLevel::Subject;
                self.subject_index = 0;
                true
            }
            BrowseLevel::Subject => {
                self.level = BrowseLevel::Topic;
                self.topic_index = 0;
                true
            }
            BrowseLevel::Topic => false,
        }
    }

    /// Go one level up. Returns false when already at the grade list.
    fn ascend(&mut self) -> bool {
        match self.level {
            BrowseLevel::Grade => false,
            BrowseLevel::Subject => {
                self.level = BrowseLevel::Grade;
                true
            }
            BrowseLevel::Topic => {
                self.level = BrowseLevel::Subject;
                true
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposeField {
    Material,
    Grade,
    Module,
    Character,
    Origin,
}

impl ComposeField {
    const ORDER: [ComposeField; 5] = [
        ComposeField::Material,
        ComposeField::Grade,
        ComposeField::Module,
        ComposeField::Character,
        ComposeField::Origin,
    ];

    fn next(self) -> Self {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + 1) % Self::ORDER.len()]
    }

    fn prev(self) -> Self {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Selectors offered on the compose screen: every global module, then "none".
pub fn module_choices() -> Vec<&'static str> {
    GLOBAL_MODULES
        .iter()
        .map(|m| m.selector)
        .chain(std::iter::once(NONE_SELECTOR))
        .collect()
}

#[derive(Debug, Clone)]
pub struct ComposeForm {
    pub text: String,
    /// Cursor as a char index into `text`.
    pub cursor: usize,
    pub grade: GradeLevel,
    pub module_index: usize,
    pub character_index: usize,
    pub origin: ContentOrigin,
    pub focus: ComposeField,
    /// Where the material came from, shown above the editor.
    pub source_label: Option<String>,
}

impl Default for ComposeForm {
    fn default() -> Self {
        Self {
            text: String::new(),
            cursor: 0,
            grade: GradeLevel::default(),
            module_index: 0,
            character_index: 0,
            origin: ContentOrigin::Text,
            focus: ComposeField::Material,
            source_label: None,
        }
    }
}

impl ComposeForm {
    pub fn module_selector(&self) -> &'static str {
        let choices = module_choices();
        choices
            .get(self.module_index)
            .copied()
            .unwrap_or(content::AUTO_SELECTOR)
    }

    pub fn character_key(&self) -> &'static str {
        CHARACTERS
            .get(self.character_index)
            .unwrap_or(&CHARACTERS[0])
            .key
    }

    pub fn set_text(&mut self, text: String) {
        self.cursor = text.chars().count();
        self.text = text;
    }

    pub fn build_input(&self) -> LessonInput {
        LessonInput::new(self.text.clone(), self.grade, self.module_selector())
            .with_origin(self.origin)
            .with_character(self.character_key())
    }

    fn insert_char(&mut self, c: char) {
        let at = byte_offset(&self.text, self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
    }

    fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let at = byte_offset(&self.text, self.cursor - 1);
        self.text.remove(at);
        self.cursor -= 1;
    }

    fn delete(&mut self) {
        if self.cursor < self.text.chars().count() {
            let at = byte_offset(&self.text, self.cursor);
            self.text.remove(at);
        }
    }

    fn cycle(&mut self, forward: bool) {
        let step = |idx: usize, len: usize| {
            if forward { (idx + 1) % len } else { (idx + len - 1) % len }
        };
        match self.focus {
            ComposeField::Material => {}
            ComposeField::Grade => {
                self.grade = if forward { self.grade.next() } else { self.grade.prev() };
            }
            ComposeField::Module => {
                self.module_index = step(self.module_index, module_choices().len());
            }
            ComposeField::Character => {
                self.character_index = step(self.character_index, CHARACTERS.len());
            }
            ComposeField::Origin => {
                let len = ContentOrigin::ALL.len();
                let i = ContentOrigin::ALL
                    .iter()
                    .position(|o| *o == self.origin)
                    .unwrap_or(0);
                self.origin = ContentOrigin::ALL[step(i, len)];
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResultsView {
    pub input: LessonInput,
    pub output: LessonOutput,
    pub scroll: u16,
    pub exported_to: Option<PathBuf>,
}

impl ResultsView {
    /// Last line the lesson panel can scroll to.
    pub fn max_scroll(&self) -> u16 {
        let lines = lesson_lines(&self.output).len().saturating_sub(1);
        u16::try_from(lines).unwrap_or(u16::MAX)
    }

    fn scroll_by(&mut self, delta: i32) {
        let target = (i32::from(self.scroll) + delta).clamp(0, i32::from(self.max_scroll()));
        self.scroll = target as u16;
    }
}

pub struct App {
    pub state: AppState,
    pub config: AppConfig,
    pub dashboard_index: usize,
    pub browser: CurriculumBrowser,
    pub compose: ComposeForm,
    /// Path typed on the upload screen.
    pub upload_path: String,
    pub results: Option<ResultsView>,
    pub banner: Option<Banner>,
    pub pending_request: Option<u64>,
    pub generation_started: Option<Instant>,
    pub should_quit: bool,
    next_request_id: u64,
    request_tx: Sender<GenerationRequest>,
}

impl App {
    pub fn new(config: AppConfig, request_tx: Sender<GenerationRequest>) -> Self {
        Self {
            state: AppState::Dashboard,
            config,
            dashboard_index: 0,
            browser: CurriculumBrowser::default(),
            compose: ComposeForm::default(),
            upload_path: String::new(),
            results: None,
            banner: None,
            pending_request: None,
            generation_started: None,
            should_quit: false,
            next_request_id: 1,
            request_tx,
        }
    }

    /// Start on the compose screen with material loaded from a file.
    pub fn open_material(&mut self, material: Material, source: String) {
        self.compose.set_text(material.text);
        self.compose.origin = material.origin;
        self.compose.source_label = Some(source);
        self.state = AppState::Compose;
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.state {
            AppState::Dashboard => self.handle_dashboard_key(key),
            AppState::Curriculum => self.handle_curriculum_key(key),
            AppState::Upload => self.handle_upload_key(key),
            AppState::Compose => self.handle_compose_key(key),
            AppState::Generating => self.handle_generating_key(key),
            AppState::Results => self.handle_results_key(key),
        }
    }

    fn handle_dashboard_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.dashboard_index = self.dashboard_index.saturating_sub(1),
            KeyCode::Down => {
                if self.dashboard_index < DASHBOARD_ITEMS.len() - 1 {
                    self.dashboard_index += 1;
                }
            }
            KeyCode::Enter => match self.dashboard_index {
                0 => self.state = AppState::Curriculum,
                1 => {
                    self.compose.source_label = None;
                    self.compose.focus = ComposeField::Material;
                    self.state = AppState::Compose;
                }
                2 => {
                    self.banner = None;
                    self.state = AppState::Upload;
                }
                _ => self.should_quit = true,
            },
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_upload_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) => self.upload_path.push(c),
            KeyCode::Backspace => {
                self.upload_path.pop();
            }
            KeyCode::Enter => self.load_upload_path(),
            KeyCode::Esc => {
                self.banner = None;
                self.state = AppState::Dashboard;
            }
            _ => {}
        }
    }

    fn load_upload_path(&mut self) {
        let typed = self.upload_path.trim();
        if typed.is_empty() {
            self.banner = Some(Banner::Error("Type the path of a file to load.".to_string()));
            return;
        }

        let path = PathBuf::from(typed);
        match load_material_blocking(&path) {
            Ok(material) => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_else(|| path.display().to_string());
                self.open_material(material, format!("File: {}", name));
                self.compose.focus = ComposeField::Material;
                self.upload_path.clear();
                self.banner = None;
            }
            Err(e) => {
                logger::log_error(&format!("Intake failed: {}", e));
                self.banner = Some(Banner::Error(format!("Failed to process file: {}", e)));
            }
        }
    }

    fn handle_curriculum_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.browser.move_up(),
            KeyCode::Down => self.browser.move_down(),
            KeyCode::Enter | KeyCode::Right => {
                if !self.browser.descend() {
                    self.use_selected_topic();
                }
            }
            KeyCode::Left | KeyCode::Backspace | KeyCode::Esc => {
                if !self.browser.ascend() {
                    self.state = AppState::Dashboard;
                }
            }
            _ => {}
        }
    }

    fn use_selected_topic(&mut self) {
        let (Some(grade), Some(subject), Some(topic)) =
            (self.browser.grade(), self.browser.subject(), self.browser.topic())
        else {
            return;
        };
        self.compose.set_text(topic.text.to_string());
        self.compose.grade = grade;
        self.compose.origin = ContentOrigin::Text;
        self.compose.focus = ComposeField::Module;
        self.compose.source_label = Some(format!(
            "NCERT Class {} / {} / {}",
            grade, subject.name, topic.name
        ));
        self.banner = None;
        self.state = AppState::Compose;
    }

    fn handle_compose_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('g') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.start_generation();
            return;
        }

        match key.code {
            KeyCode::Esc => {
                self.state = AppState::Dashboard;
                return;
            }
            KeyCode::Tab => {
                self.compose.focus = self.compose.focus.next();
                return;
            }
            KeyCode::BackTab => {
                self.compose.focus = self.compose.focus.prev();
                return;
            }
            _ => {}
        }

        if self.compose.focus != ComposeField::Material {
            match key.code {
                KeyCode::Left => self.compose.cycle(false),
                KeyCode::Right | KeyCode::Enter | KeyCode::Char(' ') => self.compose.cycle(true),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char(c) => self.compose.insert_char(c),
            KeyCode::Enter => self.compose.insert_char('\n'),
            KeyCode::Backspace => self.compose.backspace(),
            KeyCode::Delete => self.compose.delete(),
            KeyCode::Left => self.compose.cursor = self.compose.cursor.saturating_sub(1),
            KeyCode::Right => {
                if self.compose.cursor < self.compose.text.chars().count() {
                    self.compose.cursor += 1;
                }
            }
            KeyCode::Home => self.compose.cursor = 0,
            KeyCode::End => self.compose.cursor = self.compose.text.chars().count(),
            _ => {}
        }
    }

    /// Send the compose form to the worker. One request is outstanding at a time.
    pub fn start_generation(&mut self) {
        if self.pending_request.is_some() {
            return;
        }
        if self.compose.text.trim().is_empty() {
            self.banner = Some(Banner::Error(
                "Add some lesson material before generating.".to_string(),
            ));
            return;
        }

        let request_id = self.next_request_id;
        self.next_request_id += 1;
        let input = self.compose.build_input();

        logger::log(&format!(
            "Sending generation request {} (class {}, module {})",
            request_id, input.grade, input.global_module
        ));

        if self
            .request_tx
            .send(GenerationRequest::Generate { request_id, input })
            .is_err()
        {
            logger::log_error("Generation worker is not running");
            self.banner = Some(Banner::Error(
                crate::error::GENERATION_FAILED_MESSAGE.to_string(),
            ));
            return;
        }

        self.banner = None;
        self.pending_request = Some(request_id);
        self.generation_started = Some(Instant::now());
        self.state = AppState::Generating;
    }

    fn handle_generating_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc {
            if let Some(id) = self.pending_request.take() {
                logger::log(&format!("Request {} abandoned", id));
            }
            self.generation_started = None;
            self.banner = Some(Banner::Info("Generation cancelled.".to_string()));
            self.state = AppState::Compose;
        }
    }

    pub fn handle_generation_event(&mut self, event: GenerationEvent) {
        if self.pending_request != Some(event.request_id()) {
            logger::log(&format!(
                "Discarding result of abandoned request {}",
                event.request_id()
            ));
            return;
        }
        self.pending_request = None;
        self.generation_started = None;

        match event {
            GenerationEvent::Completed { input, output, .. } => {
                self.results = Some(ResultsView {
                    input,
                    output,
                    scroll: 0,
                    exported_to: None,
                });
                self.banner = Some(Banner::Info(
                    "AI Lesson Pack generated successfully!".to_string(),
                ));
                self.state = AppState::Results;
            }
            GenerationEvent::Failed {
                user_message,
                detail,
                ..
            } => {
                logger::log_error(&format!("Generation failed: {}", detail));
                self.banner = Some(Banner::Error(user_message));
                self.state = AppState::Compose;
            }
        }
    }

    fn handle_results_key(&mut self, key: KeyEvent) {
        let Some(results) = self.results.as_mut() else {
            self.state = AppState::Compose;
            return;
        };

        match key.code {
            KeyCode::Up => results.scroll_by(-1),
            KeyCode::Down => results.scroll_by(1),
            KeyCode::PageUp => results.scroll_by(-10),
            KeyCode::PageDown => results.scroll_by(10),
            KeyCode::Char('e') => {
                match export_markdown(&self.config.export_dir, &results.input, &results.output) {
                    Ok(path) => {
                        self.banner = Some(Banner::Info(format!("Saved {}", path.display())));
                        results.exported_to = Some(path);
                    }
                    Err(e) => {
                        logger::log_error(&format!("Export failed: {}", e));
                        self.banner = Some(Banner::Error(format!("Export failed: {}", e)));
                    }
                }
            }
            KeyCode::Char('r') => self.start_generation(),
            KeyCode::Char('b') | KeyCode::Esc => {
                self.banner = None;
                self.state = AppState::Compose;
            }
            KeyCode::Char('m') => {
                self.banner = None;
                self.state = AppState::Dashboard;
            }
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }
}

use crossbeam_channel::unbounded;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use lesson_pack::{
    App, AppConfig, ModelConfig, OpenRouterClient, load_material_blocking, logger,
    models::{GenerationEvent, GenerationRequest},
    spawn_generation_worker, ui,
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::path::PathBuf;
use std::time::Duration;

const TICK: Duration = Duration::from_millis(100);

fn main() -> io::Result<()> {
    logger::init(logger::DEFAULT_LOG_FILE);

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(2);
        }
    };
    logger::log(&format!(
        "Starting lesson-pack with model {} (timeout {}s)",
        config.model,
        config.timeout.as_secs()
    ));

    let (request_tx, request_rx) = unbounded::<GenerationRequest>();
    let (event_tx, event_rx) = unbounded::<GenerationEvent>();

    let model_config = ModelConfig::from(&config);
    let worker = spawn_generation_worker(
        move || OpenRouterClient::new(model_config),
        config.timeout,
        event_tx,
        request_rx,
    )?;

    let mut app = App::new(config, request_tx);

    if let Some(arg) = std::env::args().nth(1) {
        let path = PathBuf::from(&arg);
        match load_material_blocking(&path) {
            Ok(material) => app.open_material(material, format!("File: {}", path.display())),
            Err(e) => {
                eprintln!("Failed to process file: {}", e);
                logger::log_error(&format!("Intake failed: {}", e));
                std::process::exit(1);
            }
        }
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app, &event_rx);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    drop(app);
    if worker.shutdown().is_err() {
        logger::log_error("Generation worker panicked");
    }

    result
}

fn run<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    event_rx: &crossbeam_channel::Receiver<GenerationEvent>,
) -> io::Result<()> {
    while !app.should_quit {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(TICK)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }

        while let Ok(event) = event_rx.try_recv() {
            app.handle_generation_event(event);
        }
    }
    Ok(())
}

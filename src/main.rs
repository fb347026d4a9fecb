use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Terminal,
};

use promptsmith::config::AppConfig;
use promptsmith::core::{
    builtin, share_or_copy, CategoryChoice, FileBackend, LogClipboard, PromptEntry,
    PromptGenerator, SelectionRequest, SelectionResult, SharePayload, ShareOutcome,
};

/// How long the transient "Copied!" indicator stays visible.
const COPIED_INDICATOR: Duration = Duration::from_secs(2);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize config and logging
    let config = AppConfig::load();
    let _log_guard = promptsmith::core::logging::init(&config.data_dir().join("logs"));
    log::info!("promptsmith v{} starting", promptsmith::VERSION);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let result = run_app(&mut terminal, config);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    Ok(())
}

struct App {
    config: AppConfig,
    generator: PromptGenerator,
    clipboard: LogClipboard,
    last: Option<SelectionResult>,
    /// Index into the category cycle: 0 = any, then catalog order.
    category_idx: usize,
    status: String,
    copied_until: Option<Instant>,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let backend = Arc::new(FileBackend::new(config.data_dir()));
        let generator = PromptGenerator::new(
            config.generator.default_slug.clone(),
            builtin::writing_prompts(),
            backend,
        )
        .with_templates(builtin::villain_templates())
        .with_separator(config.generator.batch_separator.clone());

        Self {
            config,
            generator,
            clipboard: LogClipboard,
            last: None,
            category_idx: 0,
            status: String::from("Press g to generate a prompt"),
            copied_until: None,
        }
    }

    fn category_choice(&self) -> CategoryChoice {
        if self.category_idx == 0 {
            CategoryChoice::Any
        } else {
            let key = self
                .generator
                .catalog()
                .category_keys()
                .nth(self.category_idx - 1)
                .unwrap_or("any");
            CategoryChoice::parse(key)
        }
    }

    fn category_label(&self) -> String {
        match self.category_choice() {
            CategoryChoice::Any => "any".to_string(),
            CategoryChoice::Named(key) => key,
        }
    }

    fn cycle_category(&mut self) {
        let cycle_len = self.generator.catalog().categories.len() + 1;
        self.category_idx = (self.category_idx + 1) % cycle_len;
        self.status = format!("Category: {}", self.category_label());
    }

    fn generate(&mut self, count: u32) {
        let request = SelectionRequest {
            category: self.category_choice(),
            count,
        };
        match self.generator.generate(&request, &mut rand::thread_rng()) {
            Ok(result) => {
                self.status = format!("Generated from '{}'", result.category);
                self.last = Some(result);
            }
            Err(e) => {
                log::warn!("Generate failed: {e}");
                self.status = format!("Error: {e}");
            }
        }
    }

    fn render_villain(&mut self) {
        match self.generator.render_template(&mut rand::thread_rng()) {
            Ok(result) => {
                self.status = String::from("Generated villain concept");
                self.last = Some(result);
            }
            Err(e) => {
                log::warn!("Template render failed: {e}");
                self.status = format!("Error: {e}");
            }
        }
    }

    fn save_last(&mut self) {
        if let Some(result) = &self.last {
            self.generator.save(PromptEntry::from(result.clone()));
            self.status = format!("Saved ({} total)", self.generator.saved().len());
        }
    }

    fn favorite_last(&mut self) {
        if let Some(result) = &self.last {
            let entry = PromptEntry::from(result.clone());
            let now_favorite = self.generator.toggle_favorite(&entry);
            self.status = if now_favorite {
                String::from("Added to favorites")
            } else {
                String::from("Removed from favorites")
            };
        }
    }

    fn copy_last(&mut self) {
        if let Some(result) = &self.last {
            let payload = SharePayload::new(
                self.generator.slug().to_string(),
                result.text.clone(),
                format!("promptsmith://{}", self.generator.slug()),
            );
            // No native share sheet in the terminal; this always takes the
            // clipboard fallback path.
            match share_or_copy(None, &self.clipboard, &payload) {
                ShareOutcome::Shared | ShareOutcome::Copied => {
                    self.status = String::from("Copied!");
                    self.copied_until = Some(Instant::now() + COPIED_INDICATOR);
                }
                ShareOutcome::Failed => {
                    self.status = String::from("Copy failed (see log)");
                }
            }
        }
    }

    fn export_saved(&mut self) {
        match self
            .generator
            .export_saved()
            .and_then(|export| Ok(export.write_to(self.config.data_dir().join("exports"))?))
        {
            Ok(path) => self.status = format!("Exported to {}", path.display()),
            Err(e) => {
                log::warn!("Export failed: {e}");
                self.status = format!("Error: {e}");
            }
        }
    }

    fn clear_history(&mut self) {
        self.generator.clear_history();
        self.status = String::from("History cleared");
    }

    /// Drop the transient "Copied!" indicator after its timeout.
    fn tick(&mut self) {
        if let Some(until) = self.copied_until {
            if Instant::now() >= until {
                self.copied_until = None;
                if self.status == "Copied!" {
                    self.status = String::new();
                }
            }
        }
    }
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: AppConfig,
) -> io::Result<()> {
    let batch_count = config.generator.batch_count.max(1);
    let mut app = App::new(config);

    loop {
        app.tick();

        terminal.draw(|frame| {
            let area = frame.area();

            let chunks = Layout::vertical([
                Constraint::Length(3),
                Constraint::Min(1),
                Constraint::Length(3),
            ])
            .split(area);

            // Header
            let header = Paragraph::new(Line::from(vec![
                Span::styled(
                    " Promptsmith ",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(
                    "- {} [{}]   history {}  saved {}  favorites {}",
                    app.generator.slug(),
                    app.category_label(),
                    app.generator.history().len(),
                    app.generator.saved().len(),
                    app.generator.favorites().len(),
                )),
            ]))
            .block(Block::default().borders(Borders::ALL));
            frame.render_widget(header, chunks[0]);

            // Main content: the current prompt
            let mut lines = vec![Line::raw("")];
            match &app.last {
                Some(result) => {
                    for text_line in result.text.lines() {
                        lines.push(Line::raw(format!("  {text_line}")));
                    }
                    lines.push(Line::raw(""));
                    lines.push(Line::from(Span::styled(
                        format!(
                            "  {} · {}",
                            result.category,
                            result.created_at.format("%Y-%m-%d %H:%M:%S")
                        ),
                        Style::default().fg(Color::DarkGray),
                    )));
                }
                None => {
                    lines.push(Line::raw("  No prompt yet."));
                    lines.push(Line::raw(""));
                    lines.push(Line::raw("  g generates one prompt from the current category,"));
                    lines.push(Line::raw("  b generates a batch, v renders a villain concept."));
                }
            }
            let content = Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .block(Block::default().title(" Prompt ").borders(Borders::ALL));
            frame.render_widget(content, chunks[1]);

            // Footer
            let footer = Paragraph::new(Line::from(vec![
                Span::styled(" g ", key_style()),
                Span::raw("Generate  "),
                Span::styled(" b ", key_style()),
                Span::raw("Batch  "),
                Span::styled(" v ", key_style()),
                Span::raw("Villain  "),
                Span::styled(" Tab ", key_style()),
                Span::raw("Category  "),
                Span::styled(" s ", key_style()),
                Span::raw("Save  "),
                Span::styled(" f ", key_style()),
                Span::raw("Favorite  "),
                Span::styled(" c ", key_style()),
                Span::raw("Copy  "),
                Span::styled(" e ", key_style()),
                Span::raw("Export  "),
                Span::styled(" x ", key_style()),
                Span::raw("Clear  "),
                Span::styled(" q ", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
                Span::raw(format!("Quit   {}", app.status)),
            ]))
            .block(Block::default().borders(Borders::ALL));
            frame.render_widget(footer, chunks[2]);
        })?;

        // Handle input
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') => return Ok(()),
                        KeyCode::Char('g') => app.generate(1),
                        KeyCode::Char('b') => app.generate(batch_count),
                        KeyCode::Char('v') => app.render_villain(),
                        KeyCode::Tab => app.cycle_category(),
                        KeyCode::Char('s') => app.save_last(),
                        KeyCode::Char('f') => app.favorite_last(),
                        KeyCode::Char('c') => app.copy_last(),
                        KeyCode::Char('e') => app.export_saved(),
                        KeyCode::Char('x') => app.clear_history(),
                        _ => {}
                    }
                }
            }
        }
    }
}

fn key_style() -> Style {
    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
}

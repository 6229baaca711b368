use std::path::PathBuf;

use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::debug;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use pdfreport::{Error, extract, format_report, has_pdf_extension, save_report};

/// Sentinel used for absent information fields in this variant.
const SENTINEL: &str = "Unknown";

/// Which pane receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    PathInput,
    Results,
}

/// Modal popup rendered over the main layout; any key dismisses it.
#[derive(Debug, Clone)]
pub struct Modal {
    pub title: String,
    pub message: String,
}

/// Central application state. Three observable states: Idle (no file
/// chosen), FileSelected (path committed, no results) and ResultsShown
/// (success or error text in the results pane).
pub struct AppState {
    pub running: bool,
    pub focus: Focus,
    /// Path being typed in the entry field.
    pub path_input: String,
    /// Committed file selection; `None` is the Idle state.
    pub selected_file: Option<PathBuf>,
    /// Results buffer, replaced wholesale on each extraction.
    pub results: String,
    pub results_scroll: u16,
    pub status: String,
    pub modal: Option<Modal>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            running: true,
            focus: Focus::PathInput,
            path_input: String::new(),
            selected_file: None,
            results: String::new(),
            results_scroll: 0,
            status: "Ready to extract PDF metadata".to_string(),
            modal: None,
        }
    }

    // ── Input handling ──────────────────────────────────────────────────

    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.modal.take().is_some() {
            return;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.running = false;
            return;
        }
        match key.code {
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Focus::PathInput => Focus::Results,
                    Focus::Results => Focus::PathInput,
                };
            }
            KeyCode::F(2) => self.extract_metadata(),
            _ => match self.focus {
                Focus::PathInput => self.handle_path_key(key),
                Focus::Results => self.handle_results_key(key),
            },
        }
    }

    fn handle_path_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.select_file(),
            KeyCode::Backspace => {
                self.path_input.pop();
            }
            KeyCode::Char(c) => self.path_input.push(c),
            KeyCode::Esc => self.running = false,
            _ => {}
        }
    }

    fn handle_results_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.results_scroll = self.results_scroll.saturating_sub(1),
            KeyCode::Down => self.results_scroll = self.results_scroll.saturating_add(1),
            KeyCode::PageUp => self.results_scroll = self.results_scroll.saturating_sub(10),
            KeyCode::PageDown => self.results_scroll = self.results_scroll.saturating_add(10),
            KeyCode::Home => self.results_scroll = 0,
            KeyCode::Esc | KeyCode::Char('q') => self.running = false,
            _ => {}
        }
    }

    // ── State transitions ───────────────────────────────────────────────

    /// Commits the typed path. Re-selection clears any prior results.
    fn select_file(&mut self) {
        let path = self.path_input.trim();
        if path.is_empty() {
            return;
        }
        let path = PathBuf::from(path);
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.status = format!("File selected: {name}");
        self.selected_file = Some(path);
        self.results.clear();
        self.results_scroll = 0;
    }

    /// Runs the extraction pipeline on the committed selection: extension
    /// check, extract, render, save. Success and failure both land in the
    /// results pane; only a save failure is reported as a warning.
    fn extract_metadata(&mut self) {
        let Some(path) = self.selected_file.clone() else {
            self.modal = Some(Modal {
                title: "No File".to_string(),
                message: "Please select a PDF file.".to_string(),
            });
            return;
        };

        if !has_pdf_extension(&path) {
            self.show_error(&Error::InvalidExtension(path));
            return;
        }

        debug!("extracting {}", path.display());
        match extract(&path, SENTINEL) {
            Ok(report) => {
                let text = format_report(&report, Local::now().naive_local());
                self.results = text.clone();
                self.results_scroll = 0;
                self.status = "Metadata extracted successfully".to_string();
                if let Err(err) = save_report(&report, &text) {
                    self.modal = Some(Modal {
                        title: "Save Error".to_string(),
                        message: format!("Could not save report: {err}"),
                    });
                }
            }
            Err(err) => self.show_error(&err),
        }
    }

    fn show_error(&mut self, err: &Error) {
        self.results = format!("Error: {err}\nPlease check the PDF file and try again.");
        self.results_scroll = 0;
        self.status = "Error during extraction".to_string();
        self.modal = Some(Modal {
            title: "Error".to_string(),
            message: err.to_string(),
        });
    }

    // ── Rendering ───────────────────────────────────────────────────────

    pub fn render(&self, frame: &mut Frame) {
        let chunks = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

        let header = Paragraph::new(Line::styled(
            "PDF Metadata Extractor",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(header, chunks[0]);

        let input = Paragraph::new(self.path_input.as_str()).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Selected File (Enter to select, F2 to extract)")
                .border_style(self.focus_style(Focus::PathInput)),
        );
        frame.render_widget(input, chunks[1]);
        if self.focus == Focus::PathInput && self.modal.is_none() {
            let offset = cursor_offset(&self.path_input, chunks[1].width.saturating_sub(2));
            frame.set_cursor_position(Position::new(
                chunks[1].x + 1 + offset,
                chunks[1].y + 1,
            ));
        }

        let results = Paragraph::new(self.results.as_str())
            .wrap(Wrap { trim: false })
            .scroll((self.results_scroll, 0))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Metadata Results")
                    .border_style(self.focus_style(Focus::Results)),
            );
        frame.render_widget(results, chunks[2]);

        let status = Paragraph::new(self.status.as_str()).style(Style::default().fg(Color::Gray));
        frame.render_widget(status, chunks[3]);

        if let Some(modal) = &self.modal {
            self.render_modal(frame, modal);
        }
    }

    fn focus_style(&self, pane: Focus) -> Style {
        if self.focus == pane {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        }
    }

    fn render_modal(&self, frame: &mut Frame, modal: &Modal) {
        let area = centered_rect(50, 20, frame.area());
        frame.render_widget(Clear, area);
        let popup = Paragraph::new(modal.message.as_str())
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(modal.title.as_str())
                    .border_style(Style::default().fg(Color::Red)),
            );
        frame.render_widget(popup, area);
    }
}

/// Cursor column for the entry field: one cell per typed character,
/// clamped to the box interior so long paths don't walk past the border.
fn cursor_offset(input: &str, inner_width: u16) -> u16 {
    let chars = input.chars().count().min(u16::MAX as usize) as u16;
    chars.min(inner_width)
}

/// Rectangle of at most `width` x `height` cells centered in `area`.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

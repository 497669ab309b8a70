use super::event::AppEvent;
use super::input_buffer::InputBuffer;
use super::mode::AppMode;
use super::render_state::{OutputLine, RenderState, Status};
use crate::cleaning::{clean_text_with, CleanReport};
use crate::config::Config;
use crate::input::{ClipboardBackend, InputError};
use std::time::Instant;
use tracing::{debug, info, warn};

pub struct App {
    mode: AppMode,
    input: InputBuffer,
    report: CleanReport,
    config: Config,
    clipboard: Box<dyn ClipboardBackend>,
    copied_at: Option<Instant>,
    status: Option<Status>,
    /// First cleaned line shown in the output panel
    output_scroll: usize,
}

/// Lines moved per PageUp/PageDown in the output panel.
const OUTPUT_SCROLL_STEP: usize = 5;

impl App {
    pub fn new(config: Config, clipboard: Box<dyn ClipboardBackend>) -> Self {
        let mut app = Self {
            mode: AppMode::Editing,
            input: InputBuffer::new(),
            report: CleanReport::default(),
            config,
            clipboard,
            copied_at: None,
            status: None,
            output_scroll: 0,
        };
        app.recompute();
        app
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn input(&self) -> &str {
        self.input.text()
    }

    pub fn report(&self) -> &CleanReport {
        &self.report
    }

    pub fn is_copied(&self) -> bool {
        self.copied_at.is_some()
    }

    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    /// Rebuild the report from the current input. Results are never patched.
    fn recompute(&mut self) {
        self.report = clean_text_with(self.input.text(), self.config.cleaning.options());
        self.output_scroll = self.output_scroll.min(self.max_output_scroll());
    }

    fn max_output_scroll(&self) -> usize {
        self.report.tokens().count().saturating_sub(1)
    }

    pub fn output_scroll(&self) -> usize {
        self.output_scroll
    }

    fn scroll_output(&mut self, down: bool) {
        self.output_scroll = if down {
            (self.output_scroll + OUTPUT_SCROLL_STEP).min(self.max_output_scroll())
        } else {
            self.output_scroll.saturating_sub(OUTPUT_SCROLL_STEP)
        };
    }

    fn edited(&mut self) {
        self.status = None;
        self.recompute();
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        if self.mode == AppMode::Help {
            match event {
                AppEvent::ToggleHelp | AppEvent::Cancel => self.mode = AppMode::Editing,
                AppEvent::Quit => self.mode = AppMode::Quit,
                _ => {}
            }
            return;
        }

        match event {
            AppEvent::Insert(c) => {
                self.input.insert_char(c);
                self.edited();
            }
            AppEvent::Newline => {
                self.input.insert_char('\n');
                self.edited();
            }
            AppEvent::Paste(text) => {
                self.input.insert_pasted(&text);
                self.edited();
            }
            AppEvent::Backspace => {
                if self.input.backspace() {
                    self.edited();
                }
            }
            AppEvent::Delete => {
                if self.input.delete() {
                    self.edited();
                }
            }
            AppEvent::CursorLeft => self.input.move_left(),
            AppEvent::CursorRight => self.input.move_right(),
            AppEvent::LineStart => self.input.move_line_start(),
            AppEvent::LineEnd => self.input.move_line_end(),
            AppEvent::ScrollOutputUp => self.scroll_output(false),
            AppEvent::ScrollOutputDown => self.scroll_output(true),
            AppEvent::PasteClipboard => self.paste_clipboard(),
            AppEvent::CopyResult => self.copy_result(Instant::now()),
            AppEvent::Clear => self.clear(),
            AppEvent::ToggleValidation => self.toggle_validation(),
            AppEvent::ToggleHelp => self.mode = AppMode::Help,
            AppEvent::Cancel | AppEvent::Quit => self.mode = AppMode::Quit,
            AppEvent::None => {}
        }
    }

    fn paste_clipboard(&mut self) {
        match self.clipboard.get_text() {
            Ok(text) => {
                debug!(bytes = text.len(), "pasting clipboard text");
                self.input.insert_pasted(&text);
                self.edited();
            }
            Err(InputError::EmptyClipboard) => {
                self.status = Some(Status::Info(InputError::EmptyClipboard.to_string()));
            }
            Err(e) => {
                warn!(error = %e, "clipboard read failed");
                self.status = Some(Status::Error(e.to_string()));
            }
        }
    }

    /// Put the cleaned text on the clipboard. Does nothing without output.
    pub fn copy_result(&mut self, now: Instant) {
        if !self.report.has_output() {
            return;
        }

        let text = self.report.cleaned_output();
        match self.clipboard.set_text(&text) {
            Ok(()) => {
                info!(lines = self.report.tokens().count(), "copied cleaned result");
                self.copied_at = Some(now);
                self.status = None;
            }
            Err(e) => {
                warn!(error = %e, "clipboard write failed");
                self.copied_at = None;
                self.status = Some(Status::Error(e.to_string()));
            }
        }
    }

    pub fn clear(&mut self) {
        if self.input.is_empty() {
            return;
        }
        self.input.clear();
        self.edited();
    }

    pub fn toggle_validation(&mut self) {
        let cleaning = &mut self.config.cleaning;
        cleaning.validate = !cleaning.validate;
        let label = if cleaning.validate { "on" } else { "off" };
        self.recompute();
        self.status = Some(Status::Info(format!("Validation {}", label)));
    }

    /// Expire the "Copied!" state once the feedback window has passed.
    pub fn tick(&mut self, now: Instant) {
        if let Some(copied_at) = self.copied_at {
            if now.saturating_duration_since(copied_at) >= self.config.clipboard.copied_feedback() {
                self.copied_at = None;
            }
        }
    }

    pub fn get_render_state(&self) -> RenderState {
        let output = self
            .report
            .lines()
            .iter()
            .filter(|l| !l.is_blank())
            .map(|l| OutputLine {
                token: l.cleaned_token.clone(),
                is_valid: l.is_valid(),
            })
            .collect();

        RenderState {
            mode: self.mode,
            input: self.input.text().to_string(),
            cursor: self.input.cursor_position(),
            output,
            output_scroll: u16::try_from(self.output_scroll).unwrap_or(u16::MAX),
            warning: self.report.warning(),
            invalid_lines: self
                .report
                .invalid_lines()
                .map(|l| l.to_string())
                .collect(),
            copied: self.is_copied(),
            can_copy: self.report.has_output(),
            can_clear: !self.input.is_empty(),
            validation: self.config.cleaning.validate,
            status: self.status.clone(),
        }
    }
}

//! Interactive page.
//!
//! ## Design:
//! - `App` owns the controller plus purely visual state (last layout, click tracking)
//! - Every frame is built from a fresh `ScreenViewModel`
//! - Keys and clicks are mapped to an [`Action`], which hits exactly one controller handler
//! - The loop polls with a short timeout so timers and animations advance without input

mod input;
mod layout;
mod palette;
mod view_model;
mod views;

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEvent,
        MouseEventKind,
    },
    cursor, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ducklett_core::Clock;
use ducklett_runtime::{Controller, Field, Mode, Outcome};
use ducklett_store::KeyValueStore;
use ducklett_types::copy;
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Paragraph},
};
use tracing::debug;

pub use input::Action;
use input::{ClickTracker, map_key};
use layout::{Hit, ScreenLayout};
use palette::Palette;
use view_model::build_screen_view_model;
use views::{
    BubbleLayer, CharacterView, ConfirmationView, DecisionView, FormView, HeaderView,
    MessageView, ReactionLayer, StatusBarView,
};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct App<S: KeyValueStore> {
    controller: Controller<S>,
    clock: Box<dyn Clock>,
    clicks: ClickTracker,
    /// Regions from the last draw; clicks are resolved against these
    layout: ScreenLayout,
    should_quit: bool,
}

impl<S: KeyValueStore> App<S> {
    pub fn new(controller: Controller<S>, clock: Box<dyn Clock>) -> Self {
        Self {
            controller,
            clock,
            clicks: ClickTracker::default(),
            layout: ScreenLayout::default(),
            should_quit: false,
        }
    }

    pub fn controller(&self) -> &Controller<S> {
        &self.controller
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Translate a terminal event; `None` when it maps to no action
    pub fn handle_event(&mut self, event: Event, now: Instant) -> Option<Outcome> {
        let action = match event {
            Event::Key(key) => map_key(key, self.controller.mode() == Mode::Scheduling),
            Event::Mouse(mouse) => self.map_click(mouse, now),
            _ => None,
        }?;
        Some(self.apply(action, now))
    }

    fn map_click(&mut self, mouse: MouseEvent, now: Instant) -> Option<Action> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return None;
        }

        match self.layout.hit(mouse.column, mouse.row)? {
            Hit::ThemeToggle => Some(Action::ToggleTheme),
            Hit::Yes => Some(Action::Yes),
            Hit::No => Some(Action::No),
            Hit::DateField => Some(Action::Focus(Field::Date)),
            Hit::TimeField => Some(Action::Focus(Field::Time)),
            Hit::Confirm => Some(Action::Submit),
            Hit::Reset => Some(Action::Reset),
            Hit::Character => self.clicks.register(now).then_some(Action::Poke),
        }
    }

    pub fn apply(&mut self, action: Action, now: Instant) -> Outcome {
        debug!(?action, mode = self.controller.mode().as_str(), "action");
        match action {
            Action::Yes => self.controller.on_yes(now),
            Action::No => self.controller.on_no(now),
            Action::Submit => {
                let wall_now = self.clock.now();
                self.controller.on_submit(&wall_now, now)
            }
            Action::Reset => self.controller.on_reset(now),
            Action::ToggleTheme => self.controller.on_toggle_theme(),
            Action::Poke => self.controller.on_poke(now),
            Action::Focus(field) => self.controller.focus(field),
            Action::FocusNext => self.controller.focus_next(),
            Action::Input(c) => self.controller.input_char(c),
            Action::Backspace => self.controller.backspace(),
            Action::Quit => {
                self.should_quit = true;
                Outcome::Applied
            }
        }
    }

    /// How long the loop may wait for input without missing a timer
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.controller
            .timers()
            .next_deadline()
            .map_or(POLL_INTERVAL, |deadline| {
                deadline.saturating_duration_since(now).min(POLL_INTERVAL)
            })
    }

    pub fn tick(&mut self, now: Instant) {
        for fired in self.controller.tick(now) {
            debug!(timer = fired.as_str(), "timer fired");
        }
    }

    pub fn draw(&mut self, frame: &mut Frame, now: Instant) {
        let screen = build_screen_view_model(&self.controller, now);
        let palette = Palette::for_theme(screen.theme);
        let layout = ScreenLayout::compute(frame.area(), &screen);

        frame.render_widget(
            Block::new().style(Style::default().bg(palette.background).fg(palette.text)),
            layout.full,
        );
        frame.render_widget(BubbleLayer::new(&screen.bubbles, palette), layout.full);

        frame.render_widget(HeaderView::new(screen.theme, palette), layout.header);
        frame.render_widget(CharacterView::new(screen.sad_tint, palette), layout.character);
        frame.render_widget(MessageView::new(screen.message, palette), layout.message);

        let indicator = screen
            .easter_egg
            .map(|text| (text, palette.gold))
            .or(screen
                .sad_indicator
                .then_some((copy::SAD_INDICATOR, palette.sad_duck)));
        if let Some((text, color)) = indicator {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    text,
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ))
                .centered(),
                layout.indicator,
            );
        }

        frame.render_widget(
            ReactionLayer::new(&screen.reactions, palette),
            layout.reactions,
        );

        if let (Some(decision), Some(yes), Some(no)) = (&screen.decision, layout.yes, layout.no) {
            frame.render_widget(DecisionView::new(decision, yes, no, palette), layout.panel);
        }
        if let Some(form) = &screen.form {
            frame.render_widget(FormView::new(form, &layout, palette), layout.panel);
        }
        if let Some(text) = &screen.confirmation {
            frame.render_widget(
                ConfirmationView::new(text, screen.notice, &layout, palette),
                layout.panel,
            );
        }

        frame.render_widget(StatusBarView::new(screen.mode, palette), layout.status);

        self.layout = layout;
    }
}

/// Runs `restore` when dropped, so every exit path undoes terminal setup
struct RestoreOnDrop<F: FnMut()> {
    restore: F,
}

impl<F: FnMut()> RestoreOnDrop<F> {
    fn new(restore: F) -> Self {
        Self { restore }
    }
}

impl<F: FnMut()> Drop for RestoreOnDrop<F> {
    fn drop(&mut self) {
        (self.restore)();
    }
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(
        io::stdout(),
        DisableMouseCapture,
        LeaveAlternateScreen,
        cursor::Show
    );
}

/// Take over the terminal until the visitor quits
pub fn run<S: KeyValueStore>(mut app: App<S>) -> Result<()> {
    enable_raw_mode()?;
    let _restore = RestoreOnDrop::new(restore_terminal);

    execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    // Restore the terminal if we are interrupted from outside
    ctrlc::set_handler(|| {
        restore_terminal();
        std::process::exit(0);
    })?;

    event_loop(&mut terminal, &mut app)
}

fn event_loop<S: KeyValueStore>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App<S>,
) -> Result<()> {
    loop {
        terminal.draw(|frame| app.draw(frame, Instant::now()))?;

        if event::poll(app.poll_timeout(Instant::now()))? {
            let event = event::read()?;
            app.handle_event(event, Instant::now());
        }

        app.tick(Instant::now());

        if app.should_quit() {
            return Ok(());
        }
    }
}

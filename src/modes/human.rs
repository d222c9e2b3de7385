use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stdout, stdout};
use std::thread;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::game::{GameConfig, GameEngine, GameState, ScreenState};
use crate::input::{EventSource, InputHandler, TerminalEvents};
use crate::render::{BitmapFont, Canvas, Renderer, TerminalCanvas};

type TerminalBackend = CrosstermBackend<Stdout>;

/// Play snake with the keyboard in the current terminal
pub struct HumanMode {
    engine: GameEngine,
    state: GameState,
    renderer: Renderer,
    input_handler: InputHandler,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Self {
        let renderer = Renderer::new(config.screen_size());
        let mut engine = GameEngine::new(config);
        let state = engine.initial_state();

        Self {
            engine,
            state,
            renderer,
            input_handler: InputHandler::new(),
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let font_path = self.engine.config().font_path.clone();
        let font = BitmapFont::load(&font_path)?;
        info!(path = %font_path.display(), height = font.height(), "Loaded font");

        let terminal = setup_terminal()?;
        let mut canvas = TerminalCanvas::new(terminal, font, self.engine.config().screen_size());
        let mut events = TerminalEvents::new();

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut canvas, &mut events);
        let cleanup = cleanup_terminal(canvas.terminal_mut());

        finish(result, cleanup)
    }

    fn run_game_loop(
        &mut self,
        canvas: &mut impl Canvas,
        events: &mut impl EventSource,
    ) -> Result<()> {
        let frame_delay = Duration::from_millis(self.engine.config().frame_delay_ms);

        while self.state.running {
            self.run_frame(canvas, events)?;
            thread::sleep(frame_delay);
        }

        info!(score = self.state.snake.score, "Leaving game loop");
        Ok(())
    }

    /// One pass of the loop: draw, tick, present, then react to input
    fn run_frame(
        &mut self,
        canvas: &mut impl Canvas,
        events: &mut impl EventSource,
    ) -> Result<()> {
        self.draw_and_update(canvas)?;

        for event in events.poll_events()? {
            if let Some(action) = self.input_handler.handle_event(&event) {
                debug!(?action, "Applying input");
                self.engine.apply(&mut self.state, action);
            }
        }

        self.engine.check_liveness(&mut self.state);
        Ok(())
    }

    fn draw_and_update(&mut self, canvas: &mut impl Canvas) -> Result<()> {
        self.renderer.clear(canvas);

        match self.state.screen {
            ScreenState::Menu => self.renderer.draw_menu(canvas),
            ScreenState::Play => {
                // The frame shows where things were before this tick
                self.renderer.draw_snake(canvas, &self.state.snake);
                self.renderer.draw_food(canvas, &self.state.food);

                let info = self.engine.step(&mut self.state);
                if let Some(collision) = info.collision_type {
                    debug!(?collision, "Snake crashed");
                }

                self.renderer.draw_score(canvas, self.state.snake.score);
            }
            ScreenState::GameOver => self
                .renderer
                .draw_game_over(canvas, self.state.snake.score),
        }

        canvas.present()
    }
}

fn setup_terminal() -> Result<Terminal<TerminalBackend>> {
    enable_raw_mode().context("Failed to enable raw mode")?;

    let terminal = enter_terminal();
    if terminal.is_err() {
        // Undo the steps that got through before the failure
        let mut stdout = stdout();
        let _ = execute!(stdout, LeaveAlternateScreen, Show);
        let _ = disable_raw_mode();
    }
    terminal
}

fn enter_terminal() -> Result<Terminal<TerminalBackend>> {
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
    terminal.hide_cursor().context("Failed to hide cursor")?;
    terminal.clear().context("Failed to clear terminal")?;
    Ok(terminal)
}

/// Runs every restore step, even after one fails
fn cleanup_terminal(terminal: &mut Terminal<TerminalBackend>) -> Result<()> {
    first_error([
        disable_raw_mode().context("Failed to disable raw mode"),
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen"),
        terminal.show_cursor().context("Failed to show cursor"),
    ])
}

fn first_error<const N: usize>(steps: [Result<()>; N]) -> Result<()> {
    steps.into_iter().collect()
}

/// The loop's error wins over a cleanup error, which is only logged then
fn finish(result: Result<()>, cleanup: Result<()>) -> Result<()> {
    if let (Err(_), Err(err)) = (&result, &cleanup) {
        warn!(error = %format!("{err:#}"), "Terminal cleanup failed");
    }
    result.and(cleanup)
}

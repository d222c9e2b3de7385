use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::{debug, info};

use super::{
    action::Action,
    config::GameConfig,
    food::Food,
    snake::{CollisionType, Snake},
    state::{GameState, ScreenState},
};

/// Information about a tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepInfo {
    /// Whether the snake ate food this tick
    pub ate_food: bool,
    /// Type of collision if one occurred
    pub collision_type: Option<CollisionType>,
}

/// The game engine that handles all game logic.
///
/// Generic over its random source so tests can place food
/// deterministically.
pub struct GameEngine<R = StdRng> {
    config: GameConfig,
    rng: R,
}

impl GameEngine<StdRng> {
    /// Create a new game engine seeded from system entropy
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }
}

impl<R: Rng> GameEngine<R> {
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        Self { config, rng }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Build the state the game starts in: menu screen, fresh snake, food
    /// already placed
    pub fn initial_state(&mut self) -> GameState {
        let snake = Snake::new(
            self.config.spawn_point(),
            self.config.segment_size,
            self.config.snake_speed,
        );
        let mut food = Food::new(self.config.food_size);
        food.respawn(&mut self.rng, self.config.screen_size());

        GameState::new(snake, food)
    }

    /// Reset snake and food for a new game. The screen is left alone.
    pub fn reset(&mut self, state: &mut GameState) {
        state.snake.reset(self.config.spawn_point());
        state.food.respawn(&mut self.rng, self.config.screen_size());
    }

    /// Advance the simulation by one tick
    pub fn step(&mut self, state: &mut GameState) -> StepInfo {
        if !state.snake.is_alive() {
            return StepInfo::default();
        }

        let collision_type = state.snake.advance(self.config.screen_size());

        let ate_food = state.snake.is_touching(&state.food);
        if ate_food {
            state.snake.grow();
            state.food.respawn(&mut self.rng, self.config.screen_size());
            state.snake.score += 1;
            debug!(
                score = state.snake.score,
                length = state.snake.len(),
                "Snake ate food"
            );
        }

        StepInfo {
            ate_food,
            collision_type,
        }
    }

    /// Apply one player action to the game
    pub fn apply(&mut self, state: &mut GameState, action: Action) {
        match action {
            Action::Quit => {
                debug!("Quit requested");
                state.running = false;
            }
            Action::Confirm => {
                self.reset(state);
                let next = match state.screen {
                    ScreenState::Menu => ScreenState::Play,
                    ScreenState::Play | ScreenState::GameOver => ScreenState::Menu,
                };
                self.transition(state, next);
            }
            Action::Turn(direction) => {
                state.snake.turn(direction);
            }
        }
    }

    /// Move to the game-over screen once the snake has died
    pub fn check_liveness(&mut self, state: &mut GameState) {
        if state.is_playing() && !state.snake.is_alive() {
            info!(
                score = state.snake.score,
                length = state.snake.len(),
                "Game over"
            );
            self.transition(state, ScreenState::GameOver);
        }
    }

    fn transition(&self, state: &mut GameState, next: ScreenState) {
        debug!(from = ?state.screen, to = ?next, "Screen transition");
        state.screen = next;
    }
}

//! Match runner for playing games between engines

use pente_core::{Engine, GameStatus, PenteError, Player, Session};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::config::ArenaConfig;
use crate::elo::{GameResult, MatchResult};
use crate::results::PlayedGame;

/// Every game of one match plus the tally from engine1's side
#[derive(Debug, Clone)]
pub struct MatchOutcome {
    pub result: MatchResult,
    pub games: Vec<PlayedGame>,
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: ArenaConfig,
}

impl MatchRunner {
    pub fn new(config: ArenaConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// Run a match between two engines
    ///
    /// Results are from engine1's perspective. Fails only if an engine
    /// suggests an illegal move.
    pub fn run_match(
        &self,
        engine1: &mut dyn Engine,
        engine2: &mut dyn Engine,
    ) -> Result<MatchOutcome, PenteError> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut result = MatchResult::new();
        let mut games = Vec::with_capacity(self.config.num_games as usize);

        for game_num in 0..self.config.num_games {
            let engine1_first = !self.config.alternate_colors || game_num % 2 == 0;

            let game = if engine1_first {
                self.play_game(engine1, engine2, &mut rng)?
            } else {
                self.play_game(engine2, engine1, &mut rng)?
            };
            let game_result = if engine1_first {
                game.result_for_first()
            } else {
                game.result_for_first().flipped()
            };
            result.record(game_result);

            info!(
                game = game_num + 1,
                of = self.config.num_games,
                first = %game.first,
                second = %game.second,
                status = ?game.status,
                moves = game.record.moves.len(),
                wins = result.wins,
                losses = result.losses,
                draws = result.draws,
                "game finished"
            );
            games.push(game);
        }

        Ok(MatchOutcome { result, games })
    }

    /// Play a single game. `first` moves as Player One.
    pub fn play_game(
        &self,
        first: &mut dyn Engine,
        second: &mut dyn Engine,
        rng: &mut StdRng,
    ) -> Result<PlayedGame, PenteError> {
        let mut session = Session::new(self.config.board_size)?;
        first.new_game();
        second.new_game();

        self.play_opening(&mut session, rng)?;

        let max_moves = self.config.max_moves as usize;
        while !session.winner().is_over() && session.history().len() < max_moves {
            let engine: &mut dyn Engine = match session.to_move() {
                Player::One => &mut *first,
                Player::Two => &mut *second,
            };
            let result = engine.search(session.position());
            let Some(mv) = result.best_move else {
                break;
            };
            debug!(engine = engine.name(), %mv, score = result.score, nodes = result.nodes, "engine move");
            session.play(mv)?;
        }

        // Max moves reached counts as a draw
        let status = match session.winner() {
            GameStatus::Ongoing => GameStatus::Draw,
            decided => decided,
        };

        Ok(PlayedGame {
            first: first.name().to_string(),
            second: second.name().to_string(),
            status,
            record: session.to_record(),
            notation: session.move_log(),
        })
    }

    /// Random stones for variety, stopping early if one decides the game
    fn play_opening(&self, session: &mut Session, rng: &mut StdRng) -> Result<(), PenteError> {
        for _ in 0..self.config.opening_moves {
            if session.winner().is_over() {
                break;
            }
            let empties = session.board().empty_cells();
            match empties.choose(rng) {
                Some(&at) => {
                    session.play(at)?;
                }
                None => break,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;

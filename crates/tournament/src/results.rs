//! Tournament results storage and reporting

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::path::Path;

use pente_core::{GameRecord, GameStatus, PenteError, Player, Session};

use crate::config::ArenaConfig;
use crate::elo::{GameResult, MatchResult};
use crate::error::ResultsError;
use crate::match_runner::MatchOutcome;

/// One finished game: who played which side, how it ended and the moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayedGame {
    /// Engine playing Player One
    pub first: String,
    /// Engine playing Player Two
    pub second: String,
    /// Final status; a game stopped at the move cap is a draw
    pub status: GameStatus,
    pub record: GameRecord,
    /// The moves in relative-to-centre notation
    pub notation: Vec<String>,
}

impl PlayedGame {
    pub fn result_for_first(&self) -> GameResult {
        match self.status {
            GameStatus::Won(Player::One) => GameResult::Win,
            GameStatus::Won(Player::Two) => GameResult::Loss,
            GameStatus::Draw | GameStatus::Ongoing => GameResult::Draw,
        }
    }

    /// Rebuilds the final session by replaying the record through the rules.
    pub fn replay(&self) -> Result<Session, PenteError> {
        Session::from_record(&self.record)
    }

    pub fn summary(&self) -> String {
        let outcome = match self.status {
            GameStatus::Won(Player::One) => format!("{} wins", self.first),
            GameStatus::Won(Player::Two) => format!("{} wins", self.second),
            GameStatus::Draw | GameStatus::Ongoing => "draw".to_string(),
        };
        format!(
            "{} (X) vs {} (O): {} after {} moves",
            self.first,
            self.second,
            outcome,
            self.record.moves.len()
        )
    }
}

/// Complete tournament results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentResults {
    pub name: String,
    pub participants: Vec<String>,
    pub matches: Vec<MatchEntry>,
    /// Configuration used
    pub config: ArenaConfig,
}

/// A single match entry in the tournament
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchEntry {
    pub engine1: String,
    pub engine2: String,
    pub result: MatchResult,
    pub games: Vec<PlayedGame>,
}

impl TournamentResults {
    pub fn new(name: &str, participants: Vec<String>, config: ArenaConfig) -> Self {
        Self {
            name: name.to_string(),
            participants,
            matches: Vec::new(),
            config,
        }
    }

    pub fn add_match(&mut self, engine1: &str, engine2: &str, outcome: MatchOutcome) {
        self.matches.push(MatchEntry {
            engine1: engine1.to_string(),
            engine2: engine2.to_string(),
            result: outcome.result,
            games: outcome.games,
        });
    }

    pub fn save(&self, path: &Path) -> Result<(), ResultsError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|e| ResultsError::Write {
            path: path.to_path_buf(),
            source: e,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ResultsError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ResultsError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Generate a text report. With `with_moves` every game's move log is
    /// listed under its summary line.
    pub fn generate_report(&self, with_moves: bool) -> String {
        let mut report = String::new();
        let _ = writeln!(report, "=== Tournament: {} ===\n", self.name);
        let _ = writeln!(report, "Participants: {}", self.participants.join(", "));
        let _ = writeln!(
            report,
            "Config: {} games/match, {}x{} board, max {} moves, minimax depth {}\n",
            self.config.num_games,
            self.config.board_size,
            self.config.board_size,
            self.config.max_moves,
            self.config.ai.search.depth
        );

        report.push_str("Results:\n");
        let _ = writeln!(
            report,
            "{:<20} vs {:<20} {:>5}-{:<5}-{:<5}",
            "Engine 1", "Engine 2", "W", "L", "D"
        );
        report.push_str(&"-".repeat(60));
        report.push('\n');

        for entry in &self.matches {
            let _ = writeln!(
                report,
                "{:<20} vs {:<20} {:>5}-{:<5}-{:<5}",
                entry.engine1,
                entry.engine2,
                entry.result.wins,
                entry.result.losses,
                entry.result.draws
            );
        }

        if with_moves {
            for entry in &self.matches {
                let _ = writeln!(report, "\n--- {} vs {} ---", entry.engine1, entry.engine2);
                for (i, game) in entry.games.iter().enumerate() {
                    let _ = writeln!(report, "Game {}: {}", i + 1, game.summary());
                    let _ = writeln!(report, "  {}", game.notation.join(" "));
                }
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finished_game() -> PlayedGame {
        let mut session = Session::new(9).unwrap();
        for i in 0..4 {
            session.apply_move(0, i).unwrap();
            session.apply_move(4, i).unwrap();
        }
        session.apply_move(0, 4).unwrap();
        PlayedGame {
            first: "random".into(),
            second: "minimax".into(),
            status: session.winner(),
            record: session.to_record(),
            notation: session.move_log(),
        }
    }

    #[test]
    fn test_game_result_and_replay() {
        let game = finished_game();
        assert_eq!(game.result_for_first(), GameResult::Win);
        assert_eq!(game.replay().unwrap().winner(), game.status);
        assert_eq!(game.summary(), "random (X) vs minimax (O): random wins after 9 moves");
    }

    #[test]
    fn test_report_lists_matches_and_moves() {
        let mut results = TournamentResults::new(
            "Match: random vs minimax",
            vec!["random".into(), "minimax".into()],
            ArenaConfig::default(),
        );
        let game = finished_game();
        let mut tally = MatchResult::new();
        tally.record(game.result_for_first());
        results.add_match(
            "random",
            "minimax",
            MatchOutcome {
                result: tally,
                games: vec![game.clone()],
            },
        );

        let short = results.generate_report(false);
        assert!(short.contains("Participants: random, minimax"));
        assert!(!short.contains("Game 1"));

        let long = results.generate_report(true);
        assert!(long.contains("Game 1: random (X)"));
        assert!(long.contains(&game.notation.join(" ")));
    }

    #[test]
    fn test_save_and_load() {
        let mut results = TournamentResults::new("t", vec!["random".into()], ArenaConfig::default());
        results.add_match(
            "random",
            "random",
            MatchOutcome {
                result: MatchResult::new(),
                games: vec![finished_game()],
            },
        );

        let path = std::env::temp_dir().join(format!("pente-results-{}.json", std::process::id()));
        results.save(&path).unwrap();
        let loaded = TournamentResults::load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.config, results.config);
        assert_eq!(loaded.matches[0].games, results.matches[0].games);
    }
}

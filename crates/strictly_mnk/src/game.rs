//! Turn-taking match engine.
//!
//! A [`Match`] owns the board and drives two [`MoveSource`]s until the
//! [`Evaluator`] reports a terminal position. Illegal moves never surface as
//! errors here: they end the match as a forfeit.

use crate::board::Board;
use crate::config::BoardConfig;
use crate::error::{ConfigError, ConfigErrorKind, EvalError};
use crate::players::MoveSource;
use crate::rules::Evaluator;
use crate::types::{Cell, Evaluation, Move, Outcome, Side};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Whether a match is still being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchStatus {
    /// Turns are still being taken.
    InProgress,
    /// The match is over; the board is frozen.
    Finished(Outcome),
}

/// What a call to [`Match::advance_turn`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turn {
    /// A move was committed and the match goes on.
    Continues,
    /// This turn ended the match.
    Ended(Outcome),
    /// The match had already ended; nothing happened.
    AlreadyOver,
}

impl Turn {
    /// Returns true if more turns can be played.
    pub fn continues(&self) -> bool {
        matches!(self, Turn::Continues)
    }
}

/// A match between two move sources.
///
/// Not meant for concurrent use: every turn needs `&mut self`, so callers
/// sharing a match across threads must serialize access themselves.
#[derive(Debug)]
pub struct Match<X, O> {
    evaluator: Evaluator,
    pub(crate) board: Board,
    opening: Board,
    opening_moves: usize,
    pub(crate) empty_cells: usize,
    moves: usize,
    status: MatchStatus,
    pub(crate) history: Vec<Move>,
    player_x: X,
    player_o: O,
}

impl<X: MoveSource, O: MoveSource> Match<X, O> {
    /// Creates a match on an empty board. X moves first.
    #[instrument(skip(player_x, player_o), fields(x = player_x.name(), o = player_o.name()))]
    pub fn new(config: BoardConfig, player_x: X, player_o: O) -> Self {
        let board = Board::new(&config);
        info!("Match created");
        Self {
            evaluator: Evaluator::new(config),
            empty_cells: board.count_empty(),
            opening: board.clone(),
            board,
            opening_moves: 0,
            moves: 0,
            status: MatchStatus::InProgress,
            history: Vec::new(),
            player_x,
            player_o,
        }
    }

    /// Validates the dimensions and creates a match.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the dimensions are not a valid configuration.
    #[track_caller]
    pub fn try_new(
        rows: usize,
        columns: usize,
        win_length: usize,
        player_x: X,
        player_o: O,
    ) -> Result<Self, ConfigError> {
        let config = BoardConfig::new(rows, columns, win_length)?;
        Ok(Self::new(config, player_x, player_o))
    }

    /// Starts a builder for the given configuration.
    pub fn builder(config: BoardConfig) -> MatchBuilder<X, O> {
        MatchBuilder::new(config)
    }

    /// Resumes a match from a position reached elsewhere.
    ///
    /// The side to move follows from the mark counts. The position must be one
    /// the rules could have produced without ending the match: X has as many
    /// marks as O or exactly one more, no completed line exists and at least
    /// one cell is empty.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::InvalidBoard`] if the board has the wrong shape or
    /// the position fails the checks above.
    #[instrument(skip(board, player_x, player_o))]
    pub fn resume(
        config: BoardConfig,
        board: Board,
        player_x: X,
        player_o: O,
    ) -> Result<Self, EvalError> {
        let evaluator = Evaluator::new(config);
        if !board.fits(&config) {
            warn!("Resumed board does not match configuration");
            return Err(EvalError::InvalidBoard);
        }

        let count = |side| {
            board
                .row_slices()
                .flatten()
                .filter(|&&cell| cell == Cell::Occupied(side))
                .count()
        };
        let (xs, os) = (count(Side::X), count(Side::O));
        if xs != os && xs != os + 1 {
            warn!(xs, os, "Resumed board has unbalanced mark counts");
            return Err(EvalError::InvalidBoard);
        }
        if let Some(line) = evaluator.find_line(&board) {
            warn!(?line, "Resumed board already holds a completed line");
            return Err(EvalError::InvalidBoard);
        }
        if board.is_full() {
            warn!("Resumed board has no empty cells");
            return Err(EvalError::InvalidBoard);
        }

        let moves = xs + os;
        debug!(moves, "Match resumed");
        Ok(Self {
            evaluator,
            empty_cells: board.count_empty(),
            opening: board.clone(),
            board,
            opening_moves: moves,
            moves,
            status: MatchStatus::InProgress,
            history: Vec::new(),
            player_x,
            player_o,
        })
    }

    /// Plays one turn.
    ///
    /// Asks the acting source for a position, evaluates it and applies the
    /// result. When the match ends both sources are notified. A move that
    /// forfeits is never written to the board.
    #[instrument(skip(self), fields(turn = self.moves))]
    pub fn advance_turn(&mut self) -> Turn {
        if let MatchStatus::Finished(_) = self.status {
            debug!("Match already over");
            return Turn::AlreadyOver;
        }

        let side = self.to_move();
        let position = match side {
            Side::X => self.player_x.play(&self.board, side),
            Side::O => self.player_o.play(&self.board, side),
        };
        let mv = Move::new(side, position);
        debug!(%mv, "Move proposed");

        match self.evaluator.scan(&self.board, side, position, self.empty_cells) {
            Evaluation::Over(outcome) => {
                self.status = MatchStatus::Finished(outcome);
                self.player_x.done(outcome);
                self.player_o.done(outcome);

                if outcome.winner().is_none_or(|winner| winner == side) {
                    self.commit(mv);
                }
                info!(%outcome, moves = self.moves, "Match finished");
                Turn::Ended(outcome)
            }
            Evaluation::Continue => {
                self.commit(mv);
                #[cfg(debug_assertions)]
                self.check_invariants();
                Turn::Continues
            }
        }
    }

    /// Plays turns until the match ends and returns the outcome.
    #[instrument(skip(self))]
    pub fn play_to_end(&mut self) -> Outcome {
        loop {
            match self.advance_turn() {
                Turn::Continues => continue,
                Turn::Ended(outcome) => return outcome,
                Turn::AlreadyOver => {
                    if let MatchStatus::Finished(outcome) = self.status {
                        return outcome;
                    }
                }
            }
        }
    }

    /// Returns the status of the match.
    pub fn status(&self) -> MatchStatus {
        self.status
    }

    /// Returns true while turns are still being played.
    pub fn is_in_progress(&self) -> bool {
        matches!(self.status, MatchStatus::InProgress)
    }

    /// Returns the winner, if the match ended with one.
    pub fn winner(&self) -> Option<Side> {
        match self.status {
            MatchStatus::InProgress => None,
            MatchStatus::Finished(outcome) => outcome.winner(),
        }
    }

    /// Returns `(in_progress, winner)`.
    pub fn result(&self) -> (bool, Option<Side>) {
        (self.is_in_progress(), self.winner())
    }

    /// Side whose turn it is.
    pub fn to_move(&self) -> Side {
        Side::for_turn(self.moves)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the board the match started from.
    pub fn opening(&self) -> &Board {
        &self.opening
    }

    /// Marks on the board when the match started.
    pub fn opening_moves(&self) -> usize {
        self.opening_moves
    }

    /// Returns the configuration.
    pub fn config(&self) -> &BoardConfig {
        self.evaluator.config()
    }

    /// Returns the evaluator used by this match.
    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// Number of marks on the board.
    pub fn moves_played(&self) -> usize {
        self.moves
    }

    /// Number of unoccupied cells.
    pub fn empty_cells(&self) -> usize {
        self.empty_cells
    }

    /// Moves committed during this match, in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the X move source.
    pub fn player_x(&self) -> &X {
        &self.player_x
    }

    /// Returns the O move source.
    pub fn player_o(&self) -> &O {
        &self.player_o
    }

    /// Consumes the match and returns both move sources.
    pub fn into_players(self) -> (X, O) {
        (self.player_x, self.player_o)
    }

    /// Writes a move to the board if the cell is free.
    fn commit(&mut self, mv: Move) {
        if self.board.place(mv.position, mv.side) {
            self.empty_cells -= 1;
            self.moves += 1;
            self.history.push(mv);
        }
    }

    #[cfg(debug_assertions)]
    fn check_invariants(&self) {
        use crate::invariants::{InvariantSet, MatchInvariants};

        if let Err(violations) = MatchInvariants::check_all(self) {
            for violation in &violations {
                warn!(description = %violation.description, "Match invariant violated");
            }
            debug_assert!(violations.is_empty(), "match invariants violated");
        }
    }
}

/// Builder that checks both move sources are present.
#[derive(Debug)]
pub struct MatchBuilder<X, O> {
    config: BoardConfig,
    player_x: Option<X>,
    player_o: Option<O>,
}

impl<X: MoveSource, O: MoveSource> MatchBuilder<X, O> {
    /// Creates a builder for the given configuration.
    pub fn new(config: BoardConfig) -> Self {
        Self {
            config,
            player_x: None,
            player_o: None,
        }
    }

    /// Sets the X (first) move source.
    pub fn player_x(mut self, source: X) -> Self {
        self.player_x = Some(source);
        self
    }

    /// Sets the O (second) move source.
    pub fn player_o(mut self, source: O) -> Self {
        self.player_o = Some(source);
        self
    }

    /// Builds the match.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigErrorKind::MissingMoveSource`] if either side has no source.
    #[track_caller]
    pub fn build(self) -> Result<Match<X, O>, ConfigError> {
        let player_x = self
            .player_x
            .ok_or_else(|| ConfigError::new(ConfigErrorKind::MissingMoveSource(Side::X)))?;
        let player_o = self
            .player_o
            .ok_or_else(|| ConfigError::new(ConfigErrorKind::MissingMoveSource(Side::O)))?;
        Ok(Match::new(self.config, player_x, player_o))
    }
}

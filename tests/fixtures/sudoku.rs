// Copyright (c) 2025 - Cowboy AI, Inc.
//! Sudoku board decider and solver process
//!
//! The board decider knows the rules; the solver process keeps it moving:
//!
//! ```text
//! InitializeSolver → BoardInitialized  → owes ValidateBoardState
//! ValidateBoardState → BoardValidated  → owes RunSolverStep
//! RunSolverStep    → StepCompleted     → owes CheckCompletion
//! CheckCompletion  → BoardNotYetComplete → owes RunSolverStep
//!                  → SolutionFound     (done)
//! ```
//!
//! Each step needs the board left by the previous one, so the process records
//! what it owes in its state and hands it back through `resume`.

use cim_decider::{adapt_process, combine, Combine, Decider, Process};

pub const SIZE: usize = 9;
pub const CELLS: usize = SIZE * SIZE;

// ============================================================================
// Board and evaluator
// ============================================================================

/// 81 cells in row-major order, `None` for an empty cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    values: Vec<Option<u8>>,
}

impl Board {
    pub fn new(values: Vec<Option<u8>>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[Option<u8>] {
        &self.values
    }

    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        self.values.get(row * SIZE + col).copied().flatten()
    }

    /// Board with one more cell filled in
    pub fn with_value(&self, idx: usize, value: u8) -> Self {
        let mut values = self.values.clone();
        if let Some(cell) = values.get_mut(idx) {
            *cell = Some(value);
        }
        Self { values }
    }

    fn has_no_duplicates(cells: impl Iterator<Item = Option<u8>>) -> bool {
        let mut seen = [false; SIZE + 1];
        for value in cells.flatten() {
            let slot = usize::from(value);
            if slot == 0 || slot > SIZE || seen[slot] {
                return false;
            }
            seen[slot] = true;
        }
        true
    }

    pub fn is_row_valid(&self, row: usize) -> bool {
        Self::has_no_duplicates((0..SIZE).map(|col| self.get(row, col)))
    }

    pub fn is_column_valid(&self, col: usize) -> bool {
        Self::has_no_duplicates((0..SIZE).map(|row| self.get(row, col)))
    }

    fn subgrid_cells(start_row: usize, start_col: usize) -> impl Iterator<Item = (usize, usize)> {
        (0..SIZE).map(move |i| (start_row + i / 3, start_col + i % 3))
    }

    pub fn is_subgrid_valid(&self, start_row: usize, start_col: usize) -> bool {
        Self::has_no_duplicates(
            Self::subgrid_cells(start_row, start_col)
                .map(|(row, col)| self.get(row, col)),
        )
    }

    /// No duplicates in any row, column or 3x3 subgrid
    pub fn is_valid(&self) -> bool {
        self.values.len() == CELLS
            && (0..SIZE).all(|i| self.is_row_valid(i) && self.is_column_valid(i))
            && (0..SIZE).all(|i| self.is_subgrid_valid(i / 3 * 3, i % 3 * 3))
    }

    pub fn is_complete(&self) -> bool {
        self.values.iter().all(Option::is_some)
    }

    pub fn is_value_allowed(&self, row: usize, col: usize, value: u8) -> bool {
        let start_row = row - row % 3;
        let start_col = col - col % 3;

        (0..SIZE).all(|c| self.get(row, c) != Some(value))
            && (0..SIZE).all(|r| self.get(r, col) != Some(value))
            && Self::subgrid_cells(start_row, start_col)
                .all(|(r, c)| self.get(r, c) != Some(value))
    }

    /// First empty cell, row-major, that admits exactly one digit
    pub fn next_single_step(&self) -> Option<(usize, u8)> {
        (0..CELLS)
            .filter(|idx| self.values.get(*idx) == Some(&None))
            .find_map(|idx| {
                let (row, col) = (idx / SIZE, idx % SIZE);
                let mut candidates = (1..=9).filter(|v| self.is_value_allowed(row, col, *v));
                match (candidates.next(), candidates.next()) {
                    (Some(value), None) => Some((idx, value)),
                    _ => None,
                }
            })
    }
}

// ============================================================================
// Board decider
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SudokuCommand {
    InitializeSolver { grid: Vec<Option<u8>> },
    RunSolverStep,
    ValidateBoardState,
    CheckCompletion,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SudokuEvent {
    BoardInitialized { board: Board },
    StepCompleted { idx: usize, value: u8 },
    BoardValidated,
    BoardNotYetComplete,
    SolutionFound,
    SolutionFailed,
    ErrorDetected { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SudokuState {
    Initial,
    Solving { board: Board },
    Valid { board: Board },
    Solved { board: Board },
    Unsolvable { board: Board },
    Error { message: String },
}

impl SudokuState {
    pub fn board(&self) -> Option<&Board> {
        match self {
            SudokuState::Solving { board }
            | SudokuState::Valid { board }
            | SudokuState::Solved { board }
            | SudokuState::Unsolvable { board } => Some(board),
            SudokuState::Initial | SudokuState::Error { .. } => None,
        }
    }
}

/// Sudoku rules as a decider; unexpected commands are recorded as errors
#[derive(Debug, Clone, Copy, Default)]
pub struct SudokuBoard;

impl Decider for SudokuBoard {
    type Command = SudokuCommand;
    type Event = SudokuEvent;
    type State = SudokuState;

    fn initial_state(&self) -> SudokuState {
        SudokuState::Initial
    }

    fn is_terminal(&self, state: &SudokuState) -> bool {
        matches!(
            state,
            SudokuState::Solved { .. } | SudokuState::Unsolvable { .. }
        )
    }

    fn decide(&self, command: &SudokuCommand, state: &SudokuState) -> Vec<SudokuEvent> {
        let event = match (command, state) {
            (SudokuCommand::InitializeSolver { grid }, SudokuState::Initial) => {
                SudokuEvent::BoardInitialized {
                    board: Board::new(grid.clone()),
                }
            }
            (
                SudokuCommand::RunSolverStep,
                SudokuState::Valid { board } | SudokuState::Solving { board },
            ) => match board.next_single_step() {
                Some((idx, value)) => SudokuEvent::StepCompleted { idx, value },
                None => SudokuEvent::SolutionFailed,
            },
            (SudokuCommand::ValidateBoardState, SudokuState::Solving { board }) => {
                if board.is_valid() {
                    SudokuEvent::BoardValidated
                } else {
                    SudokuEvent::SolutionFailed
                }
            }
            (SudokuCommand::CheckCompletion, SudokuState::Solving { board }) => {
                if board.is_complete() {
                    SudokuEvent::SolutionFound
                } else {
                    SudokuEvent::BoardNotYetComplete
                }
            }
            _ => SudokuEvent::ErrorDetected {
                message: format!("Unhandled: {:?} with {:?}", command, state),
            },
        };
        vec![event]
    }

    fn evolve(&self, state: &SudokuState, event: &SudokuEvent) -> SudokuState {
        match (event, state) {
            (SudokuEvent::BoardInitialized { board }, SudokuState::Initial) => {
                SudokuState::Solving {
                    board: board.clone(),
                }
            }
            (
                SudokuEvent::StepCompleted { idx, value },
                SudokuState::Solving { board } | SudokuState::Valid { board },
            ) => SudokuState::Solving {
                board: board.with_value(*idx, *value),
            },
            (SudokuEvent::BoardValidated, SudokuState::Solving { board }) => SudokuState::Valid {
                board: board.clone(),
            },
            (
                SudokuEvent::SolutionFound,
                SudokuState::Valid { board } | SudokuState::Solving { board },
            ) => SudokuState::Solved {
                board: board.clone(),
            },
            (
                SudokuEvent::SolutionFailed,
                SudokuState::Solving { board } | SudokuState::Valid { board },
            ) => SudokuState::Unsolvable {
                board: board.clone(),
            },
            (SudokuEvent::ErrorDetected { message }, _) => SudokuState::Error {
                message: message.clone(),
            },
            _ => state.clone(),
        }
    }
}

// ============================================================================
// Solver process
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverEvent {
    Initialized,
    Validated,
    StepCompleted,
    NotYetComplete,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverCommand {
    ValidateBoard,
    RunStep,
    CheckCompletion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverProgress {
    Idle,
    Owes(SolverCommand),
    Done,
}

/// Drives the board from initialization to a verdict
#[derive(Debug, Clone, Copy, Default)]
pub struct SudokuSolver;

impl Process for SudokuSolver {
    type Command = SolverCommand;
    type Event = SolverEvent;
    type State = SolverProgress;

    fn initial_state(&self) -> SolverProgress {
        SolverProgress::Idle
    }

    fn is_terminal(&self, state: &SolverProgress) -> bool {
        !matches!(state, SolverProgress::Owes(_))
    }

    fn evolve(&self, _state: &SolverProgress, event: &SolverEvent) -> SolverProgress {
        match event {
            SolverEvent::Initialized => SolverProgress::Owes(SolverCommand::ValidateBoard),
            SolverEvent::Validated | SolverEvent::NotYetComplete => {
                SolverProgress::Owes(SolverCommand::RunStep)
            }
            SolverEvent::StepCompleted => SolverProgress::Owes(SolverCommand::CheckCompletion),
            SolverEvent::Finished => SolverProgress::Done,
        }
    }

    /// Every follow-up needs the board left by the previous step, so nothing
    /// is issued here; `resume` hands the owed command back instead.
    fn react(&self, _state: &SolverProgress, _event: &SolverEvent) -> Vec<SolverCommand> {
        Vec::new()
    }

    fn resume(&self, state: &SolverProgress) -> Vec<SolverCommand> {
        match state {
            SolverProgress::Owes(command) => vec![*command],
            SolverProgress::Idle | SolverProgress::Done => Vec::new(),
        }
    }
}

/// Board events the solver cares about
pub fn select_solver_event(event: &SudokuEvent) -> Option<SolverEvent> {
    match event {
        SudokuEvent::BoardInitialized { .. } => Some(SolverEvent::Initialized),
        SudokuEvent::BoardValidated => Some(SolverEvent::Validated),
        SudokuEvent::StepCompleted { .. } => Some(SolverEvent::StepCompleted),
        SudokuEvent::BoardNotYetComplete => Some(SolverEvent::NotYetComplete),
        SudokuEvent::SolutionFound
        | SudokuEvent::SolutionFailed
        | SudokuEvent::ErrorDetected { .. } => Some(SolverEvent::Finished),
    }
}

pub fn solver_command(command: SolverCommand) -> SudokuCommand {
    match command {
        SolverCommand::ValidateBoard => SudokuCommand::ValidateBoardState,
        SolverCommand::RunStep => SudokuCommand::RunSolverStep,
        SolverCommand::CheckCompletion => SudokuCommand::CheckCompletion,
    }
}

/// Board decider driven by the solver
pub fn sudoku_solver() -> Combine<
    impl Process<Command = SudokuCommand, Event = SudokuEvent, State = SolverProgress>,
    SudokuBoard,
> {
    combine(
        adapt_process(select_solver_event, solver_command, SudokuSolver),
        SudokuBoard,
    )
}

// ============================================================================
// Grids
// ============================================================================

/// Parse a grid written as digits with `.` for empty cells
pub fn grid(rows: &[&str]) -> Vec<Option<u8>> {
    rows.iter()
        .flat_map(|row| row.chars().filter(|c| !c.is_whitespace()))
        .map(|c| c.to_digit(10).map(|d| d as u8))
        .collect()
}

pub fn single_candidate_puzzle() -> Vec<Option<u8>> {
    grid(&[
        "4.. 7.. 382",
        ".8. ... .7.",
        ".3. .8. 9..",
        "..4 ..8 52.",
        "... 27. ...",
        ".72 94. .6.",
        "926 51. .3.",
        "1.8 36. .4.",
        "3.. 829 6.1",
    ])
}

pub fn single_candidate_solution() -> Vec<Option<u8>> {
    grid(&[
        "469 751 382",
        "281 693 475",
        "735 482 916",
        "694 138 527",
        "513 276 894",
        "872 945 163",
        "926 514 738",
        "158 367 249",
        "347 829 651",
    ])
}

/// Nothing to deduce: every empty cell admits several digits
pub fn empty_puzzle() -> Vec<Option<u8>> {
    vec![None; CELLS]
}

/// Two fives in the first row
pub fn invalid_puzzle() -> Vec<Option<u8>> {
    let mut cells = empty_puzzle();
    cells[0] = Some(5);
    cells[1] = Some(5);
    cells
}

use super::SimConfig;
use crate::domain::{FixedStepScheduler, GridState, TransitionEngine};
use crate::error::Result;

/// Top-level screen the simulation is in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Menu,
    Running,
    Paused,
}

impl Phase {
    pub const fn name(self) -> &'static str {
        match self {
            Phase::Menu => "Menu",
            Phase::Running => "Running",
            Phase::Paused => "Paused",
        }
    }

    /// Which commands this phase accepts.
    /// `bulk_edits_while_paused` opens randomize and clear to the paused phase.
    pub const fn permits(self, command: &Command, bulk_edits_while_paused: bool) -> bool {
        match (self, command) {
            (Phase::Menu, Command::Start) => true,
            (Phase::Running, Command::Pause) => true,
            (Phase::Paused, Command::Resume) => true,
            (Phase::Running | Phase::Paused, Command::Toggle { .. }) => true,
            (Phase::Running, Command::Randomize | Command::Clear) => true,
            (Phase::Paused, Command::Randomize | Command::Clear) => bulk_edits_while_paused,
            _ => false,
        }
    }
}

/// Discrete requests coming from the input layer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Start,
    Pause,
    Resume,
    Toggle { row: usize, col: usize },
    Randomize,
    Clear,
}

/// SimulationController orchestrates the simulation.
/// Owns the grid and the scheduler; the phase only changes through `apply`.
pub struct SimulationController {
    grid: GridState,
    scheduler: FixedStepScheduler,
    engine: TransitionEngine,
    phase: Phase,
    generation: u64,
    live_probability: f64,
    bulk_edits_while_paused: bool,
}

impl SimulationController {
    pub fn new(config: &SimConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            grid: GridState::new(config.rows, config.cols)?,
            scheduler: FixedStepScheduler::new(config.tick_interval, config.drift)?,
            engine: TransitionEngine::with_parallel_threshold(config.parallel_threshold),
            phase: Phase::Menu,
            generation: 0,
            live_probability: config.live_probability,
            bulk_edits_while_paused: config.bulk_edits_while_paused,
        })
    }

    pub fn grid(&self) -> &GridState {
        &self.grid
    }

    pub const fn phase(&self) -> Phase {
        self.phase
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub fn scheduler(&self) -> &FixedStepScheduler {
        &self.scheduler
    }

    /// Whether `command` is accepted in the current phase
    pub fn permits(&self, command: &Command) -> bool {
        self.phase.permits(command, self.bulk_edits_while_paused)
    }

    /// Route one input event. Returns false when the current phase does not accept it.
    pub fn apply(&mut self, command: Command) -> Result<bool> {
        if !self.permits(&command) {
            log::warn!("ignoring {:?} while {}", command, self.phase.name());
            return Ok(false);
        }

        match command {
            Command::Start | Command::Resume => self.enter(Phase::Running),
            Command::Pause => self.enter(Phase::Paused),
            Command::Toggle { row, col } => {
                let cell = self.grid.toggle(row, col)?;
                log::debug!("toggled ({row}, {col}) to {cell:?}");
            }
            Command::Randomize => {
                self.grid.randomize(self.live_probability)?;
                self.generation = 0;
                log::info!("randomized grid, population {}", self.grid.population());
            }
            Command::Clear => {
                self.grid.clear();
                self.generation = 0;
                log::info!("cleared grid");
            }
        }
        Ok(true)
    }

    /// Update simulation by one frame.
    /// Returns true when a new generation was committed.
    pub fn frame(&mut self, dt: f32) -> Result<bool> {
        let ticked = self.scheduler.advance(dt, &mut self.grid, &self.engine)?;
        if ticked {
            self.generation += 1;
        }
        Ok(ticked)
    }

    fn enter(&mut self, next: Phase) {
        log::debug!("{} -> {}", self.phase.name(), next.name());
        self.phase = next;
        self.scheduler.set_running(next == Phase::Running);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Cell;
    use crate::error::SimError;

    fn controller() -> SimulationController {
        SimulationController::new(&SimConfig::default().with_dimensions(6, 6).with_tick_interval(0.25))
            .unwrap()
    }

    fn started() -> SimulationController {
        let mut sim = controller();
        assert!(sim.apply(Command::Start).unwrap());
        sim
    }

    fn place_blinker(sim: &mut SimulationController) {
        for col in 1..=3 {
            sim.apply(Command::Toggle { row: 2, col }).unwrap();
        }
    }

    #[test]
    fn test_starts_in_menu() {
        let sim = controller();
        assert_eq!(sim.phase(), Phase::Menu);
        assert_eq!(sim.generation(), 0);
        assert!(!sim.scheduler().is_running());
    }

    #[test]
    fn test_phase_permission_table() {
        let toggle = Command::Toggle { row: 0, col: 0 };

        assert!(Phase::Menu.permits(&Command::Start, true));
        assert!(!Phase::Menu.permits(&toggle, true));
        assert!(!Phase::Menu.permits(&Command::Clear, true));

        assert!(Phase::Running.permits(&Command::Pause, false));
        assert!(Phase::Running.permits(&Command::Randomize, false));
        assert!(!Phase::Running.permits(&Command::Resume, true));

        assert!(Phase::Paused.permits(&Command::Resume, false));
        assert!(Phase::Paused.permits(&toggle, false));
        assert!(Phase::Paused.permits(&Command::Clear, true));
        assert!(!Phase::Paused.permits(&Command::Clear, false));
        assert!(!Phase::Paused.permits(&Command::Start, true));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = SimConfig::default().with_tick_interval(0.0);
        assert!(matches!(
            SimulationController::new(&config),
            Err(SimError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_phase_transitions() {
        let mut sim = controller();

        assert!(!sim.apply(Command::Pause).unwrap());
        assert!(!sim.apply(Command::Resume).unwrap());
        assert_eq!(sim.phase(), Phase::Menu);

        assert!(sim.apply(Command::Start).unwrap());
        assert_eq!(sim.phase(), Phase::Running);
        assert!(sim.scheduler().is_running());

        assert!(!sim.apply(Command::Start).unwrap());
        assert!(!sim.apply(Command::Resume).unwrap());

        assert!(sim.apply(Command::Pause).unwrap());
        assert_eq!(sim.phase(), Phase::Paused);
        assert!(!sim.scheduler().is_running());

        assert!(sim.apply(Command::Resume).unwrap());
        assert_eq!(sim.phase(), Phase::Running);
    }

    #[test]
    fn test_edits_ignored_in_menu() {
        let mut sim = controller();
        assert!(!sim.apply(Command::Toggle { row: 0, col: 0 }).unwrap());
        assert!(!sim.apply(Command::Randomize).unwrap());
        assert_eq!(sim.grid().population(), 0);
    }

    #[test]
    fn test_toggle_while_running_and_paused() {
        let mut sim = started();
        sim.apply(Command::Toggle { row: 1, col: 1 }).unwrap();
        assert_eq!(sim.grid().get(1, 1), Ok(Cell::Alive));

        sim.apply(Command::Pause).unwrap();
        sim.apply(Command::Toggle { row: 1, col: 1 }).unwrap();
        assert_eq!(sim.grid().get(1, 1), Ok(Cell::Dead));
    }

    #[test]
    fn test_toggle_out_of_range_is_error() {
        let mut sim = started();
        assert!(matches!(
            sim.apply(Command::Toggle { row: 6, col: 0 }),
            Err(SimError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_frame_steps_only_while_running() {
        let mut sim = started();
        place_blinker(&mut sim);
        sim.apply(Command::Pause).unwrap();
        let before = sim.grid().clone();

        assert!(!sim.frame(10.0).unwrap());
        assert_eq!(sim.grid(), &before);
        assert_eq!(sim.generation(), 0);

        sim.apply(Command::Resume).unwrap();
        assert!(sim.frame(10.0).unwrap());
        assert_eq!(sim.generation(), 1);
        assert_eq!(sim.grid().get(1, 2), Ok(Cell::Alive));
        assert_eq!(sim.grid().get(2, 1), Ok(Cell::Dead));
    }

    #[test]
    fn test_randomize_then_clear() {
        let config = SimConfig::default().with_dimensions(5, 5).with_live_probability(1.0);
        let mut sim = SimulationController::new(&config).unwrap();
        sim.apply(Command::Start).unwrap();

        sim.apply(Command::Randomize).unwrap();
        assert_eq!(sim.grid().population(), 25);

        sim.frame(1.0).unwrap();
        assert_eq!(sim.generation(), 1);

        sim.apply(Command::Clear).unwrap();
        assert_eq!(sim.grid(), &GridState::new(5, 5).unwrap());
        assert_eq!(sim.generation(), 0);
    }

    #[test]
    fn test_bulk_edits_while_paused_follow_config() {
        let mut sim = started();
        sim.apply(Command::Pause).unwrap();
        assert!(sim.permits(&Command::Clear));

        let config = SimConfig::default()
            .with_dimensions(4, 4)
            .with_bulk_edits_while_paused(false);
        let mut strict = SimulationController::new(&config).unwrap();
        strict.apply(Command::Start).unwrap();
        strict.apply(Command::Toggle { row: 0, col: 0 }).unwrap();
        strict.apply(Command::Pause).unwrap();

        assert!(!strict.apply(Command::Clear).unwrap());
        assert!(!strict.apply(Command::Randomize).unwrap());
        assert_eq!(strict.grid().population(), 1);
    }
}

//! Mission state machine
//!
//! The controller is the central brain that:
//! - Owns the drone state (single writer)
//! - Checks resources and safety at the start of every control cycle
//! - Drives the vision, navigation and cleaning collaborators
//! - Applies transitions from the mode table
//! - Exposes the operator surface (start, abort, status, service)

use core::ops::ControlFlow;

use heapless::Vec;

use crate::config::{ConfigError, LowResourcePolicy, MissionConfig};
use crate::error::MissionError;
use crate::executor::{CleaningError, CleaningExecutor};
use crate::maintenance::MaintenanceService;
use crate::model::{DroneState, Point3, WindowId, WindowTarget, MAX_WINDOWS};
use crate::planner::{CleaningRoute, PathPlanner, WipePattern};
use crate::resource::{ResourceEvent, ResourceMonitor, ResourceReport};
use crate::safety::{FaultKind, SafetyController, SafetyOverride, SafetyStatus};
use crate::state::{Mode, Trigger};
use crate::traits::{CleaningActuator, NavAck, Navigator, WindowDetector};

use super::status::MissionStatus;

/// Position within the cleaning route
///
/// Each route step takes two cycles: fly to the window, then wipe and
/// clean it. A wipe interrupted by a timeout resumes at `wipe_leg`.
#[derive(Debug, Clone, Copy, Default)]
struct RouteCursor {
    index: usize,
    in_position: bool,
    wipe_leg: usize,
}

/// Mission state machine
pub struct MissionStateMachine<D, N, A> {
    config: MissionConfig,
    /// The drone record; this struct is its only writer
    drone: DroneState,
    monitor: ResourceMonitor,
    safety: SafetyController,
    planner: PathPlanner,
    executor: CleaningExecutor,
    maintenance: MaintenanceService,
    /// Windows from the latest scan
    windows: Vec<WindowTarget, MAX_WINDOWS>,
    /// Windows cleaned this mission
    cleaned: Vec<WindowId, MAX_WINDOWS>,
    route: CleaningRoute,
    cursor: RouteCursor,
    last_report: ResourceReport,
    last_error: Option<MissionError>,
    abort_pending: bool,
    cycle: u32,
    detector: D,
    navigator: N,
    actuator: A,
}

impl<D, N, A> MissionStateMachine<D, N, A>
where
    D: WindowDetector,
    N: Navigator,
    A: CleaningActuator,
{
    /// Create a state machine around its collaborators
    ///
    /// `drone` provides the starting resource levels; position and home
    /// are taken from the navigator.
    pub fn new(
        config: MissionConfig,
        drone: DroneState,
        detector: D,
        navigator: N,
        actuator: A,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut drone = drone;
        drone.set_home_position(navigator.home_position());
        drone.set_position(navigator.current_position());

        let monitor = ResourceMonitor::new(config.thresholds);
        let last_report = monitor.assess(&drone);

        Ok(Self {
            config,
            drone,
            monitor,
            safety: SafetyController::new(config.fault_budget),
            planner: PathPlanner::new(config.row_tolerance_m),
            executor: CleaningExecutor::new(config.cost),
            maintenance: MaintenanceService,
            windows: Vec::new(),
            cleaned: Vec::new(),
            route: CleaningRoute::empty(),
            cursor: RouteCursor::default(),
            last_report,
            last_error: None,
            abort_pending: false,
            cycle: 0,
            detector,
            navigator,
            actuator,
        })
    }

    /// Get current mode
    pub fn mode(&self) -> Mode {
        self.drone.mode()
    }

    /// Read-only drone snapshot
    pub fn drone(&self) -> &DroneState {
        &self.drone
    }

    pub fn config(&self) -> &MissionConfig {
        &self.config
    }

    /// Windows from the latest scan
    pub fn windows(&self) -> &[WindowTarget] {
        &self.windows
    }

    /// Route planned for this mission (empty before planning)
    pub fn route(&self) -> &CleaningRoute {
        &self.route
    }

    pub fn detector(&self) -> &D {
        &self.detector
    }

    pub fn detector_mut(&mut self) -> &mut D {
        &mut self.detector
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut N {
        &mut self.navigator
    }

    pub fn actuator(&self) -> &A {
        &self.actuator
    }

    pub fn actuator_mut(&mut self) -> &mut A {
        &mut self.actuator
    }

    /// Operator status snapshot
    pub fn status(&self) -> MissionStatus {
        let unseen_cleaned = self
            .cleaned
            .iter()
            .filter(|id| !self.windows.iter().any(|w| w.id() == **id))
            .count();

        MissionStatus {
            mode: self.mode(),
            battery_level: self.drone.battery_level(),
            fluid_level: self.drone.fluid_level(),
            windows_cleaned: self.cleaned.len() as u16,
            windows_total: (self.windows.len() + unseen_cleaned) as u16,
            resource_event: self.last_report.most_severe(),
            consecutive_faults: self.safety.consecutive_faults(),
            last_error: self.last_error,
            position: self.drone.position(),
            abort_pending: self.abort_pending,
            cycle: self.cycle,
        }
    }

    /// Start a new mission cycle
    ///
    /// Only allowed from `Idle`. A drone that is already at critical
    /// battery or empty fluid does not take off.
    pub fn start_mission(&mut self) -> Result<(), MissionError> {
        let mode = self.mode();
        if mode != Mode::Idle {
            warn!("start rejected in {}", mode);
            return Err(MissionError::InvalidState { mode });
        }

        let report = self.monitor.assess(&self.drone);
        self.last_report = report;
        if report.battery == ResourceEvent::CriticalBattery
            || report.fluid == ResourceEvent::EmptyFluid
        {
            warn!("preflight failed: {}", report);
            self.last_error = Some(MissionError::InsufficientResource);
            return Err(MissionError::InsufficientResource);
        }

        self.windows.clear();
        self.cleaned.clear();
        self.route = CleaningRoute::empty();
        self.cursor = RouteCursor::default();
        self.safety.reset();
        self.last_error = None;
        self.abort_pending = false;
        self.drone.set_home_position(self.navigator.home_position());
        self.drone.set_position(self.navigator.current_position());

        info!(
            "mission start: battery {} fluid {}",
            self.drone.battery_level(),
            self.drone.fluid_level()
        );
        self.fire(Trigger::StartMission);
        Ok(())
    }

    /// Request a mission abort
    ///
    /// Honored at the start of the next control cycle. Rejected on the
    /// ground, where there is nothing to abort.
    pub fn abort_mission(&mut self) -> Result<(), MissionError> {
        let mode = self.mode();
        if mode.is_grounded() {
            return Err(MissionError::InvalidState { mode });
        }
        info!("abort requested in {}", mode);
        self.abort_pending = true;
        Ok(())
    }

    /// Charge the battery (ground only)
    pub fn recharge(&mut self) -> Result<(), MissionError> {
        self.maintenance.recharge(&mut self.drone)?;
        self.after_service();
        Ok(())
    }

    /// Refill the fluid tank (ground only)
    pub fn refill(&mut self) -> Result<(), MissionError> {
        self.maintenance.refill(&mut self.drone)?;
        self.after_service();
        Ok(())
    }

    /// Run one control cycle
    ///
    /// Order is fixed: resource check, pending abort, safety override,
    /// then the work of the current mode. Returns the trigger of the
    /// transition taken, if any.
    pub fn step(&mut self) -> Option<Trigger> {
        self.cycle = self.cycle.wrapping_add(1);

        let report = self.monitor.assess(&self.drone);
        if report != self.last_report {
            if report.is_normal() {
                debug!("resources normal");
            } else {
                warn!("resources: {}", report);
            }
        }
        self.last_report = report;

        if self.abort_pending {
            self.abort_pending = false;
            if let Some(trigger) = self.honor_abort() {
                return Some(trigger);
            }
        }

        if let SafetyStatus::Override(safety_override) = self.safety.evaluate(&report, self.mode())
        {
            if let Some(trigger) = self.apply_override(safety_override) {
                return Some(trigger);
            }
        }

        match self.mode() {
            Mode::Idle | Mode::Maintenance => None,
            Mode::Takeoff => self.step_takeoff(),
            Mode::Scanning => self.step_scanning(),
            Mode::Planning => self.step_planning(),
            Mode::Cleaning => self.step_cleaning(&report),
            Mode::Returning => self.step_returning(),
            Mode::Landing => self.step_landing(),
            Mode::Emergency => self.step_emergency(),
        }
    }

    /// Step until the drone is on the ground or `max_cycles` ran out
    ///
    /// Returns the number of cycles run.
    pub fn run(&mut self, max_cycles: u32) -> u32 {
        let mut cycles = 0;
        while self.mode().is_airborne() && cycles < max_cycles {
            self.step();
            cycles += 1;
        }
        cycles
    }

    /// Apply a trigger through the transition table
    fn fire(&mut self, trigger: Trigger) -> Option<Trigger> {
        let from = self.mode();
        match from.transition(trigger) {
            Some(to) => {
                self.drone.set_mode(to);
                info!("{} -> {} ({})", from, to, trigger);
                self.on_enter(to);
                Some(trigger)
            }
            None => {
                error!("no transition from {} on {}", from, trigger);
                None
            }
        }
    }

    fn on_enter(&mut self, mode: Mode) {
        match mode {
            Mode::Cleaning => self.cursor = RouteCursor::default(),
            Mode::Idle => {
                let status = self.status();
                info!(
                    "mission finished: {}/{} windows, battery {} fluid {}",
                    status.windows_cleaned,
                    status.windows_total,
                    status.battery_level,
                    status.fluid_level
                );
            }
            Mode::Emergency => {
                error!("emergency landing, last error {}", self.last_error);
            }
            _ => {}
        }
    }

    fn honor_abort(&mut self) -> Option<Trigger> {
        let mode = self.mode();
        if mode.is_working() {
            return self.fire(Trigger::AbortRequested);
        }
        // An exhausted fault budget has already forced Emergency
        if mode.is_descending() {
            info!("abort acknowledged, already descending in {}", mode);
        }
        None
    }

    fn apply_override(&mut self, safety_override: SafetyOverride) -> Option<Trigger> {
        let mode = self.mode();
        if !mode.is_airborne() || mode == safety_override.target {
            return None;
        }

        match safety_override.target {
            Mode::Emergency => {
                warn!("safety override: {}", safety_override.reason);
                self.last_error = Some(MissionError::CriticalFailure);
                self.fire(Trigger::CriticalFailure)
            }
            Mode::Returning if mode.is_working() => {
                warn!("safety override: {}", safety_override.reason);
                self.fire(Trigger::ResourceExhausted)
            }
            // Already returning or landing
            _ => None,
        }
    }

    /// Fly to `target`, keeping position and the fault streak current
    fn navigate(&mut self, target: Point3) -> NavAck {
        trace!("navigate to {}", target);
        let ack = self.navigator.navigate_to(target);
        self.drone.set_position(self.navigator.current_position());
        if ack == NavAck::Ack {
            self.safety.record_success();
        }
        ack
    }

    /// Record a fault; escalates once the budget is used up
    fn record_fault(&mut self, kind: FaultKind, error: MissionError) -> Option<Trigger> {
        self.last_error = Some(error);
        if self.mode() == Mode::Emergency {
            // Emergency descent is retried, never escalated further
            warn!("fault during emergency descent: {}", kind);
            return None;
        }

        self.safety.record_fault(kind);
        warn!(
            "fault {} ({} consecutive)",
            kind,
            self.safety.consecutive_faults()
        );

        if self.safety.fault_budget_exhausted() {
            self.last_error = Some(MissionError::CriticalFailure);
            return self.fire(Trigger::CriticalFailure);
        }
        None
    }

    fn step_takeoff(&mut self) -> Option<Trigger> {
        let home = self.drone.home_position();
        let target = home.with_altitude(home.z + self.config.takeoff_altitude_m);
        match self.navigate(target) {
            NavAck::Ack => self.fire(Trigger::ReachedAltitude),
            NavAck::Timeout => {
                self.record_fault(FaultKind::NavigationTimeout, MissionError::NavigationTimeout)
            }
        }
    }

    fn step_scanning(&mut self) -> Option<Trigger> {
        let scan = self.detector.scan_facade();
        self.windows.clear();
        for window in scan {
            let id = window.id();
            if !window.is_well_formed() {
                warn!("scan: dropping malformed window {}", id);
                continue;
            }
            if window.is_cleaned()
                || self.cleaned.contains(&id)
                || self.windows.iter().any(|w| w.id() == id)
            {
                continue;
            }
            if self.windows.push(window).is_err() {
                break;
            }
        }

        info!("scan found {} windows to clean", self.windows.len());
        if self.windows.is_empty() {
            self.fire(Trigger::NoWindowsFound)
        } else {
            self.fire(Trigger::WindowsDetected)
        }
    }

    fn step_planning(&mut self) -> Option<Trigger> {
        match self.planner.plan(&self.windows, self.config.strategy) {
            Ok(route) => {
                self.route = route;
                debug!(
                    "route: {} stops, {} m of facade travel",
                    self.route.len(),
                    self.route.travel_m(&self.windows)
                );
                self.fire(Trigger::RouteReady)
            }
            Err(e) => {
                error!("planning failed: {}", e);
                self.fire(Trigger::AbortRequested)
            }
        }
    }

    fn step_cleaning(&mut self, report: &ResourceReport) -> Option<Trigger> {
        if self.config.low_resource_policy == LowResourcePolicy::ReturnOnLow {
            if report.battery == ResourceEvent::LowBattery {
                return self.fire(Trigger::LowBattery);
            }
            if report.fluid == ResourceEvent::LowFluid {
                return self.fire(Trigger::LowFluid);
            }
        }

        let Some(id) = self.route.get(self.cursor.index) else {
            return self.fire(Trigger::RouteComplete);
        };
        let Some(slot) = self.windows.iter().position(|w| w.id() == id) else {
            error!("route window {} missing from scan", id);
            return self.advance_cursor();
        };

        if !self.cursor.in_position {
            let target = self.windows[slot]
                .facade_position()
                .approach_point(self.config.standoff_m);
            return match self.navigate(target) {
                NavAck::Ack => {
                    self.cursor.in_position = true;
                    None
                }
                NavAck::Timeout => {
                    self.record_fault(FaultKind::NavigationTimeout, MissionError::NavigationTimeout)
                }
            };
        }

        if let ControlFlow::Break(trigger) = self.fly_wipe(slot) {
            return trigger;
        }

        let result = self.executor.execute_cleaning(
            &mut self.windows[slot],
            &self.drone,
            &mut self.actuator,
        );
        match result {
            Ok(draw) => {
                self.drone.apply_draw(draw);
                self.safety.record_success();
                let _ = self.cleaned.push(id);
                debug!(
                    "window {} cleaned: battery {} fluid {}",
                    id,
                    self.drone.battery_level(),
                    self.drone.fluid_level()
                );
                self.advance_cursor()
            }
            Err(CleaningError::InsufficientResource) => {
                warn!("window {}: insufficient resources", id);
                self.last_error = Some(MissionError::InsufficientResource);
                self.fire(Trigger::ResourceExhausted)
            }
            Err(CleaningError::ActuatorFault { draw }) => {
                // The attempt was made; it still costs
                self.drone.apply_draw(draw);
                self.record_fault(FaultKind::Actuator, MissionError::ActuatorFault { window: id })
            }
        }
    }

    /// Fly the remaining wipe legs over window `slot`
    ///
    /// Breaks at the first timeout; the next cycle resumes from that leg.
    /// A finished wipe is not flown again when the cleaning action is
    /// retried.
    fn fly_wipe(&mut self, slot: usize) -> ControlFlow<Option<Trigger>> {
        let pattern = WipePattern::for_window(&self.windows[slot], self.config.wipe_spacing_m);
        for point in pattern.points().iter().skip(self.cursor.wipe_leg) {
            match self.navigate(point.approach_point(self.config.standoff_m)) {
                NavAck::Ack => self.cursor.wipe_leg += 1,
                NavAck::Timeout => {
                    return ControlFlow::Break(self.record_fault(
                        FaultKind::NavigationTimeout,
                        MissionError::NavigationTimeout,
                    ));
                }
            }
        }
        ControlFlow::Continue(())
    }

    fn advance_cursor(&mut self) -> Option<Trigger> {
        self.cursor = RouteCursor {
            index: self.cursor.index + 1,
            ..RouteCursor::default()
        };
        if self.cursor.index >= self.route.len() {
            return self.fire(Trigger::RouteComplete);
        }
        None
    }

    fn step_returning(&mut self) -> Option<Trigger> {
        let home = self.drone.home_position();
        let target = home.with_altitude(self.drone.position().z);
        match self.navigate(target) {
            NavAck::Ack => self.fire(Trigger::ReachedHome),
            NavAck::Timeout => {
                self.record_fault(FaultKind::NavigationTimeout, MissionError::NavigationTimeout)
            }
        }
    }

    fn step_landing(&mut self) -> Option<Trigger> {
        match self.navigate(self.drone.home_position()) {
            NavAck::Ack => self.fire(Trigger::TouchdownConfirmed),
            NavAck::Timeout => {
                self.record_fault(FaultKind::NavigationTimeout, MissionError::NavigationTimeout)
            }
        }
    }

    fn step_emergency(&mut self) -> Option<Trigger> {
        let ground = self.drone.home_position().z;
        let target = self.drone.position().with_altitude(ground);
        match self.navigate(target) {
            NavAck::Ack => self.fire(Trigger::LandingComplete),
            NavAck::Timeout => {
                self.record_fault(FaultKind::NavigationTimeout, MissionError::NavigationTimeout)
            }
        }
    }

    /// Leave service once both resources are full
    fn after_service(&mut self) {
        self.last_report = self.monitor.assess(&self.drone);
        if self.mode() == Mode::Maintenance && self.drone.is_fully_serviced() {
            self.safety.reset();
            self.last_error = None;
            self.fire(Trigger::RechargeAndRefillComplete);
        }
    }
}

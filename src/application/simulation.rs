use crate::domain::Automaton;

/// Simulation drives an automaton on a fixed frame budget and interval.
/// This is the application layer between the renderer's clock and the
/// domain's `step`.
pub struct Simulation {
    automaton: Automaton,
    frames_remaining: u64,
    interval: f32,
    update_timer: f32,
    pub is_running: bool,
    pub last_step_time_ms: f32,
}

impl Simulation {
    /// Run `steps` generations, one every `interval` seconds
    pub fn new(automaton: Automaton, steps: u64, interval: f32) -> Self {
        Self {
            automaton,
            frames_remaining: steps,
            interval: interval.max(0.0),
            update_timer: 0.0,
            is_running: true,
            last_step_time_ms: 0.0,
        }
    }

    pub fn automaton(&self) -> &Automaton {
        &self.automaton
    }

    pub const fn frames_remaining(&self) -> u64 {
        self.frames_remaining
    }

    /// True once the frame budget is spent
    pub const fn is_finished(&self) -> bool {
        self.frames_remaining == 0
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        self
    }

    /// Advance the clock by `delta_time` seconds, stepping the automaton
    /// at most once when the interval has elapsed
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.is_running || self.is_finished() {
            return self;
        }

        self.update_timer += delta_time;
        if self.update_timer >= self.interval {
            let start = std::time::Instant::now();
            self.automaton.step();
            self.last_step_time_ms = start.elapsed().as_secs_f32() * 1000.0;

            self.frames_remaining -= 1;
            self.update_timer = 0.0;
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn simulation(steps: u64, interval: f32) -> Simulation {
        Simulation::new(Automaton::discrete(5, 5).unwrap(), steps, interval)
    }

    #[test]
    fn test_waits_for_interval() {
        let sim = simulation(10, 0.5).tick(0.2);
        assert_eq!(sim.automaton().generation(), 0);
        let sim = sim.tick(0.3);
        assert_eq!(sim.automaton().generation(), 1);
        assert_eq!(sim.frames_remaining(), 9);
    }

    #[test]
    fn test_stops_after_budget() {
        let mut sim = simulation(3, 0.0);
        for _ in 0..10 {
            sim = sim.tick(0.016);
        }
        assert!(sim.is_finished());
        assert_eq!(sim.automaton().generation(), 3);
    }

    #[test]
    fn test_paused_does_not_step() {
        let sim = simulation(3, 0.0).toggle_running().tick(1.0);
        assert_eq!(sim.automaton().generation(), 0);
        let sim = sim.toggle_running().tick(1.0);
        assert_eq!(sim.automaton().generation(), 1);
    }

    #[test]
    fn test_zero_steps_is_finished() {
        let sim = simulation(0, 0.1).tick(1.0);
        assert!(sim.is_finished());
        assert_eq!(sim.automaton().generation(), 0);
    }
}

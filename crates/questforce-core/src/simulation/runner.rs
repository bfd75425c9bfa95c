//! Drives a shared simulation on a timer.

use std::{sync::Arc, time::Duration};

use log::{debug, info};
use rand::{rngs::StdRng, SeedableRng};
use tokio::{
    sync::{watch, RwLock},
    task::JoinHandle,
    time::{self, MissedTickBehavior},
};

use super::Simulation;

/// Shortest interval the runner accepts.
const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Spawns the background tick task.
pub struct SimulationRunner;

impl SimulationRunner {
    /// Starts ticking `sim` every `interval` with an entropy-seeded RNG.
    ///
    /// Must be called from within a tokio runtime. The first tick happens one
    /// full interval after spawning.
    pub fn spawn(sim: Arc<RwLock<Simulation>>, interval: Duration) -> SimulationHandle {
        Self::spawn_with_rng(sim, interval, StdRng::from_entropy())
    }

    /// Like [`spawn`](Self::spawn) with a caller-supplied RNG.
    pub fn spawn_with_rng(
        sim: Arc<RwLock<Simulation>>,
        interval: Duration,
        mut rng: StdRng,
    ) -> SimulationHandle {
        let interval = interval.max(MIN_INTERVAL);
        info!("Starting simulation runner with {interval:?} interval");

        let (ticks_tx, ticks_rx) = watch::channel(0);
        let task = tokio::spawn(async move {
            let mut ticker = time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let ticks = {
                    let mut sim = sim.write().await;
                    sim.tick(&mut rng);
                    sim.ticks()
                };
                debug!("Simulation tick {ticks}");
                ticks_tx.send_replace(ticks);
            }
        });

        SimulationHandle {
            task,
            ticks: ticks_rx,
        }
    }
}

/// Owns the running tick task. Dropping the handle stops it.
#[derive(Debug)]
pub struct SimulationHandle {
    task: JoinHandle<()>,
    ticks: watch::Receiver<u64>,
}

impl SimulationHandle {
    /// Stops the tick task.
    pub fn stop(self) {
        drop(self);
    }

    /// Waits until the simulation has ticked at least `n` times in total.
    ///
    /// Returns `false` if the task ended before getting there.
    pub async fn wait_for_ticks(&mut self, n: u64) -> bool {
        self.ticks.wait_for(|ticks| *ticks >= n).await.is_ok()
    }
}

impl Drop for SimulationHandle {
    fn drop(&mut self) {
        self.task.abort();
        debug!("Simulation runner stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{clock::ManualClock, simulation::SimulationConfig};

    fn shared_simulation() -> Arc<RwLock<Simulation>> {
        let sim = Simulation::new(SimulationConfig::default(), Arc::new(ManualClock::default()));
        Arc::new(RwLock::new(sim))
    }

    #[tokio::test(start_paused = true)]
    async fn test_runner_ticks_on_interval() {
        let sim = shared_simulation();
        let _handle =
            SimulationRunner::spawn_with_rng(sim.clone(), Duration::from_secs(2), StdRng::seed_from_u64(1));

        time::sleep(Duration::from_millis(6_500)).await;
        assert_eq!(sim.read().await.ticks(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_handle_stops_ticks() {
        let sim = shared_simulation();
        let handle =
            SimulationRunner::spawn_with_rng(sim.clone(), Duration::from_secs(2), StdRng::seed_from_u64(1));

        time::sleep(Duration::from_millis(4_500)).await;
        drop(handle);
        let ticks = sim.read().await.ticks();
        assert_eq!(ticks, 2);

        time::sleep(Duration::from_secs(20)).await;
        assert_eq!(sim.read().await.ticks(), ticks);
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_for_ticks() {
        let sim = shared_simulation();
        let mut handle = SimulationRunner::spawn(sim.clone(), Duration::from_millis(250));

        assert!(handle.wait_for_ticks(4).await);
        assert!(sim.read().await.ticks() >= 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_finishes_task() {
        let sim = shared_simulation();
        let handle = SimulationRunner::spawn(sim.clone(), Duration::from_secs(1));
        handle.stop();

        time::sleep(Duration::from_secs(5)).await;
        assert_eq!(sim.read().await.ticks(), 0);
    }
}

//! Headless frame loop
//!
//! Each frame fires the active emitters, then steps the grid once; the same
//! order an interactive host uses with held mouse buttons.

use std::path::{Path, PathBuf};

use anyhow::Result;

use super::{InputScript, PixelRenderer};
use crate::config::ElementsConfig;
use crate::prelude::*;

/// Summary of a finished run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub frames: u64,
    pub seed: u64,
    pub sand: usize,
    pub water: usize,
    /// Moves and swaps summed over every frame
    pub totals: StepStats,
    pub image_path: Option<PathBuf>,
}

/// Runs a simulation against an input script without a window
pub struct HeadlessRunner {
    sim: Simulation,
    script: InputScript,
    seed: u64,
    frames: u64,
    log_interval: u64,
    totals: StepStats,
}

impl HeadlessRunner {
    pub fn new(config: &ElementsConfig, script: InputScript) -> Result<Self> {
        config.validate()?;

        let seed = config.simulation.seed.unwrap_or_else(rand::random);
        let sim = Simulation::new(config.grid.width, config.grid.height, seed)?;
        log::info!(
            "Created {}x{} grid, seed {}, {} emitter(s)",
            config.grid.width,
            config.grid.height,
            seed,
            script.emitters.len()
        );
        for emitter in &script.emitters {
            log::debug!("Emitter: {}", emitter);
        }

        Ok(Self {
            sim,
            script,
            seed,
            frames: config.simulation.frames,
            log_interval: config.simulation.log_interval,
            totals: StepStats::default(),
        })
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    /// Fire emitters and advance one frame
    pub fn run_frame(&mut self) -> StepStats {
        self.script.apply(&mut self.sim);
        let stats = self.sim.step();
        self.totals += stats;

        let frame = self.sim.frame();
        if frame % self.log_interval == 0 {
            let grid = self.sim.grid();
            log::info!(
                "Frame {}/{}: {} sand, {} water, {} moved, {} swapped",
                frame,
                self.frames,
                grid.count(MaterialKind::Sand),
                grid.count(MaterialKind::Water),
                stats.moved,
                stats.swapped
            );
        }
        stats
    }

    /// Run every remaining frame, then optionally write the last one as PNG
    pub fn run(mut self, image_path: Option<&Path>) -> Result<RunReport> {
        while self.sim.frame() < self.frames {
            self.run_frame();
        }

        if let Some(path) = image_path {
            let grid = self.sim.grid();
            let mut renderer = PixelRenderer::new(grid.width(), grid.height());
            renderer.render(grid);
            renderer.save_png(path)?;
            log::info!("Saved final frame to {}", path.display());
        }

        let grid = self.sim.grid();
        Ok(RunReport {
            frames: self.sim.frame(),
            seed: self.seed,
            sand: grid.count(MaterialKind::Sand),
            water: grid.count(MaterialKind::Water),
            totals: self.totals,
            image_path: image_path.map(Path::to_path_buf),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config(frames: u64) -> ElementsConfig {
        let mut config = ElementsConfig::default();
        config.grid.width = 64;
        config.grid.height = 48;
        config.simulation.frames = frames;
        config.simulation.seed = Some(1234);
        config.simulation.log_interval = 10;
        config
    }

    #[test]
    fn test_run_reaches_frame_count() {
        let config = small_config(25);
        let runner = HeadlessRunner::new(&config, InputScript::default_for(64, 48)).unwrap();

        let report = runner.run(None).unwrap();

        assert_eq!(report.frames, 25);
        assert_eq!(report.seed, 1234);
        assert!(report.sand > 0);
        assert!(report.water > 0);
        assert!(report.totals.moved > 0);
        assert_eq!(report.image_path, None);
    }

    #[test]
    fn test_empty_script_stays_idle() {
        let config = small_config(10);
        let report = HeadlessRunner::new(&config, InputScript::default())
            .unwrap()
            .run(None)
            .unwrap();

        assert_eq!(report.sand + report.water, 0);
        assert!(report.totals.is_idle());
    }

    #[test]
    fn test_same_seed_same_report() {
        let config = small_config(30);
        let script = InputScript::default_for(64, 48);

        let a = HeadlessRunner::new(&config, script.clone()).unwrap().run(None).unwrap();
        let b = HeadlessRunner::new(&config, script).unwrap().run(None).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn test_run_frame_counts_only_its_own_moves() {
        let config = small_config(5);
        let mut runner = HeadlessRunner::new(&config, InputScript::default_for(64, 48)).unwrap();

        let first = runner.run_frame();
        let second = runner.run_frame();

        assert_eq!(runner.simulation().frame(), 2);
        assert_eq!(runner.totals.moved, first.moved + second.moved);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = small_config(5);
        config.grid.height = 0;
        assert!(HeadlessRunner::new(&config, InputScript::default()).is_err());
    }

    #[test]
    fn test_run_writes_image() {
        let config = small_config(15);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");

        let report = HeadlessRunner::new(&config, InputScript::default_for(64, 48))
            .unwrap()
            .run(Some(&path))
            .unwrap();

        assert_eq!(report.image_path.as_deref(), Some(path.as_path()));
        let img = image::open(&path).unwrap();
        assert_eq!((img.width(), img.height()), (64, 48));
    }
}

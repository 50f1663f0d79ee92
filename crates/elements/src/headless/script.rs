//! Scripted input - emitters standing in for held mouse buttons

use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// A cursor that keeps a tool pressed over a range of frames
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Emitter {
    #[serde(default)]
    pub tool: ToolKind,
    pub material: MaterialKind,
    pub x: i32,
    pub y: i32,
    /// First frame the emitter fires on
    #[serde(default)]
    pub start_frame: u64,
    /// Frame the emitter stops before; runs forever when unset
    #[serde(default)]
    pub end_frame: Option<u64>,
}

impl Emitter {
    /// Emitter that sprays from the first frame on
    pub fn spray(material: MaterialKind, x: i32, y: i32) -> Self {
        Self {
            tool: ToolKind::Spray,
            material,
            x,
            y,
            start_frame: 0,
            end_frame: None,
        }
    }

    pub fn cursor(&self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    pub fn is_active(&self, frame: u64) -> bool {
        frame >= self.start_frame && self.end_frame.map_or(true, |end| frame < end)
    }
}

impl fmt::Display for Emitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} at ({}, {})", self.tool.name(), self.material, self.x, self.y)?;
        match self.end_frame {
            Some(end) => write!(f, ", frames {}..{}", self.start_frame, end),
            None => write!(f, ", from frame {}", self.start_frame),
        }
    }
}

/// The full set of emitters for a run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputScript {
    pub emitters: Vec<Emitter>,
}

impl InputScript {
    /// Sand poured on the left third, water on the right third
    pub fn default_for(width: usize, height: usize) -> Self {
        let w = width as i32;
        let h = height as i32;
        Self {
            emitters: vec![
                Emitter::spray(MaterialKind::Sand, w / 3, h / 4),
                Emitter::spray(MaterialKind::Water, 2 * w / 3, h / 4),
            ],
        }
    }

    /// Parse a script from RON text
    pub fn from_ron(text: &str) -> Result<Self> {
        let script: Self = ron::from_str(text).context("Failed to parse input script")?;
        Ok(script.sanitized())
    }

    /// Read and parse a RON script file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input script {}", path.display()))?;
        Self::from_ron(&text)
    }

    /// Drop emitters that can never place anything
    pub fn sanitized(mut self) -> Self {
        self.emitters.retain(|emitter| {
            if !emitter.material.is_spawnable() {
                log::warn!("Ignoring emitter {}: material cannot be spawned", emitter);
                return false;
            }
            if emitter.end_frame.is_some_and(|end| end <= emitter.start_frame) {
                log::warn!("Ignoring emitter {}: frame range is empty", emitter);
                return false;
            }
            true
        });
        self
    }

    /// Fire every emitter active on the current frame
    pub fn apply<R: GridRng>(&self, sim: &mut Simulation<R>) -> usize {
        let frame = sim.frame();
        self.emitters
            .iter()
            .filter(|emitter| emitter.is_active(frame))
            .map(|emitter| sim.apply_tool(&emitter.tool, emitter.cursor(), emitter.material))
            .sum()
    }
}

//! An open network: its definition, running controller and history.

use std::path::{Path, PathBuf};
use std::time::Duration;

use tk_project::schema::NetworkDef;
use tk_sim::{Command, SimController, SimSnapshot};

use crate::error::{AppError, AppResult};
use crate::history::VolumeHistory;
use crate::runtime_compile::{NetworkRuntime, compile_network};

/// Where the current definition came from.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionSource {
    Preset(String),
    File(PathBuf),
}

/// The single live simulation driven by the front-end.
#[derive(Debug, Clone)]
pub struct Session {
    definition: NetworkDef,
    source: SessionSource,
    runtime: NetworkRuntime,
    history: VolumeHistory,
}

impl Session {
    pub fn from_definition(definition: NetworkDef, source: SessionSource) -> AppResult<Self> {
        let runtime = compile_network(&definition)?;
        let mut session = Self {
            definition,
            source,
            runtime,
            history: VolumeHistory::default(),
        };
        session.record();
        Ok(session)
    }

    pub fn from_preset(name: &str) -> AppResult<Self> {
        let definition =
            tk_project::preset(name).ok_or_else(|| AppError::UnknownPreset(name.to_string()))?;
        Self::from_definition(definition, SessionSource::Preset(name.to_string()))
    }

    /// Load a YAML or JSON definition from disk.
    pub fn open(path: &Path) -> AppResult<Self> {
        let definition = tk_project::load(path).map_err(|e| AppError::Load {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        tracing::info!(path = %path.display(), network = %definition.name, "network loaded");
        Self::from_definition(definition, SessionSource::File(path.to_path_buf()))
    }

    /// Write the definition, with the current multipliers, to disk.
    ///
    /// Tank volumes are not written; a saved network always starts from its
    /// initial volumes.
    pub fn save_definition(&self, path: &Path) -> AppResult<()> {
        let definition = self.current_definition();
        tk_project::save(path, &definition).map_err(|e| AppError::Save {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        tracing::info!(path = %path.display(), "network saved");
        Ok(())
    }

    /// Definition with each edge's multiplier taken from the live controller.
    pub fn current_definition(&self) -> NetworkDef {
        let mut definition = self.definition.clone();
        for edge in &mut definition.edges {
            let live = self
                .runtime
                .edge_id(&edge.id)
                .and_then(|id| Ok(self.runtime.controller.edge(id)?.multiplier));
            if let Ok(multiplier) = live {
                edge.multiplier = multiplier;
            }
        }
        definition
    }

    pub fn name(&self) -> &str {
        &self.runtime.name
    }

    pub fn source(&self) -> &SessionSource {
        &self.source
    }

    pub fn definition(&self) -> &NetworkDef {
        &self.definition
    }

    pub fn controller(&self) -> &SimController {
        &self.runtime.controller
    }

    pub fn history(&self) -> &VolumeHistory {
        &self.history
    }

    pub fn snapshot(&self) -> SimSnapshot {
        self.runtime.controller.snapshot()
    }

    /// Apply a command; a reset also clears the history.
    pub fn apply(&mut self, command: Command) -> AppResult<()> {
        self.runtime.controller.apply(command)?;
        match command {
            Command::Reset => {
                self.history.clear();
                self.record();
            }
            Command::Fill(_) | Command::Empty(_) => {
                let snapshot = self.runtime.controller.snapshot();
                self.history.record_override(&snapshot);
            }
            _ => self.record(),
        }
        Ok(())
    }

    pub fn fill(&mut self, tank: &str) -> AppResult<()> {
        let id = self.runtime.tank_id(tank)?;
        self.apply(Command::Fill(id))
    }

    pub fn empty(&mut self, tank: &str) -> AppResult<()> {
        let id = self.runtime.tank_id(tank)?;
        self.apply(Command::Empty(id))
    }

    pub fn set_multiplier(&mut self, edge: &str, multiplier: f64) -> AppResult<()> {
        let id = self.runtime.edge_id(edge)?;
        self.apply(Command::SetMultiplier(id, multiplier))
    }

    /// Advance by one frame of wall-clock time. Returns ticks applied.
    pub fn frame(&mut self, elapsed: Duration) -> u32 {
        let applied = self.runtime.controller.advance(elapsed);
        if applied > 0 {
            self.record();
        }
        applied
    }

    fn record(&mut self) {
        let snapshot = self.runtime.controller.snapshot();
        self.history.record(&snapshot);
    }
}

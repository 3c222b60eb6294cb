//! Network definition schema.

use serde::{Deserialize, Serialize};
use tk_core::{DEFAULT_BASE_RATE, DEFAULT_CAPACITY, DEFAULT_TICK_PERIOD_MS, MULTIPLIER_DEFAULT};

pub const LATEST_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NetworkDef {
    pub version: u32,
    pub name: String,
    #[serde(default = "default_tick_period_ms")]
    pub tick_period_ms: u64,
    #[serde(default = "default_base_rate")]
    pub base_rate: f64,
    #[serde(default)]
    pub scene: SceneDef,
    #[serde(default)]
    pub tanks: Vec<TankDef>,
    /// Evaluated in this order every tick.
    #[serde(default)]
    pub edges: Vec<EdgeDef>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SceneDef {
    pub width: f32,
    pub height: f32,
}

impl Default for SceneDef {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 650.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TankDef {
    pub id: String,
    pub name: String,
    #[serde(default = "default_capacity")]
    pub capacity: f64,
    #[serde(default)]
    pub initial_volume: f64,
    pub rect: RectDef,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RectDef {
    pub x: f32,
    pub y: f32,
    #[serde(default = "default_tank_width")]
    pub width: f32,
    #[serde(default = "default_tank_height")]
    pub height: f32,
}

impl RectDef {
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            width: default_tank_width(),
            height: default_tank_height(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EdgeDef {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub from: String,
    pub to: String,
    #[serde(default = "default_multiplier")]
    pub multiplier: f64,
    /// Explicit pipe polyline; routed automatically when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<Vec<[f32; 2]>>,
}

impl EdgeDef {
    pub fn new(id: impl Into<String>, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            from: from.into(),
            to: to.into(),
            multiplier: default_multiplier(),
            route: None,
        }
    }

    /// Display label: the explicit name, or `from -> to`.
    pub fn label(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("{} -> {}", self.from, self.to))
    }
}

impl NetworkDef {
    pub fn tank(&self, id: &str) -> Option<&TankDef> {
        self.tanks.iter().find(|t| t.id == id)
    }

    pub fn edge(&self, id: &str) -> Option<&EdgeDef> {
        self.edges.iter().find(|e| e.id == id)
    }
}

fn default_tick_period_ms() -> u64 {
    DEFAULT_TICK_PERIOD_MS
}

fn default_base_rate() -> f64 {
    DEFAULT_BASE_RATE
}

fn default_capacity() -> f64 {
    DEFAULT_CAPACITY
}

fn default_multiplier() -> f64 {
    MULTIPLIER_DEFAULT
}

fn default_tank_width() -> f32 {
    100.0
}

fn default_tank_height() -> f32 {
    140.0
}

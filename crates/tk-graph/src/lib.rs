//! tk-graph: tank network topology for tankflow.
//!
//! Provides:
//! - Tank and flow-edge data structures (`TankNode`, `Edge`, `Network`)
//! - Incremental network builder with validation
//! - Planar geometry and orthogonal pipe routing
//!
//! # Example
//!
//! ```
//! use tk_graph::{NetworkBuilder, Rect};
//!
//! let mut builder = NetworkBuilder::new();
//! let t1 = builder.add_tank("Tank 1", Rect::new(50.0, 50.0, 100.0, 140.0));
//! let t2 = builder.add_tank("Tank 2", Rect::new(300.0, 200.0, 100.0, 140.0));
//! builder.add_edge("Pipe 1", t1, t2);
//! let network = builder.build().unwrap();
//!
//! assert_eq!(network.tanks().len(), 2);
//! assert_eq!(network.edges().len(), 1);
//! ```

pub mod builder;
pub mod error;
pub mod geometry;
pub mod graph;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use builder::NetworkBuilder;
pub use error::{GraphError, GraphResult};
pub use geometry::{Point, Rect, elbow_route, normalize_orthogonal};
pub use graph::{Edge, Network, TankNode};

//! Layered layout for flow diagrams.
//!
//! Given labeled nodes and directed, optionally labeled edges, `strata` computes
//! which row every node occupies so the graph can be rendered as a top-down
//! flowchart without manual coordinate authoring. Disconnected components,
//! cycles, multi-parent convergence, and nodes unreachable from any source all
//! produce a deterministic, total row assignment in one pass.
//!
//! The graph container lives in [`strata_graphlib`], re-exported here as
//! [`graphlib`]. Rendering is an external collaborator: it drives
//! [`plan::RenderPlan`] to walk rows and connectors, and decides pixels,
//! styling per [`graphlib::NodeKind`], and how back-edges are drawn.
//!
//! ```
//! use strata::graphlib::{Edge, Graph, Node, NodeKind};
//!
//! let graph = Graph::build(
//!     vec![
//!         Node::new("start", "Start", NodeKind::Start),
//!         Node::new("work", "Do the thing", NodeKind::Process),
//!     ],
//!     vec![Edge::new("start", "work")],
//! );
//! let layout = strata::assign_levels(&graph);
//! assert_eq!(layout.level_of("start"), Some(0));
//! assert_eq!(layout.level_of("work"), Some(1));
//! ```

pub use strata_graphlib as graphlib;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod dump;
pub mod level;
pub mod plan;

pub use level::{Layout, assign_levels};
pub use plan::{Connector, ConnectorKind, RenderPlan, Row};

//! rosmodel core library: node graph introspection and model assembly.
//!
//! This library resolves a node name against the live graph, collects the
//! node's interfaces (topics, services, actions) and declared parameters,
//! and assembles them into a [`NodeModel`] ready for rendering. Discovery
//! and parameter access go through the narrow [`NodeGraph`] and
//! [`ParameterService`] seams; [`GraphDir`] is the presence-file backend.

pub mod collect;
pub mod error;
pub mod graph;
pub mod model;
pub mod presence;

pub use error::{ModelError, Result};
pub use graph::{NodeGraph, ParameterService};
pub use model::{InterfaceRecord, NodeModel, ParameterDescriptor, ParameterKind};
pub use presence::{GraphDir, NodePresence};

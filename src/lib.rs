//! glint: a cursor-flash and navigation-ring library for embedding
//! editors.
//!
//! When the cursor makes a large jump, glint paints a fading horizontal
//! highlight at the landing position so the eye can find it, and
//! records the departure position in a bounded navigation ring the user
//! can walk back through.
//!
//! glint owns no UI. The host editor supplies windows, buffers,
//! annotations, timers, and events through the traits in [`host`] and
//! [`events`]; the [`engine::Glint`] engine drives them.
//!
//! ```no_run
//! use glint::{Config, Glint};
//!
//! let config = Config::load()?;
//! let mut engine = Glint::new(config)?;
//! // engine.enable(&mut bus);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod engine;
pub mod error;
pub mod events;
pub mod highlight;
pub mod host;
pub mod mark_ring;
pub mod ramp;
pub mod trigger;

/// Configuration types, re-exported from the `glint-config` crate.
pub mod config {
    pub use glint_config::{Color, Config, ConfigError, HighlightColor};
}

pub use config::{Color, Config, ConfigError, HighlightColor};
pub use engine::Glint;
pub use error::NavError;
pub use events::{EventBus, EventKind, HostEvent};
pub use highlight::HighlightEngine;
pub use host::{
    Annotation, AnnotationId, AnnotationShape, AnnotationSurface, BufferId, EditorOps,
    FadeScheduler, HostContext, Position, TimerId, WindowId,
};
pub use mark_ring::{MarkRing, TraversalDirection};
pub use trigger::{Snapshot, SuppressionPredicate, TriggerContext, TriggerPolicy};

#![forbid(unsafe_code)]

//! Resize engine for two-pane split layouts.
//!
//! A split-pane is a root element with three direct children: the first
//! pane, a draggable divider, and the second pane. Dragging the divider
//! moves the boundary between the panes; the engine keeps the first pane at
//! or above a configured minimum and writes absolute-positioning
//! declarations to all three children on every step.
//!
//! # Pipeline
//! - [`sampler`] reads orientation, divider thickness, and cursor once.
//! - [`ratio`] turns a pointer coordinate into a clamped first-pane share.
//! - [`template`] renders that share into per-region declarations.
//! - [`drag`] owns the press → move → release lifecycle.
//! - [`splitpane`] ties the above to one root; [`activation`] to a surface.

pub mod activation;
pub mod config;
pub mod drag;
pub mod orientation;
pub mod ratio;
pub mod sampler;
pub mod splitpane;
pub mod template;

pub use activation::{Activation, DispatchOutcome, SPLITPANE_MARKER};
pub use config::{
    ConfigError, ConfigOverrides, CursorDefaults, LayoutTemplates, RegionTemplates,
    SplitpaneConfig,
};
pub use drag::{DragEffect, DragPhase, DragTransition};
pub use orientation::{Orientation, VERTICAL_MARKER};
pub use ratio::{DragBounds, Ratio, compute_ratio};
pub use splitpane::{Splitpane, SplitpaneError, SplitpaneHooks};
pub use splitpane_core::geometry::Rect;
pub use template::{LayoutParameters, RenderedLayout, render};

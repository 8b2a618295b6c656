#![forbid(unsafe_code)]

//! Core: geometry, pointer events, and the surface seams the resize engine
//! talks through.
//!
//! # Role in Splitpane
//! `splitpane-core` is the host-facing layer. It owns the pixel geometry
//! primitives, the canonical pointer/viewport events, the [`LayoutSurface`]
//! trait that abstracts an element tree, and the two pieces of shared
//! single-threaded plumbing the engine uses: scoped pointer listeners and
//! viewport observers.
//!
//! # How it fits in the system
//! `splitpane-layout` consumes these types to sample geometry, run the drag
//! machine, and push inline styles back into the surface.
//!
//! [`LayoutSurface`]: surface::LayoutSurface

pub mod event;
pub mod geometry;
pub mod listener;
pub mod surface;
pub mod viewport;

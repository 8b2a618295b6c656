#![forbid(unsafe_code)]

//! One resize engine per split-pane root.
//!
//! A [`Splitpane`] is built over a root element with exactly three direct
//! children: the first pane, the divider, and the second pane. Construction
//! samples geometry once (orientation, minimum extent, divider thickness and
//! cursor), derives the initial ratio from the first pane's rendered size,
//! and writes an initial layout. From then on it reacts to pointer events on
//! the divider and re-renders on every drag step.
//!
//! # Stale bounds during resize
//!
//! A drag works against the container bounds captured when it started.
//! [`Splitpane::resize`] refreshes the cached container rect for the *next*
//! drag; an in-flight drag keeps its snapshot.
//!
//! # Hitting the divider
//!
//! A press starts a drag when it lands on the divider band as last laid out:
//! the rendered ratio's offset along the split axis, widened by half the
//! divider thickness on each side, spanning the container across the axis.
//! The divider's own reported box is not consulted, so hosts that do not
//! reflow after a style write still track the drawn divider.
//!
//! # Pixel padding
//!
//! Pane sizes are percentages and survive container resizes unchanged. The
//! half-thickness padding is in pixels and is fixed at construction.

use std::fmt;

use splitpane_core::event::{Event, MouseEventKind};
use splitpane_core::geometry::Rect;
use splitpane_core::listener::ListenerRegistry;
use splitpane_core::surface::{LayoutSurface, NodeId};
use splitpane_core::viewport::{ViewportChange, ViewportObservers};
use tracing::{debug, info, trace};

use crate::config::{RegionTemplates, SplitpaneConfig};
use crate::drag::{DragInput, DragMachine, DragTransition};
use crate::orientation::Orientation;
use crate::ratio::{DragBounds, Ratio};
use crate::sampler::{GeometrySample, Regions};
use crate::template::{LayoutParameters, RenderedLayout, render};

/// Number of direct children a split-pane root must have.
pub const REGION_COUNT: usize = 3;

/// Errors from constructing a [`Splitpane`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitpaneError {
    /// The root is not on the surface.
    UnknownNode(NodeId),
    /// The root does not have exactly three direct children.
    MissingRegions { root: NodeId, found: usize },
}

impl fmt::Display for SplitpaneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownNode(node) => write!(f, "node {node} is not on the surface"),
            Self::MissingRegions { root, found } => write!(
                f,
                "split-pane root {root} needs {REGION_COUNT} direct children, found {found}"
            ),
        }
    }
}

impl std::error::Error for SplitpaneError {}

/// Shared single-threaded plumbing an instance plugs into.
#[derive(Debug, Clone, Default)]
pub struct SplitpaneHooks {
    /// Where drag listeners are registered.
    pub listeners: ListenerRegistry,
    /// Who hears about finished drags.
    pub viewport: ViewportObservers,
}

/// Resize engine for one split-pane root.
#[derive(Debug)]
pub struct Splitpane {
    root: NodeId,
    regions: Regions,
    orientation: Orientation,
    min_extent: f64,
    container: Rect,
    thickness: f64,
    cursor: String,
    ratio: Ratio,
    templates: RegionTemplates,
    drag: DragMachine,
    viewport: ViewportObservers,
}

impl Splitpane {
    /// Build the engine for `root` and render its initial layout.
    ///
    /// The starting ratio is the first pane's rendered share clamped through
    /// the drag bounds, so a pre-rendered pane outside them snaps to the limit.
    pub fn new<S: LayoutSurface + ?Sized>(
        surface: &mut S,
        root: NodeId,
        config: &SplitpaneConfig,
        hooks: SplitpaneHooks,
    ) -> Result<Self, SplitpaneError> {
        let children = surface
            .children(root)
            .ok_or(SplitpaneError::UnknownNode(root))?;
        let [first, divider, second] = <[NodeId; REGION_COUNT]>::try_from(children.as_slice())
            .map_err(|_| SplitpaneError::MissingRegions {
                root,
                found: children.len(),
            })?;
        let regions = Regions {
            first,
            divider,
            second,
        };

        let sample = GeometrySample::capture(&*surface, root, &regions, config);
        let first_extent = sample.orientation.extent(&surface.bounding_rect(first));
        let initial = DragBounds::capture(&sample.container, sample.min_extent, sample.orientation)
            .ratio_for_local(first_extent);
        let pane = Self {
            root,
            regions,
            orientation: sample.orientation,
            min_extent: sample.min_extent,
            container: sample.container,
            thickness: sample.thickness,
            cursor: sample.cursor,
            ratio: initial,
            templates: config.templates.for_orientation(sample.orientation).clone(),
            drag: DragMachine::new(hooks.listeners),
            viewport: hooks.viewport,
        };

        info!(
            %root,
            orientation = ?pane.orientation,
            min_extent = pane.min_extent,
            thickness = pane.thickness,
            cursor = %pane.cursor,
            ratio = initial.value(),
            "split-pane ready"
        );
        pane.write_layout(surface, initial);
        Ok(pane)
    }

    /// Root element.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        self.root
    }

    /// The three managed regions.
    #[must_use]
    pub const fn regions(&self) -> Regions {
        self.regions
    }

    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Minimum first-pane extent along the split axis.
    #[must_use]
    pub const fn min_extent(&self) -> f64 {
        self.min_extent
    }

    /// Last-sampled container rect.
    #[must_use]
    pub const fn container(&self) -> Rect {
        self.container
    }

    /// Divider thickness along the split axis.
    #[must_use]
    pub const fn thickness(&self) -> f64 {
        self.thickness
    }

    /// Divider cursor.
    #[must_use]
    pub fn cursor(&self) -> &str {
        &self.cursor
    }

    /// Ratio of the layout last written to the surface.
    #[must_use]
    pub const fn ratio(&self) -> Ratio {
        self.ratio
    }

    /// Divider band as last laid out, in surface coordinates.
    #[must_use]
    pub fn divider_band(&self) -> Rect {
        let container = self.container;
        let offset = self.orientation.origin(&container)
            + self.ratio.value() * self.orientation.extent(&container)
            - self.thickness / 2.0;
        match self.orientation {
            Orientation::Vertical => {
                Rect::new(container.x, offset, container.width, self.thickness)
            }
            Orientation::Horizontal => {
                Rect::new(offset, container.y, self.thickness, container.height)
            }
        }
    }

    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Bounds a drag starting now would work against.
    #[must_use]
    pub fn bounds(&self) -> DragBounds {
        DragBounds::capture(&self.container, self.min_extent, self.orientation)
    }

    /// Render parameters for `ratio` with this instance's divider.
    #[must_use]
    pub fn layout_parameters(&self, ratio: Ratio) -> LayoutParameters {
        LayoutParameters::new(ratio.value(), self.thickness, self.cursor.as_str())
    }

    /// Declarations for `ratio`, without applying them.
    #[must_use]
    pub fn layout(&self, ratio: Ratio) -> RenderedLayout {
        render(&self.templates, &self.layout_parameters(ratio).params())
    }

    /// Re-sample the container rect. Does not re-render.
    pub fn resize<S: LayoutSurface + ?Sized>(&mut self, surface: &S) {
        self.container = surface.bounding_rect(self.root);
        trace!(root = %self.root, container = ?self.container, "container re-sampled");
    }

    /// Clamp `ratio` through the current bounds and render it.
    ///
    /// Returns the ratio actually rendered.
    pub fn apply_ratio<S: LayoutSurface + ?Sized>(&mut self, surface: &mut S, ratio: f64) -> Ratio {
        let bounds = self.bounds();
        let clamped = bounds.ratio_for_local(ratio * bounds.extent);
        self.render_ratio(surface, clamped);
        clamped
    }

    /// Feed one host event.
    ///
    /// Pointer and focus events drive the drag machine and yield its
    /// transition. A viewport resize re-samples the container and yields
    /// `None`, as does a focus gain.
    pub fn handle_event<S: LayoutSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        event: &Event,
    ) -> Option<DragTransition> {
        let input = match event {
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(_) => DragInput::Press {
                    on_divider: self.divider_band().contains(mouse.x, mouse.y),
                    bounds: self.bounds(),
                },
                MouseEventKind::Up(_) => DragInput::Release,
                MouseEventKind::Moved | MouseEventKind::Drag(_) => DragInput::Move {
                    coordinate: self.orientation.coordinate(mouse.x, mouse.y),
                },
            },
            Event::Focus(false) => DragInput::Lost,
            Event::Focus(true) => return None,
            Event::Resize { .. } => {
                self.resize(&*surface);
                return None;
            }
        };

        let transition = self.drag.apply(input);
        if let Some(ratio) = transition.ratio() {
            self.render_ratio(surface, ratio);
        }
        if transition.finished_drag() {
            self.notify_viewport();
        }
        Some(transition)
    }

    /// End an in-flight drag without a release.
    pub fn cancel_drag(&mut self) -> Option<DragTransition> {
        let transition = self.drag.force_cancel()?;
        self.notify_viewport();
        Some(transition)
    }

    fn render_ratio<S: LayoutSurface + ?Sized>(&mut self, surface: &mut S, ratio: Ratio) {
        self.ratio = ratio;
        self.write_layout(surface, ratio);
    }

    fn write_layout<S: LayoutSurface + ?Sized>(&self, surface: &mut S, ratio: Ratio) {
        let layout = self.layout(ratio);
        for (node, style) in self.regions.as_array().into_iter().zip(layout.as_array()) {
            surface.apply_style(node, style);
        }
    }

    fn notify_viewport(&self) {
        let notified = self.viewport.notify(&ViewportChange { source: self.root });
        debug!(root = %self.root, notified, "layout change broadcast");
    }
}

#![forbid(unsafe_code)]

//! Surface-wide activation of split-pane engines.
//!
//! [`Activation::activate`] builds one [`Splitpane`] for every element
//! carrying [`SPLITPANE_MARKER`], in document order, all sharing one
//! listener registry and one set of viewport observers. When at least one
//! instance exists and the config does not `disable` it, host viewport
//! resizes re-sample every instance. A finished drag counts as a viewport
//! change too, so the same re-sampling follows it.

use splitpane_core::event::Event;
use splitpane_core::listener::ListenerRegistry;
use splitpane_core::surface::{LayoutSurface, NodeId};
use splitpane_core::viewport::ViewportObservers;
use tracing::{debug, info};

use crate::config::SplitpaneConfig;
use crate::drag::DragTransition;
use crate::splitpane::{Splitpane, SplitpaneError, SplitpaneHooks};

/// Marker class identifying split-pane roots.
pub const SPLITPANE_MARKER: &str = "splitpane";

/// What one dispatched event did across all instances.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DispatchOutcome {
    /// Transitions per instance root, in instance order.
    pub transitions: Vec<(NodeId, DragTransition)>,
    /// Whether the host should suppress the event's default action.
    pub prevent_default: bool,
    /// Whether instances re-sampled their containers.
    pub resized: bool,
}

/// Every split-pane engine on a surface.
#[derive(Debug)]
pub struct Activation {
    panes: Vec<Splitpane>,
    hooks: SplitpaneHooks,
    resize_wired: bool,
}

impl Activation {
    /// Activate every marked element with fresh hooks.
    pub fn activate<S: LayoutSurface + ?Sized>(
        surface: &mut S,
        config: &SplitpaneConfig,
    ) -> Result<Self, SplitpaneError> {
        Self::activate_with_hooks(surface, config, SplitpaneHooks::default())
    }

    /// Activate every marked element, plugging instances into `hooks`.
    pub fn activate_with_hooks<S: LayoutSurface + ?Sized>(
        surface: &mut S,
        config: &SplitpaneConfig,
        hooks: SplitpaneHooks,
    ) -> Result<Self, SplitpaneError> {
        let roots = surface.find_marked(SPLITPANE_MARKER);
        let panes = roots
            .into_iter()
            .map(|root| Splitpane::new(surface, root, config, hooks.clone()))
            .collect::<Result<Vec<_>, _>>()?;
        let resize_wired = !panes.is_empty() && !config.disable;
        info!(
            instances = panes.len(),
            resize_wired,
            "split-panes activated"
        );
        Ok(Self {
            panes,
            hooks,
            resize_wired,
        })
    }

    #[must_use]
    pub fn panes(&self) -> &[Splitpane] {
        &self.panes
    }

    pub fn panes_mut(&mut self) -> &mut [Splitpane] {
        &mut self.panes
    }

    /// Instance managing `root`.
    #[must_use]
    pub fn pane(&self, root: NodeId) -> Option<&Splitpane> {
        self.panes.iter().find(|pane| pane.root() == root)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.panes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.panes.is_empty()
    }

    /// Whether viewport resizes reach the instances.
    #[must_use]
    pub const fn resize_wired(&self) -> bool {
        self.resize_wired
    }

    /// Observers notified when a drag finishes.
    #[must_use]
    pub fn viewport(&self) -> &ViewportObservers {
        &self.hooks.viewport
    }

    /// Registry holding in-flight drag listeners.
    #[must_use]
    pub fn listeners(&self) -> &ListenerRegistry {
        &self.hooks.listeners
    }

    /// Re-sample every instance's container.
    pub fn resize_all<S: LayoutSurface + ?Sized>(&mut self, surface: &S) {
        for pane in &mut self.panes {
            pane.resize(surface);
        }
    }

    /// Route one host event to every instance.
    pub fn handle_event<S: LayoutSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        event: &Event,
    ) -> DispatchOutcome {
        let mut outcome = DispatchOutcome::default();
        if let Event::Resize { width, height } = event {
            if self.resize_wired {
                debug!(width, height, "viewport resized");
                self.resize_all(&*surface);
                outcome.resized = true;
            }
            return outcome;
        }

        let mut finished = false;
        for pane in &mut self.panes {
            if let Some(transition) = pane.handle_event(surface, event) {
                outcome.prevent_default |= transition.prevents_default();
                finished |= transition.finished_drag();
                outcome.transitions.push((pane.root(), transition));
            }
        }
        if finished && self.resize_wired {
            self.resize_all(&*surface);
            outcome.resized = true;
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use splitpane_core::geometry::Rect;
    use splitpane_core::surface::MemorySurface;

    fn add_pane(surface: &mut MemorySurface, rect: Rect) -> NodeId {
        let root = surface.insert_root(rect);
        surface.add_marker(root, SPLITPANE_MARKER);
        surface
            .insert_child(root, Rect::new(rect.x, rect.y, rect.width / 2.0, rect.height))
            .unwrap();
        surface.insert_child(root, Rect::default()).unwrap();
        surface.insert_child(root, Rect::default()).unwrap();
        root
    }

    #[test]
    fn activates_marked_roots_only() {
        let mut surface = MemorySurface::new();
        let a = add_pane(&mut surface, Rect::from_size(400.0, 300.0));
        surface.insert_root(Rect::from_size(10.0, 10.0));
        let b = add_pane(&mut surface, Rect::new(0.0, 300.0, 400.0, 300.0));
        let activation = Activation::activate(&mut surface, &SplitpaneConfig::default()).unwrap();
        assert_eq!(activation.len(), 2);
        assert!(activation.pane(a).is_some());
        assert!(activation.pane(b).is_some());
        assert!(activation.resize_wired());
    }

    #[test]
    fn empty_surface_does_not_wire_resize() {
        let mut surface = MemorySurface::new();
        let activation = Activation::activate(&mut surface, &SplitpaneConfig::default()).unwrap();
        assert!(activation.is_empty());
        assert!(!activation.resize_wired());
    }

    #[test]
    fn disable_skips_resize_wiring() {
        let mut surface = MemorySurface::new();
        let root = add_pane(&mut surface, Rect::from_size(400.0, 300.0));
        let config = SplitpaneConfig {
            disable: true,
            ..SplitpaneConfig::default()
        };
        let mut activation = Activation::activate(&mut surface, &config).unwrap();
        surface.set_rect(root, Rect::from_size(900.0, 300.0));
        let outcome = activation.handle_event(
            &mut surface,
            &Event::Resize {
                width: 900.0,
                height: 300.0,
            },
        );
        assert!(!outcome.resized);
        assert_eq!(activation.panes()[0].container().width, 400.0);
    }

    #[test]
    fn viewport_resize_resamples_every_instance() {
        let mut surface = MemorySurface::new();
        let a = add_pane(&mut surface, Rect::from_size(400.0, 300.0));
        let b = add_pane(&mut surface, Rect::new(0.0, 300.0, 400.0, 300.0));
        let mut activation = Activation::activate(&mut surface, &SplitpaneConfig::default()).unwrap();
        surface.set_rect(a, Rect::from_size(600.0, 300.0));
        surface.set_rect(b, Rect::new(0.0, 300.0, 700.0, 300.0));
        let outcome = activation.handle_event(
            &mut surface,
            &Event::Resize {
                width: 700.0,
                height: 600.0,
            },
        );
        assert!(outcome.resized);
        assert_eq!(activation.pane(a).unwrap().container().width, 600.0);
        assert_eq!(activation.pane(b).unwrap().container().width, 700.0);
    }

    #[test]
    fn malformed_root_fails_activation() {
        let mut surface = MemorySurface::new();
        let root = surface.insert_root(Rect::from_size(100.0, 100.0));
        surface.add_marker(root, SPLITPANE_MARKER);
        let err = Activation::activate(&mut surface, &SplitpaneConfig::default()).unwrap_err();
        assert_eq!(err, SplitpaneError::MissingRegions { root, found: 0 });
    }
}

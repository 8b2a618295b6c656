#![forbid(unsafe_code)]

//! Divider drag lifecycle.
//!
//! ```text
//! Idle --press on divider--> Dragging --release--> Idle
//!                               \------pointer lost------/
//! ```
//!
//! Entering `Dragging` snapshots the split-axis [`DragBounds`] and registers
//! one move and one up listener. Both registrations are owned by the active
//! drag, so every path back to `Idle` (release, pointer loss, a forced
//! cancel, or dropping the machine) releases them.
//!
//! The machine only decides; rendering the returned ratio and notifying
//! viewport observers is up to the owning instance.

use splitpane_core::listener::{ListenerGuard, ListenerKind, ListenerRegistry};
use tracing::{debug, trace};

use crate::ratio::{DragBounds, Ratio};

/// Observable lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    Idle,
    Dragging,
}

/// Input consumed by [`DragMachine::apply`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragInput {
    /// Button pressed. `bounds` is what a drag starting here works against.
    Press { on_divider: bool, bounds: DragBounds },
    /// Pointer moved; `coordinate` is on the split axis.
    Move { coordinate: f64 },
    /// Button released.
    Release,
    /// The pointer went away without a release (focus loss).
    Lost,
}

/// Why a drag ended without a release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragCancelReason {
    PointerLost,
    Programmatic,
}

/// Explicit no-op diagnostics for input that is safely ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragNoopReason {
    IdleWithoutActiveDrag,
    ActiveDragAlreadyInProgress,
    PressOutsideDivider,
}

/// Effect emitted by one lifecycle step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragEffect {
    Started {
        bounds: DragBounds,
    },
    /// A new ratio to render. The host's default action for the move should
    /// be suppressed.
    Updated {
        ratio: Ratio,
    },
    /// Released; `last_ratio` is the ratio of the final update, if any.
    Ended {
        last_ratio: Option<Ratio>,
        updates: u64,
    },
    Canceled {
        last_ratio: Option<Ratio>,
        reason: DragCancelReason,
    },
    Noop {
        reason: DragNoopReason,
    },
}

/// One state-machine transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragTransition {
    pub transition_id: u64,
    pub from: DragPhase,
    pub to: DragPhase,
    pub effect: DragEffect,
}

impl DragTransition {
    /// Whether the host should suppress the default action of the event.
    #[must_use]
    pub const fn prevents_default(&self) -> bool {
        matches!(self.effect, DragEffect::Updated { .. })
    }

    /// Whether this transition finished a drag (released or canceled).
    #[must_use]
    pub const fn finished_drag(&self) -> bool {
        matches!(
            self.effect,
            DragEffect::Ended { .. } | DragEffect::Canceled { .. }
        )
    }

    /// Ratio to render, for update transitions.
    #[must_use]
    pub const fn ratio(&self) -> Option<Ratio> {
        match self.effect {
            DragEffect::Updated { ratio } => Some(ratio),
            _ => None,
        }
    }
}

/// In-flight drag. Holding the guards keeps the listeners registered.
#[derive(Debug)]
struct ActiveDrag {
    bounds: DragBounds,
    last_ratio: Option<Ratio>,
    updates: u64,
    _move_listener: ListenerGuard,
    _up_listener: ListenerGuard,
}

#[derive(Debug)]
enum DragState {
    Idle,
    Dragging(ActiveDrag),
}

/// Runtime lifecycle machine for divider drags.
#[derive(Debug)]
pub struct DragMachine {
    state: DragState,
    listeners: ListenerRegistry,
    transition_counter: u64,
}

impl DragMachine {
    /// Machine that registers its drag listeners in `listeners`.
    #[must_use]
    pub fn new(listeners: ListenerRegistry) -> Self {
        Self {
            state: DragState::Idle,
            listeners,
            transition_counter: 0,
        }
    }

    /// Current lifecycle phase.
    #[must_use]
    pub const fn phase(&self) -> DragPhase {
        match self.state {
            DragState::Idle => DragPhase::Idle,
            DragState::Dragging(_) => DragPhase::Dragging,
        }
    }

    /// Whether a drag is in flight.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// Bounds snapshotted by the active drag.
    #[must_use]
    pub fn active_bounds(&self) -> Option<DragBounds> {
        match &self.state {
            DragState::Dragging(active) => Some(active.bounds),
            DragState::Idle => None,
        }
    }

    /// Registry the drag listeners live in.
    #[must_use]
    pub fn listeners(&self) -> &ListenerRegistry {
        &self.listeners
    }

    /// Apply one input and report the transition.
    pub fn apply(&mut self, input: DragInput) -> DragTransition {
        let from = self.phase();
        let effect = match (from, input) {
            (DragPhase::Idle, DragInput::Press { on_divider: false, .. }) => DragEffect::Noop {
                reason: DragNoopReason::PressOutsideDivider,
            },
            (DragPhase::Idle, DragInput::Press { on_divider: true, bounds }) => self.start(bounds),
            (DragPhase::Idle, _) => DragEffect::Noop {
                reason: DragNoopReason::IdleWithoutActiveDrag,
            },
            (DragPhase::Dragging, DragInput::Press { .. }) => DragEffect::Noop {
                reason: DragNoopReason::ActiveDragAlreadyInProgress,
            },
            (DragPhase::Dragging, DragInput::Move { coordinate }) => self.update(coordinate),
            (DragPhase::Dragging, DragInput::Release) => match self.finish() {
                Some(active) => {
                    debug!(updates = active.updates, "drag ended");
                    DragEffect::Ended {
                        last_ratio: active.last_ratio,
                        updates: active.updates,
                    }
                }
                None => DragEffect::Noop {
                    reason: DragNoopReason::IdleWithoutActiveDrag,
                },
            },
            (DragPhase::Dragging, DragInput::Lost) => {
                self.cancel_effect(DragCancelReason::PointerLost)
            }
        };
        self.transition(from, effect)
    }

    fn start(&mut self, bounds: DragBounds) -> DragEffect {
        self.state = DragState::Dragging(ActiveDrag {
            bounds,
            last_ratio: None,
            updates: 0,
            _move_listener: self.listeners.register(ListenerKind::PointerMove),
            _up_listener: self.listeners.register(ListenerKind::PointerUp),
        });
        debug!(
            origin = bounds.origin,
            extent = bounds.extent,
            min = bounds.min,
            max = bounds.max,
            "drag started"
        );
        DragEffect::Started { bounds }
    }

    fn update(&mut self, coordinate: f64) -> DragEffect {
        let DragState::Dragging(active) = &mut self.state else {
            return DragEffect::Noop {
                reason: DragNoopReason::IdleWithoutActiveDrag,
            };
        };
        let ratio = active.bounds.ratio_at(coordinate);
        active.last_ratio = Some(ratio);
        active.updates = active.updates.saturating_add(1);
        trace!(coordinate, ratio = ratio.value(), "drag updated");
        DragEffect::Updated { ratio }
    }

    /// Unconditionally return to `Idle`.
    ///
    /// Returns `None` when no drag was in flight.
    pub fn force_cancel(&mut self) -> Option<DragTransition> {
        if !self.is_dragging() {
            return None;
        }
        let effect = self.cancel_effect(DragCancelReason::Programmatic);
        Some(self.transition(DragPhase::Dragging, effect))
    }

    fn cancel_effect(&mut self, reason: DragCancelReason) -> DragEffect {
        match self.finish() {
            Some(active) => {
                debug!(?reason, updates = active.updates, "drag canceled");
                DragEffect::Canceled {
                    last_ratio: active.last_ratio,
                    reason,
                }
            }
            None => DragEffect::Noop {
                reason: DragNoopReason::IdleWithoutActiveDrag,
            },
        }
    }

    /// Leave `Dragging`; the returned drag releases its listeners when dropped.
    fn finish(&mut self) -> Option<ActiveDrag> {
        match std::mem::replace(&mut self.state, DragState::Idle) {
            DragState::Dragging(active) => Some(active),
            DragState::Idle => None,
        }
    }

    fn transition(&mut self, from: DragPhase, effect: DragEffect) -> DragTransition {
        self.transition_counter = self.transition_counter.saturating_add(1);
        DragTransition {
            transition_id: self.transition_counter,
            from,
            to: self.phase(),
            effect,
        }
    }
}

#![forbid(unsafe_code)]

//! Draggable two-pane split layouts.
//!
//! This crate is the public facade: it re-exports the surface model from
//! `splitpane-core` and the resize engine from `splitpane-layout`, and adds a
//! unified [`Error`] plus a prelude.
//!
//! ```rust,ignore
//! use splitpane::prelude::*;
//!
//! let config = splitpane::load_config("splitpane.toml")?;
//! let mut panes = Activation::activate(&mut surface, &config)?;
//! let outcome = panes.handle_event(&mut surface, &event);
//! ```

use std::fmt;
use std::path::Path;

// --- Core re-exports -------------------------------------------------------

pub use splitpane_core::event::{Event, MouseButton, MouseEvent, MouseEventKind};
pub use splitpane_core::geometry::Rect;
pub use splitpane_core::listener::{ListenerGuard, ListenerKind, ListenerRegistry};
pub use splitpane_core::surface::{LayoutSurface, MemorySurface, NodeId};
pub use splitpane_core::viewport::{ViewportChange, ViewportObservers, ViewportSubscription};

// --- Layout re-exports -----------------------------------------------------

pub use splitpane_layout::{
    Activation, ConfigError, ConfigOverrides, CursorDefaults, DispatchOutcome, DragBounds,
    DragEffect, DragPhase, DragTransition, LayoutParameters, LayoutTemplates, Orientation, Ratio,
    RegionTemplates, RenderedLayout, SPLITPANE_MARKER, Splitpane, SplitpaneConfig, SplitpaneError,
    SplitpaneHooks, VERTICAL_MARKER, compute_ratio,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for split-pane hosts.
#[derive(Debug)]
pub enum Error {
    /// A split-pane root could not be built.
    Splitpane(SplitpaneError),
    /// Configuration could not be loaded.
    Config(ConfigError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Splitpane(err) => write!(f, "{err}"),
            Self::Config(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Splitpane(err) => Some(err),
            Self::Config(err) => Some(err),
        }
    }
}

impl From<SplitpaneError> for Error {
    fn from(err: SplitpaneError) -> Self {
        Self::Splitpane(err)
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

/// Standard result type for split-pane APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Entry points ---------------------------------------------------------

/// Load a config file, picking the format from its extension.
///
/// `.json` files are read as JSON; anything else as TOML.
pub fn load_config(path: impl AsRef<Path>) -> Result<SplitpaneConfig> {
    let path = path.as_ref();
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let config = if is_json {
        SplitpaneConfig::from_json_file(path)?
    } else {
        SplitpaneConfig::from_toml_file(path)?
    };
    tracing::debug!(path = %path.display(), json = is_json, "config loaded");
    Ok(config)
}

/// Activate every split-pane root on `surface`.
pub fn activate<S: LayoutSurface + ?Sized>(
    surface: &mut S,
    config: &SplitpaneConfig,
) -> Result<Activation> {
    Ok(Activation::activate(surface, config)?)
}

#[cfg(feature = "logging")]
pub mod logging {
    //! Subscriber setup for hosts that do not install their own.

    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    /// Environment variable holding the log filter directive.
    pub const LOG_ENV: &str = "SPLITPANE_LOG";
    /// Filter used when [`LOG_ENV`] is unset or invalid.
    pub const DEFAULT_FILTER: &str = "info";

    /// Install a global fmt subscriber filtered by [`LOG_ENV`].
    ///
    /// Returns an error if a global subscriber is already set.
    pub fn init() -> Result<(), tracing_subscriber::util::TryInitError> {
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .try_init()
    }
}

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Activation, DragEffect, DragTransition, Error, Event, LayoutSurface, MemorySurface,
        MouseButton, MouseEvent, MouseEventKind, NodeId, Orientation, Ratio, Rect, Result,
        Splitpane, SplitpaneConfig, SplitpaneHooks,
    };

    pub use crate::{core, layout};
}

pub use splitpane_core as core;
pub use splitpane_layout as layout;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_convert_and_keep_source() {
        let root = NodeId::new(3);
        let err: Error = SplitpaneError::MissingRegions { root, found: 1 }.into();
        assert_eq!(
            err.to_string(),
            "split-pane root #3 needs 3 direct children, found 1"
        );
        assert!(std::error::Error::source(&err).is_some());

        let err: Error = ConfigError::Invalid(vec!["handle must be positive".into()]).into();
        assert!(matches!(err, Error::Config(_)));
        assert_eq!(err.to_string(), "invalid config: handle must be positive");
    }

    #[test]
    fn activate_propagates_malformed_roots() {
        let mut surface = MemorySurface::new();
        let root = surface.insert_root(Rect::from_size(50.0, 50.0));
        surface.add_marker(root, SPLITPANE_MARKER);
        let err = activate(&mut surface, &SplitpaneConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            Error::Splitpane(SplitpaneError::MissingRegions { found: 0, .. })
        ));
    }
}

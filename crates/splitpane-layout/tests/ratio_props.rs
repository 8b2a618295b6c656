//! Property tests for ratio clamping and layout rendering.

use proptest::prelude::*;
use splitpane_core::surface::{LayoutSurface, MemorySurface};
use splitpane_layout::template::format_number;
use splitpane_layout::{
    LayoutParameters, Orientation, Rect, RegionTemplates, SPLITPANE_MARKER, Splitpane,
    SplitpaneConfig, SplitpaneHooks, VERTICAL_MARKER, compute_ratio, render,
};

fn percent_after(style: &str, key: &str) -> f64 {
    let start = style.find(key).expect("key present") + key.len();
    let rest = &style[start..];
    let end = rest.find('%').expect("percent sign");
    rest[..end].trim().parse().expect("numeric percent")
}

proptest! {
    #[test]
    fn ratio_stays_within_drag_bounds(
        extent in 200.0f64..4000.0,
        min in 0.0f64..100.0,
        origin in -500.0f64..500.0,
        pointer in -5000.0f64..5000.0,
    ) {
        let container = Rect::new(origin, 0.0, extent, 300.0);
        let ratio = compute_ratio(pointer, &container, min, Orientation::Horizontal).value();
        prop_assert!(ratio >= min / extent - 1e-12);
        prop_assert!(ratio <= (extent - min) / extent + 1e-12);
    }

    #[test]
    fn pointer_inside_bounds_is_not_clamped(
        extent in 200.0f64..4000.0,
        min in 0.0f64..100.0,
        t in 0.0f64..=1.0,
    ) {
        let local = min + t * (extent - 2.0 * min);
        let container = Rect::new(0.0, 0.0, 300.0, extent);
        let ratio = compute_ratio(local, &container, min, Orientation::Vertical).value();
        prop_assert!((ratio - local / extent).abs() < 1e-12);
    }

    #[test]
    fn undersized_container_saturates_at_minimum(
        extent in 1.0f64..200.0,
        pointer in -1000.0f64..1000.0,
    ) {
        let min = 100.0;
        prop_assume!(extent < 2.0 * min);
        let container = Rect::from_size(extent, 10.0);
        let ratio = compute_ratio(pointer, &container, min, Orientation::Horizontal).value();
        prop_assert_eq!(ratio, min / extent);
    }

    #[test]
    fn rendered_percentages_sum_to_one_hundred(ratio in 0.0f64..=1.0, handle in 1.0f64..20.0) {
        let params = LayoutParameters::new(ratio, handle, "col-resize");
        let layout = render(&RegionTemplates::horizontal(), &params.params());
        let first = percent_after(&layout.first, "width:");
        let second = percent_after(&layout.second, "width:");
        prop_assert!((first + second - 100.0).abs() < 1e-9);
    }

    #[test]
    fn render_depends_only_on_inputs(ratio in 0.0f64..=1.0, handle in 1.0f64..20.0) {
        let templates = RegionTemplates::vertical();
        let a = render(&templates, &LayoutParameters::new(ratio, handle, "row-resize").params());
        let b = render(&templates, &LayoutParameters::new(ratio, handle, "row-resize").params());
        prop_assert_eq!(a, b);
    }

    #[test]
    fn formatted_numbers_have_no_trailing_zeros(value in -1.0e6f64..1.0e6) {
        let text = format_number(value);
        prop_assert!(!text.ends_with('.'));
        if text.contains('.') {
            prop_assert!(!text.ends_with('0'));
        }
        let parsed: f64 = text.parse().expect("formatted number parses");
        prop_assert!((parsed - value).abs() <= 5e-5 + value.abs() * 1e-15);
    }

    #[test]
    fn orientation_follows_vertical_marker(
        vertical in any::<bool>(),
        extra in prop::collection::vec("[a-z]{1,8}", 0..4),
    ) {
        let mut surface = MemorySurface::new();
        let root = surface.insert_root(Rect::from_size(400.0, 400.0));
        surface.add_marker(root, SPLITPANE_MARKER);
        for marker in &extra {
            if marker != VERTICAL_MARKER {
                surface.add_marker(root, marker);
            }
        }
        if vertical {
            surface.add_marker(root, VERTICAL_MARKER);
        }
        for _ in 0..3 {
            surface.insert_child(root, Rect::default()).expect("root exists");
        }
        let pane = Splitpane::new(
            &mut surface,
            root,
            &SplitpaneConfig::default(),
            SplitpaneHooks::default(),
        )
        .expect("well-formed root");
        prop_assert_eq!(pane.orientation().is_vertical(), vertical);
        prop_assert_eq!(surface.has_marker(root, VERTICAL_MARKER), vertical);
    }
}

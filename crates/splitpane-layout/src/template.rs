#![forbid(unsafe_code)]

//! Layout template rendering.
//!
//! Positioning declarations are produced by substituting `{key}` placeholders
//! in a template with values from [`TemplateParams`]. Placeholders may pad the
//! key with spaces (`{ ratio }`) and may address nested groups with a dotted
//! path (`{theme.gap}`). Placeholders that do not resolve are left verbatim.

use std::collections::BTreeMap;
use std::fmt;

use crate::config::RegionTemplates;

/// Prefix every rendered declaration starts with.
pub const POSITION_PREFIX: &str = "position: absolute; ";

/// Decimal places kept when rendering numbers.
const NUMBER_PRECISION: usize = 4;

/// A value substituted into a template.
#[derive(Debug, Clone, PartialEq)]
pub enum TemplateValue {
    Number(f64),
    Text(String),
    Group(TemplateParams),
}

impl From<f64> for TemplateValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for TemplateValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for TemplateValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<TemplateParams> for TemplateValue {
    fn from(value: TemplateParams) -> Self {
        Self::Group(value)
    }
}

impl fmt::Display for TemplateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => f.write_str(&format_number(*value)),
            Self::Text(text) => f.write_str(text),
            Self::Group(_) => Ok(()),
        }
    }
}

/// Key→value map consulted during substitution.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateParams {
    values: BTreeMap<String, TemplateValue>,
}

impl TemplateParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<TemplateValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<TemplateValue>) {
        self.values.insert(key.into(), value.into());
    }

    /// Resolve a dotted path (`a.b.c`) to a leaf value.
    #[must_use]
    pub fn lookup(&self, path: &str) -> Option<&TemplateValue> {
        let mut segments = path.split('.');
        let mut current = self.values.get(segments.next()?)?;
        for segment in segments {
            match current {
                TemplateValue::Group(group) => current = group.values.get(segment)?,
                _ => return None,
            }
        }
        match current {
            TemplateValue::Group(_) => None,
            leaf => Some(leaf),
        }
    }
}

/// Substitute every resolvable placeholder in `template`.
#[must_use]
pub fn render_template(template: &str, params: &TemplateParams) -> String {
    let mut out = String::with_capacity(template.len() + 16);
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };
        let candidate = &after[..close];
        if candidate.contains('{') {
            out.push('{');
            rest = after;
            continue;
        }
        let key = candidate.trim_matches(' ');
        match params.lookup(key) {
            Some(value) if !key.is_empty() => out.push_str(&value.to_string()),
            _ => out.push_str(&rest[open..open + close + 2]),
        }
        rest = &after[close + 1..];
    }
    out.push_str(rest);
    out
}

/// Render a number without trailing zeros, rounded to four decimals.
#[must_use]
pub fn format_number(value: f64) -> String {
    let rounded = format!("{value:.prec$}", prec = NUMBER_PRECISION);
    let trimmed = if rounded.contains('.') {
        rounded.trim_end_matches('0').trim_end_matches('.')
    } else {
        rounded.as_str()
    };
    if trimmed == "-0" {
        "0".to_owned()
    } else {
        trimmed.to_owned()
    }
}

fn round_to_precision(value: f64) -> f64 {
    let scale = 10f64.powi(NUMBER_PRECISION as i32);
    (value * scale).round() / scale
}

/// Values fed into one render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutParameters {
    /// First pane share in percent.
    pub ratio_percent: f64,
    /// Second pane share in percent; always `100 - ratio_percent`.
    pub supplement_percent: f64,
    /// Half the divider thickness, in pixels.
    pub half: f64,
    /// Divider thickness, in pixels.
    pub handle: f64,
    /// Divider cursor.
    pub cursor: String,
}

impl LayoutParameters {
    /// Build parameters for a first-pane `ratio` in `[0, 1]`.
    ///
    /// The ratio percent is rounded to render precision first so that the two
    /// percentages sum to exactly 100 once rendered.
    #[must_use]
    pub fn new(ratio: f64, handle: f64, cursor: impl Into<String>) -> Self {
        let ratio_percent = round_to_precision(ratio * 100.0);
        Self {
            ratio_percent,
            supplement_percent: round_to_precision(100.0 - ratio_percent),
            half: handle / 2.0,
            handle,
            cursor: cursor.into(),
        }
    }

    /// Substitution map with the built-in placeholder keys.
    #[must_use]
    pub fn params(&self) -> TemplateParams {
        TemplateParams::new()
            .with("ratio", self.ratio_percent)
            .with("supplement", self.supplement_percent)
            .with("half", self.half)
            .with("handle", self.handle)
            .with("cursor", self.cursor.as_str())
    }
}

/// Declarations for the three regions, in child order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLayout {
    pub first: String,
    pub divider: String,
    pub second: String,
}

impl RenderedLayout {
    /// Declarations as `[first, divider, second]`.
    #[must_use]
    pub fn as_array(&self) -> [&str; 3] {
        [&self.first, &self.divider, &self.second]
    }
}

/// Render `templates` with `params`, prefixing each with absolute placement.
#[must_use]
pub fn render(templates: &RegionTemplates, params: &TemplateParams) -> RenderedLayout {
    let region = |template: &str| format!("{POSITION_PREFIX}{}", render_template(template, params));
    RenderedLayout {
        first: region(&templates.first),
        divider: region(&templates.divider),
        second: region(&templates.second),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_flat_keys() {
        let params = TemplateParams::new().with("ratio", 42.5).with("cursor", "col-resize");
        assert_eq!(
            render_template("left:{ratio}%; cursor: {cursor}", &params),
            "left:42.5%; cursor: col-resize"
        );
    }

    #[test]
    fn placeholder_tolerates_inner_spaces() {
        let params = TemplateParams::new().with("half", 2.5);
        assert_eq!(render_template("pad: {  half }px", &params), "pad: 2.5px");
    }

    #[test]
    fn dotted_paths_reach_nested_groups() {
        let params = TemplateParams::new().with(
            "theme",
            TemplateParams::new().with("divider", TemplateParams::new().with("color", "#333")),
        );
        assert_eq!(
            render_template("background: {theme.divider.color}", &params),
            "background: #333"
        );
        assert_eq!(
            render_template("{theme.divider}", &params),
            "{theme.divider}",
            "groups are not leaves"
        );
    }

    #[test]
    fn unknown_and_unterminated_placeholders_stay_verbatim() {
        let params = TemplateParams::new().with("ratio", 10.0);
        assert_eq!(
            render_template("{missing} {} {ratio} {open", &params),
            "{missing} {} 10 {open"
        );
        assert_eq!(render_template("{ {ratio}", &params), "{ 10");
    }

    #[test]
    fn repeated_placeholders_all_substitute() {
        let params = TemplateParams::new().with("x", 1.0);
        assert_eq!(render_template("{x}{x}-{ x }", &params), "11-1");
    }

    #[test]
    fn numbers_drop_trailing_zeros() {
        assert_eq!(format_number(50.0), "50");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(0.2 * 100.0), "20");
        assert_eq!(format_number(100.0 / 3.0), "33.3333");
        assert_eq!(format_number(-0.00001), "0");
    }

    #[test]
    fn parameters_are_complementary() {
        let params = LayoutParameters::new(1.0 / 3.0, 5.0, "col-resize");
        assert_eq!(params.ratio_percent, 33.3333);
        assert_eq!(params.supplement_percent, 66.6667);
        assert_eq!(params.half, 2.5);
    }

    #[test]
    fn render_prefixes_absolute_positioning() {
        let layout = render(
            &RegionTemplates::horizontal(),
            &LayoutParameters::new(0.5, 5.0, "col-resize").params(),
        );
        assert_eq!(
            layout.first,
            "position: absolute; top:0; bottom:0; left:0; width: 50%; padding-right: 2.5px"
        );
        assert_eq!(
            layout.divider,
            "position: absolute; top:0; bottom:0; left:50%; margin-left: -2.5px; width: 5px; \
             cursor: col-resize; z-index: 1"
        );
        assert_eq!(
            layout.second,
            "position: absolute; top:0; bottom:0; right:0; width: 50%; padding-left: 2.5px"
        );
    }
}

//! Building an [`Icon`] from a drawing.

use icon_types::BoundingBox;

use crate::{
    color::Color,
    error::Error,
    icon::{Contour, Icon, LineJoin, Path},
    path_data::parse_contours,
    tree::{Group, Node, PathNode, RectNode, Style},
};

/// Groups whose title starts with this are not drawn.
pub const HIDDEN_PREFIX: &str = "__";

/// The title of the group holding the rectangle that bounds the icon.
pub const BOUNDS_TITLE: &str = "__TTauriIconBounds";

/// Group titles with special meaning.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReservedNames {
    /// Groups whose title starts with this prefix are not drawn.
    pub hidden_prefix: String,
    /// A rectangle in a group with exactly this title sets the icon bounds.
    pub bounds_title: String,
}

/// Build an icon from the top-level groups of a drawing.
#[derive(Clone, Debug, Default)]
pub struct IconBuilder {
    reserved: ReservedNames,
}

/// The result of interpreting a single group and everything inside it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IconFragment {
    /// Drawn shapes, in document order.
    pub paths: Vec<Path>,
    /// The last bounding rectangle found, if any.
    pub bounds: Option<BoundingBox<f64>>,
    /// The resolved title of the group.
    pub title: Option<String>,
}

impl Default for ReservedNames {
    fn default() -> Self {
        ReservedNames {
            hidden_prefix: HIDDEN_PREFIX.to_owned(),
            bounds_title: BOUNDS_TITLE.to_owned(),
        }
    }
}

impl ReservedNames {
    fn is_hidden(&self, title: Option<&str>) -> bool {
        title.is_some_and(|title| title.starts_with(&self.hidden_prefix))
    }

    fn is_bounds(&self, title: Option<&str>) -> bool {
        title == Some(self.bounds_title.as_str())
    }
}

impl IconBuilder {
    pub fn new(reserved: ReservedNames) -> Self {
        IconBuilder { reserved }
    }

    /// Interpret each top-level group and assemble the results into an icon.
    ///
    /// The icon's title is the title of the last top-level group. The icon
    /// is not normalized.
    pub fn build<'a>(&self, groups: impl IntoIterator<Item = &'a Group>) -> Result<Icon, Error> {
        let mut composed = IconFragment::default();
        for group in groups {
            let mut fragment = self.interpret_group(group)?;
            let title = fragment.title.take();
            composed.append(fragment);
            composed.title = title;
        }

        let mut icon = Icon::new();
        icon.paths = composed.paths;
        icon.title = composed.title;
        match composed.bounds {
            Some(bounds) => icon.bounding_box = bounds,
            None => log::warn!(
                "no rectangle in a group titled '{}', using the default bounds",
                self.reserved.bounds_title
            ),
        }
        log::debug!(
            "built icon {:?} with {} paths and {} points",
            icon.title,
            icon.paths.len(),
            icon.point_count()
        );
        Ok(icon)
    }

    /// Interpret a group, recursing into nested groups.
    ///
    /// Shapes are dropped if the group's title marks it as hidden, but nested
    /// groups are judged by their own titles.
    pub fn interpret_group(&self, group: &Group) -> Result<IconFragment, Error> {
        let title = group.title();
        let hidden = self.reserved.is_hidden(title);
        let is_bounds = self.reserved.is_bounds(title);
        let mut fragment = IconFragment {
            title: title.map(str::to_owned),
            ..Default::default()
        };

        for child in &group.children {
            match child {
                Node::Group(nested) => {
                    let nested = self.interpret_group(nested)?;
                    fragment.append(nested);
                }
                Node::Rect(rect) if is_bounds => fragment.set_bounds(rect.rect),
                Node::Path(_) | Node::Rect(_) if hidden => (),
                Node::Path(path) => fragment.paths.push(path_from_node(path)?),
                Node::Rect(rect) => fragment.paths.push(path_from_rect(rect)?),
                Node::Title(_) => (),
            }
        }
        Ok(fragment)
    }
}

impl IconFragment {
    /// Add the contents of a nested group's fragment to this one.
    ///
    /// The nested group's title does not replace ours.
    pub fn append(&mut self, other: IconFragment) {
        self.paths.extend(other.paths);
        if let Some(bounds) = other.bounds {
            self.set_bounds(bounds);
        }
    }

    fn set_bounds(&mut self, bounds: BoundingBox<f64>) {
        if let Some(previous) = self.bounds.replace(bounds) {
            log::warn!("icon bounds {previous:?} replaced by {bounds:?}");
        }
    }
}

fn path_from_style(style: &Style) -> Result<Path, Error> {
    let fill = Color::from_attribute(style.fill.as_deref())?;
    let stroke = Color::from_attribute(style.stroke.as_deref())?;
    let width = style.stroke_width.unwrap_or(Icon::DEFAULT_STROKE_WIDTH);
    let line_join = match style.stroke_linejoin.as_deref() {
        None => LineJoin::default(),
        Some(value) => LineJoin::from_svg(value).unwrap_or_else(|| {
            log::warn!("unsupported stroke-linejoin '{value}', using miter");
            LineJoin::Miter
        }),
    };
    Ok(Path::new(fill, stroke, width).with_line_join(line_join))
}

fn path_from_node(node: &PathNode) -> Result<Path, Error> {
    Ok(path_from_style(&node.style)?.with_contours(parse_contours(&node.data)?))
}

fn path_from_rect(node: &RectNode) -> Result<Path, Error> {
    Ok(path_from_style(&node.style)?.with_contours([Contour::rectangle(node.rect)]))
}

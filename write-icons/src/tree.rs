//! A typed model of the drawing an icon is built from.
//!
//! This is the subset of an SVG document that matters for icons: groups,
//! which may be titled, and the paths and rectangles inside them. Required
//! attributes are checked, and numeric attributes parsed, when nodes are
//! constructed; colors are kept as written and only resolved for shapes
//! that are drawn.

use icon_types::BoundingBox;

use crate::error::Error;

/// A node in a drawing.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Group(Group),
    Path(PathNode),
    Rect(RectNode),
    /// The text of a `title` element.
    Title(String),
}

/// A group of nodes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Group {
    pub id: Option<String>,
    pub children: Vec<Node>,
}

/// Presentation attributes shared by paths and rectangles.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Style {
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
    pub stroke_linejoin: Option<String>,
}

/// A `path` element.
#[derive(Clone, Debug, PartialEq)]
pub struct PathNode {
    pub style: Style,
    /// The path data, from the `d` attribute.
    pub data: String,
}

/// A `rect` element.
#[derive(Clone, Debug, PartialEq)]
pub struct RectNode {
    pub style: Style,
    pub rect: BoundingBox<f64>,
}

/// Parse a numeric attribute.
pub fn parse_number(value: &str) -> Result<f64, Error> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::InvalidNumber(value.to_owned()))
}

fn required<'a>(
    element: &'static str,
    attribute: &'static str,
    value: Option<&'a str>,
) -> Result<&'a str, Error> {
    value.ok_or(Error::MissingRequiredAttribute { element, attribute })
}

impl Group {
    pub fn new(id: Option<String>, children: Vec<Node>) -> Self {
        Group { id, children }
    }

    /// The group's title: the text of its first title child, or else its id.
    ///
    /// The title is resolved once for the whole group, so it applies to every
    /// child regardless of where the `title` element appears. This
    /// deliberately differs from resolving titles in document order, where
    /// shapes before the `title` element would be judged by the id and a
    /// later `title` would replace an earlier one.
    pub fn title(&self) -> Option<&str> {
        self.children
            .iter()
            .find_map(|child| match child {
                Node::Title(text) => Some(text.as_str()),
                _ => None,
            })
            .or(self.id.as_deref())
    }
}

impl Style {
    /// Read presentation attributes through an attribute lookup function.
    pub fn from_attributes<'a>(attr: impl Fn(&str) -> Option<&'a str>) -> Result<Self, Error> {
        Ok(Style {
            fill: attr("fill").map(str::to_owned),
            stroke: attr("stroke").map(str::to_owned),
            stroke_width: attr("stroke-width").map(parse_number).transpose()?,
            stroke_linejoin: attr("stroke-linejoin").map(str::to_owned),
        })
    }
}

impl PathNode {
    /// Construct a path from its attributes; `d` is required.
    pub fn from_attributes<'a>(attr: impl Fn(&str) -> Option<&'a str>) -> Result<Self, Error> {
        let data = required("path", "d", attr("d"))?.to_owned();
        Ok(PathNode {
            style: Style::from_attributes(attr)?,
            data,
        })
    }
}

impl RectNode {
    /// Construct a rectangle from its attributes; all of `x`, `y`, `width`
    /// and `height` are required.
    pub fn from_attributes<'a>(attr: impl Fn(&str) -> Option<&'a str>) -> Result<Self, Error> {
        let number = |name: &'static str| parse_number(required("rect", name, attr(name))?);
        let rect = BoundingBox::new(
            number("x")?,
            number("y")?,
            number("width")?,
            number("height")?,
        );
        Ok(RectNode {
            style: Style::from_attributes(attr)?,
            rect,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup<'a>(attrs: &'a HashMap<&str, &str>) -> impl Fn(&str) -> Option<&'a str> {
        move |name: &str| attrs.get(name).copied()
    }

    #[test]
    fn rect_requires_geometry() {
        let mut attrs = HashMap::from([("x", "1"), ("y", "2"), ("width", "3")]);
        assert_eq!(
            RectNode::from_attributes(lookup(&attrs)),
            Err(Error::MissingRequiredAttribute {
                element: "rect",
                attribute: "height"
            })
        );
        attrs.insert("height", " 4.5 ");
        attrs.insert("stroke-width", "0.25");
        let rect = RectNode::from_attributes(lookup(&attrs)).unwrap();
        assert_eq!(rect.rect, BoundingBox::new(1.0, 2.0, 3.0, 4.5));
        assert_eq!(rect.style.stroke_width, Some(0.25));
        assert_eq!(rect.style.fill, None);
    }

    #[test]
    fn rect_bad_number() {
        let attrs = HashMap::from([("x", "1px"), ("y", "2"), ("width", "3"), ("height", "4")]);
        assert_eq!(
            RectNode::from_attributes(lookup(&attrs)),
            Err(Error::InvalidNumber("1px".into()))
        );
    }

    #[test]
    fn path_requires_data() {
        let attrs = HashMap::from([("fill", "red")]);
        assert_eq!(
            PathNode::from_attributes(lookup(&attrs)),
            Err(Error::MissingRequiredAttribute {
                element: "path",
                attribute: "d"
            })
        );
        let attrs = HashMap::from([("fill", "red"), ("d", "M0 0Z")]);
        let path = PathNode::from_attributes(lookup(&attrs)).unwrap();
        assert_eq!(path.data, "M0 0Z");
        assert_eq!(path.style.fill.as_deref(), Some("red"));
    }

    #[test]
    fn group_title() {
        let untitled = Group::new(Some("layer1".into()), vec![]);
        assert_eq!(untitled.title(), Some("layer1"));
        let titled = Group::new(
            Some("layer1".into()),
            vec![
                Node::Group(Group::default()),
                Node::Title("__guides".into()),
                Node::Title("ignored".into()),
            ],
        );
        assert_eq!(titled.title(), Some("__guides"));
        assert_eq!(Group::default().title(), None);
    }
}

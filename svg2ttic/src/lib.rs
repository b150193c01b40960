//! Converting SVG drawings into TTIC icons.
//!
//! The drawing is read with [`roxmltree`]; the direct `g` children of the
//! root element are the icon's top-level groups. Inside them only SVG `g`,
//! `path`, `rect` and `title` elements are understood, everything else is
//! ignored.

use std::path::{Path, PathBuf};

use roxmltree::{Document, Node as XmlNode};
use thiserror::Error;
use write_icons::{
    tree::{Group, Node, PathNode, RectNode},
    IconBuilder, ReservedNames,
};

/// The SVG namespace.
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Options that control how a drawing is converted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    pub reserved: ReservedNames,
}

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Failed to parse SVG: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("Failed to convert icon: {0}")]
    Icon(#[from] write_icons::Error),

    #[error("Failed to read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Convert the text of an SVG document into the bytes of a TTIC icon.
pub fn convert_svg(svg: &str, options: &ConvertOptions) -> Result<Vec<u8>, ConvertError> {
    let doc = Document::parse(svg)?;
    let groups = load_groups(&doc)?;
    log::debug!("found {} top-level groups", groups.len());

    let mut icon = IconBuilder::new(options.reserved.clone()).build(&groups)?;
    icon.normalize()?;
    Ok(write_icons::dump_icon(&icon)?)
}

/// Convert the SVG file at `input`, writing the icon to `output` if provided.
///
/// Without an output path the icon is converted (and so validated) but not
/// written anywhere. Returns the icon's bytes.
pub fn convert_file(
    input: &Path,
    output: Option<&Path>,
    options: &ConvertOptions,
) -> Result<Vec<u8>, ConvertError> {
    log::info!("reading '{}'", input.display());
    let svg = std::fs::read_to_string(input).map_err(|source| ConvertError::Read {
        path: input.to_owned(),
        source,
    })?;
    let bytes = convert_svg(&svg, options)?;

    match output {
        Some(path) => {
            std::fs::write(path, &bytes).map_err(|source| ConvertError::Write {
                path: path.to_owned(),
                source,
            })?;
            log::info!("wrote {} bytes to '{}'", bytes.len(), path.display());
        }
        None => log::info!("converted {} bytes, no output requested", bytes.len()),
    }
    Ok(bytes)
}

/// Load the top-level groups of a document.
pub fn load_groups(doc: &Document) -> Result<Vec<Group>, write_icons::Error> {
    doc.root_element()
        .children()
        .filter(|node| is_svg_element(*node, "g"))
        .map(load_group)
        .collect()
}

fn is_svg_element(node: XmlNode, name: &str) -> bool {
    node.is_element()
        && node.tag_name().name() == name
        && node.tag_name().namespace() == Some(SVG_NAMESPACE)
}

fn load_group(node: XmlNode) -> Result<Group, write_icons::Error> {
    let mut children = Vec::new();
    for child in node.children().filter(XmlNode::is_element) {
        if child.tag_name().namespace() != Some(SVG_NAMESPACE) {
            continue;
        }
        let attr = |name: &str| child.attribute(name);
        match child.tag_name().name() {
            "g" => children.push(Node::Group(load_group(child)?)),
            "path" => children.push(Node::Path(PathNode::from_attributes(attr)?)),
            "rect" => children.push(Node::Rect(RectNode::from_attributes(attr)?)),
            "title" => {
                let text = child.text().unwrap_or_default();
                children.push(Node::Title(text.to_owned()));
            }
            other => log::trace!("ignoring <{other}>"),
        }
    }
    let id = node.attribute("id").map(str::to_owned);
    Ok(Group::new(id, children))
}

#[cfg(test)]
mod tests {
    use write_icons::types::BoundingBox;

    use super::*;

    fn groups(svg: &str) -> Vec<Group> {
        let doc = Document::parse(svg).unwrap();
        load_groups(&doc).unwrap()
    }

    #[test]
    fn only_svg_groups_at_top_level() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:other="urn:other">
            <path d="M0 0Z"/>
            <g id="one"><title>first</title></g>
            <other:g id="foreign"/>
            <defs><g id="nested"/></defs>
            <g id="two"/>
        </svg>"#;
        let groups = groups(svg);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].title(), Some("first"));
        assert_eq!(groups[1].title(), Some("two"));
    }

    #[test]
    fn children_in_document_order() {
        let svg = r##"<svg xmlns="http://www.w3.org/2000/svg">
            <g id="layer">
                <rect x="1" y="2" width="3" height="4" fill="#fff"/>
                <circle cx="1" cy="1" r="1"/>
                <g id="inner"><path d="M0 0L1 1Z" stroke-linejoin="bevel"/></g>
                <title>named</title>
            </g>
        </svg>"##;
        let groups = groups(svg);
        let children = &groups[0].children;
        assert_eq!(children.len(), 3);
        let Node::Rect(rect) = &children[0] else {
            panic!("expected a rect, found {:?}", children[0]);
        };
        assert_eq!(rect.rect, BoundingBox::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(rect.style.fill.as_deref(), Some("#fff"));
        let Node::Group(inner) = &children[1] else {
            panic!("expected a group, found {:?}", children[1]);
        };
        assert!(matches!(&inner.children[0], Node::Path(p) if p.data == "M0 0L1 1Z"));
        assert_eq!(groups[0].title(), Some("named"));
    }

    #[test]
    fn empty_title() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg"><g id="x"><title/></g></svg>"#;
        assert_eq!(groups(svg)[0].title(), Some(""));
    }

    #[test]
    fn missing_attribute_is_an_error() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg">
            <g><rect x="0" y="0" width="1"/></g>
        </svg>"#;
        let doc = Document::parse(svg).unwrap();
        assert_eq!(
            load_groups(&doc),
            Err(write_icons::Error::MissingRequiredAttribute {
                element: "rect",
                attribute: "height"
            })
        );
    }

    #[test]
    fn malformed_xml() {
        let result = convert_svg("<svg><g></svg>", &ConvertOptions::default());
        assert!(matches!(result, Err(ConvertError::Xml(_))), "{result:?}");
    }
}

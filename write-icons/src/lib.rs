//! Building and writing TTIC icon files.
//!
//! An icon is built from a [`tree`] of groups, paths and rectangles by an
//! [`IconBuilder`], normalized onto the canonical icon extent with
//! [`Icon::normalize`], and serialized with [`dump_icon`].
//!
//! ```
//! use write_icons::{
//!     tree::{Group, Node, PathNode, Style},
//!     IconBuilder,
//! };
//!
//! let triangle = PathNode {
//!     style: Style {
//!         fill: Some("#ff0000".into()),
//!         stroke_width: Some(0.25),
//!         ..Default::default()
//!     },
//!     data: "M0.25 0.25L0.75 0.25L0.75 0.75Z".into(),
//! };
//! let group = Group::new(Some("triangle".into()), vec![Node::Path(triangle)]);
//! let mut icon = IconBuilder::default().build([&group]).unwrap();
//! icon.normalize().unwrap();
//! let bytes = write_icons::dump_icon(&icon).unwrap();
//! assert_eq!(&bytes[..4], b"TTIC");
//! ```

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

mod builder;
mod color;
mod error;
mod icon;
mod normalize;
pub mod path_data;
pub mod tree;
mod write;

pub use builder::{IconBuilder, IconFragment, ReservedNames, BOUNDS_TITLE, HIDDEN_PREFIX};
pub use color::{encode_alpha, encode_component, gamma_to_linear, Color, NAMED_COLORS};
pub use error::{Error, ALPHA_RANGE, COLOR_COMPONENT_RANGE};
pub use icon::{Contour, ContourBuilder, CurvePoint, Icon, LineJoin, Path};
pub use normalize::{Normalization, HALF_EXTENT};
pub use write::{dump_icon, IconWrite, IconWriter};

/// Public re-export of the icon-types crate.
pub extern crate icon_types as types;

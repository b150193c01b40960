//! Interpreting SVG style path data.
//!
//! Only a subset of the path mini-language is understood: the absolute
//! commands `M`, `L`, `C`, `S` and `Q`, plus `Z` or `z` to close a
//! contour. Numbers and commands do not need separators between them, so
//! `M0 0L10 0` is two commands.
//!
//! Note that `S` does not reflect the previous control point; it takes the
//! second control point and the end point explicitly, and the first control
//! point of the segment is left implicit for the renderer.

use icon_types::{Point, PointKind};

use crate::{
    error::Error,
    icon::{Contour, ContourBuilder},
};

/// A single lexical element of path data.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathToken {
    Number(f64),
    Command(char),
}

/// An iterator over the tokens in a path data string.
///
/// Each call to [`PathTokens::new`] starts a fresh scan.
#[derive(Clone, Debug)]
pub struct PathTokens<'a> {
    data: &'a str,
    pos: usize,
}

/// A parsed path command, with its arguments.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    /// `M x y`
    MoveTo(Point<f64>),
    /// `L x y`
    LineTo(Point<f64>),
    /// `C x1 y1 x2 y2 x y`
    CurveTo(Point<f64>, Point<f64>, Point<f64>),
    /// `S x2 y2 x y`
    SmoothCurveTo(Point<f64>, Point<f64>),
    /// `Q x1 y1 x y`
    QuadTo(Point<f64>, Point<f64>),
    /// `Z` or `z`
    Close,
}

/// An iterator over the commands in a path data string.
#[derive(Clone, Debug)]
pub struct PathCommands<'a> {
    tokens: PathTokens<'a>,
}

fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || c == '-' || c == '.'
}

impl<'a> PathTokens<'a> {
    pub fn new(data: &'a str) -> Self {
        PathTokens { data, pos: 0 }
    }
}

impl Iterator for PathTokens<'_> {
    type Item = Result<PathToken, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.data[self.pos..];
        let start = rest.find(|c: char| !c.is_ascii_whitespace())?;
        self.pos += start;
        let rest = &rest[start..];
        let first = rest.chars().next()?;

        if !is_number_char(first) {
            self.pos += first.len_utf8();
            return Some(Ok(PathToken::Command(first)));
        }

        let len = rest
            .find(|c: char| !is_number_char(c))
            .unwrap_or(rest.len());
        self.pos += len;
        let text = &rest[..len];
        Some(
            text.parse()
                .map(PathToken::Number)
                .map_err(|_| Error::InvalidNumber(text.to_owned())),
        )
    }
}

impl<'a> PathCommands<'a> {
    pub fn new(data: &'a str) -> Self {
        PathCommands {
            tokens: PathTokens::new(data),
        }
    }

    fn number(&mut self, command: char) -> Result<f64, Error> {
        match self.tokens.next().transpose()? {
            Some(PathToken::Number(value)) => Ok(value),
            _ => Err(Error::MissingPathArgument(command)),
        }
    }

    fn point(&mut self, command: char) -> Result<Point<f64>, Error> {
        let x = self.number(command)?;
        let y = self.number(command)?;
        Ok(Point::new(x, y))
    }

    fn parse_command(&mut self, command: char) -> Result<PathCommand, Error> {
        Ok(match command {
            'M' => PathCommand::MoveTo(self.point(command)?),
            'L' => PathCommand::LineTo(self.point(command)?),
            'C' => PathCommand::CurveTo(
                self.point(command)?,
                self.point(command)?,
                self.point(command)?,
            ),
            'S' => PathCommand::SmoothCurveTo(self.point(command)?, self.point(command)?),
            'Q' => PathCommand::QuadTo(self.point(command)?, self.point(command)?),
            'Z' | 'z' => PathCommand::Close,
            other => return Err(Error::UnsupportedPathCommand(other)),
        })
    }
}

impl Iterator for PathCommands<'_> {
    type Item = Result<PathCommand, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(match self.tokens.next()? {
            Ok(PathToken::Command(command)) => self.parse_command(command),
            Ok(PathToken::Number(value)) => Err(Error::UnexpectedNumber(value)),
            Err(e) => Err(e),
        })
    }
}

impl PathCommand {
    /// The letter used for this command in path data.
    pub fn letter(&self) -> char {
        match self {
            PathCommand::MoveTo(_) => 'M',
            PathCommand::LineTo(_) => 'L',
            PathCommand::CurveTo(..) => 'C',
            PathCommand::SmoothCurveTo(..) => 'S',
            PathCommand::QuadTo(..) => 'Q',
            PathCommand::Close => 'Z',
        }
    }

    /// Append the points of a drawing command to an open contour.
    fn append_to(&self, contour: &mut ContourBuilder) {
        match *self {
            PathCommand::LineTo(p) => contour.push(p.x, p.y, PointKind::Anchor),
            PathCommand::CurveTo(c0, c1, p) => {
                contour.push(c0.x, c0.y, PointKind::CubicControl1);
                contour.push(c1.x, c1.y, PointKind::CubicControl2);
                contour.push(p.x, p.y, PointKind::Anchor);
            }
            PathCommand::SmoothCurveTo(c1, p) => {
                contour.push(c1.x, c1.y, PointKind::CubicControl2);
                contour.push(p.x, p.y, PointKind::Anchor);
            }
            PathCommand::QuadTo(c0, p) => {
                contour.push(c0.x, c0.y, PointKind::QuadraticControl);
                contour.push(p.x, p.y, PointKind::Anchor);
            }
            // these start and end contours, and are handled by the caller
            PathCommand::MoveTo(_) | PathCommand::Close => (),
        }
    }
}

/// Interpret path data, returning the closed contours it describes.
///
/// Only contours terminated by `Z` are returned; a contour that is left
/// open, either by a subsequent `M` or by the end of the data, is dropped.
pub fn parse_contours(data: &str) -> Result<Vec<Contour>, Error> {
    let mut contours = Vec::new();
    let mut current: Option<ContourBuilder> = None;

    for command in PathCommands::new(data) {
        match command? {
            PathCommand::MoveTo(start) => {
                if let Some(open) = current.take() {
                    log::warn!("dropping unclosed contour of {} points", open.len());
                }
                current = Some(ContourBuilder::new(start.x, start.y));
            }
            PathCommand::Close => {
                let closed = current.take().ok_or(Error::NoActiveContour('Z'))?;
                contours.push(closed.close());
            }
            command => {
                let contour = current
                    .as_mut()
                    .ok_or(Error::NoActiveContour(command.letter()))?;
                command.append_to(contour);
            }
        }
    }

    if let Some(open) = current {
        log::warn!("dropping unclosed contour of {} points", open.len());
    }
    log::trace!("parsed {} contours from '{data}'", contours.len());
    Ok(contours)
}

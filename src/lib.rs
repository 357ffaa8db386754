// Copyright 2025 the Roundel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! 2D circle geometry.
//!
//! Roundel provides a [`Circle`] primitive together with the two algorithms
//! that relate it to lines: evenly spaced perimeter sampling and
//! line/segment intersection. The supporting vocabulary types ([`Point`],
//! [`Vec2`], [`Angle`], [`Line`], [`LineSegment`], [`Rect`]) are deliberately
//! small; this crate is about the circle.
//!
//! # Examples
//!
//! Sampling a square's worth of points around a circle:
//! ```
//! use roundel::{Circle, Point};
//!
//! let circle = Circle::new((0.0, 0.0), 1.0);
//! let points = circle.perimeter_points(4.0);
//! assert_eq!(points.len(), 4);
//! assert_eq!(points[0], Point::new(1.0, 0.0));
//! ```
//!
//! Intersecting a circle with a segment:
//! ```
//! use roundel::{Circle, LineSegment, Point};
//!
//! let circle = Circle::new((0.0, 0.0), 1.0);
//! let chord = LineSegment::new((-2.0, 0.0), (2.0, 0.0));
//! let hits = circle.segment_intersections(chord);
//! assert_eq!(hits.as_slice(), &[Point::new(-1.0, 0.0), Point::new(1.0, 0.0)]);
//! ```
//!
//! # Features
//!
//! This crate either uses the standard library or the [`libm`] crate for
//! math functionality. The `std` feature is enabled by default, but can be
//! disabled, as long as the `libm` feature is enabled. This is useful for
//! `no_std` environments.
//!
//! [`libm`]: https://docs.rs/libm

#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::trivially_copy_pass_by_ref)]
#![warn(clippy::doc_markdown, rustdoc::broken_intra_doc_links)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(unused_qualifications)]
#![allow(
    clippy::unreadable_literal,
    clippy::many_single_char_names,
    clippy::excessive_precision
)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("roundel requires either the `std` or `libm` feature");

mod angle;
mod circle;
pub mod common;
mod intersect;
mod line;
mod point;
mod rect;
mod shape;
mod size;
mod vec2;

pub use crate::angle::*;
pub use crate::circle::*;
pub use crate::intersect::*;
pub use crate::line::*;
pub use crate::point::*;
pub use crate::rect::*;
pub use crate::shape::*;
pub use crate::size::*;
pub use crate::vec2::*;

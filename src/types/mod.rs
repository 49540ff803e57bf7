//! Core domain types for randomart.
//!
//! This module contains the evaluation core:
//! - `Colour` - three unbounded float channels and their algebra
//! - `TransformNode` - the expression tree and its evaluation
//! - `Inspection` - one-line node descriptions

mod colour;
mod inspect;
mod node;

pub use colour::{tent, well, Colour, MOD_EPSILON};
pub use inspect::{Inspection, CHILD_PLACEHOLDER};
pub use node::{NodeKind, TransformNode};

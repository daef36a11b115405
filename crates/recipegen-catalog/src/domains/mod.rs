//! One sub-builder per content domain.
//!
//! Every sub-builder has the same shape: it dereferences the content it
//! needs through [`crate::Content`] and saves its recipes into the shared
//! staging output. A missing name fails the whole pass.

pub mod apiculture;
pub mod arboriculture;
pub mod backpacks;
pub mod books;
pub mod charcoal;
pub mod climatology;
pub mod core;
pub mod cultivation;
pub mod database;
pub mod energy;
pub mod factory;
pub mod farming;
pub mod fluids;
pub mod food;
pub mod lepidopterology;
pub mod mail;
pub mod sorting;
pub mod worktable;

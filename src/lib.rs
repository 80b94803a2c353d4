//! Kanban Planning - Labels and sprints for a kanban project board
//!
//! This crate implements project-scoped issue labels and the sprint
//! lifecycle (planning -> active -> completed) behind a JSON HTTP API.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

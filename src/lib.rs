//! Mergington Activities - Extracurricular signup service
//!
//! This crate keeps the school's activity roster in memory and exposes it
//! over HTTP: list the activities, sign a student up, unregister a student.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;

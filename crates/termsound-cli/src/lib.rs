//! termsound CLI library.
//!
//! This crate provides the batch driver that renders a sound catalog to WAV
//! files. The `termsound` binary is a thin argument parser over
//! [`commands::generate_all`].

pub mod commands;

// ABOUTME: Library crate for the PPDB portal exposing public API for testing and external use

#![allow(missing_docs)]

pub mod app;
pub mod applications;
pub mod auth;
pub mod components;
pub mod config;
pub mod models;
pub mod notify;
pub mod storage;
pub mod wizard;

//! Lead Capture API Library
//!
//! This library provides the core functionality for the lead capture gateway:
//! a validated lead-submission pipeline that proxies form submissions to an
//! external CRM API and normalizes every failure into a uniform JSON envelope.
//!
//! # Modules
//!
//! - `api_client`: Generic JSON API client with timeout and error normalization.
//! - `config`: Configuration management (server and client side).
//! - `errors`: Backend error handling types.
//! - `handlers`: HTTP request handlers and router assembly.
//! - `lead_client`: Client-side lead submission service with local validation.
//! - `lead_service`: Backend lead service talking to the CRM API.
//! - `middleware`: Error envelope middleware.
//! - `models`: Core data models and wire envelopes.
//! - `submission`: Submission state machine for form frontends.
//! - `validation`: Shared required-field and email-format checks.

pub mod api_client;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod lead_client;
pub mod lead_service;
pub mod middleware;
pub mod models;
pub mod submission;
pub mod validation;

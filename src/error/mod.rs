//! Error types for the bot.
//!
//! This module provides the application's error hierarchy. The `AppError` enum
//! serves as the top-level error type that wraps domain-specific errors; the
//! command handler catches it at the interaction boundary and renders it as a
//! human-readable reply so no error crashes the gateway task.

pub mod config;
pub mod publish;
pub mod validation;

use thiserror::Error;

use crate::error::{
    config::ConfigError, publish::PublishError, validation::ValidationError,
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application.
/// Most variants use `#[from]` for automatic error conversion.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Malformed or missing command input, rejected before any remote call.
    #[error(transparent)]
    ValidationErr(#[from] ValidationError),

    /// Failure fetching the header image or pushing files to the content
    /// repository.
    #[error(transparent)]
    PublishErr(#[from] PublishError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// HTTP client construction or request error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

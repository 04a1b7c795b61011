//! Discord bot integration for publishing blog posts.
//!
//! This module hosts the gateway client and the `/news` slash command. The
//! command accepts blog-post metadata, formats it as a front-matter-annotated
//! markdown document, and commits the document and its header image to the
//! content repository through the shared GitHub client.
//!
//! The bot is the whole application: the handler owns the shared HTTP and
//! GitHub clients, registers the command on `ready`, and services each
//! interaction with fully local data, so concurrent invocations share
//! nothing but the clients themselves.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive guild lifecycle events
//! - `GUILD_MESSAGES` - Send the post summary message into the channel

pub mod command;
pub mod handler;
pub mod start;

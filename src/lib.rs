//! Mind-map editor shell around the `canvas` core.
//!
//! | Module     | Role                                                      |
//! |------------|-----------------------------------------------------------|
//! | `config`   | `AppConfig` from the environment                          |
//! | `llm`      | Ollama chat client behind the `Enhancer` trait            |
//! | `services` | document file round-trip, background enhancement worker   |
//! | `session`  | `EditorSession`: buffer + engine + worker + status line   |
//! | `adapters` | JSON and outline render adapters                          |
//! | `commands` | launcher subcommands (render, outline, enhance, watch)    |
//! | `error`    | `AppError`                                                |

pub mod adapters;
pub mod commands;
pub mod config;
pub mod error;
pub mod llm;
pub mod services;
pub mod session;

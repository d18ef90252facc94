//! Core module - settings, window setup and on-disk records
//!
//! Everything here is independent of chess rules and of the board view:
//!
//! - `settings_persistence` - [`BoardSettings`] loaded from / saved to the
//!   user's config directory as JSON
//! - `window_config` - primary window sized to fit the board exactly
//! - `game_records` - PGN files written into the saves folder
//! - `error` - [`CoreError`] for all of the above

pub mod error;
pub mod game_records;
pub mod settings_persistence;
pub mod window_config;

pub use error::{CoreError, CoreResult};
pub use game_records::{save_game_record, SAVES_DIR};
pub use settings_persistence::{load_settings, save_settings, settings_path, BoardSettings};
pub use window_config::{WindowConfig, WINDOW_TITLE};

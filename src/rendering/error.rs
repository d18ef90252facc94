//! Error types for the board view

use thiserror::Error;

use crate::assets::AssetError;
use crate::core::CoreError;
use crate::game::error::GameError;

#[derive(Error, Debug)]
pub enum ViewError {
    /// Sprite cache could not be built or a sprite lookup missed
    #[error(transparent)]
    Asset(#[from] AssetError),

    /// Move text was malformed or not legal in the current position
    #[error(transparent)]
    Game(#[from] GameError),

    /// Settings passed to the view were unusable
    #[error(transparent)]
    Settings(#[from] CoreError),
}

pub type ViewResult<T> = Result<T, ViewError>;

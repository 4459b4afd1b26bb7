pub mod errors;
pub mod persistence;
pub mod store;
pub mod types;

pub use errors::FavouritesError;
pub use persistence::{load_favourites, save_favourites};
pub use store::FavouritesStore;
pub use types::{FavouriteSession, FavouritesData};

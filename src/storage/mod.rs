mod catalog_store;
mod menu_io;

pub use catalog_store::{load_catalog, save_catalog};
pub use menu_io::{load_menu, save_menu, write_shopping_csv};

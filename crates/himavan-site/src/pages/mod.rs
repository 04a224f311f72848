//! Site pages

mod category;
mod home;

pub use category::CategoryPage;
pub use home::HomePage;

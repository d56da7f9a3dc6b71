mod landing;
pub use landing::{select_language, Landing, LandingPage, LandingView};

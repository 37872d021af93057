pub mod analytics;
pub mod hero;
pub mod navbar;
pub mod statistics;
pub mod upload;
pub mod visualize;
pub mod wiki;

pub use analytics::Analytics;
pub use hero::Hero;
pub use navbar::Navbar;
pub use statistics::Statistics;
pub use upload::Upload;
pub use visualize::Visualize;
pub use wiki::Wiki;

pub mod app;
pub mod input;
pub mod results;
pub mod terminal;

pub use app::App;
pub use input::QueryInput;
pub use results::ResultList;

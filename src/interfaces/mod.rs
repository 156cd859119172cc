// Display surfaces implementing the application's Presenter port
pub mod json_presenter;
pub mod table_presenter;

// Plain value listing for the --options command
pub mod options_listing;

// Display strings derived from pipeline output
pub mod view_models;

pub use json_presenter::JsonPresenter;
pub use options_listing::write_options;
pub use table_presenter::TablePresenter;

mod directories;

pub use directories::build_app_state;

mod game_handler;

pub use game_handler::GameHandler;

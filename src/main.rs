mod api;
mod app;
mod config;
mod filter;
mod ui;

use iced::Size;

use app::State;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = config::load();

    tracing::info!("Starting reqpad, talking to {}", config.api.base_url);

    let window_size = Size::new(config.window.width, config.window.height);

    iced::application(move || State::new(&config), State::update, State::view)
        .title("Reqpad")
        .theme(State::theme)
        .window_size(window_size)
        .run()
}

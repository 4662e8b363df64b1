use iced::Application;

fn main() -> iced::Result {
    // load environment from .env (optional)
    let _ = dotenvy::dotenv();
    env_logger::init();
    eglise_cfc::client::gui::app::ChurchApp::run(iced::Settings::default())
}

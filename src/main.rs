mod app;
mod commands;
mod config;
mod language;
mod logging;
mod processing;
mod render;
mod script;
mod session;
mod upload;

#[tokio::main]
async fn main() {
    if let Err(e) = app::run().await {
        render::terminal::print_notification(&format!("{e:#}"));
        std::process::exit(1);
    }
}

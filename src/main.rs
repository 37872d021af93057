fn main() {
    alchemist::logging::init();
    let config = alchemist::config::load();
    tracing::info!(api_base = %config.api_base, "starting Data Alchemist");
    dioxus::LaunchBuilder::new()
        .with_context(config)
        .launch(alchemist::ui::App);
}

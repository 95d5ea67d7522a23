use floating_counter::logging;
use floating_counter::settings::Settings;
use floating_counter::shell;

fn main() -> anyhow::Result<()> {
    let settings_path = Settings::path();
    let settings = Settings::load(&settings_path)?;
    logging::init(
        settings.debug_logging,
        settings.log_file.as_ref().map(Into::into),
    );
    tracing::info!(settings = %settings_path, "starting floating counter");

    shell::run(settings, settings_path)
}

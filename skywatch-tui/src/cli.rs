use anyhow::Context;
use clap::{Parser, Subcommand};
use skywatch_core::{Config, WeatherReport, provider::WeatherProvider, provider_from_config};

use crate::app;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skywatch", version, about = "Debounced weather lookup widget")]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Initial location to look up when the widget opens.
    pub location: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the WeatherAPI.com key in the config file.
    Configure,

    /// Print current conditions for a location and exit.
    Show {
        /// Location name, e.g. "Paris" or a postal code.
        location: String,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Command::Configure) => configure(),
            Some(Command::Show { location }) => show(&location).await,
            None => app::run_widget(self.location).await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = inquire::Text::new("WeatherAPI.com key:")
        .prompt()
        .context("Failed to read API key from prompt")?;

    config.set_api_key(api_key.trim().to_string());
    config.save()?;

    println!("Saved to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn show(location: &str) -> anyhow::Result<()> {
    let config = Config::load()?;
    let provider = provider_from_config(&config)?;

    let report = provider.current(location).await?;
    print_report(&report);
    Ok(())
}

fn print_report(report: &WeatherReport) {
    let icon = skywatch_core::select_weather_icon(Some(&report.current));

    println!("{} / {}", report.location.name, report.location.country);
    println!(
        "{} {}  {}°C / {}°F",
        icon.glyph(),
        report.current.condition.text,
        report.current.temp_c,
        report.current.temp_f
    );

    if let Some(aq) = &report.current.air_quality {
        println!(
            "Air quality: PM2.5 {:.1}, PM10 {:.1} (US EPA index {})",
            aq.pm2_5, aq.pm10, aq.us_epa_index
        );
    }
    if let Some(observed_at) = report.current.observed_at {
        println!("Observed at {}", observed_at.format("%Y-%m-%d %H:%M UTC"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn bare_location_launches_the_widget() {
        let cli = Cli::parse_from(["skywatch", "Paris"]);
        assert_eq!(cli.location.as_deref(), Some("Paris"));
        assert!(cli.command.is_none());
    }

    #[test]
    fn show_takes_a_location() {
        let cli = Cli::parse_from(["skywatch", "show", "Paris"]);
        match cli.command {
            Some(Command::Show { location }) => assert_eq!(location, "Paris"),
            other => panic!("expected show subcommand, got {other:?}"),
        }
    }
}

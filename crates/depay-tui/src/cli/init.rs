/*
[INPUT]:  Interactive user input via CLI
[OUTPUT]: Generated YAML configuration file
[POS]:    CLI initialization layer
[UPDATE]: When AppConfig schema changes
*/

use anyhow::{Context, Result};
use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use std::path::PathBuf;

use depay_tui::config::{AccountConfig, ApiConfig, AppConfig};

pub fn run_init(output: PathBuf) -> Result<()> {
    println!("{}", style("Welcome to DePay Init").bold().cyan());
    println!(
        "{}",
        style("This will guide you through creating a new client configuration.").dim()
    );

    let theme = ColorfulTheme::default();

    let base_url: String = Input::with_theme(&theme)
        .with_prompt("Backend API URL")
        .default("http://localhost:5000".to_string())
        .interact_text()?;

    println!("\n{}", style("--- Account ---").bold());
    let store_credentials = Confirm::with_theme(&theme)
        .with_prompt("Store sign-in credentials in the config?")
        .default(false)
        .interact()?;

    let account = if store_credentials {
        let email: String = Input::with_theme(&theme)
            .with_prompt("Email")
            .interact_text()?;
        let password: String = Input::with_theme(&theme)
            .with_prompt("Password")
            .interact_text()?;
        Some(AccountConfig { email, password })
    } else {
        None
    };

    let config = AppConfig {
        api: ApiConfig {
            base_url,
            ..ApiConfig::default()
        },
        account,
    };

    let yaml = serde_yaml::to_string(&config).context("failed to serialize config to YAML")?;

    std::fs::write(&output, yaml)
        .context(format!("failed to write config to {}", output.display()))?;

    println!("\n{}", style("SUCCESS!").bold().green());
    println!(
        "Configuration written to: {}",
        style(output.display()).cyan()
    );

    Ok(())
}

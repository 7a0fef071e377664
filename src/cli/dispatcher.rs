use crate::api::client::EstatClient;
use crate::api::models::ResponseFormat;
use crate::api::params::{MetaInfoParams, StatsDataParams, StatsListParams};
use crate::cli::main_types::{AuthCommands, Commands, ConfigCommands, StatsCommands};
use crate::core::auth::AppIdInput;
use crate::error::{AppError, CliError};
use crate::storage::config::Config;
use crate::storage::credentials::{AuthMode, Credentials};
use crate::utils::text::mask_app_id;
use std::path::PathBuf;

pub struct Dispatcher {
    config: Config,
    config_path: Option<PathBuf>,
    credentials: Credentials,
    verbose: bool,
    app_id: Option<String>,
}

impl Dispatcher {
    // Static helper function for verbose logging (used before self exists)
    fn print_verbose(verbose: bool, msg: &str) {
        crate::utils::logging::print_verbose(verbose, msg);
    }

    // Instance method for verbose logging
    fn log_verbose(&self, msg: &str) {
        Self::print_verbose(self.verbose, msg);
    }

    pub fn new(
        config: Config,
        config_path: Option<PathBuf>,
        credentials: Credentials,
        verbose: bool,
        app_id: Option<String>,
    ) -> Self {
        if matches!(credentials.get_auth_mode(), AuthMode::Environment) {
            Self::print_verbose(verbose, "appId is set via environment, skipping keyring");
        }

        Self {
            config,
            config_path,
            credentials,
            verbose,
            app_id,
        }
    }

    pub async fn dispatch(&self, command: Commands) -> Result<(), AppError> {
        match command {
            Commands::Auth { command } => self.handle_auth_command(command).await,
            Commands::Config { command } => self.handle_config_command(command).await,
            Commands::Stats { command } => self.handle_stats_command(command).await,
        }
    }

    async fn handle_auth_command(&self, commands: AuthCommands) -> Result<(), AppError> {
        match commands {
            AuthCommands::Login => {
                self.log_verbose("Attempting auth login command");
                let input = AppIdInput::collect()?;
                input.validate()?;
                Credentials::save_app_id_for_profile(
                    &self.credentials.profile_name,
                    &input.app_id,
                )?;
                println!(
                    "✅ appId saved for profile: {}",
                    self.credentials.profile_name
                );
                Ok(())
            }
            AuthCommands::Logout => {
                self.log_verbose("Attempting auth logout command");
                Credentials::clear_app_id_for_profile(&self.credentials.profile_name)?;
                println!(
                    "✅ appId removed for profile: {}",
                    self.credentials.profile_name
                );
                Ok(())
            }
            AuthCommands::Status => {
                self.log_verbose("Attempting auth status command");

                println!("Authentication Status:");
                println!("=====================");

                match self.credentials.get_auth_mode() {
                    AuthMode::Environment => {
                        println!("Authentication Mode: Environment (ESTAT_APP_ID)");
                    }
                    AuthMode::Keyring => {
                        println!("Authentication Mode: OS Keyring");
                    }
                }

                // Always render through the mask, never the raw value
                let resolved = self
                    .app_id
                    .as_ref()
                    .filter(|v| !v.is_empty())
                    .cloned()
                    .or_else(|| self.credentials.resolve_app_id());
                match resolved {
                    Some(app_id) => println!("appId: {}", mask_app_id(&app_id)),
                    None => println!("appId: (not set)"),
                }

                if let Some(profile) = &self.config.default_profile {
                    println!("\nActive Profile: {}", profile);
                } else {
                    println!("\nActive Profile: (default)");
                }

                Ok(())
            }
        }
    }

    async fn handle_config_command(&self, commands: ConfigCommands) -> Result<(), AppError> {
        match commands {
            ConfigCommands::Show => {
                self.log_verbose("Attempting config show command");

                println!("Current Configuration:");
                println!("=====================");

                if let Some(default_profile) = &self.config.default_profile {
                    println!("Default Profile: {}", default_profile);
                } else {
                    println!("Default Profile: (not set)");
                }

                println!("\nProfiles:");
                if self.config.profiles.is_empty() {
                    println!("  No profiles configured");
                } else {
                    for (name, profile) in &self.config.profiles {
                        println!("  [{}]", name);
                        println!(
                            "    Language: {}",
                            profile.language.as_deref().unwrap_or("J (default)")
                        );
                        println!(
                            "    Format: {}",
                            profile.format.as_deref().unwrap_or("xml (default)")
                        );
                        if let Some(gzip) = profile.gzip {
                            println!("    Gzip: {}", if gzip { "enabled" } else { "disabled" });
                        }
                        if let Some(timeout) = profile.timeout_seconds {
                            println!("    Timeout: {} seconds", timeout);
                        }
                    }
                }

                Ok(())
            }
            ConfigCommands::Set { key, value } => {
                self.log_verbose(&format!(
                    "Attempting config set - key: {}, value: {}",
                    key, value
                ));

                let mut config = self.config.clone();
                let profile_name = self.credentials.profile_name.clone();
                let mut profile = config.get_profile(&profile_name).cloned().unwrap_or_default();

                match key.as_str() {
                    "language" => {
                        // Same validation the client runs, applied up front
                        let lang = crate::api::models::Language::parse(&value)?;
                        profile.language = Some(lang.as_str().to_string());
                    }
                    "format" => {
                        let format = ResponseFormat::parse(&value)?;
                        profile.format = Some(format.as_str().to_string());
                    }
                    "gzip" => {
                        let gzip = value.parse::<bool>().map_err(|_| {
                            CliError::InvalidArguments(format!(
                                "gzip must be true or false, got '{}'",
                                value
                            ))
                        })?;
                        profile.gzip = Some(gzip);
                    }
                    "timeout" => {
                        let timeout = value.parse::<u64>().map_err(|_| {
                            CliError::InvalidArguments(format!(
                                "timeout must be a number of seconds, got '{}'",
                                value
                            ))
                        })?;
                        profile.timeout_seconds = Some(timeout);
                    }
                    _ => {
                        return Err(CliError::InvalidArguments(format!(
                            "Unknown configuration key '{}' (expected language, format, gzip, or timeout)",
                            key
                        ))
                        .into());
                    }
                }

                config.set_profile(profile_name.clone(), profile);
                config.save(self.config_path.clone())?;
                println!("✅ Set {} = {} for profile: {}", key, value, profile_name);
                Ok(())
            }
        }
    }

    async fn handle_stats_command(&self, commands: StatsCommands) -> Result<(), AppError> {
        let client = self.build_client()?;

        let body = match commands {
            StatsCommands::List {
                survey_years,
                open_years,
                stats_field,
                stats_code,
                search_word,
                search_kind,
                collect_area,
                explanation,
                name_list,
                start_position,
                limit,
                updated_date,
                callback,
            } => {
                self.log_verbose("Attempting stats list command");
                let params = StatsListParams {
                    survey_years,
                    open_years,
                    stats_field,
                    stats_code,
                    search_word,
                    search_kind,
                    collect_area,
                    explanation_get_flg: explanation,
                    stats_name_list: name_list,
                    start_position,
                    limit,
                    updated_date,
                    callback,
                };
                client.get_stats_list(&params).await?
            }
            StatsCommands::Meta {
                stats_data_id,
                explanation,
                callback,
            } => {
                self.log_verbose("Attempting stats meta command");
                let params = MetaInfoParams {
                    stats_data_id,
                    explanation_get_flg: explanation,
                    callback,
                };
                client.get_meta_info(&params).await?
            }
            StatsCommands::Data {
                data_set_id,
                stats_data_id,
                start_position,
                limit,
                meta,
                count_only,
                explanation,
                annotation,
                callback,
                section_header,
                param,
            } => {
                self.log_verbose("Attempting stats data command");
                let params = StatsDataParams {
                    data_set_id,
                    stats_data_id,
                    start_position,
                    limit,
                    meta_get_flg: meta,
                    cnt_get_flg: count_only,
                    explanation_get_flg: explanation,
                    annotation_get_flg: annotation,
                    callback,
                    section_header_flg: Some(section_header.unwrap_or(1)),
                    extra: parse_extra_params(&param)?,
                };
                client.get_stats_data(&params).await?
            }
        };

        self.print_body(&client, &body);
        Ok(())
    }

    /// Build a client from the active profile and the resolved appId.
    fn build_client(&self) -> Result<EstatClient, AppError> {
        let app_id = self.resolve_app_id()?;
        let profile = self
            .config
            .get_profile(&self.credentials.profile_name)
            .cloned()
            .unwrap_or_default();

        let lang = profile.language.as_deref().unwrap_or("J");
        let format = profile.format.as_deref().unwrap_or("xml");
        let gzip = profile.gzip.unwrap_or(true);

        let client = match profile.timeout_seconds {
            Some(secs) => EstatClient::with_timeout(app_id, lang, format, gzip, secs),
            None => EstatClient::new(app_id, lang, format, gzip),
        }?;

        self.log_verbose(&format!("Client ready: {:?}", client));
        Ok(client)
    }

    /// Resolve the credential: flag/environment, then keyring, then a
    /// scoped non-echoing prompt as the last resort.
    fn resolve_app_id(&self) -> Result<String, AppError> {
        if let Some(app_id) = self.app_id.as_ref().filter(|v| !v.is_empty()) {
            return Ok(app_id.clone());
        }
        if let Some(app_id) = self.credentials.resolve_app_id() {
            return Ok(app_id);
        }

        self.log_verbose("No stored appId found, prompting");
        let input = AppIdInput::collect()?;
        input.validate()?;
        Ok(input.app_id)
    }

    fn print_body(&self, client: &EstatClient, body: &str) {
        if client.format() == ResponseFormat::Json {
            if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
                if let Ok(pretty) = serde_json::to_string_pretty(&value) {
                    println!("{}", pretty);
                    return;
                }
            }
        }
        println!("{}", body);
    }
}

/// Split repeated `key=value` arguments into query pairs.
fn parse_extra_params(params: &[String]) -> Result<Vec<(String, String)>, AppError> {
    params
        .iter()
        .map(|raw| {
            raw.split_once('=')
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .ok_or_else(|| {
                    CliError::InvalidArguments(format!(
                        "Parameter '{}' is not in key=value format",
                        raw
                    ))
                    .into()
                })
        })
        .collect()
}

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "estat-cli")]
#[command(about = "Command line interface tool for interacting with the e-Stat API")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(short, long, global = true)]
    pub profile: Option<String>,

    #[arg(long, global = true)]
    pub config_dir: Option<String>,

    #[arg(long, global = true, env = "ESTAT_APP_ID")]
    pub app_id: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Authentication commands
    Auth {
        #[command(subcommand)]
        command: AuthCommands,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Statistics retrieval
    Stats {
        #[command(subcommand)]
        command: StatsCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum AuthCommands {
    /// Register an appId for the active profile
    Login,
    /// Remove the stored appId
    Logout,
    /// Show authentication status
    Status,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the current configuration
    Show,
    /// Set configuration value (language, format, gzip, timeout)
    Set {
        /// Configuration key
        key: String,
        /// Configuration value
        value: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum StatsCommands {
    /// Search the statistics table catalog (getStatsList)
    List {
        /// Survey years (yyyy, yyyymm, or yyyymm-yyyymm)
        #[arg(long)]
        survey_years: Option<String>,
        /// Publication years, same syntax as --survey-years
        #[arg(long)]
        open_years: Option<String>,
        /// Field of statistics code
        #[arg(long)]
        stats_field: Option<String>,
        /// Government statistics code
        #[arg(long)]
        stats_code: Option<String>,
        /// Search keyword
        #[arg(long)]
        search_word: Option<String>,
        /// Search target kind
        #[arg(long, default_value = "1")]
        search_kind: u32,
        /// Collection area code
        #[arg(long)]
        collect_area: Option<String>,
        /// Include explanations in the result
        #[arg(long, default_value_t = true, action = ArgAction::Set)]
        explanation: bool,
        /// Return the statistics name list instead of table info
        #[arg(long)]
        name_list: bool,
        /// First record position
        #[arg(long, default_value = "1")]
        start_position: u32,
        /// Maximum number of records
        #[arg(long, default_value = "100000")]
        limit: u32,
        /// Only tables updated on this date (yyyymmdd or a range)
        #[arg(long)]
        updated_date: Option<String>,
        /// JSONP callback function name
        #[arg(long)]
        callback: Option<String>,
    },
    /// Fetch meta information for a statistics table (getMetaInfo)
    Meta {
        /// Statistics table ID
        #[arg(long)]
        stats_data_id: Option<String>,
        /// Include explanations in the result
        #[arg(long)]
        explanation: bool,
        /// JSONP callback function name
        #[arg(long)]
        callback: Option<String>,
    },
    /// Fetch statistics data (getStatsData)
    Data {
        /// Dataset ID
        #[arg(long)]
        data_set_id: Option<String>,
        /// Statistics table ID
        #[arg(long)]
        stats_data_id: Option<String>,
        /// First record position
        #[arg(long, default_value = "1")]
        start_position: u32,
        /// Maximum number of records
        #[arg(long, default_value = "100000")]
        limit: u32,
        /// Include meta information
        #[arg(long, default_value_t = true, action = ArgAction::Set)]
        meta: bool,
        /// Return only the record count
        #[arg(long)]
        count_only: bool,
        /// Include explanations in the result
        #[arg(long, default_value_t = true, action = ArgAction::Set)]
        explanation: bool,
        /// Include annotations in the result
        #[arg(long, default_value_t = true, action = ArgAction::Set)]
        annotation: bool,
        /// JSONP callback function name
        #[arg(long)]
        callback: Option<String>,
        /// csv section header switch (1 = emit, 0 = suppress)
        #[arg(long)]
        section_header: Option<u32>,
        /// Additional selection filters in key=value format (e.g. cdCat01=001)
        #[arg(long, action = ArgAction::Append)]
        param: Vec<String>,
    },
}

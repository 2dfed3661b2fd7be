use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Compile a JSON query request into a filter expression, ordering and page window
    Compile {
        #[arg(long, help = "Query request file path (JSON)")]
        request: String,

        #[arg(long, help = "Settings file path (JSON), defaults are used when omitted")]
        settings: Option<String>,

        /// Target grammar: "linq" or "postgres", overrides the settings file
        #[arg(long)]
        dialect: Option<String>,

        #[arg(long, help = "Pretty-print the JSON output")]
        pretty: bool,

        #[arg(
            long,
            help = "If specified, writes the compiled plan to this file instead of stdout"
        )]
        output: Option<String>,
    },
    /// List the filter operators with their numeric codes
    Operators {
        #[arg(long, help = "Print the table as JSON")]
        json: bool,
    },
}

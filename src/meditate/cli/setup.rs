use clap::{CommandFactory, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "meditate",
    bin_name = "meditate",
    version,
    disable_help_flag = true,
    disable_help_subcommand = true
)]
#[command(about = "Guided meditation scripts, assembled to the time you have", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Print help
    #[arg(short, long, global = true)]
    pub help: bool,
}

/// Command group definitions for help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Session,
    Library,
    Misc,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Session => "Session Commands:",
            CommandGroup::Library => "Library Commands:",
            CommandGroup::Misc => "Miscellaneous:",
        }
    }

    /// Returns the group for a given command name
    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "generate" => Some(CommandGroup::Session),
            "list" | "show" | "languages" => Some(CommandGroup::Library),
            "check" | "config" | "help" => Some(CommandGroup::Misc),
            _ => None,
        }
    }

    /// Returns all groups in display order
    pub fn all() -> &'static [CommandGroup] {
        &[
            CommandGroup::Session,
            CommandGroup::Library,
            CommandGroup::Misc,
        ]
    }
}

/// Returns the custom grouped help output as a string
pub fn get_grouped_help() -> String {
    let cmd = Cli::command();
    let version = cmd.get_version().unwrap_or("unknown");

    let mut output = String::new();
    output.push_str(&format!("meditate {version}\n"));
    output.push_str("Guided meditation scripts, assembled to the time you have\n");
    output.push('\n');
    output.push_str("Usage: meditate [OPTIONS] [COMMAND]\n");

    let subcommands: Vec<_> = cmd.get_subcommands().collect();

    for group in CommandGroup::all() {
        let group_cmds: Vec<_> = subcommands
            .iter()
            .filter(|sc| {
                !sc.is_hide_set() && CommandGroup::for_command(sc.get_name()) == Some(*group)
            })
            .collect();

        if !group_cmds.is_empty() {
            output.push('\n');
            output.push_str(&format!("{}\n", group.heading()));
            for sc in group_cmds {
                let name = sc.get_name();
                let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
                output.push_str(&format!("  {:<12} {}\n", name, about));
            }
        }
    }

    output.push('\n');
    output.push_str("Options:\n");
    output.push_str("  -v, --verbose    Verbose output\n");
    output.push_str("  -h, --help       Print help\n");
    output.push_str("  -V, --version    Print version\n");

    output
}

/// Generates the custom grouped help output
pub fn print_grouped_help() {
    print!("{}", get_grouped_help());
}

/// Prints help for a specific subcommand using clap's built-in rendering
pub fn print_subcommand_help(command: &Option<Commands>) {
    let subcommand_name = match command {
        Some(Commands::Session(SessionCommands::Generate { .. })) => "generate",
        Some(Commands::Library(c)) => match c {
            LibraryCommands::List { .. } => "list",
            LibraryCommands::Show { .. } => "show",
            LibraryCommands::Languages => "languages",
        },
        Some(Commands::Misc(c)) => match c {
            MiscCommands::Check => "check",
            MiscCommands::Config { .. } => "config",
            MiscCommands::Help { .. } => "help",
        },
        None => {
            print_grouped_help();
            return;
        }
    };

    print_help_for_command(subcommand_name);
}

/// Prints help for a command by name
pub fn print_help_for_command(name: &str) {
    let mut cmd = Cli::command();

    for subcmd in cmd.get_subcommands_mut() {
        if subcmd.get_name() == name {
            let help = subcmd.render_help();
            print!("{}", help);
            return;
        }
    }

    eprintln!("Unknown command: {}", name);
    eprintln!();
    print_grouped_help();
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Session(SessionCommands),

    #[command(flatten)]
    Library(LibraryCommands),

    #[command(flatten)]
    Misc(MiscCommands),
}

#[derive(Subcommand, Debug)]
pub enum SessionCommands {
    /// Generate a meditation script
    #[command(alias = "g", display_order = 1)]
    Generate {
        /// Meditation type: sleep, stress, focus, anxiety, energy, mindfulness,
        /// compassion, walking, breathing or morning
        category: String,

        /// Session length in minutes (defaults to the configured value)
        #[arg(short, long, allow_negative_numbers = true)]
        minutes: Option<f64>,

        /// Language code, e.g. en, fr, ja (defaults to the configured value)
        #[arg(short, long)]
        language: Option<String>,

        /// Use the template at this position (see `list`) instead of a random one
        #[arg(short, long, conflicts_with = "seed")]
        template: Option<usize>,

        /// Seed the random template choice for a reproducible pick
        #[arg(long)]
        seed: Option<u64>,

        /// Print only the script, without header or styling (for piping to TTS)
        #[arg(long)]
        raw: bool,

        /// Copy the script to the clipboard
        #[arg(long)]
        copy: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum LibraryCommands {
    /// List the templates available in a language
    #[command(alias = "ls", display_order = 10)]
    List {
        /// Only list this meditation type
        category: Option<String>,

        /// Language code (defaults to the configured value)
        #[arg(short, long)]
        language: Option<String>,
    },

    /// Show every section of one template
    #[command(display_order = 11)]
    Show {
        /// Meditation type
        category: String,

        /// Template position within the type (see `list`)
        index: usize,

        /// Language code (defaults to the configured value)
        #[arg(short, long)]
        language: Option<String>,
    },

    /// Show which meditation types each language offers
    #[command(display_order = 12)]
    Languages,
}

#[derive(Subcommand, Debug)]
pub enum MiscCommands {
    /// Validate the template corpus
    #[command(display_order = 30)]
    Check,

    /// Get or set configuration
    #[command(display_order = 31)]
    Config {
        /// Configuration key (language or minutes)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Print help for meditate or a subcommand
    #[command(display_order = 32)]
    Help {
        /// Subcommand to get help for
        command: Option<String>,
    },
}

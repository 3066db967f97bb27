//! # CLI Layer
//!
//! This module is **one possible UI client** for meditate; it is not the library itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! Generated scripts go to stdout; warnings about the session (an unsupported language,
//! a failed clipboard copy) go to stderr, so `meditate generate sleep --raw | tts` only
//! ever pipes narration.
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Builds `AppContext` with API and configuration
//! - `handle_*()`: Per-command handlers that call API and format output

use super::render::{
    eprint_messages, print_messages, render_config, render_coverage, render_issues,
    render_meditation, render_template_detail, render_template_list,
};
use super::setup::{
    print_grouped_help, print_help_for_command, print_subcommand_help, Cli, Commands,
    LibraryCommands, MiscCommands, SessionCommands,
};
use clap::Parser;
use meditate::api::{ConfigAction, MeditateApi};
use meditate::clipboard::{copy_to_clipboard, format_for_clipboard};
use meditate::config::MeditateConfig;
use meditate::error::{MeditateError, Result};
use meditate::init::initialize;
use meditate::logging::init_tracing;
use meditate::model::Language;
use meditate::picker::{FixedPicker, RandomPicker, TemplatePicker};
use meditate::store::embedded::EmbeddedStore;

type DynPicker = Box<dyn TemplatePicker>;

struct AppContext {
    api: MeditateApi<EmbeddedStore, DynPicker>,
    config: MeditateConfig,
}

/// Options of a single `generate` invocation.
struct GenerateOptions {
    category: String,
    minutes: Option<f64>,
    language: Option<String>,
    template: Option<usize>,
    seed: Option<u64>,
    raw: bool,
    copy: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Top level gets the grouped help, subcommands clap's own
    if cli.help {
        print_subcommand_help(&cli.command);
        return Ok(());
    }

    let command = match cli.command {
        Some(Commands::Misc(MiscCommands::Help { command })) => return handle_help(command),
        Some(command) => command,
        None => {
            print_grouped_help();
            return Ok(());
        }
    };

    let mut ctx = init_context()?;

    match command {
        Commands::Session(SessionCommands::Generate {
            category,
            minutes,
            language,
            template,
            seed,
            raw,
            copy,
        }) => handle_generate(
            &mut ctx,
            GenerateOptions {
                category,
                minutes,
                language,
                template,
                seed,
                raw,
                copy,
            },
        ),
        Commands::Library(cmd) => match cmd {
            LibraryCommands::List { category, language } => {
                handle_list(&ctx, category, language)
            }
            LibraryCommands::Show {
                category,
                index,
                language,
            } => handle_show(&ctx, category, index, language),
            LibraryCommands::Languages => handle_languages(&ctx),
        },
        Commands::Misc(cmd) => match cmd {
            MiscCommands::Check => handle_check(&ctx),
            MiscCommands::Config { key, value } => handle_config(&ctx, key, value),
            MiscCommands::Help { command } => handle_help(command),
        },
    }
}

fn init_context() -> Result<AppContext> {
    let picker: DynPicker = Box::new(RandomPicker::new());
    let ctx = initialize(picker)?;
    Ok(AppContext {
        api: ctx.api,
        config: ctx.config,
    })
}

fn handle_generate(ctx: &mut AppContext, opts: GenerateOptions) -> Result<()> {
    let picker: DynPicker = match (opts.template, opts.seed) {
        (Some(index), _) => Box::new(FixedPicker(index)),
        (None, Some(seed)) => Box::new(RandomPicker::with_seed(seed)),
        (None, None) => Box::new(RandomPicker::new()),
    };
    ctx.api.set_picker(picker);

    let minutes = opts.minutes.unwrap_or(ctx.config.default_minutes);
    let language = opts
        .language
        .unwrap_or_else(|| ctx.config.default_language.clone());

    let result = ctx.api.generate(&opts.category, minutes, Some(&language))?;
    eprint_messages(&result.messages);

    if let Some(meditation) = &result.meditation {
        if opts.raw {
            println!("{}", meditation.text);
        } else {
            print!("{}", render_meditation(meditation));
        }

        if opts.copy {
            let text = format_for_clipboard(&meditation.template_name, &meditation.text);
            if let Err(e) = copy_to_clipboard(&text) {
                eprintln!("Warning: Failed to copy to clipboard: {}", e);
            }
        }
    }
    Ok(())
}

fn handle_list(
    ctx: &AppContext,
    category: Option<String>,
    language: Option<String>,
) -> Result<()> {
    let language = language_or_default(ctx, language)?;
    let result = ctx.api.list_templates(language, category.as_deref())?;
    if !result.templates.is_empty() {
        print!("{}", render_template_list(&result.templates));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(
    ctx: &AppContext,
    category: String,
    index: usize,
    language: Option<String>,
) -> Result<()> {
    let language = language_or_default(ctx, language)?;
    let result = ctx.api.show_template(language, &category, index)?;
    if let Some(detail) = &result.detail {
        print!("{}", render_template_detail(detail));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_languages(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.coverage()?;
    print!("{}", render_coverage(&result.coverage));
    print_messages(&result.messages);
    Ok(())
}

fn handle_check(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.check()?;
    print!("{}", render_issues(&result.issues));
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print!("{}", render_config(config));
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_help(command: Option<String>) -> Result<()> {
    match command {
        Some(name) => print_help_for_command(&name),
        None => print_grouped_help(),
    }
    Ok(())
}

/// Library commands need a language they can actually list, so an unsupported code is
/// an error here rather than a fallback.
fn language_or_default(ctx: &AppContext, language: Option<String>) -> Result<Language> {
    let code = language.unwrap_or_else(|| ctx.config.default_language.clone());
    Language::parse(&code).ok_or(MeditateError::UnsupportedLanguage(code))
}

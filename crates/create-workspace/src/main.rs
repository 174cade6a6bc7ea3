//! create-workspace - resolve the configuration for a new workspace

use anyhow::Result;
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use workspace_core::options::{Bundler, CiProvider, E2eTestRunner, PackageManager, WorkspaceType};
use workspace_core::preset::Preset;
use workspace_core::{handoff, logging, Environment, ProductConfig, RawRequest, FAILURE_EXIT_CODE};

/// Product configuration for the workspace creator
#[derive(Clone)]
pub struct WorkspaceConfig;

impl ProductConfig for WorkspaceConfig {
    fn name(&self) -> &'static str {
        "create-workspace"
    }

    fn display_name(&self) -> &'static str {
        "Create Workspace"
    }

    fn docs_url(&self) -> &'static str {
        "https://create-workspace.dev/docs"
    }

    fn cli_description(&self) -> &'static str {
        "Create a new workspace from a built-in or third-party preset"
    }

    fn tutorial_link(&self, preset: Preset) -> String {
        let page = match preset {
            Preset::Npm | Preset::Core | Preset::Ts | Preset::Apps | Preset::Empty => {
                "getting-started/tutorials/npm-workspaces-tutorial"
            }
            Preset::TsStandalone => "getting-started/tutorials/typescript-packages-tutorial",
            Preset::ReactMonorepo | Preset::NextJs => "getting-started/tutorials/react-monorepo-tutorial",
            Preset::ReactStandalone | Preset::NextJsStandalone => {
                "getting-started/tutorials/react-standalone-tutorial"
            }
            Preset::AngularMonorepo => "getting-started/tutorials/angular-monorepo-tutorial",
            Preset::AngularStandalone => "getting-started/tutorials/angular-standalone-tutorial",
            Preset::VueStandalone | Preset::VueMonorepo => {
                "getting-started/tutorials/vue-standalone-tutorial"
            }
            Preset::NodeStandalone | Preset::NodeMonorepo | Preset::Nest | Preset::Express => {
                "getting-started/tutorials/node-server-tutorial"
            }
            _ => return self.docs_url().to_string(),
        };
        format!("{}/{}", self.docs_url(), page)
    }
}

#[derive(Parser, Debug)]
#[command(name = "create-workspace")]
#[command(about = "Create a new workspace from a built-in or third-party preset")]
#[command(version)]
pub struct Args {
    /// Workspace name (e.g. org name)
    #[arg(value_name = "NAME")]
    pub positional_name: Option<String>,

    /// Workspace name (e.g. org name)
    #[arg(long)]
    pub name: Option<String>,

    /// Built-in preset id or npm package specifier of a third-party preset
    #[arg(long)]
    pub preset: Option<String>,

    /// Ask for missing options; with --interactive=false defaults are used
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub interactive: bool,

    /// Prompt for options that are normally defaulted
    #[arg(long, alias = "allPrompts")]
    pub all_prompts: bool,

    #[arg(long, value_enum, alias = "workspaceType")]
    pub workspace_type: Option<WorkspaceType>,

    /// Application name
    #[arg(long, alias = "appName")]
    pub app_name: Option<String>,

    /// Stylesheet format (css, scss, less, styled-components, @emotion/styled, styled-jsx, none)
    #[arg(long)]
    pub style: Option<String>,

    /// Framework (react: none, nextjs, expo, react-native; node: none, express, fastify, koa, nest)
    #[arg(long)]
    pub framework: Option<String>,

    #[arg(long, value_enum)]
    pub bundler: Option<Bundler>,

    #[arg(long, value_enum, alias = "e2eTestRunner")]
    pub e2e_test_runner: Option<E2eTestRunner>,

    /// Use Standalone Components (angular)
    #[arg(long, alias = "standaloneApi", num_args = 0..=1, default_missing_value = "true")]
    pub standalone_api: Option<bool>,

    /// Add routing (angular)
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub routing: Option<bool>,

    /// Generate a Dockerfile (node)
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub docker: Option<bool>,

    /// Use the Next.js App Router
    #[arg(long, alias = "nextAppDir", num_args = 0..=1, default_missing_value = "true")]
    pub next_app_dir: Option<bool>,

    /// Generate plain JavaScript instead of TypeScript
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub js: Option<bool>,

    #[arg(long, value_enum, alias = "packageManager")]
    pub package_manager: Option<PackageManager>,

    /// Default base branch
    #[arg(long, alias = "defaultBase")]
    pub default_base: Option<String>,

    /// CI provider to generate a workflow for
    #[arg(long, value_enum)]
    pub ci: Option<CiProvider>,

    /// Enable distributed caching
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub cloud: Option<bool>,

    /// Write the resolved configuration to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Show resolver diagnostics on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl From<Args> for RawRequest {
    fn from(args: Args) -> Self {
        RawRequest {
            name: args.positional_name.or(args.name),
            preset: args.preset,
            interactive: args.interactive,
            all_prompts: args.all_prompts,
            workspace_type: args.workspace_type,
            app_name: args.app_name,
            style: args.style,
            framework: args.framework,
            bundler: args.bundler,
            e2e_test_runner: args.e2e_test_runner,
            standalone_api: args.standalone_api,
            routing: args.routing,
            docker: args.docker,
            next_app_dir: args.next_app_dir,
            js: args.js,
            package_manager: args.package_manager,
            default_base: args.default_base,
            ci: args.ci,
            cloud: args.cloud,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Ctrl+C counts as a cancelled run
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(FAILURE_EXIT_CODE);
    })
    .ok();

    let args = Args::parse();
    logging::init(args.verbose);

    let product = WorkspaceConfig;
    let output = args.output.clone();
    let request = RawRequest::from(args);
    let env = Environment::from_process();

    let result = workspace_core::run(&product, &request, &env);

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    let config = match result {
        Ok(config) => config,
        Err(err) => {
            tracing::debug!(error = ?err, "resolution failed");
            workspace_core::tui::report(&err);
            std::process::exit(err.exit_code());
        }
    };

    match &output {
        Some(path) => {
            handoff::write_configuration(&config, path).await?;
            cliclack::log::info(format!("Configuration written to {}", path.display()))?;
        }
        None => print!("{}", handoff::render_yaml(&config)?),
    }

    for line in handoff::summary(&config) {
        eprintln!("  {}", line);
    }
    cliclack::outro(product.next_steps(&config).join("\n"))?;

    Ok(())
}

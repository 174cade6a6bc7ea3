//! Stack classification and per-stack option resolution
//!
//! Every resolver follows the same shape: an explicit preset is honored and
//! only the fields it does not imply are resolved; without one, the stack's
//! [`PresetTree`] decides the preset, then the remaining options are resolved.

use super::primitives::Resolver;
use super::tree::{PresetTree, TreeOutcome};
use crate::config::{
    AngularOptions, NodeOptions, NoneOptions, ReactApp, ReactOptions, StackOptions,
    UnknownOptions, VueOptions,
};
use crate::error::ResolveError;
use crate::options::{NodeFramework, OptionValue, Style, WorkspaceType};
use crate::preset::{Preset, Stack};
use crate::prompt::Prompter;
use crate::request::RawRequest;

/// Stack of a built-in preset, or the operator's choice when there is none
pub fn classify<P: Prompter + ?Sized>(
    resolver: &mut Resolver<'_, P>,
    preset: Option<Preset>,
) -> Result<Stack, ResolveError> {
    match preset {
        Some(preset) => Ok(preset.stack()),
        None => resolver.stack(),
    }
}

/// Resolve the options of `stack`
pub fn resolve_stack<P: Prompter + ?Sized>(
    resolver: &mut Resolver<'_, P>,
    stack: Stack,
    preset: Option<Preset>,
    name: &str,
) -> Result<StackOptions, ResolveError> {
    tracing::debug!(%stack, preset = ?preset, "resolving stack options");

    match stack {
        Stack::None => none_options(resolver, preset, name).map(StackOptions::None),
        Stack::React => react_options(resolver, preset, name).map(StackOptions::React),
        Stack::Angular => angular_options(resolver, preset, name).map(StackOptions::Angular),
        Stack::Vue => vue_options(resolver, preset, name).map(StackOptions::Vue),
        Stack::Node => node_options(resolver, preset, name).map(StackOptions::Node),
        Stack::Unknown => preset
            .map(|preset| StackOptions::Unknown(UnknownOptions { preset }))
            .ok_or(ResolveError::MissingOption { option: "preset" }),
    }
}

fn walk_tree<P: Prompter + ?Sized>(
    resolver: &mut Resolver<'_, P>,
    stack: Stack,
) -> Result<TreeOutcome, ResolveError> {
    PresetTree::for_stack(stack)
        .ok_or(ResolveError::MissingOption { option: "preset" })?
        .walk(resolver)
}

fn wrong_preset(stack: Stack, preset: Preset) -> ResolveError {
    ResolveError::InvalidOption {
        option: "preset",
        value: preset.to_string(),
        expected: Preset::ALL
            .iter()
            .filter(|p| p.stack() == stack)
            .map(|p| p.to_string())
            .collect(),
    }
}

fn none_options<P: Prompter + ?Sized>(
    resolver: &mut Resolver<'_, P>,
    preset: Option<Preset>,
    name: &str,
) -> Result<NoneOptions, ResolveError> {
    let (preset, workspace_type) = match preset {
        Some(preset) => (preset, preset.workspace_type()),
        None => {
            let outcome = walk_tree(resolver, Stack::None)?;
            (outcome.preset, outcome.workspace_type)
        }
    };

    // Only the standalone TypeScript preset generates a default package
    let (app_name, js) = if preset == Preset::TsStandalone {
        (Some(name.to_string()), resolver.js()?)
    } else {
        (None, resolver.request.js.unwrap_or(false))
    };

    Ok(NoneOptions {
        preset,
        workspace_type,
        app_name,
        js,
    })
}

/// The `--framework` flag when an explicit preset fixes a different framework
fn conflicting_framework_flag<'r>(
    request: &'r RawRequest,
    preset: Preset,
    implied: &str,
) -> Option<&'r str> {
    let flag = RawRequest::non_empty(&request.framework).filter(|flag| *flag != implied)?;
    tracing::warn!(%preset, flag, "--framework is ignored, the preset fixes the framework");
    Some(flag)
}

fn react_options<P: Prompter + ?Sized>(
    resolver: &mut Resolver<'_, P>,
    preset: Option<Preset>,
    name: &str,
) -> Result<ReactOptions, ResolveError> {
    let explicit = preset.filter(|p| *p != Preset::React);
    let (preset, workspace_type, app_name) = match explicit {
        Some(preset) => {
            let app_name = if matches!(preset, Preset::ReactStandalone | Preset::NextJsStandalone) {
                resolver.standalone_app_name(name)
            } else {
                resolver.app_name(name)?
            };
            let workspace_type = preset.workspace_type().unwrap_or(WorkspaceType::Integrated);
            (preset, workspace_type, app_name)
        }
        None => {
            let outcome = walk_tree(resolver, Stack::React)?;
            let workspace_type = match outcome.workspace_type {
                Some(wt) => wt,
                None => {
                    if resolver.request.workspace_type == Some(WorkspaceType::Standalone) {
                        tracing::warn!(
                            preset = %outcome.preset,
                            "standalone workspaces are not supported for this framework, using integrated"
                        );
                    }
                    WorkspaceType::Integrated
                }
            };
            let app_name = if workspace_type == WorkspaceType::Standalone {
                resolver.standalone_app_name(name)
            } else {
                resolver.app_name(name)?
            };
            (outcome.preset, workspace_type, app_name)
        }
    };

    let app = match preset {
        Preset::ReactStandalone | Preset::ReactMonorepo => {
            let bundler = resolver.bundler()?;
            let e2e_test_runner = resolver.e2e_test_runner()?;
            let style = resolver.style(&Style::REACT)?;
            ReactApp::Web {
                bundler,
                e2e_test_runner,
                style,
            }
        }
        Preset::NextJs | Preset::NextJsStandalone => {
            let app_dir = resolver.next_app_dir()?;
            let e2e_test_runner = resolver.e2e_test_runner()?;
            let style = resolver.style(&Style::REACT)?;
            ReactApp::NextJs {
                app_dir,
                e2e_test_runner,
                style,
            }
        }
        Preset::ReactNative => ReactApp::ReactNative {
            style: resolver.style_flag(&Style::REACT)?,
        },
        Preset::Expo => ReactApp::Expo {
            style: resolver.style_flag(&Style::REACT)?,
        },
        other => return Err(wrong_preset(Stack::React, other)),
    };

    if explicit.is_some() {
        conflicting_framework_flag(resolver.request, preset, app.framework().id());
    }

    Ok(ReactOptions {
        preset,
        workspace_type,
        app_name,
        app,
    })
}

fn angular_options<P: Prompter + ?Sized>(
    resolver: &mut Resolver<'_, P>,
    preset: Option<Preset>,
    name: &str,
) -> Result<AngularOptions, ResolveError> {
    let (preset, workspace_type) = match preset.filter(|p| *p != Preset::Angular) {
        Some(preset) => (
            preset,
            preset.workspace_type().unwrap_or(WorkspaceType::Integrated),
        ),
        None => {
            let outcome = walk_tree(resolver, Stack::Angular)?;
            (
                outcome.preset,
                outcome.workspace_type.unwrap_or(WorkspaceType::Integrated),
            )
        }
    };

    let app_name = if preset == Preset::AngularStandalone {
        resolver.standalone_app_name(name)
    } else {
        resolver.app_name(name)?
    };

    let style = resolver.style(&Style::ANGULAR)?;
    let e2e_test_runner = resolver.e2e_test_runner()?;
    let standalone_api = resolver.standalone_api()?;
    let routing = resolver.routing()?;

    Ok(AngularOptions {
        preset,
        workspace_type,
        app_name,
        style,
        e2e_test_runner,
        standalone_api,
        routing,
    })
}

fn vue_options<P: Prompter + ?Sized>(
    resolver: &mut Resolver<'_, P>,
    preset: Option<Preset>,
    name: &str,
) -> Result<VueOptions, ResolveError> {
    let (preset, workspace_type) = match preset {
        Some(preset) => (
            preset,
            preset.workspace_type().unwrap_or(WorkspaceType::Integrated),
        ),
        None => {
            let outcome = walk_tree(resolver, Stack::Vue)?;
            (
                outcome.preset,
                outcome.workspace_type.unwrap_or(WorkspaceType::Integrated),
            )
        }
    };

    let app_name = if preset == Preset::VueStandalone {
        resolver.standalone_app_name(name)
    } else {
        resolver.app_name(name)?
    };

    let e2e_test_runner = resolver.e2e_test_runner()?;
    let style = resolver.style(&Style::VUE)?;

    Ok(VueOptions {
        preset,
        workspace_type,
        app_name,
        style,
        e2e_test_runner,
    })
}

fn node_options<P: Prompter + ?Sized>(
    resolver: &mut Resolver<'_, P>,
    preset: Option<Preset>,
    name: &str,
) -> Result<NodeOptions, ResolveError> {
    let (preset, workspace_type, app_name, framework) = match preset {
        Some(preset) => {
            let app_name = if matches!(preset, Preset::Nest | Preset::Express | Preset::NodeMonorepo) {
                resolver.app_name(name)?
            } else {
                resolver.standalone_app_name(name)
            };

            // nest and express are framework-specific; the shells ask
            let framework = match preset {
                Preset::NodeStandalone | Preset::NodeMonorepo => resolver.node_framework()?,
                Preset::Nest => NodeFramework::Nest,
                Preset::Express => NodeFramework::Express,
                other => return Err(wrong_preset(Stack::Node, other)),
            };
            conflicting_framework_flag(resolver.request, preset, framework.id());

            let workspace_type = preset.workspace_type().unwrap_or(WorkspaceType::Integrated);
            (preset, workspace_type, app_name, framework)
        }
        None => {
            let framework = resolver.node_framework()?;
            let outcome = walk_tree(resolver, Stack::Node)?;
            let workspace_type = outcome.workspace_type.unwrap_or(WorkspaceType::Integrated);
            let app_name = if outcome.preset == Preset::NodeStandalone {
                resolver.standalone_app_name(name)
            } else {
                resolver.app_name(name)?
            };
            (outcome.preset, workspace_type, app_name, framework)
        }
    };

    let docker = resolver.docker()?;

    Ok(NodeOptions {
        preset,
        workspace_type,
        app_name,
        framework,
        docker,
    })
}

//! Resolution of a raw request into a [`ResolvedConfiguration`]
//!
//! Resolution runs strictly in order, one question at a time:
//! normalize the preset, workspace name, third-party lookup, stack
//! classification, stack options, then package manager, default base, cloud
//! and CI. Only [`resolve`] merges partial results.

mod cross;
mod primitives;
mod stacks;
mod tree;

pub use cross::DEFAULT_BASE;
pub use primitives::Resolver;
pub use stacks::{classify, resolve_stack};
pub use tree::{Edge, PresetTree, TreeOutcome};

use crate::config::{ResolvedConfiguration, StackOptions, ThirdPartyOptions};
use crate::error::ResolveError;
use crate::preset::normalize_preset;
use crate::prompt::{DefaultsPrompter, Prompter};
use crate::request::{Environment, RawRequest};
use crate::third_party::{lookup_preset, PresetRef};

/// Resolve `request` into a complete configuration.
///
/// Questions go to `prompter` when the request is interactive; otherwise every
/// question is answered with its default and only notices reach `prompter`.
pub fn resolve<P: Prompter + ?Sized>(
    request: &RawRequest,
    env: &Environment,
    prompter: &mut P,
) -> Result<ResolvedConfiguration, ResolveError> {
    let mut request = request.clone();
    if let Some(notice) = normalize_preset(&mut request.preset) {
        tracing::info!(title = %notice.title, "preset rewritten");
        prompter.notify(&notice)?;
    }

    if request.interactive {
        resolve_normalized(&request, env, prompter)
    } else {
        tracing::debug!("non-interactive run, answering with defaults");
        resolve_normalized(&request, env, &mut DefaultsPrompter)
    }
}

fn resolve_normalized<P: Prompter + ?Sized>(
    request: &RawRequest,
    env: &Environment,
    prompter: &mut P,
) -> Result<ResolvedConfiguration, ResolveError> {
    let mut resolver = Resolver::new(request, env, prompter);
    let name = resolver.folder_name()?;

    let preset = match RawRequest::non_empty(&request.preset) {
        Some(raw) => Some(lookup_preset(raw)?),
        None => None,
    };

    let options = match preset {
        Some(PresetRef::ThirdParty(spec)) => {
            tracing::debug!(preset = %spec, "third-party preset, skipping stack questions");
            StackOptions::ThirdParty(ThirdPartyOptions::new(spec))
        }
        Some(PresetRef::BuiltIn(preset)) => {
            let stack = classify(&mut resolver, Some(preset))?;
            resolve_stack(&mut resolver, stack, Some(preset), &name)?
        }
        None => {
            let stack = classify(&mut resolver, None)?;
            resolve_stack(&mut resolver, stack, None, &name)?
        }
    };

    let package_manager = resolver.package_manager()?;
    let default_base = resolver.default_base()?;
    let cloud = resolver.cloud()?;
    let ci = resolver.ci(cloud)?;

    let config = ResolvedConfiguration {
        name,
        options,
        package_manager,
        default_base,
        cloud,
        ci,
    };
    tracing::info!(
        name = %config.name,
        preset = config.preset(),
        package_manager = ?config.package_manager,
        "workspace configuration resolved"
    );
    Ok(config)
}

//! Preset decision trees
//!
//! A tree maps the structural answers of a stack (topology, and for react the
//! framework) to a concrete preset. Inner nodes are questions whose choices are
//! exactly their outgoing edges; leaves are presets.

use super::primitives::Resolver;
use crate::error::ResolveError;
use crate::options::{ReactFramework, WorkspaceType};
use crate::preset::{Preset, Stack};
use crate::prompt::Prompter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresetTree {
    Leaf(Preset),
    /// Ask for the workspace topology
    Topology(Vec<(WorkspaceType, PresetTree)>),
    /// Ask for the react framework
    Framework(Vec<(ReactFramework, PresetTree)>),
}

/// One answered question on a path through a tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Topology(WorkspaceType),
    Framework(ReactFramework),
}

/// Result of walking a tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeOutcome {
    pub preset: Preset,
    /// Set when the path asked for a topology
    pub workspace_type: Option<WorkspaceType>,
    /// Set when the path asked for a framework
    pub framework: Option<ReactFramework>,
}

impl PresetTree {
    /// Standalone-or-monorepo choice between two presets
    pub fn standalone_or_monorepo(standalone: Preset, integrated: Preset) -> Self {
        PresetTree::Topology(vec![
            (WorkspaceType::Integrated, PresetTree::Leaf(integrated)),
            (WorkspaceType::Standalone, PresetTree::Leaf(standalone)),
        ])
    }

    /// Tree for a stack, or `None` for the unknown stack which has no tree
    pub fn for_stack(stack: Stack) -> Option<Self> {
        let tree = match stack {
            Stack::None => PresetTree::Topology(vec![
                (WorkspaceType::PackageBased, PresetTree::Leaf(Preset::Npm)),
                (WorkspaceType::Integrated, PresetTree::Leaf(Preset::Apps)),
                (WorkspaceType::Standalone, PresetTree::Leaf(Preset::TsStandalone)),
            ]),
            // Mobile frameworks only support integrated monorepos, so they skip topology
            Stack::React => PresetTree::Framework(vec![
                (
                    ReactFramework::None,
                    Self::standalone_or_monorepo(Preset::ReactStandalone, Preset::ReactMonorepo),
                ),
                (
                    ReactFramework::NextJs,
                    Self::standalone_or_monorepo(Preset::NextJsStandalone, Preset::NextJs),
                ),
                (ReactFramework::Expo, PresetTree::Leaf(Preset::Expo)),
                (ReactFramework::ReactNative, PresetTree::Leaf(Preset::ReactNative)),
            ]),
            Stack::Angular => {
                Self::standalone_or_monorepo(Preset::AngularStandalone, Preset::AngularMonorepo)
            }
            Stack::Vue => Self::standalone_or_monorepo(Preset::VueStandalone, Preset::VueMonorepo),
            Stack::Node => {
                Self::standalone_or_monorepo(Preset::NodeStandalone, Preset::NodeMonorepo)
            }
            Stack::Unknown => return None,
        };
        Some(tree)
    }

    /// Resolve each question on the way down and return the leaf reached
    pub fn walk<P: Prompter + ?Sized>(
        &self,
        resolver: &mut Resolver<'_, P>,
    ) -> Result<TreeOutcome, ResolveError> {
        let mut node = self;
        let mut workspace_type = None;
        let mut framework = None;

        loop {
            node = match node {
                PresetTree::Leaf(preset) => {
                    tracing::debug!(%preset, "decision tree reached preset");
                    return Ok(TreeOutcome {
                        preset: *preset,
                        workspace_type,
                        framework,
                    });
                }
                PresetTree::Topology(edges) => {
                    let offered: Vec<WorkspaceType> = edges.iter().map(|(wt, _)| *wt).collect();
                    let picked = resolver.workspace_type(&offered)?;
                    workspace_type = Some(picked);
                    follow(edges, &picked, "workspace-type")?
                }
                PresetTree::Framework(edges) => {
                    let offered: Vec<ReactFramework> = edges.iter().map(|(fw, _)| *fw).collect();
                    let picked = resolver.react_framework(&offered)?;
                    framework = Some(picked);
                    follow(edges, &picked, "framework")?
                }
            };
        }
    }

    /// Every root-to-leaf path with the preset it ends in
    pub fn paths(&self) -> Vec<(Vec<Edge>, Preset)> {
        let mut out = Vec::new();
        self.collect_paths(&mut Vec::new(), &mut out);
        out
    }

    fn collect_paths(&self, prefix: &mut Vec<Edge>, out: &mut Vec<(Vec<Edge>, Preset)>) {
        match self {
            PresetTree::Leaf(preset) => out.push((prefix.clone(), *preset)),
            PresetTree::Topology(edges) => {
                for (wt, child) in edges {
                    prefix.push(Edge::Topology(*wt));
                    child.collect_paths(prefix, out);
                    prefix.pop();
                }
            }
            PresetTree::Framework(edges) => {
                for (fw, child) in edges {
                    prefix.push(Edge::Framework(*fw));
                    child.collect_paths(prefix, out);
                    prefix.pop();
                }
            }
        }
    }
}

fn follow<'t, K: PartialEq>(
    edges: &'t [(K, PresetTree)],
    key: &K,
    question: &'static str,
) -> Result<&'t PresetTree, ResolveError> {
    edges
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, child)| child)
        .ok_or(ResolveError::Cancelled { question })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::OptionValue;
    use crate::prompt::ScriptedPrompter;
    use crate::request::{Environment, RawRequest};

    fn script_for(path: &[Edge]) -> ScriptedPrompter {
        path.iter().fold(ScriptedPrompter::new(), |prompter, edge| match edge {
            Edge::Topology(wt) => prompter.choose("workspace-type", wt.id()),
            Edge::Framework(fw) => prompter.choose("framework", fw.id()),
        })
    }

    #[test]
    fn test_every_edge_of_every_tree_reaches_its_preset() {
        let request = RawRequest::default();
        let env = Environment::new(std::env::temp_dir());

        for stack in Stack::SELECTABLE {
            let tree = PresetTree::for_stack(stack).expect("selectable stacks have trees");
            for (path, expected) in tree.paths() {
                let mut prompter = script_for(&path);
                let outcome = tree
                    .walk(&mut Resolver::new(&request, &env, &mut prompter))
                    .unwrap();
                assert_eq!(outcome.preset, expected, "path {path:?}");
                assert_eq!(expected.stack(), stack);
                assert_eq!(prompter.asked().len(), path.len());
            }
        }
    }

    #[test]
    fn test_every_leaf_preset_implies_the_topology_that_led_to_it() {
        for stack in Stack::SELECTABLE {
            let tree = PresetTree::for_stack(stack).unwrap();
            for (path, preset) in tree.paths() {
                let expected = path.iter().find_map(|edge| match edge {
                    Edge::Topology(wt) => Some(*wt),
                    Edge::Framework(_) => None,
                });
                let implied = preset.workspace_type();
                match expected {
                    Some(wt) => assert_eq!(implied, Some(wt), "{preset}"),
                    None => assert_eq!(implied, Some(WorkspaceType::Integrated), "{preset}"),
                }
            }
        }
    }

    #[test]
    fn test_mobile_frameworks_never_offer_standalone() {
        let tree = PresetTree::for_stack(Stack::React).unwrap();
        for (path, preset) in tree.paths() {
            if matches!(preset, Preset::ReactNative | Preset::Expo) {
                assert_eq!(path.len(), 1);
                assert!(!path.iter().any(|e| matches!(e, Edge::Topology(_))));
            }
        }
    }

    #[test]
    fn test_none_stack_offers_three_topologies() {
        let tree = PresetTree::for_stack(Stack::None).unwrap();
        let presets: Vec<Preset> = tree.paths().into_iter().map(|(_, p)| p).collect();
        assert_eq!(presets, vec![Preset::Npm, Preset::Apps, Preset::TsStandalone]);
    }

    #[test]
    fn test_unknown_stack_has_no_tree() {
        assert!(PresetTree::for_stack(Stack::Unknown).is_none());
    }

    #[test]
    fn test_walk_uses_topology_flag() {
        let request = RawRequest {
            workspace_type: Some(WorkspaceType::Standalone),
            ..Default::default()
        };
        let env = Environment::new(std::env::temp_dir());
        let mut prompter = ScriptedPrompter::new();
        let tree = PresetTree::for_stack(Stack::Vue).unwrap();
        let outcome = tree
            .walk(&mut Resolver::new(&request, &env, &mut prompter))
            .unwrap();
        assert_eq!(outcome.preset, Preset::VueStandalone);
        assert_eq!(outcome.workspace_type, Some(WorkspaceType::Standalone));
        assert!(prompter.asked().is_empty());
    }
}

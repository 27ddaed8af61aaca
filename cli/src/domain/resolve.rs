//! Turns `<target> <action> <name>` into an [`InstallPlan`].
//!
//! Pure function over the registry: no filesystem access. Either every
//! argument checks out and a complete plan is returned, or nothing is.

use std::path::Path;

use claude_kit_common::{ADD, PROFILE, Registry, Target};

use crate::domain::error::ResolveError;
use crate::domain::plan::{InstallOp, InstallPlan, PlanKind};

/// The three positional arguments. Any of them may be missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Invocation<'a> {
    pub target: Option<&'a str>,
    pub action: Option<&'a str>,
    pub name: Option<&'a str>,
}

impl<'a> Invocation<'a> {
    /// Split raw positional arguments into an invocation.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::Usage`] when more than three arguments are given.
    pub fn from_args<S: AsRef<str>>(args: &'a [S]) -> Result<Self, ResolveError> {
        if args.len() > 3 {
            let extra: Vec<&str> = args[3..].iter().map(AsRef::<str>::as_ref).collect();
            return Err(ResolveError::Usage(format!(
                "unexpected argument(s): {}",
                extra.join(" ")
            )));
        }
        let mut it = args.iter().map(AsRef::<str>::as_ref);
        Ok(Self {
            target: it.next(),
            action: it.next(),
            name: it.next(),
        })
    }
}

/// Resolve an invocation against `registry`, placing destinations under `cwd`.
///
/// Checks run in a fixed order. For `profile`: action, then profile name.
/// For targets: target, then action, then item name.
///
/// # Errors
///
/// Returns the first [`ResolveError`] encountered.
pub fn resolve(
    registry: &Registry,
    inv: Invocation<'_>,
    cwd: &Path,
) -> Result<InstallPlan, ResolveError> {
    let target = inv.target.unwrap_or_default();

    if target == PROFILE {
        require_add(inv.action)?;
        let name = inv.name.unwrap_or_default();
        let profile = registry
            .profile(name)
            .ok_or_else(|| ResolveError::UnknownProfile {
                name: name.to_string(),
                available: registry.profile_names(),
            })?;

        let mut ops = Vec::with_capacity(profile.len());
        for (target_id, item) in profile.items() {
            // Registry::validate guarantees the target exists.
            let Some(t) = registry.target(target_id) else {
                return Err(ResolveError::UnknownTarget {
                    target: target_id.to_string(),
                });
            };
            ops.push(op(t, item, cwd));
        }
        tracing::debug!(profile = name, items = ops.len(), "resolved profile");
        return Ok(InstallPlan {
            kind: PlanKind::Profile(name.to_string()),
            ops,
        });
    }

    let t = registry
        .target(target)
        .ok_or_else(|| ResolveError::UnknownTarget {
            target: target.to_string(),
        })?;
    require_add(inv.action)?;
    let name = inv.name.unwrap_or_default();
    if !t.contains(name) {
        return Err(ResolveError::UnknownName {
            target: t.id.clone(),
            name: name.to_string(),
            available: t.available.clone(),
        });
    }

    tracing::debug!(item_type = %t.id, name, "resolved single item");
    Ok(InstallPlan {
        kind: PlanKind::Single,
        ops: vec![op(t, name, cwd)],
    })
}

fn require_add(action: Option<&str>) -> Result<(), ResolveError> {
    match action {
        Some(ADD) => Ok(()),
        other => Err(ResolveError::UnknownAction {
            action: other.unwrap_or_default().to_string(),
        }),
    }
}

fn op(target: &Target, name: &str, cwd: &Path) -> InstallOp {
    InstallOp {
        item_type: target.id.clone(),
        name: name.to_string(),
        source: target.source_path(name),
        destination: target.dest_path(cwd, name),
    }
}

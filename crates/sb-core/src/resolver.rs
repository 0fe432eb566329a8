//! Entity resolution: from an optional name to a loaded spec record.

use crate::entity::{EntityKind, identity_of};
use crate::error::{BookError, BookResult};
use crate::project::Project;
use crate::prompt::{Prompter, select};
use crate::record::Record;

/// An entity whose spec has been found and loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    /// File stem of the spec.
    pub identity: String,
    /// Loaded spec content.
    pub record: Record,
}

/// Find and load the spec for one entity.
///
/// With a (non-blank) `explicit` name the spec must exist under the name's
/// identity. Without one the operator picks from the existing specs of
/// `kind`.
pub fn resolve<P: Prompter + ?Sized>(
    project: &Project,
    kind: EntityKind,
    explicit: Option<&str>,
    prompter: &mut P,
) -> BookResult<Resolved> {
    let identity = match explicit.map(str::trim).filter(|n| !n.is_empty()) {
        Some(name) => {
            let identity = identity_of(name);
            if !project.record_path(kind, &identity).is_file() {
                return Err(BookError::EntityNotFound {
                    kind,
                    name: name.to_string(),
                });
            }
            identity
        }
        None => choose(project, kind, prompter)?,
    };

    let record = project.load(&project.record_path(kind, &identity))?;
    tracing::debug!(%kind, %identity, "resolved entity");
    Ok(Resolved {
        identity,
        record,
    })
}

fn choose<P: Prompter + ?Sized>(
    project: &Project,
    kind: EntityKind,
    prompter: &mut P,
) -> BookResult<String> {
    let mut candidates = project.candidates(kind)?;
    if candidates.is_empty() {
        return Err(BookError::NoCandidates(kind));
    }
    let index = select(
        prompter,
        &kind.selection_title(),
        &kind.selection_question(),
        &candidates,
        project.config().max_attempts,
    )?;
    Ok(candidates.swap_remove(index))
}

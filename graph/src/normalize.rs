use crate::config::NormalizeConfig;
use crate::error::NormalizeError;
use crate::{Output, repo, sort};

/// Puts `output` in its persisted form: canonical def repos, then canonical order.
///
/// On error the output is left unsorted; refs before the failing one keep their
/// canonicalized `def_repo`.
pub fn normalize(output: &mut Output, config: &NormalizeConfig) -> Result<(), NormalizeError> {
    if config.canonicalize_def_repos {
        for r in &mut output.refs {
            if r.def_repo.is_empty() {
                continue;
            }
            r.def_repo = repo::make_uri(&r.def_repo).map_err(|source| NormalizeError::DefRepo {
                def_repo: r.def_repo.clone(),
                source,
            })?;
        }
    }

    sort(output);
    Ok(())
}

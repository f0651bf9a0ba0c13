//! Move sources available from the command line.

mod human;

pub use human::HumanSource;

use crate::settings::{PlayerKind, PlayerSettings};
use strictly_mnk::{FirstFreeSource, MoveSource, ScriptedSource};
use tracing::{debug, instrument};

/// Builds the move source described by `settings`, falling back to
/// `default_kind` and `default_name` for anything left unset.
#[instrument(skip(settings))]
pub fn build_source(
    settings: &PlayerSettings,
    default_kind: PlayerKind,
    default_name: &str,
) -> Box<dyn MoveSource> {
    let kind = settings.kind.unwrap_or(default_kind);
    let name = settings
        .name
        .clone()
        .unwrap_or_else(|| default_name.to_string());
    debug!(?kind, %name, "Building move source");

    match kind {
        PlayerKind::Human => Box::new(HumanSource::new(
            name,
            std::io::stdin().lock(),
            std::io::stdout(),
        )),
        PlayerKind::FirstFree => Box::new(FirstFreeSource::new(name)),
        PlayerKind::Scripted => Box::new(ScriptedSource::new(name, settings.positions())),
    }
}

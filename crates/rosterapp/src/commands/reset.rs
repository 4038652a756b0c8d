use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::persistence::PersistenceBridge;
use crate::records::{Collection, Record};
use crate::storage::KeyValueBackend;

/// Remove the stored copy of one kind and empty it in memory.
pub fn run<B: KeyValueBackend, R: Record>(
    bridge: &PersistenceBridge<B>,
    collection: &mut Collection<R>,
) -> Result<CmdResult> {
    bridge.clear::<R>()?;
    let removed = collection.len();
    *collection = Collection::new();

    let mut result = CmdResult::default().with_changed(removed > 0);
    result.add_message(CmdMessage::success(format!(
        "Cleared {} ({} removed)",
        R::KEY,
        removed
    )));
    Ok(result)
}

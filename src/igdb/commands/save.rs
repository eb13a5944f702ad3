use crate::commands::{CmdMessage, CmdResult, Session};
use crate::error::Result;
use crate::store::DataStore;

/// Writes the whole database through `store` and clears the dirty flag.
pub fn run<S: DataStore>(session: &mut Session, store: &mut S) -> Result<CmdResult> {
    let messages = store.save(session.db())?;
    session.mark_clean();

    let mut result = CmdResult::default().with_messages(messages);
    result.add_message(CmdMessage::info(format!(
        "Wrote {} records.",
        session.db().len()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;
    use crate::store::memory::InMemoryStore;
    use crate::store::Database;

    #[test]
    fn save_writes_and_clears_dirty() {
        let mut db = Database::new();
        db.append(Record::new("@alice", 20, "world", 1_700_000_000));
        let mut session = Session::new(db);
        session.mark_dirty();
        let mut store = InMemoryStore::new();

        let result = run(&mut session, &mut store).unwrap();

        assert!(!session.is_dirty());
        assert_eq!(store.contents(), "@alice,20,world,1700000000\n");
        assert_eq!(result.messages.last().unwrap().content, "Wrote 1 records.");
    }

    #[test]
    fn saving_empty_store_truncates() {
        let mut session = Session::new(Database::new());
        let mut store = InMemoryStore::with_contents("@old,1,x,1\n");

        run(&mut session, &mut store).unwrap();
        assert_eq!(store.contents(), "");
        assert_eq!(store.saves(), 1);
    }
}

use notes_core::Partition;

use crate::commands::common::{
    list_partition, note_to_list_item, open_store, print_notes, NoteListItem,
};
use crate::error::CliError;

pub async fn run_list(api_url: Option<String>, deleted: bool, as_json: bool) -> Result<(), CliError> {
    let store = open_store(api_url)?;
    let notes = list_partition(&store, Partition::from_show_deleted(deleted)).await?;

    if as_json {
        let json_items = notes
            .iter()
            .map(note_to_list_item)
            .collect::<Vec<NoteListItem>>();
        println!("{}", serde_json::to_string_pretty(&json_items)?);
    } else {
        print_notes(&notes.iter().collect::<Vec<_>>());
    }

    Ok(())
}

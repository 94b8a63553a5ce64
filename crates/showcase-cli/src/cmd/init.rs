use showcase_core::config::Config;
use showcase_core::entry::Collection;
use showcase_core::store::CatalogStore;

use crate::output::print_json;

pub fn run(config: &Config, json: bool) -> anyhow::Result<()> {
    let store = CatalogStore::from_config(config);

    let mut created = Vec::new();
    for &collection in Collection::all() {
        if store.ensure_initialized(collection)? {
            created.push(collection);
        }
    }

    if json {
        print_json(&serde_json::json!({
            "data_dir": store.data_dir(),
            "created": created,
        }))?;
        return Ok(());
    }

    println!("Catalog data in: {}", store.data_dir().display());
    for &collection in Collection::all() {
        let state = if created.contains(&collection) {
            "created"
        } else {
            "exists"
        };
        println!("  {:<16} {state}", collection.file_name());
    }
    Ok(())
}

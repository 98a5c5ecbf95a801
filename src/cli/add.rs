//! `tido add` - 不进入 TUI 直接追加待办

use crate::operations::todos::TodoStore;

pub fn execute(text: &str) {
    let (mut store, _) = match TodoStore::open() {
        Ok(pair) => pair,
        Err(e) => {
            eprintln!("Failed to open todo store: {}", e);
            std::process::exit(1);
        }
    };

    match store.add(text) {
        Ok(id) => println!("Added #{}: {}", id, text.trim()),
        Err(e) => {
            eprintln!("Failed to add todo: {}", e);
            std::process::exit(1);
        }
    }
}

//! `tido reset` - 清除本地缓存

use crate::storage;

pub fn execute() {
    match storage::todos::clear_todos() {
        Ok(true) => println!("Local cache cleared. Next start refetches the remote list."),
        Ok(false) => println!("No local cache to clear."),
        Err(e) => {
            eprintln!("Failed to clear local cache: {}", e);
            std::process::exit(1);
        }
    }
}

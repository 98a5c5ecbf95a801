//! `tido list` - 打印本地待办列表

use crate::storage;

pub fn execute() {
    let todos = match storage::todos::load_todos() {
        Ok(Some(todos)) => todos,
        Ok(None) => {
            println!("No local cache yet. Run `tido` to fetch the initial list.");
            return;
        }
        Err(e) => {
            eprintln!("Failed to read local todos: {}", e);
            std::process::exit(1);
        }
    };

    if todos.is_empty() {
        println!("No todos.");
        return;
    }

    for todo in &todos {
        let mark = if todo.completed { "x" } else { " " };
        println!("[{}] #{:<4} {}", mark, todo.id, todo.todo);
    }
}

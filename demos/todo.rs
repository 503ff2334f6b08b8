//! Todo List
//!
//! This example declares a todo list with the `combine_handlers!` macro.
//! Todo ids come from an `IdSequence` owned by the code that creates
//! actions, so handlers stay pure.
//!
//! Run with: cargo run --example todo

use instant_reducer::{combine_handlers, Action};
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Debug, Default)]
struct State {
    todos: Vec<Todo>,
}

#[derive(Clone, Debug)]
struct Todo {
    complete: bool,
    id: u64,
    title: String,
}

#[derive(Serialize, Deserialize)]
struct NewTodo {
    id: u64,
    title: String,
}

/// Hands out todo ids, starting at 1.
struct IdSequence {
    next: u64,
}

impl IdSequence {
    fn new() -> Self {
        Self { next: 1 }
    }

    fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }
}

fn print_todos(state: &State) {
    for todo in &state.todos {
        let mark = if todo.complete { "x" } else { " " };
        println!("  [{mark}] #{} {}", todo.id, todo.title);
    }
    println!();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Todo List Example ===\n");

    let todo = combine_handlers! {
        namespace: "TodoApp",
        initial: State::default,
        handlers: {
            create(state: State, new: NewTodo) {
                let mut todos = state.todos;
                todos.push(Todo { complete: false, id: new.id, title: new.title });
                State { todos }
            },
            remove(state: State, id: u64) {
                State {
                    todos: state.todos.into_iter().filter(|todo| todo.id != id).collect(),
                }
            },
            toggle(state: State, id: u64) {
                State {
                    todos: state
                        .todos
                        .into_iter()
                        .map(|todo| {
                            if todo.id == id {
                                Todo { complete: !todo.complete, ..todo }
                            } else {
                                todo
                            }
                        })
                        .collect(),
                }
            },
        }
    }?;

    let mut ids = IdSequence::new();
    let mut actions: Vec<Action> = Vec::new();
    for title in ["Buy milk", "Write docs", "Walk the dog"] {
        actions.push(todo.actions.create_with(
            "create",
            NewTodo {
                id: ids.next_id(),
                title: title.to_string(),
            },
        )?);
    }
    actions.push(todo.actions.create_with("toggle", 2)?);
    actions.push(todo.actions.create_with("remove", 1)?);

    let mut state = None;
    for action in &actions {
        let next = todo.reducer.reduce(state, action);
        println!("{}", serde_json::to_string(action)?);
        print_todos(&next);
        state = Some(next);
    }

    println!("=== Example Complete ===");
    Ok(())
}

//! A todo list built from the macro, with ids owned by the caller.

use instant_reducer::{combine_handlers, Action, CombinedHandlers};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq)]
struct State {
    todos: Vec<Todo>,
}

#[derive(Clone, Debug, PartialEq)]
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

struct IdSequence(u64);

impl IdSequence {
    fn next_id(&mut self) -> u64 {
        let id = self.0;
        self.0 += 1;
        id
    }
}

fn todo_app() -> CombinedHandlers<State> {
    let app = combine_handlers! {
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
    };
    app.unwrap()
}

fn create(app: &CombinedHandlers<State>, ids: &mut IdSequence, title: &str) -> Action {
    app.actions
        .create_with(
            "create",
            NewTodo {
                id: ids.next_id(),
                title: title.to_string(),
            },
        )
        .unwrap()
}

#[test]
fn creates_toggles_and_removes_todos() {
    let app = todo_app();
    let mut ids = IdSequence(1);

    let state = app.reducer.reduce(None, &create(&app, &mut ids, "Write tests"));
    let state = app.reducer.reduce(Some(state), &create(&app, &mut ids, "Ship it"));
    assert_eq!(state.todos.len(), 2);
    assert_eq!(state.todos[1].id, 2);

    let toggle = app.actions.create_with("toggle", 1).unwrap();
    let state = app.reducer.reduce(Some(state), &toggle);
    assert!(state.todos[0].complete);
    assert!(!state.todos[1].complete);

    let remove = app.actions.create_with("remove", 1).unwrap();
    let state = app.reducer.reduce(Some(state), &remove);
    assert_eq!(
        state.todos,
        vec![Todo {
            complete: false,
            id: 2,
            title: "Ship it".to_string(),
        }]
    );
}

#[test]
fn separate_sequences_do_not_share_ids() {
    let app = todo_app();
    let mut first = IdSequence(1);
    let mut second = IdSequence(1);

    let a = app.reducer.reduce(None, &create(&app, &mut first, "a"));
    let b = app.reducer.reduce(None, &create(&app, &mut second, "b"));

    assert_eq!(a.todos[0].id, b.todos[0].id);
}

#[test]
fn every_todo_action_needs_a_payload() {
    let app = todo_app();

    for key in ["create", "remove", "toggle"] {
        assert!(app.actions.get(key).unwrap().takes_payload());
        assert!(app.actions.create(key).is_err());
    }
}

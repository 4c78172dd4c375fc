//! In-memory authoritative collection of todos and users.
//!
//! # Design
//! Records live in `IndexMap`s keyed by id so lookups are O(1) while listing
//! keeps insertion order. Filtered listings are plain linear scans.
//!
//! The store is synchronous and has no locking of its own. Callers that share
//! it across tasks wrap it in a lock; concurrent writers to the same todo then
//! race with last-write-wins semantics.

use std::sync::Arc;

use indexmap::IndexMap;
use uuid::Uuid;

use crate::clock::Clock;
use crate::error::{StoreError, CREATED_COMPLETED, NAME_REQUIRED, STATUS_REQUIRED};
use crate::types::{NewTodo, ReplaceTodo, Todo, TodoDetails, TodoStatus, TodoStatusUpdate, User};

pub struct TodoStore {
    todos: IndexMap<Uuid, Todo>,
    users: IndexMap<Uuid, User>,
    clock: Arc<dyn Clock>,
}

impl TodoStore {
    /// Create an empty store. Timestamps on created and mutated todos are
    /// taken from `clock`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            todos: IndexMap::new(),
            users: IndexMap::new(),
            clock,
        }
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// True when the store holds neither todos nor users.
    pub fn has_no_records(&self) -> bool {
        self.todos.is_empty() && self.users.is_empty()
    }

    // --- queries ---

    pub fn list_all(&self) -> Vec<Todo> {
        self.todos.values().cloned().collect()
    }

    pub fn list_completed(&self) -> Vec<Todo> {
        self.list_by_status(TodoStatus::Completed)
    }

    pub fn list_active(&self) -> Vec<Todo> {
        self.list_by_status(TodoStatus::Active)
    }

    pub fn list_by_status(&self, status: TodoStatus) -> Vec<Todo> {
        self.todos
            .values()
            .filter(|todo| todo.status() == status)
            .cloned()
            .collect()
    }

    pub fn get(&self, id: Uuid) -> Result<&Todo, StoreError> {
        self.todos.get(&id).ok_or_else(|| StoreError::todo_not_found(id))
    }

    /// The todo together with its owner's name. A dangling `user_id` is not
    /// an error; the name is simply absent.
    pub fn details(&self, id: Uuid) -> Result<TodoDetails, StoreError> {
        let todo = self.get(id)?;
        let user_full_name = todo
            .user_id
            .and_then(|user_id| self.users.get(&user_id))
            .map(|user| user.full_name.clone());
        Ok(TodoDetails {
            id: todo.id,
            name: todo.name.clone(),
            is_completed: todo.is_completed,
            user_full_name,
        })
    }

    // --- mutations ---

    /// Validate and insert a new todo, generating its id when the payload
    /// does not carry one.
    pub fn create(&mut self, input: NewTodo) -> Result<Todo, StoreError> {
        validate_name(&input.name)?;
        if input.is_completed {
            return Err(StoreError::invalid(CREATED_COMPLETED));
        }

        let id = input.id.unwrap_or_else(Uuid::new_v4);
        if self.todos.contains_key(&id) {
            return Err(StoreError::Conflict(id));
        }

        let now = self.clock.now();
        let todo = Todo {
            id,
            name: input.name,
            is_completed: false,
            created_at: now,
            updated_at: now,
            user_id: input.user_id,
        };
        self.todos.insert(id, todo.clone());
        Ok(todo)
    }

    /// Overwrite name and completion flag.
    ///
    /// Fails with `NotFound` for an unknown `id`, and with `ValidationFailed`
    /// when the new name is blank, same rule as `create`. The store is left
    /// untouched in both cases.
    pub fn replace(&mut self, id: Uuid, input: ReplaceTodo) -> Result<Todo, StoreError> {
        self.get(id)?;
        validate_name(&input.name)?;
        self.modify(id, |todo| {
            todo.name = input.name;
            todo.is_completed = input.is_completed;
        })
    }

    /// A missing payload is rejected before the id is looked up.
    pub fn update_status(
        &mut self,
        id: Uuid,
        update: Option<TodoStatusUpdate>,
    ) -> Result<Todo, StoreError> {
        let update = update.ok_or_else(|| StoreError::invalid(STATUS_REQUIRED))?;
        self.modify(id, |todo| todo.is_completed = update.is_completed)
    }

    pub fn mark_completed(&mut self, id: Uuid) -> Result<Todo, StoreError> {
        self.modify(id, |todo| todo.is_completed = true)
    }

    pub fn mark_active(&mut self, id: Uuid) -> Result<Todo, StoreError> {
        self.modify(id, |todo| todo.is_completed = false)
    }

    pub fn delete(&mut self, id: Uuid) -> Result<Todo, StoreError> {
        self.todos
            .shift_remove(&id)
            .ok_or_else(|| StoreError::todo_not_found(id))
    }

    fn modify(&mut self, id: Uuid, apply: impl FnOnce(&mut Todo)) -> Result<Todo, StoreError> {
        let now = self.clock.now();
        let todo = self
            .todos
            .get_mut(&id)
            .ok_or_else(|| StoreError::todo_not_found(id))?;
        apply(todo);
        todo.updated_at = now;
        Ok(todo.clone())
    }

    /// Insert a fully formed todo, replacing any record with the same id.
    /// Used by seeding, which supplies its own ids and timestamps.
    pub(crate) fn insert_todo(&mut self, todo: Todo) {
        self.todos.insert(todo.id, todo);
    }

    // --- users ---

    pub fn insert_user(&mut self, user: User) {
        self.users.insert(user.id, user);
    }

    pub fn list_users(&self) -> Vec<User> {
        self.users.values().cloned().collect()
    }

    pub fn get_user(&self, id: Uuid) -> Result<&User, StoreError> {
        self.users.get(&id).ok_or_else(|| StoreError::user_not_found(id))
    }

    pub fn todos_for_user(&self, user_id: Uuid) -> Result<Vec<Todo>, StoreError> {
        self.get_user(user_id)?;
        Ok(self
            .todos
            .values()
            .filter(|todo| todo.user_id == Some(user_id))
            .cloned()
            .collect())
    }
}

fn validate_name(name: &str) -> Result<(), StoreError> {
    if name.trim().is_empty() {
        return Err(StoreError::invalid(NAME_REQUIRED));
    }
    Ok(())
}

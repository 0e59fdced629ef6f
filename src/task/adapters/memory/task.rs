//! In-memory repository for tasks.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::task::{
    domain::{Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use crate::user::domain::UserId;

/// Thread-safe in-memory task repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: HashMap<TaskId, Task>,
    assignee_index: HashMap<UserId, Vec<TaskId>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> TaskRepositoryResult<RwLockReadGuard<'_, InMemoryTaskState>> {
        self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> TaskRepositoryResult<RwLockWriteGuard<'_, InMemoryTaskState>> {
        self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

fn index_assignee(state: &mut InMemoryTaskState, task: &Task) {
    if let Some(user_id) = task.assigned_to() {
        state
            .assignee_index
            .entry(user_id)
            .or_default()
            .push(task.id());
    }
}

/// Removes a task ID from the assignee index, cleaning up the entry if empty.
fn unindex_assignee(state: &mut InMemoryTaskState, task: &Task) {
    let Some(user_id) = task.assigned_to() else {
        return;
    };
    if let Some(ids) = state.assignee_index.get_mut(&user_id) {
        ids.retain(|id| *id != task.id());
        if ids.is_empty() {
            state.assignee_index.remove(&user_id);
        }
    }
}

/// Sorts tasks oldest first, breaking timestamp ties by identifier.
fn sort_by_creation(tasks: &mut [Task]) {
    tasks.sort_by(|a, b| {
        a.created_at()
            .cmp(&b.created_at())
            .then_with(|| a.id().into_inner().cmp(&b.id().into_inner()))
    });
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.write()?;
        if state.tasks.contains_key(&task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }

        index_assignee(&mut state, task);
        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.write()?;

        let old_task = state
            .tasks
            .get(&task.id())
            .ok_or(TaskRepositoryError::NotFound(task.id()))?
            .clone();

        unindex_assignee(&mut state, &old_task);
        index_assignee(&mut state, task);
        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let mut state = self.write()?;
        let removed = state
            .tasks
            .remove(&id)
            .ok_or(TaskRepositoryError::NotFound(id))?;
        unindex_assignee(&mut state, &removed);
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.read()?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn find_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.read()?;
        let mut tasks: Vec<Task> = state.tasks.values().cloned().collect();
        sort_by_creation(&mut tasks);
        Ok(tasks)
    }

    async fn find_by_assignee(&self, user_id: UserId) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.read()?;
        let mut tasks: Vec<Task> = state
            .assignee_index
            .get(&user_id)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| state.tasks.get(id).cloned())
                    .collect()
            })
            .unwrap_or_default();
        sort_by_creation(&mut tasks);
        Ok(tasks)
    }
}

use crate::api::TaskApi;
use crate::error::AppError;
use crate::models::identity::Identity;
use crate::models::task::WeddingTask;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskProgress {
    pub total: usize,
    pub completed: usize,
}

impl TaskProgress {
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        ((self.completed * 100) / self.total) as u8
    }
}

/// Tasks for the signed-in couple's wedding, due-soonest first. The tasks
/// screen cannot operate without a resolved wedding reference.
pub async fn tasks_for_identity<A>(api: &A, identity: &Identity) -> Result<Vec<WeddingTask>, AppError>
where
    A: TaskApi + Sync,
{
    let wedding_id = identity
        .wedding_id
        .as_deref()
        .ok_or_else(|| AppError::MissingPrerequisite("no wedding is linked to this account".to_string()))?;

    let mut tasks = api.tasks_by_wedding(wedding_id).await?;
    tasks.sort_by(compare_due_dates);
    Ok(tasks)
}

fn compare_due_dates(a: &WeddingTask, b: &WeddingTask) -> Ordering {
    // Undated tasks sink to the bottom of the list.
    match (a.due_at(), b.due_at()) {
        (Some(left), Some(right)) => left.cmp(&right),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Flip completion through a read-merge-write so unmodeled fields survive.
pub async fn toggle_task_completion<A>(api: &A, task_id: &str) -> Result<WeddingTask, AppError>
where
    A: TaskApi + Sync,
{
    let mut task = api.get_task_by_id(task_id).await?;
    task.completed = !task.completed;
    api.update_task(task_id, &task).await
}

pub fn progress(tasks: &[WeddingTask]) -> TaskProgress {
    TaskProgress {
        total: tasks.len(),
        completed: tasks.iter().filter(|t| t.completed).count(),
    }
}

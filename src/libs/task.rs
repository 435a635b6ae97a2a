#[derive(Debug, Clone)]
pub struct Task {
    pub id: Option<i64>,
    pub created_at: Option<String>,
    pub name: String,
    pub is_completed: bool,
    /// Accumulated completion time in milliseconds.
    pub completion_time: i64,
}

impl Task {
    pub fn new(name: &str) -> Self {
        Task {
            id: None,
            created_at: None,
            name: name.to_string(),
            is_completed: false,
            completion_time: 0,
        }
    }
}

#[derive(Debug, Clone)]
pub enum TaskFilter {
    All,
    Today,
}

use super::calendar_model::CalendarEvent;

/// Trait for read-only calendar access.
pub trait CalendarRepositoryTrait: Send + Sync {
    fn list(&self) -> Vec<CalendarEvent>;
}

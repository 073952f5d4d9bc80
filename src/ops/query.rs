use crate::model::filter::StatusFilter;
use crate::model::task::Task;

/// Tasks passing the status filter, in list order
pub fn filter_by_status<'a>(tasks: impl IntoIterator<Item = &'a Task>, filter: StatusFilter) -> Vec<&'a Task> {
    tasks
        .into_iter()
        .filter(|t| filter.accepts(t.completed))
        .collect()
}

/// Tasks whose text contains `query`, ignoring case. An empty query matches all.
pub fn filter_by_search<'a>(tasks: impl IntoIterator<Item = &'a Task>, query: &str) -> Vec<&'a Task> {
    if query.is_empty() {
        return tasks.into_iter().collect();
    }
    let needle = query.to_lowercase();
    tasks
        .into_iter()
        .filter(|t| t.text.to_lowercase().contains(&needle))
        .collect()
}

/// The visible subsequence: status filter, then search
pub fn visible_tasks<'a>(tasks: &'a [Task], filter: StatusFilter, query: &str) -> Vec<&'a Task> {
    filter_by_search(filter_by_status(tasks, filter), query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::Priority;

    fn tasks() -> Vec<Task> {
        let mut out = vec![
            Task::new(1, "Buy milk", Priority::Low, None),
            Task::new(2, "Call Mom", Priority::High, None),
            Task::new(3, "buy stamps", Priority::Medium, None),
            Task::new(4, "Write report", Priority::Low, None),
        ];
        out[1].completed = true;
        out[2].completed = true;
        out
    }

    fn ids(list: &[&Task]) -> Vec<i64> {
        list.iter().map(|t| t.id).collect()
    }

    #[test]
    fn status_filters() {
        let tasks = tasks();
        assert_eq!(ids(&filter_by_status(&tasks, StatusFilter::All)), vec![1, 2, 3, 4]);
        assert_eq!(ids(&filter_by_status(&tasks, StatusFilter::Active)), vec![1, 4]);
        assert_eq!(ids(&filter_by_status(&tasks, StatusFilter::Completed)), vec![2, 3]);
    }

    #[test]
    fn active_and_completed_partition_the_list() {
        let tasks = tasks();
        let mut merged = ids(&filter_by_status(&tasks, StatusFilter::Active));
        let completed = ids(&filter_by_status(&tasks, StatusFilter::Completed));
        assert!(merged.iter().all(|id| !completed.contains(id)));
        merged.extend(completed);
        merged.sort();
        assert_eq!(merged, vec![1, 2, 3, 4]);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let tasks = tasks();
        assert_eq!(ids(&filter_by_search(&tasks, "BUY")), vec![1, 3]);
        assert_eq!(ids(&filter_by_search(&tasks, "mom")), vec![2]);
        assert_eq!(ids(&filter_by_search(&tasks, "")), vec![1, 2, 3, 4]);
        assert!(filter_by_search(&tasks, "zzz").is_empty());
    }

    #[test]
    fn search_query_is_not_trimmed() {
        let tasks = tasks();
        assert_eq!(ids(&filter_by_search(&tasks, " milk")), vec![1]);
        assert!(filter_by_search(&tasks, "milk ").is_empty());
    }

    #[test]
    fn visible_combines_status_and_search() {
        let tasks = tasks();
        assert_eq!(ids(&visible_tasks(&tasks, StatusFilter::Active, "buy")), vec![1]);
        assert_eq!(ids(&visible_tasks(&tasks, StatusFilter::Completed, "buy")), vec![3]);
        assert!(visible_tasks(&[], StatusFilter::All, "").is_empty());
    }
}

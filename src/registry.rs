//! Task registration as explicit data.
//!
//! Each weighted task is a [`TaskDescriptor`] record; the Goose scenario is
//! assembled from this list, so weights, tags, and metrics names live in one
//! place instead of being scattered across attribute annotations.

use std::collections::HashSet;
use std::time::Duration;

use goose::prelude::*;

use crate::tasks::{
    get_friend_list, get_last_news, get_server_list, login, post_news, post_server, put_server,
    shutdown,
};

/// Seconds a user waits between transactions, drawn uniformly.
pub const WAIT_TIME_SECS: (u64, u64) = (1, 10);

/// One weighted task: metrics name, relative selection weight, filter tag,
/// and the Goose transaction that runs it.
pub struct TaskDescriptor {
    pub name: &'static str,
    pub weight: usize,
    pub tag: &'static str,
    transaction: Transaction,
}

impl TaskDescriptor {
    fn new(name: &'static str, weight: usize, tag: &'static str, transaction: Transaction) -> Self {
        TaskDescriptor {
            name,
            weight,
            tag,
            transaction,
        }
    }

    fn into_transaction(self) -> Result<Transaction, GooseError> {
        self.transaction.set_name(self.name).set_weight(self.weight)
    }
}

/// The full task list with its declared weights (3:2:3:1:1:1, total 11).
pub fn tasks() -> Vec<TaskDescriptor> {
    vec![
        TaskDescriptor::new("GET /dreamapp/news", 3, "get_last_news", transaction!(get_last_news)),
        TaskDescriptor::new(
            "GET /dreamapp/friendlist/",
            2,
            "get_friend_list",
            transaction!(get_friend_list),
        ),
        TaskDescriptor::new("GET /dreamapp/server", 3, "get_server", transaction!(get_server_list)),
        TaskDescriptor::new("POST /dreamapp/news/post", 1, "post_news", transaction!(post_news)),
        TaskDescriptor::new(
            "POST /dreamapp/server/post",
            1,
            "post_server",
            transaction!(post_server),
        ),
        TaskDescriptor::new(
            "PUT /dreamapp/server/update/{id}",
            1,
            "put_server",
            transaction!(put_server),
        ),
    ]
}

/// Tasks surviving the tag filter; `None` keeps everything.
pub fn filtered_tasks(tags: Option<&HashSet<String>>) -> Vec<TaskDescriptor> {
    tasks()
        .into_iter()
        .filter(|task| tags.map_or(true, |allowed| allowed.contains(task.tag)))
        .collect()
}

/// Assemble the `DreamAppUser` scenario: login on start, the weighted tasks,
/// the reserved shutdown hook, and the uniform wait time.
pub fn scenario(tags: Option<&HashSet<String>>) -> Result<Scenario, GooseError> {
    let (min_wait, max_wait) = WAIT_TIME_SECS;
    let mut scenario = scenario!("DreamAppUser")
        .set_wait_time(Duration::from_secs(min_wait), Duration::from_secs(max_wait))?
        .register_transaction(transaction!(login).set_name("login").set_on_start())
        .register_transaction(transaction!(shutdown).set_name("shutdown").set_on_stop());
    for task in filtered_tasks(tags) {
        scenario = scenario.register_transaction(task.into_transaction()?);
    }
    Ok(scenario)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::distributions::{Distribution, WeightedIndex};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn declared_weights_total_eleven() {
        let weights: Vec<usize> = tasks().iter().map(|task| task.weight).collect();
        assert_eq!(weights, vec![3, 2, 3, 1, 1, 1]);
        assert_eq!(weights.iter().sum::<usize>(), 11);
    }

    #[test]
    fn tags_are_unique() {
        let descriptors = tasks();
        let tags: HashSet<&str> = descriptors.iter().map(|task| task.tag).collect();
        assert_eq!(tags.len(), descriptors.len());
    }

    #[test]
    fn weighted_selection_approximates_declared_ratios() {
        let descriptors = tasks();
        let weights: Vec<usize> = descriptors.iter().map(|task| task.weight).collect();
        let distribution = WeightedIndex::new(&weights).expect("positive weights");
        let mut rng = StdRng::seed_from_u64(42);
        let mut counts = vec![0usize; weights.len()];
        let trials = 11_000;
        for _ in 0..trials {
            counts[distribution.sample(&mut rng)] += 1;
        }
        for (count, weight) in counts.iter().zip(&weights) {
            let expected = (trials / 11 * weight) as f64;
            let observed = *count as f64;
            assert!(
                observed > expected * 0.85 && observed < expected * 1.15,
                "observed {observed} for weight {weight}, expected about {expected}"
            );
        }
    }

    #[test]
    fn tag_filter_selects_matching_tasks() {
        let only_reads: HashSet<String> = ["get_last_news", "get_server"]
            .iter()
            .map(|tag| tag.to_string())
            .collect();
        let filtered = filtered_tasks(Some(&only_reads));
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|task| only_reads.contains(task.tag)));

        assert_eq!(filtered_tasks(None).len(), 6);
    }

    #[test]
    fn scenario_builds_with_and_without_filtering() {
        assert!(scenario(None).is_ok());
        let one_tag: HashSet<String> = ["put_server".to_string()].into_iter().collect();
        assert!(scenario(Some(&one_tag)).is_ok());
    }
}

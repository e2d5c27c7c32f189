//! 批量扇出执行器
//!
//! 所有批量接口共用的并发原语：每个目标一个 future，同时发起，
//! 全部完成后按输入顺序返回结果。

use std::future::Future;

/// 对每个目标并发执行 `f`，结果顺序与输入顺序一致。
///
/// 无并发上限，无提前退出，无取消，无重试。单个目标的失败以结果值
/// 表达，不会影响其余目标。
pub async fn run_batch<T, F, Fut>(targets: Vec<T>, f: F) -> Vec<Fut::Output>
where
    F: Fn(T) -> Fut,
    Fut: Future,
{
    let futures: Vec<_> = targets.into_iter().map(f).collect();
    futures::future::join_all(futures).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test]
    async fn preserves_input_order_under_varied_latency() {
        // 第一个目标最慢，最后一个最快
        let targets = vec![("a", 30u64), ("b", 20), ("c", 10), ("d", 1)];
        let results = run_batch(targets, |(name, delay)| async move {
            tokio::time::sleep(Duration::from_millis(delay)).await;
            name
        })
        .await;
        assert_eq!(results, vec!["a", "b", "c", "d"]);
    }

    #[tokio::test]
    async fn failure_of_one_target_leaves_siblings_unchanged() {
        let targets = vec!["ok-1", "bad", "ok-2"];
        let results = run_batch(targets, |name| async move {
            if name == "bad" {
                (name, false, "boom".to_string())
            } else {
                (name, true, "Success".to_string())
            }
        })
        .await;

        assert_eq!(results[0], ("ok-1", true, "Success".to_string()));
        assert_eq!(results[1], ("bad", false, "boom".to_string()));
        assert_eq!(results[2], ("ok-2", true, "Success".to_string()));
    }

    #[tokio::test]
    async fn empty_input_yields_empty_output() {
        let results = run_batch(Vec::<u32>::new(), |n| async move { n * 2 }).await;
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn every_target_is_visited_exactly_once() {
        let counter = Arc::new(AtomicUsize::new(0));
        let targets: Vec<u32> = (0..50).collect();
        let results = run_batch(targets, |n| {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                n
            }
        })
        .await;

        assert_eq!(counter.load(Ordering::SeqCst), 50);
        assert_eq!(results, (0..50).collect::<Vec<u32>>());
    }
}

//! 随机选择能力
//!
//! 抽题需要的唯一随机能力：在 `[0, len)` 中均匀地选一个下标。
//! 生产环境使用线程随机数，测试可以注入确定性的实现。

use rand::Rng;

/// 均匀随机选择
pub trait RandomChoice: Send + Sync {
    /// 返回 `[0, len)` 中的一个下标，调用方保证 `len > 0`
    fn pick_index(&self, len: usize) -> usize;
}

/// 从切片中均匀选择一个元素，空切片返回 `None`
pub fn choose<'a, T>(rng: &dyn RandomChoice, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        None
    } else {
        items.get(rng.pick_index(items.len()))
    }
}

/// 基于 `rand::thread_rng` 的随机源
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomChoice for ThreadRandom {
    fn pick_index(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// 确定性的随机源：总是选择 `index % len`
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedChoice {
    pub index: usize,
}

impl FixedChoice {
    pub fn new(index: usize) -> Self {
        Self { index }
    }
}

impl RandomChoice for FixedChoice {
    fn pick_index(&self, len: usize) -> usize {
        self.index % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_random_stays_in_range() {
        let rng = ThreadRandom;
        for len in 1..20 {
            for _ in 0..50 {
                assert!(rng.pick_index(len) < len);
            }
        }
    }

    #[test]
    fn test_thread_random_reaches_every_index() {
        let rng = ThreadRandom;
        let mut seen = [false; 4];
        for _ in 0..1000 {
            seen[rng.pick_index(4)] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_fixed_choice_wraps() {
        let rng = FixedChoice::new(5);
        assert_eq!(choose(&rng, &[10, 11, 12]), Some(&12));
        assert_eq!(choose::<i32>(&rng, &[]), None);
    }
}

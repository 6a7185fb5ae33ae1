//! 分页
//!
//! 固定每页 10 条；请求的页为空时返回 `NotFound` 而不是空列表，
//! 以便调用方区分"页码越界"和"本来就没有数据"。

use crate::error::{AppError, AppResult};

/// 每页题目数量
pub const QUESTIONS_PER_PAGE: usize = 10;

/// 解析 `?page=` 参数，缺失或不是整数时视为第 1 页
pub fn parse_page_number(raw: Option<&str>) -> i64 {
    raw.and_then(|v| v.trim().parse().ok()).unwrap_or(1)
}

/// 取出第 `page_number` 页（从 1 开始），窗口为 `[(p-1)*10, p*10)`
///
/// 页码不预先校验上限，窗口为空（包括 `page_number <= 0`）即 `NotFound`。
pub fn paginate<T: Clone>(items: &[T], page_number: i64) -> AppResult<Vec<T>> {
    let window = page_window(items.len(), page_number)
        .ok_or_else(|| AppError::not_found(format!("第 {} 页没有数据", page_number)))?;
    Ok(items[window].to_vec())
}

fn page_window(len: usize, page_number: i64) -> Option<std::ops::Range<usize>> {
    let index = usize::try_from(page_number.checked_sub(1)?).ok()?;
    let start = index.checked_mul(QUESTIONS_PER_PAGE)?;
    if start >= len {
        return None;
    }
    let end = start.saturating_add(QUESTIONS_PER_PAGE).min(len);
    Some(start..end)
}

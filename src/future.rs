use std::future::Future;

/// Like futures::future::select_ok, but evaluates each future sequentially, instead of in parallel.
/// Returns the last error, or `if_empty()` if there were no futures to try.
pub async fn first_ok<T, E, F>(
    iter: impl IntoIterator<Item = F>,
    if_empty: impl FnOnce() -> E,
) -> Result<T, E>
where
    F: Future<Output = Result<T, E>>,
{
    let mut last_error = None;
    for fut in iter {
        match fut.await {
            Ok(x) => return Ok(x),
            Err(e) => last_error = Some(e),
        }
    }
    Err(last_error.unwrap_or_else(if_empty))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::ready;

    #[tokio::test]
    async fn first_success_wins() {
        let futs = [ready(Err("a")), ready(Ok(1)), ready(Ok(2))];
        assert_eq!(first_ok(futs, || "empty").await, Ok(1));
    }

    #[tokio::test]
    async fn last_error_if_all_fail() {
        let futs = [ready(Err::<u8, _>("a")), ready(Err("b"))];
        assert_eq!(first_ok(futs, || "empty").await, Err("b"));
    }

    #[tokio::test]
    async fn empty() {
        let futs: [std::future::Ready<Result<u8, &str>>; 0] = [];
        assert_eq!(first_ok(futs, || "empty").await, Err("empty"));
    }
}

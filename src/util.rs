#[inline]
#[cfg_attr(debug_assertions, track_caller)]
pub unsafe fn unreachable_debugchecked(msg: &str) -> ! {
    #[cfg(debug_assertions)]
    {
        // Most of those panics are in a tree corrupton context, so we should
        // just abort the process to prevent unwinders from collecting corrupted data
        abort_on_panic(|| unreachable!("{}", msg))
    }
    #[cfg(not(debug_assertions))]
    {
        let _ = msg;
        core::hint::unreachable_unchecked()
    }
}

#[inline]
#[cfg(debug_assertions)]
pub fn abort_on_panic<R>(f: impl FnOnce() -> R) -> R {
    std::panic::catch_unwind(
        std::panic::AssertUnwindSafe(f)
    ).unwrap_or_else(|_| std::process::abort())
}

/// Returns the children of the specified slot, treating out-of-range property indices as empty slots.
#[inline]
pub fn slot<'a, C>(children: Option<&'a [C]>) -> &'a [C] {
    children.unwrap_or(&[])
}

//! Best-effort process memory introspection (spec.md §6.2's `peakRssKiB`).

/// Reads `VmHWM` (peak resident set size) from `/proc/self/status`.
/// Returns 0 if the file can't be read or parsed (non-Linux, sandboxed, etc).
#[cfg(target_os = "linux")]
pub fn peak_rss_kib() -> u64 {
    let contents = match std::fs::read_to_string("/proc/self/status") {
        Ok(c) => c,
        Err(_) => return 0,
    };

    for line in contents.lines() {
        if let Some(rest) = line.strip_prefix("VmHWM:") {
            if let Some(kib) = rest.split_whitespace().next() {
                if let Ok(v) = kib.parse::<u64>() {
                    return v;
                }
            }
        }
    }
    0
}

#[cfg(not(target_os = "linux"))]
pub fn peak_rss_kib() -> u64 {
    0
}
